//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use log::{debug, warn};

use crate::config::DNS_ATTEMPTS;

/// Initializes the DNS resolver for hostname lookups.
///
/// Uses the platform resolver configuration (`/etc/resolv.conf` on Unix) so the
/// probe sees the same answers as the blocker consuming the output file. Falls
/// back to the built-in default configuration (Google DNS) when the system
/// configuration cannot be read.
///
/// Timeouts are configured to prevent hanging on slow or unresponsive DNS servers.
///
/// # Arguments
///
/// * `timeout` - Per-query timeout handed to the resolver
///
/// # Returns
///
/// A configured `TokioAsyncResolver`.
pub fn init_resolver(timeout: Duration) -> TokioAsyncResolver {
    let (config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            warn!("Failed to read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.timeout = timeout;
    opts.attempts = DNS_ATTEMPTS; // Fewer retries to fail faster
    // Domains from mail are always fully qualified; never append search domains
    opts.ndots = 0;
    debug!(
        "DNS resolver configured with {} name server(s), timeout {:?}",
        config.name_servers().len(),
        timeout
    );

    TokioAsyncResolver::tokio(config, opts)
}
