//! Forward resolution with a bounded timeout.

use std::time::Duration;

use hickory_resolver::TokioAsyncResolver;
use log::{debug, info, warn};

use crate::initialization::init_resolver;

/// Result of probing one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolvability {
    /// At least one address was returned
    Resolvable,
    /// NXDOMAIN, no records, network error or timeout
    NotResolvable,
}

/// Anything that can answer "does this host resolve?".
#[allow(async_fn_in_trait)]
pub trait HostResolver {
    /// Returns whether `host` resolved to at least one address.
    ///
    /// Implementations must not fail: every error maps to `NotResolvable`.
    /// They need not bound their own run time; [`probe_domain`] does.
    async fn resolve(&self, host: &str) -> Resolvability;
}

/// `hickory-resolver` backed prober.
pub struct DnsResolver {
    resolver: TokioAsyncResolver,
}

impl DnsResolver {
    /// Creates a prober using the platform resolver configuration, with
    /// `timeout` as the per-query timeout.
    pub fn new(timeout: Duration) -> Self {
        Self {
            resolver: init_resolver(timeout),
        }
    }
}

impl HostResolver for DnsResolver {
    async fn resolve(&self, host: &str) -> Resolvability {
        // Trailing dot: query the name as-is, never relative to a search domain
        let fqdn = format!("{host}.");
        match self.resolver.lookup_ip(fqdn.as_str()).await {
            Ok(response) => match response.iter().next() {
                Some(ip) => {
                    debug!("{host} resolved to {ip}");
                    Resolvability::Resolvable
                }
                None => Resolvability::NotResolvable,
            },
            Err(e) => {
                debug!("DNS lookup for {host} failed: {e}");
                Resolvability::NotResolvable
            }
        }
    }
}

/// Probes `domain` and logs the outcome.
///
/// The lookup is cut off after `timeout`, which counts as not resolvable;
/// this bounds the whole lookup including retries across name servers. The
/// caller blocks the domain either way; this only reports.
pub async fn probe_domain<R: HostResolver>(
    resolver: &R,
    domain: &str,
    timeout: Duration,
) -> Resolvability {
    let outcome = match tokio::time::timeout(timeout, resolver.resolve(domain)).await {
        Ok(outcome) => outcome,
        Err(_) => {
            debug!("DNS lookup for {domain} timed out after {timeout:?}");
            Resolvability::NotResolvable
        }
    };
    match outcome {
        Resolvability::Resolvable => info!("Resolvable, blocking: {domain}"),
        Resolvability::NotResolvable => warn!("Not resolvable, blocking anyway: {domain}"),
    }
    outcome
}
