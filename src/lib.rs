//! phishblock library: builds a phishing domain blocklist from spam mail
//!
//! This library scans a directory of spam messages, extracts the URLs they
//! reference, reduces them to bare domains, drops whitelisted ones and merges
//! the rest into a newline-delimited blocklist file consumed by a DNS blocker
//! (Pi-hole, AdGuard Home, dnsmasq, ...).
//!
//! # Example
//!
//! ```no_run
//! use phishblock::{Config, run_scan};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     maildir: PathBuf::from("/home/me/Maildir/.Spam/cur"),
//!     output: PathBuf::from("/etc/pihole/phishing.txt"),
//!     ..Default::default()
//! };
//!
//! let report = run_scan(config).await?;
//! println!("{} domains blocked ({} new)", report.total_blocked, report.added());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The DNS probe runs on Tokio. Use `#[tokio::main]` in your application or
//! call `run_scan` from within an async context.

#![warn(missing_docs)]

mod app;
pub mod blocklist;
pub mod config;
pub mod dns;
mod domain;
mod error_handling;
pub mod initialization;
pub mod mail;
pub mod whitelist;

// Re-export public API
pub use config::{Cli, Config, LogFormat, LogLevel};
pub use domain::{is_valid_domain, normalize_domain};
pub use error_handling::{InitializationError, ProcessingStats, SkipKind, SkipReason, StorageError};
pub use run::{run_scan, run_scan_with_resolver, ScanReport};
pub use whitelist::Whitelist;

// Internal run module (contains the pipeline)
mod run {
    use std::collections::{BTreeSet, HashSet};
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    use anyhow::{Context, Result};
    use log::info;

    use crate::app::{print_skip_statistics, print_stage_statistics};
    use crate::blocklist::merge_blocklist;
    use crate::config::Config;
    use crate::dns::{probe_domain, DnsResolver, HostResolver, Resolvability};
    use crate::domain::{is_valid_domain, normalize_domain};
    use crate::mail::scan_maildir;
    use crate::whitelist::Whitelist;

    /// Results of a blocklist run.
    ///
    /// Contains the counts of every pipeline stage and the merge outcome.
    #[derive(Debug, Clone)]
    pub struct ScanReport {
        /// Mail files read successfully
        pub mails_read: usize,
        /// Mail files skipped (unreadable, not a regular file)
        pub mails_skipped: usize,
        /// Distinct URL tokens found across all mails
        pub urls_found: usize,
        /// Distinct domains that passed validation
        pub valid_domains: usize,
        /// Entries in the whitelist
        pub whitelist_entries: usize,
        /// Valid domains dropped by the whitelist
        pub whitelisted: usize,
        /// Domains blocked by this run (valid and not whitelisted)
        pub candidates: usize,
        /// Candidates that resolved during the DNS probe
        pub resolvable: usize,
        /// Candidates that did not resolve during the DNS probe
        pub unresolvable: usize,
        /// Candidates not probed because the DNS check was disabled
        pub unchecked: usize,
        /// Entries in the blocklist file before this run
        pub previously_blocked: usize,
        /// Entries in the blocklist file after this run
        pub total_blocked: usize,
        /// Path of the blocklist file
        pub output_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    impl ScanReport {
        /// Number of domains this run added to the blocklist file.
        pub fn added(&self) -> usize {
            self.total_blocked - self.previously_blocked
        }
    }

    /// Runs the blocklist pipeline with the provided configuration.
    ///
    /// Reads every mail in `config.maildir`, extracts and validates domains,
    /// drops whitelisted ones, probes the rest with DNS (unless disabled) and
    /// merges them into `config.output`.
    ///
    /// # Errors
    ///
    /// Unreadable mails and failed lookups are not errors. This function
    /// only fails if the whitelist or existing blocklist exists but cannot be
    /// read, or if the blocklist cannot be written.
    pub async fn run_scan(config: Config) -> Result<ScanReport> {
        if config.dns_check {
            let resolver = DnsResolver::new(Duration::from_secs(config.dns_timeout_seconds));
            run_scan_with_resolver(&config, Some(&resolver)).await
        } else {
            run_scan_with_resolver::<DnsResolver>(&config, None).await
        }
    }

    /// Runs the pipeline with a caller-supplied resolver.
    ///
    /// With `resolver` set to `None` the DNS probe is skipped entirely; the
    /// blocklist is the same either way.
    ///
    /// # Errors
    ///
    /// See [`run_scan`].
    pub async fn run_scan_with_resolver<R: HostResolver>(
        config: &Config,
        resolver: Option<&R>,
    ) -> Result<ScanReport> {
        let start_time = Instant::now();

        info!("Reading spam mails from {}", config.maildir.display());
        let scan = scan_maildir(&config.maildir);
        info!(
            "Found {} URL(s) in {} mail(s)",
            scan.urls.len(),
            scan.mails_read
        );

        let domains: HashSet<String> = scan
            .urls
            .iter()
            .map(|url| normalize_domain(url))
            .filter(|domain| is_valid_domain(domain))
            .collect();
        info!("Extracted {} valid domain(s)", domains.len());

        let whitelist = Whitelist::load(&config.whitelist).context("Failed to load whitelist")?;
        if !whitelist.is_empty() {
            info!("Whitelist loaded ({} entries)", whitelist.len());
        }

        let candidates: BTreeSet<String> = domains
            .iter()
            .filter(|domain| !whitelist.contains(domain))
            .cloned()
            .collect();
        info!("{} domain(s) left after whitelist filter", candidates.len());

        let mut resolvable = 0;
        let mut unresolvable = 0;
        let mut unchecked = 0;
        if let Some(resolver) = resolver {
            let timeout = Duration::from_secs(config.dns_timeout_seconds);
            for domain in &candidates {
                match probe_domain(resolver, domain, timeout).await {
                    Resolvability::Resolvable => resolvable += 1,
                    Resolvability::NotResolvable => unresolvable += 1,
                }
            }
        } else {
            info!("DNS check disabled, blocking without probing");
            unchecked = candidates.len();
        }

        let merge = merge_blocklist(&config.output, &candidates).with_context(|| {
            format!("Failed to update blocklist {}", config.output.display())
        })?;

        let report = ScanReport {
            mails_read: scan.mails_read,
            mails_skipped: scan.mails_skipped(),
            urls_found: scan.urls.len(),
            valid_domains: domains.len(),
            whitelist_entries: whitelist.len(),
            whitelisted: domains.len() - candidates.len(),
            candidates: candidates.len(),
            resolvable,
            unresolvable,
            unchecked,
            previously_blocked: merge.previous,
            total_blocked: merge.total,
            output_path: config.output.clone(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        };

        print_skip_statistics(&scan.stats);
        print_stage_statistics(&report);

        Ok(report)
    }
}
