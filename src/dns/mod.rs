//! DNS resolvability probing.
//!
//! The probe is purely diagnostic: it logs whether each candidate domain
//! currently resolves, and never influences what gets blocked.
//!
//! Lookups go through the [`HostResolver`] trait so the pipeline can run with
//! the real `hickory-resolver` backend or with a stub in tests.

mod resolution;

// Re-export public API
pub use resolution::{probe_domain, DnsResolver, HostResolver, Resolvability};
