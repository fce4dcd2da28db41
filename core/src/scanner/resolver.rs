//! DNS resolution stage of the probing pipeline.

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::ResolveErrorKind;

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(2);

/// What a DNS lookup produced for one candidate.
///
/// `NoRecord` and `Failed` both classify the candidate as dead, but they
/// are logged distinctly: one is an answer, the other is an infrastructure
/// problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Resolved(std::net::Ipv4Addr),
    NoRecord,
    Failed(String),
}

/// Resolves a hostname to its first IPv4 address. Implementations must be
/// safe to call concurrently and must never propagate per-lookup errors.
#[async_trait]
pub trait Resolve: Send + Sync {
    async fn resolve(&self, host: &str) -> Resolution;
}

/// Production resolver on top of hickory's tokio runtime.
pub struct DnsResolver {
    inner: TokioAsyncResolver,
}

impl DnsResolver {
    pub fn new() -> Self {
        let mut opts = ResolverOpts::default();
        opts.timeout = LOOKUP_TIMEOUT;
        opts.attempts = 1;
        Self {
            inner: TokioAsyncResolver::tokio(ResolverConfig::default(), opts),
        }
    }
}

impl Default for DnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Resolve for DnsResolver {
    async fn resolve(&self, host: &str) -> Resolution {
        match self.inner.lookup_ip(host).await {
            Ok(lookup) => lookup
                .iter()
                .find_map(|ip| match ip {
                    IpAddr::V4(v4) => Some(v4),
                    IpAddr::V6(_) => None,
                })
                .map(Resolution::Resolved)
                .unwrap_or(Resolution::NoRecord),
            Err(e) => match e.kind() {
                ResolveErrorKind::NoRecordsFound { .. } => Resolution::NoRecord,
                _ => Resolution::Failed(e.to_string()),
            },
        }
    }
}
