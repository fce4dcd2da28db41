//! Per-candidate scan outcomes and the aggregated result set.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Liveness {
    Live,
    Dead,
}

/// The result of processing exactly one candidate. Immutable once built.
#[derive(Clone, Debug)]
pub struct ProbeOutcome {
    pub subdomain: String,
    /// `None` means the candidate never resolved; no HTTP probe was made.
    pub ip: Option<Ipv4Addr>,
    pub status: Liveness,
    /// Final URL after redirects. Empty for dead candidates.
    pub url: String,
}

impl ProbeOutcome {
    pub fn live(subdomain: &str, ip: Ipv4Addr, url: String) -> Self {
        Self {
            subdomain: subdomain.to_string(),
            ip: Some(ip),
            status: Liveness::Live,
            url,
        }
    }

    pub fn dead(subdomain: &str, ip: Option<Ipv4Addr>) -> Self {
        Self {
            subdomain: subdomain.to_string(),
            ip,
            status: Liveness::Dead,
            url: String::new(),
        }
    }

    pub fn is_live(&self) -> bool {
        self.status == Liveness::Live
    }
}

/// Sink-facing record for a reachable subdomain, serialized as-is to JSON
/// and CSV output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveHost {
    pub subdomain: String,
    pub ip: String,
    pub url: String,
}

/// Aggregate built by the scan collector. `live` is ordered by completion,
/// not by candidate order; consumers that need determinism sort downstream.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Candidates handed to the orchestrator.
    pub total: usize,
    /// Candidates that completed with an outcome.
    pub scanned: usize,
    pub live: Vec<LiveHost>,
    pub cancelled: bool,
}

impl ScanResult {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Folds one completed outcome into the aggregate.
    pub fn record(&mut self, outcome: &ProbeOutcome) {
        self.scanned += 1;
        if let (Liveness::Live, Some(ip)) = (outcome.status, outcome.ip) {
            self.live.push(LiveHost {
                subdomain: outcome.subdomain.clone(),
                ip: ip.to_string(),
                url: outcome.url.clone(),
            });
        }
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}
