use std::net::Ipv4Addr;

use crate::outcome::ProbeOutcome;

/// Structured progress events emitted by the scan orchestrator.
///
/// The core never prints; whoever runs the scan injects a sink and decides
/// how (or whether) to render these.
#[derive(Clone, Debug)]
pub enum ScanEvent {
    Started { subdomain: String },
    Resolved { subdomain: String, ip: Ipv4Addr },
    Completed(ProbeOutcome),
}
