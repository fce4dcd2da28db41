//! # Scan Orchestrator
//!
//! Drives the concurrent resolve-then-probe pipeline across the full
//! candidate set under a static concurrency ceiling.
//!
//! High-level callers depend on the [`Resolve`] and [`Probe`] traits rather
//! than the concrete DNS/HTTP implementations; that keeps the fan-out logic
//! testable against instrumented fakes.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task::JoinSet;
use tracing::debug;

use subsnare_common::event::ScanEvent;
use subsnare_common::outcome::{ProbeOutcome, ScanResult};

pub mod prober;
pub mod resolver;

pub use prober::{HttpProber, Probe, ProbeVerdict};
pub use resolver::{DnsResolver, Resolution, Resolve};

/// Optional sink for structured per-candidate progress events.
pub type EventSink = Box<dyn Fn(ScanEvent) + Send + Sync>;

/// Scans every candidate with at most `concurrency` in flight at once.
///
/// A fixed pool of workers pulls candidates off a shared cursor; each worker
/// owns one concurrency slot for the whole resolve+probe lifecycle of its
/// current candidate. Completed outcomes are funneled through a channel into
/// a single collector, so the growing result is never shared mutable state.
///
/// Per-candidate failures are contained: every scheduled candidate yields
/// exactly one [`ProbeOutcome`]. Setting `cancel` stops workers from pulling
/// new candidates; whatever completed before that stays in the result.
pub async fn perform_scan(
    candidates: Vec<String>,
    concurrency: usize,
    resolver: Arc<dyn Resolve>,
    prober: Arc<dyn Probe>,
    cancel: Arc<AtomicBool>,
    on_event: Option<EventSink>,
) -> ScanResult {
    let total = candidates.len();
    let candidates = Arc::new(candidates);
    let cursor = Arc::new(AtomicUsize::new(0));
    let (tx, mut rx) = mpsc::unbounded_channel::<ScanEvent>();

    let workers = concurrency.min(total).max(1);
    let mut pool = JoinSet::new();
    for _ in 0..workers {
        let candidates = Arc::clone(&candidates);
        let cursor = Arc::clone(&cursor);
        let resolver = Arc::clone(&resolver);
        let prober = Arc::clone(&prober);
        let cancel = Arc::clone(&cancel);
        let tx = tx.clone();

        pool.spawn(async move {
            loop {
                if cancel.load(Ordering::Relaxed) {
                    break;
                }
                let idx = cursor.fetch_add(1, Ordering::Relaxed);
                let Some(host) = candidates.get(idx) else {
                    break;
                };

                let _ = tx.send(ScanEvent::Started {
                    subdomain: host.clone(),
                });
                let outcome = scan_one(host, resolver.as_ref(), prober.as_ref(), &tx).await;
                let _ = tx.send(ScanEvent::Completed(outcome));
            }
        });
    }
    // The collector loop ends once every worker has dropped its sender.
    drop(tx);

    let mut result = ScanResult::new(total);
    while let Some(event) = rx.recv().await {
        if let ScanEvent::Completed(outcome) = &event {
            result.record(outcome);
        }
        if let Some(sink) = &on_event {
            sink(event);
        }
    }

    while pool.join_next().await.is_some() {}

    result.cancelled = cancel.load(Ordering::Relaxed);
    result
}

/// Runs one candidate through the pipeline. An unresolvable host is dead
/// without ever touching the network for HTTP.
async fn scan_one(
    host: &str,
    resolver: &dyn Resolve,
    prober: &dyn Probe,
    tx: &UnboundedSender<ScanEvent>,
) -> ProbeOutcome {
    let ip = match resolver.resolve(host).await {
        Resolution::Resolved(ip) => {
            let _ = tx.send(ScanEvent::Resolved {
                subdomain: host.to_string(),
                ip,
            });
            ip
        }
        Resolution::NoRecord => {
            debug!("{host}: no DNS record");
            return ProbeOutcome::dead(host, None);
        }
        Resolution::Failed(reason) => {
            debug!("{host}: resolver error: {reason}");
            return ProbeOutcome::dead(host, None);
        }
    };

    match prober.probe(host).await {
        ProbeVerdict::Live { url } => ProbeOutcome::live(host, ip, url),
        ProbeVerdict::Unreachable => ProbeOutcome::dead(host, Some(ip)),
    }
}
