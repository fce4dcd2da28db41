//! Instrumented resolver/prober fakes for exercising the orchestrator
//! without touching the network.

use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use subsnare_core::scanner::{Probe, ProbeVerdict, Resolution, Resolve};

/// Counts concurrently active pipeline stages and remembers the peak.
#[derive(Default)]
pub struct Gauge {
    active: AtomicUsize,
    peak: AtomicUsize,
}

impl Gauge {
    pub fn enter(&self) {
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
    }

    pub fn exit(&self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
    }

    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

pub struct FakeResolver {
    pub unresolvable: HashSet<String>,
    pub gauge: Arc<Gauge>,
    pub delay: Duration,
}

#[async_trait]
impl Resolve for FakeResolver {
    async fn resolve(&self, host: &str) -> Resolution {
        self.gauge.enter();
        tokio::time::sleep(self.delay).await;
        let resolution = if self.unresolvable.contains(host) {
            Resolution::NoRecord
        } else {
            Resolution::Resolved(Ipv4Addr::new(10, 0, 0, 1))
        };
        self.gauge.exit();
        resolution
    }
}

pub struct FakeProber {
    pub gauge: Arc<Gauge>,
    pub probed: Mutex<Vec<String>>,
    pub reachable: bool,
    pub delay: Duration,
}

#[async_trait]
impl Probe for FakeProber {
    async fn probe(&self, host: &str) -> ProbeVerdict {
        self.gauge.enter();
        tokio::time::sleep(self.delay).await;
        self.probed.lock().unwrap().push(host.to_string());
        self.gauge.exit();

        if self.reachable {
            ProbeVerdict::Live {
                url: format!("https://{host}/"),
            }
        } else {
            ProbeVerdict::Unreachable
        }
    }
}
