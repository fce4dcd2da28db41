use std::collections::HashSet;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use subsnare_common::event::ScanEvent;
use subsnare_common::outcome::ProbeOutcome;
use subsnare_core::scanner::{self, EventSink, Probe};

use crate::fakes::{FakeProber, FakeResolver, Gauge};

fn candidates(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("host{i}.example.com")).collect()
}

fn fake_pair(
    unresolvable: HashSet<String>,
    reachable: bool,
    delay: Duration,
) -> (Arc<FakeResolver>, Arc<FakeProber>, Arc<Gauge>) {
    let gauge = Arc::new(Gauge::default());
    let resolver = Arc::new(FakeResolver {
        unresolvable,
        gauge: Arc::clone(&gauge),
        delay,
    });
    let prober = Arc::new(FakeProber {
        gauge: Arc::clone(&gauge),
        probed: Mutex::new(Vec::new()),
        reachable,
        delay,
    });
    (resolver, prober, gauge)
}

fn capture_outcomes() -> (Arc<Mutex<Vec<ProbeOutcome>>>, EventSink) {
    let outcomes = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&outcomes);
    let sink: EventSink = Box::new(move |event| {
        if let ScanEvent::Completed(outcome) = event {
            captured.lock().unwrap().push(outcome);
        }
    });
    (outcomes, sink)
}

#[tokio::test]
async fn every_candidate_yields_exactly_one_outcome() {
    let unresolvable: HashSet<String> = ["host0.example.com", "host1.example.com"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let (resolver, prober, _) = fake_pair(unresolvable, true, Duration::from_millis(1));
    let (outcomes, sink) = capture_outcomes();

    let result = scanner::perform_scan(
        candidates(8),
        4,
        resolver,
        prober,
        Arc::new(AtomicBool::new(false)),
        Some(sink),
    )
    .await;

    assert_eq!(result.total, 8);
    assert_eq!(result.scanned, 8);
    assert_eq!(result.live_count(), 6);
    assert!(!result.cancelled);

    let outcomes = outcomes.lock().unwrap();
    assert_eq!(outcomes.len(), 8);
    for host in candidates(8) {
        let count = outcomes.iter().filter(|o| o.subdomain == host).count();
        assert_eq!(count, 1, "{host} produced {count} outcomes");
    }
}

#[tokio::test]
async fn unresolvable_candidates_are_never_probed() {
    let unresolvable: HashSet<String> = ["host2.example.com".to_string()].into_iter().collect();
    let (resolver, prober, _) = fake_pair(unresolvable, true, Duration::from_millis(1));
    let prober_dyn: Arc<dyn Probe> = prober.clone();

    let result = scanner::perform_scan(
        candidates(4),
        4,
        resolver,
        prober_dyn,
        Arc::new(AtomicBool::new(false)),
        None,
    )
    .await;

    assert_eq!(result.scanned, 4);
    assert_eq!(result.live_count(), 3);

    let probed = prober.probed.lock().unwrap();
    assert_eq!(probed.len(), 3);
    assert!(!probed.iter().any(|h| h == "host2.example.com"));
}

#[tokio::test]
async fn unreachable_host_is_dead_but_keeps_its_address() {
    let (resolver, prober, _) = fake_pair(HashSet::new(), false, Duration::from_millis(1));
    let (outcomes, sink) = capture_outcomes();

    let result = scanner::perform_scan(
        candidates(3),
        2,
        resolver,
        prober,
        Arc::new(AtomicBool::new(false)),
        Some(sink),
    )
    .await;

    assert_eq!(result.scanned, 3);
    assert_eq!(result.live_count(), 0);

    let outcomes = outcomes.lock().unwrap();
    assert!(outcomes.iter().all(|o| !o.is_live()));
    assert!(outcomes.iter().all(|o| o.ip.is_some()));
    assert!(outcomes.iter().all(|o| o.url.is_empty()));
}

#[tokio::test]
async fn concurrency_never_exceeds_the_ceiling() {
    let (resolver, prober, gauge) = fake_pair(HashSet::new(), true, Duration::from_millis(10));

    scanner::perform_scan(
        candidates(20),
        4,
        resolver,
        prober,
        Arc::new(AtomicBool::new(false)),
        None,
    )
    .await;

    assert!(
        gauge.peak() <= 4,
        "peak concurrency {} exceeded ceiling 4",
        gauge.peak()
    );
}

#[tokio::test]
async fn ceiling_of_one_serializes_the_scan() {
    let (resolver, prober, gauge) = fake_pair(HashSet::new(), true, Duration::from_millis(5));

    let result = scanner::perform_scan(
        candidates(10),
        1,
        resolver,
        prober,
        Arc::new(AtomicBool::new(false)),
        None,
    )
    .await;

    assert_eq!(result.scanned, 10);
    assert_eq!(gauge.peak(), 1);
}

#[tokio::test]
async fn cancelled_scan_schedules_no_new_work() {
    let (resolver, prober, _) = fake_pair(HashSet::new(), true, Duration::from_millis(1));
    let cancel = Arc::new(AtomicBool::new(true));
    let prober_dyn: Arc<dyn Probe> = prober.clone();

    let result = scanner::perform_scan(
        candidates(10),
        4,
        resolver,
        prober_dyn,
        cancel,
        None,
    )
    .await;

    assert!(result.cancelled);
    assert_eq!(result.scanned, 0);
    assert_eq!(result.live_count(), 0);
    assert!(prober.probed.lock().unwrap().is_empty());
}
