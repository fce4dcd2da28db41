use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;

use subsnare_common::config::ScanConfig;
use subsnare_common::event::ScanEvent;
use subsnare_common::outcome::{Liveness, ScanResult};
use subsnare_common::{error, success, warn};
use subsnare_core::candidates;
use subsnare_core::scanner::{self, DnsResolver, EventSink, HttpProber};

use crate::report;
use crate::sprint;
use crate::terminal::{colors, print, spinner};

const SUMMARY_PREVIEW: usize = 5;

pub async fn run(cfg: ScanConfig) -> anyhow::Result<()> {
    let candidates = match candidates::gather(&cfg).await {
        Ok(set) => set,
        Err(e) => {
            // Configuration-level conditions end the run before any
            // probing; they are reported, not raised.
            error!("{e}");
            return Ok(());
        }
    };

    let total = candidates.len();
    sprint!();
    success!("Starting scan on {total} subdomains");

    let resolver = Arc::new(DnsResolver::new());
    let prober = Arc::new(HttpProber::new().context("building HTTP client")?);

    let cancel = Arc::new(AtomicBool::new(false));
    install_interrupt_handler(Arc::clone(&cancel));

    spinner::start();
    let started = Instant::now();
    let result = scanner::perform_scan(
        candidates.into_candidates(),
        cfg.concurrency,
        resolver,
        prober,
        Arc::clone(&cancel),
        Some(render_events(total)),
    )
    .await;
    spinner::stop();

    render_summary(&result, started.elapsed());

    if let Some(path) = &cfg.output {
        match report::save(&result.live, path) {
            Ok(()) => success!("Results saved to {}", path.display()),
            Err(e) => warn!("Failed to save results: {e:#}"),
        }
    }

    if result.cancelled {
        warn!("Scan interrupted by user.");
        std::process::exit(1);
    }
    Ok(())
}

fn install_interrupt_handler(cancel: Arc<AtomicBool>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.store(true, Ordering::Relaxed);
            warn!("Interrupt received, letting in-flight probes drain...");
        }
    });
}

/// Builds the event sink that renders per-candidate progress while the
/// spinner tracks overall counts.
fn render_events(total: usize) -> EventSink {
    let done = AtomicUsize::new(0);
    let live = AtomicUsize::new(0);

    Box::new(move |event| {
        let ScanEvent::Completed(outcome) = event else {
            return;
        };

        let done = done.fetch_add(1, Ordering::Relaxed) + 1;
        let line = match outcome.status {
            Liveness::Live => {
                live.fetch_add(1, Ordering::Relaxed);
                let ip = outcome.ip.map(|ip| ip.to_string()).unwrap_or_default();
                format!(
                    "{} {} ({ip}) -> {}",
                    "✔".green().bold(),
                    outcome.subdomain.green(),
                    outcome.url.color(colors::ACCENT)
                )
            }
            Liveness::Dead => format!(
                "{} {} (unreachable)",
                "✘".dimmed(),
                outcome.subdomain.dimmed()
            ),
        };
        print::print(&line);
        spinner::report_scan_progress(done, total, live.load(Ordering::Relaxed));
    })
}

fn render_summary(result: &ScanResult, elapsed: Duration) {
    sprint!();
    print::header("scan complete");
    print::print_status(format!(
        "Total scanned: {}/{}",
        result.scanned, result.total
    ));
    print::print_status(format!(
        "Live hosts: {}",
        result.live_count().to_string().green().bold()
    ));
    print::print_status(format!("Elapsed: {:.2}s", elapsed.as_secs_f64()));

    if !result.live.is_empty() {
        sprint!();
        for host in result.live.iter().take(SUMMARY_PREVIEW) {
            print::print_status(format!("→ {}", host.url.as_str().color(colors::ACCENT)));
        }
        let rest = result.live_count().saturating_sub(SUMMARY_PREVIEW);
        if rest > 0 {
            print::print_status(format!("... and {rest} more"));
        }
    }
    print::fat_separator();
}
