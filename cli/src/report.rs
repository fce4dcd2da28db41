//! Persists the live-host list; the format follows the output extension.
//!
//! `.json` writes an array of `{subdomain, ip, url}` objects, `.csv` a
//! `subdomain,ip,url` table (header row even when empty), and any other
//! extension one final URL per line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use subsnare_common::outcome::LiveHost;

pub fn save(hosts: &[LiveHost], path: &Path) -> anyhow::Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("json") => write_json(hosts, path),
        Some("csv") => write_csv(hosts, path),
        _ => write_urls(hosts, path),
    }
    .with_context(|| format!("writing {}", path.display()))
}

fn write_json(hosts: &[LiveHost], path: &Path) -> anyhow::Result<()> {
    let file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(file, hosts)?;
    Ok(())
}

fn write_csv(hosts: &[LiveHost], path: &Path) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["subdomain", "ip", "url"])?;
    for host in hosts {
        writer.write_record([&host.subdomain, &host.ip, &host.url])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_urls(hosts: &[LiveHost], path: &Path) -> anyhow::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    for host in hosts {
        writeln!(file, "{}", host.url)?;
    }
    file.flush()?;
    Ok(())
}
