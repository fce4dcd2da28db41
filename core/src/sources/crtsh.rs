//! Passive enumeration via the crt.sh certificate-transparency index.

use std::collections::HashSet;
use std::time::Duration;

use serde::Deserialize;
use subsnare_common::warn;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// One certificate entry as returned by crt.sh. Only `name_value` is
/// interesting; it may pack several hostnames separated by newlines.
#[derive(Debug, Deserialize)]
struct CrtShEntry {
    name_value: String,
}

/// Fetches every hostname crt.sh knows for `domain`.
///
/// Non-200 responses, transport errors and unexpected JSON shapes all
/// degrade to an empty set with a warning; this call never fails the scan.
pub async fn fetch(domain: &str) -> HashSet<String> {
    let url = format!("https://crt.sh/?q=%25.{domain}&output=json");

    let client = match reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build() {
        Ok(client) => client,
        Err(e) => {
            warn!("crt.sh client setup failed: {e}");
            return HashSet::new();
        }
    };

    let response = match client.get(&url).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!("crt.sh request failed: {e}");
            return HashSet::new();
        }
    };

    if !response.status().is_success() {
        warn!("crt.sh returned status {}", response.status());
        return HashSet::new();
    }

    // Validate the shape at the boundary: anything that is not a JSON array
    // of certificate entries counts as an unavailable source.
    match response.json::<Vec<CrtShEntry>>().await {
        Ok(entries) => hostnames(&entries),
        Err(e) => {
            warn!("crt.sh response is not valid JSON: {e}");
            HashSet::new()
        }
    }
}

fn hostnames(entries: &[CrtShEntry]) -> HashSet<String> {
    entries
        .iter()
        .flat_map(|entry| entry.name_value.split('\n'))
        .map(|name| name.trim().to_ascii_lowercase())
        .filter(|name| !name.is_empty())
        .collect()
}
