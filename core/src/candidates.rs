//! # Candidate Aggregation
//!
//! Merges passively discovered hostnames and wordlist expansions into one
//! deduplicated set of fully-qualified candidates for the target domain.
//!
//! Invariants enforced on every insert, regardless of source:
//! * lowercased before comparison (uniqueness is case-insensitive),
//! * no wildcard entries (`*`),
//! * must end with `.{domain}`.

use std::collections::HashSet;

use subsnare_common::config::ScanConfig;
use subsnare_common::error::ScanError;
use subsnare_common::{info, success, warn};

use crate::sources::{crtsh, wordlist};

#[derive(Debug)]
pub struct CandidateSet {
    domain: String,
    suffix: String,
    hosts: HashSet<String>,
}

impl CandidateSet {
    pub fn for_domain(domain: &str) -> Self {
        let domain = domain.trim().to_ascii_lowercase();
        Self {
            suffix: format!(".{domain}"),
            domain,
            hosts: HashSet::new(),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Adds hostnames from a passive source, dropping anything outside the
    /// target domain.
    pub fn extend_passive<I>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        names.into_iter().filter(|name| self.insert(name)).count()
    }

    /// Expands wordlist prefixes into `{prefix}.{domain}` candidates.
    pub fn extend_prefixes<I>(&mut self, prefixes: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        prefixes
            .into_iter()
            .filter(|prefix| {
                let prefix = prefix.trim();
                !prefix.is_empty() && self.insert(&format!("{prefix}.{}", self.domain))
            })
            .count()
    }

    fn insert(&mut self, name: &str) -> bool {
        let name = name.trim().to_ascii_lowercase();
        if name.is_empty() || name.contains('*') || !name.ends_with(&self.suffix) {
            return false;
        }
        self.hosts.insert(name)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn into_candidates(self) -> Vec<String> {
        self.hosts.into_iter().collect()
    }
}

/// Collects candidates from every enabled source.
///
/// A missing wordlist only narrows the scan; an empty final set or no
/// enabled source at all aborts it before any probing happens.
pub async fn gather(cfg: &ScanConfig) -> Result<CandidateSet, ScanError> {
    if cfg.no_passive && cfg.wordlist.is_none() {
        return Err(ScanError::NoMethod);
    }

    let mut set = CandidateSet::for_domain(&cfg.domain);

    if !cfg.no_passive {
        info!("Fetching subdomains from crt.sh (passive)...");
        let added = set.extend_passive(crtsh::fetch(&cfg.domain).await);
        success!("Got {added} subdomains from crt.sh");
    }

    if let Some(path) = &cfg.wordlist {
        if path.exists() {
            match wordlist::load_prefixes(path).await {
                Ok(prefixes) => {
                    let added = set.extend_prefixes(prefixes);
                    success!("Loaded {added} candidates from wordlist");
                }
                Err(e) => warn!("Failed to read wordlist {}: {e}", path.display()),
            }
        } else {
            warn!(
                "Wordlist not found: {} -- skipping brute-force",
                path.display()
            );
        }
    }

    if set.is_empty() {
        return Err(ScanError::NoCandidates);
    }
    Ok(set)
}
