use thiserror::Error;

/// Configuration-level conditions that abort a scan before any probing
/// starts. Per-candidate failures are never surfaced through this type;
/// they are contained inside the candidate's own task.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("no scanning method enabled: passive lookup disabled and no wordlist given")]
    NoMethod,

    #[error("no subdomains to scan")]
    NoCandidates,
}
