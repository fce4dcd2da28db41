use std::path::PathBuf;

/// Validated scan parameters, built once from the command line and never
/// mutated afterwards.
#[derive(Clone, Debug)]
pub struct ScanConfig {
    /// Target apex domain, e.g. `example.com`.
    pub domain: String,
    /// Optional wordlist of subdomain prefixes for brute-force expansion.
    pub wordlist: Option<PathBuf>,
    /// Skips the crt.sh passive lookup entirely.
    pub no_passive: bool,
    /// Upper bound on concurrently scanned candidates. Always >= 1.
    pub concurrency: usize,
    /// Where to persist live results. `None` means display-only.
    pub output: Option<PathBuf>,
    /// Suppresses the startup banner.
    pub no_banner: bool,
}

impl ScanConfig {
    pub const DEFAULT_CONCURRENCY: usize = 80;
}
