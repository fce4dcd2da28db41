pub mod scan;

use std::path::PathBuf;

use clap::Parser;
use subsnare_common::config::ScanConfig;

#[derive(Parser)]
#[command(name = "subsnare")]
#[command(about = "Subdomain enumeration with DNS and HTTP liveness probing.")]
#[command(version)]
pub struct CommandLine {
    /// Target domain (e.g. example.com)
    #[arg(short, long)]
    pub domain: String,

    /// Wordlist of subdomain prefixes for brute-forcing
    #[arg(short, long)]
    pub wordlist: Option<PathBuf>,

    /// Skip the crt.sh passive enumeration
    #[arg(long)]
    pub no_passive: bool,

    /// Maximum candidates probed concurrently
    #[arg(short = 't', long = "threads", default_value_t = ScanConfig::DEFAULT_CONCURRENCY)]
    pub threads: usize,

    /// Output file; format follows the extension (.json, .csv, else plain text)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress the startup banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn into_config(self) -> ScanConfig {
        ScanConfig {
            domain: self
                .domain
                .trim()
                .trim_end_matches('.')
                .to_ascii_lowercase(),
            wordlist: self.wordlist,
            no_passive: self.no_passive,
            concurrency: self.threads.max(1),
            output: self.output,
            no_banner: self.no_banner,
        }
    }
}
