//! Newline-delimited wordlist loading for brute-force expansion.

use std::io;
use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Reads subdomain prefixes from `path`, one per line. Lines are trimmed
/// and lowercased; blank lines are dropped.
pub async fn load_prefixes(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path).await?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    let mut prefixes = Vec::new();
    while let Some(line) = lines.next_line().await? {
        let prefix = line.trim().to_ascii_lowercase();
        if !prefix.is_empty() {
            prefixes.push(prefix);
        }
    }
    Ok(prefixes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_wordlist(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("subsnare-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn loads_trimmed_lowercased_prefixes() {
        let path = temp_wordlist("wordlist.txt", "www\n  API \n\nMail\n");

        let prefixes = load_prefixes(&path).await.unwrap();
        assert_eq!(prefixes, ["www", "api", "mail"]);

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let path = Path::new("/nonexistent/subsnare-wordlist.txt");
        assert!(load_prefixes(path).await.is_err());
    }
}
