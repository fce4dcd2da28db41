//! HTTP reachability stage of the probing pipeline.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::redirect::Policy;
use tracing::debug;

const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(6);
const MAX_REDIRECTS: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeVerdict {
    /// Some HTTP(S) attempt answered; `url` is the final post-redirect URL.
    Live { url: String },
    Unreachable,
}

/// Probes an already-resolved hostname for a live HTTP(S) endpoint.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, host: &str) -> ProbeVerdict;
}

/// Production prober: HTTPS first, plain HTTP as the single fallback.
///
/// Certificate validation is disabled on purpose; the point is reachability
/// detection, not trust. A host answering with a broken cert is still live.
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    pub fn new() -> reqwest::Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .timeout(ATTEMPT_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Probe for HttpProber {
    async fn probe(&self, host: &str) -> ProbeVerdict {
        // Any HTTP response counts as live, status code included; a 403 or
        // a 500 still proves something is listening.
        for scheme in ["https", "http"] {
            let url = format!("{scheme}://{host}");
            match self.client.get(&url).send().await {
                Ok(response) => {
                    return ProbeVerdict::Live {
                        url: response.url().to_string(),
                    };
                }
                Err(e) => debug!("{url} unreachable: {e}"),
            }
        }
        ProbeVerdict::Unreachable
    }
}
