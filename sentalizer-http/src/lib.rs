//! HTTP page fetcher with timeouts, retries, and structured logging.
//!
//! - Fetches a single page as text; the caller decides what to do with it
//! - Retries 429/5xx with exponential backoff and `Retry-After` support
//! - Treats any terminal non-2xx status or transport failure as [`FetchError`]
//!
//! Observability: `tracing` events are emitted for request start, response
//! headers, retries, and final errors (targets under `http.*`).

use std::time::Duration;

use reqwest::header::{HeaderMap, RETRY_AFTER, USER_AGENT};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tokio::time::sleep;
use url::Url;

const DEFAULT_USER_AGENT: &str = concat!("sentalizer/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    Url(String),
    #[error("client build failed: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {status}: {snippet}")]
    Status { status: StatusCode, snippet: String },
}

/// Fetches pages over HTTP.
///
/// ```no_run
/// # async fn demo() -> Result<(), sentalizer_http::FetchError> {
/// use url::Url;
///
/// let fetcher = sentalizer_http::PageFetcher::new()?;
/// let url = Url::parse("https://example.com").map_err(|e| {
///     sentalizer_http::FetchError::Url(e.to_string())
/// })?;
/// let html = fetcher.fetch_html(&url).await?;
/// # let _ = html;
/// # Ok(()) }
/// ```
#[derive(Clone)]
pub struct PageFetcher {
    inner: Client,
    pub default_timeout: Duration,
    pub max_retries: usize,
    user_agent: String,
}

impl PageFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let inner = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| FetchError::Build(e.to_string()))?;
        Ok(Self {
            inner,
            default_timeout: Duration::from_secs(15),
            max_retries: 2,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    /// Override the default per-request timeout.
    pub fn with_timeout(mut self, dur: Duration) -> Self {
        self.default_timeout = dur;
        self
    }

    /// Override the default retry budget.
    pub fn with_retries(mut self, n: usize) -> Self {
        self.max_retries = n;
        self
    }

    /// Override the User-Agent header sent with each request.
    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    /// GET `url` and return the response body as text.
    ///
    /// Retries 429 and 5xx responses up to the retry budget; everything else
    /// non-2xx is terminal and surfaces as [`FetchError::Status`].
    pub async fn fetch_html(&self, url: &Url) -> Result<String, FetchError> {
        let mut attempt = 0usize;

        loop {
            tracing::debug!(
                url = %url,
                attempt = attempt + 1,
                max_retries = self.max_retries,
                timeout_ms = self.default_timeout.as_millis() as u64,
                "http.request.start"
            );

            let started = std::time::Instant::now();
            let resp = match self
                .inner
                .get(url.clone())
                .header(USER_AGENT, self.user_agent.as_str())
                .timeout(self.default_timeout)
                .send()
                .await
            {
                Ok(resp) => resp,
                Err(err) => {
                    let message = err.to_string();
                    if attempt < self.max_retries {
                        attempt += 1;
                        let delay = backoff_delay(attempt);
                        tracing::warn!(
                            url = %url,
                            attempt,
                            backoff_ms = delay.as_millis() as u64,
                            message = %message,
                            "http.retrying.network"
                        );
                        sleep(delay).await;
                        continue;
                    }
                    tracing::warn!(url = %url, message = %message, "http.network_error");
                    return Err(FetchError::Network(message));
                }
            };

            let status = resp.status();
            let headers = resp.headers().clone();
            let bytes = match resp.bytes().await {
                Ok(bytes) => bytes,
                Err(err) => {
                    let message = err.to_string();
                    if attempt < self.max_retries {
                        attempt += 1;
                        let delay = backoff_delay(attempt);
                        tracing::warn!(
                            url = %url,
                            attempt,
                            backoff_ms = delay.as_millis() as u64,
                            message = %message,
                            "http.retrying.body"
                        );
                        sleep(delay).await;
                        continue;
                    }
                    tracing::warn!(url = %url, message = %message, "http.network_error.body");
                    return Err(FetchError::Network(message));
                }
            };

            tracing::debug!(
                url = %url,
                %status,
                duration_ms = started.elapsed().as_millis() as u64,
                body_len = bytes.len(),
                "http.response.headers"
            );

            if status.is_success() {
                return Ok(String::from_utf8_lossy(&bytes).into_owned());
            }

            let snippet = snip_body(&bytes);
            let retryable = status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error();

            if retryable && attempt < self.max_retries {
                attempt += 1;
                let delay = if let Some(secs) = retry_after_delay_secs(&headers) {
                    Duration::from_secs(secs)
                } else {
                    let exp = backoff_delay(attempt);
                    if status == StatusCode::TOO_MANY_REQUESTS {
                        // default floor for 429 when no Retry-After is present
                        exp.max(Duration::from_millis(1100))
                    } else {
                        exp
                    }
                };
                tracing::warn!(
                    url = %url,
                    %status,
                    attempt,
                    backoff_ms = delay.as_millis() as u64,
                    snippet = %snippet,
                    "http.retrying"
                );
                sleep(delay).await;
                continue;
            }

            tracing::warn!(url = %url, %status, snippet = %snippet, "http.error");
            return Err(FetchError::Status { status, snippet });
        }
    }
}

fn backoff_delay(attempt: usize) -> Duration {
    // cap the exponent so large retry budgets cannot overflow the shift
    let exp = attempt.saturating_sub(1).min(16) as u32;
    Duration::from_millis(200u64.saturating_mul(1u64 << exp))
}

fn retry_after_delay_secs(h: &HeaderMap) -> Option<u64> {
    h.get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())?
        .parse()
        .ok()
}

fn snip_body(body: &[u8]) -> String {
    let mut snip = String::from_utf8_lossy(body).to_string();
    if snip.len() > 500 {
        let mut cut = 500;
        while !snip.is_char_boundary(cut) {
            cut -= 1;
        }
        snip.truncate(cut);
        snip.push_str("...");
    }
    snip
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_per_attempt() {
        assert_eq!(backoff_delay(1), Duration::from_millis(200));
        assert_eq!(backoff_delay(2), Duration::from_millis(400));
        assert_eq!(backoff_delay(3), Duration::from_millis(800));
    }

    #[test]
    fn backoff_saturates_at_large_attempt_counts() {
        let ceiling = backoff_delay(17);
        assert_eq!(backoff_delay(64), ceiling);
        assert_eq!(backoff_delay(usize::MAX), ceiling);
    }
}
