use async_trait::async_trait;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;

use crate::config::FetchSettings;
use crate::core::constants::error_messages;
use crate::core::error::Result;
use crate::core::types::{FetchResult, PageMetadata};
use crate::extraction::{extract_metadata, is_html_content_type};

/// Probes a single URL.
///
/// Implementations never fail: every problem is folded into the returned
/// [`FetchResult`].
#[async_trait]
pub trait FetchUrl: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchResult;
}

/// [`FetchUrl`] backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build the client once for the whole run.
    pub fn new(settings: &FetchSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .redirect(Policy::limited(settings.max_redirects))
            .user_agent(settings.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    async fn request(&self, url: &str) -> std::result::Result<FetchResult, reqwest::Error> {
        let response = self.client.get(url).send().await?;

        let status_code = response.status().as_u16();
        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        // Only HTML bodies are worth downloading; decoded with the declared charset
        let metadata = if is_html_content_type(&content_type) {
            let body = response.text().await?;
            if body.is_empty() {
                PageMetadata::default()
            } else {
                extract_metadata(&body)
            }
        } else {
            PageMetadata::default()
        };

        Ok(FetchResult::completed(url, status_code, final_url, metadata))
    }
}

#[async_trait]
impl FetchUrl for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        match self.request(url).await {
            Ok(result) => result,
            Err(err) => {
                let description = describe_error(&err);
                debug!("Request to {url} failed: {description}");
                FetchResult::network_error(url, description)
            }
        }
    }
}

/// Render an error together with its source chain, e.g.
/// `error sending request for url (...): client error (Connect): dns error: ...`
pub fn describe_error(err: &(dyn std::error::Error + 'static)) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut current = Some(err);

    while let Some(e) = current {
        let message = e.to_string();
        if !message.is_empty() && !parts.iter().any(|p| p.contains(&message)) {
            parts.push(message);
        }
        current = e.source();
    }

    if parts.is_empty() {
        error_messages::UNKNOWN_ERROR.to_string()
    } else {
        parts.join(": ")
    }
}
