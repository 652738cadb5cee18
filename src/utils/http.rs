use anyhow::{anyhow, Context, Result};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Something that answers a GET with a JSON document.
pub trait JsonSource {
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T>;
}

pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build the client")?;
        Ok(ApiClient { client })
    }
}

impl JsonSource for ApiClient {
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to send request to {url}"))?
            .error_for_status()
            .with_context(|| format!("Request to {url} was not successful"))?;

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response text from {url}"))?;

        serde_json::from_str(&body).with_context(|| format!("Unexpected JSON returned by {url}"))
    }
}

/// Appends path segments to `base`, percent-encoding each one.
pub fn endpoint(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base).with_context(|| format!("Invalid API URL {base:?}"))?;
    url.path_segments_mut()
        .map_err(|_| anyhow!("API URL {base:?} cannot take a path"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
