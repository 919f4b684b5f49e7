use anyhow::{Context as _, anyhow};
use serde_json::Value;
use url::Url;

#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(user_agent: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .context("build reqwest client")?;
        Ok(Self { client })
    }

    /// One GET, one chance. No retry; non-2xx is an error.
    pub async fn get_json(&self, url: Url) -> anyhow::Result<Value> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("GET {}", url))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("GET {} failed with status {}", url, status));
        }

        resp.json::<Value>()
            .await
            .with_context(|| format!("decode JSON from {}", url))
    }
}
