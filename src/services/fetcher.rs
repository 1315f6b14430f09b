use std::time::Duration;

use reqwest::StatusCode;
use url::Url;

/// Explicit transport configuration, passed in rather than read from
/// ambient globals.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub proxy: Option<Url>,
    pub timeout: Duration,
}

pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout);

        if let Some(proxy_url) = &config.proxy {
            builder = builder
                .proxy(reqwest::Proxy::http(proxy_url.as_str())?)
                .proxy(reqwest::Proxy::https(proxy_url.as_str())?);
        }

        Ok(Fetcher {
            client: builder.build()?,
        })
    }

    /// One blocking GET; the caller decides what to do with non-200 statuses.
    pub async fn fetch(&self, url: &str) -> anyhow::Result<(StatusCode, String)> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }
}

/// Accept only http/https forward proxies with a host part.
pub fn parse_proxy(input: &str) -> Option<Url> {
    let parsed = Url::parse(input.trim()).ok()?;
    match parsed.scheme() {
        "http" | "https" if parsed.has_host() => Some(parsed),
        _ => None,
    }
}
