//! Search client.
//!
//! [`JmClient`] is the capability the plugin consumes; [`JmApiClient`] is the
//! reqwest-backed implementation. Built once at plugin load and used read-only
//! afterwards, so concurrent command invocations share it freely.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::errors::{Error, Result};
use crate::options::JmOptions;
use crate::types::SearchPage;

/// Archive search capability.
#[async_trait]
pub trait JmClient: Send + Sync {
    /// Searches the archive. A query that is an album id resolves to that
    /// album directly (the returned page carries it); anything else returns a
    /// page without one.
    async fn search(&self, query: &str) -> Result<SearchPage>;
}

/// HTTP-backed [`JmClient`].
pub struct JmApiClient {
    http: Client,
    api_base: Url,
}

/// Constructs the client from options: base URL, timeout, optional HTTP proxy.
pub fn build_client(options: &JmOptions) -> Result<JmApiClient> {
    let api_base = Url::parse(&options.api_base)?;

    let mut builder = Client::builder().timeout(Duration::from_secs(options.timeout_secs));
    if let Some(proxy_url) = &options.client.proxies.http {
        builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
    }
    let http = builder.build()?;

    Ok(JmApiClient { http, api_base })
}

#[async_trait]
impl JmClient for JmApiClient {
    async fn search(&self, query: &str) -> Result<SearchPage> {
        let mut url = self.api_base.clone();
        url.set_path("search");
        url.query_pairs_mut().append_pair("search_query", query);

        debug!(%url, "searching archive");
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Api(format!(
                "search returned status {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_client_with_default_options() {
        let options = JmOptions::default();
        assert!(build_client(&options).is_ok());
    }

    #[test]
    fn build_client_with_proxy() {
        let mut options = JmOptions::default();
        options.client.proxies.http = Some("http://127.0.0.1:7890".to_string());
        assert!(build_client(&options).is_ok());
    }

    #[test]
    fn build_client_rejects_invalid_proxy_url() {
        let mut options = JmOptions::default();
        options.client.proxies.http = Some("not a proxy url".to_string());
        assert!(build_client(&options).is_err());
    }

    #[test]
    fn build_client_rejects_invalid_api_base() {
        let options = JmOptions {
            api_base: "not a url".to_string(),
            ..JmOptions::default()
        };
        assert!(matches!(
            build_client(&options),
            Err(Error::UrlParse(_))
        ));
    }
}
