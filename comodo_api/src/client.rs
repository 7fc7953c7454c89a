//! HTTP client for the Endpoint Manager REST gateway.

use std::time::Duration;

use reqwest::Method;
use serde_json::{json, Value};
use url::Url;

use crate::{envelope, types::Region, Error};

/// Credential pair accepted by the gateway: an API token and the hosting
/// region it was issued for.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub token: String,
    pub region: Region,
}

impl Credentials {
    pub fn new(token: impl Into<String>, region: Region) -> Self {
        Self {
            token: token.into(),
            region,
        }
    }
}

/// HTTP client for the Endpoint Manager REST gateway.
///
/// Every request carries the `CONESSO` authorization scheme plus the AJAX
/// marker header the gateway expects. Transport policy (timeout, TLS) is
/// fixed here; retry and batch-continuation policy stay with the caller.
pub struct Client {
    base_api_url: String,
    token: String,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client for the gateway in the credential's region.
    pub fn new(credentials: &Credentials) -> Result<Self, Error> {
        Self::with_base_url(
            &format!(
                "https://api-gw.{}.comodo.com",
                credentials.region.subdomain()
            ),
            &credentials.token,
        )
    }

    /// Creates a client against an explicit base URL. Used for testing with
    /// wiremock.
    pub fn with_base_url(base_url: &str, token: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(Error::Init)?;
        Ok(Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            http,
        })
    }

    fn url_for(&self, path: &str) -> Result<Url, Error> {
        Ok(Url::parse(&format!("{}{}", self.base_api_url, path))?)
    }

    /// Sends one request and returns the parsed JSON body.
    ///
    /// A non-success status raises [`Error::Api`] carrying the method, URL,
    /// and the `$E` envelope reason when the body has one. A 2xx body that
    /// is not JSON is wrapped as `{"rawResponse": ...}` rather than rejected.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, Error> {
        let url = self.url_for(path)?;
        tracing::debug!(%method, %url, "sending request");

        let mut builder = self
            .http
            .request(method.clone(), url.clone())
            .header("Authorization", format!("CONESSO {}", self.token))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("X-Requested-With", "XMLHttpRequest");
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let resp = builder.send().await.map_err(|source| {
            tracing::error!(%method, %url, error = %source, "transport failure");
            Error::Transport {
                method: method.to_string(),
                url: url.to_string(),
                source,
            }
        })?;

        let status = resp.status();
        let text = resp.text().await.map_err(|source| Error::Transport {
            method: method.to_string(),
            url: url.to_string(),
            source,
        })?;

        if !status.is_success() {
            let reason = envelope::error_reason(&text).unwrap_or_else(|| {
                if text.trim().is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                } else {
                    truncate_body(&text)
                }
            });
            tracing::error!(%method, %url, status = status.as_u16(), %reason, "request failed");
            return Err(Error::Api {
                method: method.to_string(),
                url: url.to_string(),
                status: status.as_u16(),
                reason,
            });
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(parsed) => Ok(parsed),
            Err(_) => Ok(json!({ "rawResponse": text })),
        }
    }

    /// Probes the device-summary statistics endpoint to validate the
    /// configured token/region pair.
    pub async fn test_credentials(&self) -> Result<(), Error> {
        self.request(Method::GET, "/api/v2/itsm/statistics/device/summary", None)
            .await
            .map(|_| ())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
