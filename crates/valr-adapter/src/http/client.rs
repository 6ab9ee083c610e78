/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Configured reqwest client, signed requests, classified responses
[POS]:    HTTP layer - core client implementation and transport
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::auth::{Credentials, RequestSigner};
use crate::http::{params, Result, ValrError};
use reqwest::{Client, Method, Request, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://api.valr.com/v1";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint paths are appended to this verbatim, so a path prefix such as
    /// `/v1` is kept and becomes part of the signed path.
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// HTTP client for the VALR REST API
///
/// Cloning is cheap and clones share the connection pool and credentials.
#[derive(Debug, Clone)]
pub struct ValrClient {
    http_client: Client,
    base_url: Url,
    signer: Option<RequestSigner>,
}

impl ValrClient {
    /// Client for both public and private endpoints, default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(ClientConfig::default(), Some(credentials))
    }

    /// Client limited to public endpoints, default configuration
    pub fn public() -> Result<Self> {
        Self::with_config(ClientConfig::default(), None)
    }

    /// Client with credentials read from `VALR_API_KEY` / `VALR_API_SECRET`
    pub fn from_env() -> Result<Self> {
        Self::new(Credentials::from_env()?)
    }

    pub fn with_config(config: ClientConfig, credentials: Option<Credentials>) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ValrError::Config(format!(
                "base URL {} cannot carry endpoint paths",
                config.base_url
            )));
        }

        Ok(Self {
            http_client,
            base_url,
            signer: credentials.map(|credentials| RequestSigner::new(Arc::new(credentials))),
        })
    }

    /// Same transport and base URL, without credentials
    pub fn to_public(&self) -> Self {
        Self {
            http_client: self.http_client.clone(),
            base_url: self.base_url.clone(),
            signer: None,
        }
    }

    /// Same transport and base URL, signing with `credentials`
    pub fn to_private(&self, credentials: Credentials) -> Self {
        Self {
            http_client: self.http_client.clone(),
            base_url: self.base_url.clone(),
            signer: Some(RequestSigner::new(Arc::new(credentials))),
        }
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.signer.as_ref().map(RequestSigner::credentials)
    }

    pub fn has_credentials(&self) -> bool {
        self.signer.is_some()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the full URL from endpoint path segments and an optional encoded query.
    ///
    /// Each segment is percent-encoded on its own, so caller-supplied pairs,
    /// currencies and ids can never add, remove or climb path levels.
    fn endpoint_url(&self, segments: &[&str], query: Option<&str>) -> Result<Url> {
        if let Some(bad) = segments
            .iter()
            .find(|segment| matches!(**segment, "" | "." | ".."))
        {
            return Err(ValrError::InvalidPathSegment((*bad).to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ValrError::Config(format!("base URL {} cannot carry endpoint paths", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        url.set_query(query);
        Ok(url)
    }

    pub(crate) fn build_request(
        &self,
        method: Method,
        segments: &[&str],
        query: Option<&str>,
        json_body: Option<Vec<u8>>,
    ) -> Result<Request> {
        let url = self.endpoint_url(segments, query)?;
        let mut builder = self.http_client.request(method, url);
        if let Some(body) = json_body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }
        Ok(builder.build()?)
    }

    /// Sign (when credentials are present), send and classify by status.
    pub(crate) async fn send(&self, mut request: Request) -> Result<Response> {
        let signed = match &self.signer {
            Some(signer) => signer.sign(&mut request)?,
            None => false,
        };

        debug!(
            method = %request.method(),
            path = request.url().path(),
            signed,
            "sending request"
        );

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                path = response.url().path(),
                "request failed"
            );
            return Err(ValrError::Status {
                code: status.as_u16(),
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn require_credentials(&self) -> Result<()> {
        if self.signer.is_none() {
            return Err(ValrError::MissingCredentials);
        }
        Ok(())
    }

    /// GET a public endpoint and decode the JSON body
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: Option<&str>,
    ) -> Result<T> {
        let request = self.build_request(Method::GET, segments, query, None)?;
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    /// GET a private endpoint with encoded query options
    pub(crate) async fn get_private_json<Q, T>(
        &self,
        segments: &[&str],
        options: Option<&Q>,
    ) -> Result<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.require_credentials()?;
        let query = match options {
            Some(options) => params::encode(options)?,
            None => None,
        };
        self.get_json(segments, query.as_deref()).await
    }

    /// POST a JSON body to a private endpoint
    pub(crate) async fn post_private_json<B, T>(&self, segments: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.require_credentials()?;
        let payload = serde_json::to_vec(body)?;
        let request = self.build_request(Method::POST, segments, None, Some(payload))?;
        let response = self.send(request).await?;
        Self::decode(response).await
    }
}
