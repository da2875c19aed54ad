use crate::error::Error;
use http::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::error::Error as _;
use std::fmt;
use std::time::Duration;
use url::Url;

const API_KEY_HEADER: &str = "apikey";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for one hosted service: a base url plus the project api key.
///
/// Every request carries the key in the `apikey` header. Requests made on behalf of a user
/// additionally carry the user's access token as bearer token, without one the api key is
/// used instead. No retries are done, a failed request is reported as is.
#[derive(Clone)]
pub struct ServiceClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ServiceClient {
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_timeout(base_url, api_key, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(mut base_url: Url, api_key: impl Into<String>, timeout: Duration) -> Result<Self, Error> {
        // Url::join drops the last path segment unless the base ends with a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn std::error::Error, "failed to build http client");
            })?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, Error> {
        self.base_url.join(path.trim_start_matches('/')).map_err(Into::into)
    }

    /// Starts a request against `path`, authenticated as `access_token` if given.
    pub fn request(&self, method: Method, path: &str, access_token: Option<&str>) -> Result<RequestBuilder, Error> {
        let url = self.endpoint(path)?;
        let bearer = access_token.unwrap_or(&self.api_key);
        let mut authorization = HeaderValue::from_str(&format!("Bearer {bearer}"))?;
        authorization.set_sensitive(true);

        tracing::debug!(%method, %url, "sending service request");
        Ok(self
            .client
            .request(method, url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(AUTHORIZATION, authorization))
    }

    pub async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, Error> {
        let response = Self::execute(request).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|error| {
            tracing::warn!(error = &error as &dyn std::error::Error, "failed to parse service response");
            error.into()
        })
    }

    pub async fn send_empty(&self, request: RequestBuilder) -> Result<(), Error> {
        Self::execute(request).await.map(drop)
    }

    async fn execute(request: RequestBuilder) -> Result<Response, Error> {
        let response = request.send().await.inspect_err(|error| {
            tracing::warn!(error = error as &dyn std::error::Error, source = ?error.source(), "service request failed");
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!(%status, %body, "service returned an error");
        Err(Error::Status { status, body })
    }
}
