//! Beeline portal blocking client implementation.

use crate::transport::{Method, Payload, Reply};
use crate::{Error, Result};
use reqwest::Url;
use reqwest::blocking::Response;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, warn};

const API_URL: &str = "https://cloudpbx.beeline.ru/apis/portal/";
const AUTH_HEADER: &str = "X-MPBX-API-AUTH-TOKEN";
const USER_AGENT_VALUE: &str = concat!("beeline-portal-rs/", env!("CARGO_PKG_VERSION"));

/// Blocking client for the Beeline Cloud PBX portal API.
///
/// Use [`Client::new`] for defaults or [`Client::builder`] for custom settings
/// like a proxy, TLS behavior, or a different base URL. The client holds one
/// HTTP session carrying the API token header and can be shared between
/// threads.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::blocking::Client,
    base_url: String,
    proxy: Option<String>,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder(api_token: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_token)
    }

    /// Create a client for the production portal.
    ///
    /// # Examples
    /// ```no_run
    /// # use beeline_portal::Client;
    /// # fn main() -> Result<(), beeline_portal::Error> {
    /// let client = Client::new("my-api-token")?;
    /// for abonent in client.get_abonents()? {
    ///     println!("{} {}", abonent.first_name, abonent.last_name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_token).build()
    }

    /// Base URL every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the proxy URL if one was configured.
    ///
    /// Returns `None` when no proxy was set on the builder.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Issue one request against the portal and decode the reply.
    ///
    /// `path` is relative to the base URL; each `/`-separated segment is
    /// percent-encoded on its own and `query` pairs are URL-encoded onto it.
    /// A status above 204 fails with [`Error::Api`] carrying the portal's
    /// error code and description. A body that is not JSON comes back as
    /// [`Reply::Text`].
    ///
    /// Every typed operation goes through the same request path; this call
    /// is public so endpoints without a dedicated method can still be reached.
    pub fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        payload: Payload,
    ) -> Result<Reply> {
        self.request(method, &split_path(path), query, payload)
    }

    /// GET a file and return its raw bytes without decoding.
    pub fn download(&self, path: &str) -> Result<Vec<u8>> {
        self.download_from(&split_path(path))
    }

    pub(crate) fn request(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, String)],
        payload: Payload,
    ) -> Result<Reply> {
        let response = self.send(method, segments, query, payload)?;
        let body = response.text()?;
        Ok(Reply::from_body(body))
    }

    pub(crate) fn download_from(&self, segments: &[&str]) -> Result<Vec<u8>> {
        let response = self.send(Method::Get, segments, &[], Payload::Empty)?;
        Ok(response.bytes()?.to_vec())
    }

    /// Common GET request pattern.
    pub(crate) fn get(&self, segments: &[&str]) -> Result<Reply> {
        self.request(Method::Get, segments, &[], Payload::Empty)
    }

    /// Request without a body; parameters, if any, travel in the query.
    pub(crate) fn call(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<Reply> {
        self.request(method, segments, query, Payload::Empty)
    }

    /// Request with a JSON body.
    pub(crate) fn send_json(&self, method: Method, segments: &[&str], body: Value) -> Result<Reply> {
        self.request(method, segments, &[], Payload::Json(body))
    }

    fn send(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, String)],
        payload: Payload,
    ) -> Result<Response> {
        let url = self.url(segments, query)?;
        let path = url.path().to_string();
        debug!(%method, %url, "sending portal request");

        let request = self.http.request(method.as_reqwest(), url);
        let request = match payload {
            Payload::Empty => request,
            Payload::Json(body) => request.json(&body),
            Payload::Encoded(body) => request.body(body),
        };

        let response = request.send().map_err(|err| {
            warn!(%method, %path, error = %err, "portal request did not complete");
            Error::from(err)
        })?;

        let status = response.status().as_u16();
        debug!(%method, %path, status, "portal responded");
        if status > 204 {
            let body = response.text().unwrap_or_default();
            let err = Error::from_response(status, &body);
            warn!(
                %method,
                %path,
                status,
                code = err.code(),
                description = %err.description(),
                "portal returned an error"
            );
            return Err(err);
        }

        Ok(response)
    }

    /// Append percent-encoded path segments to the base URL, then the query.
    fn url(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|err| Error::InvalidUrl(format!("{}: {err}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(format!("{}: cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}

/// Split a relative path into its non-empty segments.
fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// Builder for configuring a portal client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    api_token: String,
    base_url: String,
    proxy: Option<String>,
    danger_accept_invalid_certs: bool,
    user_agent: String,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - Production portal URL
    /// - No proxy
    /// - `danger_accept_invalid_certs = false`
    /// - `beeline-portal-rs/<version>` user agent
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: API_URL.to_string(),
            proxy: None,
            danger_accept_invalid_certs: false,
            user_agent: USER_AGENT_VALUE.to_string(),
        }
    }

    /// Override the portal base URL.
    ///
    /// Useful for testing against a mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a proxy URL (e.g., "http://127.0.0.1:8080" or "socks5://127.0.0.1:1080").
    ///
    /// This uses reqwest's proxy support for all requests.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Control whether to accept invalid TLS certificates (default: false).
    pub fn danger_accept_invalid_certs(mut self, value: bool) -> Self {
        self.danger_accept_invalid_certs = value;
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client.
    ///
    /// No request is sent; the base URL and token are only validated.
    ///
    /// # Examples
    /// ```no_run
    /// # use beeline_portal::Client;
    /// # fn main() -> Result<(), beeline_portal::Error> {
    /// let client = Client::builder("my-api-token")
    ///     .proxy("socks5://127.0.0.1:1080")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Client> {
        let base = Url::parse(&self.base_url)
            .map_err(|err| Error::InvalidUrl(format!("{}: {err}", self.base_url)))?;
        if base.cannot_be_a_base() {
            return Err(Error::InvalidUrl(format!("{}: cannot be a base", self.base_url)));
        }

        let mut token = HeaderValue::from_str(&self.api_token)?;
        token.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTH_HEADER, token);

        let mut builder = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .user_agent(self.user_agent)
            .danger_accept_invalid_certs(self.danger_accept_invalid_certs);

        if let Some(proxy_url) = &self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        let http = builder.build()?;

        Ok(Client {
            http,
            base_url: self.base_url,
            proxy: self.proxy,
        })
    }
}
