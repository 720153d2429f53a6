//! The gateway client for the MrWeb API.
//!
//! Every endpoint of this crate is a method on [`Client`],
//! or on one of the borrowed views it hands out:
//! [`Client::ai`], [`Client::fake_mail`], [`Client::hash_check`] and [`Client::tron`].
//!
//! # Example
//!
//! ```no_run
//! use mrweb::Client;
//!
//! #[tokio::main]
//! async fn main() -> mrweb::Result<()> {
//!     let client = Client::builder().test_key().build()?;
//!
//!     let text = client.translate("en", "سلام").await?;
//!     println!("{text}");
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use reqwest::{Response, Url};
use serde_json::Value;

use crate::config::Config;
use crate::error::{Error, Result};

/// The URLs of the MrWeb API.
pub mod url {
    use std::sync::LazyLock;

    use super::*;

    /// The base URL of the MrWeb API, every endpoint path is joined onto it.
    pub const BASE_URL: &str = "https://mrapiweb.ir/";

    /// [`BASE_URL`] parsed.
    pub static DEFAULT_BASE_URL: LazyLock<Url> =
        LazyLock::new(|| Url::parse(BASE_URL).expect("`BASE_URL` is a valid URL"));
}

/// The environment variable read by [`ClientBuilder::api_key_from_env`].
pub const API_KEY_ENV: &str = "MRWEB_APIKEY";

/// The public key the API accepts for testing, see [`ClientBuilder::test_key`].
pub const TEST_KEY: &str = "testkey";

/// Where the API key comes from.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ApiKey {
    /// No key, endpoints that need one will fail with [`Error::MissingParameter`].
    #[default]
    None,
    /// A key given by the caller.
    Key(String),
    /// The public [`TEST_KEY`].
    Test,
    /// The [`API_KEY_ENV`] environment variable, read when the client is built.
    Env,
}

impl ApiKey {
    fn resolve(self) -> Result<Option<String>> {
        match self {
            ApiKey::None => Ok(None),
            ApiKey::Key(key) => Ok(Some(key)),
            ApiKey::Test => Ok(Some(TEST_KEY.to_owned())),
            ApiKey::Env => std::env::var(API_KEY_ENV)
                .map(Some)
                .map_err(|source| Error::Env {
                    var: API_KEY_ENV,
                    source,
                }),
        }
    }
}

/// A Consuming-Builders style builder for [`Client`].
///
/// For the API key, the last call of [`Self::api_key`], [`Self::test_key`]
/// and [`Self::api_key_from_env`] wins.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    api_key: ApiKey,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Use another host instead of [`url::BASE_URL`].
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set a timeout for every request.
    ///
    /// Ignored if [`Self::http_client`] is used.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use the given API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = ApiKey::Key(key.into());
        self
    }

    /// Use the public [`TEST_KEY`].
    pub fn test_key(mut self) -> Self {
        self.api_key = ApiKey::Test;
        self
    }

    /// Read the API key from [`API_KEY_ENV`] when [`Self::build`] is called.
    pub fn api_key_from_env(mut self) -> Self {
        self.api_key = ApiKey::Env;
        self
    }

    /// Use a preconfigured [`reqwest::Client`].
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the [`Client`].
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidUrl`] if the base URL can not be parsed.
    /// - [`Error::Env`] if the key should be read from [`API_KEY_ENV`], but it is not set.
    /// - [`Error::Request`] if the underlying [`reqwest::Client`] can not be built.
    pub fn build(self) -> Result<Client> {
        let Self {
            base_url,
            timeout,
            api_key,
            http,
        } = self;

        let base_url = match base_url {
            Some(base_url) => with_trailing_slash(Url::parse(&base_url)?),
            None => url::DEFAULT_BASE_URL.clone(),
        };
        let api_key = api_key.resolve()?;
        let http = match http {
            Some(http) => http,
            None => build_http_client(timeout)?,
        };

        Ok(Client {
            http,
            base_url,
            api_key,
        })
    }
}

#[inline]
fn build_http_client(timeout: Option<Duration>) -> reqwest::Result<reqwest::Client> {
    let client_builder = reqwest::Client::builder();
    let client_builder = match timeout {
        Some(timeout) => client_builder.timeout(timeout),
        None => client_builder,
    };
    client_builder.build()
}

/// Endpoint paths are relative, so the base path must end with `/`,
/// otherwise [`Url::join`] would replace its last segment.
#[inline]
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// The MrWeb API client.
///
/// Cloning is cheap, the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// A client for [`url::BASE_URL`] without an API key.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: url::DEFAULT_BASE_URL.clone(),
            api_key: None,
        }
    }

    /// See [`ClientBuilder`].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Build a client from a [`Config`].
    ///
    /// The key source is chosen in this order:
    /// `use_test_key`, then `api_key_from_env`, then `api_key`.
    ///
    /// # Errors
    ///
    /// See [`ClientBuilder::build`].
    pub fn from_config(config: &Config) -> Result<Self> {
        let builder = Self::builder().base_url(config.base_url.as_str());
        let builder = if config.timeout > 0 {
            builder.timeout(Duration::from_secs(config.timeout))
        } else {
            builder
        };
        let builder = if config.use_test_key {
            builder.test_key()
        } else if config.api_key_from_env {
            builder.api_key_from_env()
        } else if let Some(key) = &config.api_key {
            builder.api_key(key.as_str())
        } else {
            builder
        };
        builder.build()
    }

    /// The base URL every endpoint is joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// The configured API key.
    ///
    /// # Errors
    ///
    /// [`Error::MissingParameter`] if there is no key.
    pub(crate) fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or(Error::MissingParameter("api key"))
    }

    /// Join `path` onto the base URL and append the URL-encoded `params` in order.
    pub(crate) fn endpoint<'a, I>(&self, path: &str, params: I) -> Result<Url>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut url = self.base_url.join(path)?;
        let mut params = params.into_iter().peekable();
        // `query_pairs_mut` leaves an empty `?` behind even if nothing is appended
        if params.peek().is_some() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }

    /// Join `path` onto the base URL and use the form-encoded `query` as the whole query string.
    pub(crate) fn endpoint_raw_query(&self, path: &str, query: &str) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        let query: String = ::url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        url.set_query(Some(&query));
        Ok(url)
    }

    /// Send a GET request and check the status.
    ///
    /// The query string is not logged, it may carry private keys.
    pub(crate) async fn get_response(&self, url: Url) -> Result<Response> {
        tracing::debug!(path = url.path(), "sending request");
        let response = self.http.get(url).send().await?.error_for_status()?;
        tracing::debug!(status = %response.status(), "received response");
        Ok(response)
    }

    pub(crate) async fn get_text(&self, url: Url) -> Result<String> {
        Ok(self.get_response(url).await?.text().await?)
    }

    pub(crate) async fn get_bytes(&self, url: Url) -> Result<Vec<u8>> {
        Ok(self.get_response(url).await?.bytes().await?.to_vec())
    }

    pub(crate) async fn get_json(&self, url: Url) -> Result<Value> {
        let body = self.get_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Render a JSON value as text, `null` counts as missing.
pub(crate) fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Extract `field` from `value` as text.
pub(crate) fn field(value: &Value, endpoint: &'static str, field: &'static str) -> Result<String> {
    value
        .get(field)
        .and_then(scalar)
        .ok_or(Error::MissingField { endpoint, field })
}

/// Move `field` out of `value`.
pub(crate) fn take_field(
    value: &mut Value,
    endpoint: &'static str,
    field: &'static str,
) -> Result<Value> {
    match value.get_mut(field).map(Value::take) {
        Some(Value::Null) | None => Err(Error::MissingField { endpoint, field }),
        Some(taken) => Ok(taken),
    }
}
