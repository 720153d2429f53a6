//! The error type shared by every endpoint.

use thiserror::Error;

/// Everything that can go wrong when talking to the MrWeb API.
///
/// Nothing is retried or recovered inside this crate,
/// the first failure is returned to the caller as is.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// The request could not be sent, or the server answered with a non-2xx status.
    ///
    /// The request URL is stripped, its query may carry API or wallet keys.
    #[error(transparent)]
    Request(reqwest::Error),
    /// The response body was expected to be JSON, but it was not.
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
    /// The JSON response did not carry the field we were looking for.
    #[error("`{endpoint}` response has no `{field}` field")]
    MissingField {
        /// The endpoint path, e.g. `api/telproxy.php`.
        endpoint: &'static str,
        /// The missing field name.
        field: &'static str,
    },
    /// The API reported a failure, the message is fixed per endpoint.
    #[error("{0}")]
    Api(String),
    /// An AI endpoint failed to answer.
    #[error("{message}")]
    Ai {
        /// The model-specific message.
        message: &'static str,
        /// What actually went wrong.
        #[source]
        source: Box<Error>,
    },
    /// The feature was permanently discontinued by the API.
    #[error("{0} Is End Of Support")]
    EndOfSupport(&'static str),
    /// A parameter that the endpoint requires was not provided.
    #[error("{0} is required")]
    MissingParameter(&'static str),
    /// The API key could not be read from the environment.
    #[error("failed to read the API key from the `{var}` environment variable")]
    Env {
        /// The environment variable name.
        var: &'static str,
        /// Why it could not be read.
        #[source]
        source: std::env::VarError,
    },
    /// The base URL, or an endpoint joined onto it, is not a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// There is no content in the response.
    #[error("There is no content in the response")]
    EmptyResponse,
    /// Failed to write the response to a file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Request(err.without_url())
    }
}

/// A [`Result`](std::result::Result) alias with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap `self` into an [`Error::Ai`] with the given message.
    pub(crate) fn into_ai(self, message: &'static str) -> Self {
        Error::Ai {
            message,
            source: Box::new(self),
        }
    }
}
