//! TRON wallet endpoints.

use std::fmt;

use serde_json::Value;

use crate::client::{self, Client};
use crate::error::Result;

/// The endpoint path, relative to [`crate::client::url::BASE_URL`].
pub const PATH: &str = "api/tronapi.php";

/// A TRX transfer sent through [`Tron::send`].
///
/// [`fmt::Debug`] never prints the private key.
#[derive(Clone)]
pub struct TronTransfer {
    /// The private key of `from`.
    pub private_key: String,
    /// The sending address.
    pub from: String,
    /// The receiving address.
    pub to: String,
    /// The amount of TRX, as the API expects it.
    pub amount: String,
}

impl fmt::Debug for TronTransfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TronTransfer")
            .field("private_key", &"<redacted>")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("amount", &self.amount)
            .finish()
    }
}

/// The TRON wallet endpoints, see [`Client::tron`].
#[derive(Debug, Clone, Copy)]
pub struct Tron<'a> {
    client: &'a Client,
}

impl Client {
    /// The TRON wallet endpoints.
    pub fn tron(&self) -> Tron<'_> {
        Tron { client: self }
    }
}

impl Tron<'_> {
    async fn action<'a>(
        &self,
        params: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Value> {
        let url = self.client.endpoint(PATH, params)?;
        self.client.get_json(url).await
    }

    /// Generate a new address, with its keys.
    pub async fn generate(&self) -> Result<Value> {
        self.action([("action", "genaddress")]).await
    }

    /// The balance of `address`.
    ///
    /// # Errors
    ///
    /// [`crate::Error::MissingField`] if the response has no `balance`.
    pub async fn balance(&self, address: &str) -> Result<String> {
        let value = self
            .action([("action", "getbalance"), ("address", address)])
            .await?;
        client::field(&value, PATH, "balance")
    }

    /// Information about `address`.
    pub async fn info(&self, address: &str) -> Result<Value> {
        self.action([("action", "addressinfo"), ("address", address)])
            .await
    }

    /// Send TRX, returns the answer of the API.
    ///
    /// <div class="warning">
    ///
    /// The private key is sent to the remote host.
    ///
    /// </div>
    pub async fn send(&self, transfer: &TronTransfer) -> Result<Value> {
        self.action([
            ("action", "sendtrx"),
            ("key", transfer.private_key.as_str()),
            ("fromaddress", transfer.from.as_str()),
            ("toaddress", transfer.to.as_str()),
            ("amount", transfer.amount.as_str()),
        ])
        .await
    }
}
