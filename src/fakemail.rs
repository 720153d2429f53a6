//! Disposable e-mail addresses.

use serde_json::Value;

use crate::client::{self, Client};
use crate::error::Result;

/// The endpoint path, relative to [`crate::client::url::BASE_URL`].
pub const PATH: &str = "api/fakemail.php";

/// The fake mail endpoints, see [`Client::fake_mail`].
#[derive(Debug, Clone, Copy)]
pub struct FakeMail<'a> {
    client: &'a Client,
}

impl Client {
    /// The fake mail endpoints.
    pub fn fake_mail(&self) -> FakeMail<'_> {
        FakeMail { client: self }
    }
}

impl FakeMail<'_> {
    /// Create a new disposable address.
    ///
    /// # Errors
    ///
    /// [`crate::Error::MissingField`] if the response has no `results.email`.
    pub async fn create(&self) -> Result<String> {
        let url = self.client.endpoint(PATH, [("method", "getNewMail")])?;
        let mut value = self.client.get_json(url).await?;
        let results = client::take_field(&mut value, PATH, "results")?;
        client::field(&results, PATH, "email")
    }

    /// The messages received by `email`, as the API returns them.
    pub async fn messages(&self, email: &str) -> Result<Value> {
        let url = self
            .client
            .endpoint(PATH, [("method", "getMessages"), ("email", email)])?;
        let mut value = self.client.get_json(url).await?;
        client::take_field(&mut value, PATH, "results")
    }
}
