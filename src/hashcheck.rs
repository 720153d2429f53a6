//! Transaction lookups by hash.

use serde_json::Value;

use crate::client::Client;
use crate::error::Result;

/// The endpoint paths, relative to [`crate::client::url::BASE_URL`].
#[allow(missing_docs)]
pub mod path {
    pub const TRON: &str = "api/cryptocheck/tron.php";
    pub const TOMOCHAIN: &str = "api/cryptocheck/tomochain.php";
}

/// The hash check endpoints, see [`Client::hash_check`].
#[derive(Debug, Clone, Copy)]
pub struct HashCheck<'a> {
    client: &'a Client,
}

impl Client {
    /// The hash check endpoints.
    pub fn hash_check(&self) -> HashCheck<'_> {
        HashCheck { client: self }
    }
}

impl HashCheck<'_> {
    async fn lookup(&self, path: &str, hash: &str) -> Result<Value> {
        let url = self.client.endpoint(path, [("hash", hash)])?;
        self.client.get_json(url).await
    }

    /// Look up a TRON transaction.
    pub async fn tron(&self, hash: &str) -> Result<Value> {
        self.lookup(path::TRON, hash).await
    }

    /// Look up a TomoChain transaction.
    pub async fn tomochain(&self, hash: &str) -> Result<Value> {
        self.lookup(path::TOMOCHAIN, hash).await
    }
}
