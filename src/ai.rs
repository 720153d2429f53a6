//! The AI chat endpoints.
//!
//! Every answer is returned as the raw text of the response.
//! Every failure is wrapped into [`Error::Ai`] with a model-specific message.
//!
//! # Example
//!
//! ```no_run
//! use mrweb::Client;
//!
//! #[tokio::main]
//! async fn main() -> mrweb::Result<()> {
//!     let client = Client::new();
//!     let answer = client.ai().gpt("What is Rust?").await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```

use reqwest::Url;

use crate::client::Client;
use crate::error::{Error, Result};
use crate::tool;

/// The endpoint paths, relative to [`crate::client::url::BASE_URL`].
#[allow(missing_docs)]
pub mod path {
    pub const BARD: &str = "bardai/ask";
    pub const GPT: &str = "ai/";
    pub const GEMINI: &str = "api/geminiai.php";
    pub const CODE_AI: &str = "api/aiblack.php";
    pub const GEMMA: &str = "chatbot/newrouter.php";
    pub const ZZZCODE: &str = "chatbot/zzzcode.php";
}

/// The default language of [`Ai::zzzcode`].
pub const DEFAULT_ZZZCODE_LANGUAGE: &str = "python";

/// The default mode of [`Ai::zzzcode`].
pub const DEFAULT_ZZZCODE_MODE: &str = "normal";

/// The AI endpoints, see [`Client::ai`].
#[derive(Debug, Clone, Copy)]
pub struct Ai<'a> {
    client: &'a Client,
}

impl Client {
    /// The AI chat endpoints.
    pub fn ai(&self) -> Ai<'_> {
        Ai { client: self }
    }
}

impl Ai<'_> {
    /// Send the request, a blank answer counts as a failure.
    async fn ask(&self, url: Result<Url>, message: &'static str) -> Result<String> {
        let answer = async {
            let answer = self.client.get_text(url?).await?;
            if tool::is_blank(&answer) {
                return Err(Error::EmptyResponse);
            }
            Ok::<_, Error>(answer)
        }
        .await;
        answer.map_err(|err| err.into_ai(message))
    }

    /// Ask Google Bard.
    pub async fn bard(&self, query: &str) -> Result<String> {
        let url = self.client.endpoint(path::BARD, [("text", query)]);
        self.ask(url, "Failed To Get Response From Bard").await
    }

    /// Ask ChatGPT.
    pub async fn gpt(&self, query: &str) -> Result<String> {
        let url = self.client.endpoint_raw_query(path::GPT, query);
        self.ask(
            url,
            "Failed To Get Answer. Make Sure That You Are Connected To Internet & VPN is off",
        )
        .await
    }

    /// EvilGPT.
    ///
    /// # Errors
    ///
    /// Always [`Error::EndOfSupport`], no request is sent.
    pub async fn evil_gpt(&self, _query: &str) -> Result<String> {
        tracing::warn!("EvilGPT was discontinued by the API");
        Err(Error::EndOfSupport("EvilGPT"))
    }

    /// Ask Google Gemini.
    pub async fn gemini(&self, query: &str) -> Result<String> {
        let url = self.client.endpoint_raw_query(path::GEMINI, query);
        self.ask(url, "No Answer Found From Gemini. Please Try Again!")
            .await
    }

    /// Ask the coding assistant.
    pub async fn code_ai(&self, query: &str) -> Result<String> {
        let url = self.client.endpoint_raw_query(path::CODE_AI, query);
        self.ask(url, "No Answer Found From CodeAI. Please Try Again!")
            .await
    }

    /// Ask Google Gemma.
    pub async fn gemma(&self, query: &str) -> Result<String> {
        let url = self.client.endpoint_raw_query(path::GEMMA, query);
        self.ask(url, "No Answer Found From Gemma. Please Try Again!")
            .await
    }

    /// Ask zzzcode to write code in `language`.
    ///
    /// See [`DEFAULT_ZZZCODE_LANGUAGE`] and [`DEFAULT_ZZZCODE_MODE`] for the usual arguments.
    pub async fn zzzcode(&self, prompt: &str, language: &str, mode: &str) -> Result<String> {
        let url = self.client.endpoint(
            path::ZZZCODE,
            [("question", prompt), ("lang", language), ("mode", mode)],
        );
        self.ask(url, "No Answer Found From Zzzcode. Please Try Again!")
            .await
    }
}
