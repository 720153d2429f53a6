//! The general endpoints of the MrWeb API.
//!
//! Every method sends exactly one GET request, except [`Client::insta`]
//! and [`Client::bing_dalle`], which send none.

use std::fmt;
use std::path::Path;

use serde_json::Value;
use url::Url;

use crate::client::{self, Client};
use crate::download::save_response;
use crate::error::{Error, Result};
use crate::tool;

/// The endpoint paths, relative to [`crate::client::url::BASE_URL`].
#[allow(missing_docs)]
pub mod path {
    pub const TRANSLATE: &str = "api/translate.php";
    pub const OCR: &str = "api/ocr.php";
    pub const BAD_WORD: &str = "api/badword.php";
    pub const BIO: &str = "api/bio.php";
    pub const AI_TEXT: &str = "api/aitext.php";
    pub const NOTEBOOK: &str = "api/notebook.php";
    pub const EMAIL: &str = "api/email.php";
    pub const IP_INFO: &str = "api/ipinfo.php";
    pub const VOICE: &str = "api/voice.php";
    pub const IMAGE_GEN: &str = "api/imagegen.php";
    pub const PROXY: &str = "api/telproxy.php";
    pub const FAL: &str = "api/fal.php";
    pub const WORLD_CLOCK: &str = "api/zone.php";
    pub const YOUTUBE: &str = "api/yt.php";
    pub const WALLET: &str = "api/wallet.php";
    pub const GOOGLE_DRIVE: &str = "api/gdrive.php";
    pub const WIKIPEDIA: &str = "wikipedia/";
    pub const CHROME: &str = "api/chrome.php";
    pub const FAKE_SITE: &str = "api/fakesite.php";
    pub const WEBSHOT: &str = "api/webshot.php";
    pub const BARCODE: &str = "api/barcode.php";
    pub const DOMAIN: &str = "api/domain.php";
    pub const QR: &str = "api/qr/qrcode.php";
}

/// The voice used by [`Client::voice_maker`] when the caller has no preference.
pub const DEFAULT_VOICE: &str = "man";

/// The only language the Wikipedia endpoint serves.
pub const WIKIPEDIA_LANG: &str = "fa";

/// Where the command line tool saves QR codes by default.
pub const DEFAULT_QR_FILE: &str = "qr.png";

/// The size of the screenshots taken by [`Client::webshot`].
const WEBSHOT_SIZE: &str = "512";

const NO_PARAMS: [(&str, &str); 0] = [];

/// A transfer sent through [`Client::send_web3`].
///
/// [`fmt::Debug`] never prints the private key.
#[derive(Clone)]
pub struct Web3Transfer {
    /// The private key of the sending wallet.
    pub private_key: String,
    /// The receiving address.
    pub address: String,
    /// The amount to send, as the API expects it.
    pub amount: String,
    /// The RPC endpoint of the chain.
    pub rpc: String,
    /// The chain ID.
    pub chain_id: String,
}

impl fmt::Debug for Web3Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Web3Transfer")
            .field("private_key", &"<redacted>")
            .field("address", &self.address)
            .field("amount", &self.amount)
            .field("rpc", &self.rpc)
            .field("chain_id", &self.chain_id)
            .finish()
    }
}

impl Client {
    /// Translate `text` into the language `to`, e.g. `"en"`.
    ///
    /// # Errors
    ///
    /// [`Error::Api`] if the response has no translation.
    pub async fn translate(&self, to: &str, text: &str) -> Result<String> {
        let url = self.endpoint(path::TRANSLATE, [("to", to), ("text", text)])?;
        let value = self.get_json(url).await?;
        client::field(&value, path::TRANSLATE, "translate")
            .map_err(|_| Error::Api(format!("Translate Error For Lang {to}")))
    }

    /// Read the text of the image at `image_url`, in the language `lang`.
    ///
    /// # Errors
    ///
    /// [`Error::Api`] if the response has no result.
    pub async fn ocr(&self, lang: &str, image_url: &str) -> Result<String> {
        let url = self.endpoint(path::OCR, [("url", image_url), ("lang", lang)])?;
        let value = self.get_json(url).await?;
        client::field(&value, path::OCR, "result")
            .map_err(|_| Error::Api(format!("Error In OCR Lang {lang}")))
    }

    /// Whether `text` contains a bad word.
    ///
    /// Anything but a JSON `true` in the `isbadword` field counts as `false`.
    pub async fn is_bad_word(&self, text: &str) -> Result<bool> {
        let url = self.endpoint(path::BAD_WORD, [("text", text)])?;
        let value = self.get_json(url).await?;
        Ok(value.get("isbadword") == Some(&Value::Bool(true)))
    }

    /// A random bio.
    pub async fn random_bio(&self) -> Result<String> {
        let url = self.endpoint(path::BIO, NO_PARAMS)?;
        self.get_text(url).await
    }

    /// Whether `text` was written by an AI, i.e. the reported AI percentage is not `0%`.
    ///
    /// # Errors
    ///
    /// [`Error::MissingField`] if the response has no `aipercent` field.
    pub async fn is_ai_text(&self, text: &str) -> Result<bool> {
        let url = self.endpoint(path::AI_TEXT, [("text", text)])?;
        let value = self.get_json(url).await?;
        let percent = client::field(&value, path::AI_TEXT, "aipercent")?;
        Ok(percent != "0%")
    }

    /// Render `text` as a handwritten notebook page, returns the image bytes.
    pub async fn notebook(&self, text: &str) -> Result<Vec<u8>> {
        let text = tool::dash_spaces(text);
        let url = self.endpoint(path::NOTEBOOK, [("text", text.as_str())])?;
        self.get_bytes(url).await
    }

    /// Same as [`Self::notebook`], but the image is written to `file_path`.
    pub async fn notebook_to_file<P: AsRef<Path>>(&self, text: &str, file_path: P) -> Result<P> {
        let text = tool::dash_spaces(text);
        let url = self.endpoint(path::NOTEBOOK, [("text", text.as_str())])?;
        save_response(self.get_response(url).await?, file_path).await
    }

    /// Send an e-mail.
    ///
    /// The API does not report delivery, so the confirmation only means the request succeeded.
    pub async fn email(&self, to: &str, subject: &str, message: &str) -> Result<String> {
        let url = self.endpoint(
            path::EMAIL,
            [("to", to), ("subject", subject), ("message", message)],
        )?;
        self.get_response(url).await?;
        Ok(format!("Email Sent To {to}"))
    }

    /// Information about the IP address `ip`.
    ///
    /// # Errors
    ///
    /// [`Error::Api`] if the response is not JSON.
    pub async fn ip_info(&self, ip: &str) -> Result<Value> {
        let url = self.endpoint(path::IP_INFO, [("ipaddr", ip)])?;
        match self.get_json(url).await {
            Err(Error::Json(_)) => Err(Error::Api(format!(
                "Failed To Get This IP Information : {ip}"
            ))),
            result => result,
        }
    }

    /// Rewrite an Instagram link so it can be previewed, see [`tool::INSTAGRAM_MIRROR`].
    ///
    /// No request is sent.
    pub fn insta(&self, link: &str) -> String {
        tool::instagram_mirror(link)
    }

    /// Speak `text` with the voice `say_as` (see [`DEFAULT_VOICE`]),
    /// the audio is written to `file_path`.
    pub async fn voice_maker<P: AsRef<Path>>(
        &self,
        text: &str,
        say_as: &str,
        file_path: P,
    ) -> Result<P> {
        let url = self.voice_url(text, say_as)?;
        save_response(self.get_response(url).await?, file_path).await
    }

    /// Same as [`Self::voice_maker`], but returns the audio bytes.
    pub async fn voice_maker_bytes(&self, text: &str, say_as: &str) -> Result<Vec<u8>> {
        let url = self.voice_url(text, say_as)?;
        self.get_bytes(url).await
    }

    fn voice_url(&self, text: &str, say_as: &str) -> Result<Url> {
        let text = tool::dash_spaces(text);
        self.endpoint(path::VOICE, [("sayas", say_as), ("text", text.as_str())])
    }

    /// Generate an image from `text`, returns the raw answer of the API.
    ///
    /// # Errors
    ///
    /// [`Error::MissingParameter`] if no API key is configured.
    pub async fn image_gen(&self, text: &str) -> Result<String> {
        let key = self.api_key()?;
        let text = tool::dash_spaces(text);
        let url = self.endpoint(path::IMAGE_GEN, [("key", key), ("imgtext", text.as_str())])?;
        self.get_text(url).await
    }

    /// A Telegram proxy link.
    pub async fn proxy(&self) -> Result<String> {
        let url = self.endpoint(path::PROXY, NO_PARAMS)?;
        let value = self.get_json(url).await?;
        client::field(&value, path::PROXY, "connect")
    }

    /// A Hafez fal, the image is written to `file_path`.
    pub async fn fal<P: AsRef<Path>>(&self, file_path: P) -> Result<P> {
        let url = self.endpoint(path::FAL, NO_PARAMS)?;
        save_response(self.get_response(url).await?, file_path).await
    }

    /// Same as [`Self::fal`], but returns the image bytes.
    pub async fn fal_bytes(&self) -> Result<Vec<u8>> {
        let url = self.endpoint(path::FAL, NO_PARAMS)?;
        self.get_bytes(url).await
    }

    /// The current time around the world.
    pub async fn world_clock(&self) -> Result<String> {
        let url = self.endpoint(path::WORLD_CLOCK, NO_PARAMS)?;
        self.get_text(url).await
    }

    /// Download links of the YouTube video `video_id`, as the API returns them.
    ///
    /// # Errors
    ///
    /// [`Error::MissingParameter`] if no API key is configured.
    pub async fn youtube(&self, video_id: &str) -> Result<String> {
        let key = self.api_key()?;
        let url = self.endpoint(path::YOUTUBE, [("key", key), ("id", video_id)])?;
        self.get_text(url).await
    }

    /// Send coins on an EVM chain, returns the raw answer of the API.
    ///
    /// <div class="warning">
    ///
    /// The private key is sent to the remote host.
    ///
    /// </div>
    pub async fn send_web3(&self, transfer: &Web3Transfer) -> Result<String> {
        let url = self.endpoint(
            path::WALLET,
            [
                ("key", transfer.private_key.as_str()),
                ("address", transfer.address.as_str()),
                ("amount", transfer.amount.as_str()),
                ("rpc", transfer.rpc.as_str()),
                ("chainid", transfer.chain_id.as_str()),
            ],
        )?;
        self.get_text(url).await
    }

    /// A direct download link for the Google Drive share `link`.
    pub async fn google_drive(&self, link: &str) -> Result<String> {
        let url = self.endpoint(path::GOOGLE_DRIVE, [("url", link)])?;
        let value = self.get_json(url).await?;
        client::field(&value, path::GOOGLE_DRIVE, "link")
    }

    /// Bing DALL-E image generation.
    ///
    /// # Errors
    ///
    /// Always [`Error::EndOfSupport`], no request is sent.
    pub async fn bing_dalle(&self, _text: &str) -> Result<String> {
        tracing::warn!("Bing Dalle was discontinued by the API");
        Err(Error::EndOfSupport("Bing Dalle"))
    }

    /// Search the Persian Wikipedia, see [`WIKIPEDIA_LANG`].
    pub async fn wikipedia(&self, query: &str) -> Result<String> {
        let url = self.endpoint(path::WIKIPEDIA, [("find", query), ("lang", WIKIPEDIA_LANG)])?;
        self.get_text(url).await
    }

    /// Download the Chrome extension `id` as a `.crx` file to `file_path`.
    pub async fn chrome_extension<P: AsRef<Path>>(&self, id: &str, file_path: P) -> Result<P> {
        let url = self.endpoint(path::CHROME, [("id", id)])?;
        save_response(self.get_response(url).await?, file_path).await
    }

    /// Same as [`Self::chrome_extension`], but returns the `.crx` bytes.
    pub async fn chrome_extension_bytes(&self, id: &str) -> Result<Vec<u8>> {
        let url = self.endpoint(path::CHROME, [("id", id)])?;
        self.get_bytes(url).await
    }

    /// Whether `site` is a real site, as opposed to a phishing copy.
    ///
    /// # Errors
    ///
    /// [`Error::MissingField`] if `is_real` is missing or is not a boolean.
    pub async fn fake_site(&self, site: &str) -> Result<bool> {
        let url = self.endpoint(path::FAKE_SITE, [("site", site)])?;
        let value = self.get_json(url).await?;
        match value.get("is_real") {
            Some(Value::Bool(is_real)) => Ok(*is_real),
            Some(Value::String(is_real)) if is_real == "true" => Ok(true),
            Some(Value::String(is_real)) if is_real == "false" => Ok(false),
            _ => Err(Error::MissingField {
                endpoint: path::FAKE_SITE,
                field: "is_real",
            }),
        }
    }

    /// Take a 512x512 screenshot of `site`, the image is written to `file_path`.
    ///
    /// # Errors
    ///
    /// [`Error::MissingParameter`] if no API key is configured.
    pub async fn webshot<P: AsRef<Path>>(&self, site: &str, file_path: P) -> Result<P> {
        let url = self.webshot_url(site)?;
        save_response(self.get_response(url).await?, file_path).await
    }

    /// Same as [`Self::webshot`], but returns the image bytes.
    ///
    /// # Errors
    ///
    /// [`Error::MissingParameter`] if no API key is configured.
    pub async fn webshot_bytes(&self, site: &str) -> Result<Vec<u8>> {
        let url = self.webshot_url(site)?;
        self.get_bytes(url).await
    }

    fn webshot_url(&self, site: &str) -> Result<Url> {
        let key = self.api_key()?;
        self.endpoint(
            path::WEBSHOT,
            [
                ("key", key),
                ("url", site),
                ("fullSize", "false"),
                ("height", WEBSHOT_SIZE),
                ("width", WEBSHOT_SIZE),
            ],
        )
    }

    /// Look up the product behind the barcode `code`.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingParameter`] if no API key is configured.
    /// - [`Error::Api`] with the message of the API if there is no result.
    pub async fn barcode(&self, code: &str) -> Result<String> {
        let key = self.api_key()?;
        let url = self.endpoint(path::BARCODE, [("key", key), ("code", code)])?;
        let value = self.get_json(url).await?;
        if let Some(result) = value.get("result").and_then(client::scalar) {
            return Ok(result);
        }
        match value.get("message").and_then(client::scalar) {
            Some(message) => Err(Error::Api(message)),
            None => Err(Error::MissingField {
                endpoint: path::BARCODE,
                field: "result",
            }),
        }
    }

    /// Whois-like information about `domain`.
    pub async fn domain_check(&self, domain: &str) -> Result<Value> {
        let url = self.endpoint(path::DOMAIN, [("domain", domain)])?;
        self.get_json(url).await
    }

    /// Encode `text` as a QR code, returns the PNG bytes.
    pub async fn qr_encode(&self, text: &str) -> Result<Vec<u8>> {
        let url = self.endpoint(path::QR, [("action", "encode"), ("text", text)])?;
        self.get_bytes(url).await
    }

    /// Same as [`Self::qr_encode`], but the PNG is written to `file_path`.
    pub async fn qr_encode_to_file<P: AsRef<Path>>(&self, text: &str, file_path: P) -> Result<P> {
        let url = self.endpoint(path::QR, [("action", "encode"), ("text", text)])?;
        save_response(self.get_response(url).await?, file_path).await
    }

    /// Decode the QR code image at `image_url`.
    pub async fn qr_decode(&self, image_url: &str) -> Result<String> {
        let url = self.endpoint(path::QR, [("action", "decode"), ("url", image_url)])?;
        self.get_text(url).await
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    async fn mock_client() -> (MockServer, Client) {
        let server = MockServer::start_async().await;
        let client = Client::builder()
            .base_url(server.base_url())
            .api_key("secret")
            .build()
            .unwrap();
        (server, client)
    }

    #[tokio::test]
    async fn test_translate() {
        let (server, client) = mock_client().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/translate.php")
                    .query_param("to", "en")
                    .query_param("text", "سلام دنیا");
                then.status(200).json_body(json!({"translate": "hello world"}));
            })
            .await;

        let text = client.translate("en", "سلام دنیا").await.unwrap();
        assert_eq!(text, "hello world");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_translate_error() {
        let (server, client) = mock_client().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/translate.php");
                then.status(200).json_body(json!({"error": "bad lang"}));
            })
            .await;

        let err = client.translate("xx", "hi").await.unwrap_err();
        assert_eq!(err.to_string(), "Translate Error For Lang xx");
    }

    #[tokio::test]
    async fn test_ocr() {
        let (server, client) = mock_client().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/ocr.php")
                    .query_param("url", "https://example.com/a.png")
                    .query_param("lang", "fa");
                then.status(200).json_body(json!({"result": "متن"}));
            })
            .await;

        let text = client.ocr("fa", "https://example.com/a.png").await.unwrap();
        assert_eq!(text, "متن");
        mock.assert_async().await;

        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/ocr.php").query_param("lang", "xx");
                then.status(200).json_body(json!({}));
            })
            .await;
        let err = client.ocr("xx", "https://example.com/a.png").await.unwrap_err();
        assert_eq!(err.to_string(), "Error In OCR Lang xx");
    }

    #[tokio::test]
    async fn test_is_bad_word() {
        let (server, client) = mock_client().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/badword.php")
                    .query_param("text", "bad");
                then.status(200).json_body(json!({"isbadword": true}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/badword.php")
                    .query_param("text", "fine");
                then.status(200).json_body(json!({"isbadword": "yes"}));
            })
            .await;

        assert!(client.is_bad_word("bad").await.unwrap());
        // only a JSON `true` counts
        assert!(!client.is_bad_word("fine").await.unwrap());
    }

    #[tokio::test]
    async fn test_is_ai_text() {
        let (server, client) = mock_client().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/aitext.php").query_param("text", "human");
                then.status(200).json_body(json!({"aipercent": "0%"}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/aitext.php").query_param("text", "robot");
                then.status(200).json_body(json!({"aipercent": "87%"}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/aitext.php").query_param("text", "broken");
                then.status(200).json_body(json!({}));
            })
            .await;

        assert!(!client.is_ai_text("human").await.unwrap());
        assert!(client.is_ai_text("robot").await.unwrap());
        assert!(matches!(
            client.is_ai_text("broken").await,
            Err(Error::MissingField {
                field: "aipercent",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_raw_text_endpoints() {
        let (server, client) = mock_client().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/bio.php");
                then.status(200).body("a random bio");
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/zone.php");
                then.status(200).body("Tehran 12:00");
            })
            .await;
        let wiki = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/wikipedia/")
                    .query_param("find", "rust")
                    .query_param("lang", WIKIPEDIA_LANG);
                then.status(200).body("rust article");
            })
            .await;

        assert_eq!(client.random_bio().await.unwrap(), "a random bio");
        assert_eq!(client.world_clock().await.unwrap(), "Tehran 12:00");
        assert_eq!(client.wikipedia("rust").await.unwrap(), "rust article");
        wiki.assert_async().await;
    }

    #[tokio::test]
    async fn test_notebook_dashes_spaces() {
        let (server, client) = mock_client().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/notebook.php")
                    .query_param("text", "dear-diary");
                then.status(200).body(b"notebook-png");
            })
            .await;

        let bytes = client.notebook("dear diary").await.unwrap();
        assert_eq!(bytes, b"notebook-png");

        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("notebook.png");
        client
            .notebook_to_file("dear diary", &file_path)
            .await
            .unwrap();
        assert_eq!(std::fs::read(&file_path).unwrap(), b"notebook-png");
        mock.assert_hits_async(2).await;
    }

    #[tokio::test]
    async fn test_email() {
        let (server, client) = mock_client().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/email.php")
                    .query_param("to", "me@example.com")
                    .query_param("subject", "hi")
                    .query_param("message", "hello there");
                then.status(200).body("ok");
            })
            .await;

        let sent = client
            .email("me@example.com", "hi", "hello there")
            .await
            .unwrap();
        assert_eq!(sent, "Email Sent To me@example.com");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_ip_info() {
        let (server, client) = mock_client().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/ipinfo.php")
                    .query_param("ipaddr", "1.1.1.1");
                then.status(200)
                    .json_body(json!({"country": "AU", "org": "Cloudflare"}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/ipinfo.php")
                    .query_param("ipaddr", "nope");
                then.status(200).body("invalid ip");
            })
            .await;

        let info = client.ip_info("1.1.1.1").await.unwrap();
        assert_eq!(info["org"], "Cloudflare");

        let err = client.ip_info("nope").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed To Get This IP Information : nope");
    }

    #[test]
    fn test_insta() {
        let client = Client::new();
        assert_eq!(
            client.insta("https://instagram.com/reel/xyz"),
            "https://ddinstagram.com/reel/xyz"
        );
    }

    #[tokio::test]
    async fn test_voice_maker() {
        let (server, client) = mock_client().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/voice.php")
                    .query_param("sayas", DEFAULT_VOICE)
                    .query_param("text", "good-morning");
                then.status(200).body(b"ID3 audio");
            })
            .await;

        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("voice.mp3");
        client
            .voice_maker("good morning", DEFAULT_VOICE, &file_path)
            .await
            .unwrap();
        assert_eq!(std::fs::read(&file_path).unwrap(), b"ID3 audio");
        assert_eq!(
            client
                .voice_maker_bytes("good morning", DEFAULT_VOICE)
                .await
                .unwrap(),
            b"ID3 audio"
        );
        mock.assert_hits_async(2).await;
    }

    #[tokio::test]
    async fn test_keyed_endpoints() {
        let (server, client) = mock_client().await;
        let image = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/imagegen.php")
                    .query_param("key", "secret")
                    .query_param("imgtext", "a-red-cat");
                then.status(200).body("https://cdn.example.com/cat.png");
            })
            .await;
        let youtube = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/yt.php")
                    .query_param("key", "secret")
                    .query_param("id", "dQw4w9WgXcQ");
                then.status(200).body("{\"links\":[]}");
            })
            .await;

        assert_eq!(
            client.image_gen("a red cat").await.unwrap(),
            "https://cdn.example.com/cat.png"
        );
        assert_eq!(
            client.youtube("dQw4w9WgXcQ").await.unwrap(),
            "{\"links\":[]}"
        );
        image.assert_async().await;
        youtube.assert_async().await;
    }

    #[tokio::test]
    async fn test_keyed_endpoints_without_key() {
        let server = MockServer::start_async().await;
        let client = Client::builder().base_url(server.base_url()).build().unwrap();
        let temp_dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            client.image_gen("cat").await,
            Err(Error::MissingParameter("api key"))
        ));
        assert!(matches!(
            client.youtube("id").await,
            Err(Error::MissingParameter(_))
        ));
        assert!(matches!(
            client.barcode("123").await,
            Err(Error::MissingParameter(_))
        ));
        assert!(matches!(
            client
                .webshot("https://example.com", temp_dir.path().join("shot.png"))
                .await,
            Err(Error::MissingParameter(_))
        ));
    }

    #[tokio::test]
    async fn test_proxy_and_google_drive() {
        let (server, client) = mock_client().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/telproxy.php");
                then.status(200)
                    .json_body(json!({"connect": "tg://proxy?server=1.2.3.4"}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/gdrive.php")
                    .query_param("url", "https://drive.google.com/file/d/abc/view");
                then.status(200).json_body(json!({"status": false}));
            })
            .await;

        assert_eq!(
            client.proxy().await.unwrap(),
            "tg://proxy?server=1.2.3.4"
        );
        assert!(matches!(
            client
                .google_drive("https://drive.google.com/file/d/abc/view")
                .await,
            Err(Error::MissingField { field: "link", .. })
        ));
    }

    #[tokio::test]
    async fn test_proxy_without_link() {
        let (server, client) = mock_client().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/telproxy.php");
                then.status(200).json_body(json!({"status": "no proxy"}));
            })
            .await;

        assert!(matches!(
            client.proxy().await,
            Err(Error::MissingField {
                endpoint: path::PROXY,
                field: "connect",
            })
        ));
    }

    #[tokio::test]
    async fn test_file_endpoints() {
        let (server, client) = mock_client().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/fal.php");
                then.status(200).body(b"fal image");
            })
            .await;
        let chrome = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/chrome.php")
                    .query_param("id", "abcdefgh");
                then.status(200).body(b"Cr24 extension");
            })
            .await;
        let webshot = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/webshot.php")
                    .query_param("key", "secret")
                    .query_param("url", "https://example.com")
                    .query_param("fullSize", "false")
                    .query_param("height", "512")
                    .query_param("width", "512");
                then.status(200).body(b"screenshot");
            })
            .await;

        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path();

        client.fal(dir.join("fal.jpg")).await.unwrap();
        client
            .chrome_extension("abcdefgh", dir.join("ext.crx"))
            .await
            .unwrap();
        client
            .webshot("https://example.com", dir.join("shot.png"))
            .await
            .unwrap();

        assert_eq!(std::fs::read(dir.join("fal.jpg")).unwrap(), b"fal image");
        assert_eq!(std::fs::read(dir.join("ext.crx")).unwrap(), b"Cr24 extension");
        assert_eq!(std::fs::read(dir.join("shot.png")).unwrap(), b"screenshot");

        assert_eq!(client.fal_bytes().await.unwrap(), b"fal image");
        assert_eq!(
            client.chrome_extension_bytes("abcdefgh").await.unwrap(),
            b"Cr24 extension"
        );
        assert_eq!(
            client.webshot_bytes("https://example.com").await.unwrap(),
            b"screenshot"
        );
        chrome.assert_hits_async(2).await;
        webshot.assert_hits_async(2).await;
    }

    #[tokio::test]
    async fn test_send_web3() {
        let (server, client) = mock_client().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/wallet.php")
                    .query_param("key", "0xpriv")
                    .query_param("address", "0xdest")
                    .query_param("amount", "0.1")
                    .query_param("rpc", "https://rpc.example.com")
                    .query_param("chainid", "56");
                then.status(200).body("0xtxhash");
            })
            .await;

        let transfer = Web3Transfer {
            private_key: "0xpriv".to_owned(),
            address: "0xdest".to_owned(),
            amount: "0.1".to_owned(),
            rpc: "https://rpc.example.com".to_owned(),
            chain_id: "56".to_owned(),
        };
        assert!(!format!("{transfer:?}").contains("0xpriv"));
        assert_eq!(client.send_web3(&transfer).await.unwrap(), "0xtxhash");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_bing_dalle_is_end_of_support() {
        let err = Client::new().bing_dalle("a cat").await.unwrap_err();
        assert!(matches!(err, Error::EndOfSupport("Bing Dalle")));
    }

    #[tokio::test]
    async fn test_fake_site() {
        let (server, client) = mock_client().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/fakesite.php")
                    .query_param("site", "example.com");
                then.status(200).json_body(json!({"is_real": true}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/fakesite.php")
                    .query_param("site", "examp1e.com");
                then.status(200).json_body(json!({"is_real": "false"}));
            })
            .await;

        assert!(client.fake_site("example.com").await.unwrap());
        assert!(!client.fake_site("examp1e.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_fake_site_without_verdict() {
        let (server, client) = mock_client().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/fakesite.php")
                    .query_param("site", "missing.com");
                then.status(200).json_body(json!({"status": "ok"}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/fakesite.php")
                    .query_param("site", "number.com");
                then.status(200).json_body(json!({"is_real": 1}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/fakesite.php")
                    .query_param("site", "maybe.com");
                then.status(200).json_body(json!({"is_real": "maybe"}));
            })
            .await;

        for site in ["missing.com", "number.com", "maybe.com"] {
            assert!(
                matches!(
                    client.fake_site(site).await,
                    Err(Error::MissingField {
                        endpoint: path::FAKE_SITE,
                        field: "is_real",
                    })
                ),
                "{site}"
            );
        }
    }

    #[tokio::test]
    async fn test_barcode() {
        let (server, client) = mock_client().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/barcode.php")
                    .query_param("code", "6260100000000");
                then.status(200).json_body(json!({"result": "Milk 1L"}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/barcode.php")
                    .query_param("code", "0");
                then.status(200).json_body(json!({"message": "Product Not Found"}));
            })
            .await;

        assert_eq!(client.barcode("6260100000000").await.unwrap(), "Milk 1L");
        let err = client.barcode("0").await.unwrap_err();
        assert_eq!(err.to_string(), "Product Not Found");
    }

    #[tokio::test]
    async fn test_barcode_without_result_or_message() {
        let (server, client) = mock_client().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/barcode.php")
                    .query_param("code", "1");
                then.status(200).json_body(json!({"status": false}));
            })
            .await;

        assert!(matches!(
            client.barcode("1").await,
            Err(Error::MissingField {
                endpoint: path::BARCODE,
                field: "result",
            })
        ));
    }

    #[tokio::test]
    async fn test_webshot_error_does_not_leak_key() {
        let (server, client) = mock_client().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/webshot.php");
                then.status(502);
            })
            .await;

        let err = client.webshot_bytes("https://example.com").await.unwrap_err();
        assert!(matches!(err, Error::Request(_)));
        assert!(!format!("{err:?}").contains("secret"));
        assert!(!err.to_string().contains("secret"));
    }

    #[tokio::test]
    async fn test_domain_check() {
        let (server, client) = mock_client().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/domain.php")
                    .query_param("domain", "example.ir");
                then.status(200)
                    .json_body(json!({"domain": "example.ir", "available": false}));
            })
            .await;

        let info = client.domain_check("example.ir").await.unwrap();
        assert_eq!(info["available"], false);
    }

    #[tokio::test]
    async fn test_qr() {
        let (server, client) = mock_client().await;
        let encode = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/qr/qrcode.php")
                    .query_param("action", "encode")
                    .query_param("text", "https://example.com");
                then.status(200).body(b"qr png");
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/qr/qrcode.php")
                    .query_param("action", "decode")
                    .query_param("url", "https://example.com/qr.png");
                then.status(200).body("decoded text");
            })
            .await;

        assert_eq!(client.qr_encode("https://example.com").await.unwrap(), b"qr png");

        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join(DEFAULT_QR_FILE);
        client
            .qr_encode_to_file("https://example.com", &file_path)
            .await
            .unwrap();
        assert_eq!(std::fs::read(&file_path).unwrap(), b"qr png");
        encode.assert_hits_async(2).await;

        assert_eq!(
            client.qr_decode("https://example.com/qr.png").await.unwrap(),
            "decoded text"
        );
    }
}
