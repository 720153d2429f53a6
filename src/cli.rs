//! A core module for command line interface.
//!
//! See [`Cli`] for more information.

use std::io::Write as _;
use std::path::PathBuf;

use clap::builder::{PathBufValueParser, TypedValueParser};
use clap::error::ErrorKind;
pub use clap::{CommandFactory, Parser};
use clap::{Args, Subcommand};
use dialoguer::Editor;
use serde_json::Value;

use crate::ai::{DEFAULT_ZZZCODE_LANGUAGE, DEFAULT_ZZZCODE_MODE};
use crate::api::{DEFAULT_QR_FILE, DEFAULT_VOICE};
use crate::client::Client;
use crate::config::{Config, Validate, DEFAULT_CONFIG_STR};
use crate::error::Error;
use crate::tron::TronTransfer;

const EDITOR_EXTENSION: &str = ".md";

/// [`clap`] command line interface.
///
/// The `--config` file is parsed with [`toml`],
/// then validated with [`Config::validate`].
///
/// # Example
///
/// ```no_run
/// use mrweb::cli::{Cli, Parser as _};
///
/// let cli = Cli::parse();
/// ```
#[non_exhaustive]
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// The config file to use. The embedded default is used if omitted.
    #[arg(long, short, global = true, value_name = "PATH")]
    #[arg(value_parser = PathBufValueParser::new().try_map(Self::parse_config_from_filepath))]
    pub config: Option<Config>,

    /// Log every request.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// The endpoint to call.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    #[inline]
    fn parse_config_from_filepath(path: PathBuf) -> anyhow::Result<Config> {
        let config = std::fs::read_to_string(path)?;
        Self::parse_config(&config)
    }

    #[inline]
    fn parse_config(config: &str) -> anyhow::Result<Config> {
        let config = toml::from_str::<Config>(config)?;
        config.validate()?;
        Ok(config)
    }

    /// The `--config` file, or the embedded default.
    ///
    /// # Errors
    ///
    /// Only if the embedded default is broken, which is a bug.
    pub fn config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(config) => Ok(config.clone()),
            None => Self::parse_config(DEFAULT_CONFIG_STR),
        }
    }

    /// Open an editor to ask the user to write a query.
    ///
    /// # Errors
    ///
    /// If the editor fails, or the content is empty, it will return an error.
    pub fn get_query_from_editor(cmd: &mut clap::Command) -> Result<String, clap::Error> {
        let query: Option<String> = match Editor::new().extension(EDITOR_EXTENSION).edit("") {
            Ok(query) => query,
            Err(err) => {
                return Err(cmd.error(ErrorKind::Io, err));
            }
        };
        match query {
            Some(query) if !query.trim().is_empty() => Ok(query),
            _ => Err(cmd.error(
                ErrorKind::ValueValidation,
                "Empty query. Maybe you forget to save in the editor?",
            )),
        }
    }
}

/// The endpoints, one subcommand each.
#[non_exhaustive]
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate text.
    Translate {
        /// The target language, e.g. `en`.
        #[arg(long, short)]
        to: String,
        text: String,
    },
    /// Read the text of an image.
    Ocr {
        /// The language of the text in the image.
        #[arg(long, short, default_value = "en")]
        lang: String,
        /// The URL of the image.
        url: String,
    },
    /// Check text for bad words.
    BadWord { text: String },
    /// A random bio.
    Bio,
    /// Check whether text was written by an AI.
    AiText { text: String },
    /// Render text as a notebook page.
    Notebook {
        text: String,
        /// Where to save the image, stdout if omitted.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Send an e-mail.
    Email {
        #[arg(long)]
        to: String,
        #[arg(long, short)]
        subject: String,
        message: String,
    },
    /// Information about an IP address.
    IpInfo { ip: String },
    /// Rewrite an Instagram link to a previewable mirror.
    Insta { link: String },
    /// Speak text.
    Voice {
        text: String,
        /// The voice to use.
        #[arg(long, default_value = DEFAULT_VOICE)]
        say_as: String,
        /// Where to save the audio, stdout if omitted.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Generate an image from text (needs an API key).
    ImageGen { text: String },
    /// A Telegram proxy link.
    Proxy,
    /// A Hafez fal.
    Fal {
        /// Where to save the image, stdout if omitted.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// The current time around the world.
    WorldClock,
    /// Download links of a YouTube video (needs an API key).
    Youtube { id: String },
    /// A direct download link for a Google Drive share.
    Gdrive { link: String },
    /// Search the Persian Wikipedia.
    Wikipedia { query: String },
    /// Download a Chrome extension.
    Chrome {
        /// The extension ID.
        id: String,
        /// Where to save the `.crx` file, stdout if omitted.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Check whether a site is real.
    FakeSite { site: String },
    /// Take a screenshot of a site (needs an API key).
    Webshot {
        url: String,
        /// Where to save the screenshot, stdout if omitted.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Look up a barcode (needs an API key).
    Barcode { code: String },
    /// Whois-like information about a domain.
    Domain { domain: String },
    /// QR codes.
    #[command(subcommand)]
    Qr(QrCommand),
    /// AI chat.
    #[command(subcommand)]
    Ai(AiCommand),
    /// Disposable e-mail addresses.
    #[command(subcommand)]
    FakeMail(FakeMailCommand),
    /// Transaction lookups by hash.
    #[command(subcommand)]
    HashCheck(HashCheckCommand),
    /// TRON wallet.
    #[command(subcommand)]
    Tron(TronCommand),
}

/// `qr` subcommands.
#[derive(Subcommand, Debug)]
pub enum QrCommand {
    /// Encode text as a QR code image.
    Encode {
        text: String,
        /// Where to save the image.
        #[arg(long, short, default_value = DEFAULT_QR_FILE)]
        output: PathBuf,
    },
    /// Decode a QR code image.
    Decode {
        /// The URL of the image.
        url: String,
    },
}

/// The query of an AI subcommand.
#[derive(Args, Debug)]
pub struct Query {
    /// The query, an editor is opened if omitted.
    pub query: Option<String>,
}

/// `ai` subcommands.
#[derive(Subcommand, Debug)]
pub enum AiCommand {
    /// Ask Google Bard.
    Bard(Query),
    /// Ask ChatGPT.
    Gpt(Query),
    /// Ask Google Gemini.
    Gemini(Query),
    /// Ask the coding assistant.
    CodeAi(Query),
    /// Ask Google Gemma.
    Gemma(Query),
    /// Ask zzzcode to write code.
    Zzzcode {
        #[command(flatten)]
        query: Query,
        /// The programming language.
        #[arg(long, default_value = DEFAULT_ZZZCODE_LANGUAGE)]
        lang: String,
        /// The answer mode.
        #[arg(long, default_value = DEFAULT_ZZZCODE_MODE)]
        mode: String,
    },
}

impl AiCommand {
    fn query_mut(&mut self) -> &mut Query {
        match self {
            AiCommand::Bard(query)
            | AiCommand::Gpt(query)
            | AiCommand::Gemini(query)
            | AiCommand::CodeAi(query)
            | AiCommand::Gemma(query)
            | AiCommand::Zzzcode { query, .. } => query,
        }
    }
}

/// `fake-mail` subcommands.
#[derive(Subcommand, Debug)]
pub enum FakeMailCommand {
    /// Create a new address.
    Create,
    /// List the messages of an address.
    Messages { email: String },
}

/// `hash-check` subcommands.
#[derive(Subcommand, Debug)]
pub enum HashCheckCommand {
    /// Look up a TRON transaction.
    Tron { hash: String },
    /// Look up a TomoChain transaction.
    Tomochain { hash: String },
}

/// `tron` subcommands.
#[derive(Subcommand, Debug)]
pub enum TronCommand {
    /// Generate a new address.
    Generate,
    /// The balance of an address.
    Balance { address: String },
    /// Information about an address.
    Info { address: String },
    /// Send TRX.
    Send {
        /// The private key of the sender, read from `MRWEB_TRON_KEY` if omitted.
        #[arg(long, env = "MRWEB_TRON_KEY", hide_env_values = true)]
        key: String,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        amount: String,
    },
}

/// What a [`Command`] produced.
#[derive(Debug, PartialEq)]
pub enum Output {
    /// Plain text.
    Text(String),
    /// A yes/no answer.
    Bool(bool),
    /// A JSON document.
    Json(Value),
    /// Raw bytes, e.g. an image.
    Bytes(Vec<u8>),
    /// The file the response was written to.
    Saved(PathBuf),
}

impl Output {
    /// Print to stdout: JSON pretty-printed, bytes as is.
    ///
    /// # Errors
    ///
    /// If stdout is closed.
    pub fn print(self) -> anyhow::Result<()> {
        let mut stdout = std::io::stdout().lock();
        match self {
            Output::Text(text) => writeln!(stdout, "{text}")?,
            Output::Bool(answer) => writeln!(stdout, "{answer}")?,
            Output::Json(value) => writeln!(stdout, "{}", serde_json::to_string_pretty(&value)?)?,
            Output::Bytes(bytes) => stdout.write_all(&bytes)?,
            Output::Saved(path) => writeln!(stdout, "Saved to {}", path.display())?,
        }
        stdout.flush()?;
        Ok(())
    }
}

impl Command {
    /// Open an editor for AI queries that were not given on the command line.
    ///
    /// # Errors
    ///
    /// See [`Cli::get_query_from_editor`].
    pub fn fill_query_from_editor(&mut self, cmd: &mut clap::Command) -> Result<(), clap::Error> {
        if let Command::Ai(ai) = self {
            let query = ai.query_mut();
            if query.query.is_none() {
                query.query = Some(Cli::get_query_from_editor(cmd)?);
            }
        }
        Ok(())
    }

    /// Call the endpoint.
    ///
    /// # Errors
    ///
    /// Whatever the endpoint returns, see [`Error`].
    pub async fn run(self, client: &Client) -> Result<Output, Error> {
        let output = match self {
            Command::Translate { to, text } => Output::Text(client.translate(&to, &text).await?),
            Command::Ocr { lang, url } => Output::Text(client.ocr(&lang, &url).await?),
            Command::BadWord { text } => Output::Bool(client.is_bad_word(&text).await?),
            Command::Bio => Output::Text(client.random_bio().await?),
            Command::AiText { text } => Output::Bool(client.is_ai_text(&text).await?),
            Command::Notebook { text, output } => match output {
                Some(output) => Output::Saved(client.notebook_to_file(&text, output).await?),
                None => Output::Bytes(client.notebook(&text).await?),
            },
            Command::Email {
                to,
                subject,
                message,
            } => Output::Text(client.email(&to, &subject, &message).await?),
            Command::IpInfo { ip } => Output::Json(client.ip_info(&ip).await?),
            Command::Insta { link } => Output::Text(client.insta(&link)),
            Command::Voice {
                text,
                say_as,
                output,
            } => match output {
                Some(output) => Output::Saved(client.voice_maker(&text, &say_as, output).await?),
                None => Output::Bytes(client.voice_maker_bytes(&text, &say_as).await?),
            },
            Command::ImageGen { text } => Output::Text(client.image_gen(&text).await?),
            Command::Proxy => Output::Text(client.proxy().await?),
            Command::Fal { output } => match output {
                Some(output) => Output::Saved(client.fal(output).await?),
                None => Output::Bytes(client.fal_bytes().await?),
            },
            Command::WorldClock => Output::Text(client.world_clock().await?),
            Command::Youtube { id } => Output::Text(client.youtube(&id).await?),
            Command::Gdrive { link } => Output::Text(client.google_drive(&link).await?),
            Command::Wikipedia { query } => Output::Text(client.wikipedia(&query).await?),
            Command::Chrome { id, output } => match output {
                Some(output) => Output::Saved(client.chrome_extension(&id, output).await?),
                None => Output::Bytes(client.chrome_extension_bytes(&id).await?),
            },
            Command::FakeSite { site } => Output::Bool(client.fake_site(&site).await?),
            Command::Webshot { url, output } => match output {
                Some(output) => Output::Saved(client.webshot(&url, output).await?),
                None => Output::Bytes(client.webshot_bytes(&url).await?),
            },
            Command::Barcode { code } => Output::Text(client.barcode(&code).await?),
            Command::Domain { domain } => Output::Json(client.domain_check(&domain).await?),
            Command::Qr(QrCommand::Encode { text, output }) => {
                Output::Saved(client.qr_encode_to_file(&text, output).await?)
            }
            Command::Qr(QrCommand::Decode { url }) => Output::Text(client.qr_decode(&url).await?),
            Command::Ai(command) => Output::Text(Self::run_ai(command, client).await?),
            Command::FakeMail(FakeMailCommand::Create) => {
                Output::Text(client.fake_mail().create().await?)
            }
            Command::FakeMail(FakeMailCommand::Messages { email }) => {
                Output::Json(client.fake_mail().messages(&email).await?)
            }
            Command::HashCheck(HashCheckCommand::Tron { hash }) => {
                Output::Json(client.hash_check().tron(&hash).await?)
            }
            Command::HashCheck(HashCheckCommand::Tomochain { hash }) => {
                Output::Json(client.hash_check().tomochain(&hash).await?)
            }
            Command::Tron(TronCommand::Generate) => Output::Json(client.tron().generate().await?),
            Command::Tron(TronCommand::Balance { address }) => {
                Output::Text(client.tron().balance(&address).await?)
            }
            Command::Tron(TronCommand::Info { address }) => {
                Output::Json(client.tron().info(&address).await?)
            }
            Command::Tron(TronCommand::Send {
                key,
                from,
                to,
                amount,
            }) => {
                let transfer = TronTransfer {
                    private_key: key,
                    from,
                    to,
                    amount,
                };
                Output::Json(client.tron().send(&transfer).await?)
            }
        };
        Ok(output)
    }

    async fn run_ai(mut command: AiCommand, client: &Client) -> Result<String, Error> {
        let query = command
            .query_mut()
            .query
            .take()
            .ok_or(Error::MissingParameter("query"))?;
        let ai = client.ai();
        match command {
            AiCommand::Bard(_) => ai.bard(&query).await,
            AiCommand::Gpt(_) => ai.gpt(&query).await,
            AiCommand::Gemini(_) => ai.gemini(&query).await,
            AiCommand::CodeAi(_) => ai.code_ai(&query).await,
            AiCommand::Gemma(_) => ai.gemma(&query).await,
            AiCommand::Zzzcode { lang, mode, .. } => ai.zzzcode(&query, &lang, &mode).await,
        }
    }
}
