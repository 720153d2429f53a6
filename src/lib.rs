#![warn(missing_docs)]

//! <div class="warning">
//!
//! Note: API is unstable, and may change in `0.x` versions.
//!
//! </div>
//!
//! An async client for the [MrWeb](https://mrapiweb.ir/) web API:
//! translation, OCR, AI chat, fake mail, TRON wallets, QR codes and more.
//!
//! # As a library
//!
//! Build a [`Client`], then call the endpoints on it.
//! Some endpoints are grouped behind borrowed views:
//!
//! - [`Client::ai`] for the AI chat endpoints, see [`ai`].
//! - [`Client::fake_mail`] for disposable addresses, see [`fakemail`].
//! - [`Client::hash_check`] for transaction lookups, see [`hashcheck`].
//! - [`Client::tron`] for TRON wallets, see [`tron`].
//!
//! Every call sends at most one request. Nothing is cached or retried.
//!
//! ```no_run
//! use mrweb::Client;
//!
//! #[tokio::main]
//! async fn main() -> mrweb::Result<()> {
//!     let client = Client::builder().api_key_from_env().build()?;
//!
//!     println!("{}", client.translate("en", "سلام").await?);
//!     println!("{}", client.ai().gemini("Write a haiku about crabs").await?);
//!     client.qr_encode_to_file("https://mrapiweb.ir/", "qr.png").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # As a binary
//!
//! Enable the `cli` feature, see [`cli`] and `main.rs`.

pub mod ai;
pub mod api;
pub mod client;
pub mod config;
pub mod download;
pub mod error;
pub mod fakemail;
pub mod hashcheck;
pub mod tool;
pub mod tron;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod logger;

pub use client::{ApiKey, Client, ClientBuilder};
pub use error::{Error, Result};
