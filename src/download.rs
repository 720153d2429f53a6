//! Write raw response bodies (images, audio, extensions) to files.
//!
//! Usually, you don't need to use this module directly.
//! The `*_to_file` endpoints of [`crate::Client`] use it.

use std::path::Path;

use reqwest::Response;
use tokio::fs::{create_dir_all, remove_file, File};
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::error::{Error, Result};

/// Create the parent directory of `file_path` if it does not exist.
#[inline]
async fn ensure_parent(file_path: &Path) -> std::io::Result<()> {
    match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => create_dir_all(parent).await,
        _ => Ok(()),
    }
}

/// Stream the body of `response` into `file_path` chunk by chunk.
///
/// Returns `file_path` back when all bytes were flushed.
/// If anything fails after the file was created, the partial file is removed.
///
/// # Errors
///
/// - [`Error::EmptyResponse`] if the server announces a zero `Content-Length`.
/// - [`Error::Io`] if the file can not be created or written.
/// - [`Error::Request`] if the body can not be read.
pub async fn save_response<P>(mut response: Response, file_path: P) -> Result<P>
where
    P: AsRef<Path>,
{
    let path = file_path.as_ref();
    if response.content_length() == Some(0) {
        return Err(Error::EmptyResponse);
    }

    ensure_parent(path).await?;
    let file = File::create(path).await?;

    match write_body(&mut response, file).await {
        Ok(written) => {
            tracing::debug!(path = %path.display(), bytes = written, "saved response");
            Ok(file_path)
        }
        Err(err) => {
            if let Err(remove_err) = remove_file(path).await {
                tracing::warn!(
                    path = %path.display(),
                    error = %remove_err,
                    "failed to remove partial file"
                );
            }
            Err(err)
        }
    }
}

async fn write_body(response: &mut Response, file: File) -> Result<usize> {
    let mut file_buf = BufWriter::new(file);

    // pre-allocate file size
    if let Some(content_length) = response.content_length() {
        // if disk is full, this will fail
        file_buf.get_ref().set_len(content_length).await?;
    }

    let mut written: usize = 0;
    while let Some(mut chunk) = response.chunk().await? {
        written += chunk.len();
        file_buf.write_all_buf(&mut chunk).await?;
    }
    file_buf.flush().await?;
    Ok(written)
}
