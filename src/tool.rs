//! Some useful tools for the project.
//!
//! Usually, you don't need to use this module directly.
//! The endpoints of [`crate::Client`] will automatically use these tools.

/// The rendering endpoints (notebook, voice, image generation) read `-` as a word separator.
///
/// e.g. `"hello big world"` -> `"hello-big-world"`.
pub(crate) fn dash_spaces(text: &str) -> String {
    text.replace(' ', "-")
}

/// The Instagram mirror that serves embeddable previews.
pub const INSTAGRAM_MIRROR: &str = "ddinstagram.com";

/// Rewrite an Instagram link to point at [`INSTAGRAM_MIRROR`].
pub(crate) fn instagram_mirror(link: &str) -> String {
    link.replace("instagram.com", INSTAGRAM_MIRROR)
}

/// Whether the answer of an AI endpoint carries any text.
#[inline]
pub(crate) fn is_blank(answer: &str) -> bool {
    answer.trim().is_empty()
}
