//! Random Base64 strings bounded by an approximate maximum length.

use base64::Config;

use crate::source::{bytes_from, ByteSource, SourceError, SystemSource};

/// Generate a random Base64 string using the standard alphabet (`+` and `/`).
///
/// The string is never longer than `max` characters when `max` is a multiple
/// of four. For other values the bound is a best effort: the encoder works in
/// blocks of three bytes to four characters, so the result may fall slightly
/// short of `max`.
pub fn base64(max: usize) -> Result<String, SourceError> {
    encode_from(&SystemSource, max, base64::STANDARD)
}

/// Generate a random Base64 string using the URL-safe alphabet (`-` and `_`).
///
/// The same length bound as [`base64`] applies.
pub fn url_base64(max: usize) -> Result<String, SourceError> {
    encode_from(&SystemSource, max, base64::URL_SAFE)
}

/// Encode [`max_bytes`] fresh bytes from the source with the given alphabet.
pub(crate) fn encode_from<S: ByteSource>(
    source: &S,
    max: usize,
    config: Config,
) -> Result<String, SourceError> {
    let bytes = bytes_from(source, max_bytes(max))?;
    Ok(base64::encode_config(&bytes, config))
}

/// The number of raw bytes to draw for a Base64 string of at most `max`
/// characters: three input bytes per four output characters, truncated.
///
/// The division happens in floating point before truncation, matching
/// `trunc(max / 4 * 3)`.
pub(crate) fn max_bytes(max: usize) -> usize {
    (max as f64 / 4.0 * 3.0) as usize
}
