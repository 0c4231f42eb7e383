//! `data:` URL encoding for generated images.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataUrlError {
    #[error("invalid data URL format")]
    NotDataUrl,
    #[error("invalid data URL format: missing comma separator")]
    MissingSeparator,
    #[error("data URL must be base64 encoded")]
    NotBase64,
    #[error("failed to decode base64 data: {0}")]
    Decode(String),
}

/// Wrap PNG bytes as `data:image/png;base64,...`.
pub fn png_data_url(bytes: &[u8]) -> String {
    format!("{PNG_DATA_URL_PREFIX}{}", STANDARD.encode(bytes))
}

/// Decode the payload of a base64 `data:` URL. The media type is not
/// checked here.
pub fn decode_data_url(url: &str) -> Result<Vec<u8>, DataUrlError> {
    let rest = url.strip_prefix("data:").ok_or(DataUrlError::NotDataUrl)?;
    let (metadata, payload) = rest
        .split_once(',')
        .ok_or(DataUrlError::MissingSeparator)?;
    if !metadata.split(';').any(|param| param == "base64") {
        return Err(DataUrlError::NotBase64);
    }
    STANDARD
        .decode(payload.trim())
        .map_err(|error| DataUrlError::Decode(error.to_string()))
}
