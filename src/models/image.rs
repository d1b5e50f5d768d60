use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GenerationConfig;

const DATA_URI_SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64,";
const DEFAULT_MIME: &str = "image/png";
const TOKEN_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const TOKEN_LEN: usize = 6;

/// The uploaded product photo, decoded from its data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pub mime_type: String,
    /// Base64 payload with the `data:<mime>;base64,` prefix stripped.
    pub data: String,
}

impl SourceImage {
    /// Splits a data URI into MIME type and base64 payload.
    ///
    /// Inputs without the expected prefix pass through unchanged with the
    /// MIME defaulted to `image/png`; no further validation of dimensions,
    /// size, or format is performed.
    pub fn from_data_uri(uri: &str) -> Self {
        if let Some(rest) = uri.strip_prefix(DATA_URI_SCHEME) {
            if let Some(marker) = rest.find(BASE64_MARKER) {
                let mime = &rest[..marker];
                let data = &rest[marker + BASE64_MARKER.len()..];
                let mime_type = if mime.starts_with("image/") {
                    mime.to_string()
                } else {
                    DEFAULT_MIME.to_string()
                };
                return SourceImage {
                    mime_type,
                    data: data.to_string(),
                };
            }
        }

        SourceImage {
            mime_type: DEFAULT_MIME.to_string(),
            data: uri.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    Pending,
    Completed,
    Failed,
}

/// One finished lookbook asset.
///
/// Never mutated after creation; the embedded config is a snapshot of the
/// configuration at generation time, so later edits to the live config do
/// not retroactively alter past results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub id: String,
    /// Data URI embedding the generated image bytes.
    pub url: String,
    pub config: GenerationConfig,
    pub status: GenerationStatus,
    pub timestamp: DateTime<Utc>,
}

impl GeneratedImage {
    /// Wraps a base64 image payload from a successful slot response.
    pub fn completed(image_base64: &str, config: &GenerationConfig) -> Self {
        GeneratedImage {
            id: short_token(),
            url: format!("data:image/png;base64,{}", image_base64),
            config: config.clone(),
            status: GenerationStatus::Completed,
            timestamp: Utc::now(),
        }
    }
}

/// Random short uppercase alphanumeric token. Collisions are accepted for
/// the single-session, in-memory result set.
fn short_token() -> String {
    let mut rng = rand::thread_rng();
    (0..TOKEN_LEN)
        .map(|_| TOKEN_CHARSET[rng.gen_range(0..TOKEN_CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LookbookStyle;

    #[test]
    fn test_data_uri_parsing() {
        let source = SourceImage::from_data_uri("data:image/jpeg;base64,AAAA");
        assert_eq!(source.mime_type, "image/jpeg");
        assert_eq!(source.data, "AAAA");
    }

    #[test]
    fn test_bare_base64_falls_back_to_png() {
        let source = SourceImage::from_data_uri("AAAA");
        assert_eq!(source.mime_type, "image/png");
        assert_eq!(source.data, "AAAA");
    }

    #[test]
    fn test_non_image_mime_defaults_to_png() {
        let source = SourceImage::from_data_uri("data:text/plain;base64,AAAA");
        assert_eq!(source.mime_type, "image/png");
        assert_eq!(source.data, "AAAA");
    }

    #[test]
    fn test_token_shape() {
        let token = short_token();
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
    }

    #[test]
    fn test_config_snapshot_is_detached() {
        let mut live = GenerationConfig::default();
        let result = GeneratedImage::completed("AAAA", &live);

        live.toggle_style(LookbookStyle::FlatLay);
        live.quantity = 7;

        assert_eq!(result.config.styles, vec![LookbookStyle::Cyclorama]);
        assert_eq!(result.config.quantity, 2);
        assert_eq!(result.status, GenerationStatus::Completed);
        assert!(result.url.starts_with("data:image/png;base64,"));
    }
}
