//! Image-upload validation: data-URL parsing, MIME and size checks.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::CoreError;

/// Maximum decoded payload size: 10 MiB.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// A decoded `data:` URL payload.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl DecodedImage {
    /// File extension derived from the MIME subtype (`image/png` -> `png`,
    /// `image/jpeg` -> `jpg`).
    pub fn extension(&self) -> &str {
        match self.mime.as_str() {
            "image/jpeg" => "jpg",
            "image/svg+xml" => "svg",
            other => other.strip_prefix("image/").unwrap_or("bin"),
        }
    }
}

/// Parse and validate a base64 data URL (`data:image/png;base64,...`).
///
/// Rejects anything that is not a well-formed data URL, any MIME type not
/// prefixed `image/`, and decoded payloads larger than [`MAX_UPLOAD_BYTES`].
pub fn decode_image_data_url(data_url: &str) -> Result<DecodedImage, CoreError> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or_else(|| CoreError::Validation("expected a data: URL".to_string()))?;

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| CoreError::Validation("malformed data URL: missing payload".to_string()))?;

    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| CoreError::Validation("data URL must be base64-encoded".to_string()))?;

    if !mime.starts_with("image/") {
        return Err(CoreError::Validation(format!(
            "unsupported content type: {mime} (only image/* is accepted)"
        )));
    }

    let bytes = BASE64
        .decode(payload.trim())
        .map_err(|e| CoreError::Validation(format!("invalid base64 payload: {e}")))?;

    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(CoreError::Validation(format!(
            "image too large: {} bytes exceeds the {} byte limit",
            bytes.len(),
            MAX_UPLOAD_BYTES
        )));
    }
    if bytes.is_empty() {
        return Err(CoreError::Validation("empty image payload".to_string()));
    }

    Ok(DecodedImage {
        mime: mime.to_string(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_url(mime: &str, bytes: &[u8]) -> String {
        format!("data:{mime};base64,{}", BASE64.encode(bytes))
    }

    #[test]
    fn decodes_a_png_payload() {
        let img = decode_image_data_url(&data_url("image/png", b"\x89PNG fake")).unwrap();
        assert_eq!(img.mime, "image/png");
        assert_eq!(img.bytes, b"\x89PNG fake");
        assert_eq!(img.extension(), "png");
    }

    #[test]
    fn jpeg_maps_to_jpg_extension() {
        let img = decode_image_data_url(&data_url("image/jpeg", b"xx")).unwrap();
        assert_eq!(img.extension(), "jpg");
    }

    #[test]
    fn rejects_non_image_mime() {
        let err = decode_image_data_url(&data_url("application/pdf", b"xx")).unwrap_err();
        assert!(err.to_string().contains("only image/*"));
    }

    #[test]
    fn rejects_oversized_payload() {
        let big = vec![0u8; MAX_UPLOAD_BYTES + 1];
        let err = decode_image_data_url(&data_url("image/png", &big)).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn accepts_payload_at_the_limit() {
        let exact = vec![0u8; MAX_UPLOAD_BYTES];
        assert!(decode_image_data_url(&data_url("image/png", &exact)).is_ok());
    }

    #[test]
    fn rejects_missing_base64_marker() {
        let err = decode_image_data_url("data:image/png,rawbytes").unwrap_err();
        assert!(err.to_string().contains("base64"));
    }

    #[test]
    fn rejects_plain_strings() {
        assert!(decode_image_data_url("not a data url").is_err());
    }
}
