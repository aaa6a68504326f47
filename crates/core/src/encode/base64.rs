use ::base64::engine::general_purpose::STANDARD;
use ::base64::Engine as _;
use log::warn;

use crate::error::EncodeError;

/// Text shown in place of output when the input cannot be encoded.
pub const UNSUPPORTED_CHARACTERS: &str = "Error: Unsupported characters";

/// Base64 of the UTF-8 bytes behind a UTF-16 sequence.
///
/// Fails on unpaired surrogates, which have no UTF-8 form.
pub fn encode_base64(units: &[u16]) -> Result<String, EncodeError> {
    let text = super::from_utf16(units)?;
    Ok(STANDARD.encode(text.as_bytes()))
}

/// Base64 of `text`, reporting encoding failures in the output itself.
pub fn to_base64(text: &str) -> String {
    let units: Vec<u16> = text.encode_utf16().collect();
    match encode_base64(&units) {
        Ok(encoded) => encoded,
        Err(err) => {
            warn!("base64 encoding failed: {err}");
            UNSUPPORTED_CHARACTERS.to_string()
        }
    }
}

/// Decode standard Base64 back into UTF-8 text.
pub fn from_base64(encoded: &str) -> Result<String, EncodeError> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|err| EncodeError::InvalidBase64(err.to_string()))?;
    String::from_utf8(bytes).map_err(|_| EncodeError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_base64_ascii() {
        assert_eq!(to_base64("Hello"), "SGVsbG8=");
    }

    #[test]
    fn test_to_base64_non_ascii() {
        assert_eq!(to_base64("✓"), "4pyT");
    }

    #[test]
    fn test_round_trip_arbitrary_unicode() {
        for text in ["", "plain", "naïve café", "𝕲𝖔𝖙𝖍𝖎𝖈", "z\u{0301}\u{0334}", "日本語 ☠"] {
            assert_eq!(from_base64(&to_base64(text)).unwrap(), text);
        }
    }

    #[test]
    fn test_encode_base64_unpaired_surrogate() {
        assert_eq!(
            encode_base64(&[0x0041, 0xD800]),
            Err(EncodeError::UnpairedSurrogate(0xD800))
        );
    }

    #[test]
    fn test_encode_base64_valid_units() {
        let units: Vec<u16> = "Hi".encode_utf16().collect();
        assert_eq!(encode_base64(&units).unwrap(), "SGk=");
    }

    #[test]
    fn test_from_base64_invalid() {
        assert!(matches!(
            from_base64("not base64!"),
            Err(EncodeError::InvalidBase64(_))
        ));
    }

    #[test]
    fn test_from_base64_invalid_utf8() {
        // 0xFF 0xFE
        assert_eq!(from_base64("//4="), Err(EncodeError::InvalidUtf8));
    }
}
