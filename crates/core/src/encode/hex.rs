use crate::error::EncodeError;

/// Two-digit uppercase hex of each UTF-16 code unit, space-separated.
pub fn to_hex(text: &str) -> String {
    text.encode_utf16()
        .map(|unit| format!("{unit:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inverse of [`to_hex`].
pub fn from_hex(encoded: &str) -> Result<String, EncodeError> {
    let units = encoded
        .split_whitespace()
        .map(|group| {
            let digits = group
                .strip_prefix("0x")
                .or_else(|| group.strip_prefix("0X"))
                .unwrap_or(group);
            u16::from_str_radix(digits, 16).map_err(|_| EncodeError::InvalidHex(group.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    super::from_utf16(&units)
}
