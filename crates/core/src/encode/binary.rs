use crate::error::EncodeError;

const DEFAULT_BITS: usize = 8;

/// Base-2 form of each UTF-16 code unit, zero-padded to `bits` and
/// space-separated. A width of zero falls back to eight.
pub fn to_binary(text: &str, bits: usize, show_prefix: bool) -> String {
    let width = if bits == 0 { DEFAULT_BITS } else { bits };
    let prefix = if show_prefix { "0b" } else { "" };

    text.encode_utf16()
        .map(|unit| format!("{prefix}{unit:0width$b}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inverse of [`to_binary`]. Groups may carry an optional `0b` prefix.
pub fn from_binary(encoded: &str) -> Result<String, EncodeError> {
    let units = encoded
        .split_whitespace()
        .map(|group| {
            let digits = group.strip_prefix("0b").unwrap_or(group);
            u16::from_str_radix(digits, 2).map_err(|_| EncodeError::InvalidBinary(group.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    super::from_utf16(&units)
}
