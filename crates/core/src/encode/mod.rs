//! Deterministic encoders used by the translator tools.
//!
//! Every encoder is total over `&str`. The reversible ones (binary, hex,
//! Base64, Morse) also expose a decoder returning [`EncodeError`] on malformed
//! input.
//!
//! [`EncodeError`]: crate::error::EncodeError

pub mod ascii_art;
pub mod base64;
pub mod binary;
pub mod braille;
pub mod hex;
pub mod morse;

pub use self::ascii_art::{generate_ascii_art, ArtStyle};
pub use self::base64::{encode_base64, from_base64, to_base64, UNSUPPORTED_CHARACTERS};
pub use self::binary::{from_binary, to_binary};
pub use self::braille::to_braille;
pub use self::hex::{from_hex, to_hex};
pub use self::morse::{from_morse, to_morse, MorseSeparator};

use crate::error::EncodeError;

/// Rebuild a string from UTF-16 code units.
pub(crate) fn from_utf16(units: &[u16]) -> Result<String, EncodeError> {
    char::decode_utf16(units.iter().copied())
        .map(|unit| unit.map_err(|err| EncodeError::UnpairedSurrogate(err.unpaired_surrogate())))
        .collect()
}
