use std::fmt;
use std::str::FromStr;

use glyphcraft_core::encode::{from_base64, from_binary, from_hex, from_morse, MorseSeparator};

use crate::input::read_text;
use crate::prelude::{println, *};

/// Encodings that can be turned back into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decoder {
    Binary,
    Hex,
    Base64,
    Morse,
}

impl FromStr for Decoder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "binary" => Ok(Decoder::Binary),
            "hex" | "hex-code" => Ok(Decoder::Hex),
            "base64" => Ok(Decoder::Base64),
            "morse" | "morse-code" => Ok(Decoder::Morse),
            _ => Err(Error::UnknownDecoder(s.to_string())),
        }
    }
}

impl fmt::Display for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Decoder::Binary => "binary",
            Decoder::Hex => "hex",
            Decoder::Base64 => "base64",
            Decoder::Morse => "morse",
        };
        f.write_str(name)
    }
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct DecodeOptions {
    /// Encoding of the input: binary, hex, base64 or morse
    #[arg(value_name = "ENCODING")]
    pub decoder: Decoder,

    /// Encoded text. Read from stdin when omitted or "-"
    pub text: Option<String>,

    /// Morse word separator: slash, pipe or space
    #[arg(long, default_value = "slash")]
    pub separator: String,
}

pub fn run(options: DecodeOptions, global: crate::Global) -> Result<()> {
    let encoded = read_text(options.text.clone())?;

    if global.verbose {
        println!("Decoding {} bytes of {}", encoded.len(), options.decoder);
        println!();
    }

    println!("{}", decode_data(options.decoder, &encoded, &options.separator)?);

    Ok(())
}

pub fn decode_data(decoder: Decoder, encoded: &str, separator: &str) -> Result<String> {
    let decoded = match decoder {
        Decoder::Binary => from_binary(encoded),
        Decoder::Hex => from_hex(encoded),
        Decoder::Base64 => from_base64(encoded),
        Decoder::Morse => from_morse(encoded, MorseSeparator::from_name(separator)),
    };

    decoded.with_context(|| f!("Failed to decode {decoder} input"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphcraft_core::encode::{to_base64, to_binary, to_hex, to_morse};

    #[test]
    fn test_decoder_from_str() {
        assert_eq!("binary".parse::<Decoder>().unwrap(), Decoder::Binary);
        assert_eq!("HEX".parse::<Decoder>().unwrap(), Decoder::Hex);
        assert_eq!("morse-code".parse::<Decoder>().unwrap(), Decoder::Morse);
        assert!(matches!(
            "rot13".parse::<Decoder>(),
            Err(Error::UnknownDecoder(name)) if name == "rot13"
        ));
    }

    #[test]
    fn test_decode_data_round_trips() {
        let text = "Hi ✓";
        assert_eq!(
            decode_data(Decoder::Binary, &to_binary(text, 16, true), "slash").unwrap(),
            text
        );
        assert_eq!(decode_data(Decoder::Hex, &to_hex("Hi"), "slash").unwrap(), "Hi");
        assert_eq!(
            decode_data(Decoder::Base64, &to_base64(text), "slash").unwrap(),
            text
        );
    }

    #[test]
    fn test_decode_data_morse_separator() {
        let encoded = to_morse("sos now", MorseSeparator::Pipe);
        assert_eq!(
            decode_data(Decoder::Morse, &encoded, "pipe").unwrap(),
            "SOS NOW"
        );
    }

    #[test]
    fn test_decode_data_reports_context() {
        let err = decode_data(Decoder::Hex, "zz", "slash").unwrap_err();
        assert!(err.to_string().contains("Failed to decode hex input"));
    }
}
