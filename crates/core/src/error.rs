use thiserror::Error;

/// Failures raised by the encoders and their decoders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("unpaired UTF-16 surrogate 0x{0:04X}")]
    UnpairedSurrogate(u16),

    #[error("invalid binary group: {0}")]
    InvalidBinary(String),

    #[error("invalid hex group: {0}")]
    InvalidHex(String),

    #[error("invalid base64 input: {0}")]
    InvalidBase64(String),

    #[error("decoded bytes are not valid UTF-8")]
    InvalidUtf8,

    #[error("unknown Morse sequence: {0}")]
    UnknownMorse(String),
}
