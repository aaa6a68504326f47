#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Invalid setting `{0}`: expected KEY=VALUE")]
    InvalidSetting(String),

    #[error("Unknown tool: {0}. Run `glyphcraft tools` to list them")]
    UnknownTool(String),

    #[error("Unknown category: {0}. Valid categories: {1}")]
    UnknownCategory(String, String),

    #[error("Unknown decoder: {0}. Valid decoders: binary, hex, base64, morse")]
    UnknownDecoder(String),
}
