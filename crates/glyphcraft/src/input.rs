use std::io::Read;

use crate::prelude::*;

/// The text argument, or all of stdin when it is missing or `-`.
pub fn read_text(arg: Option<String>) -> Result<String> {
    match arg {
        Some(text) if text != "-" => Ok(text),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            Ok(trim_trailing_newline(buffer))
        }
    }
}

/// Drop the single line ending a shell pipe leaves behind.
pub fn trim_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
