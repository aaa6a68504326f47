use serde::{Deserialize, Serialize};

use crate::error::EncodeError;

const MORSE_TABLE: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
];

/// How words are separated in Morse output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MorseSeparator {
    #[default]
    Slash,
    Pipe,
    Space,
}

impl MorseSeparator {
    /// Parse a separator name, falling back to [`MorseSeparator::Slash`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "pipe" => MorseSeparator::Pipe,
            "space" => MorseSeparator::Space,
            _ => MorseSeparator::Slash,
        }
    }

    pub fn joiner(self) -> &'static str {
        match self {
            MorseSeparator::Slash => " / ",
            MorseSeparator::Pipe => " | ",
            MorseSeparator::Space => "   ",
        }
    }
}

fn code_for(c: char) -> Option<&'static str> {
    MORSE_TABLE
        .iter()
        .find(|(key, _)| *key == c)
        .map(|(_, code)| *code)
}

fn char_for(code: &str) -> Option<char> {
    MORSE_TABLE
        .iter()
        .find(|(_, candidate)| *candidate == code)
        .map(|(key, _)| *key)
}

/// Encode `text` as Morse. Characters without a code are kept as they are.
pub fn to_morse(text: &str, separator: MorseSeparator) -> String {
    text.to_uppercase()
        .split(' ')
        .map(|word| {
            word.chars()
                .map(|c| code_for(c).map_or_else(|| c.to_string(), str::to_string))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(separator.joiner())
}

/// Decode Morse produced by [`to_morse`] with the same separator.
///
/// A bare `/` token is read as a word break regardless of separator.
pub fn from_morse(encoded: &str, separator: MorseSeparator) -> Result<String, EncodeError> {
    let words = encoded
        .trim()
        .split(separator.joiner())
        .map(|word| {
            word.split(' ')
                .filter(|token| !token.is_empty())
                .map(|token| match token {
                    "/" => Ok(' '),
                    code => char_for(code).ok_or_else(|| EncodeError::UnknownMorse(code.to_string())),
                })
                .collect::<Result<String, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // to_morse tests
    // ============================================================================

    #[test]
    fn test_to_morse_single_word() {
        assert_eq!(to_morse("SOS", MorseSeparator::Slash), "... --- ...");
    }

    #[test]
    fn test_to_morse_lowercase_input() {
        assert_eq!(to_morse("sos", MorseSeparator::Slash), "... --- ...");
    }

    #[test]
    fn test_to_morse_separators() {
        assert_eq!(to_morse("hi yo", MorseSeparator::Slash), ".... .. / -.-- ---");
        assert_eq!(to_morse("hi yo", MorseSeparator::Pipe), ".... .. | -.-- ---");
        assert_eq!(to_morse("hi yo", MorseSeparator::Space), ".... ..   -.-- ---");
    }

    #[test]
    fn test_to_morse_punctuation_and_digits() {
        assert_eq!(to_morse("1?", MorseSeparator::Slash), ".---- ..--..");
    }

    #[test]
    fn test_to_morse_unknown_passes_through() {
        assert_eq!(to_morse("a#", MorseSeparator::Slash), ".- #");
    }

    #[test]
    fn test_separator_from_name() {
        assert_eq!(MorseSeparator::from_name("pipe"), MorseSeparator::Pipe);
        assert_eq!(MorseSeparator::from_name("space"), MorseSeparator::Space);
        assert_eq!(MorseSeparator::from_name("weird"), MorseSeparator::Slash);
    }

    // ============================================================================
    // from_morse tests
    // ============================================================================

    #[test]
    fn test_round_trip_recovers_uppercase() {
        let text = "Hello World, call 911!";
        for separator in [
            MorseSeparator::Slash,
            MorseSeparator::Pipe,
            MorseSeparator::Space,
        ] {
            let encoded = to_morse(text, separator);
            assert_eq!(from_morse(&encoded, separator).unwrap(), text.to_uppercase());
        }
    }

    #[test]
    fn test_from_morse_slash_token_is_space() {
        assert_eq!(from_morse(".- / -...", MorseSeparator::Pipe).unwrap(), "A B");
    }

    #[test]
    fn test_from_morse_unknown_code() {
        assert_eq!(
            from_morse("...---...", MorseSeparator::Slash),
            Err(EncodeError::UnknownMorse("...---...".to_string()))
        );
    }
}
