use rand::RngCore;

use super::horror::gothic;
use super::{Category, Tool};
use crate::encode::{
    generate_ascii_art, to_base64, to_binary, to_braille, to_hex, to_morse, ArtStyle,
    MorseSeparator,
};
use crate::settings::ResolvedSettings;
use crate::substitute::map_chars;
use crate::tables::{RUNIC, SIGN_LANGUAGE, WINGDINGS};

const fn tool(slug: &'static str, name: &'static str, apply: super::Strategy) -> Tool {
    Tool::new(slug, name, Category::Translators, apply)
}

pub(super) static TOOLS: &[Tool] = &[
    tool("morse-code", "Morse Code", morse),
    tool("braille", "Braille Translator", braille),
    tool("binary", "Binary Translator", binary),
    tool("hex-code", "Hex Code", hex),
    tool("base64", "Base64 Encoder", base64),
    tool("wingdings", "Wingdings Translator", wingdings),
    tool("runic", "Runic Translator", runic),
    tool("old-english", "Old English Text", gothic),
    tool("sign-language", "Sign Language", sign_language),
    tool("ascii-art", "ASCII Art", ascii_art),
];

fn morse(text: &str, settings: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    let separator = MorseSeparator::from_name(&settings.text("separator"));
    to_morse(text, separator)
}

fn braille(text: &str, settings: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    to_braille(text, settings.flag("showIndicator"))
}

fn binary(text: &str, settings: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    to_binary(text, settings.count("bits"), settings.flag("prefix"))
}

fn hex(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    to_hex(text)
}

fn base64(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    to_base64(text)
}

fn wingdings(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    map_chars(text, &WINGDINGS)
}

fn runic(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    map_chars(text, &RUNIC)
}

fn sign_language(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    map_chars(&text.to_lowercase(), &SIGN_LANGUAGE)
}

fn ascii_art(text: &str, settings: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    generate_ascii_art(text, ArtStyle::from_name(&settings.text("font")))
}

#[cfg(test)]
mod tests {
    use crate::settings::TransformOptions;
    use crate::transform_with_rng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run(text: &str, slug: &str, options: TransformOptions) -> String {
        transform_with_rng(text, slug, &options, &mut StdRng::seed_from_u64(0))
    }

    #[test]
    fn test_morse_separators() {
        assert_eq!(run("a b", "morse-code", TransformOptions::new()), ".- / -...");
        let pipe = TransformOptions::new().with_setting("separator", "pipe");
        assert_eq!(run("a b", "morse-code", pipe), ".- | -...");
        let space = TransformOptions::new().with_setting("separator", "space");
        assert_eq!(run("a b", "morse-code", space), ".-   -...");
    }

    #[test]
    fn test_braille_indicator_toggle() {
        assert_eq!(run("a1", "braille", TransformOptions::new()), "⠁⠼⠂");
        let bare = TransformOptions::new().with_setting("showIndicator", false);
        assert_eq!(run("a1", "braille", bare), "⠁⠂");
    }

    #[test]
    fn test_binary_accepts_numeric_bits() {
        let options = TransformOptions::new().with_setting("bits", 16);
        assert_eq!(run("A", "binary", options), "0000000001000001");
    }

    #[test]
    fn test_hex_and_base64() {
        assert_eq!(run("AB", "hex-code", TransformOptions::new()), "41 42");
        assert_eq!(run("✓", "base64", TransformOptions::new()), "4pyT");
    }

    #[test]
    fn test_symbol_alphabets() {
        assert_eq!(run("A", "wingdings", TransformOptions::new()), "✌\u{FE0E}");
        assert_eq!(run("ax", "runic", TransformOptions::new()), "ᚨᚲᛊ");
        assert_eq!(run("A b", "sign-language", TransformOptions::new()), "👌  ✋");
        assert_eq!(run("a", "old-english", TransformOptions::new()), "𝖆");
    }

    #[test]
    fn test_ascii_art_fonts() {
        let std = run("A", "ascii-art", TransformOptions::new());
        assert_eq!(std.lines().count(), 6);

        let blocks = TransformOptions::new().with_setting("font", "3d");
        assert_eq!(run("A", "ascii-art", blocks).lines().count(), 3);

        let cyber = TransformOptions::new().with_setting("font", "cyber");
        let framed = run("A", "ascii-art", cyber);
        assert!(framed.starts_with('╔'));
        assert!(framed.ends_with('╝'));
    }
}
