use rand::RngCore;

use super::{pick, Category, Tool};
use crate::settings::ResolvedSettings;

const TEXT_SYMBOLS: &[&str] = &[
    "★", "✦", "✡", "❄", "♫", "✈", "☺", "☹", "♠️", "♣️", "♥️", "♦️",
];
const AESTHETIC_SYMBOLS: &[&str] = &[
    "✧", "☾", "☁", "☂", "☃", "☮", "☯", "🦋", "🌸", "✨", "🪐", "🐚",
];
const EMOTICONS: &[&str] = &[
    "ʕ•ᴥ•ʔ",
    "(ง'\u{0300}-'\u{0301})ง",
    "¯\\_(ツ)_/¯",
    "(ᵔᴥᵔ)",
    "(¬‿¬)",
    "(づ｡◕‿‿◕｡)づ",
];
const LENNY: &str = "( \u{0361}° \u{035F}ʖ \u{0361}°)";

const fn tool(slug: &'static str, name: &'static str, apply: super::Strategy) -> Tool {
    Tool::new(slug, name, Category::Symbols, apply)
}

pub(super) static TOOLS: &[Tool] = &[
    tool("text-symbols", "Text Symbols", text_symbols),
    tool("aesthetic-symbols", "Aesthetic Symbols", aesthetic_symbols),
    tool("special-characters", "Special Characters", special_characters),
    tool("text-emoticons", "Text Emoticons", emoticon),
    tool("lenny-face", "Lenny Face", lenny),
];

/// `text` between two independently drawn symbols.
fn framed(text: &str, pool: &[&'static str], rng: &mut dyn RngCore) -> String {
    let left = pick(pool, rng);
    let right = pick(pool, rng);
    format!("{left} {text} {right}")
}

fn text_symbols(text: &str, _: &ResolvedSettings, rng: &mut dyn RngCore) -> String {
    framed(text, TEXT_SYMBOLS, rng)
}

fn aesthetic_symbols(text: &str, _: &ResolvedSettings, rng: &mut dyn RngCore) -> String {
    framed(text, AESTHETIC_SYMBOLS, rng)
}

fn special_characters(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    format!("® {text} ™")
}

fn emoticon(text: &str, _: &ResolvedSettings, rng: &mut dyn RngCore) -> String {
    format!("{} {text}", pick(EMOTICONS, rng))
}

fn lenny(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    format!("{LENNY} {text} {LENNY}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::TransformOptions;
    use crate::transform_with_rng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run(text: &str, slug: &str) -> String {
        transform_with_rng(
            text,
            slug,
            &TransformOptions::new(),
            &mut StdRng::seed_from_u64(9),
        )
    }

    #[test]
    fn test_framed_symbols_come_from_pool() {
        for (slug, pool) in [
            ("text-symbols", TEXT_SYMBOLS),
            ("aesthetic-symbols", AESTHETIC_SYMBOLS),
        ] {
            let out = run("hey", slug);
            let (left, rest) = out.split_once(" hey ").expect("text is framed");
            assert!(pool.contains(&left), "{slug}: {left}");
            assert!(pool.contains(&rest), "{slug}: {rest}");
        }
    }

    #[test]
    fn test_special_characters() {
        assert_eq!(run("brand", "special-characters"), "® brand ™");
    }

    #[test]
    fn test_emoticon_prefix() {
        let out = run("hi", "text-emoticons");
        let face = out.strip_suffix(" hi").expect("emoticon then text");
        assert!(EMOTICONS.contains(&face));
    }

    #[test]
    fn test_lenny_face() {
        assert_eq!(
            run("hi", "lenny-face"),
            "( \u{0361}° \u{035F}ʖ \u{0361}°) hi ( \u{0361}° \u{035F}ʖ \u{0361}°)"
        );
    }
}
