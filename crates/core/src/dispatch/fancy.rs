use rand::RngCore;

use super::horror::gothic;
use super::{sprinkle, Category, Tool};
use crate::settings::ResolvedSettings;
use crate::substitute::{map_chars, widen};
use crate::tables::{
    ASIAN, BOLD_SCRIPT, CIRCLED, CURRENCY, CURSIVE, CYRILLIC, DOUBLE_STRUCK, GREEK, MONOSPACE,
    NEGATIVE_CIRCLED, PARENTHESIZED, SANS,
};
use crate::zalgo::{corrupt, MarkPlan};

const ORNAMENTS: &[&str] = &["✨", "🌸", "✧", "❀", "★"];

const fn tool(slug: &'static str, name: &'static str, apply: super::Strategy) -> Tool {
    Tool::new(slug, name, Category::StyleFancy, apply)
}

pub(super) static TOOLS: &[Tool] = &[
    tool("fancy-font", "Fancy Font", fancy),
    tool("aesthetic-font", "Aesthetic Font", aesthetic),
    tool("stylish-font", "Stylish Font", ornamented),
    tool("vaporwave-text", "Vaporwave Text", wide),
    tool("aesthetic-text", "Aesthetic Text", wide),
    tool("cute-font", "Cute Font", ornamented),
    tool("calligraphy-font", "Calligraphy Font", cursive),
    tool("cursive-font", "Cursive Font", cursive),
    tool("bubble-text", "Bubble Text", bubble),
    tool("wide-text", "Wide Text", wide),
    tool("script-text", "Script Text", script),
    tool("double-struck-text", "Double Struck Text", double_struck),
    tool("monospace-text", "Monospace Text", monospace),
    tool("sans-serif-text", "Sans Serif Text", sans_serif),
    tool("currency-text", "Currency Text", currency),
    tool("asian-text", "Asian Style Text", asian),
    tool("greek-text", "Greek Text", greek),
    tool("cyrillic-text", "Cyrillic Text", cyrillic),
];

fn ornament_probability(settings: &ResolvedSettings) -> f64 {
    settings.number("density") * 0.1
}

/// Cursive letters with random ornaments scattered after them.
pub(super) fn ornamented(text: &str, settings: &ResolvedSettings, rng: &mut dyn RngCore) -> String {
    let styled = map_chars(text, &CURSIVE);
    sprinkle(&styled, ornament_probability(settings), ORNAMENTS, rng)
}

fn fancy(text: &str, settings: &ResolvedSettings, rng: &mut dyn RngCore) -> String {
    let table = if settings.number("fancy_level") > 5.0 {
        &BOLD_SCRIPT
    } else {
        &CURSIVE
    };
    let styled = map_chars(text, table);
    sprinkle(&styled, ornament_probability(settings), ORNAMENTS, rng)
}

fn aesthetic(text: &str, settings: &ResolvedSettings, rng: &mut dyn RngCore) -> String {
    match settings.text("vibe").as_str() {
        "soft" => map_chars(text, &CURSIVE),
        "grunge" => corrupt(text, MarkPlan::Intensity(2), rng),
        "dark" => gothic(text, settings, rng),
        _ => widen(text, 1),
    }
}

fn wide(text: &str, settings: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    widen(text, settings.count("spacing"))
}

fn bubble(text: &str, settings: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    match settings.text("type").as_str() {
        "fill" => map_chars(text, &NEGATIVE_CIRCLED),
        "3d" => map_chars(text, &PARENTHESIZED),
        _ => map_chars(text, &CIRCLED),
    }
}

fn cursive(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    map_chars(text, &CURSIVE)
}

fn script(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    map_chars(text, &BOLD_SCRIPT)
}

fn double_struck(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    map_chars(text, &DOUBLE_STRUCK)
}

fn monospace(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    map_chars(text, &MONOSPACE)
}

fn sans_serif(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    map_chars(text, &SANS)
}

fn currency(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    map_chars(text, &CURRENCY)
}

fn asian(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    map_chars(text, &ASIAN)
}

fn greek(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    map_chars(text, &GREEK)
}

fn cyrillic(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    map_chars(text, &CYRILLIC)
}

#[cfg(test)]
mod tests {
    use super::ORNAMENTS;
    use crate::settings::TransformOptions;
    use crate::transform_with_rng;
    use crate::zalgo::{count_marks, strip_marks};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run(text: &str, slug: &str, options: TransformOptions) -> String {
        transform_with_rng(text, slug, &options, &mut StdRng::seed_from_u64(5))
    }

    fn without_ornaments(text: &str) -> String {
        ORNAMENTS
            .iter()
            .fold(text.to_string(), |acc, ornament| acc.replace(ornament, ""))
    }

    // ============================================================================
    // Ornamented fonts
    // ============================================================================

    #[test]
    fn test_fancy_font_levels() {
        let low = TransformOptions::new()
            .with_setting("fancy_level", 5)
            .with_setting("density", 0);
        assert_eq!(run("ab", "fancy-font", low), "𝒶𝒷");

        let high = TransformOptions::new()
            .with_setting("fancy_level", 6)
            .with_setting("density", 0);
        assert_eq!(run("ab", "fancy-font", high), "𝓪𝓫");
    }

    #[test]
    fn test_cute_font_ornaments_keep_letters() {
        let options = TransformOptions::new().with_setting("density", 5);
        let out = run(&"a".repeat(50), "cute-font", options);
        assert_eq!(without_ornaments(&out), "𝒶".repeat(50));
        assert!(out.chars().count() > 50);
    }

    #[test]
    fn test_stylish_font_default_density_is_zero() {
        assert_eq!(run("Hi", "stylish-font", TransformOptions::new()), "𝐻𝒾");
    }

    // ============================================================================
    // Width and vibe
    // ============================================================================

    #[test]
    fn test_wide_text_spacing() {
        assert_eq!(run("ab", "wide-text", TransformOptions::new()), "ａ ｂ");
        let tight = TransformOptions::new().with_setting("spacing", 0);
        assert_eq!(run("a b", "vaporwave-text", tight), "ａ ｂ");
        let loose = TransformOptions {
            spacing: Some(3.0),
            ..TransformOptions::default()
        };
        assert_eq!(run("ab", "aesthetic-text", loose), "ａ   ｂ");
    }

    #[test]
    fn test_aesthetic_font_vibes() {
        assert_eq!(run("ab", "aesthetic-font", TransformOptions::new()), "ａ ｂ");

        let soft = TransformOptions::new().with_setting("vibe", "soft");
        assert_eq!(run("a", "aesthetic-font", soft), "𝒶");

        let dark = TransformOptions::new().with_setting("vibe", "dark");
        assert_eq!(run("a", "aesthetic-font", dark), "𝖆");

        let grunge = TransformOptions::new().with_setting("vibe", "grunge");
        let out = run("ab", "aesthetic-font", grunge);
        assert_eq!(strip_marks(&out), "ab");
        assert_eq!(count_marks(&out), 4);
    }

    // ============================================================================
    // Single maps
    // ============================================================================

    #[test]
    fn test_bubble_types() {
        assert_eq!(run("a", "bubble-text", TransformOptions::new()), "ⓐ");
        let fill = TransformOptions::new().with_setting("type", "fill");
        assert_eq!(run("a", "bubble-text", fill), "🅐");
        let parens = TransformOptions::new().with_setting("type", "3d");
        assert_eq!(run("a", "bubble-text", parens), "⒜");
    }

    #[test]
    fn test_single_map_tools() {
        let cases = [
            ("double-struck-text", "C", "ℂ"),
            ("monospace-text", "g", "𝚐"),
            ("sans-serif-text", "a", "𝖺"),
            ("currency-text", "a", "₳"),
            ("asian-text", "a", "卂"),
            ("greek-text", "A", "α"),
            ("cyrillic-text", "a", "Д"),
            ("script-text", "A", "𝓐"),
            ("calligraphy-font", "a", "𝒶"),
        ];
        for (slug, input, expected) in cases {
            assert_eq!(run(input, slug, TransformOptions::new()), expected, "{slug}");
        }
    }
}
