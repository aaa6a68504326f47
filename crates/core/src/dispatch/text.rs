use std::sync::OnceLock;

use rand::RngCore;
use regex::Regex;

use super::{join_chars, reverse, Category, Tool};
use crate::settings::ResolvedSettings;
use crate::substitute::{append_each, map_chars};
use crate::tables::{
    BOLD, BOLD_ITALIC, GOTHIC, ITALIC, MIRRORED, SANS_BOLD, SANS_BOLD_ITALIC, SANS_ITALIC,
    SMALL_CAPS, SUBSCRIPT, SUPERSCRIPT, UPSIDE_DOWN,
};

const UNDERLINE: &str = "\u{0332}";
const DOUBLE_UNDERLINE: &str = "\u{0333}";
const OVERLINE: &str = "\u{0305}";
const LONG_STROKE: &str = "\u{0336}";
const SHORT_SOLIDUS: &str = "\u{0337}";
const LONG_SOLIDUS: &str = "\u{0338}";
const LEFT_TO_RIGHT_MARK: &str = "\u{200E}";
const ZERO_WIDTH_SPACE: &str = "\u{200B}";

const fn tool(slug: &'static str, name: &'static str, apply: super::Strategy) -> Tool {
    Tool::new(slug, name, Category::TextTools, apply)
}

pub(super) static TOOLS: &[Tool] = &[
    tool("bold-text", "Bold Text", bold),
    tool("italic-text", "Italic Text", italic),
    tool("underline-text", "Underline Text", underline),
    tool("strikethrough-text", "Strikethrough Text", strikethrough),
    tool("slash-text", "Slash Text", slash),
    tool("small-text", "Small Text", small),
    tool("tiny-text", "Tiny Text", small),
    tool("big-text", "Big Text", big),
    tool("superscript", "Superscript", superscript),
    tool("subscript", "Subscript", subscript),
    tool("small-caps", "Small Caps", small_caps),
    tool("upside-down-text", "Upside Down Text", upside_down),
    tool("mirror-text", "Mirror Text", mirror),
    tool("reverse-text", "Reverse Text", reversed),
    tool("space-remover", "Space Remover", remove_spaces),
    tool("remove-line-breaks", "Remove Line Breaks", remove_line_breaks),
    tool("text-cleaner", "Text Cleaner", clean),
    tool("sentence-case", "Sentence Case", sentence_case),
    tool("title-case", "Title Case", title_case),
    tool("uppercase", "Uppercase", uppercase),
    tool("lowercase", "Lowercase", lowercase),
    tool("alternating-case", "Alternating Case", alternating_case),
    tool("character-counter", "Character Counter", character_counter),
    tool("invisible-character", "Invisible Character", invisible),
];

fn whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"))
}

fn line_breaks() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\r\n]+").expect("valid line break pattern"))
}

/// Anything that is neither an ASCII word character nor whitespace.
fn noise() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_\s]").expect("valid noise pattern"))
}

// ============================================================================
// Styled letters
// ============================================================================

fn bold(text: &str, settings: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    let intensity = settings.text("intensity");
    let table = match (intensity.as_str(), settings.flag("italic")) {
        ("medium", true) => &BOLD_ITALIC,
        (_, true) => &SANS_BOLD_ITALIC,
        ("extra", false) => &SANS_BOLD,
        ("ultra", false) => &GOTHIC,
        _ => &BOLD,
    };
    map_chars(text, table)
}

fn italic(text: &str, settings: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    match settings.text("style").as_str() {
        "serif" => map_chars(text, &ITALIC),
        _ => map_chars(text, &SANS_ITALIC),
    }
}

fn underline(text: &str, settings: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    let mark = if settings.flag("double") {
        DOUBLE_UNDERLINE
    } else {
        UNDERLINE
    };
    append_each(text, mark)
}

fn strikethrough(text: &str, settings: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    let position = settings.text("position");
    let mark = if settings.flag("double") {
        SHORT_SOLIDUS
    } else {
        match position.as_str() {
            "high" => OVERLINE,
            "low" => UNDERLINE,
            _ => LONG_STROKE,
        }
    };
    append_each(text, mark)
}

fn slash(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    append_each(text, LONG_SOLIDUS)
}

fn small(text: &str, settings: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    match settings.text("mode").as_str() {
        "sub" => map_chars(text, &SUBSCRIPT),
        "super" => map_chars(text, &SUPERSCRIPT),
        _ => map_chars(text, &SMALL_CAPS),
    }
}

fn big(text: &str, settings: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    let gap = " ".repeat(settings.count("spacing"));
    join_chars(&text.to_uppercase(), &gap)
}

fn superscript(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    map_chars(text, &SUPERSCRIPT)
}

fn subscript(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    map_chars(text, &SUBSCRIPT)
}

fn small_caps(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    map_chars(text, &SMALL_CAPS)
}

// ============================================================================
// Order
// ============================================================================

fn upside_down(text: &str, settings: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    let flipped = map_chars(text, &UPSIDE_DOWN);
    if settings.flag("mirror") {
        flipped
    } else {
        reverse(&flipped)
    }
}

fn mirror(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    reverse(&map_chars(text, &MIRRORED))
}

fn reversed(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    reverse(text)
}

// ============================================================================
// Cleanup
// ============================================================================

fn remove_spaces(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    whitespace().replace_all(text, "").into_owned()
}

fn remove_line_breaks(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    line_breaks().replace_all(text, " ").into_owned()
}

fn clean(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    noise().replace_all(text, "").into_owned()
}

// ============================================================================
// Case
// ============================================================================

fn sentence_case(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Capitalize the first letter of every whitespace-delimited word.
fn title_case(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            word_start = true;
            out.push(c);
        } else if word_start {
            word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

fn uppercase(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    text.to_uppercase()
}

fn lowercase(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    text.to_lowercase()
}

/// Letters alternate lower, upper, lower; other characters keep the rhythm.
fn alternating_case(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    let mut out = String::with_capacity(text.len());
    let mut upper = false;
    for c in text.chars() {
        if !c.is_alphabetic() {
            out.push(c);
            continue;
        }
        if upper {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        upper = !upper;
    }
    out
}

// ============================================================================
// Counting and invisible output
// ============================================================================

fn character_counter(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    format!("Length: {} characters", text.encode_utf16().count())
}

fn invisible(text: &str, settings: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    match settings.text("mode").as_str() {
        "between" => join_chars(text, ZERO_WIDTH_SPACE),
        _ => LEFT_TO_RIGHT_MARK.repeat(settings.count("count")),
    }
}
