use rand::RngCore;

use super::fancy::ornamented;
use super::horror::bold;
use super::{Category, Tool};
use crate::settings::ResolvedSettings;
use crate::substitute::map_chars;
use crate::tables::{
    CharMap, BOLD, BOLD_ITALIC, BOLD_SCRIPT, CIRCLED, GOTHIC, ITALIC, MONOSPACE, SANS_BOLD_ITALIC,
};
use crate::zalgo::{corrupt, MarkPlan};

const fn tool(slug: &'static str, name: &'static str, apply: super::Strategy) -> Tool {
    Tool::new(slug, name, Category::SocialFonts, apply)
}

pub(super) static TOOLS: &[Tool] = &[
    tool("instagram-font", "Instagram Font", ornamented),
    tool("discord-font", "Discord Font", discord),
    tool("tiktok-font", "TikTok Font", tiktok),
    tool("facebook-font", "Facebook Font", facebook),
    tool("twitter-font", "Twitter Font", bold),
    tool("gaming-font", "Gaming Font", gaming),
    tool("fortnite-font", "Fortnite Font", bold),
];

fn discord(text: &str, settings: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    let table: Option<&CharMap> = match settings.text("style").as_str() {
        "bold" => Some(&BOLD),
        "italic" => Some(&ITALIC),
        "bold-italic" => Some(&BOLD_ITALIC),
        "monospace" => Some(&MONOSPACE),
        "script" => Some(&BOLD_SCRIPT),
        _ => None,
    };

    let mut out = match table {
        Some(table) => map_chars(text, table),
        None => text.to_string(),
    };
    if settings.flag("markdown") {
        out = format!("`{out}`");
    }
    if settings.flag("spoiler") {
        out = format!("||{out}||");
    }
    out
}

fn tiktok(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    map_chars(text, &CIRCLED)
}

fn facebook(text: &str, settings: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    match settings.text("mode").as_str() {
        "comment" => map_chars(text, &MONOSPACE),
        "bio" => map_chars(text, &ITALIC),
        _ => map_chars(text, &BOLD),
    }
}

fn gaming(text: &str, settings: &ResolvedSettings, rng: &mut dyn RngCore) -> String {
    match settings.text("game").as_str() {
        "cod" => map_chars(text, &MONOSPACE),
        "valorant" => map_chars(&text.to_uppercase(), &BOLD),
        "fantasy" => map_chars(text, &BOLD_SCRIPT),
        "esports" => map_chars(&text.to_uppercase(), &SANS_BOLD_ITALIC),
        "horror" => corrupt(&map_chars(text, &GOTHIC), MarkPlan::Intensity(2), rng),
        _ => map_chars(text, &BOLD),
    }
}
