use rand::{Rng, RngCore};

use super::{join_chars, pick, scaled, Category, Tool};
use crate::settings::ResolvedSettings;
use crate::substitute::{lookup, map_chars};
use crate::tables::{BOLD, FRAKTUR, GOTHIC, NEGATIVE_SQUARED, SQUARED};
use crate::zalgo::{append_marks, corrupt, corrupt_cycled, MarkPlan};

const SCANLINE: char = '\u{0336}';
const SHADOW: char = '\u{0334}';
const OCCULT_SYMBOLS: &[&str] = &["†", "☠", "⛧", "✝", "🜏"];

const fn tool(slug: &'static str, name: &'static str, apply: super::Strategy) -> Tool {
    Tool::new(slug, name, Category::DarkHorror, apply)
}

pub(super) static TOOLS: &[Tool] = &[
    tool("cursed-text", "Cursed Text", cursed),
    tool("zalgo-text", "Zalgo Text", zalgo),
    tool("glitch-text", "Glitch Text", glitch),
    tool("weird-text", "Weird Text", weird),
    tool("creepy-text", "Creepy Text", creepy),
    tool("corrupted-text", "Corrupted Text", corrupted),
    tool("demonic-text", "Demonic Text", demonic),
    tool("scary-text", "Scary Text", scary),
    tool("horror-text", "Horror Text", horror),
    tool("gothic-font", "Gothic Font", gothic),
    tool("fraktur-text", "Fraktur Text", fraktur),
    tool("special-text", "Special Text", bold),
    tool("extra-thicc-text", "Extra Thicc Text", bold),
    tool("glitter-text", "Glitter Text", glitter),
    tool("square-text", "Square Text", square),
];

fn cursed(text: &str, settings: &ResolvedSettings, rng: &mut dyn RngCore) -> String {
    let intensity = settings.count("intensity");
    if settings.flag("randomize") {
        corrupt(text, MarkPlan::Intensity(intensity), rng)
    } else {
        corrupt_cycled(text, intensity, rng)
    }
}

fn zalgo(text: &str, settings: &ResolvedSettings, rng: &mut dyn RngCore) -> String {
    let up = settings.count("up");
    let middle = settings.count("middle");
    let down = settings.count("down");

    if !settings.flag("chaos") {
        return corrupt(text, MarkPlan::Explicit { up, middle, down }, rng);
    }

    let mut out = String::with_capacity(text.len() * 8);
    for c in text.chars() {
        out.push(c);
        let plan = MarkPlan::Explicit {
            up: rng.gen_range(0..=up),
            middle: rng.gen_range(0..=middle),
            down: rng.gen_range(0..=down),
        };
        append_marks(&mut out, plan, rng);
    }
    out
}

fn glitch(text: &str, settings: &ResolvedSettings, rng: &mut dyn RngCore) -> String {
    let glitch_type = settings.text("glitchType");
    let plan = MarkPlan::Intensity(scaled(settings, "intensity", 4.0));
    let scanlines = settings.flag("scanlines");

    let mut out = String::with_capacity(text.len() * 6);
    for c in text.chars() {
        let block = match glitch_type.as_str() {
            "static" => rng.gen_bool(0.2).then_some('░'),
            "vhs" => rng.gen_bool(0.1).then_some('▓'),
            _ => None,
        };
        match block {
            Some(block) => out.push(block),
            None => {
                out.push(c);
                append_marks(&mut out, plan, rng);
            }
        }
        if scanlines {
            out.push(SCANLINE);
        }
    }
    out
}

/// Rotate gothic, bold and corrupted characters; with `mix` off every
/// character is corrupted. `shadow` appends an overlay after each one.
fn mixed(text: &str, level: usize, mix: bool, shadow: bool, rng: &mut dyn RngCore) -> String {
    let plan = MarkPlan::Intensity(level);

    let mut out = String::with_capacity(text.len() * 6);
    for (i, c) in text.chars().enumerate() {
        let table = match i % 3 {
            0 if mix => Some(&GOTHIC),
            1 if mix => Some(&BOLD),
            _ => None,
        };

        match table {
            Some(table) => match lookup(table, c) {
                Some(glyph) => out.push_str(glyph),
                None => out.push(c),
            },
            None => {
                out.push(c);
                append_marks(&mut out, plan, rng);
            }
        }

        if shadow {
            out.push(SHADOW);
        }
    }
    out
}

fn weird(text: &str, settings: &ResolvedSettings, rng: &mut dyn RngCore) -> String {
    let level = scaled(settings, "level", 2.0);
    mixed(text, level, settings.flag("mix"), false, rng)
}

fn creepy(text: &str, settings: &ResolvedSettings, rng: &mut dyn RngCore) -> String {
    let level = scaled(settings, "creepiness", 2.0);
    mixed(text, level, true, settings.flag("shadow"), rng)
}

fn corrupted(text: &str, settings: &ResolvedSettings, rng: &mut dyn RngCore) -> String {
    let intensity = settings.count("intensity");
    let once = corrupt(text, MarkPlan::Intensity(intensity), rng);
    if settings.flag("recursive") {
        corrupt(&once, MarkPlan::Intensity(intensity.div_ceil(2)), rng)
    } else {
        once
    }
}

fn demonic(text: &str, settings: &ResolvedSettings, rng: &mut dyn RngCore) -> String {
    let darkness = settings.count("darkness");
    let plan = MarkPlan::Intensity(scaled(settings, "darkness", 1.5));
    let stride = 11usize.saturating_sub(darkness).max(1);
    let symbols = settings.flag("symbols");

    let mut out = String::with_capacity(text.len() * 8);
    for (i, c) in text.chars().enumerate() {
        match lookup(&GOTHIC, c) {
            Some(glyph) => out.push_str(glyph),
            None => out.push(c),
        }
        append_marks(&mut out, plan, rng);
        if symbols && (i + 1) % stride == 0 {
            out.push_str(pick(OCCULT_SYMBOLS, rng));
        }
    }
    out
}

fn scary(text: &str, settings: &ResolvedSettings, rng: &mut dyn RngCore) -> String {
    let plan = MarkPlan::Intensity(scaled(settings, "fear", 3.0));
    corrupt(&map_chars(text, &GOTHIC), plan, rng)
}

fn horror(text: &str, settings: &ResolvedSettings, rng: &mut dyn RngCore) -> String {
    let plan = MarkPlan::Intensity(settings.count("intensity"));
    corrupt(&map_chars(text, &GOTHIC), plan, rng)
}

pub(super) fn gothic(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    map_chars(text, &GOTHIC)
}

fn fraktur(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    map_chars(text, &FRAKTUR)
}

pub(super) fn bold(text: &str, _: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    map_chars(text, &BOLD)
}

fn glitter(text: &str, settings: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    join_chars(text, &settings.text("decoration"))
}

fn square(text: &str, settings: &ResolvedSettings, _: &mut dyn RngCore) -> String {
    match settings.text("style").as_str() {
        "filled" => map_chars(text, &NEGATIVE_SQUARED),
        _ => map_chars(text, &SQUARED),
    }
}
