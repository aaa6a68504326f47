//! Tool registry and the `transform` entry point.
//!
//! Every tool is a [`Tool`] entry holding a plain function pointer. Tools are
//! grouped by category, one module per category, and looked up by slug through
//! an index built on first use.

mod fancy;
mod horror;
mod social;
mod symbols;
mod text;
mod translators;

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use log::debug;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use serde::Serialize;

use crate::config::{get_config, resolve_options};
use crate::settings::{ResolvedSettings, SettingValue, Settings, TransformOptions};

/// A tool implementation: input text, effective settings, random source.
pub type Strategy = fn(&str, &ResolvedSettings, &mut dyn RngCore) -> String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    DarkHorror,
    SocialFonts,
    StyleFancy,
    TextTools,
    Symbols,
    Translators,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::DarkHorror,
        Category::SocialFonts,
        Category::StyleFancy,
        Category::TextTools,
        Category::Symbols,
        Category::Translators,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::DarkHorror => "dark-horror",
            Category::SocialFonts => "social-fonts",
            Category::StyleFancy => "style-fancy",
            Category::TextTools => "text-tools",
            Category::Symbols => "symbols",
            Category::Translators => "translators",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::DarkHorror => "Dark & Horror",
            Category::SocialFonts => "Social Fonts",
            Category::StyleFancy => "Style & Fancy",
            Category::TextTools => "Text Tools",
            Category::Symbols => "Symbols",
            Category::Translators => "Translators",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.slug() == slug)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named transformation.
#[derive(Clone, Copy, Serialize)]
pub struct Tool {
    pub slug: &'static str,
    pub name: &'static str,
    pub category: Category,
    #[serde(skip)]
    pub apply: Strategy,
}

impl Tool {
    const fn new(
        slug: &'static str,
        name: &'static str,
        category: Category,
        apply: Strategy,
    ) -> Self {
        Self {
            slug,
            name,
            category,
            apply,
        }
    }
}

impl fmt::Debug for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tool")
            .field("slug", &self.slug)
            .field("category", &self.category)
            .finish()
    }
}

/// Every registered tool, grouped by category.
pub fn tools() -> impl Iterator<Item = &'static Tool> {
    horror::TOOLS
        .iter()
        .chain(social::TOOLS)
        .chain(fancy::TOOLS)
        .chain(text::TOOLS)
        .chain(symbols::TOOLS)
        .chain(translators::TOOLS)
}

/// Look a tool up by slug, case-insensitively.
pub fn find_tool(slug: &str) -> Option<&'static Tool> {
    static INDEX: OnceLock<HashMap<&'static str, &'static Tool>> = OnceLock::new();
    INDEX
        .get_or_init(|| tools().map(|tool| (tool.slug, tool)).collect())
        .get(slug.to_lowercase().as_str())
        .copied()
}

/// Apply the tool named `slug` to `text`.
///
/// Unknown tools return the text unchanged, uppercased first when the options
/// ask for it. Empty input always yields an empty string.
pub fn transform(text: &str, slug: &str, options: &TransformOptions) -> String {
    transform_with_rng(text, slug, options, &mut rand::thread_rng())
}

/// [`transform`] with a caller-supplied random source.
pub fn transform_with_rng<R: RngCore>(
    text: &str,
    slug: &str,
    options: &TransformOptions,
    rng: &mut R,
) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = if options.uppercase {
        text.to_uppercase()
    } else {
        text.to_string()
    };

    let Some(tool) = find_tool(slug) else {
        debug!("unknown tool `{slug}`, returning input unchanged");
        return text;
    };

    let settings = effective_settings(tool.slug, options);
    debug!("running `{}` with {:?}", tool.slug, settings.values());
    (tool.apply)(&text, &settings, rng)
}

/// Registry defaults, then matching top-level options, then custom settings.
pub fn effective_settings(slug: &str, options: &TransformOptions) -> ResolvedSettings {
    let mut supplied = Settings::new();

    if let Some(config) = get_config(slug) {
        for (key, value) in options.aliases() {
            if config.accepts_alias(key, &value) {
                supplied.insert(key.to_string(), value);
            }
        }
    }

    for (key, value) in options.defined_settings() {
        supplied.insert(key.clone(), value.clone());
    }

    ResolvedSettings::new(resolve_options(slug, &supplied))
}

// ============================================================================
// Helpers shared by the category modules
// ============================================================================

/// Random element of `pool`, or an empty string for an empty pool.
fn pick(pool: &[&'static str], rng: &mut dyn RngCore) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// After each character, with `probability`, append a random ornament.
fn sprinkle(text: &str, probability: f64, pool: &[&'static str], rng: &mut dyn RngCore) -> String {
    if probability <= 0.0 {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        out.push(c);
        if rng.gen::<f64>() < probability {
            out.push_str(pick(pool, rng));
        }
    }
    out
}

/// `ceil(setting / divisor)` as a mark count.
fn scaled(settings: &ResolvedSettings, key: &str, divisor: f64) -> usize {
    SettingValue::Number(settings.number(key) / divisor).as_count()
}

/// Join the characters of `text` with `separator`.
fn join_chars(text: &str, separator: &str) -> String {
    text.chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(separator)
}

fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}
