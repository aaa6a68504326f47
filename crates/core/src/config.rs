//! Per-tool control schemas.
//!
//! Each tool declares the controls it understands, in display order, with a
//! default for every one. The dispatcher resolves settings exclusively through
//! this registry.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

use crate::settings::{SettingValue, Settings};

/// One choice of a select control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SelectOption {
    pub label: &'static str,
    pub value: &'static str,
}

/// The widget behind a control, with its bounds or choices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ControlKind {
    Slider { min: f64, max: f64, step: f64 },
    Toggle,
    Select { options: &'static [SelectOption] },
    Button,
}

/// Compile-time default of a control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Flag(bool),
    Number(f64),
    Text(&'static str),
}

impl DefaultValue {
    pub fn to_setting(self) -> SettingValue {
        match self {
            DefaultValue::Flag(flag) => SettingValue::Flag(flag),
            DefaultValue::Number(number) => SettingValue::Number(number),
            DefaultValue::Text(text) => SettingValue::Text(text.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToolControl {
    pub id: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: ControlKind,
    #[serde(rename = "defaultValue")]
    pub default_value: DefaultValue,
}

impl ToolControl {
    /// Whether a top-level option value can stand in for this control.
    fn accepts(&self, value: &SettingValue) -> bool {
        matches!(
            (self.kind, value),
            (ControlKind::Slider { .. }, SettingValue::Number(_))
                | (ControlKind::Select { .. }, SettingValue::Text(_))
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToolConfig {
    pub slug: &'static str,
    pub controls: &'static [ToolControl],
}

impl ToolConfig {
    pub fn control(&self, id: &str) -> Option<&'static ToolControl> {
        self.controls.iter().find(|control| control.id == id)
    }

    /// Whether a top-level alias named `id` applies to this tool.
    pub fn accepts_alias(&self, id: &str, value: &SettingValue) -> bool {
        self.control(id).is_some_and(|control| control.accepts(value))
    }

    /// Default value of every control, keyed by id.
    pub fn defaults(&self) -> Settings {
        self.controls
            .iter()
            .map(|control| (control.id.to_string(), control.default_value.to_setting()))
            .collect()
    }
}

const fn slider(id: &'static str, label: &'static str, min: f64, max: f64, default: f64) -> ToolControl {
    ToolControl {
        id,
        label,
        kind: ControlKind::Slider { min, max, step: 1.0 },
        default_value: DefaultValue::Number(default),
    }
}

const fn toggle(id: &'static str, label: &'static str, default: bool) -> ToolControl {
    ToolControl {
        id,
        label,
        kind: ControlKind::Toggle,
        default_value: DefaultValue::Flag(default),
    }
}

const fn select(
    id: &'static str,
    label: &'static str,
    options: &'static [SelectOption],
    default: &'static str,
) -> ToolControl {
    ToolControl {
        id,
        label,
        kind: ControlKind::Select { options },
        default_value: DefaultValue::Text(default),
    }
}

const fn button(id: &'static str, label: &'static str) -> ToolControl {
    ToolControl {
        id,
        label,
        kind: ControlKind::Button,
        default_value: DefaultValue::Flag(false),
    }
}

const fn opt(label: &'static str, value: &'static str) -> SelectOption {
    SelectOption { label, value }
}

const fn tool(slug: &'static str, controls: &'static [ToolControl]) -> ToolConfig {
    ToolConfig { slug, controls }
}

const DENSITY_OFF: ToolControl = slider("density", "Decoration Density", 0.0, 5.0, 0.0);
const SPACING: ToolControl = slider("spacing", "Letter Spacing", 0.0, 5.0, 1.0);

const SMALL_MODES: &[SelectOption] = &[
    opt("Subscript", "sub"),
    opt("Superscript", "super"),
    opt("Small Caps", "tiny"),
];

static REGISTRY: &[ToolConfig] = &[
    // Dark & horror
    tool(
        "cursed-text",
        &[
            slider("intensity", "Curse Intensity", 1.0, 20.0, 5.0),
            toggle("randomize", "Random Chaos", true),
            toggle("animate", "Animate Preview", false),
        ],
    ),
    tool(
        "zalgo-text",
        &[
            slider("up", "Marks Above", 0.0, 15.0, 5.0),
            slider("middle", "Marks Through", 0.0, 15.0, 2.0),
            slider("down", "Marks Below", 0.0, 15.0, 5.0),
            toggle("chaos", "Chaos Mode", false),
        ],
    ),
    tool(
        "glitch-text",
        &[
            select(
                "glitchType",
                "Glitch Style",
                &[opt("Digital", "digital"), opt("VHS", "vhs"), opt("Static", "static")],
                "digital",
            ),
            slider("intensity", "Glitch Intensity", 1.0, 20.0, 5.0),
            toggle("scanlines", "Scanlines", false),
        ],
    ),
    tool(
        "weird-text",
        &[
            slider("level", "Weirdness", 1.0, 10.0, 5.0),
            toggle("mix", "Mix Styles", true),
        ],
    ),
    tool(
        "creepy-text",
        &[
            slider("creepiness", "Creepiness", 1.0, 10.0, 5.0),
            toggle("shadow", "Shadow Effect", false),
        ],
    ),
    tool(
        "corrupted-text",
        &[
            slider("intensity", "Corruption Level", 1.0, 20.0, 10.0),
            toggle("recursive", "Recursive Corruption", false),
        ],
    ),
    tool(
        "demonic-text",
        &[
            slider("darkness", "Darkness", 1.0, 10.0, 5.0),
            toggle("symbols", "Occult Symbols", true),
        ],
    ),
    tool(
        "scary-text",
        &[
            slider("fear", "Fear Factor", 1.0, 10.0, 5.0),
            toggle("shake", "Shake Preview", false),
        ],
    ),
    tool(
        "horror-text",
        &[slider("intensity", "Horror Intensity", 1.0, 20.0, 5.0)],
    ),
    tool("gothic-font", &[]),
    tool("fraktur-text", &[]),
    tool("special-text", &[]),
    tool("extra-thicc-text", &[]),
    tool(
        "glitter-text",
        &[select(
            "decoration",
            "Sparkle",
            &[
                opt("Sparkles", "✨"),
                opt("Stars", "⭐"),
                opt("Hearts", "💖"),
                opt("Twinkle", "✧"),
            ],
            "✨",
        )],
    ),
    tool(
        "square-text",
        &[select(
            "style",
            "Square Style",
            &[opt("Outline", "outline"), opt("Filled", "filled")],
            "outline",
        )],
    ),
    // Social fonts
    tool(
        "instagram-font",
        &[
            DENSITY_OFF,
            toggle("mockup", "Profile Mockup", false),
            button("chars", "Character Count"),
        ],
    ),
    tool(
        "discord-font",
        &[
            select(
                "style",
                "Font Style",
                &[
                    opt("Plain", "plain"),
                    opt("Bold", "bold"),
                    opt("Italic", "italic"),
                    opt("Bold Italic", "bold-italic"),
                    opt("Monospace", "monospace"),
                    opt("Script", "script"),
                ],
                "plain",
            ),
            toggle("markdown", "Code Block", true),
            toggle("spoiler", "Spoiler Tag", false),
        ],
    ),
    tool(
        "tiktok-font",
        &[
            toggle("preview", "Video Preview", true),
            toggle("safety", "Safe Characters", true),
        ],
    ),
    tool(
        "facebook-font",
        &[select(
            "mode",
            "Post Type",
            &[opt("Post", "post"), opt("Comment", "comment"), opt("Bio", "bio")],
            "post",
        )],
    ),
    tool(
        "twitter-font",
        &[
            toggle("thread", "Thread Mode", false),
            button("limit", "Character Limit"),
        ],
    ),
    tool(
        "gaming-font",
        &[select(
            "game",
            "Game Style",
            &[
                opt("Fortnite", "fortnite"),
                opt("Call of Duty", "cod"),
                opt("Valorant", "valorant"),
                opt("Fantasy RPG", "fantasy"),
                opt("Esports", "esports"),
                opt("Horror", "horror"),
            ],
            "fortnite",
        )],
    ),
    tool("fortnite-font", &[]),
    // Style & fancy
    tool(
        "fancy-font",
        &[
            slider("fancy_level", "Fanciness", 1.0, 10.0, 5.0),
            slider("density", "Decoration Density", 1.0, 5.0, 2.0),
        ],
    ),
    tool(
        "aesthetic-font",
        &[select(
            "vibe",
            "Aesthetic Vibe",
            &[
                opt("Vaporwave", "vaporwave"),
                opt("Soft", "soft"),
                opt("Grunge", "grunge"),
                opt("Dark", "dark"),
            ],
            "vaporwave",
        )],
    ),
    tool("stylish-font", &[DENSITY_OFF]),
    tool(
        "vaporwave-text",
        &[SPACING, toggle("palette", "Color Palette", true)],
    ),
    tool("aesthetic-text", &[SPACING]),
    tool(
        "cute-font",
        &[slider("density", "Decoration Density", 0.0, 5.0, 2.0)],
    ),
    tool("calligraphy-font", &[]),
    tool("cursive-font", &[]),
    tool(
        "bubble-text",
        &[select(
            "type",
            "Bubble Style",
            &[opt("Outline", "out"), opt("Filled", "fill"), opt("3D", "3d")],
            "out",
        )],
    ),
    tool("wide-text", &[SPACING]),
    tool("script-text", &[]),
    tool("double-struck-text", &[]),
    tool("monospace-text", &[]),
    tool("sans-serif-text", &[]),
    tool("currency-text", &[]),
    tool("asian-text", &[]),
    tool("greek-text", &[]),
    tool("cyrillic-text", &[]),
    // Text tools
    tool(
        "bold-text",
        &[
            select(
                "intensity",
                "Boldness",
                &[opt("Medium", "medium"), opt("Extra", "extra"), opt("Ultra", "ultra")],
                "medium",
            ),
            toggle("italic", "Italic", false),
        ],
    ),
    tool(
        "italic-text",
        &[select(
            "style",
            "Italic Style",
            &[opt("Sans", "sans"), opt("Serif", "serif")],
            "sans",
        )],
    ),
    tool(
        "underline-text",
        &[toggle("double", "Double Underline", false)],
    ),
    tool(
        "strikethrough-text",
        &[
            select(
                "position",
                "Line Position",
                &[opt("Center", "center"), opt("High", "high"), opt("Low", "low")],
                "center",
            ),
            toggle("double", "Double Strike", false),
        ],
    ),
    tool("slash-text", &[]),
    tool(
        "small-text",
        &[select("mode", "Size Mode", SMALL_MODES, "tiny")],
    ),
    tool(
        "tiny-text",
        &[select("mode", "Size Mode", SMALL_MODES, "super")],
    ),
    tool("big-text", &[SPACING]),
    tool("superscript", &[]),
    tool("subscript", &[]),
    tool("small-caps", &[]),
    tool(
        "upside-down-text",
        &[toggle("mirror", "Keep Order", false)],
    ),
    tool("mirror-text", &[]),
    tool("reverse-text", &[]),
    tool("space-remover", &[]),
    tool("remove-line-breaks", &[]),
    tool("text-cleaner", &[]),
    tool("sentence-case", &[]),
    tool("title-case", &[]),
    tool("uppercase", &[]),
    tool("lowercase", &[]),
    tool("alternating-case", &[]),
    tool("character-counter", &[]),
    tool(
        "invisible-character",
        &[
            select(
                "mode",
                "Mode",
                &[opt("Invisible Only", "only"), opt("Between Letters", "between")],
                "only",
            ),
            slider("count", "Count", 1.0, 10.0, 1.0),
        ],
    ),
    // Symbols
    tool("text-symbols", &[]),
    tool("aesthetic-symbols", &[]),
    tool("special-characters", &[]),
    tool("text-emoticons", &[]),
    tool("lenny-face", &[]),
    // Translators
    tool(
        "morse-code",
        &[select(
            "separator",
            "Word Separator",
            &[opt("Slash", "slash"), opt("Pipe", "pipe"), opt("Space", "space")],
            "slash",
        )],
    ),
    tool(
        "braille",
        &[toggle("showIndicator", "Number Indicator", true)],
    ),
    tool(
        "binary",
        &[
            select(
                "bits",
                "Bit Width",
                &[opt("8-bit", "8"), opt("16-bit", "16")],
                "8",
            ),
            toggle("prefix", "0b Prefix", false),
        ],
    ),
    tool("hex-code", &[]),
    tool("base64", &[]),
    tool("wingdings", &[]),
    tool("runic", &[]),
    tool("old-english", &[]),
    tool("sign-language", &[]),
    tool(
        "ascii-art",
        &[select(
            "font",
            "Font",
            &[opt("Standard", "std"), opt("3D Blocks", "3d"), opt("Cyber", "cyber")],
            "std",
        )],
    ),
];

fn index() -> &'static HashMap<&'static str, &'static ToolConfig> {
    static INDEX: OnceLock<HashMap<&'static str, &'static ToolConfig>> = OnceLock::new();
    INDEX.get_or_init(|| REGISTRY.iter().map(|config| (config.slug, config)).collect())
}

/// Every registered tool config, in registry order.
pub fn configs() -> &'static [ToolConfig] {
    REGISTRY
}

/// Control schema for `slug`, matched case-insensitively.
pub fn get_config(slug: &str) -> Option<&'static ToolConfig> {
    index().get(slug.to_lowercase().as_str()).copied()
}

/// Registry defaults for `slug` overlaid with `supplied`.
///
/// Unregistered tools get `supplied` back unchanged.
pub fn resolve_options(slug: &str, supplied: &Settings) -> Settings {
    let Some(config) = get_config(slug) else {
        return supplied.clone();
    };

    let mut resolved = config.defaults();
    for (key, value) in supplied {
        resolved.insert(key.clone(), value.clone());
    }
    resolved
}
