//! Option values passed to tools and their coercions.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::zalgo::MAX_MARK_COUNT;

/// A single control value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl SettingValue {
    /// Parse a raw command-line value: booleans, then numbers, then text.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "true" => SettingValue::Flag(true),
            "false" => SettingValue::Flag(false),
            _ => match raw.parse::<f64>() {
                Ok(number) if number.is_finite() => SettingValue::Number(number),
                _ => SettingValue::Text(raw.to_string()),
            },
        }
    }

    /// Non-negative whole count. Fractions round up; negative, NaN and
    /// unparsable values count as zero.
    pub fn as_count(&self) -> usize {
        let count = match self {
            SettingValue::Flag(flag) => usize::from(*flag),
            SettingValue::Number(number) => number_to_count(*number),
            SettingValue::Text(text) => leading_integer(text).map_or(0, |n| n as usize),
        };
        count.min(MAX_MARK_COUNT)
    }

    pub fn as_number(&self) -> f64 {
        match self {
            SettingValue::Flag(flag) => f64::from(u8::from(*flag)),
            SettingValue::Number(number) if number.is_finite() => *number,
            SettingValue::Number(_) => 0.0,
            SettingValue::Text(text) => text.trim().parse::<f64>().unwrap_or(0.0),
        }
    }

    pub fn as_flag(&self) -> bool {
        match self {
            SettingValue::Flag(flag) => *flag,
            SettingValue::Number(number) => *number != 0.0 && !number.is_nan(),
            SettingValue::Text(text) => !matches!(text.as_str(), "" | "false" | "0"),
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            SettingValue::Flag(flag) => flag.to_string(),
            SettingValue::Number(number) => number.to_string(),
            SettingValue::Text(text) => text.clone(),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Flag(value)
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        SettingValue::Number(value)
    }
}

impl From<i32> for SettingValue {
    fn from(value: i32) -> Self {
        SettingValue::Number(f64::from(value))
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Text(value)
    }
}

fn number_to_count(number: f64) -> usize {
    if !number.is_finite() || number <= 0.0 {
        return 0;
    }
    let ceiled = number.ceil();
    if ceiled >= MAX_MARK_COUNT as f64 {
        MAX_MARK_COUNT
    } else {
        ceiled as usize
    }
}

/// Leading signed integer of `text`, ignoring surrounding whitespace.
/// Negative results are reported as `None`.
fn leading_integer(text: &str) -> Option<u64> {
    let trimmed = text.trim_start();
    if trimmed.starts_with('-') {
        return None;
    }
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Resolved values keyed by control id.
pub type Settings = BTreeMap<String, SettingValue>;

/// Everything a caller may pass alongside the text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformOptions {
    pub intensity: Option<f64>,
    pub spacing: Option<f64>,
    pub uppercase: bool,
    pub style: Option<String>,
    pub decoration: Option<String>,
    /// Per-tool values. `None` entries are ignored during resolution.
    pub custom_settings: BTreeMap<String, Option<SettingValue>>,
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_setting(mut self, key: &str, value: impl Into<SettingValue>) -> Self {
        self.custom_settings.insert(key.to_string(), Some(value.into()));
        self
    }

    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    /// Top-level values that may stand in for a same-named control.
    pub fn aliases(&self) -> Vec<(&'static str, SettingValue)> {
        let mut aliases = Vec::new();
        if let Some(intensity) = self.intensity {
            aliases.push(("intensity", SettingValue::Number(intensity)));
        }
        if let Some(spacing) = self.spacing {
            aliases.push(("spacing", SettingValue::Number(spacing)));
        }
        if let Some(style) = &self.style {
            aliases.push(("style", SettingValue::Text(style.clone())));
        }
        if let Some(decoration) = &self.decoration {
            aliases.push(("decoration", SettingValue::Text(decoration.clone())));
        }
        aliases
    }

    /// Custom settings with `None` entries dropped.
    pub fn defined_settings(&self) -> impl Iterator<Item = (&String, &SettingValue)> {
        self.custom_settings
            .iter()
            .filter_map(|(key, value)| value.as_ref().map(|value| (key, value)))
    }
}

/// Effective settings handed to a tool, with typed accessors.
///
/// Reading a key that was never resolved yields a zero value and is recorded,
/// so callers can detect tools reading controls they never declared.
#[derive(Debug, Default)]
pub struct ResolvedSettings {
    values: Settings,
    misses: RefCell<BTreeSet<String>>,
}

impl ResolvedSettings {
    pub fn new(values: Settings) -> Self {
        Self {
            values,
            misses: RefCell::new(BTreeSet::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        let value = self.values.get(key);
        if value.is_none() {
            warn!("setting `{key}` was read but never resolved");
            self.misses.borrow_mut().insert(key.to_string());
        }
        value
    }

    pub fn count(&self, key: &str) -> usize {
        self.get(key).map_or(0, SettingValue::as_count)
    }

    pub fn number(&self, key: &str) -> f64 {
        self.get(key).map_or(0.0, SettingValue::as_number)
    }

    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(SettingValue::as_flag)
    }

    pub fn text(&self, key: &str) -> String {
        self.get(key).map(SettingValue::as_text).unwrap_or_default()
    }

    /// Keys read without a resolved value.
    pub fn misses(&self) -> Vec<String> {
        self.misses.borrow().iter().cloned().collect()
    }

    pub fn values(&self) -> &Settings {
        &self.values
    }
}
