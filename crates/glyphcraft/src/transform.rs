use glyphcraft_core::dispatch::effective_settings;
use glyphcraft_core::settings::Settings;
use glyphcraft_core::{find_tool, transform, transform_with_rng, SettingValue, TransformOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::input::read_text;
use crate::prelude::{eprintln, println, *};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ToolOptions {
    /// Tool slug, e.g. "cursed-text" or "morse-code"
    #[arg(value_name = "TOOL")]
    pub tool: String,

    /// Text to transform. Read from stdin when omitted or "-"
    pub text: Option<String>,

    /// Tool setting as KEY=VALUE; repeat for several
    #[arg(short, long = "set", value_name = "KEY=VALUE", value_parser = parse_setting)]
    pub set: Vec<(String, SettingValue)>,

    /// Uppercase the text before the tool runs
    #[arg(long)]
    pub uppercase: bool,

    /// Shorthand for the tool's "intensity" slider
    #[arg(long)]
    pub intensity: Option<f64>,

    /// Shorthand for the tool's "spacing" slider
    #[arg(long)]
    pub spacing: Option<f64>,

    /// Shorthand for the tool's "style" select
    #[arg(long)]
    pub style: Option<String>,

    /// Shorthand for the tool's "decoration" select
    #[arg(long)]
    pub decoration: Option<String>,

    /// Seed for reproducible output from randomized tools
    #[arg(long, env = "GLYPHCRAFT_SEED")]
    pub seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ToolOptions {
    fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            intensity: self.intensity,
            spacing: self.spacing,
            uppercase: self.uppercase,
            style: self.style.clone(),
            decoration: self.decoration.clone(),
            custom_settings: self
                .set
                .iter()
                .map(|(key, value)| (key.clone(), Some(value.clone())))
                .collect(),
        }
    }
}

/// Parse `KEY=VALUE`. The value is read as JSON first so `--set 'bits="8"'`
/// forces text; bare words fall back to bool, number, then text.
fn parse_setting(raw: &str) -> Result<(String, SettingValue), Error> {
    let (key, value) = raw
        .split_once('=')
        .filter(|(key, _)| !key.trim().is_empty())
        .ok_or_else(|| Error::InvalidSetting(raw.to_string()))?;

    let value = serde_json::from_str::<SettingValue>(value)
        .unwrap_or_else(|_| SettingValue::parse(value));

    Ok((key.trim().to_string(), value))
}

#[derive(Debug, Serialize)]
pub struct TransformOutput {
    pub tool: String,
    pub known_tool: bool,
    pub input: String,
    pub output: String,
    pub settings: Settings,
}

pub fn run(options: ToolOptions, global: crate::Global) -> Result<()> {
    let text = read_text(options.text.clone())?;
    let output = transform_data(&options, text)?;

    if global.verbose {
        eprintln!("Tool: {} (registered: {})", output.tool, output.known_tool);
        eprintln!("Settings: {}", format_settings(&output.settings));
    }

    if options.json {
        println!("{}", format_transform_json(&output)?);
    } else {
        println!("{}", output.output);
    }

    Ok(())
}

/// Run the tool and collect what was used to produce the output.
pub fn transform_data(options: &ToolOptions, text: String) -> Result<TransformOutput> {
    let transform_options = options.transform_options();
    let known_tool = find_tool(&options.tool).is_some();
    if !known_tool {
        log::warn!("unknown tool `{}`, the text is returned unchanged", options.tool);
    }

    let output = match options.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            transform_with_rng(&text, &options.tool, &transform_options, &mut rng)
        }
        None => transform(&text, &options.tool, &transform_options),
    };

    let settings = effective_settings(&options.tool, &transform_options)
        .values()
        .clone();

    Ok(TransformOutput {
        tool: options.tool.to_lowercase(),
        known_tool,
        input: text,
        output,
        settings,
    })
}

fn format_transform_json(output: &TransformOutput) -> Result<String> {
    serde_json::to_string_pretty(output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn format_settings(settings: &Settings) -> String {
    if settings.is_empty() {
        return "(none)".to_string();
    }
    settings
        .iter()
        .map(|(key, value)| f!("{key}={}", value.as_text()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_options(tool: &str) -> ToolOptions {
        ToolOptions {
            tool: tool.to_string(),
            text: None,
            set: Vec::new(),
            uppercase: false,
            intensity: None,
            spacing: None,
            style: None,
            decoration: None,
            seed: Some(42),
            json: false,
        }
    }

    // ============================================================================
    // parse_setting tests
    // ============================================================================

    #[test]
    fn test_parse_setting_bare_values() {
        assert_eq!(
            parse_setting("prefix=true").unwrap(),
            ("prefix".to_string(), SettingValue::Flag(true))
        );
        assert_eq!(
            parse_setting("intensity=7").unwrap(),
            ("intensity".to_string(), SettingValue::Number(7.0))
        );
        assert_eq!(
            parse_setting("separator=pipe").unwrap(),
            ("separator".to_string(), SettingValue::from("pipe"))
        );
    }

    #[test]
    fn test_parse_setting_quoted_json_forces_text() {
        assert_eq!(
            parse_setting(r#"bits="16""#).unwrap(),
            ("bits".to_string(), SettingValue::from("16"))
        );
    }

    #[test]
    fn test_parse_setting_keeps_equals_in_value() {
        assert_eq!(
            parse_setting("decoration=a=b").unwrap(),
            ("decoration".to_string(), SettingValue::from("a=b"))
        );
    }

    #[test]
    fn test_parse_setting_rejects_missing_key() {
        assert!(matches!(
            parse_setting("novalue"),
            Err(Error::InvalidSetting(_))
        ));
        assert!(matches!(parse_setting("=1"), Err(Error::InvalidSetting(_))));
    }

    // ============================================================================
    // transform_data tests
    // ============================================================================

    #[test]
    fn test_transform_data_applies_settings() {
        let mut options = create_test_options("binary");
        options.set = vec![
            ("bits".to_string(), SettingValue::from("16")),
            ("prefix".to_string(), SettingValue::Flag(true)),
        ];

        let output = transform_data(&options, "A".to_string()).unwrap();

        assert!(output.known_tool);
        assert_eq!(output.output, "0b0000000001000001");
        assert_eq!(output.settings.get("bits"), Some(&SettingValue::from("16")));
    }

    #[test]
    fn test_transform_data_unknown_tool_is_identity() {
        let mut options = create_test_options("Not-A-Tool");
        options.uppercase = true;

        let output = transform_data(&options, "hey".to_string()).unwrap();

        assert!(!output.known_tool);
        assert_eq!(output.tool, "not-a-tool");
        assert_eq!(output.output, "HEY");
        assert!(output.settings.is_empty());
    }

    #[test]
    fn test_transform_data_seed_is_reproducible() {
        let options = create_test_options("zalgo-text");
        let first = transform_data(&options, "seeded".to_string()).unwrap();
        let second = transform_data(&options, "seeded".to_string()).unwrap();
        assert_eq!(first.output, second.output);
    }

    #[test]
    fn test_transform_data_intensity_shorthand() {
        let mut options = create_test_options("cursed-text");
        options.intensity = Some(0.0);

        let output = transform_data(&options, "calm".to_string()).unwrap();

        assert_eq!(output.output, "calm");
        assert_eq!(
            output.settings.get("intensity"),
            Some(&SettingValue::Number(0.0))
        );
    }

    // ============================================================================
    // Formatting tests
    // ============================================================================

    #[test]
    fn test_format_transform_json() {
        let options = create_test_options("bold-text");
        let output = transform_data(&options, "AB".to_string()).unwrap();

        let json = format_transform_json(&output).unwrap();

        assert!(json.contains("\"tool\": \"bold-text\""));
        assert!(json.contains("\"output\": \"𝐀𝐁\""));
        assert!(json.contains("\"intensity\": \"medium\""));
    }

    #[test]
    fn test_format_settings() {
        let mut settings = Settings::new();
        assert_eq!(format_settings(&settings), "(none)");

        settings.insert("up".to_string(), SettingValue::Number(3.0));
        settings.insert("chaos".to_string(), SettingValue::Flag(false));
        assert_eq!(format_settings(&settings), "chaos=false, up=3");
    }
}
