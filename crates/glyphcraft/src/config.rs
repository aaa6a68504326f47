use colored::Colorize;
use glyphcraft_core::config::{get_config, ControlKind, DefaultValue, ToolConfig, ToolControl};

use crate::prelude::{println, *};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ShowOptions {
    /// Tool slug, e.g. "zalgo-text"
    #[arg(value_name = "TOOL")]
    pub tool: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: ShowOptions, global: crate::Global) -> Result<()> {
    let config = get_config(&options.tool).ok_or_else(|| Error::UnknownTool(options.tool.clone()))?;

    if global.verbose {
        println!("{} declares {} controls", config.slug, config.controls.len());
        println!();
    }

    if options.json {
        println!("{}", format_config_json(config)?);
    } else if config.controls.is_empty() {
        println!("{} has no settings.", config.slug.bright_white());
    } else {
        let mut table = new_table();
        table.add_row(prettytable::row![
            "Id".bold().cyan(),
            "Label".bold().cyan(),
            "Type".bold().cyan(),
            "Default".bold().cyan(),
            "Accepts".bold().cyan()
        ]);
        for control in config.controls {
            table.add_row(prettytable::row![
                control.id.bright_white(),
                control.label,
                kind_name(&control.kind).bright_yellow(),
                format_default(control.default_value).green(),
                format_accepts(control).bright_black()
            ]);
        }
        table.printstd();
    }

    Ok(())
}

fn format_config_json(config: &ToolConfig) -> Result<String> {
    serde_json::to_string_pretty(config).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn kind_name(kind: &ControlKind) -> &'static str {
    match kind {
        ControlKind::Slider { .. } => "slider",
        ControlKind::Toggle => "toggle",
        ControlKind::Select { .. } => "select",
        ControlKind::Button => "button",
    }
}

fn format_default(value: DefaultValue) -> String {
    match value {
        DefaultValue::Flag(flag) => flag.to_string(),
        DefaultValue::Number(number) => number.to_string(),
        DefaultValue::Text(text) => text.to_string(),
    }
}

/// What `--set id=...` takes for this control.
fn format_accepts(control: &ToolControl) -> String {
    match control.kind {
        ControlKind::Slider { min, max, step } if step == 1.0 => f!("{min}..={max}"),
        ControlKind::Slider { min, max, step } => f!("{min}..={max} step {step}"),
        ControlKind::Toggle | ControlKind::Button => "true | false".to_string(),
        ControlKind::Select { options } => options
            .iter()
            .map(|option| option.value)
            .collect::<Vec<_>>()
            .join(" | "),
    }
}
