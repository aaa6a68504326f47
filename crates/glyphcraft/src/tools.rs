use colored::Colorize;
use glyphcraft_core::{tools, Category, Tool};

use crate::prelude::{println, *};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Only list tools in this category, e.g. "dark-horror" or "translators"
    #[arg(short, long, env = "GLYPHCRAFT_CATEGORY")]
    pub category: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    let listed = list_tools_data(options.category.as_deref())?;

    if global.verbose {
        println!("Listing {} of {} tools", listed.len(), tools().count());
        println!();
    }

    if options.json {
        println!("{}", format_tools_json(&listed)?);
    } else if listed.is_empty() {
        println!("No tools found.");
    } else {
        let mut table = new_table();
        table.add_row(prettytable::row![
            "Slug".bold().cyan(),
            "Name".bold().cyan(),
            "Category".bold().cyan()
        ]);
        for tool in &listed {
            table.add_row(prettytable::row![
                tool.slug.bright_white(),
                tool.name,
                tool.category.slug().bright_black()
            ]);
        }
        table.printstd();
    }

    Ok(())
}

/// Registered tools, optionally narrowed to one category slug.
pub fn list_tools_data(category: Option<&str>) -> Result<Vec<&'static Tool>> {
    let Some(slug) = category else {
        return Ok(tools().collect());
    };

    let category = Category::from_slug(&slug.to_lowercase()).ok_or_else(|| {
        let valid = Category::ALL
            .iter()
            .map(|category| category.slug())
            .collect::<Vec<_>>()
            .join(", ");
        Error::UnknownCategory(slug.to_string(), valid)
    })?;

    Ok(tools().filter(|tool| tool.category == category).collect())
}

fn format_tools_json(listed: &[&Tool]) -> Result<String> {
    serde_json::to_string_pretty(listed).map_err(|e| eyre!("JSON serialization failed: {}", e))
}
