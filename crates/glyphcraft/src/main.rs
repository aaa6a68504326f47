use crate::prelude::*;
use clap::Parser;

mod config;
mod decode;
mod error;
mod input;
mod prelude;
mod tools;
mod transform;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Stylize text with Unicode fonts, combining marks and encoders"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "GLYPHCRAFT_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Apply a tool to some text
    Transform(crate::transform::ToolOptions),

    /// List the available tools
    Tools(crate::tools::ListOptions),

    /// Show the controls a tool understands
    Config(crate::config::ShowOptions),

    /// Decode binary, hex, Base64 or Morse back into text
    Decode(crate::decode::DecodeOptions),
}

fn main() -> Result<()> {
    let app = App::parse();

    init_logger(app.global.verbose);
    color_eyre::install()?;

    match app.command {
        SubCommands::Transform(options) => crate::transform::run(options, app.global),
        SubCommands::Tools(options) => crate::tools::run(options, app.global),
        SubCommands::Config(options) => crate::config::run(options, app.global),
        SubCommands::Decode(options) => crate::decode::run(options, app.global),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}

/// `RUST_LOG` wins; otherwise warnings, or everything down to debug with `--verbose`.
fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
