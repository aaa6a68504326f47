use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "xtasks")]
#[command(about = "Run project tasks using rust instead of scripts")]
pub struct App {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run formatting, lints, tests and the unused dependency check
    Lint(LintArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct LintArgs {
    /// Print the output of passing steps too
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip `cargo fmt`
    #[arg(long)]
    pub no_fmt: bool,

    /// Skip `cargo clippy`
    #[arg(long)]
    pub no_clippy: bool,

    /// Skip `cargo test`
    #[arg(long)]
    pub no_test: bool,

    /// Skip `cargo machete`
    #[arg(long)]
    pub no_machete: bool,

    /// Apply formatting and clippy suggestions instead of only checking
    #[arg(long)]
    pub fix: bool,
}
