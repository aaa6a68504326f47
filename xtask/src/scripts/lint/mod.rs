use crate::cli::LintArgs;
use color_eyre::eyre::Result;
use duct::cmd;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Pure pipeline description
// ---------------------------------------------------------------------------

/// One step of the lint pipeline, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Fmt,
    Clippy,
    Test,
    Machete,
}

const PIPELINE: [Step; 4] = [Step::Fmt, Step::Clippy, Step::Test, Step::Machete];

impl Step {
    /// Cargo arguments for this step. Fix mode rewrites fmt and clippy.
    fn cargo_args(self, fix: bool) -> Vec<&'static str> {
        match (self, fix) {
            (Step::Fmt, false) => vec!["fmt", "--all", "--check"],
            (Step::Fmt, true) => vec!["fmt", "--all"],
            (Step::Clippy, false) => {
                vec!["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"]
            }
            (Step::Clippy, true) => vec![
                "clippy",
                "--workspace",
                "--all-targets",
                "--fix",
                "--allow-dirty",
                "--",
                "-D",
                "warnings",
            ],
            (Step::Test, _) => vec!["test", "--workspace", "--all-targets"],
            (Step::Machete, _) => vec!["machete"],
        }
    }

    /// Missing optional tools are skipped rather than failed.
    fn optional(self) -> bool {
        matches!(self, Step::Machete)
    }

    fn disabled(self, args: &LintArgs) -> bool {
        match self {
            Step::Fmt => args.no_fmt,
            Step::Clippy => args.no_clippy,
            Step::Test => args.no_test,
            Step::Machete => args.no_machete,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Passed(String),
    Failed(String),
    Missing,
}

fn command_line(args: &[&str]) -> String {
    format!("cargo {}", args.join(" "))
}

/// Whether the output says the subcommand is not installed.
fn reports_missing_tool(output: &str) -> bool {
    let lower = output.to_lowercase();
    ["no such command", "unrecognized subcommand", "not found"]
        .iter()
        .any(|needle| lower.contains(needle))
}

fn classify(success: bool, output: String, optional: bool) -> Outcome {
    match (success, optional) {
        (true, _) => Outcome::Passed(output),
        (false, true) if reports_missing_tool(&output) => Outcome::Missing,
        (false, _) => Outcome::Failed(output),
    }
}

fn log_entry(name: &str, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Missing => format!("=== {name} ===\n[skipped: not installed]\n"),
        Outcome::Passed(output) | Outcome::Failed(output) => {
            format!("=== {name} ===\n{output}\n")
        }
    }
}

// ---------------------------------------------------------------------------
// Process execution
// ---------------------------------------------------------------------------

/// Run every enabled step, stopping at the first failure. Each step's output
/// is appended to `target/xtask-lint.log`.
pub fn run(args: &LintArgs) -> Result<()> {
    let log_path = log_path()?;
    let mut log = fs::File::create(&log_path)?;

    for step in PIPELINE {
        if step.disabled(args) {
            continue;
        }

        let cargo_args = step.cargo_args(args.fix);
        let name = command_line(&cargo_args);
        println!("==> {name}");

        let output = cmd("cargo", &cargo_args)
            .stderr_to_stdout()
            .stdout_capture()
            .unchecked()
            .run()?;
        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        let outcome = classify(output.status.success(), text, step.optional());

        write!(log, "{}", log_entry(&name, &outcome))?;

        match outcome {
            Outcome::Missing => println!("    skipped, not installed"),
            Outcome::Passed(text) => {
                if args.verbose {
                    print!("{text}");
                }
            }
            Outcome::Failed(text) => {
                print!("{text}");
                println!("\nlint failed at: {name}");
                println!("log: {}", log_path.display());
                drop(log);
                std::process::exit(1);
            }
        }
    }

    println!("log: {}", log_path.display());
    Ok(())
}

fn log_path() -> Result<PathBuf> {
    let target = std::env::current_dir()?.join("target");
    fs::create_dir_all(&target)?;
    Ok(target.join("xtask-lint.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cargo_args_check_mode() {
        assert_eq!(Step::Fmt.cargo_args(false), vec!["fmt", "--all", "--check"]);
        assert!(Step::Clippy.cargo_args(false).ends_with(&["-D", "warnings"]));
        assert!(!Step::Clippy.cargo_args(false).contains(&"--fix"));
    }

    #[test]
    fn test_cargo_args_fix_mode() {
        assert!(!Step::Fmt.cargo_args(true).contains(&"--check"));
        let clippy = Step::Clippy.cargo_args(true);
        assert!(clippy.contains(&"--fix"));
        assert!(clippy.contains(&"--allow-dirty"));
        assert_eq!(Step::Test.cargo_args(true), Step::Test.cargo_args(false));
    }

    #[test]
    fn test_disabled_follows_flags() {
        let mut args = LintArgs::default();
        assert!(PIPELINE.iter().all(|step| !step.disabled(&args)));

        args.no_clippy = true;
        args.no_machete = true;
        assert!(Step::Clippy.disabled(&args));
        assert!(Step::Machete.disabled(&args));
        assert!(!Step::Fmt.disabled(&args));
        assert!(!Step::Test.disabled(&args));
    }

    #[test]
    fn test_only_machete_is_optional() {
        let optional: Vec<Step> = PIPELINE.into_iter().filter(|s| s.optional()).collect();
        assert_eq!(optional, vec![Step::Machete]);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(true, "ok".into(), false), Outcome::Passed("ok".into()));
        assert_eq!(
            classify(false, "error[E0308]: mismatched types".into(), true),
            Outcome::Failed("error[E0308]: mismatched types".into())
        );
        assert_eq!(
            classify(false, "error: no such command: `machete`".into(), true),
            Outcome::Missing
        );
        assert_eq!(
            classify(false, "error: no such command: `machete`".into(), false),
            Outcome::Failed("error: no such command: `machete`".into())
        );
    }

    #[test]
    fn test_log_entry() {
        let passed = log_entry("cargo fmt --all --check", &Outcome::Passed("".into()));
        assert!(passed.starts_with("=== cargo fmt --all --check ===\n"));
        assert!(log_entry("cargo machete", &Outcome::Missing).contains("[skipped"));
    }

    #[test]
    fn test_command_line() {
        assert_eq!(command_line(&["test", "--workspace"]), "cargo test --workspace");
    }
}
