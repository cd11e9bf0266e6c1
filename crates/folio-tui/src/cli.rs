#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{Args, Parser, Subcommand};
use folio_core::{ContactSession, ContestRecord, Outcome, Page, SiteConfig};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::app::PortfolioApp;
use crate::error::Result;
use crate::program::Program;
use crate::terminal_session::{SessionOptions, TerminalSession};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "FOLIO_LOG";

#[derive(Debug, Parser)]
#[command(
    name = "folio",
    about = "Portfolio Contact terminal and Contest board in your terminal",
    version
)]
pub struct Cli {
    /// Site config file (.toml or .json). Built-in content when omitted.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append logs to this file.
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Machine-readable output and errors.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive pages (default).
    Tui(TuiArgs),

    /// Run command lines through a fresh Contact terminal and print the transcript.
    Exec(ExecArgs),

    /// Print the past contests.
    Contests,

    /// Print the effective site config as TOML.
    #[command(name = "print-config")]
    PrintConfig,
}

#[derive(Debug, Clone, Args)]
pub struct TuiArgs {
    /// Page shown first.
    #[arg(long, default_value = "contact")]
    pub page: Page,
}

impl Default for TuiArgs {
    fn default() -> Self {
        Self {
            page: Page::Contact,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ExecArgs {
    /// Lines typed at the prompt, in order.
    #[arg(required = true)]
    pub lines: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ExecReport<'a> {
    prompt: &'a str,
    outcomes: Vec<&'static str>,
    transcript: &'a [String],
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let interactive = matches!(cli.command, None | Some(Commands::Tui(_)));
    init_logging(cli.log_file.as_deref(), interactive)?;

    let config = load_config(cli.config.as_deref())?;
    match cli.command.unwrap_or(Commands::Tui(TuiArgs::default())) {
        Commands::Tui(args) => run_tui(config, args.page),
        command => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            run_batch(command, &config, cli.json, &mut out)
        }
    }
}

/// Execute a non-interactive subcommand, writing its output to `out`.
pub fn run_batch<W: Write>(
    command: Commands,
    config: &SiteConfig,
    json: bool,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::Tui(_) => Err(crate::AppError::invalid(
            "the interactive UI needs a terminal",
        )),
        Commands::Exec(args) => exec_lines(config, &args.lines, json, out),
        Commands::Contests => print_contests(&config.contest.records, json, out),
        Commands::PrintConfig => {
            out.write_all(config.to_toml_string()?.as_bytes())?;
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => Ok(SiteConfig::load_path(path)?),
        None => Ok(SiteConfig::default()),
    }
}

fn run_tui(config: SiteConfig, page: Page) -> Result<()> {
    let session = TerminalSession::new(SessionOptions::default())?;
    let (width, height) = session.size()?;
    let app = PortfolioApp::new(config, page);
    let mut program = Program::new(app, io::stdout(), width, height);
    program.run(&session)?;
    Ok(())
}

fn exec_lines<W: Write>(config: &SiteConfig, lines: &[String], json: bool, out: &mut W) -> Result<()> {
    let mut session = ContactSession::new(config);
    let outcomes: Vec<Outcome> = lines.iter().map(|line| session.submit(line)).collect();

    if json {
        let report = ExecReport {
            prompt: session.prompt(),
            outcomes: outcomes.iter().map(|o| o.as_str()).collect(),
            transcript: session.transcript().lines(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        for line in session.transcript() {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

fn print_contests<W: Write>(records: &[ContestRecord], json: bool, out: &mut W) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, records)?;
        writeln!(out)?;
        return Ok(());
    }
    for (idx, record) in records.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        for line in record.card_lines() {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// Install the global subscriber.
///
/// The TUI owns stdout and stderr, so it only logs when a file is given.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    // A second subscriber (tests, embedding) is not an error.
    match log_file {
        Some(path) => {
            let file = File::options().create(true).append(true).open(path)?;
            let _ = builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        None if !interactive => {
            let _ = builder.with_writer(io::stderr).try_init();
        }
        None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn batch(command: Commands, json: bool) -> String {
        let mut out = Vec::new();
        run_batch(command, &SiteConfig::default(), json, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn exec_prints_transcript() {
        let output = batch(
            Commands::Exec(ExecArgs {
                lines: vec!["whoami".into(), "ls".into()],
            }),
            false,
        );
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            [
                "Welcome to Naman's terminal. Type \"help\" for available commands.",
                "naman@macbook-pro ~ % whoami",
                "Naman Sharma - Software Developer and Coding Enthusiast",
                "naman@macbook-pro ~ % ls",
                "command not found: ls",
            ]
        );
    }

    #[test]
    fn exec_json_reports_outcomes() {
        let output = batch(
            Commands::Exec(ExecArgs {
                lines: vec!["clear".into(), "help".into(), "nope".into()],
            }),
            true,
        );
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["prompt"], "naman@macbook-pro ~ %");
        assert_eq!(
            value["outcomes"],
            serde_json::json!(["cleared", "replied", "not_found"])
        );
        assert_eq!(value["transcript"][0], "naman@macbook-pro ~ % help");
    }

    #[test]
    fn contests_print_cards() {
        let output = batch(Commands::Contests, false);
        assert!(output.starts_with("Contest 1\nDate: 2023-01-15\nWinner: Alice\n\n"));
        assert!(output.trim_end().ends_with("Winner: Charlie"));
    }

    #[test]
    fn contests_json_lists_records() {
        let output = batch(Commands::Contests, true);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(3));
        assert_eq!(value[1]["winner"], "Bob");
    }

    #[test]
    fn print_config_round_trips() {
        let output = batch(Commands::PrintConfig, false);
        let parsed = SiteConfig::from_toml_str(&output).unwrap();
        assert_eq!(parsed, SiteConfig::default());
    }

    #[test]
    fn tui_is_rejected_in_batch_mode() {
        let mut out = Vec::new();
        let error = run_batch(
            Commands::Tui(TuiArgs::default()),
            &SiteConfig::default(),
            false,
            &mut out,
        )
        .unwrap_err();
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn cli_parses_globals_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "exec", "help", "--json", "--config", "site.toml"])
            .unwrap();
        assert!(cli.json);
        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
        assert!(matches!(cli.command, Some(Commands::Exec(ref args)) if args.lines == ["help"]));
    }

    #[test]
    fn cli_page_flag_is_case_insensitive() {
        let cli = Cli::try_parse_from(["folio", "tui", "--page", "Contest"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Tui(TuiArgs { page: Page::Contest }))));
        assert!(Cli::try_parse_from(["folio", "tui", "--page", "blog"]).is_err());
    }

    #[test]
    fn no_subcommand_defaults_to_tui() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn config_file_drives_exec_and_contests() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(
            &path,
            r#"
owner = "Ada"
tagline = "Analyst"
prompt = "ada@engine ~ %"
welcome = ""
not_found_prefix = "zsh"

[contest]
records = [{ name = "Spring Cup", date = "2024-04-01", winner = "Grace" }]
"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        let mut out = Vec::new();
        let lines = vec!["WHOAMI".into(), "ls".into()];
        run_batch(Commands::Exec(ExecArgs { lines }), &config, false, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ada@engine ~ % WHOAMI\nAda - Analyst\nada@engine ~ % ls\nzsh: command not found: ls\n"
        );

        let mut out = Vec::new();
        run_batch(Commands::Contests, &config, false, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Spring Cup\nDate: 2024-04-01\nWinner: Grace\n"
        );
    }

    #[test]
    fn invalid_config_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, r#"{ "prompt": "  " }"#).unwrap();
        let error = load_config(Some(&path)).unwrap_err();
        assert_eq!(error.exit_code(), 2);
        assert!(error.to_string().contains("prompt must not be empty"), "{error}");
    }

    #[test]
    fn missing_config_file_is_a_config_error() {
        let error = load_config(Some(Path::new("/definitely/missing/site.toml"))).unwrap_err();
        assert_eq!(error.exit_code(), 2);
        assert!(error.to_string().contains("site.toml"));
    }
}
