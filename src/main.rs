//! Numbers - a fixed 26x50 sheet driven from the command line.

use anyhow::Context;
use numbers_core::{Sheet, io};
use numbers_engine::engine::{ERROR_MARKER, FORMULA_PREFIX, evaluate};
use std::env;
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!("Usage: numbers [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FILE]                    Edit log to apply ('ADDRESS: INPUT' per line; '-' or omitted reads stdin)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --command <FORMULA>   Evaluate one formula against an empty sheet and print the result");
    eprintln!("  --json                    Print the sheet as JSON instead of Markdown");
    eprintln!("  -h, --help                Print help");
    eprintln!();
    eprintln!("Set RUST_LOG=debug to trace evaluation failures on stderr.");
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();

    let mut file_path: Option<PathBuf> = None;
    let mut command: Option<String> = None;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-c" | "--command" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --command requires a formula");
                    std::process::exit(1);
                }
                command = Some(args[i].to_string());
            }
            "--json" => json = true,
            "-" => file_path = None,
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => {
                if file_path.is_none() {
                    file_path = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    if let Some(formula) = command {
        std::process::exit(run_command(&formula));
    }

    if let Err(e) = run_edits(file_path, json) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Evaluate one formula against an empty sheet. Returns the exit code.
fn run_command(formula: &str) -> i32 {
    let raw = if formula.starts_with(FORMULA_PREFIX) {
        formula.to_string()
    } else {
        format!("{}{}", FORMULA_PREFIX, formula)
    };

    let sheet = Sheet::new();
    let value = evaluate(&raw, &sheet.grid);
    println!("{}", value);
    if value == ERROR_MARKER { 1 } else { 0 }
}

/// Replay an edit log into a fresh sheet and print the result.
fn run_edits(file_path: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let edits = match &file_path {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            io::read_edits(file).with_context(|| format!("cannot read {}", path.display()))?
        }
        None => io::read_edits(std::io::stdin().lock()).context("cannot read stdin")?,
    };

    tracing::debug!(edits = edits.len(), "applying edit log");
    let mut sheet = Sheet::new();
    sheet.apply_edits(edits)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        io::write_json(&mut out, &sheet)?;
    } else {
        io::write_markdown(&mut out, &sheet)?;
    }
    Ok(())
}
