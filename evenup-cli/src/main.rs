#![warn(clippy::uninlined_format_args)]

use std::{borrow::Cow, env, fs, process};

use evenup_core::{CsvSheetParser, SettlementProcessor};
use tracing_subscriber::EnvFilter;

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("EVENUP_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let path = ledger_path(env::args().skip(1))?;

    let content =
        fs::read_to_string(&path).map_err(|err| format!("Failed to read '{path}': {err}"))?;

    let parser = CsvSheetParser;
    let processor = SettlementProcessor::new(&parser);
    let report = processor.process(&content).map_err(|err| err.to_string())?;

    print!("{}", report.render());
    Ok(())
}

fn ledger_path(mut args: impl Iterator<Item = String>) -> CliResult<String> {
    let Some(path) = args.next() else {
        return Err("Usage: evenup <ledger.csv>".into());
    };

    if args.next().is_some() {
        return Err("Expected exactly one ledger file".into());
    }

    if !path.ends_with(".csv") {
        return Err(format!("'{path}' is not a .csv file").into());
    }

    Ok(path)
}
