use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use minipas::analysis::type_check;

#[derive(Parser)]
#[command(name = "minipas")]
#[command(about = "Parse and check Pascal-like source files")]
#[command(version)]
struct Cli {
    /// Source files to parse
    #[arg(value_name = "FILES", required = true)]
    files: Vec<PathBuf>,

    /// Check declarations after parsing
    #[arg(short, long)]
    check: bool,

    /// Print each parsed program as normalized source
    #[arg(short, long)]
    print: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Ok(false) when the file has syntax errors or, with `--check`, declaration errors
fn process(path: &Path, cli: &Cli) -> Result<bool> {
    let source =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    let unit = match minipas::parse(&source) {
        Ok(unit) => unit,
        Err(err) => {
            eprintln!("{}:{}: {}", path.display(), err.line, err.message);
            return Ok(false);
        }
    };

    let mut ok = true;
    if cli.check {
        let analysis = type_check(&unit);
        for diagnostic in &analysis.diagnostics {
            eprintln!("{}:{}", path.display(), diagnostic);
        }
        ok = !analysis.has_errors();
    }

    if cli.print {
        print!("{unit}");
    } else if ok {
        println!("ok: {}", path.display());
    }

    Ok(ok)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut all_ok = true;
    for path in &cli.files {
        match process(path, &cli) {
            Ok(ok) => all_ok &= ok,
            Err(err) => {
                eprintln!("error: {err:#}");
                all_ok = false;
            }
        }
    }

    if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
