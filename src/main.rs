//! pmd-launch CLI - build a PMD invocation and pass its exit code through

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pmd_launch::{
    launch, PmdToolset, ScanConfig, DEFAULT_REPORT_FILE, DEFAULT_REPORT_FORMAT, DEFAULT_RULESET,
};

#[derive(Parser)]
#[command(name = "pmd-launch")]
#[command(about = "Run a PMD scan over a directory with a fixed ruleset")]
#[command(version)]
struct Cli {
    /// Directory to scan (defaults to the current directory)
    #[arg(value_name = "DIR")]
    target: Option<PathBuf>,

    /// Report format passed to PMD
    #[arg(short, long, default_value = DEFAULT_REPORT_FORMAT)]
    format: String,

    /// File the report is written to
    #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
    report: PathBuf,

    /// Ruleset PMD applies
    #[arg(short = 'R', long, default_value = DEFAULT_RULESET)]
    ruleset: String,

    /// Write the report to stdout instead of a file
    #[arg(long, conflicts_with_all = ["format", "report"])]
    stdout: bool,

    /// PMD executable to use instead of the one found on PATH
    #[arg(long, value_name = "PATH")]
    pmd: Option<PathBuf>,

    /// Print the PMD command without running it
    #[arg(long)]
    dry_run: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    match run(&cli) {
        // PMD signals found violations through its exit code; pass it through.
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let mut config = ScanConfig::default()
        .format(cli.format.as_str())
        .report_file(&cli.report)
        .ruleset(cli.ruleset.as_str());

    if let Some(dir) = &cli.target {
        config = config.target(dir);
    }

    if cli.stdout {
        config = config.report_to_stdout();
    }

    config.validate()?;

    let toolset = match &cli.pmd {
        Some(path) => PmdToolset::with_executable(path),
        None => PmdToolset::detect().context("no usable PMD installation")?,
    };

    if cli.dry_run {
        println!("{}", toolset.command_line(&config));
        return Ok(0);
    }

    log::info!(
        "scanning {} with ruleset {}",
        config.target_dir.display(),
        config.ruleset
    );

    let code = launch(&config, &toolset).context("PMD invocation failed")?;
    Ok(code)
}
