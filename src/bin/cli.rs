use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shareguard::config::Config;
use shareguard::report::OutputFormat;
use shareguard::risk::RiskLevel;
use shareguard::AuditOptions;

#[derive(Parser)]
#[command(
    name = "shareguard",
    about = "SMB share permission auditor",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit a host snapshot produced by the platform collector
    Audit {
        /// Path to the snapshot JSON file
        snapshot: PathBuf,

        /// Config file path
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Output format (console, json, csv)
        #[arg(long, short = 'f', default_value = "console")]
        format: String,

        /// Overall risk tier at which to fail (low, mid, high, critical)
        #[arg(long)]
        fail_on: Option<String>,

        /// Write output to file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Generate a starter .shareguard.toml config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Audit {
            snapshot,
            config,
            format,
            fail_on,
            output,
        } => cmd_audit(snapshot, config, format, fail_on, output),
        Commands::Init { force } => cmd_init(force),
    };

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn cmd_audit(
    snapshot: PathBuf,
    config: Option<PathBuf>,
    format_str: String,
    fail_on_str: Option<String>,
    output_path: Option<PathBuf>,
) -> Result<i32, shareguard::error::GuardError> {
    let format = OutputFormat::from_str_lenient(&format_str).unwrap_or_else(|| {
        eprintln!("Warning: unknown format '{}', using console", format_str);
        OutputFormat::Console
    });

    // Lenient tier parsing never fails, so warn on clearly bogus input.
    let fail_on = fail_on_str.map(|s| {
        let tier = RiskLevel::from_str_lenient(&s);
        if tier == RiskLevel::Low && !s.trim().eq_ignore_ascii_case("low") {
            eprintln!("Warning: unknown risk tier '{}', using low", s);
        }
        tier
    });

    let options = AuditOptions {
        config_path: config,
        format,
        fail_on_override: fail_on,
    };

    let report = shareguard::audit_file(&snapshot, &options)?;
    let rendered = shareguard::render_report(&report, format)?;

    match output_path {
        Some(out) => std::fs::write(&out, &rendered)?,
        None => print!("{}", rendered),
    }

    // Exit code: 0 = pass, 1 = overall risk at or above threshold
    Ok(if report.verdict.pass { 0 } else { 1 })
}

fn cmd_init(force: bool) -> Result<i32, shareguard::error::GuardError> {
    let path = PathBuf::from(".shareguard.toml");

    if path.exists() && !force {
        eprintln!(".shareguard.toml already exists. Use --force to overwrite.");
        return Ok(1);
    }

    std::fs::write(&path, Config::starter_toml())?;
    println!("Created .shareguard.toml");

    Ok(0)
}
