//! blastr - compromised identity blast radius CLI
//!
//! Loads an assessment configuration, ranks the resources an identity can
//! reach, prints the report and optionally saves it.

use anyhow::Context;
use blast_radius::{
    render_audit, render_report, AssessmentConfig, AssessmentOptions, Assessor, DirectoryAdapter,
    OutputFormat, StaticDirectory, DEFAULT_CONFIG_FILE,
};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "blastr")]
#[command(version)]
#[command(
    about = "Calculates the potential impact of a compromised identity by mapping its permissions to accessible resources and their criticality.",
    long_about = None
)]
struct Cli {
    /// The username or identity to assess permissions for
    #[arg(long, short = 'u')]
    user: String,

    /// Path to the configuration file (JSON, or YAML by extension)
    #[arg(long, short = 'c', default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Path to the output file to store results (JSON, or YAML by extension)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Group membership file (identity -> [group]); builtin sample memberships if omitted
    #[arg(long, short = 'd')]
    directory: Option<PathBuf>,

    /// Console output format (table, json, yaml)
    #[arg(long, default_value = "table")]
    format: OutputFormat,

    /// Show how access to every resource was resolved
    #[arg(long)]
    explain: bool,

    /// Assess each resource once even if listed several times
    #[arg(long)]
    dedupe: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Disable colored table output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = AssessmentConfig::load(&cli.config)?;
    info!(path = %cli.config.display(), "Configuration loaded");

    let directory: Box<dyn DirectoryAdapter> = match &cli.directory {
        Some(path) => {
            let directory = StaticDirectory::load(path)
                .with_context(|| format!("Failed to load group memberships from {}", path.display()))?;
            info!(path = %path.display(), identities = directory.len(), "Group memberships loaded");
            Box::new(directory)
        }
        None => Box::new(StaticDirectory::builtin()),
    };

    let assessor = Assessor::new(directory).with_options(AssessmentOptions {
        deduplicate: cli.dedupe,
    });
    let assessment = assessor.assess_config(&cli.user, &config)?;

    let styled = !cli.no_color && std::io::stdout().is_terminal();

    match cli.format {
        OutputFormat::Table => {
            print!("{}", render_report(&assessment.identity, &assessment.report, styled));
            if cli.explain {
                print!("{}", render_audit(&assessment, styled));
            }
        }
        OutputFormat::Json => {
            if cli.explain {
                println!("{}", serde_json::to_string_pretty(&assessment)?);
            } else {
                println!("{}", assessment.report.serialize_as(OutputFormat::Json)?);
            }
        }
        OutputFormat::Yaml => {
            if cli.explain {
                print!("{}", serde_yaml::to_string(&assessment)?);
            } else {
                print!("{}", assessment.report.serialize_as(OutputFormat::Yaml)?);
            }
        }
    }

    if let Some(output) = &cli.output {
        match assessment.report.save(output) {
            Ok(()) => info!(path = %output.display(), "Results saved"),
            Err(e) => warn!(error = %e, "Results were not saved"),
        }
    }

    Ok(())
}
