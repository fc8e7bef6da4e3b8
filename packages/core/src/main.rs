// Scriptable Deploy - copy a Scriptable script to iCloud and inject secrets
//
// This is the configurable entry point; see src/bin/ for the fixed targets.

use anyhow::{Context, Result};
use clap::Parser;
use scriptable_deploy::config::{DeployConfig, DEFAULT_CONFIG_FILE};
use scriptable_deploy::deploy::{deploy_script, failure_hint};

/// Scriptable Deploy - copy a script into Scriptable's iCloud folder
#[derive(Parser, Debug)]
#[command(name = "scriptable-deploy")]
#[command(version)]
#[command(about = "Deploy a Scriptable script and inject local secrets", long_about = None)]
struct Cli {
    /// Path to the configuration file (default: scriptable-deploy.yaml)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,
}

fn run(config_path: &str) -> Result<()> {
    let config = DeployConfig::from_file(config_path)
        .with_context(|| format!("Failed to load config from: {}", config_path))?;

    deploy_script(&config)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli.config) {
        eprintln!("\nError: {:#}", e);
        if let Some(hint) = failure_hint(&e) {
            eprintln!("\n{}", hint);
        }
        std::process::exit(1);
    }
}
