// Deploys FootballScores.js with its secrets applied. Takes no arguments.

use scriptable_deploy::config::DeployConfig;
use scriptable_deploy::deploy::{deploy_script, failure_hint};

fn main() {
    if let Err(e) = deploy_script(&DeployConfig::football_scores()) {
        eprintln!("\nError: {:#}", e);
        if let Some(hint) = failure_hint(&e) {
            eprintln!("\n{}", hint);
        }
        std::process::exit(1);
    }
}
