// Deploys TrainTrack.js. It has no secrets, so this is a plain copy.

use scriptable_deploy::config::DeployConfig;
use scriptable_deploy::deploy::{deploy_script, failure_hint};

fn main() {
    if let Err(e) = deploy_script(&DeployConfig::train_track()) {
        eprintln!("\nError: {:#}", e);
        if let Some(hint) = failure_hint(&e) {
            eprintln!("\n{}", hint);
        }
        std::process::exit(1);
    }
}
