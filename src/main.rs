//! SchoolGate policy report
//!
//! Loads the authorization configuration, builds the policy (aborting on any
//! inconsistency) and prints what every role can reach as JSON.

mod report;

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use schoolgate_authz::{Policy, PolicyEvaluator};
use schoolgate_core::config::AppConfig;
use schoolgate_core::error::AppError;

fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config) {
        tracing::error!("Policy error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("SCHOOLGATE_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting SchoolGate policy report v{}", env!("CARGO_PKG_VERSION"));

    let policy = Arc::new(Policy::from_config(&config.authz)?);
    let evaluator = PolicyEvaluator::new(policy);

    let report = report::PolicyReport::build(&evaluator);
    println!("{}", serde_json::to_string_pretty(&report)?);

    tracing::info!(roles = report.roles.len(), "Policy report written");
    Ok(())
}
