//! Money Transfer Service
//!
//! Entry point. Architecture:
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │  Config  │───▶│ Registry │───▶│  Engine  │───▶│ Gateway  │
//! │  (YAML)  │    │ (seeded) │    │(Transfer)│    │  (HTTP)  │
//! └──────────┘    └──────────┘    └──────────┘    └──────────┘
//! ```

use std::sync::Arc;

use money_transfer::account::Registry;
use money_transfer::config::AppConfig;
use money_transfer::gateway::{self, AppState};
use money_transfer::money;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

/// Create the registry and seed the configured accounts.
fn seed_registry(config: &AppConfig) -> Arc<Registry> {
    let registry = Arc::new(Registry::new());
    for seed in &config.seed_accounts {
        let balance = money::to_minor_units_allow_zero(seed.balance).unwrap_or_else(|e| {
            panic!("Invalid seed balance for account {}: {}", seed.username, e)
        });
        match registry.create(&seed.username, balance) {
            Ok(account) => {
                tracing::info!(
                    "Seeded account {} with balance {}",
                    seed.username,
                    money::to_decimal(account.balance())
                );
            }
            Err(e) => tracing::warn!("Skipping seed account {}: {}", seed.username, e),
        }
    }
    registry
}

fn main() {
    let env = get_env();
    let app_config = AppConfig::load(&env);
    let _log_guard = money_transfer::logging::init_logging(&app_config);

    tracing::info!("Starting Money Transfer Service in {} mode", env);

    let registry = seed_registry(&app_config);
    let state = Arc::new(AppState::new(registry));

    let port = get_port_override().unwrap_or(app_config.gateway.port);
    println!(
        "Gateway will listen on {}:{}",
        app_config.gateway.host, port
    );

    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(gateway::run_server(&app_config.gateway.host, port, state));
}
