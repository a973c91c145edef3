use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub gateway: GatewayConfig,
    /// Accounts created at startup; defaults to the standard demo set.
    #[serde(default = "default_seed_accounts")]
    pub seed_accounts: Vec<SeedAccount>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

/// One account seeded into the registry at startup.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SeedAccount {
    pub username: String,
    pub balance: Decimal,
}

fn default_seed_accounts() -> Vec<SeedAccount> {
    [("Mark", 100), ("Jane", 50), ("Adam", 0)]
        .into_iter()
        .map(|(username, balance)| SeedAccount {
            username: username.to_string(),
            balance: Decimal::from(balance),
        })
        .collect()
}

impl AppConfig {
    pub fn load(env: &str) -> Self {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));
        serde_yaml::from_str(&content).expect("Failed to parse config yaml")
    }
}
