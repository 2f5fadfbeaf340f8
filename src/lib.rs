pub mod cli;
pub mod core;
pub mod providers;

use anyhow::Result;
use tracing::{debug, info};

use crate::core::config::AppConfig;
use crate::providers::exchangerate::ExchangeRateApiProvider;
use crate::providers::goldapi::GoldApiProvider;

#[derive(Debug, Clone, Copy)]
pub enum AppCommand {
    Rates,
    Spot,
    Fx,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Gold rates tracker starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Rates | AppCommand::Spot => {
            let goldapi = config.providers.goldapi.clone().unwrap_or_default();
            let api_key = goldapi.resolve_api_key()?;
            let provider = GoldApiProvider::new(&goldapi.base_url, &api_key);

            match command {
                AppCommand::Rates => cli::rates::run(&provider, &config.currency).await,
                _ => cli::spot::run(&provider, &config.currency).await,
            }
        }
        AppCommand::Fx => {
            let exchangerate = config.providers.exchangerate.clone().unwrap_or_default();
            let provider = ExchangeRateApiProvider::new(&exchangerate.base_url);
            cli::fx::run(&provider).await
        }
    }
}
