use std::path::PathBuf;

use rand::prelude::*;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::{Error, SendGoalConfig};

const NAVGOAL_CONFIG_ENV_NAME: &str = "NAVGOAL_CONFIG_PATH";

/// Get config path from input or env NAVGOAL_CONFIG_PATH
pub fn get_apps_config_path(config_path: Option<PathBuf>) -> Option<PathBuf> {
    if config_path.is_some() {
        config_path
    } else {
        std::env::var(NAVGOAL_CONFIG_ENV_NAME)
            .map(|s| {
                warn!("### ENV VAR {} is used ###", s);
                PathBuf::from(s)
            })
            .ok()
    }
}

/// Loads the config file if a path is given, otherwise returns the default.
pub fn resolve_config(config_path: Option<PathBuf>) -> Result<SendGoalConfig, Error> {
    match get_apps_config_path(config_path) {
        Some(path) => SendGoalConfig::new(path),
        None => Ok(SendGoalConfig::default()),
    }
}

/// Node name with a random suffix.
pub fn anonymize(name: &str) -> String {
    let suffix: u64 = rand::thread_rng().gen();
    format!("{name}_{suffix}")
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
