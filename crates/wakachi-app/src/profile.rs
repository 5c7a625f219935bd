use std::env;
use std::path::Path;

use anyhow::Context;
use wakachi_config::Config;

/// Picked up from the working directory when `--config` is not given
const DEFAULT_CONFIG_FILE: &str = "wakachi.json";

/// Load the config file (explicit path, then `wakachi.json`, then built-in
/// defaults) and apply `WAKACHI_*` environment overrides on top
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    load_config_from(path, Path::new(DEFAULT_CONFIG_FILE), |key| env::var(key).ok())
}

/// Environment values always win over file values
pub fn load_config_from<F>(path: Option<&Path>, default_path: &Path, lookup: F) -> anyhow::Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let path = match path {
        Some(path) => Some(path),
        None if default_path.exists() => Some(default_path),
        None => None,
    };

    let mut config = match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    config.apply_env(lookup);
    Ok(config)
}
