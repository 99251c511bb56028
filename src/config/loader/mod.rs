use crate::config::Config;
use crate::config::credentials::apply_overrides_with;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const DEFAULT_CONFIG_FILE: &str = "rcs-chatbot.json";

/// Config file used when no path is given: `rcs-chatbot.json` in the working
/// directory.
pub fn get_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE)
}

/// Load, override from `RCS_CHATBOT_*` env vars, and validate.
///
/// A missing file is not an error; the defaults plus env overrides are used
/// instead, which is enough for container deployments.
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    load_config_with(config_path, |name| std::env::var(name).ok())
}

fn load_config_with<F>(config_path: Option<&Path>, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let default_path = get_config_path();
    let path = config_path.unwrap_or(default_path.as_path());

    let mut config = if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config JSON from {}", path.display()))?;

        check_file_permissions(path);
        config
    } else {
        debug!("no config file at {}, using defaults", path.display());
        Config::default()
    };

    apply_overrides_with(&mut config, lookup);

    config
        .validate()
        .with_context(|| "Configuration validation failed")?;
    Ok(config)
}

/// Warn if the config file is readable by group or others; it holds the
/// gateway access token.
#[cfg(unix)]
fn check_file_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Ok(meta) = fs::metadata(path) {
        let mode = meta.permissions().mode();
        if mode & 0o077 != 0 {
            warn!(
                "config file {} has permissions {:o}, recommend 0600",
                path.display(),
                mode & 0o777
            );
        }
    }
}

#[cfg(not(unix))]
fn check_file_permissions(_path: &Path) {
    // Permission checks only apply on unix systems
}

#[cfg(test)]
mod tests;
