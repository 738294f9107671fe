//! Server configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level gradecalc configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradecalcConfig {
    /// Address the web form listens on.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Largest accepted form submission in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_bind_addr() -> String {
    "127.0.0.1:5000".to_string()
}
fn default_max_body_bytes() -> usize {
    16 * 1024
}

impl Default for GradecalcConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied as-is and never expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order when no path is given:
/// 1. `gradecalc.toml` in the current directory
/// 2. `~/.config/gradecalc/config.toml`
///
/// Environment variable override: `GRADECALC_BIND`.
pub fn load_config_from(path: Option<&Path>) -> Result<GradecalcConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradecalc.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            parse_config(&path)?
        }
        None => GradecalcConfig::default(),
    };

    if let Ok(bind) = std::env::var("GRADECALC_BIND") {
        config.bind_addr = bind;
    }
    config.bind_addr = resolve_env_vars(&config.bind_addr);

    anyhow::ensure!(
        config.max_body_bytes > 0,
        "max_body_bytes must be greater than 0"
    );

    Ok(config)
}

fn parse_config(path: &Path) -> Result<GradecalcConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<GradecalcConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradecalc"))
}
