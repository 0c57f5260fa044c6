//! Configuration loading
//!
//! Layers, later wins: built-in defaults, the user config file, `aitk.toml`
//! in the working directory, an explicit `--config` file, `AITK_*`
//! environment variables. CLI flags are merged on top by [`merge`].

pub mod merge;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::Config;
use crate::error::{AitkError, Result};

pub use merge::{merge_cli_with_config, CliOverrides};

/// Project-level config file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "aitk.toml";

/// Environment variable prefix, e.g. `AITK_LISTING_STYLE=flat`.
pub const ENV_PREFIX: &str = "AITK_";

/// `~/.config/aitk/config.toml` (platform equivalent).
pub fn user_config_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.config_dir().join("aitk").join("config.toml"))
}

pub fn load_config(cwd: &Path, explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(AitkError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
            });
        }
    }

    build_figment(cwd, user_config_path().as_deref(), explicit)
        .extract::<Config>()
        .map_err(|err| AitkError::Config(Box::new(err)))
}

fn build_figment(cwd: &Path, user_config: Option<&Path>, explicit: Option<&Path>) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if let Some(path) = user_config {
        debug!("User config: {}", path.display());
        figment = figment.merge(Toml::file(path));
    }

    let project = cwd.join(PROJECT_CONFIG_FILE);
    debug!("Project config: {}", project.display());
    figment = figment.merge(Toml::file(project));

    if let Some(path) = explicit {
        figment = figment.merge(Toml::file(path));
    }

    figment.merge(Env::prefixed(ENV_PREFIX))
}
