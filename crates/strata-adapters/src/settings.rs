//! Materialization options loading.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables (`STRATA_FORCE`, `STRATA_SPACES`)
//! 2. Options file, when one is given and exists (TOML, JSON or YAML by
//!    extension)
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use strata_core::{
    application::MaterializeOptions,
    error::{StrataError, StrataResult},
};
use tracing::{debug, info};

const DEFAULTS: &str = r#"
force = false
spaces = 4
"#;

/// Loads [`MaterializeOptions`] from layered sources.
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    file: Option<PathBuf>,
    env_prefix: String,
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self {
            file: None,
            env_prefix: "STRATA".to_string(),
        }
    }

    /// Set the options file path.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Set the environment variable prefix.
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn load(&self) -> StrataResult<MaterializeOptions> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULTS, config::FileFormat::Toml));

        if let Some(path) = &self.file {
            if path.exists() {
                info!(path = %path.display(), "Loading options file");
                builder = builder.add_source(config::File::from(path.as_path()));
            } else {
                debug!(path = %path.display(), "Options file not found, using defaults");
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build().map_err(configuration_error)?;
        settings.try_deserialize().map_err(configuration_error)
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load options from defaults, an optional file and `STRATA_*` variables.
pub fn load_options(file: Option<&Path>) -> StrataResult<MaterializeOptions> {
    let mut loader = SettingsLoader::new();
    if let Some(path) = file {
        loader = loader.with_file(path);
    }
    loader.load()
}

fn configuration_error(e: config::ConfigError) -> StrataError {
    StrataError::Configuration {
        message: e.to_string(),
    }
}
