mod error;

pub use self::error::{ConfigError, ConfigErrorExt};

use config::{Config, Environment, File, FileFormat, FileSourceFile};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Base name of the configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "pricing";

/// Prefix of environment overrides, e.g. `PRICING__MOUNT__SELECTOR`.
pub const ENV_PREFIX: &str = "PRICING";

/// Where the file layer of the configuration comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// `pricing.{toml,json,yaml,..}` in the working directory. A missing file is not an error.
    #[default]
    WorkingDir,
    /// An explicit file that must exist.
    File(PathBuf),
}

impl ConfigSource {
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    fn layer(&self) -> File<FileSourceFile, FileFormat> {
        match self {
            Self::WorkingDir => File::with_name(DEFAULT_CONFIG_FILE).required(false),
            Self::File(path) => File::from(path.as_path()).required(true),
        }
    }
}

impl From<Option<PathBuf>> for ConfigSource {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Self::WorkingDir, Self::File)
    }
}

/// Reads `T` from the file layer of `source`, then applies `PRICING__*` overrides on top.
///
/// Nested keys use `__`: `PRICING__MOUNT__SELECTOR=.plans` sets `mount.selector`. Every field
/// of `T` that neither layer sets falls back to its serde default.
///
/// # Errors
/// Fails when an explicit file is missing or unreadable, or when the merged values do not fit `T`.
pub fn load_config<T>(source: &ConfigSource) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    debug!(?source, "Reading configuration");

    Config::builder()
        .add_source(source.layer())
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
