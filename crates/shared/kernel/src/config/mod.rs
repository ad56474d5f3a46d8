use config::{Case, Config, Environment, File};
use corbas_domain::constants::ENV_PREFIX;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_CONFIG: &str = "server";

#[corbas_derive::corbas_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a config file overlaid with `CORBAS__*` environment variables.
///
/// * The file defaults to `server` in the working directory; the extension may
///   be omitted (`server.toml`, `server.yaml`, `server.json` are all found).
/// * Environment keys nest with a double underscore:
///   `CORBAS__PIPELINE__ENDPOINT` sets `pipeline.endpoint`.
///
/// # Errors
/// Fails when the file is missing or its content does not match `T`.
///
/// ```rust,no_run
/// use corbas_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Settings {
///     port: u16,
/// }
///
/// let settings: Settings = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf());
    info!(path = %path.display(), "Loading configuration");

    Config::builder()
        .add_source(File::from(path.as_path()).required(true))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(Case::Snake))
        .build()
        .context(format!("Failed to read {}", path.display()))?
        .try_deserialize::<T>()
        .context("Failed to deserialize configuration")
}
