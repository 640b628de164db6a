//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;

use crate::pagination::PaginationConfig;

#[derive(Clone, Debug, Deserialize)]
/// Settings consumed by [`crate::run`].
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

impl ServerConfig {
    /// Layers `{config_dir}/default`, the optional `{config_dir}/{app_env}`
    /// profile and `APP_`-prefixed variables, e.g. `APP_PAGINATION__MAX_PAGE_SIZE`.
    ///
    /// Variables come from the process environment unless `env_vars` is given.
    pub fn load(
        config_dir: &str,
        app_env: &str,
        env_vars: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(&format!("{config_dir}/default")))
            .add_source(File::with_name(&format!("{config_dir}/{app_env}")).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env_vars),
            )
            .build()?
            .try_deserialize()
    }
}
