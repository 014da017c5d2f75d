use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/accounts.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AccountsConfig {
    /// Service root, e.g. `https://example.supabase.co/rest/v1/`.
    pub base_url: String,
    /// Project API key; sent both as `apikey` header and bearer token.
    pub api_key: String,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000/rest/v1/".to_string(),
            api_key: String::new(),
        }
    }
}

pub fn load() -> Result<AccountsConfig> {
    load_from(DEFAULT_CONFIG_PATH)
}

pub fn load_from(config_path: &str) -> Result<AccountsConfig> {
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("FAHRTENBUCH"));
    let settings: AccountsConfig = builder.build()?.try_deserialize()?;
    Ok(settings)
}
