use std::time::Duration;

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::engine::Engine;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub user_agent: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_secs: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub google_page_delay_secs: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub page_delay_secs: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub default_limit: usize,
}

impl Settings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Courtesy delay after each result page. Google gets a longer one.
    pub fn page_delay(&self, engine: Engine) -> Duration {
        match engine {
            Engine::Google => Duration::from_secs(self.google_page_delay_secs),
            _ => Duration::from_secs(self.page_delay_secs),
        }
    }
}

/// Built-in defaults, overridable by an optional `configuration.yaml` next
/// to the binary's working directory.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .set_default("user_agent", DEFAULT_USER_AGENT)?
        .set_default("timeout_secs", 15_i64)?
        .set_default("google_page_delay_secs", 2_i64)?
        .set_default("page_delay_secs", 1_i64)?
        .set_default("default_limit", 50_i64)?
        .add_source(config::File::with_name("configuration").required(false))
        .build()?;

    settings.try_deserialize::<Settings>()
}
