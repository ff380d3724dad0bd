use config::{Config, Environment};
use serde::Deserialize;
use tracing::warn;

/// Runtime settings, read from `TUTOR_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default = "default_rating_jitter")]
    pub rating_jitter: f64,
}

fn default_export_dir() -> String {
    "data/articles".to_string()
}

fn default_rating_jitter() -> f64 {
    0.1
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            export_dir: default_export_dir(),
            rating_jitter: default_rating_jitter(),
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        Self::from_config(
            Config::builder().add_source(Environment::with_prefix("TUTOR").try_parsing(true)),
        )
    }

    fn from_config(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Self {
        match builder.build().and_then(|c| c.try_deserialize::<Settings>()) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Falling back to default settings: {}", e);
                Settings::default()
            }
        }
    }
}
