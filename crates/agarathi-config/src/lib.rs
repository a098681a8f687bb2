use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use self::illustration::IllustrationConfig;
use self::source::SourceConfig;
use self::ui::UiConfig;

pub mod illustration;
pub mod source;
pub mod ui;

pub use source::ProviderKind;

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub illustration: IllustrationConfig,
    pub ui: UiConfig,

    /// Per-request timeout for every outbound call
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            illustration: IllustrationConfig::default(),
            ui: UiConfig::default(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Config {
    /// Defaults overlaid with environment variables
    pub fn new() -> Self {
        let timeout_seconds = env::var("TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds); // 30 seconds default

        Config {
            source: SourceConfig::new(),
            illustration: IllustrationConfig::new(),
            ui: UiConfig::default(),

            timeout_seconds,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
