use std::env;

use serde::{Deserialize, Serialize};

pub const DEFAULT_NO_DEFINITION_PLACEHOLDER: &str = "no definition available";

fn default_enabled() -> bool {
    true
}

fn default_api_url() -> String {
    "https://api.runware.ai/v1".to_string()
}

fn default_model() -> String {
    "stable-diffusion-v1-5".to_string()
}

fn default_size() -> u32 {
    512
}

fn default_output_format() -> String {
    "PNG".to_string()
}

fn default_no_definition_placeholder() -> String {
    DEFAULT_NO_DEFINITION_PLACEHOLDER.to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct IllustrationConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_size")]
    pub width: u32,
    #[serde(default = "default_size")]
    pub height: u32,
    #[serde(default = "default_output_format")]
    pub output_format: String,
    /// Language named in the prompt, e.g. "Tamil". Derived from the source language when unset.
    pub prompt_language: Option<String>,
    #[serde(default = "default_no_definition_placeholder")]
    pub no_definition_placeholder: String,
}

impl Default for IllustrationConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_url: default_api_url(),
            api_key: String::new(),
            model: default_model(),
            width: default_size(),
            height: default_size(),
            output_format: default_output_format(),
            prompt_language: None,
            no_definition_placeholder: default_no_definition_placeholder(),
        }
    }
}

impl IllustrationConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        let api_url = env::var("IMAGE_API_URL").unwrap_or(defaults.api_url);
        let api_key = env::var("IMAGE_API_KEY").unwrap_or_default();
        let model = env::var("IMAGE_MODEL").unwrap_or(defaults.model);
        let prompt_language = env::var("IMAGE_PROMPT_LANGUAGE")
            .ok()
            .filter(|v| !v.is_empty());

        Self {
            api_url,
            api_key,
            model,
            prompt_language,
            ..defaults
        }
    }

    /// Enabled and carrying credentials
    pub fn is_active(&self) -> bool {
        self.enabled && !self.api_key.is_empty()
    }
}
