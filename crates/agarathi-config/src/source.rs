use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_STRUCTURED_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2";
/// Label used for extract definitions that appear before any heading
pub const DEFAULT_PART_OF_SPEECH: &str = "விளக்கம்";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// JSON dictionary API returning typed entries
    #[default]
    Structured,
    /// Wiki API returning an HTML extract
    Extract,
}

impl ProviderKind {
    pub fn default_language(self) -> &'static str {
        match self {
            ProviderKind::Structured => "en",
            ProviderKind::Extract => "ta",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Structured => f.write_str("structured"),
            ProviderKind::Extract => f.write_str("extract"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "structured" | "dictionary" | "json" => Ok(ProviderKind::Structured),
            "extract" | "wiki" | "wiktionary" => Ok(ProviderKind::Extract),
            other => Err(format!("unknown provider '{other}'")),
        }
    }
}

fn default_part_of_speech() -> String {
    DEFAULT_PART_OF_SPEECH.to_string()
}

fn default_structured_base_url() -> String {
    DEFAULT_STRUCTURED_BASE_URL.to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SourceConfig {
    pub provider: ProviderKind,
    /// Falls back to the provider's default language
    pub language: Option<String>,
    #[serde(default = "default_structured_base_url")]
    pub structured_base_url: String,
    /// Falls back to `https://{language}.wiktionary.org`
    pub wiki_base_url: Option<String>,
    #[serde(default = "default_part_of_speech")]
    pub default_part_of_speech: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            language: None,
            structured_base_url: default_structured_base_url(),
            wiki_base_url: None,
            default_part_of_speech: default_part_of_speech(),
        }
    }
}

impl SourceConfig {
    pub fn new() -> Self {
        let provider = env::var("AGARATHI_PROVIDER")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        let language = env::var("AGARATHI_LANGUAGE").ok().filter(|v| !v.is_empty());

        let structured_base_url =
            env::var("DICTIONARY_API_URL").unwrap_or_else(|_| default_structured_base_url());

        let wiki_base_url = env::var("WIKI_API_URL").ok().filter(|v| !v.is_empty());

        Self {
            provider,
            language,
            structured_base_url,
            wiki_base_url,
            default_part_of_speech: default_part_of_speech(),
        }
    }

    pub fn language(&self) -> &str {
        self.language
            .as_deref()
            .unwrap_or_else(|| self.provider.default_language())
    }

    pub fn wiki_base_url(&self) -> String {
        match &self.wiki_base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}.wiktionary.org", self.language()),
        }
    }

    pub fn structured_base_url(&self) -> &str {
        self.structured_base_url.trim_end_matches('/')
    }
}
