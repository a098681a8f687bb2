use agarathi_config::illustration::{DEFAULT_NO_DEFINITION_PLACEHOLDER, IllustrationConfig};
use agarathi_types::WordEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSettings {
    /// Language named in the prompt, e.g. "Tamil"
    pub language: Option<String>,
    /// Used when the entry has no definition at all
    pub no_definition: String,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            language: None,
            no_definition: DEFAULT_NO_DEFINITION_PLACEHOLDER.to_string(),
        }
    }
}

impl From<&IllustrationConfig> for PromptSettings {
    fn from(config: &IllustrationConfig) -> Self {
        Self {
            language: config.prompt_language.clone(),
            no_definition: config.no_definition_placeholder.clone(),
        }
    }
}

impl PromptSettings {
    /// Settings for a source language. Anything set explicitly in the config
    /// is kept; Tamil sources otherwise get a Tamil prompt and placeholder.
    pub fn for_source(config: &IllustrationConfig, source_language: &str) -> Self {
        let mut settings = Self::from(config);

        if source_language == "ta" {
            settings.language.get_or_insert_with(|| "Tamil".to_string());
            if settings.no_definition == DEFAULT_NO_DEFINITION_PLACEHOLDER {
                settings.no_definition = "விளக்கம் இல்லை".to_string();
            }
        }

        settings
    }
}

/// Flashcard prompt for the word and its first definition
pub fn build_prompt(entry: &WordEntry, settings: &PromptSettings) -> String {
    let definition = entry
        .primary_definition()
        .map(|d| d.text.as_str())
        .unwrap_or(&settings.no_definition);

    let language = settings
        .language
        .as_deref()
        .map(|l| format!("{l} "))
        .unwrap_or_default();

    format!(
        "Create a {language}flashcard illustration.\n\
         Word: \"{word}\"\n\
         Meaning: {definition}\n\
         Style: clean, educational, visually clear with the {language}word text shown.",
        word = entry.word,
    )
}
