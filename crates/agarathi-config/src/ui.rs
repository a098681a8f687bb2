use serde::{Deserialize, Serialize};

fn default_show_phonetics() -> bool {
    true
}

fn default_max_definitions() -> usize {
    5
}

fn default_prompt() -> String {
    ">> ".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_show_phonetics")]
    pub show_phonetics: bool,
    /// Definitions printed per part of speech
    #[serde(default = "default_max_definitions")]
    pub max_definitions_per_meaning: usize,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_phonetics: default_show_phonetics(),
            max_definitions_per_meaning: default_max_definitions(),
            prompt: default_prompt(),
        }
    }
}
