use agarathi_config::source::DEFAULT_PART_OF_SPEECH;
use agarathi_types::{Definition, Meaning, Phonetic, WordEntry};

use crate::extract::parse_extract;
use crate::payload::{ApiEntry, RawPayload};

/// Turns any provider payload into a [`WordEntry`]
#[derive(Debug, Clone)]
pub struct Normalizer {
    default_part_of_speech: String,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_PART_OF_SPEECH)
    }
}

impl Normalizer {
    pub fn new(default_part_of_speech: impl Into<String>) -> Self {
        Self {
            default_part_of_speech: default_part_of_speech.into(),
        }
    }

    pub fn normalize(&self, payload: &RawPayload) -> WordEntry {
        match payload {
            RawPayload::Structured { term, entries } => normalize_structured(term, entries),
            RawPayload::Extract(extract) => {
                if extract.title != extract.term {
                    tracing::debug!("'{}' resolved to page '{}'", extract.term, extract.title);
                }
                parse_extract(&extract.term, &extract.html, &self.default_part_of_speech)
            }
        }
    }
}

/// Reshape the first entry of a structured response
fn normalize_structured(term: &str, entries: &[ApiEntry]) -> WordEntry {
    let Some(first) = entries.first() else {
        return WordEntry::new(term.to_lowercase());
    };

    let word = if first.word.trim().is_empty() {
        term.to_lowercase()
    } else {
        first.word.clone()
    };

    let mut phonetics: Vec<Phonetic> = first
        .phonetics
        .iter()
        .filter_map(|p| {
            let text = p.text.as_deref()?.trim();
            if text.is_empty() {
                return None;
            }
            Some(Phonetic {
                text: text.to_string(),
                audio: p.audio.clone().filter(|a| !a.is_empty()),
            })
        })
        .collect();

    if phonetics.is_empty() {
        if let Some(text) = first.phonetic.as_deref().filter(|t| !t.trim().is_empty()) {
            phonetics.push(Phonetic {
                text: text.trim().to_string(),
                audio: None,
            });
        }
    }

    let meanings = first
        .meanings
        .iter()
        .map(|meaning| Meaning {
            part_of_speech: meaning.part_of_speech.clone(),
            definitions: meaning
                .definitions
                .iter()
                .map(|d| Definition {
                    text: d.definition.clone(),
                    example: d.example.clone().filter(|e| !e.trim().is_empty()),
                    synonyms: dedup(&d.synonyms),
                    antonyms: dedup(&d.antonyms),
                })
                .collect(),
            synonyms: dedup(&meaning.synonyms),
            antonyms: dedup(&meaning.antonyms),
        })
        .collect();

    WordEntry {
        word,
        phonetics,
        meanings,
    }
}

/// Drop repeats, keeping first-seen order
fn dedup(values: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !out.contains(value) {
            out.push(value.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::{ApiDefinition, ApiMeaning, ApiPhonetic, WikiExtract};

    fn hello_payload() -> RawPayload {
        RawPayload::Structured {
            term: "Hello".to_string(),
            entries: vec![
                ApiEntry {
                    word: "hello".to_string(),
                    phonetic: Some("həˈləʊ".to_string()),
                    phonetics: vec![
                        ApiPhonetic {
                            text: Some("həˈləʊ".to_string()),
                            audio: Some("https://audio.example/hello-uk.mp3".to_string()),
                        },
                        ApiPhonetic {
                            text: None,
                            audio: Some("https://audio.example/hello-us.mp3".to_string()),
                        },
                    ],
                    meanings: vec![ApiMeaning {
                        part_of_speech: "exclamation".to_string(),
                        definitions: vec![ApiDefinition {
                            definition: "used as a greeting".to_string(),
                            example: Some("hello there, Katie!".to_string()),
                            synonyms: vec!["hi".to_string(), "hi".to_string(), "hey".to_string()],
                            antonyms: vec![],
                        }],
                        synonyms: vec!["greeting".to_string(), "hey".to_string(), "greeting".to_string()],
                        antonyms: vec!["goodbye".to_string()],
                    }],
                },
                ApiEntry {
                    word: "hello".to_string(),
                    phonetic: None,
                    phonetics: vec![],
                    meanings: vec![ApiMeaning {
                        part_of_speech: "noun".to_string(),
                        definitions: vec![],
                        synonyms: vec![],
                        antonyms: vec![],
                    }],
                },
            ],
        }
    }

    #[test]
    fn structured_entry_is_reshaped() {
        let entry = Normalizer::default().normalize(&hello_payload());

        assert_eq!(entry.word, "hello");
        assert_eq!(
            entry.phonetics,
            vec![Phonetic {
                text: "həˈləʊ".to_string(),
                audio: Some("https://audio.example/hello-uk.mp3".to_string()),
            }]
        );
        assert_eq!(entry.meanings.len(), 1);
        assert_eq!(entry.meanings[0].part_of_speech, "exclamation");

        let definition = &entry.meanings[0].definitions[0];
        assert_eq!(definition.text, "used as a greeting");
        assert_eq!(definition.example.as_deref(), Some("hello there, Katie!"));
        assert_eq!(definition.synonyms, vec!["hi", "hey"]);
        assert!(definition.antonyms.is_empty());
    }

    #[test]
    fn meaning_level_related_words_are_kept() {
        let entry = Normalizer::default().normalize(&hello_payload());

        let meaning = &entry.meanings[0];
        assert_eq!(meaning.synonyms, vec!["greeting", "hey"]);
        assert_eq!(meaning.antonyms, vec!["goodbye"]);
    }

    #[test]
    fn normalizing_twice_is_stable() {
        let normalizer = Normalizer::default();
        let payload = hello_payload();
        assert_eq!(normalizer.normalize(&payload), normalizer.normalize(&payload));

        let extract = RawPayload::Extract(WikiExtract {
            term: "நீர்".to_string(),
            title: "நீர்".to_string(),
            html: "<h3>பெயர்ச்சொல்</h3><li>தண்ணீர் “நீர் குடி”</li>".to_string(),
        });
        assert_eq!(normalizer.normalize(&extract), normalizer.normalize(&extract));
    }

    #[test]
    fn extract_word_is_the_term_not_the_title() {
        let payload = RawPayload::Extract(WikiExtract {
            term: "apple".to_string(),
            title: "Apple".to_string(),
            html: "<li>a fruit</li>".to_string(),
        });

        let entry = Normalizer::new("Definition").normalize(&payload);
        assert_eq!(entry.word, "apple");
        assert_eq!(entry.meanings[0].part_of_speech, "Definition");
    }

    #[test]
    fn bare_phonetic_is_used_when_list_has_no_text() {
        let payload = RawPayload::Structured {
            term: "cat".to_string(),
            entries: vec![ApiEntry {
                word: "cat".to_string(),
                phonetic: Some("/kæt/".to_string()),
                phonetics: vec![ApiPhonetic {
                    text: None,
                    audio: Some(String::new()),
                }],
                meanings: vec![],
            }],
        };

        let entry = Normalizer::default().normalize(&payload);
        assert_eq!(entry.phonetics.len(), 1);
        assert_eq!(entry.phonetics[0].text, "/kæt/");
        assert_eq!(entry.phonetics[0].audio, None);
        assert!(entry.meanings.is_empty());
    }
}
