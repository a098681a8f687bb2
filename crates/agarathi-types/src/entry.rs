use serde::{Deserialize, Serialize};

/// Normalized result of a single successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub phonetics: Vec<Phonetic>,
    pub meanings: Vec<Meaning>,
}

impl WordEntry {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            phonetics: Vec::new(),
            meanings: Vec::new(),
        }
    }

    /// First definition of the first meaning that has one
    pub fn primary_definition(&self) -> Option<&Definition> {
        self.meanings
            .iter()
            .flat_map(|meaning| meaning.definitions.iter())
            .next()
    }

    /// Meaning with the given label, created at the end if missing
    pub fn meaning_mut(&mut self, part_of_speech: &str) -> &mut Meaning {
        let index = match self
            .meanings
            .iter()
            .position(|meaning| meaning.part_of_speech == part_of_speech)
        {
            Some(index) => index,
            None => {
                self.meanings.push(Meaning::new(part_of_speech));
                self.meanings.len() - 1
            }
        };
        &mut self.meanings[index]
    }

    pub fn definition_count(&self) -> usize {
        self.meanings.iter().map(|m| m.definitions.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phonetic {
    pub text: String,
    /// Pronunciation audio URI
    pub audio: Option<String>,
}

/// Definitions grouped under one part-of-speech label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    pub part_of_speech: String,
    pub definitions: Vec<Definition>,
    /// Related words given for the meaning as a whole
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

impl Meaning {
    pub fn new(part_of_speech: impl Into<String>) -> Self {
        Self {
            part_of_speech: part_of_speech.into(),
            definitions: Vec::new(),
            synonyms: Vec::new(),
            antonyms: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub text: String,
    pub example: Option<String>,
    /// Empty when the provider has none
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

impl Definition {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            example: None,
            synonyms: Vec::new(),
            antonyms: Vec::new(),
        }
    }

    pub fn with_example(mut self, example: Option<String>) -> Self {
        self.example = example;
        self
    }
}

/// Generated picture for an entry, tied to the search cycle that asked for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Illustration {
    pub image_url: String,
    pub prompt: String,
}
