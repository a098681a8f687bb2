use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    /// Search term cleanup before it reaches a provider
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Composed form so Tamil vowel signs match page titles
        let text: String = text.nfc().collect();

        // Collapse inner whitespace and newlines
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
