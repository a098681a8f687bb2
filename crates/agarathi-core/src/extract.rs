//! Wiki HTML extract parsing.
//!
//! Headings (`h3`, `h4`) name the part of speech for the list items that
//! follow them. Each list item is one definition, optionally ending in a
//! quoted usage example.

use std::sync::LazyLock;

use agarathi_types::{Definition, WordEntry};
use regex::Regex;
use scraper::{Html, Selector};

static HEADINGS_AND_ITEMS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h3, h4, li").expect("static selector"));

/// Lazy definition, then an optional greedy quoted span running to the end
static QUOTED_EXAMPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(.*?)(“.*”|‘.*’|".*")?$"#).expect("static pattern"));

const QUOTE_CHARS: &[char] = &['“', '”', '‘', '’', '"'];

/// Build an entry for `term` from an HTML extract
pub fn parse_extract(term: &str, html: &str, default_part_of_speech: &str) -> WordEntry {
    let fragment = Html::parse_fragment(html);
    let mut entry = WordEntry::new(term);
    let mut current_part = default_part_of_speech.to_string();

    for element in fragment.select(&HEADINGS_AND_ITEMS) {
        let text = element.text().collect::<String>();
        let text = text.trim();

        match element.value().name() {
            "h3" | "h4" => {
                if !text.is_empty() {
                    current_part = text.to_string();
                }
            }
            "li" if !text.is_empty() => {
                let (definition, example) = split_definition(text);
                entry
                    .meaning_mut(&current_part)
                    .definitions
                    .push(Definition::new(definition).with_example(example));
            }
            _ => {}
        }
    }

    tracing::debug!(
        "Parsed extract for '{}': {} meanings, {} definitions",
        term,
        entry.meanings.len(),
        entry.definition_count()
    );

    entry
}

/// Split a list item into its definition and trailing quoted example
pub fn split_definition(text: &str) -> (String, Option<String>) {
    let Some(captures) = QUOTED_EXAMPLE.captures(text) else {
        return (text.to_string(), None);
    };

    let definition = captures
        .get(1)
        .map(|m| m.as_str().trim())
        .filter(|d| !d.is_empty())
        .unwrap_or(text)
        .to_string();

    let example = captures
        .get(2)
        .map(|m| m.as_str().replace(QUOTE_CHARS, "").trim().to_string())
        .filter(|e| !e.is_empty());

    (definition, example)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = "விளக்கம்";

    #[test]
    fn heading_names_the_meaning_and_example_is_unquoted() {
        let entry = parse_extract("thing", "<h3>Noun</h3><li>A thing “example text”</li>", DEFAULT);

        assert_eq!(entry.word, "thing");
        assert_eq!(entry.meanings.len(), 1);
        assert_eq!(entry.meanings[0].part_of_speech, "Noun");
        assert_eq!(entry.meanings[0].definitions.len(), 1);
        let definition = &entry.meanings[0].definitions[0];
        assert_eq!(definition.text, "A thing");
        assert_eq!(definition.example.as_deref(), Some("example text"));
    }

    #[test]
    fn items_before_any_heading_use_the_default_label() {
        let entry = parse_extract("thing", "<li>A thing</li>", DEFAULT);

        assert_eq!(entry.meanings.len(), 1);
        assert_eq!(entry.meanings[0].part_of_speech, DEFAULT);
        assert_eq!(entry.meanings[0].definitions[0].text, "A thing");
        assert_eq!(entry.meanings[0].definitions[0].example, None);
    }

    #[test]
    fn repeated_headings_merge_in_first_seen_order() {
        let html = "<ul><li>lead</li></ul>\
                    <h3>பெயர்ச்சொல்</h3><ol><li>one</li></ol>\
                    <h4>வினைச்சொல்</h4><ol><li>two</li></ol>\
                    <h3>பெயர்ச்சொல்</h3><ol><li>three</li></ol>";
        let entry = parse_extract("சொல்", html, DEFAULT);

        let labels: Vec<&str> = entry
            .meanings
            .iter()
            .map(|m| m.part_of_speech.as_str())
            .collect();
        assert_eq!(labels, vec![DEFAULT, "பெயர்ச்சொல்", "வினைச்சொல்"]);

        let nouns: Vec<&str> = entry.meanings[1]
            .definitions
            .iter()
            .map(|d| d.text.as_str())
            .collect();
        assert_eq!(nouns, vec!["one", "three"]);
    }

    #[test]
    fn blank_headings_and_items_are_skipped() {
        let entry = parse_extract(
            "x",
            "<h3>Verb</h3><h4>  </h4><li>   </li><li>run fast</li>",
            DEFAULT,
        );

        assert_eq!(entry.meanings.len(), 1);
        assert_eq!(entry.meanings[0].part_of_speech, "Verb");
        assert_eq!(entry.meanings[0].definitions.len(), 1);
    }

    #[test]
    fn markup_inside_items_is_flattened_to_text() {
        let entry = parse_extract(
            "x",
            "<li><b>bold</b> part ‘<i>said</i> softly’</li>",
            DEFAULT,
        );

        let definition = &entry.meanings[0].definitions[0];
        assert_eq!(definition.text, "bold part");
        assert_eq!(definition.example.as_deref(), Some("said softly"));
    }

    #[test]
    fn straight_quotes_split_too() {
        assert_eq!(
            split_definition(r#"to walk "she walked home""#),
            ("to walk".to_string(), Some("she walked home".to_string()))
        );
    }

    #[test]
    fn greedy_span_swallows_multiple_quotes() {
        // The trailing span starts at the first opening quote
        let (definition, example) = split_definition("a “b” and “c”");
        assert_eq!(definition, "a");
        assert_eq!(example.as_deref(), Some("b and c"));
    }

    #[test]
    fn fully_quoted_item_keeps_whole_text_as_definition() {
        let (definition, example) = split_definition("“only quote”");
        assert_eq!(definition, "“only quote”");
        assert_eq!(example.as_deref(), Some("only quote"));
    }

    #[test]
    fn unclosed_quote_is_part_of_the_definition() {
        let (definition, example) = split_definition("meaning “open");
        assert_eq!(definition, "meaning “open");
        assert_eq!(example, None);
    }

    #[test]
    fn multiline_items_do_not_split() {
        let (definition, example) = split_definition("first\nsecond “x”");
        assert_eq!(definition, "first\nsecond “x”");
        assert_eq!(example, None);
    }
}
