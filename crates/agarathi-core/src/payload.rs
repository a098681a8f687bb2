//! Provider payloads, validated at the source boundary.
//!
//! The structured types mirror the Free Dictionary API entry schema. The
//! wiki types cover the subset of the MediaWiki `prop=extracts` response
//! that lookups rely on.

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub enum RawPayload {
    Structured {
        /// Term as it was looked up
        term: String,
        /// Never empty
        entries: Vec<ApiEntry>,
    },
    Extract(WikiExtract),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiEntry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<ApiPhonetic>,
    #[serde(default)]
    pub meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiPhonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMeaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<ApiDefinition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiDefinition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

/// HTML extract of the first page a wiki query returned
#[derive(Debug, Clone, PartialEq)]
pub struct WikiExtract {
    /// Term as it was looked up
    pub term: String,
    /// Page title reported by the wiki, may differ from `term` in casing
    pub title: String,
    /// Non-blank HTML
    pub html: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WikiResponse {
    #[serde(default)]
    pub query: Option<WikiQuery>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WikiQuery {
    #[serde(default)]
    pub pages: BTreeMap<String, WikiPage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WikiPage {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub extract: Option<String>,
}

impl WikiResponse {
    /// Lowest page id that carries a non-blank extract. Missing pages have
    /// negative ids and no extract, so they never win over a real page.
    pub(crate) fn into_page_with_extract(self) -> Option<WikiPage> {
        let mut pages: Vec<(String, WikiPage)> = self
            .query?
            .pages
            .into_iter()
            .filter(|(_, page)| {
                page.extract
                    .as_deref()
                    .is_some_and(|extract| !extract.trim().is_empty())
            })
            .collect();
        pages.sort_by_key(|(id, _)| id.parse::<i64>().unwrap_or(i64::MAX));
        pages.into_iter().next().map(|(_, page)| page)
    }
}
