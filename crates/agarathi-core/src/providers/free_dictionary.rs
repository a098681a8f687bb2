use agarathi_config::ProviderKind;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};

use crate::payload::{ApiEntry, RawPayload};
use crate::source::{LookupError, SourceMetadata, WordSource};

/// Structured JSON dictionary (`{base}/entries/{lang}/{term}`)
#[derive(Clone)]
pub struct FreeDictionarySource {
    client: reqwest::Client,
    base_url: String,
    language: String,
}

impl FreeDictionarySource {
    pub fn new(client: reqwest::Client, base_url: String, language: String) -> Self {
        Self {
            client,
            base_url,
            language,
        }
    }

    fn entry_url(&self, term: &str) -> Result<Url, LookupError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| LookupError::InvalidUrl(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["entries", self.language.as_str(), term]);

        Ok(url)
    }
}

#[async_trait]
impl WordSource for FreeDictionarySource {
    async fn lookup(&self, term: &str) -> Result<RawPayload, LookupError> {
        let url = self.entry_url(term)?;
        tracing::debug!("Structured lookup: {}", url);

        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(term.to_string()));
        }

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status().as_u16()));
        }

        let entries: Vec<ApiEntry> = response
            .json()
            .await
            .map_err(|e| LookupError::Decode(format!("Failed to parse entries: {}", e)))?;

        if entries.is_empty() {
            return Err(LookupError::NotFound(term.to_string()));
        }

        tracing::debug!("'{}': {} entries", term, entries.len());

        Ok(RawPayload::Structured {
            term: term.to_string(),
            entries,
        })
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Free Dictionary API".to_string(),
            provider: ProviderKind::Structured,
            language: self.language.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_is_encoded_as_a_single_path_segment() {
        let source = FreeDictionarySource::new(
            reqwest::Client::new(),
            "https://api.dictionaryapi.dev/api/v2/".to_string(),
            "en".to_string(),
        );

        let url = source.entry_url("ice cream/cone").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/ice%20cream%2Fcone"
        );
    }
}
