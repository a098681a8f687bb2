use agarathi_config::ProviderKind;
use async_trait::async_trait;
use reqwest::StatusCode;

use crate::payload::{RawPayload, WikiExtract, WikiResponse};
use crate::source::{LookupError, SourceMetadata, WordSource};

/// Wiki page extract (`{base}/w/api.php?action=query&prop=extracts`)
#[derive(Clone)]
pub struct WiktionarySource {
    client: reqwest::Client,
    base_url: String,
    language: String,
}

impl WiktionarySource {
    pub fn new(client: reqwest::Client, base_url: String, language: String) -> Self {
        Self {
            client,
            base_url,
            language,
        }
    }
}

#[async_trait]
impl WordSource for WiktionarySource {
    async fn lookup(&self, term: &str) -> Result<RawPayload, LookupError> {
        let url = format!("{}/w/api.php", self.base_url);

        let params = [
            ("action", "query"),
            ("titles", term),
            ("prop", "extracts"),
            ("format", "json"),
            ("origin", "*"),
        ];

        let response = self.client.get(&url).query(&params).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(term.to_string()));
        }

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status().as_u16()));
        }

        let body: WikiResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Decode(format!("Failed to parse query: {}", e)))?;

        let page = body
            .into_page_with_extract()
            .ok_or_else(|| LookupError::NotFound(term.to_string()))?;

        let html = page
            .extract
            .ok_or_else(|| LookupError::NotFound(term.to_string()))?;

        tracing::debug!("'{}': extract of {} bytes", term, html.len());

        Ok(RawPayload::Extract(WikiExtract {
            term: term.to_string(),
            title: page.title.unwrap_or_else(|| term.to_string()),
            html,
        }))
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: format!("{} Wiktionary", self.language),
            provider: ProviderKind::Extract,
            language: self.language.clone(),
        }
    }
}
