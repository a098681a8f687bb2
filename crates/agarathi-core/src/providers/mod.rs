use std::sync::Arc;
use std::time::Duration;

use agarathi_config::ProviderKind;
use agarathi_config::source::SourceConfig;

use crate::source::WordSource;

pub mod free_dictionary;
pub mod wiktionary;

pub use free_dictionary::FreeDictionarySource;
pub use wiktionary::WiktionarySource;

/// Construct the configured provider behind the common trait
pub fn build_source(
    config: &SourceConfig,
    timeout: Duration,
) -> Result<Arc<dyn WordSource>, reqwest::Error> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let language = config.language().to_string();

    let source: Arc<dyn WordSource> = match config.provider {
        ProviderKind::Structured => Arc::new(FreeDictionarySource::new(
            client,
            config.structured_base_url().to_string(),
            language,
        )),
        ProviderKind::Extract => Arc::new(WiktionarySource::new(
            client,
            config.wiki_base_url(),
            language,
        )),
    };

    let metadata = source.metadata();
    tracing::info!(
        "Word source: {} ({}, {})",
        metadata.name,
        metadata.provider,
        metadata.language
    );

    Ok(source)
}
