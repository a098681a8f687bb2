//! In-test providers whose completions the test releases by hand.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use agarathi_config::ProviderKind;
use agarathi_core::payload::WikiExtract;
use agarathi_core::{LookupError, RawPayload, SourceMetadata, WordSource};
use agarathi_illustrator::{GeneratedImage, GenerationError, ImageRequest, Illustrator, ProviderMetadata};
use async_trait::async_trait;
use tokio::sync::oneshot;

pub type LookupOutcome = Result<RawPayload, LookupError>;
pub type ImageOutcome = Result<GeneratedImage, GenerationError>;

pub fn extract(term: &str, html: &str) -> RawPayload {
    RawPayload::Extract(WikiExtract {
        term: term.to_string(),
        title: term.to_string(),
        html: html.to_string(),
    })
}

/// Word source that answers each term once, when the test says so
pub struct GatedSource {
    language: String,
    gates: Mutex<HashMap<String, oneshot::Receiver<LookupOutcome>>>,
    pub calls: AtomicUsize,
}

impl GatedSource {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            gates: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Register a term; sending on the returned handle completes its lookup
    pub fn gate(&self, term: &str) -> oneshot::Sender<LookupOutcome> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(term.to_string(), rx);
        tx
    }
}

#[async_trait]
impl WordSource for GatedSource {
    async fn lookup(&self, term: &str) -> Result<RawPayload, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gates.lock().unwrap().remove(term);
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(LookupError::Decode("gate dropped".to_string()))),
            None => Err(LookupError::NotFound(term.to_string())),
        }
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "gated".to_string(),
            provider: ProviderKind::Extract,
            language: self.language.clone(),
        }
    }
}

/// Illustrator that answers the request for a word, when the test says so
pub struct GatedIllustrator {
    gates: Mutex<HashMap<String, oneshot::Receiver<ImageOutcome>>>,
    pub calls: AtomicUsize,
}

impl GatedIllustrator {
    pub fn new() -> Self {
        Self {
            gates: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Register a word; sending on the returned handle completes its request
    pub fn gate(&self, word: &str) -> oneshot::Sender<ImageOutcome> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(word.to_string(), rx);
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Illustrator for GatedIllustrator {
    async fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let gate = {
            let mut gates = self.gates.lock().unwrap();
            let word = gates
                .keys()
                .find(|word| request.prompt.contains(&format!("Word: \"{word}\"")))
                .cloned();
            word.and_then(|word| gates.remove(&word))
        };
        match gate {
            Some(rx) => rx.await.unwrap_or(Err(GenerationError::EmptyResult)),
            None => Err(GenerationError::EmptyResult),
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "gated".to_string(),
            model: "test".to_string(),
        }
    }
}

pub fn image(url: &str) -> ImageOutcome {
    Ok(GeneratedImage {
        url: url.to_string(),
        provider: "test".to_string(),
    })
}
