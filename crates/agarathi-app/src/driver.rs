//! Search cycle state machine.
//!
//! The driver is owned by the event loop and is the only writer of the
//! displayed slot. Lookups and illustrations run in spawned tasks and come
//! back as events tagged with the cycle that started them; anything tagged
//! with an older cycle is dropped.

use std::sync::Arc;

use agarathi_core::Normalizer;
use agarathi_core::WordSource;
use agarathi_core::preprocess::{DefaultPreprocessor, Preprocessor};
use agarathi_illustrator::{ImageParams, Illustrator, PromptSettings, request_illustration};
use agarathi_types::{
    AppEvent, Illustration, LookupFailure, Notice, Phase, SearchCycle, WordEntry,
};
use kanal::AsyncSender;

/// What is currently on screen
#[derive(Debug, Clone, Default)]
pub struct DisplaySlot {
    pub cycle: SearchCycle,
    pub term: Option<String>,
    pub phase: Phase,
    pub entry: Option<WordEntry>,
    pub illustration: Option<Illustration>,
    pub notice: Option<Notice>,
}

pub struct PresentationDriver {
    source: Arc<dyn WordSource>,
    illustrator: Option<Arc<dyn Illustrator>>,
    normalizer: Arc<Normalizer>,
    prompt: Arc<PromptSettings>,
    params: Arc<ImageParams>,
    language: String,
    /// Completions go back into the event loop
    completions_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    slot: DisplaySlot,
}

impl PresentationDriver {
    pub fn new(
        source: Arc<dyn WordSource>,
        illustrator: Option<Arc<dyn Illustrator>>,
        completions_tx: AsyncSender<AppEvent>,
        app_to_ui_tx: AsyncSender<AppEvent>,
    ) -> Self {
        let language = source.metadata().language;
        Self {
            source,
            illustrator,
            normalizer: Arc::new(Normalizer::default()),
            prompt: Arc::new(PromptSettings::default()),
            params: Arc::new(ImageParams::default()),
            language,
            completions_tx,
            app_to_ui_tx,
            slot: DisplaySlot::default(),
        }
    }

    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = Arc::new(normalizer);
        self
    }

    pub fn with_prompt(mut self, prompt: PromptSettings, params: ImageParams) -> Self {
        self.prompt = Arc::new(prompt);
        self.params = Arc::new(params);
        self
    }

    pub fn slot(&self) -> &DisplaySlot {
        &self.slot
    }

    /// Start a new cycle. Blank input is ignored and returns `None`.
    pub async fn search(&mut self, input: &str) -> anyhow::Result<Option<SearchCycle>> {
        let term = DefaultPreprocessor.process(input);
        if term.is_empty() {
            tracing::debug!("Ignoring blank search");
            return Ok(None);
        }

        let cycle = self.slot.cycle.next();
        self.slot = DisplaySlot {
            cycle,
            term: Some(term.clone()),
            phase: Phase::Searching,
            ..DisplaySlot::default()
        };
        tracing::info!("Search {}: '{}'", cycle, term);

        self.app_to_ui_tx
            .send(AppEvent::Searching {
                cycle,
                term: term.clone(),
            })
            .await?;

        let source = self.source.clone();
        let normalizer = self.normalizer.clone();
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let result = match source.lookup(&term).await {
                Ok(payload) => Ok(normalizer.normalize(&payload)),
                Err(e) => {
                    tracing::info!("Lookup {} failed: {}", cycle, e);
                    Err(e.to_failure())
                }
            };

            if let Err(e) = tx.send(AppEvent::LookupFinished { cycle, result }).await {
                tracing::error!("Failed to deliver lookup {}: {}", cycle, e);
            }
        });

        Ok(Some(cycle))
    }

    pub async fn on_lookup_finished(
        &mut self,
        cycle: SearchCycle,
        result: Result<WordEntry, LookupFailure>,
    ) -> anyhow::Result<()> {
        if cycle != self.slot.cycle || self.slot.phase != Phase::Searching {
            tracing::warn!("Dropping stale lookup {} (current {})", cycle, self.slot.cycle);
            return Ok(());
        }

        match result {
            Ok(entry) => {
                tracing::debug!(
                    "Lookup {}: '{}' with {} definitions",
                    cycle,
                    entry.word,
                    entry.definition_count()
                );
                self.slot.entry = Some(entry.clone());
                self.slot.phase = Phase::Found;
                self.app_to_ui_tx.send(AppEvent::ShowEntry(entry.clone())).await?;

                match &self.illustrator {
                    Some(illustrator) => {
                        self.slot.phase = Phase::ImagePending;
                        self.spawn_illustration(cycle, illustrator.clone(), entry);
                    }
                    None => {
                        self.app_to_ui_tx.send(AppEvent::CycleSettled(cycle)).await?;
                    }
                }
            }
            Err(failure) => {
                let notice = self.notice_for(&failure);
                self.slot.phase = Phase::NotFound;
                self.slot.notice = Some(notice.clone());
                self.app_to_ui_tx.send(AppEvent::ShowNotice(notice)).await?;
                self.app_to_ui_tx.send(AppEvent::CycleSettled(cycle)).await?;
            }
        }

        Ok(())
    }

    pub async fn on_illustration_finished(
        &mut self,
        cycle: SearchCycle,
        result: Result<Illustration, String>,
    ) -> anyhow::Result<()> {
        if cycle != self.slot.cycle || self.slot.phase != Phase::ImagePending {
            tracing::warn!(
                "Dropping stale illustration {} (current {})",
                cycle,
                self.slot.cycle
            );
            return Ok(());
        }

        match result {
            Ok(illustration) => {
                self.slot.phase = Phase::ImageReady;
                self.slot.illustration = Some(illustration.clone());
                self.app_to_ui_tx
                    .send(AppEvent::ShowIllustration(illustration))
                    .await?;
            }
            Err(e) => {
                // Text result stays; the image is just absent
                tracing::warn!("Illustration {} failed: {}", cycle, e);
                self.slot.phase = Phase::ImageFailed;
            }
        }

        self.app_to_ui_tx.send(AppEvent::CycleSettled(cycle)).await?;
        Ok(())
    }

    fn spawn_illustration(
        &self,
        cycle: SearchCycle,
        illustrator: Arc<dyn Illustrator>,
        entry: WordEntry,
    ) {
        let prompt = self.prompt.clone();
        let params = self.params.clone();
        let tx = self.completions_tx.clone();

        tokio::spawn(async move {
            let result = request_illustration(illustrator.as_ref(), &entry, &prompt, &params)
                .await
                .map_err(|e| e.to_string());

            if let Err(e) = tx
                .send(AppEvent::IllustrationFinished { cycle, result })
                .await
            {
                tracing::error!("Failed to deliver illustration {}: {}", cycle, e);
            }
        });
    }

    fn notice_for(&self, failure: &LookupFailure) -> Notice {
        if self.language == "ta" {
            return Notice {
                title: "சொல் கிடைக்கவில்லை".to_string(),
                description: "வேறு சொல் முயற்சி செய்யவும்.".to_string(),
            };
        }

        match failure {
            LookupFailure::NotFound { term } => Notice {
                title: "Word not found".to_string(),
                description: format!("No entry for '{term}'. Try another word."),
            },
            LookupFailure::Unavailable { reason } => Notice {
                title: "Lookup failed".to_string(),
                description: format!("{reason}. Try again."),
            },
        }
    }
}
