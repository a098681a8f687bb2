use std::sync::Arc;

use agarathi_core::Normalizer;
use agarathi_illustrator::{HttpIllustrator, ImageParams, Illustrator, PromptSettings};
use agarathi_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::driver::PresentationDriver;
use crate::events::event_loop;
use crate::state::AppState;
use crate::ui::{UiMode, ui_loop};

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(256), // Render output
            ui_to_app: kanal::bounded_async(64),  // Searches and task completions
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub async fn spawn_tasks(&self, mode: UiMode) -> anyhow::Result<JoinSet<anyhow::Result<()>>> {
        let driver = self.build_driver().await?;
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            driver,
            self.channels.ui_to_app.1.clone(),
            self.cancel_token.child_token(),
        ));

        // UI loop
        tasks.spawn(ui_loop(
            mode,
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
            self.state.config.clone(),
            self.cancel_token.child_token(),
        ));

        Ok(tasks)
    }

    /// Wire the configured source and illustrator into a driver
    async fn build_driver(&self) -> anyhow::Result<PresentationDriver> {
        let config = self.state.config.read().await;

        let source = agarathi_core::build_source(&config.source, config.timeout())?;

        let illustrator: Option<Arc<dyn Illustrator>> = if config.illustration.is_active() {
            let client = reqwest::Client::builder()
                .timeout(config.timeout())
                .build()?;
            let illustrator: Arc<dyn Illustrator> =
                Arc::new(HttpIllustrator::from_config(client, &config.illustration));
            let metadata = illustrator.metadata();
            tracing::info!("Illustrations via {} ({})", metadata.name, metadata.model);
            Some(illustrator)
        } else {
            tracing::warn!("Illustrations disabled (set IMAGE_API_KEY to enable)");
            None
        };

        let driver = PresentationDriver::new(
            source,
            illustrator,
            self.channels.ui_to_app.0.clone(),
            self.channels.app_to_ui.0.clone(),
        )
        .with_normalizer(Normalizer::new(config.source.default_part_of_speech.clone()))
        .with_prompt(
            PromptSettings::for_source(&config.illustration, config.source.language()),
            ImageParams::from(&config.illustration),
        );

        Ok(driver)
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
