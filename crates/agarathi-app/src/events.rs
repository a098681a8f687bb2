use agarathi_types::{AppEvent, UiEvent};
use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;

use crate::driver::PresentationDriver;

/// App's main loop. Sole owner of the driver.
pub async fn event_loop(
    mut driver: PresentationDriver,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = ui_to_app_rx.recv() => event?,
        };

        if matches!(event, AppEvent::UiEvent(UiEvent::Close)) {
            tracing::info!("[EVENT_LOOP] Close requested");
            break;
        }

        handle_events(&mut driver, event).await?;
    }

    Ok(())
}

pub(crate) async fn handle_events(
    driver: &mut PresentationDriver,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::Search(text) => {
            driver.search(&text).await?;
        }
        AppEvent::LookupFinished { cycle, result } => {
            driver.on_lookup_finished(cycle, result).await?;
        }
        AppEvent::IllustrationFinished { cycle, result } => {
            driver.on_illustration_finished(cycle, result).await?;
        }
        AppEvent::UiEvent(_) => {}
        AppEvent::Searching { .. }
        | AppEvent::ShowEntry(_)
        | AppEvent::ShowIllustration(_)
        | AppEvent::ShowNotice(_)
        | AppEvent::CycleSettled(_) => {
            // UI-only event, ignore in backend
        }
    }

    Ok(())
}
