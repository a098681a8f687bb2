//! Terminal front-end: reads search terms from stdin and prints whatever
//! the event loop sends back.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use agarathi_config::Config;
use agarathi_config::ui::UiConfig;
use agarathi_core::preprocess::{DefaultPreprocessor, Preprocessor};
use agarathi_types::{AppEvent, SearchCycle, UiEvent, WordEntry};
use kanal::{AsyncReceiver, AsyncSender};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
pub enum UiMode {
    Interactive,
    /// Search once, exit when the cycle settles
    OneShot(String),
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Quit,
    Search(String),
    Nothing,
}

pub(crate) fn parse_command(line: &str) -> Command {
    match line.trim() {
        "" => Command::Nothing,
        ":q" | ":quit" | "quit" | "exit" => Command::Quit,
        term => Command::Search(term.to_string()),
    }
}

pub async fn ui_loop(
    mode: UiMode,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let ui_config = config.read().await.ui.clone();

    match mode {
        UiMode::OneShot(term) => {
            one_shot(term, app_to_ui_rx, ui_to_app_tx, &ui_config, cancel).await
        }
        UiMode::Interactive => interactive(app_to_ui_rx, ui_to_app_tx, &ui_config, cancel).await,
    }
}

async fn one_shot(
    term: String,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    ui_config: &UiConfig,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    // The driver starts no cycle for blank input, so there is nothing to wait for
    if DefaultPreprocessor.process(&term).is_empty() {
        println!("Nothing to search for.");
        ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
        return Ok(());
    }

    ui_to_app_tx.send(AppEvent::Search(term)).await?;

    let mut current: Option<SearchCycle> = None;
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = app_to_ui_rx.recv() => event?,
        };

        match &event {
            AppEvent::Searching { cycle, .. } => current = Some(*cycle),
            AppEvent::CycleSettled(cycle) if current == Some(*cycle) => {
                let _ = ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await;
                break;
            }
            _ => {}
        }

        if let Some(text) = render_event(&event, ui_config) {
            println!("{text}");
        }
    }

    Ok(())
}

async fn interactive(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    ui_config: &UiConfig,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let lines = spawn_stdin_reader();
    print_prompt(&ui_config.prompt)?;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.recv() => {
                // Reader thread gone means stdin hit EOF
                let Ok(line) = line else {
                    let _ = ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await;
                    break;
                };

                match parse_command(&line) {
                    Command::Quit => {
                        ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
                        break;
                    }
                    Command::Search(term) => {
                        ui_to_app_tx.send(AppEvent::Search(term)).await?;
                    }
                    Command::Nothing => print_prompt(&ui_config.prompt)?,
                }
            }
            event = app_to_ui_rx.recv() => {
                let event = event?;
                if let Some(text) = render_event(&event, ui_config) {
                    println!("{text}");
                }
                if matches!(event, AppEvent::CycleSettled(_)) {
                    print_prompt(&ui_config.prompt)?;
                }
            }
        }
    }

    Ok(())
}

/// Blocking stdin reads live on their own thread so shutdown never waits on them
fn spawn_stdin_reader() -> AsyncReceiver<String> {
    let (tx, rx) = kanal::bounded::<String>(16);

    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    });

    rx.to_async()
}

fn print_prompt(prompt: &str) -> io::Result<()> {
    print!("{prompt}");
    io::stdout().flush()
}

pub(crate) fn render_event(event: &AppEvent, ui_config: &UiConfig) -> Option<String> {
    match event {
        AppEvent::Searching { term, .. } => Some(format!("Searching for '{term}'...")),
        AppEvent::ShowEntry(entry) => Some(render_entry(entry, ui_config)),
        AppEvent::ShowIllustration(illustration) => {
            Some(format!("Illustration: {}", illustration.image_url))
        }
        AppEvent::ShowNotice(notice) => Some(format!("{}: {}", notice.title, notice.description)),
        _ => None,
    }
}

pub(crate) fn render_entry(entry: &WordEntry, ui_config: &UiConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Showing definition for '{}':", entry.word);

    if ui_config.show_phonetics {
        for phonetic in &entry.phonetics {
            match &phonetic.audio {
                Some(audio) => {
                    let _ = writeln!(out, "    {} ({})", phonetic.text, audio);
                }
                None => {
                    let _ = writeln!(out, "    {}", phonetic.text);
                }
            }
        }
    }

    for meaning in &entry.meanings {
        let _ = writeln!(out, "    {}:", meaning.part_of_speech);
        let shown = meaning
            .definitions
            .iter()
            .take(ui_config.max_definitions_per_meaning);
        for (index, definition) in shown.enumerate() {
            let _ = writeln!(out, "        {}. {}", index + 1, definition.text);
            if let Some(example) = &definition.example {
                let _ = writeln!(out, "           example: {example}");
            }
            if !definition.synonyms.is_empty() {
                let _ = writeln!(out, "           synonyms: {}", definition.synonyms.join(", "));
            }
            if !definition.antonyms.is_empty() {
                let _ = writeln!(out, "           antonyms: {}", definition.antonyms.join(", "));
            }
        }
        let hidden = meaning
            .definitions
            .len()
            .saturating_sub(ui_config.max_definitions_per_meaning);
        if hidden > 0 {
            let _ = writeln!(out, "        ({hidden} more)");
        }
        if !meaning.synonyms.is_empty() {
            let _ = writeln!(out, "        synonyms: {}", meaning.synonyms.join(", "));
        }
        if !meaning.antonyms.is_empty() {
            let _ = writeln!(out, "        antonyms: {}", meaning.antonyms.join(", "));
        }
    }

    out.trim_end().to_string()
}
