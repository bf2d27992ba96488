mod app;
mod config;
mod logging;
mod session;
mod speech;
mod ui;
mod wordlist;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::speech::{Speaker, Synthesize};
use crate::wordlist::{parser, sample};
use anyhow::{Context, Result};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    if let Some(path) = logging::init(&cfg.logging)? {
        tracing::info!(log = %path.display(), "spellbee starting");
    }
    let speaker = Speaker::from_config(&cfg).context("Failed to set up speech")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, cfg, &speaker).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, cfg: config::AppConfig, speaker: &Speaker) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();
    let mut state = AppState::new(cfg);

    // Spawn terminal input task
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(event) = reader.next().await {
            let event = match event {
                Ok(event) => AppEvent::Terminal(event),
                Err(e) => AppEvent::InputClosed {
                    error: e.to_string(),
                },
            };
            let closed = matches!(event, AppEvent::InputClosed { .. });
            if event_tx.send(event).is_err() || closed {
                break;
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop: one event, one transition, one render, then any
    // pronunciation it armed. Events queue up while audio plays.
    while let Some(event) = event_rx.recv().await {
        let actions = handler::handle_event(&mut state, event);
        for action in actions {
            apply_action(&mut state, action);
        }

        if state.should_quit {
            break;
        }

        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }

        if let Some(word) = state.session.consume_pronounce() {
            pronounce(terminal, &mut state, speaker, &word).await?;
        }
    }

    tracing::info!("spellbee exiting");
    Ok(())
}

fn apply_action(state: &mut AppState, action: Action) {
    match action {
        Action::LoadFile { path } => {
            let loaded = parser::read_upload(&path).and_then(|raw| {
                state.session.load(&raw).map(|list| list.len())
            });
            match loaded {
                Ok(count) => {
                    tracing::info!(path = %path, count, "loaded word list");
                    state.info(format!("Loaded {} words from {}", count, path.trim()));
                }
                Err(e) => {
                    state.error(format!("Error loading file: {}", e));
                    // Keep the path so it can be corrected
                    state.input.set_text(path);
                }
            }
        }
        Action::ExportSample => match sample::export_sample(&state.config.sample.export_dir) {
            Ok(path) => {
                tracing::info!(path = %path.display(), "exported sample word list");
                state.info(format!("Sample word list saved to {}", path.display()));
            }
            Err(e) => state.error(format!("Error saving sample file: {:#}", e)),
        },
        Action::Quit => state.should_quit = true,
    }
    state.dirty = true;
}

/// Speak `word`, showing a speaking indicator meanwhile. Failures are
/// reported in the status bar; the pronounce request is already consumed.
async fn pronounce<B: Backend, S: Synthesize>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    speaker: &Speaker<S>,
    word: &str,
) -> Result<()> {
    state.speaking = true;
    terminal.draw(|f| ui::render(f, state))?;

    let result = speaker.speak(word).await;

    state.speaking = false;
    if let Err(e) = result {
        let text = match e.hint() {
            Some(hint) => format!("Error pronouncing word: {} ({})", e, hint),
            None => format!("Error pronouncing word: {}", e),
        };
        state.error(text);
    }
    terminal.draw(|f| ui::render(f, state))?;
    state.dirty = false;
    Ok(())
}
