//! Main TUI runner - entry point and event loop

use std::path::PathBuf;

use teslagrid_app::config::Settings;
use teslagrid_app::process::process_message;
use teslagrid_app::signals;
use teslagrid_app::{AppState, Message};
use teslagrid_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the interactive terminal UI until the user quits or a signal arrives.
///
/// `config_path` is where icon changes are saved; pass `None` to keep them
/// in memory only. `start_path` overrides `settings.ui.start_path` for this
/// run without being persisted.
pub async fn run(
    settings: Settings,
    config_path: Option<PathBuf>,
    start_path: Option<&str>,
) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut state = AppState::with_settings(settings, config_path);
    if let Some(path) = start_path {
        state.navigate(path);
    }
    info!("Starting TUI at {}", state.path);

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    // Unified channel for messages that do not come from the terminal
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    let signal_task = signals::spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx);

    signal_task.abort();

    finish(result, ratatui::try_restore())
}

/// Combine the loop outcome with terminal restoration; a loop error wins
fn finish(result: Result<()>, restored: std::io::Result<()>) -> Result<()> {
    let restored = restored.map_err(|e| Error::TerminalRestore(e.to_string()));
    result.and(restored)
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (from signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }
        if state.should_quit() {
            break;
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    info!("TUI exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_failure_is_reported_as_fatal() {
        let restored = Err(std::io::Error::other("raw mode stuck"));
        let err = finish(Ok(()), restored).unwrap_err();
        assert!(matches!(err, Error::TerminalRestore(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_loop_error_wins_over_restore_error() {
        let restored = Err(std::io::Error::other("raw mode stuck"));
        let err = finish(Err(Error::terminal("draw failed")), restored).unwrap_err();
        assert!(matches!(err, Error::Terminal { .. }));
    }

    #[test]
    fn test_clean_exit() {
        assert!(finish(Ok(()), Ok(())).is_ok());
    }
}
