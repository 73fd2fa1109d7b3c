//! Headless mode runner - main event loop without TUI
//!
//! Reads commands from stdin on a blocking thread, processes them through
//! the same update loop as the TUI and writes one `view` event per message.
//! Rejected commands travel through the same channel as accepted ones, so
//! every event on stdout appears in command order.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use teslagrid_app::config::Settings;
use teslagrid_app::process::process_message;
use teslagrid_app::signals;
use teslagrid_app::{AppState, Message, ScreenModel};
use teslagrid_core::prelude::*;
use tokio::sync::mpsc;

use super::command::parse_command;
use super::HeadlessEvent;

/// One stdin line after parsing
#[derive(Debug)]
pub enum HeadlessInput {
    Command(Message),
    Rejected(Error),
}

impl HeadlessInput {
    /// Classify a raw stdin line; blank lines produce nothing
    pub fn from_line(line: &str) -> Option<Self> {
        match parse_command(line) {
            Ok(Some(msg)) => Some(Self::Command(msg)),
            Ok(None) => None,
            Err(e) => {
                warn!("Rejected headless command {:?}: {}", line, e);
                Some(Self::Rejected(e))
            }
        }
    }
}

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless(
    settings: Settings,
    config_path: Option<PathBuf>,
    start_path: Option<&str>,
) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("TeslaGrid starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    let mut state = AppState::with_settings(settings, config_path);
    if let Some(path) = start_path {
        state.navigate(path);
    }
    info!("Start path: {}", state.path);

    let (signal_tx, signal_rx) = mpsc::channel::<Message>(1);
    let signal_task = signals::spawn_signal_handler(signal_tx);

    // Spawn headless-specific stdin reader
    let (input_tx, input_rx) = mpsc::channel::<HeadlessInput>(64);
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(input_tx);
    });

    let mut stdout = io::stdout();
    let result = headless_event_loop(&mut state, input_rx, signal_rx, &mut stdout).await;

    signal_task.abort();
    info!("TeslaGrid headless mode exiting");
    result
}

/// Main headless event loop
///
/// Emits the initial view, then one event per input: a view for an
/// accepted command, an error for a rejected one. Stops after a quit is
/// processed or when stdin input ends.
async fn headless_event_loop<W: Write>(
    state: &mut AppState,
    mut input_rx: mpsc::Receiver<HeadlessInput>,
    mut signal_rx: mpsc::Receiver<Message>,
    out: &mut W,
) -> Result<()> {
    HeadlessEvent::view(ScreenModel::from_state(state)).write_to(out)?;

    loop {
        let input = tokio::select! {
            Some(msg) = signal_rx.recv() => HeadlessInput::Command(msg),
            input = input_rx.recv() => match input {
                Some(input) => input,
                None => {
                    info!("Input channel closed");
                    break;
                }
            },
        };

        match input {
            HeadlessInput::Command(msg) => {
                debug!("Headless message: {:?}", msg);
                process_message(state, msg);

                if state.should_quit() {
                    break;
                }

                HeadlessEvent::view(ScreenModel::from_state(state)).write_to(out)?;
            }
            HeadlessInput::Rejected(e) => HeadlessEvent::error(&e).write_to(out)?,
        }
    }

    HeadlessEvent::quit().write_to(out)?;
    Ok(())
}

/// Read stdin line by line and forward every non-blank line.
///
/// Runs on a dedicated OS thread because stdin reads block. End of input
/// sends a quit so piped scripts terminate cleanly.
fn spawn_stdin_reader_blocking(tx: mpsc::Sender<HeadlessInput>) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };

        let Some(input) = HeadlessInput::from_line(&line) else {
            continue;
        };
        if let Err(e) = tx.blocking_send(input) {
            // Event loop has exited
            debug!("{}", Error::channel_send(e.to_string()));
            return;
        }
    }

    info!("stdin closed, requesting quit");
    let _ = tx.blocking_send(HeadlessInput::Command(Message::Quit));
}
