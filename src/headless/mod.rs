//! Headless mode - NDJSON view output for scripting and E2E testing
//!
//! Instead of drawing to a terminal, every processed message produces one
//! JSON line on stdout describing the screen that would have been rendered.
//! Commands are read line by line from stdin.
//!
//! # Example Output
//!
//! ```json
//! {"event":"view","timestamp":1704700001000,"screen":{"path":"/","route":"landing",...}}
//! {"event":"error","message":"Unknown headless command: jump","fatal":false,"timestamp":1704700002000}
//! {"event":"quit","timestamp":1704700003000}
//! ```

pub mod command;
pub mod runner;

use std::io::Write;

use chrono::Utc;
use serde::Serialize;
use teslagrid_app::ScreenModel;
use teslagrid_core::prelude::*;

pub use runner::run_headless;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// The screen after a message was processed
    View { screen: ScreenModel, timestamp: i64 },

    /// A command could not be handled
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },

    /// Headless loop is exiting
    Quit { timestamp: i64 },
}

impl HeadlessEvent {
    /// Write this event as a single NDJSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn view(screen: ScreenModel) -> Self {
        Self::View {
            screen,
            timestamp: Self::now(),
        }
    }

    pub fn error(error: &Error) -> Self {
        Self::Error {
            message: error.to_string(),
            fatal: error.is_fatal(),
            timestamp: Self::now(),
        }
    }

    pub fn quit() -> Self {
        Self::Quit {
            timestamp: Self::now(),
        }
    }
}
