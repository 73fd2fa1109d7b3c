//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::state::ViewMode;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal (or headless command)
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Go to a path (canonicalized on arrival)
    Navigate(String),
    /// Next sidebar entry, wrapping
    NavigateNext,
    /// Previous sidebar entry, wrapping
    NavigatePrevious,

    // ─────────────────────────────────────────────────────────
    // Network Health Messages
    // ─────────────────────────────────────────────────────────
    ToggleViewMode,
    SetViewMode(ViewMode),

    // ─────────────────────────────────────────────────────────
    // Selection Messages (network rows, work-order cards)
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrevious,
    /// Assign affordance on the selected work order (visual only)
    AssignSelected,

    // ─────────────────────────────────────────────────────────
    // Forecast Messages
    // ─────────────────────────────────────────────────────────
    HoverNext,
    HoverPrevious,
    ClearHover,

    // ─────────────────────────────────────────────────────────
    // Settings Messages
    // ─────────────────────────────────────────────────────────
    /// Switch between Unicode and Nerd Font icons and persist the choice
    ToggleIcons,
}
