//! Screen layout definitions for the TUI
//!
//! The landing view takes the whole screen. Every other route renders inside
//! the dashboard shell: a sidebar on the left, a header strip across the
//! top of the remaining space, and the content area below it.

use ratatui::layout::{Constraint, Layout, Rect};

/// Preferred sidebar width (border included)
pub const SIDEBAR_WIDTH: u16 = 26;

/// Header strip height (top border + status row + bottom border)
pub const HEADER_HEIGHT: u16 = 3;

/// Areas of the dashboard shell
#[derive(Debug, Clone, Copy)]
pub struct ShellAreas {
    /// Brand, navigation entries and the settings link
    pub sidebar: Rect,

    /// Fleet status and key hints
    pub header: Rect,

    /// Active view
    pub content: Rect,
}

/// Split the screen into sidebar, header and content.
///
/// The sidebar shrinks to a third of the width on narrow terminals.
pub fn create_shell(area: Rect) -> ShellAreas {
    let sidebar_width = SIDEBAR_WIDTH.min(area.width / 3);
    let [sidebar, main] =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)]).areas(area);
    let [header, content] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(main);

    ShellAreas {
        sidebar,
        header,
        content,
    }
}

/// Split a view into its title block (title + subtitle) and body
pub fn split_view_header(area: Rect) -> (Rect, Rect) {
    let [title, _gap, body] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);
    (title, body)
}
