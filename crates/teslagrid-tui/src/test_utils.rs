//! Test utilities for TUI rendering verification
//!
//! Widgets and full screens are rendered into ratatui's `TestBackend` and
//! inspected as text or cell-by-cell.
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! term.draw_with(|frame| view(frame, &state));
//! assert!(term.buffer_contains("Network Health"));
//! ```

use ratatui::backend::TestBackend;
use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;
use teslagrid_app::AppState;

/// Standard test terminal size; wide enough for the sidebar plus table
pub const TEST_WIDTH: u16 = 120;
pub const TEST_HEIGHT: u16 = 36;

/// Narrow terminal for testing responsive layouts
pub const COMPACT_WIDTH: u16 = 60;
pub const COMPACT_HEIGHT: u16 = 20;

/// Wrapper around a `TestBackend` terminal.
pub struct TestTerminal {
    /// The underlying terminal, for operations the wrapper does not cover
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Standard dimensions (120x36)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Compact dimensions (60x20)
    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame (e.g. `render::view`)
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        line_content(self.buffer(), line).contains(text)
    }

    /// Text of one row
    pub fn line(&self, line: u16) -> String {
        line_content(self.buffer(), line)
    }

    /// Index of the first row containing `text`
    pub fn find_line(&self, text: &str) -> Option<u16> {
        let buffer = self.buffer();
        (0..buffer.area.height).find(|&y| line_content(buffer, y).contains(text))
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        let buffer = self.buffer();
        if x < buffer.area.width && y < buffer.area.height {
            Some(&buffer[(x, y)])
        } else {
            None
        }
    }

    /// All cells of one row
    pub fn row_cells(&self, y: u16) -> Vec<&Cell> {
        let width = self.buffer().area.width;
        (0..width).filter_map(|x| self.cell(x, y)).collect()
    }

    /// Full content as text, one line per row
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// AppState positioned at `path`
pub fn state_at(path: &str) -> AppState {
    let mut state = AppState::new();
    state.navigate(path);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_sizes() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);

        let term = TestTerminal::compact();
        assert_eq!(term.area().width, COMPACT_WIDTH);
    }

    #[test]
    fn test_buffer_queries() {
        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(Paragraph::new("\nHello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
        assert!(term.line_contains(1, "Hello"));
        assert_eq!(term.find_line("World"), Some(1));
        assert_eq!(term.cell(0, 1).map(|c| c.symbol()), Some("H"));
        assert!(term.cell(20, 0).is_none());
    }
}
