//! Content shown inside the shell for paths no view handles

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct NotFound<'a> {
    path: &'a str,
}

impl<'a> NotFound<'a> {
    pub fn new(path: &'a str) -> Self {
        Self { path }
    }
}

impl Widget for NotFound<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let top = area.y + area.height.saturating_sub(4) / 2;
        let rect = Rect {
            y: top,
            height: area.bottom() - top,
            ..area
        };

        Paragraph::new(vec![
            Line::from(Span::styled("404", styles::accent_bold())),
            Line::from(Span::styled(
                format!("Nothing lives at {}", self.path),
                styles::text_secondary(),
            )),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Pick a view from the sidebar or press ", styles::text_muted()),
                Span::styled("Esc", styles::keybinding()),
                Span::styled(" to go home.", styles::text_muted()),
            ]),
        ])
        .alignment(Alignment::Center)
        .render(rect, buf);
    }
}
