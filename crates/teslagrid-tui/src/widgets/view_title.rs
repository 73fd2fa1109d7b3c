//! Title block shared by the dashboard views
//!
//! Renders a bold title with a muted subtitle below it and optional
//! right-aligned pills on the title row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

pub struct ViewTitle<'a> {
    title: &'a str,
    subtitle: String,
    pills: Vec<Line<'a>>,
}

impl<'a> ViewTitle<'a> {
    pub fn new(title: &'a str, subtitle: impl Into<String>) -> Self {
        Self {
            title,
            subtitle: subtitle.into(),
            pills: Vec::new(),
        }
    }

    /// Add a right-aligned pill; pills are laid out right to left
    pub fn pill(mut self, pill: Line<'a>) -> Self {
        self.pills.push(pill);
        self
    }
}

impl Widget for ViewTitle<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let title = Line::from(Span::styled(self.title, styles::text_bright_bold()));
        let title_width = title.width() as u16;
        buf.set_line(area.x, area.y, &title, area.width);

        if area.height > 1 {
            let subtitle = truncate_to_width(&self.subtitle, area.width as usize);
            let line = Line::from(Span::styled(subtitle, styles::text_secondary()));
            buf.set_line(area.x, area.y + 1, &line, area.width);
        }

        // Pills right to left; stop before colliding with the title
        let mut right = area.right();
        for pill in &self.pills {
            let width = pill.width() as u16;
            let Some(x) = right.checked_sub(width) else {
                break;
            };
            if x < area.x + title_width + 2 {
                break;
            }
            buf.set_line(x, area.y, pill, width);
            right = x.saturating_sub(2);
        }
    }
}

/// Bracketed pill such as `[ Next 7 Days ]`
pub fn pill<'a>(text: impl Into<String>, style: Style) -> Line<'a> {
    Line::from(vec![
        Span::styled("[ ", styles::text_muted()),
        Span::styled(text.into(), style),
        Span::styled(" ]", styles::text_muted()),
    ])
}

/// Shorten `text` to at most `max_width` columns, ending with `…` when cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push('…');
    result
}
