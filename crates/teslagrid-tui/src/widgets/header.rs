//! Header strip of the dashboard shell
//!
//! Shows the network status dot and fleet uptime on the left. The right side
//! carries the search field, the notification bell and the key hints. The
//! search field and bell are display-only. When the strip is too narrow the
//! search field shrinks to its icon, then the search and bell go, then the
//! hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use teslagrid_core::fixtures::FLEET_UPTIME;

use crate::theme::{icons::IconSet, palette, styles};

pub struct ShellHeader {
    icons: IconSet,
}

impl ShellHeader {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }

    fn status_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.dot(), Style::default().fg(palette::STATUS_GREEN)),
            Span::styled(" Network Online ", styles::text_secondary()),
            Span::styled("\u{2502}", styles::border_inactive()), // │
            Span::styled(
                format!(" Global Fleet: {:.1}% Uptime", FLEET_UPTIME),
                styles::text_secondary(),
            ),
        ])
    }

    fn hints_spans() -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (key, label) in [("Tab", "Nav"), ("i", "Icons"), ("q", "Quit")] {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!("] {}  ", label), styles::text_muted()));
        }
        spans.push(Span::styled("Case Study ", styles::text_primary()));
        spans
    }

    fn search_spans(&self, compact: bool) -> Vec<Span<'static>> {
        let field = Style::default().bg(palette::SURFACE);
        let mut spans = vec![Span::styled(
            format!(" {} ", self.icons.search()),
            field.fg(palette::TEXT_MUTED),
        )];
        if !compact {
            spans.push(Span::styled(
                format!("{} ", SEARCH_PLACEHOLDER),
                field.fg(palette::TEXT_FAINT),
            ));
        }
        spans.push(Span::raw("  "));
        spans
    }

    fn bell_spans(&self) -> Vec<Span<'static>> {
        vec![
            Span::styled(self.icons.bell(), styles::text_secondary()),
            Span::raw("  "),
        ]
    }

    /// Widest right-hand group that fits in `available` columns
    fn right_line(&self, available: u16) -> Option<Line<'static>> {
        // (search field, compact search, bell)
        let candidates = [
            (true, false, true),
            (true, true, true),
            (false, false, true),
            (false, false, false),
        ];
        candidates.into_iter().find_map(|(search, compact, bell)| {
            let mut spans = Vec::new();
            if search {
                spans.extend(self.search_spans(compact));
            }
            if bell {
                spans.extend(self.bell_spans());
            }
            spans.extend(Self::hints_spans());
            let line = Line::from(spans);
            (line.width() as u16 <= available).then_some(line)
        })
    }
}

const SEARCH_PLACEHOLDER: &str = "Search station or ID...";

impl Widget for ShellHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let status = self.status_line();
        let status_width = status.width() as u16;
        buf.set_line(inner.x, inner.y, &status, inner.width);

        // Right-hand group only when it fits beside the status
        let available = inner.width.saturating_sub(status_width + 2);
        if let Some(right) = self.right_line(available) {
            let width = right.width() as u16;
            buf.set_line(inner.right() - width, inner.y, &right, width);
        }
    }
}
