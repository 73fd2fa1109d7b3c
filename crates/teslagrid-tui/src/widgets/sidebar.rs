//! Dashboard sidebar: brand, navigation entries and the settings link

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use teslagrid_app::view_model::NavItem;

use crate::theme::{icons::IconSet, palette, styles};

use super::view_title::truncate_to_width;

/// Persistent navigation frame of the dashboard shell
pub struct Sidebar<'a> {
    items: &'a [NavItem],
    icons: IconSet,
}

impl<'a> Sidebar<'a> {
    pub fn new(items: &'a [NavItem], icons: IconSet) -> Self {
        Self { items, icons }
    }

    fn nav_line(&self, index: usize, item: &NavItem, width: u16) -> Line<'static> {
        let hint = format!("{}", index + 1);
        let (marker, icon_style, label_style) = if item.active {
            (
                Span::styled("\u{258e}", styles::accent()), // ▎
                styles::accent(),
                styles::selected_highlight(),
            )
        } else {
            (
                Span::raw(" "),
                styles::text_muted(),
                styles::text_secondary(),
            )
        };

        // marker + space + icon + space + label + hint
        let label_room = (width as usize).saturating_sub(6 + hint.len());
        let label = truncate_to_width(item.label, label_room);
        let padding = label_room.saturating_sub(unicode_width::UnicodeWidthStr::width(label.as_str()));

        let line = Line::from(vec![
            marker,
            Span::raw(" "),
            Span::styled(self.icons.nav(item.icon), icon_style),
            Span::raw(" "),
            Span::styled(label, label_style),
            Span::styled(" ".repeat(padding + 1), label_style),
            Span::styled(hint, styles::text_muted()),
        ]);
        if item.active {
            line.style(Style::default().bg(palette::SURFACE))
        } else {
            line
        }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let brand = Line::from(vec![
            Span::styled(" \u{258c} ", Style::default().fg(palette::ACCENT_FILL)), // ▌
            Span::styled(
                "TeslaGrid",
                Style::default()
                    .fg(palette::TEXT_BRIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        buf.set_line(inner.x, inner.y, &brand, inner.width);

        // Entries start after a blank row
        for (i, item) in self.items.iter().enumerate() {
            let y = inner.y + 2 + i as u16;
            if y >= inner.bottom() {
                break;
            }
            let line = self.nav_line(i, item, inner.width);
            buf.set_line(inner.x, y, &line, inner.width);
        }

        // Settings link pinned to the bottom row
        let settings_y = inner.bottom() - 1;
        if settings_y > inner.y + 1 + self.items.len() as u16 {
            let settings = Line::from(vec![
                Span::raw("  "),
                Span::styled(self.icons.settings(), styles::text_muted()),
                Span::styled(" Settings ", styles::text_muted()),
                Span::styled("s", styles::keybinding()),
            ]);
            buf.set_line(inner.x, settings_y, &settings, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{state_at, TestTerminal};
    use teslagrid_app::config::IconMode;
    use teslagrid_app::ScreenModel;

    fn render(path: &str) -> TestTerminal {
        let screen = ScreenModel::from_state(&state_at(path));
        let mut term = TestTerminal::with_size(26, 12);
        term.render_widget(
            Sidebar::new(&screen.nav, IconSet::new(IconMode::Unicode)),
            term.area(),
        );
        term
    }

    fn active_rows(term: &TestTerminal) -> Vec<u16> {
        (0..12)
            .filter(|&y| term.line_contains(y, "\u{258e}"))
            .collect()
    }

    #[test]
    fn test_renders_all_entries_in_order() {
        let term = render("/dashboard/network");
        let network = term.find_line("Network Health").unwrap();
        let orders = term.find_line("Work Orders").unwrap();
        let forecast = term.find_line("Forecast").unwrap();
        assert!(network < orders && orders < forecast);
        assert!(term.buffer_contains("TeslaGrid"));
        assert!(term.buffer_contains("Settings"));
    }

    #[test]
    fn test_only_the_matching_entry_is_highlighted() {
        let term = render("/dashboard/work-orders");
        let rows = active_rows(&term);
        assert_eq!(rows, vec![term.find_line("Work Orders").unwrap()]);
    }

    #[test]
    fn test_nested_path_highlights_prefix_entry() {
        let term = render("/dashboard/forecast/weekly");
        assert_eq!(active_rows(&term), vec![term.find_line("Forecast").unwrap()]);
    }

    #[test]
    fn test_unknown_path_highlights_nothing() {
        let term = render("/case-study");
        assert!(active_rows(&term).is_empty());
    }

    #[test]
    fn test_sidebar_snapshot() {
        let screen = ScreenModel::from_state(&state_at("/dashboard/network"));
        let mut term = TestTerminal::with_size(26, 8);
        term.render_widget(
            Sidebar::new(&screen.nav, IconSet::new(IconMode::Unicode)),
            term.area(),
        );

        insta::assert_snapshot!(term.content(), @r"
        ╭────────────────────────╮
        │ ▌ TeslaGrid            │
        │                        │
        │▎ ~ Network Health    1 │
        │  ϟ Work Orders       2 │
        │  ▇ Forecast          3 │
        │  ⚙ Settings s          │
        ╰────────────────────────╯
        ");
    }
}
