//! Landing view shown at `/`, outside the dashboard shell

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use teslagrid_core::fixtures::{
    StatCard, LANDING_DISCLAIMER, LANDING_INTRO, LANDING_PILLS, LANDING_STATS, PRODUCT_TITLE,
    READING_GUIDE,
};

use crate::theme::{icons::IconSet, palette, styles};

use super::view_title::pill;

/// Content column width cap so long lines stay readable
const MAX_CONTENT_WIDTH: u16 = 100;
const STAT_CARD_HEIGHT: u16 = 8;
/// Below this width the stat cards stack vertically
const MIN_WIDTH_FOR_STAT_ROW: u16 = 72;

pub struct Landing {
    icons: IconSet,
}

impl Landing {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }

    fn launch_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled("] ", styles::text_muted()),
            Span::styled(
                format!(" Launch Live Demo {} ", self.icons.arrow_right()),
                styles::focused_selected(),
            ),
        ])
    }
}

impl Widget for Landing {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::DEEPEST_BG));
        if area.width < 4 || area.height < 4 {
            return;
        }

        let width = area.width.saturating_sub(4).min(MAX_CONTENT_WIDTH);
        let column = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + 1,
            width,
            height: area.height - 1,
        };

        let stats_height = if width >= MIN_WIDTH_FOR_STAT_ROW {
            STAT_CARD_HEIGHT
        } else {
            STAT_CARD_HEIGHT * LANDING_STATS.len() as u16
        };

        let [pills, title, intro, launch, stats, guide, disclaimer, hints] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Length(2),
            Constraint::Length(stats_height),
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .areas(column);

        let mut spans = Vec::new();
        for label in LANDING_PILLS {
            spans.extend(pill(label, styles::accent()).spans);
            spans.push(Span::raw(" "));
        }
        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: true })
            .render(pills, buf);

        Paragraph::new(Line::from(Span::styled(PRODUCT_TITLE, styles::text_bright_bold())))
            .wrap(Wrap { trim: true })
            .render(title, buf);

        Paragraph::new(Line::from(Span::styled(LANDING_INTRO, styles::text_secondary())))
            .wrap(Wrap { trim: true })
            .render(intro, buf);

        buf.set_line(launch.x, launch.y, &self.launch_line(), launch.width);

        render_stat_cards(stats, buf);
        render_reading_guide(guide, buf);

        Paragraph::new(Line::from(Span::styled(
            LANDING_DISCLAIMER,
            styles::text_muted().add_modifier(Modifier::ITALIC),
        )))
        .wrap(Wrap { trim: true })
        .render(disclaimer, buf);

        let hint = Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("1-3", styles::keybinding()),
            Span::styled("] Jump to a view  [", styles::text_muted()),
            Span::styled("q", styles::keybinding()),
            Span::styled("] Quit", styles::text_muted()),
        ]);
        buf.set_line(hints.x, hints.bottom().saturating_sub(1), &hint, hints.width);
    }
}

fn render_stat_cards(area: Rect, buf: &mut Buffer) {
    let count = LANDING_STATS.len() as u32;
    let cards = if area.width >= MIN_WIDTH_FOR_STAT_ROW {
        Layout::horizontal((0..count).map(|_| Constraint::Ratio(1, count))).split(area)
    } else {
        Layout::vertical((0..count).map(|_| Constraint::Length(STAT_CARD_HEIGHT))).split(area)
    };

    for (card, stat) in cards.iter().zip(LANDING_STATS.iter()) {
        render_stat_card(stat, *card, buf);
    }
}

fn render_stat_card(stat: &StatCard, area: Rect, buf: &mut Buffer) {
    let mut lines = vec![
        Line::from(Span::styled(stat.label.to_uppercase(), styles::text_muted())),
        Line::from(Span::styled(
            stat.value,
            styles::text_primary().add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(sublabel) = stat.sublabel {
        lines.push(Line::from(Span::styled(sublabel, styles::text_secondary())));
    }
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(styles::glass_block(false))
        .render(area, buf);
}

fn render_reading_guide(area: Rect, buf: &mut Buffer) {
    let mut lines = vec![
        Line::from(Span::styled(
            "HOW TO READ THIS PAGE",
            styles::accent().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "In about a minute, you should be able to understand:",
            styles::text_secondary(),
        )),
    ];
    for item in READING_GUIDE {
        lines.push(Line::from(vec![
            Span::styled("  \u{2022} ", styles::accent()),
            Span::styled(item, styles::text_secondary()),
        ]));
    }
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use teslagrid_app::config::IconMode;

    fn render(width: u16, height: u16) -> TestTerminal {
        let mut term = TestTerminal::with_size(width, height);
        term.render_widget(Landing::new(IconSet::new(IconMode::Unicode)), term.area());
        term
    }

    #[test]
    fn test_landing_copy() {
        let term = render(120, 40);
        assert!(term.buffer_contains("TeslaGrid"));
        assert!(term.buffer_contains("Internal PM Case Study"));
        assert!(term.buffer_contains("Launch Live Demo"));
        assert!(term.buffer_contains("HOW TO READ THIS PAGE"));
        for stat in LANDING_STATS {
            let label = stat.label.to_uppercase();
            assert!(term.buffer_contains(&label), "missing {}", label);
        }
        assert!(term.buffer_contains("Product Manager"));
    }

    #[test]
    fn test_stat_cards_share_a_row_when_wide() {
        let term = render(120, 40);
        let row = term.find_line("PRIMARY PROBLEM").unwrap();
        assert!(term.line_contains(row, "MY ROLE"));
    }

    #[test]
    fn test_stat_cards_stack_when_narrow() {
        let term = render(60, 60);
        let first = term.find_line("PRIMARY PROBLEM").unwrap();
        let last = term.find_line("MY ROLE").unwrap();
        assert!(last > first);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        render(3, 3);
        render(20, 8);
    }
}
