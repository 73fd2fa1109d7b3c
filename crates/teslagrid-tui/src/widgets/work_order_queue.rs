//! Work-order queue view
//!
//! Cards are drawn in the order given; the position is the rank.
//!
//! ```text
//! ╭─────────────────────────────────────────────────────────────────────╮
//! │ #1            Daly City - Serramonte   WO-2941             Assign → │
//! │ 98            Cabinet 2 Thermal Fault                               │
//! │ Impact Score  ⏱ SLA Breach: 4 hours   Est. Minutes Saved: 14,500    │
//! ╰─────────────────────────────────────────────────────────────────────╯
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use teslagrid_app::view_model::{QueueAction, QueueEntry};
use teslagrid_core::fixtures::IMPACT_MODEL;

use crate::layout::split_view_header;
use crate::theme::{icons::IconSet, palette, styles};

use super::view_title::{pill, ViewTitle};

/// Card height: border + 3 content rows + border
pub const CARD_HEIGHT: u16 = 5;

/// Width of the rank / impact column inside a card
const SCORE_COLUMN_WIDTH: u16 = 14;

pub struct WorkOrderQueue<'a> {
    entries: &'a [QueueEntry],
    selected: usize,
    icons: IconSet,
}

impl<'a> WorkOrderQueue<'a> {
    pub fn new(entries: &'a [QueueEntry], selected: usize, icons: IconSet) -> Self {
        Self {
            entries,
            selected,
            icons,
        }
    }

    fn render_card(&self, entry: &QueueEntry, selected: bool, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(selected);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width <= SCORE_COLUMN_WIDTH {
            return;
        }

        // Rank, impact score and caption
        let score_lines = [
            Line::from(Span::styled(format!("#{}", entry.rank), styles::text_muted())),
            Line::from(Span::styled(
                entry.impact_score.to_string(),
                styles::accent_bold(),
            )),
            Line::from(Span::styled("Impact Score", styles::text_muted())),
        ];
        for (i, line) in score_lines.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }
            buf.set_line(inner.x, y, line, SCORE_COLUMN_WIDTH);
        }

        let detail_x = inner.x + SCORE_COLUMN_WIDTH;
        let detail_width = inner.width - SCORE_COLUMN_WIDTH;

        let station = Line::from(vec![
            Span::styled(
                entry.station,
                styles::text_primary().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!(" {} ", entry.id),
                Style::default()
                    .fg(palette::TEXT_SECONDARY)
                    .bg(palette::TRACK_BG),
            ),
        ]);
        buf.set_line(detail_x, inner.y, &station, detail_width);

        // Action affordance right-aligned on the station row
        let action = self.action_line(&entry.action);
        let action_width = action.width() as u16;
        if station.width() as u16 + action_width + 2 <= detail_width {
            buf.set_line(inner.right() - action_width - 1, inner.y, &action, action_width);
        }

        if inner.height > 1 {
            let issue = Line::from(Span::styled(entry.issue, styles::text_secondary()));
            buf.set_line(detail_x, inner.y + 1, &issue, detail_width);
        }

        if inner.height > 2 {
            let meta = Line::from(vec![
                Span::styled(self.icons.clock(), styles::text_muted()),
                Span::styled(" SLA Breach: ", styles::text_muted()),
                Span::styled(entry.sla_breach_in, Style::default().fg(palette::STATUS_RED)),
                Span::styled("   Est. Minutes Saved: ", styles::text_muted()),
                Span::styled(
                    entry.minutes_saved_text.clone(),
                    Style::default().fg(palette::STATUS_GREEN),
                ),
            ]);
            buf.set_line(detail_x, inner.y + 2, &meta, detail_width);
        }
    }

    fn action_line(&self, action: &QueueAction) -> Line<'static> {
        match action {
            QueueAction::Technician(name) => Line::from(vec![
                Span::styled(self.icons.dot(), Style::default().fg(palette::STATUS_GREEN)),
                Span::styled(format!(" {}", name), styles::text_primary()),
            ]),
            QueueAction::Assign => Line::from(Span::styled(
                format!("Assign {}", self.icons.arrow_right()),
                styles::accent_bold(),
            )),
        }
    }
}

impl Widget for WorkOrderQueue<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (title_area, body) = split_view_header(area);
        ViewTitle::new("Work Order Queue", "Prioritized by customer-minutes-saved.")
            .pill(pill(IMPACT_MODEL, styles::accent()))
            .render(title_area, buf);

        let visible = (body.height / CARD_HEIGHT) as usize;
        if visible == 0 {
            return;
        }
        // Scroll just enough to keep the selected card on screen
        let offset = self.selected.saturating_sub(visible - 1);

        for (slot, (index, entry)) in self
            .entries
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            let card = Rect {
                x: body.x,
                y: body.y + slot as u16 * CARD_HEIGHT,
                width: body.width,
                height: CARD_HEIGHT,
            };
            self.render_card(entry, index == self.selected, card, buf);
        }
    }
}
