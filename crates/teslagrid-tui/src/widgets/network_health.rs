//! Network health view: station table with a list/map toggle
//!
//! List mode renders one table row per station. Map mode renders a static
//! placeholder; switching modes never touches the station rows themselves.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Cell, Paragraph, Row, Table, Widget},
};
use teslagrid_app::view_model::StationRow;
use teslagrid_app::ViewMode;
use teslagrid_core::{AlertLevel, Trend};

use crate::layout::split_view_header;
use crate::theme::{icons::IconSet, palette, styles};

use super::view_title::{pill, ViewTitle};

/// Cells in a full utilization bar
pub const BAR_WIDTH: usize = 10;

pub struct NetworkHealth<'a> {
    view_mode: ViewMode,
    station_count: usize,
    selected: usize,
    rows: Option<&'a [StationRow]>,
    placeholder: Option<&'a str>,
    icons: IconSet,
}

impl<'a> NetworkHealth<'a> {
    pub fn new(view_mode: ViewMode, station_count: usize, icons: IconSet) -> Self {
        Self {
            view_mode,
            station_count,
            selected: 0,
            rows: None,
            placeholder: None,
            icons,
        }
    }

    pub fn rows(mut self, rows: Option<&'a [StationRow]>, selected: usize) -> Self {
        self.rows = rows;
        self.selected = selected;
        self
    }

    pub fn placeholder(mut self, placeholder: Option<&'a str>) -> Self {
        self.placeholder = placeholder;
        self
    }

    fn toggle_pill(&self) -> Line<'static> {
        let segment = |label: &'static str, mode: ViewMode| {
            if self.view_mode == mode {
                Span::styled(label, styles::focused_selected())
            } else {
                Span::styled(label, styles::text_secondary())
            }
        };
        Line::from(vec![
            Span::styled("[", styles::text_muted()),
            segment(" List ", ViewMode::List),
            Span::styled("|", styles::text_muted()),
            segment(" Map ", ViewMode::Map),
            Span::styled("]", styles::text_muted()),
        ])
    }
}

impl Widget for NetworkHealth<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (title_area, body) = split_view_header(area);
        ViewTitle::new(
            "Network Health",
            format!(
                "Real-time status of {} monitored stations in NorCal region.",
                self.station_count
            ),
        )
        .pill(self.toggle_pill())
        .pill(pill(
            format!("{} Filter", self.icons.filter()),
            styles::text_secondary(),
        ))
        .render(title_area, buf);

        let block = styles::glass_block(false);
        let inner = block.inner(body);
        block.render(body, buf);

        match (self.rows, self.placeholder) {
            (Some(rows), _) => render_table(rows, self.selected, self.icons, inner, buf),
            (None, Some(text)) => render_map_placeholder(text, self.icons, inner, buf),
            (None, None) => {}
        }
    }
}

fn render_table(rows: &[StationRow], selected: usize, icons: IconSet, area: Rect, buf: &mut Buffer) {
    let header_style = styles::text_primary().add_modifier(Modifier::BOLD);
    let header = Row::new(
        ["STATION", "STATUS", "UTILIZATION", "UPTIME (24H)", "ALERTS", ""]
            .into_iter()
            .map(|h| Cell::from(Span::styled(h, header_style))),
    )
    .bottom_margin(1);

    let table_rows = rows.iter().enumerate().map(|(i, row)| {
        let station = Text::from(vec![
            Line::from(Span::styled(
                row.name,
                styles::text_primary().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} \u{2022} {}", row.region, row.id),
                styles::text_muted(),
            )),
        ]);

        let mut utilization = utilization_bar(row.utilization, row.saturated);
        utilization.push(Span::styled(
            format!(" {:>3}%", row.utilization),
            styles::text_secondary(),
        ));
        match row.trend {
            Trend::Up => utilization.push(Span::styled(
                format!(" {}", icons.trend_up()),
                styles::trend_style(row.trend),
            )),
            Trend::Down => utilization.push(Span::styled(
                format!(" {}", icons.trend_down()),
                styles::trend_style(row.trend),
            )),
            Trend::Stable => {}
        }

        let cells = vec![
            Cell::from(station),
            Cell::from(status_badge(row)),
            Cell::from(Line::from(utilization)),
            Cell::from(Span::styled(row.uptime_text.clone(), styles::text_primary())),
            Cell::from(alert_indicator(row, icons)),
            Cell::from(Span::styled(icons.more(), styles::text_muted())),
        ];

        let table_row = Row::new(cells).height(2);
        if i == selected {
            table_row.style(Style::default().bg(palette::SURFACE))
        } else {
            table_row
        }
    });

    let widths = [
        Constraint::Min(24),
        Constraint::Length(13),
        Constraint::Length(BAR_WIDTH as u16 + 7),
        Constraint::Length(12),
        Constraint::Length(13),
        Constraint::Length(2),
    ];

    Table::new(table_rows, widths)
        .header(header)
        .column_spacing(2)
        .render(area, buf);
}

/// Status badge text padded inside its color
pub fn status_badge(row: &StationRow) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {} ", row.status_label),
        styles::status_badge(row.status),
    ))
}

/// Proportional bar: filled cells use the (alternate when saturated) fill color
pub fn utilization_bar(utilization: u8, saturated: bool) -> Vec<Span<'static>> {
    let filled = (utilization.min(100) as usize * BAR_WIDTH + 50) / 100;
    let fill_style = Style::default().fg(styles::utilization_fill(saturated));
    let track_style = Style::default().fg(palette::TRACK_BG);
    vec![
        Span::styled("\u{2588}".repeat(filled), fill_style), // █
        Span::styled("\u{2591}".repeat(BAR_WIDTH - filled), track_style), // ░
    ]
}

/// "Healthy" for zero alerts, "N Critical" otherwise; never both
pub fn alert_indicator(row: &StationRow, icons: IconSet) -> Line<'static> {
    match row.alert {
        AlertLevel::Healthy => Line::from(vec![
            Span::styled(icons.check(), styles::alert_healthy()),
            Span::styled(format!(" {}", row.alert_text()), styles::alert_healthy()),
        ]),
        AlertLevel::Critical(_) => Line::from(vec![
            Span::styled(icons.alert(), styles::alert_critical()),
            Span::styled(format!(" {}", row.alert_text()), styles::alert_critical()),
        ]),
    }
}

fn render_map_placeholder(text: &str, icons: IconSet, area: Rect, buf: &mut Buffer) {
    if area.height == 0 {
        return;
    }
    let top = area.y + area.height.saturating_sub(3) / 2;
    let rect = Rect {
        y: top,
        height: area.bottom().saturating_sub(top).min(3),
        ..area
    };
    Paragraph::new(vec![
        Line::from(Span::styled(icons.map(), styles::text_muted())),
        Line::raw(""),
        Line::from(Span::styled(text.to_string(), styles::text_muted())),
    ])
    .alignment(Alignment::Center)
    .render(rect, buf);
}
