//! Forecast view: demand chart plus risk and event-impact panels

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use teslagrid_app::view_model::{ChartModel, Tooltip};
use teslagrid_core::fixtures::{CONGESTION_RISK, EVENT_IMPACTS};
use teslagrid_core::EventImpact;

use crate::layout::split_view_header;
use crate::theme::{icons::IconSet, palette, styles};

use super::forecast_chart::ForecastChart;
use super::view_title::{pill, ViewTitle};

/// Side panel width; the panel is dropped on narrow terminals
const SIDE_PANEL_WIDTH: u16 = 34;
const MIN_WIDTH_FOR_SIDE_PANEL: u16 = 80;

pub struct ForecastView<'a> {
    chart: &'a ChartModel,
    tooltip: Option<&'a Tooltip>,
    icons: IconSet,
}

impl<'a> ForecastView<'a> {
    pub fn new(chart: &'a ChartModel, tooltip: Option<&'a Tooltip>, icons: IconSet) -> Self {
        Self {
            chart,
            tooltip,
            icons,
        }
    }
}

impl Widget for ForecastView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (title_area, body) = split_view_header(area);
        ViewTitle::new("Demand Forecast", "7-day regional capacity outlook.")
            .pill(pill("Next 7 Days", styles::text_secondary()))
            .render(title_area, buf);

        let (chart_area, side_area) = if body.width >= MIN_WIDTH_FOR_SIDE_PANEL {
            let [chart, _gap, side] = Layout::horizontal([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(SIDE_PANEL_WIDTH),
            ])
            .areas(body);
            (chart, Some(side))
        } else {
            (body, None)
        };

        let block = styles::glass_block(false).title(Line::from(Span::styled(
            " Regional Load vs Capacity ",
            styles::text_primary().add_modifier(Modifier::BOLD),
        )));
        let inner = block.inner(chart_area);
        block.render(chart_area, buf);
        ForecastChart::new(self.chart)
            .tooltip(self.tooltip)
            .render(inner, buf);

        if let Some(side) = side_area {
            render_side_panels(self.icons, side, buf);
        }
    }
}

fn render_side_panels(icons: IconSet, area: Rect, buf: &mut Buffer) {
    let impact_height = 2 + 3 * EVENT_IMPACTS.len() as u16;
    let [risk_area, impact_area, _rest] = Layout::vertical([
        Constraint::Length(8),
        Constraint::Length(impact_height),
        Constraint::Min(0),
    ])
    .areas(area);

    // Congestion risk callout
    let risk_block = styles::glass_block(false)
        .border_style(Style::default().fg(palette::STATUS_RED));
    let risk_lines = vec![
        Line::from(vec![
            Span::styled(icons.alert(), styles::alert_critical()),
            Span::styled(format!(" {}", CONGESTION_RISK.title), styles::alert_critical()),
        ]),
        Line::from(Span::styled(CONGESTION_RISK.detail, styles::text_secondary())),
        Line::raw(""),
        Line::from(Span::styled(
            format!("{} {}", CONGESTION_RISK.action, icons.arrow_right()),
            styles::accent_bold(),
        )),
    ];
    Paragraph::new(risk_lines)
        .wrap(Wrap { trim: true })
        .block(risk_block)
        .render(risk_area, buf);

    // Event impacts
    let impact_block = styles::glass_block(false).title(Line::from(Span::styled(
        " Event Impact ",
        styles::text_primary().add_modifier(Modifier::BOLD),
    )));
    let inner = impact_block.inner(impact_area);
    impact_block.render(impact_area, buf);

    for (i, impact) in EVENT_IMPACTS.iter().enumerate() {
        let y = inner.y + (i as u16) * 3;
        if y + 1 >= inner.bottom() {
            break;
        }
        let title = Line::from(vec![
            Span::styled(format!("{:>4} ", impact.badge()), impact_style(impact)),
            Span::styled(impact.title, styles::text_primary()),
        ]);
        let caption = Line::from(vec![
            Span::raw("     "),
            Span::styled(impact.caption, styles::text_muted()),
        ]);
        buf.set_line(inner.x, y, &title, inner.width);
        buf.set_line(inner.x, y + 1, &caption, inner.width);
    }
}

/// Load reductions in green, increases in amber
fn impact_style(impact: &EventImpact) -> Style {
    let color = if impact.reduces_load() {
        palette::STATUS_GREEN
    } else {
        palette::STATUS_AMBER
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
