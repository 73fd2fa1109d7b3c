//! Drawing helpers for the forecast chart.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Clear, Paragraph};
use teslagrid_core::format_thousands;

use super::*;
use crate::theme::styles;

/// Maps sample indices and values onto a plot rectangle.
pub(super) struct PlotGeometry {
    pub(super) plot: Rect,
    samples: usize,
    y_max: u32,
}

impl PlotGeometry {
    pub(super) fn new(plot: Rect, samples: usize, y_max: u32) -> Self {
        Self {
            plot,
            samples,
            y_max: y_max.max(1),
        }
    }

    fn dot_width(&self) -> usize {
        self.plot.width as usize * 2
    }

    fn dot_height(&self) -> usize {
        self.plot.height as usize * 4
    }

    /// Dot-space x of a sample; first and last samples sit on the plot edges
    pub(super) fn dot_x(&self, index: usize) -> usize {
        let dot_w = self.dot_width();
        if self.samples <= 1 {
            return dot_w / 2;
        }
        (index * (dot_w - 1)) / (self.samples - 1)
    }

    /// Dot-space y of a value; larger values sit higher
    pub(super) fn dot_y(&self, value: u32) -> usize {
        let dot_h = self.dot_height();
        let ratio = (value as f64 / self.y_max as f64).clamp(0.0, 1.0);
        let dot = (ratio * (dot_h as f64 - 1.0)).round() as usize;
        dot_h.saturating_sub(1).saturating_sub(dot)
    }

    /// Terminal column holding a sample
    pub(super) fn cell_x(&self, index: usize) -> u16 {
        self.plot.x + (self.dot_x(index) / 2) as u16
    }

    /// Terminal row holding a value
    pub(super) fn cell_y(&self, value: u32) -> u16 {
        self.plot.y + (self.dot_y(value) / 4) as u16
    }
}

// ── Background ───────────────────────────────────────────────────────────────

/// Dotted horizontal grid line at every y tick
pub(super) fn render_grid(model: &ChartModel, geometry: &PlotGeometry, buf: &mut Buffer) {
    let style = Style::default().fg(palette::CHART_GRID);
    let plot = geometry.plot;
    for tick in model.y_ticks(Y_TICKS) {
        let y = geometry.cell_y(tick);
        for x in plot.left()..plot.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char('\u{2508}').set_style(style); // ┈
            }
        }
    }
}

pub(super) fn render_y_axis_labels(
    model: &ChartModel,
    geometry: &PlotGeometry,
    x: u16,
    buf: &mut Buffer,
) {
    let style = Style::default().fg(palette::TEXT_SECONDARY);
    let width = (Y_AXIS_WIDTH - 1) as usize;
    for tick in model.y_ticks(Y_TICKS) {
        let label = format!("{:>width$}", format_thousands(tick), width = width);
        let line = Line::from(Span::styled(label, style));
        buf.set_line(x, geometry.cell_y(tick), &line, Y_AXIS_WIDTH - 1);
    }
}

/// Vertical guide under the hovered sample
pub(super) fn render_cursor(index: usize, geometry: &PlotGeometry, buf: &mut Buffer) {
    let x = geometry.cell_x(index);
    let style = Style::default().fg(palette::TEXT_FAINT);
    for y in geometry.plot.top()..geometry.plot.bottom() {
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char('\u{2502}').set_style(style); // │
        }
    }
}

// ── Series ───────────────────────────────────────────────────────────────────

/// Demand as a filled area with a brighter outline
pub(super) fn render_area_and_line(model: &ChartModel, geometry: &PlotGeometry, buf: &mut Buffer) {
    let plot = geometry.plot;
    let mut area = BrailleCanvas::new(plot.width as usize, plot.height as usize);
    let mut line = BrailleCanvas::new(plot.width as usize, plot.height as usize);
    let bottom = area.dot_height().saturating_sub(1);

    let dots: Vec<(usize, usize)> = model
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| (geometry.dot_x(i), geometry.dot_y(p.demand)))
        .collect();

    if let [(x, y)] = dots.as_slice() {
        area.vline(*x, *y, bottom);
        line.set(*x, *y);
    }

    for pair in dots.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        let span = x1.saturating_sub(x0).max(1);
        for x in x0..=x1 {
            let t = (x - x0) as f64 / span as f64;
            let y = (y0 as f64 + (y1 as f64 - y0 as f64) * t).round() as usize;
            area.vline(x, y, bottom);
        }
        line.line(pair[0], pair[1]);
    }

    area.render_to_buffer(buf, plot, palette::CHART_AREA);
    line.render_to_buffer(buf, plot, palette::CHART_DEMAND);
}

/// Dashed line at the capacity threshold
pub(super) fn render_reference_line(model: &ChartModel, geometry: &PlotGeometry, buf: &mut Buffer) {
    let plot = geometry.plot;
    let mut canvas = BrailleCanvas::new(plot.width as usize, plot.height as usize);
    canvas.dashed_hline(geometry.dot_y(model.reference_line), 3, 3);
    canvas.render_to_buffer(buf, plot, palette::CHART_REFERENCE);
}

// ── Labels ───────────────────────────────────────────────────────────────────

pub(super) fn render_legend(area: Rect, buf: &mut Buffer) {
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled("\u{25cf}", Style::default().fg(palette::ACCENT_FILL)),
        Span::styled(" Predicted Demand   ", styles::text_secondary()),
        Span::styled("\u{25cf}", Style::default().fg(palette::TEXT_FAINT)),
        Span::styled(" Max Capacity", styles::text_secondary()),
    ]);
    buf.set_line(area.x, area.y, &line, area.width);
}

/// Day labels centered under their samples; labels that would collide are skipped
pub(super) fn render_x_axis_labels(
    model: &ChartModel,
    geometry: &PlotGeometry,
    y: u16,
    buf: &mut Buffer,
) {
    let style = Style::default().fg(palette::TEXT_SECONDARY);
    let plot = geometry.plot;
    let mut next_free = plot.x;

    for (i, point) in model.points.iter().enumerate() {
        let width = point.label.len() as u16;
        let center = geometry.cell_x(i);
        let x = center
            .saturating_sub(width / 2)
            .max(plot.x)
            .min(plot.right().saturating_sub(width));
        if x < next_free {
            continue;
        }
        buf.set_line(x, y, &Line::from(Span::styled(point.label, style)), width);
        next_free = x + width + 1;
    }
}

// ── Tooltip ──────────────────────────────────────────────────────────────────

pub(super) fn render_tooltip(
    tooltip: &Tooltip,
    model: &ChartModel,
    geometry: &PlotGeometry,
    buf: &mut Buffer,
) {
    let plot = geometry.plot;

    // Highlight the hovered sample on the line
    if let Some(point) = model.points.get(tooltip.index) {
        let x = geometry.cell_x(tooltip.index);
        let y = geometry.cell_y(point.demand);
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char('\u{25cf}').set_style(styles::accent_bold());
        }
    }

    let [title, demand, capacity] = tooltip.lines();
    let content_width = [&title, &demand, &capacity]
        .iter()
        .map(|l| l.len())
        .max()
        .unwrap_or(0) as u16;
    let width = (content_width + 4).min(plot.width);
    let height = 5.min(plot.height);

    let cursor = geometry.cell_x(tooltip.index);
    let x = if cursor + 2 + width <= plot.right() {
        cursor + 2
    } else {
        cursor.saturating_sub(width + 1).max(plot.x)
    };
    let rect = Rect::new(x, plot.y, width, height);

    Clear.render(rect, buf);
    let block = styles::glass_block(false).style(Style::default().bg(palette::SURFACE));
    let lines = vec![
        Line::from(Span::styled(
            title,
            styles::text_primary().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(demand, styles::accent_bold())),
        Line::from(Span::styled(
            capacity,
            styles::text_muted().add_modifier(Modifier::BOLD),
        )),
    ];
    Paragraph::new(lines)
        .block(block.padding(ratatui::widgets::Padding::horizontal(1)))
        .render(rect, buf);
}
