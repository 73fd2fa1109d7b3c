//! Demand/capacity area chart for the forecast view.
//!
//! Renders the demand series as a braille area with a line on top, a dashed
//! reference line at the capacity threshold, horizontal grid lines, axis
//! labels, and a tooltip for the hovered sample. The capacity series is not
//! drawn; it only feeds the tooltip.
//!
//! ```text
//!  ● Predicted Demand   ● Max Capacity        legend
//!   6k ┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈┈    grid at each y tick
//!      ⠤⠤⠤   ⠤⠤⠤   ⠤⠤⠤   ⠤⠤⡠⠔⣿⣿⠢⡀⠤   ⠤⠤⠤   ⠤    reference line (5k)
//!   4k ┈┈┈┈┈┈┈┈┈┈┈┈┈┈⡠⠔⣿⣿⣿⣿⣿⣿⣿⣿⠱⡀┈┈┈┈┈┈┈    demand area + line
//!   2k ⣀⣀⣀⣀⡠⠤⠔⣾⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⠢⢄⣀⣀⣀
//!   0k ⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿
//!      Mon  Tue  Wed  Thu  Fri  Sat  Sun  Mon    x labels
//! ```

mod braille_canvas;
mod chart;

use braille_canvas::BrailleCanvas;
use chart::{
    render_area_and_line, render_cursor, render_grid, render_legend, render_reference_line,
    render_tooltip, render_x_axis_labels, render_y_axis_labels, PlotGeometry,
};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use teslagrid_app::view_model::{ChartModel, Tooltip};

use crate::theme::palette;

pub(super) const LEGEND_HEIGHT: u16 = 1;
pub(super) const X_AXIS_HEIGHT: u16 = 1;
/// Smallest plot (in rows) worth drawing
pub(super) const MIN_PLOT_HEIGHT: u16 = 3;
/// Width of the y-axis label column (e.g. " 6k ")
pub(super) const Y_AXIS_WIDTH: u16 = 5;
/// Number of labelled y-axis ticks, including zero
pub(super) const Y_TICKS: usize = 4;

/// Area chart of a [`ChartModel`].
pub struct ForecastChart<'a> {
    model: &'a ChartModel,
    tooltip: Option<&'a Tooltip>,
}

impl<'a> ForecastChart<'a> {
    pub fn new(model: &'a ChartModel) -> Self {
        Self {
            model,
            tooltip: None,
        }
    }

    pub fn tooltip(mut self, tooltip: Option<&'a Tooltip>) -> Self {
        self.tooltip = tooltip;
        self
    }

    /// Plot rectangle inside `area` (excludes legend, axes and labels)
    pub fn plot_area(area: Rect) -> Rect {
        Rect {
            x: area.x + Y_AXIS_WIDTH,
            y: area.y + LEGEND_HEIGHT,
            width: area.width.saturating_sub(Y_AXIS_WIDTH),
            height: area.height.saturating_sub(LEGEND_HEIGHT + X_AXIS_HEIGHT),
        }
    }
}

impl Widget for ForecastChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let legend_area = Rect {
            height: LEGEND_HEIGHT.min(area.height),
            ..area
        };
        render_legend(legend_area, buf);

        let plot = Self::plot_area(area);
        if plot.height < MIN_PLOT_HEIGHT || plot.width < 4 {
            return;
        }

        if self.model.points.is_empty() {
            let msg = Line::from(Span::styled(
                "No forecast data",
                Style::default().fg(palette::TEXT_MUTED),
            ));
            buf.set_line(plot.x, plot.y, &msg, plot.width);
            return;
        }

        let geometry = PlotGeometry::new(plot, self.model.points.len(), self.model.y_max);

        // Background first; braille layers only overwrite the cells they use
        render_grid(self.model, &geometry, buf);
        render_y_axis_labels(self.model, &geometry, area.x, buf);
        if let Some(tooltip) = self.tooltip {
            render_cursor(tooltip.index, &geometry, buf);
        }

        render_area_and_line(self.model, &geometry, buf);
        render_reference_line(self.model, &geometry, buf);

        render_x_axis_labels(self.model, &geometry, area.bottom() - 1, buf);

        if let Some(tooltip) = self.tooltip {
            render_tooltip(tooltip, self.model, &geometry, buf);
        }
    }
}
