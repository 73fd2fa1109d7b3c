//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use teslagrid_app::view_model::ViewModel;
use teslagrid_app::{AppState, ScreenModel};

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

/// Render the complete UI (View function in TEA)
///
/// Everything drawn is derived from a [`ScreenModel`] built from `state`,
/// so rendering never mutates application state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let screen = ScreenModel::from_state(state);
    let icons = IconSet::new(state.settings.ui.icons);

    // Landing lives outside the dashboard shell
    if let ViewModel::Landing = screen.content {
        frame.render_widget(widgets::Landing::new(icons), area);
        return;
    }

    let areas = layout::create_shell(area);
    frame.render_widget(widgets::Sidebar::new(&screen.nav, icons), areas.sidebar);
    frame.render_widget(widgets::ShellHeader::new(icons), areas.header);
    render_content(frame, &screen.content, icons, areas.content);
}

fn render_content(frame: &mut Frame, content: &ViewModel, icons: IconSet, area: Rect) {
    match content {
        ViewModel::Landing => {}
        ViewModel::Network {
            view_mode,
            station_count,
            selected,
            rows,
            placeholder,
        } => {
            let widget = widgets::NetworkHealth::new(*view_mode, *station_count, icons)
                .rows(rows.as_deref(), *selected)
                .placeholder(*placeholder);
            frame.render_widget(widget, area);
        }
        ViewModel::WorkOrders { selected, entries } => {
            frame.render_widget(
                widgets::WorkOrderQueue::new(entries, *selected, icons),
                area,
            );
        }
        ViewModel::Forecast { chart, tooltip } => {
            frame.render_widget(
                widgets::ForecastView::new(chart, tooltip.as_ref(), icons),
                area,
            );
        }
        ViewModel::NotFound { path } => {
            frame.render_widget(widgets::NotFound::new(path), area);
        }
    }
}
