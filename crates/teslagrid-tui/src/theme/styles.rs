//! Semantic style builders.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use teslagrid_core::{StationStatus, Trend};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright_bold() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_AMBER)
}

// --- Selection styles ---

/// Highlighted nav entry or selected table row
pub fn selected_highlight() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .bg(palette::SURFACE)
        .add_modifier(Modifier::BOLD)
}

/// "Black on sky" - active segment of a toggle
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

// --- Domain mappings ---

/// Badge color for a station status; one entry per status
pub fn status_color(status: StationStatus) -> Color {
    match status {
        StationStatus::Operational => palette::STATUS_GREEN,
        StationStatus::Degraded => palette::STATUS_AMBER,
        StationStatus::Offline => palette::STATUS_RED,
        StationStatus::Congestion => palette::STATUS_PURPLE,
    }
}

pub fn status_badge(status: StationStatus) -> Style {
    Style::default()
        .fg(status_color(status))
        .add_modifier(Modifier::BOLD)
}

/// Fill color of the utilization bar
pub fn utilization_fill(saturated: bool) -> Color {
    if saturated {
        palette::UTILIZATION_SATURATED
    } else {
        palette::UTILIZATION_FILL
    }
}

/// Trend arrow color; rising load is bad news
pub fn trend_style(trend: Trend) -> Style {
    match trend {
        Trend::Up => Style::default().fg(palette::STATUS_RED),
        Trend::Down => Style::default().fg(palette::STATUS_GREEN),
        Trend::Stable => text_muted(),
    }
}

pub fn alert_healthy() -> Style {
    Style::default().fg(palette::TEXT_FAINT)
}

pub fn alert_critical() -> Style {
    Style::default()
        .fg(palette::STATUS_RED)
        .add_modifier(Modifier::BOLD)
}
