//! Color palette (dark slate surfaces with a sky accent).

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(10, 10, 10);
pub const CARD_BG: Color = Color::Rgb(2, 6, 23); // slate-950
pub const SURFACE: Color = Color::Rgb(15, 23, 42); // slate-900
pub const TRACK_BG: Color = Color::Rgb(30, 41, 59); // slate-800, empty bar track

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(30, 41, 59);
pub const BORDER_ACTIVE: Color = Color::Rgb(56, 189, 248);

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(56, 189, 248); // sky-400
pub const ACCENT_FILL: Color = Color::Rgb(14, 165, 233); // sky-500

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240); // slate-200
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184); // slate-400
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // slate-500
pub const TEXT_FAINT: Color = Color::Rgb(71, 85, 105); // slate-600
pub const TEXT_BRIGHT: Color = Color::Rgb(248, 250, 252); // slate-50
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(52, 211, 153); // emerald-400
pub const STATUS_AMBER: Color = Color::Rgb(251, 191, 36); // amber-400
pub const STATUS_RED: Color = Color::Rgb(251, 113, 133); // rose-400
pub const STATUS_PURPLE: Color = Color::Rgb(192, 132, 252); // purple-400

// --- Utilization bar ---
pub const UTILIZATION_FILL: Color = ACCENT_FILL;
/// Near-saturation fill (utilization above 90%)
pub const UTILIZATION_SATURATED: Color = Color::Rgb(168, 85, 247); // purple-500

// --- Forecast chart ---
pub const CHART_DEMAND: Color = ACCENT;
pub const CHART_AREA: Color = Color::Rgb(12, 74, 110); // sky-900
/// Dashed capacity threshold line
pub const CHART_REFERENCE: Color = TEXT_FAINT;
pub const CHART_GRID: Color = BORDER_DIM;
