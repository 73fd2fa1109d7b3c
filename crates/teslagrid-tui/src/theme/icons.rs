//! Icon set for the TUI.
//!
//! `IconSet` resolves icons at runtime based on `IconMode`:
//! - `IconMode::Unicode`: safe characters that work in all terminals
//! - `IconMode::NerdFonts`: Nerd Font glyphs (requires a Nerd Font installed)

use teslagrid_app::config::IconMode;
use teslagrid_app::navigation::NavIcon;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Glyph for a sidebar entry
    pub fn nav(&self, icon: NavIcon) -> &'static str {
        match icon {
            NavIcon::Activity => self.activity(),
            NavIcon::Zap => self.zap(),
            NavIcon::BarChart => self.bar_chart(),
        }
    }

    pub fn activity(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0f1}", // nf-fa-heartbeat
            IconMode::Unicode => "~",
        }
    }

    pub fn zap(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0e7}", // nf-fa-bolt
            IconMode::Unicode => "\u{03df}",   // ϟ
        }
    }

    pub fn bar_chart(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f080}", // nf-fa-bar_chart
            IconMode::Unicode => "\u{2587}",   // ▇
        }
    }

    pub fn settings(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f013}", // nf-fa-cog
            IconMode::Unicode => "\u{2699}",   // ⚙
        }
    }

    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }

    /// Critical alert indicator
    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f06a}", // nf-fa-exclamation_circle
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    /// Healthy indicator
    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f058}", // nf-fa-check_circle
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    pub fn trend_up(&self) -> &'static str {
        "\u{2197}" // ↗
    }

    pub fn trend_down(&self) -> &'static str {
        "\u{2198}" // ↘
    }

    pub fn arrow_right(&self) -> &'static str {
        "\u{2192}" // →
    }

    pub fn more(&self) -> &'static str {
        "\u{22ef}" // ⋯
    }

    pub fn clock(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f017}", // nf-fa-clock_o
            IconMode::Unicode => "\u{23f1}",   // ⏱
        }
    }

    pub fn user(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f007}", // nf-fa-user
            IconMode::Unicode => "@",
        }
    }

    pub fn map(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f279}", // nf-fa-map
            IconMode::Unicode => "\u{25a6}",   // ▦
        }
    }

    pub fn filter(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0b0}", // nf-fa-filter
            IconMode::Unicode => "\u{25bd}",   // ▽
        }
    }

    pub fn search(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f002}", // nf-fa-search
            IconMode::Unicode => "\u{2315}",   // ⌕
        }
    }

    pub fn bell(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0f3}", // nf-fa-bell
            IconMode::Unicode => "\u{237e}",   // ⍾
        }
    }
}
