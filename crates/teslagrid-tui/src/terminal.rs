//! Terminal setup and restoration

/// Install a panic hook that puts the terminal back before reporting
///
/// Must run after `color_eyre::install()` so the eyre report is the hook
/// that gets chained.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        previous(panic_info);
    }));
}
