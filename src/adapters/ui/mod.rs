pub mod banner;
pub mod progress;
pub mod screen;
pub mod terminal;
pub mod tui;

/// Applies the theme for all subsequent inquire prompts. Call once at startup.
pub fn init_ui() {
    tui::apply_theme();
}
