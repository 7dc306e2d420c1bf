//! Slate background with a cyan accent.

use eframe::egui::{self, Color32};

pub const BACKGROUND: Color32 = Color32::from_rgb(2, 6, 23);
pub const PANEL: Color32 = Color32::from_rgb(15, 23, 42);
pub const BORDER: Color32 = Color32::from_rgb(30, 41, 59);
pub const ACCENT: Color32 = Color32::from_rgb(34, 211, 238);
pub const ACCENT_DARK: Color32 = Color32::from_rgb(8, 145, 178);
pub const MUTED: Color32 = Color32::from_rgb(156, 163, 175);
pub const SUCCESS: Color32 = Color32::from_rgb(74, 222, 128);
pub const ERROR: Color32 = Color32::from_rgb(248, 113, 113);
pub const ERROR_DETAIL: Color32 = Color32::from_rgb(252, 165, 165);

pub fn dark_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = PANEL;
    visuals.extreme_bg_color = PANEL;
    visuals.faint_bg_color = BORDER;
    visuals.hyperlink_color = ACCENT;
    visuals.window_stroke.color = BORDER;
    visuals.selection.bg_fill = ACCENT_DARK;
    visuals.widgets.inactive.weak_bg_fill = ACCENT_DARK;
    visuals.widgets.hovered.weak_bg_fill = ACCENT;
    visuals
}

pub fn apply(ctx: &egui::Context) {
    ctx.set_visuals(dark_visuals());
}

/// Tinted frame used for success and error notices.
pub fn notice_frame(color: Color32) -> egui::Frame {
    egui::Frame::none()
        .fill(color.gamma_multiply(0.1))
        .stroke(egui::Stroke::new(1.0, color.gamma_multiply(0.5)))
        .rounding(8.0)
        .inner_margin(egui::Margin::same(12.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visuals_use_accent_for_links() {
        let visuals = dark_visuals();
        assert!(visuals.dark_mode);
        assert_eq!(visuals.hyperlink_color, ACCENT);
        assert_eq!(visuals.panel_fill, BACKGROUND);
    }
}
