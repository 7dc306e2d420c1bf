use eframe::egui::{self, RichText};

use crate::router::Route;
use crate::theme;

const CONTENT_WIDTH: f32 = 720.0;

/// Header with a back-link to `back`, then the page body. Returns the
/// route the user asked for, if any.
pub(super) fn page_with_back_link(
    ui: &mut egui::Ui,
    back: Route,
    label: &str,
    content: impl FnOnce(&mut egui::Ui) -> Option<Route>,
) -> Option<Route> {
    let mut target = None;
    egui::Frame::none()
        .fill(theme::PANEL)
        .inner_margin(egui::Margin::symmetric(16.0, 12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let link = egui::Label::new(
                RichText::new(format!("← {label}"))
                    .monospace()
                    .color(theme::ACCENT),
            )
            .sense(egui::Sense::click());
            if ui.add(link).on_hover_text(back.path()).clicked() {
                target = Some(back.clone());
            }
        });
    ui.add_space(16.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.set_max_width(CONTENT_WIDTH);
            if let Some(route) = content(ui) {
                target = Some(route);
            }
        });
    target
}
