use eframe::egui::{self, Align2, Context};

use super::super::DevhubApp;

impl DevhubApp {
    /// Blocking notice; the page underneath stays disabled until dismissed.
    pub(crate) fn render_alert(&mut self, ctx: &Context) {
        let Some(message) = self.alert.clone() else {
            return;
        };

        let mut dismiss = false;
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .default_width(320.0)
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(message.as_str());
                ui.add_space(12.0);
                if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    dismiss = true;
                }
            });

        if dismiss {
            self.alert = None;
        }
    }
}
