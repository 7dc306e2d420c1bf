use eframe::egui::{self, RichText};

use crate::router::Route;
use crate::theme;

use super::super::DevhubApp;

impl DevhubApp {
    pub(crate) fn render_create_community(&mut self, ui: &mut egui::Ui) -> Option<Route> {
        let mut should_submit = false;
        let form = &mut self.create_community;

        ui.label(RichText::new("Create Community").heading().strong());
        ui.label(
            RichText::new("Build a space for developers to connect and collaborate")
                .color(theme::MUTED),
        );
        ui.add_space(16.0);

        if form.mutation.is_success() {
            theme::notice_frame(theme::SUCCESS).show(ui, |ui| {
                ui.colored_label(
                    theme::SUCCESS,
                    "✔ Community created successfully! Redirecting...",
                );
            });
            ui.add_space(12.0);
        }

        if let Some(message) = form.mutation.error() {
            theme::notice_frame(theme::ERROR).show(ui, |ui| {
                ui.label(RichText::new("Error creating community").strong().color(theme::ERROR));
                let detail = if message.is_empty() {
                    "Please try again"
                } else {
                    message
                };
                ui.label(RichText::new(detail).small().color(theme::ERROR_DETAIL));
            });
            ui.add_space(12.0);
        }

        let enabled = form.inputs_enabled();

        ui.label(RichText::new("Community Name").strong());
        ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(&mut form.name)
                .hint_text("e.g., React Developers, Python Community")
                .desired_width(f32::INFINITY),
        );
        ui.label(
            RichText::new("Give your community a clear, descriptive name")
                .small()
                .color(theme::MUTED),
        );
        ui.add_space(12.0);

        ui.label(RichText::new("Description").strong());
        ui.add_enabled(
            enabled,
            egui::TextEdit::multiline(&mut form.description)
                .hint_text(
                    "Describe what your community is about, who should join, and what topics you'll discuss...",
                )
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );
        ui.label(
            RichText::new("Be specific about the community's purpose")
                .small()
                .color(theme::MUTED),
        );
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            if form.mutation.is_pending() {
                ui.spinner();
            }
            let button = egui::Button::new(RichText::new(form.submit_label()).strong())
                .fill(theme::ACCENT_DARK)
                .min_size(egui::vec2(ui.available_width(), 36.0));
            if ui.add_enabled(form.can_submit(), button).clicked() {
                should_submit = true;
            }
        });

        if should_submit {
            self.spawn_create_community();
        }
        None
    }
}
