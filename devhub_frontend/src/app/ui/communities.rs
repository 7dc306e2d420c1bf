use eframe::egui::{self, RichText};

use crate::query::{QueryData, QueryKey};
use crate::router::Route;
use crate::theme;

use super::super::DevhubApp;

impl DevhubApp {
    pub(crate) fn render_communities(&self, ui: &mut egui::Ui) -> Option<Route> {
        let mut target = None;
        ui.horizontal(|ui| {
            ui.heading("Communities");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("+ Create Community").clicked() {
                    target = Some(Route::CreateCommunity);
                }
            });
        });
        ui.add_space(8.0);

        let Some(state) = self.queries.get(&QueryKey::communities()) else {
            return target;
        };
        if state.is_loading() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading communities...");
            });
            return target;
        }
        if let Some(err) = &state.error {
            ui.colored_label(theme::ERROR, format!("Error loading communities: {err}"));
            return target;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                let Some(QueryData::Communities(communities)) = &state.data else {
                    return;
                };
                if communities.is_empty() {
                    ui.label("No communities yet. Create one to get started.");
                }
                for community in communities {
                    egui::Frame::group(ui.style())
                        .fill(theme::PANEL)
                        .inner_margin(egui::vec2(12.0, 8.0))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(RichText::new(&community.name).strong().size(16.0));
                            ui.label(RichText::new(&community.description).color(theme::MUTED));
                        });
                    ui.add_space(6.0);
                }
            });
        target
    }
}
