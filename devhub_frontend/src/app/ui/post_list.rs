use eframe::egui;

use crate::query::{QueryData, QueryKey};
use crate::router::Route;
use crate::theme;

use super::super::DevhubApp;
use super::post_item;

impl DevhubApp {
    pub(crate) fn render_post_list(&self, ui: &mut egui::Ui) -> Option<Route> {
        let Some(state) = self.queries.get(&QueryKey::posts()) else {
            return None;
        };
        if state.is_loading() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading posts...");
            });
            return None;
        }
        if let Some(err) = &state.error {
            ui.colored_label(theme::ERROR, format!("Error loading posts: {err}"));
            return None;
        }

        let mut target = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                if let Some(QueryData::Posts(posts)) = &state.data {
                    if posts.is_empty() {
                        ui.label("No posts yet.");
                    }
                    for post in posts {
                        if let Some(route) = post_item::render(ui, post) {
                            target = Some(route);
                        }
                        ui.add_space(8.0);
                    }
                }
            });
        target
    }
}
