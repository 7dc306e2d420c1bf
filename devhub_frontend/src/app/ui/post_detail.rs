use eframe::egui::{self, RichText};

use crate::query::{QueryData, QueryKey};
use crate::router::Route;
use crate::theme;

use super::super::{format_timestamp, DevhubApp};
use super::post_item::non_empty;

impl DevhubApp {
    pub(crate) fn render_post_detail(&self, ui: &mut egui::Ui, post_id: i64) -> Option<Route> {
        let state = self.queries.get(&QueryKey::post(post_id))?;
        if state.is_loading() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading post...");
            });
            return None;
        }
        if let Some(err) = &state.error {
            ui.colored_label(theme::ERROR, format!("Error loading post: {err}"));
            return None;
        }
        let Some(QueryData::Post(Some(post))) = &state.data else {
            ui.label(format!("Post #{post_id} was not found."));
            return ui.link("Browse all posts").clicked().then_some(Route::PostList);
        };

        ui.heading(RichText::new(&post.title).strong());
        ui.horizontal(|ui| {
            if let Some(avatar) = non_empty(post.avatar_url.as_deref()) {
                ui.add(
                    egui::Image::new(avatar)
                        .fit_to_exact_size(egui::vec2(40.0, 40.0))
                        .rounding(20.0),
                );
            }
            ui.label(
                RichText::new(format_timestamp(&post.created_at)).color(theme::MUTED),
            );
        });
        ui.add_space(12.0);
        if let Some(image) = non_empty(post.image_url.as_deref()) {
            ui.add(egui::Image::new(image).max_width(ui.available_width()).rounding(8.0));
            ui.add_space(12.0);
        }
        ui.label(&post.content);
        ui.add_space(12.0);
        ui.label(RichText::new(format!("♥ {} likes", post.likes)).color(theme::MUTED));
        None
    }
}
