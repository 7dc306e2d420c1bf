use eframe::egui::{self, RichText};

use crate::router::Route;

use super::DevhubApp;

mod communities;
mod create_community;
mod dialogs;
mod post_detail;
mod post_item;
mod post_list;
mod shell;

const NAV_LINKS: [(&str, Route); 3] = [
    ("Posts", Route::PostList),
    ("Communities", Route::Communities),
    ("Create Community", Route::CreateCommunity),
];

impl DevhubApp {
    pub(crate) fn render_nav_bar(&mut self, ctx: &egui::Context, enabled: bool) -> Option<Route> {
        let mut target = None;
        let current = self.navigator.current().clone();
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("devhub")
                            .strong()
                            .monospace()
                            .color(crate::theme::ACCENT),
                    );
                    ui.separator();
                    for (label, route) in NAV_LINKS.iter() {
                        if ui.selectable_label(current == *route, *label).clicked() {
                            target = Some(route.clone());
                        }
                    }
                });
            });
        });
        target
    }

    pub(crate) fn render_page(&mut self, ui: &mut egui::Ui) -> Option<Route> {
        match self.navigator.current().clone() {
            Route::PostList => {
                ui.heading("Recent Posts");
                ui.add_space(8.0);
                self.render_post_list(ui)
            }
            Route::Post(post_id) => {
                shell::page_with_back_link(ui, Route::PostList, "back to posts", |ui| {
                    self.render_post_detail(ui, post_id)
                })
            }
            Route::Communities => self.render_communities(ui),
            Route::CreateCommunity => {
                shell::page_with_back_link(ui, Route::Communities, "back", |ui| {
                    self.render_create_community(ui)
                })
            }
            Route::NotFound(path) => {
                ui.heading("Page not found");
                ui.label(format!("Nothing lives at {path}"));
                ui.link("Go to posts").clicked().then_some(Route::PostList)
            }
        }
    }
}
