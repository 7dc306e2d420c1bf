use eframe::egui::{self, RichText};

use crate::models::Post;
use crate::router::Route;
use crate::theme;

use super::super::format_timestamp;

const EXCERPT_CHARS: usize = 240;
const AVATAR_SIZE: f32 = 32.0;

/// Card for one post in a list. Clicking the title opens the post page.
pub(super) fn render(ui: &mut egui::Ui, post: &Post) -> Option<Route> {
    let mut target = None;
    egui::Frame::group(ui.style())
        .fill(theme::PANEL)
        .inner_margin(egui::vec2(12.0, 8.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                if let Some(avatar) = non_empty(post.avatar_url.as_deref()) {
                    ui.add(
                        egui::Image::new(avatar)
                            .fit_to_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE))
                            .rounding(AVATAR_SIZE / 2.0),
                    );
                }
                let title = if post.title.is_empty() {
                    "(untitled post)"
                } else {
                    &post.title
                };
                if ui.link(RichText::new(title).strong().size(16.0)).clicked() {
                    target = Some(Route::Post(post.id));
                }
            });
            ui.label(
                RichText::new(format_timestamp(&post.created_at))
                    .small()
                    .color(theme::MUTED),
            );
            if let Some(image) = non_empty(post.image_url.as_deref()) {
                ui.add(egui::Image::new(image).max_width(480.0).rounding(6.0));
            }
            if !post.content.is_empty() {
                ui.label(excerpt(&post.content, EXCERPT_CHARS));
            }
            ui.label(RichText::new(format!("♥ {}", post.likes)).color(theme::MUTED));
        });
    target
}

pub(super) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_cuts_on_char_boundaries() {
        assert_eq!(excerpt("héllo wörld", 5), "héllo…");
        assert_eq!(excerpt("short", 240), "short");
    }

    #[test]
    fn blank_urls_are_skipped() {
        assert_eq!(non_empty(Some("  ")), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("https://x/y.png")), Some("https://x/y.png"));
    }
}
