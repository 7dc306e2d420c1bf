use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use eframe::egui::{self, Context};

use crate::api::ApiClient;
use crate::config::FrontendConfig;
use crate::query::QueryClient;
use crate::router::{Navigator, Route};
use crate::theme;

mod messages;
mod spawners;
mod state;
mod tasks;
mod ui;

use messages::AppMessage;
use state::CreateCommunityState;

/// How often to repaint while requests are outstanding.
const FETCH_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct DevhubApp {
    api: ApiClient,
    config: FrontendConfig,
    tx: Sender<AppMessage>,
    rx: Receiver<AppMessage>,
    queries: QueryClient,
    navigator: Navigator,
    create_community: CreateCommunityState,
    alert: Option<String>,
}

impl DevhubApp {
    pub fn new(cc: &eframe::CreationContext<'_>, api: ApiClient, config: FrontendConfig) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        theme::apply(&cc.egui_ctx);
        Self::with_api(api, config)
    }

    /// Builds the app state without a window, mounting the start route.
    pub fn with_api(api: ApiClient, config: FrontendConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        let navigator = Navigator::new(config.start_route());
        let mut app = Self {
            api,
            config,
            tx,
            rx,
            queries: QueryClient::new(),
            navigator,
            create_community: CreateCommunityState::default(),
            alert: None,
        };
        app.mount_current();
        app
    }

    pub fn current_route(&self) -> &Route {
        self.navigator.current()
    }

    fn process_messages(&mut self) {
        messages::process_messages(self);
    }

    fn run_scheduled_navigation(&mut self, now: Instant) {
        if let Some(route) = self.navigator.take_due(now) {
            self.navigate(route);
        }
    }

    fn request_repaints(&self, ctx: &Context, now: Instant) {
        if self.queries.is_fetching_any() || self.create_community.mutation.is_pending() {
            ctx.request_repaint_after(FETCH_REPAINT_INTERVAL);
        }
        if let Some(due) = self.navigator.scheduled_due() {
            ctx.request_repaint_after(due.saturating_duration_since(now));
        }
    }
}

impl eframe::App for DevhubApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.process_messages();
        self.run_scheduled_navigation(now);

        self.render_frame(ctx);

        self.request_repaints(ctx, now);
    }
}

impl DevhubApp {
    pub(crate) fn render_frame(&mut self, ctx: &Context) {
        let blocked = self.alert.is_some();
        let mut target = self.render_nav_bar(ctx, !blocked);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                if let Some(route) = self.render_page(ui) {
                    target = Some(route);
                }
            });
        });

        self.render_alert(ctx);

        if let Some(route) = target {
            self.request_navigation(route);
        }
    }

    /// User-initiated navigation; ignored while the blocking notice is up.
    pub(crate) fn request_navigation(&mut self, route: Route) {
        if self.alert.is_some() {
            return;
        }
        self.navigate(route);
    }
}

pub(crate) fn format_timestamp(ts: &str) -> String {
    DateTime::parse_from_rfc3339(ts)
        .map(|dt| {
            dt.with_timezone(&Utc)
                .format("%Y-%m-%d %H:%M UTC")
                .to_string()
        })
        .unwrap_or_else(|_| ts.to_string())
}
