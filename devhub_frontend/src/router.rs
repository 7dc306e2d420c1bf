use std::fmt;
use std::time::Instant;

use log::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    PostList,
    Post(i64),
    Communities,
    CreateCommunity,
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let trimmed = trimmed.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::PostList,
            ["communities"] => Route::Communities,
            ["create-community"] => Route::CreateCommunity,
            ["post", id] => match id.parse::<i64>() {
                Ok(id) => Route::Post(id),
                Err(_) => Route::NotFound(trimmed.to_string()),
            },
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::PostList => "/".to_string(),
            Route::Post(id) => format!("/post/{id}"),
            Route::Communities => "/communities".to_string(),
            Route::CreateCommunity => "/create-community".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone)]
struct ScheduledNavigation {
    route: Route,
    due: Instant,
}

/// Current route plus back history. Also holds at most one delayed
/// navigation; a later `schedule` replaces an earlier one.
#[derive(Debug)]
pub struct Navigator {
    current: Route,
    history: Vec<Route>,
    scheduled: Option<ScheduledNavigation>,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            history: Vec::new(),
            scheduled: None,
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Moves to `route`, returning the route that was left. Navigating to
    /// the current route is a no-op and returns `None`.
    pub fn navigate(&mut self, route: Route) -> Option<Route> {
        if route == self.current {
            return None;
        }
        info!("navigate {} -> {}", self.current, route);
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous.clone());
        Some(previous)
    }

    pub fn back(&mut self) -> Option<Route> {
        let target = self.history.pop()?;
        info!("navigate back {} -> {}", self.current, target);
        Some(std::mem::replace(&mut self.current, target))
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn schedule(&mut self, route: Route, due: Instant) {
        self.scheduled = Some(ScheduledNavigation { route, due });
    }

    pub fn scheduled_due(&self) -> Option<Instant> {
        self.scheduled.as_ref().map(|s| s.due)
    }

    /// Takes the scheduled navigation once it is due. The caller performs
    /// the move so it can run its own mount/unmount hooks.
    pub fn take_due(&mut self, now: Instant) -> Option<Route> {
        let is_due = self.scheduled.as_ref().is_some_and(|s| s.due <= now);
        if is_due {
            self.scheduled.take().map(|s| s.route)
        } else {
            None
        }
    }
}
