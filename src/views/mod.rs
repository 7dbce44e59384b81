// Views module - text renderings of the six pages
pub mod home;
pub mod dashboard;
pub mod emergency;
pub mod prediction;
pub mod volunteer;
pub mod resources;

use crate::operations::format_count;
use crate::storage::CityStore;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Dashboard,
    Emergency,
    AiPrediction,
    Volunteer,
    Resources,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Dashboard,
        Route::AiPrediction,
        Route::Resources,
        Route::Emergency,
        Route::Volunteer,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Dashboard => "/dashboard",
            Route::Emergency => "/emergency",
            Route::AiPrediction => "/ai-prediction",
            Route::Volunteer => "/volunteer",
            Route::Resources => "/resources",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Dashboard => "Dashboard",
            Route::Emergency => "Emergency",
            Route::AiPrediction => "AI Prediction",
            Route::Volunteer => "Volunteer",
            Route::Resources => "Resources",
        }
    }

    /// Whether the page shows numbers derived from the city store.
    pub fn reads_store(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Resources)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoute(pub String);

impl fmt::Display for UnknownRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no page at '{}' (try one of: {})", self.0, route_list())
    }
}

impl std::error::Error for UnknownRoute {}

impl FromStr for Route {
    type Err = UnknownRoute;

    /// Accepts the path with or without the leading slash, ignoring a
    /// trailing one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.trim_matches('/');
        Route::ALL
            .iter()
            .copied()
            .find(|route| route.path().trim_start_matches('/') == normalized)
            .ok_or_else(|| UnknownRoute(trimmed.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

pub fn route_list() -> String {
    Route::ALL.iter().map(|r| r.path()).collect::<Vec<_>>().join(", ")
}

/// Everything a page needs to render: the shared store handle and
/// display preferences.
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub store: CityStore,
    pub thousands_separator: bool,
}

impl ViewContext {
    pub fn new(store: CityStore) -> Self {
        Self { store, thousands_separator: true }
    }

    pub fn count(&self, value: impl Into<i128>) -> String {
        let value = value.into();
        if self.thousands_separator {
            format_count(value)
        } else {
            value.to_string()
        }
    }
}

pub fn navigation_bar(current: Route) -> String {
    let items: Vec<String> = Route::ALL
        .iter()
        .map(|route| {
            if *route == current {
                format!("[{}]", route.title())
            } else {
                route.title().to_string()
            }
        })
        .collect();
    format!("🛡️  VigrahaRakṣhitā | {}", items.join(" · "))
}

/// Renders a page against the current store contents.
pub fn render(route: Route, ctx: &ViewContext) -> String {
    let body = match route {
        Route::Home => home::render(),
        Route::Dashboard => dashboard::render(ctx),
        Route::Emergency => emergency::render(),
        Route::AiPrediction => prediction::render(),
        Route::Volunteer => volunteer::render(),
        Route::Resources => resources::render(ctx),
    };
    format!("{}\n\n{}", navigation_bar(route), body)
}

pub(crate) fn heading(icon: &str, title: &str) -> String {
    let text = format!("{} {}", icon, title);
    let underline = "═".repeat(title.chars().count() + 3);
    format!("{}\n{}", text, underline)
}
