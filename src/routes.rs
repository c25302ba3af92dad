//! Route Table
//!
//! Maps URL paths (history mode) to pages.

/// Application pages
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Gathering,
    Crafting,
    Fishing,
    GoldSaucer,
    Logs,
    Settings,
}

impl Route {
    /// All routes in navigation order
    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::Gathering,
        Route::Crafting,
        Route::Fishing,
        Route::GoldSaucer,
        Route::Logs,
        Route::Settings,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Gathering => "/gathering",
            Route::Crafting => "/crafting",
            Route::Fishing => "/fishing",
            Route::GoldSaucer => "/goldsaucer",
            Route::Logs => "/logs",
            Route::Settings => "/settings",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Gathering => "Gathering",
            Route::Crafting => "Crafting",
            Route::Fishing => "Fishing",
            Route::GoldSaucer => "GoldSaucer",
            Route::Logs => "Logs",
            Route::Settings => "Settings",
        }
    }

    /// Label shown in the navigation bar
    pub fn title(self) -> &'static str {
        match self {
            Route::GoldSaucer => "Gold Saucer",
            other => other.name(),
        }
    }

    /// Resolve a location path. Query, fragment and a trailing slash are ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };
        Route::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// Path of the current page
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Push `route` onto the browser history without reloading
pub fn push_history(route: Route) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path())) {
        log::warn!("[ROUTER] pushState failed for {}: {:?}", route.path(), e);
    }
}
