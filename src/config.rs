//! Runtime Configuration
//!
//! Defaults can be overridden from the page query string, e.g.
//! `index.html?log=debug&toast_ms=5000`.

use std::str::FromStr;

use log::Level;

const DEFAULT_TOAST_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Minimum level written to the browser console
    pub log_level: Level,
    /// How long an error toast stays on screen
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl AppConfig {
    /// Apply overrides from a query string. Unknown keys and bad values are ignored.
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "log" => {
                    if let Ok(level) = Level::from_str(value) {
                        config.log_level = level;
                    }
                }
                "toast_ms" => {
                    if let Ok(ms) = value.parse() {
                        config.toast_duration_ms = ms;
                    }
                }
                _ => {}
            }
        }
        config
    }

    /// Read overrides from the current page location
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }
}
