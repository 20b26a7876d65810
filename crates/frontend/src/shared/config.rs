use serde::Deserialize;
use web_sys::window;

/// Startup options read from the page query string, e.g. `?mount_id=app&log_level=info`.
/// Missing or malformed values fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Id of the element the app is mounted into
    pub mount_id: String,
    /// error | warn | info | debug | trace
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mount_id: "root".to_string(),
            log_level: "debug".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_query(query: &str) -> Self {
        serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_default()
    }

    pub fn from_location() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }

    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "info" => log::Level::Info,
            "trace" => log::Level::Trace,
            _ => log::Level::Debug,
        }
    }
}
