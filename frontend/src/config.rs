use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_APP_TITLE: &str = "Shift Scheduler";
const ENV_GLOBAL: &str = "__SHIFTBOARD_ENV";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub app_title: Option<String>,
}

impl RuntimeConfig {
    pub fn log_level(&self) -> log::Level {
        self.log_level
            .as_deref()
            .and_then(parse_log_level)
            .unwrap_or(log::Level::Info)
    }

    pub fn app_title(&self) -> String {
        self.app_title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .unwrap_or(DEFAULT_APP_TITLE)
            .to_string()
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

fn parse_log_level(raw: &str) -> Option<log::Level> {
    raw.trim().parse().ok()
}

pub fn parse_runtime_config(raw: &str) -> Result<RuntimeConfig, serde_json::Error> {
    serde_json::from_str(raw)
}

fn snapshot_from_globals() -> Option<RuntimeConfig> {
    // Optional global object: window.__SHIFTBOARD_ENV = { log_level: "...", app_title: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &ENV_GLOBAL.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let raw: String = js_sys::JSON::stringify(&any).ok()?.into();
    match parse_runtime_config(&raw) {
        Ok(cfg) => Some(cfg),
        Err(err) => {
            web_sys::console::warn_1(
                &format!("Ignoring malformed {}: {}", ENV_GLOBAL, err).into(),
            );
            None
        }
    }
}

/// Reads the runtime config once; later calls return the cached value.
pub fn init() -> &'static RuntimeConfig {
    RUNTIME_CONFIG.get_or_init(|| snapshot_from_globals().unwrap_or_default())
}

pub fn runtime_config() -> RuntimeConfig {
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}

pub fn app_title() -> String {
    runtime_config().app_title()
}
