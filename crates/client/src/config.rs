//! Where the console API lives.
//!
//! Resolution order:
//! - wasm: `localStorage["console_api_base"]`, then the page origin
//! - native: `CONSOLE_API_URL`, then `http://localhost:9090`

pub const STORAGE_KEY: &str = "console_api_base";
pub const ENV_VAR: &str = "CONSOLE_API_URL";
pub const DEFAULT_API_BASE: &str = "http://localhost:9090";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub api_base: String,
}

impl ConsoleConfig {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: normalize_base_url(api_base),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var(ENV_VAR) {
            Ok(value) if !value.trim().is_empty() => Self::new(&value),
            _ => Self::new(DEFAULT_API_BASE),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(base)) = storage.get_item(STORAGE_KEY) {
                    if !base.trim().is_empty() {
                        return Self::new(&base);
                    }
                }
            }
            if let Ok(origin) = window.location().origin() {
                return Self::new(&origin);
            }
        }
        Self::new("")
    }
}

fn is_local_host(host: &str) -> bool {
    host == "localhost"
        || host == "127.0.0.1"
        || host == "0.0.0.0"
        || host.starts_with("192.168.")
        || host.starts_with("10.")
}

/// Turn a configured host or URL into a base URL without a trailing slash.
/// An empty value means "relative to the current origin".
pub fn normalize_base_url(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    if raw.contains("://") {
        return raw.trim_end_matches('/').to_string();
    }

    let host = raw.trim_end_matches('/');
    let host_part = host.split(':').next().unwrap_or(host);
    if is_local_host(host_part) {
        format!("http://{host}")
    } else {
        format!("https://{host}")
    }
}
