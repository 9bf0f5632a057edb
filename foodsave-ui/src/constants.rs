// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime configuration.
//!
//! The hosting page injects `window.__APP_CONFIG` before the wasm bundle
//! loads. Every key is optional; accessors fall back to the built-in
//! defaults so the landing page renders even without a config object.

use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

pub const DEFAULT_GOOGLE_PLAY_URL: &str =
    "https://play.google.com/store/apps/details?id=uz.foodsave.app";
pub const DEFAULT_LEARN_MORE_URL: &str = "https://example.com/learn-more";

/// Id of the section the call-to-action "learn more" button scrolls to.
pub const SOLUTION_SECTION_ID: &str = "solution-section";
pub const HOW_IT_WORKS_SECTION_ID: &str = "how-it-works";

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 5_000;
/// Maximum number of toasts visible at once; the newest wins.
pub const TOAST_LIMIT: usize = 1;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RuntimeConfig {
    #[serde(rename = "googlePlayUrl")]
    #[serde(default)]
    pub google_play_url: Option<String>,
    #[serde(rename = "learnMoreUrl")]
    #[serde(default)]
    pub learn_more_url: Option<String>,
    #[serde(rename = "logLevel")]
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(rename = "matomoBaseUrl")]
    #[serde(default)]
    pub matomo_base_url: Option<String>,
    #[serde(rename = "matomoSiteId")]
    #[serde(default)]
    pub matomo_site_id: Option<u32>,
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = window().ok_or_else(|| "No global window".to_string())?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

/// Config object, or defaults when it is missing or malformed.
///
/// Logs at debug level only; `main` reports a missing config at startup.
pub fn app_config_or_default() -> RuntimeConfig {
    app_config().unwrap_or_else(|e| {
        log::debug!("{e}; using built-in defaults");
        RuntimeConfig::default()
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

pub fn google_play_url() -> String {
    non_empty(app_config_or_default().google_play_url)
        .unwrap_or_else(|| DEFAULT_GOOGLE_PLAY_URL.to_string())
}

pub fn learn_more_url() -> String {
    non_empty(app_config_or_default().learn_more_url)
        .unwrap_or_else(|| DEFAULT_LEARN_MORE_URL.to_string())
}

/// Console log level. Unknown names fall back to `Info`; `off` disables
/// the console logger entirely.
pub fn log_level() -> LevelFilter {
    let configured = app_config().ok().and_then(|c| c.log_level);
    parse_level(configured.as_deref())
}

pub fn parse_level(name: Option<&str>) -> LevelFilter {
    let fallback = if cfg!(feature = "debugAssertions") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    name.and_then(|n| LevelFilter::from_str(n.trim()).ok())
        .unwrap_or(fallback)
}

/// Matomo endpoint and site id, when both are configured.
pub fn matomo_target() -> Option<(String, u32)> {
    let config = app_config().ok()?;
    let base = non_empty(config.matomo_base_url)?;
    let site = config.matomo_site_id?;
    let base = if base.ends_with('/') {
        base
    } else {
        format!("{base}/")
    };
    Some((base, site))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_level_accepts_known_names() {
        assert_eq!(parse_level(Some("warn")), LevelFilter::Warn);
        assert_eq!(parse_level(Some(" DEBUG ")), LevelFilter::Debug);
        assert_eq!(parse_level(Some("trace")), LevelFilter::Trace);
    }

    #[test]
    fn off_disables_console_logging() {
        assert_eq!(parse_level(Some("off")), LevelFilter::Off);
        assert_eq!(parse_level(Some("OFF")).to_level(), None);
        assert_eq!(parse_level(Some("error")).to_level(), Some(log::Level::Error));
    }

    #[test]
    fn parse_level_falls_back() {
        let expected = if cfg!(feature = "debugAssertions") {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        assert_eq!(parse_level(None), expected);
        assert_eq!(parse_level(Some("loud")), expected);
    }

    #[test]
    fn non_empty_filters_blank_strings() {
        assert_eq!(non_empty(Some("  ".into())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("x".into())), Some("x".into()));
    }
}
