//! Client configuration
//!
//! The hosting page may define `window.__TENDER_PORTAL_CONFIG__` before the
//! WASM bundle starts; every field is optional and falls back to the defaults
//! below.

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use wasm_bindgen::JsValue;

use super::date_utils::{format_date_long, format_datetime_long};
use super::number_format::format_currency;

const CONFIG_GLOBAL: &str = "__TENDER_PORTAL_CONFIG__";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Absolute API base URL. `None` means the origin of the current page.
    pub api_base: Option<String>,
    /// ISO currency code for prices
    pub currency: String,
    /// Time zone used to render timestamps, minutes east of UTC
    pub utc_offset_minutes: i32,
    /// Rows per page on the tender list (server side page size)
    pub page_size: u32,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            currency: "RUB".to_string(),
            utc_offset_minutes: 180,
            page_size: 10,
            log_level: "debug".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Debug)
    }

    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60)
            .unwrap_or_else(|| Utc.fix())
    }

    /// Base URL for API requests, without a trailing slash
    pub fn resolved_api_base(&self) -> String {
        match self.api_base.as_deref() {
            Some(base) if !base.is_empty() => base.trim_end_matches('/').to_string(),
            _ => page_origin(),
        }
    }

    pub fn format_price(&self, value: f64) -> String {
        format_currency(value, &self.currency)
    }

    pub fn format_date(&self, value: &str) -> String {
        format_date_long(value, self.utc_offset())
    }

    pub fn format_datetime(&self, value: &str) -> String {
        format_datetime_long(value, self.utc_offset())
    }
}

/// Origin of the current page, e.g. "https://tenders.example.ru".
/// Empty outside a browser, which keeps request paths relative.
fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Read the configuration object injected by the hosting page.
///
/// Returns the defaults when the global is absent and an error when it is
/// present but malformed.
pub fn read_config() -> Result<ClientConfig, String> {
    let Some(window) = web_sys::window() else {
        return Ok(ClientConfig::default());
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| format!("Failed to read {}: {:?}", CONFIG_GLOBAL, e))?;
    if value.is_undefined() || value.is_null() {
        return Ok(ClientConfig::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| format!("Invalid {}: {}", CONFIG_GLOBAL, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"currency": "USD", "utc_offset_minutes": 0}"#).unwrap();
        assert_eq!(config.currency, "USD");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.api_base, None);
        assert_eq!(config.format_date("2025-01-01T00:30:00Z"), "1 января 2025 г.");
    }

    #[test]
    fn test_default_offset_is_moscow() {
        let config = ClientConfig::default();
        assert_eq!(
            config.format_datetime("2025-01-01T12:00:00Z"),
            "1 января 2025 г. в 15:00"
        );
        assert_eq!(config.format_price(1234.5), "1\u{a0}234,50\u{a0}₽");
    }

    #[test]
    fn test_explicit_api_base_is_trimmed() {
        let config = ClientConfig {
            api_base: Some("http://localhost:3000/".to_string()),
            ..ClientConfig::default()
        };
        assert_eq!(config.resolved_api_base(), "http://localhost:3000");
    }

    #[test]
    fn test_log_level_parsing() {
        let mut config = ClientConfig::default();
        config.log_level = "warn".to_string();
        assert_eq!(config.log_level(), log::Level::Warn);
        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
