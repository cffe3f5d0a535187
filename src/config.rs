//! Runtime configuration.
//!
//! The host page may embed a JSON blob in
//! `<script id="dashboard-config" type="application/json">`; every field is
//! optional and anything missing or malformed falls back to the defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::currency_symbol_for;

pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub deposit_ms: u64,
    pub withdraw_ms: u64,
    pub investment_ms: u64,
    pub ticket_ms: u64,
    pub ticket_followup_ms: u64,
    pub refresh_balances_ms: u64,
    pub support_chat_ms: u64,
    pub withdraw_chat_ms: u64,
    pub chat_reply_ms: u64,
    pub toast_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Timings {
            deposit_ms: 3000,
            withdraw_ms: 3000,
            investment_ms: 2000,
            ticket_ms: 2000,
            ticket_followup_ms: 1000,
            refresh_balances_ms: 1500,
            support_chat_ms: 2000,
            withdraw_chat_ms: 1000,
            chat_reply_ms: 2000,
            toast_ms: 5000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub currency_code: String,
    pub log_level: String,
    pub support_email_action: String,
    pub available_balance: f64,
    pub timings: Timings,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            currency_code: "USD".to_string(),
            log_level: "info".to_string(),
            support_email_action: "/support/email/".to_string(),
            available_balance: 12450.0,
            timings: Timings::default(),
        }
    }
}

impl AppConfig {
    pub fn currency_symbol(&self) -> &'static str {
        currency_symbol_for(&self.currency_code)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    pub fn millis(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }
}

pub fn parse_config(raw: &str) -> Result<AppConfig> {
    Ok(serde_json::from_str::<AppConfig>(raw)?)
}

pub fn load_config() -> AppConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => parse_config(&raw).unwrap_or_else(|err| {
            log::warn!("ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, err);
            AppConfig::default()
        }),
        _ => AppConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_blob_keeps_other_defaults() {
        let cfg = parse_config(r#"{"currency_code":"EUR","timings":{"deposit_ms":10}}"#).unwrap();
        assert_eq!(cfg.currency_symbol(), "€");
        assert_eq!(cfg.timings.deposit_ms, 10);
        assert_eq!(cfg.timings.withdraw_ms, 3000);
        assert_eq!(cfg.available_balance, 12450.0);
    }

    #[test]
    fn malformed_blob_is_an_error() {
        assert!(parse_config("{not json").is_err());
    }

    #[test]
    fn log_level_falls_back_to_info() {
        let mut cfg = AppConfig::default();
        assert_eq!(cfg.log_level(), log::Level::Info);
        cfg.log_level = "debug".into();
        assert_eq!(cfg.log_level(), log::Level::Debug);
        cfg.log_level = "chatty".into();
        assert_eq!(cfg.log_level(), log::Level::Info);
    }
}
