use crate::error::{InventoryError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const SETTINGS_FILENAME: &str = "settings.json";
const GATEWAY_FILENAME: &str = "config.json";

pub const DEFAULT_ALERT_DAYS: i64 = 3;
const DEFAULT_ITEMS_PER_PAGE: usize = 10;

pub const ENV_ACCOUNT_SID: &str = "SHELFLIFE_TWILIO_ACCOUNT_SID";
pub const ENV_AUTH_TOKEN: &str = "SHELFLIFE_TWILIO_AUTH_TOKEN";
pub const ENV_FROM_NUMBER: &str = "SHELFLIFE_TWILIO_FROM";
pub const ENV_API_BASE: &str = "SHELFLIFE_TWILIO_API_BASE";

/// User-facing settings, stored in `settings.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_true")]
    pub sms_alerts: bool,

    /// Destination for alert messages
    #[serde(default)]
    pub phone_number: Option<String>,

    /// A product is alerted on the day it has exactly this many days left
    #[serde(default = "default_alert_days")]
    pub alert_days: i64,

    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

fn default_true() -> bool {
    true
}

fn default_alert_days() -> i64 {
    DEFAULT_ALERT_DAYS
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sms_alerts: true,
            phone_number: None,
            alert_days: DEFAULT_ALERT_DAYS,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl Settings {
    pub const KEYS: [&'static str; 4] =
        ["sms-alerts", "phone-number", "alert-days", "items-per-page"];

    /// Load settings from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        load_json(dir.as_ref(), SETTINGS_FILENAME)
    }

    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        save_json(dir.as_ref(), SETTINGS_FILENAME, self)
    }

    /// Phone number alerts go to, when alerts are on and a number is set.
    pub fn alert_destination(&self) -> Option<&str> {
        if !self.sms_alerts {
            return None;
        }
        self.phone_number
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "sms-alerts" => Some(self.sms_alerts.to_string()),
            "phone-number" => Some(self.phone_number.clone().unwrap_or_default()),
            "alert-days" => Some(self.alert_days.to_string()),
            "items-per-page" => Some(self.items_per_page.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        match key {
            "sms-alerts" => {
                self.sms_alerts = parse_bool(value)
                    .ok_or_else(|| format!("Invalid value for sms-alerts: {}", value))?;
            }
            "phone-number" => {
                self.phone_number = match value {
                    "" | "none" => None,
                    number => Some(number.to_string()),
                };
            }
            "alert-days" => {
                let days: i64 = value
                    .parse()
                    .map_err(|_| format!("alert-days must be a whole number: {}", value))?;
                if days < 0 {
                    return Err("alert-days cannot be negative".to_string());
                }
                self.alert_days = days;
            }
            "items-per-page" => {
                let n: usize = value
                    .parse()
                    .map_err(|_| format!("items-per-page must be a whole number: {}", value))?;
                if n == 0 {
                    return Err("items-per-page must be at least 1".to_string());
                }
                self.items_per_page = n;
            }
            other => return Err(format!("Unknown setting: {}", other)),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// SMS gateway credentials, stored in `config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GatewayConfig {
    #[serde(default)]
    pub account_sid: Option<String>,
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default)]
    pub from_number: Option<String>,
    /// Alternative API root; the public Twilio endpoint when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
}

impl GatewayConfig {
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        load_json(dir.as_ref(), GATEWAY_FILENAME)
    }

    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        save_json(dir.as_ref(), GATEWAY_FILENAME, self)
    }

    /// Load from file, then let `SHELFLIFE_TWILIO_*` variables win.
    pub fn load_with_env<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let config = Self::load(dir)?;
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(sid) = pick(ENV_ACCOUNT_SID) {
            self.account_sid = Some(sid);
        }
        if let Some(token) = pick(ENV_AUTH_TOKEN) {
            self.auth_token = Some(token);
        }
        if let Some(from) = pick(ENV_FROM_NUMBER) {
            self.from_number = Some(from);
        }
        if let Some(base) = pick(ENV_API_BASE) {
            self.api_base = Some(base);
        }
        self
    }

    pub fn is_complete(&self) -> bool {
        [&self.account_sid, &self.auth_token, &self.from_number]
            .iter()
            .all(|field| field.as_deref().is_some_and(|v| !v.is_empty()))
    }
}

fn load_json<T: DeserializeOwned + Default>(dir: &Path, filename: &str) -> Result<T> {
    let path = dir.join(filename);
    if !path.exists() {
        return Ok(T::default());
    }
    let content = fs::read_to_string(&path)?;
    serde_json::from_str(&content).map_err(|e| {
        InventoryError::Config(format!("{} is not valid: {}", path.display(), e))
    })
}

fn save_json<T: Serialize>(dir: &Path, filename: &str, value: &T) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    let content = serde_json::to_string_pretty(value)?;
    fs::write(dir.join(filename), content)?;
    Ok(())
}
