//! Настройки сайта: бренд, контакты, порог прокрутки, границы формы поиска.
//!
//! Конфигурация по умолчанию встроена в сборку (`DEFAULT_CONFIG`);
//! частичный JSON дополняется значениями по умолчанию.

use anyhow::{ensure, Context};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::shared::scroll::{ScrollState, DEFAULT_SCROLL_THRESHOLD};

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"{
    "site_title": "Sahan Tourism",
    "brand_name": "SAHAN",
    "brand_tagline": "Tourism Somalia",
    "helpline_label": "+01 (123) 4567 90",
    "helpline_href": "tel:+01123456790",
    "admin_name": "Admin User",
    "admin_email": "admin@sahantourism.com",
    "scroll_threshold": 200.0,
    "persons": { "min": 1, "max": 20, "default": 2 },
    "duration_days": { "min": 1, "max": 8, "default_from": 3, "default_to": 7 }
}"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_title: String,
    pub brand_name: String,
    pub brand_tagline: String,
    pub helpline_label: String,
    pub helpline_href: String,
    pub admin_name: String,
    pub admin_email: String,
    /// Смещение прокрутки (px), после которого навбар главной меняет вид
    pub scroll_threshold: f64,
    pub persons: PersonsLimits,
    pub duration_days: DurationLimits,
}

/// Границы счётчика гостей
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonsLimits {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

/// Границы слайдера длительности тура, дни
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationLimits {
    pub min: u32,
    pub max: u32,
    pub default_from: u32,
    pub default_to: u32,
}

impl Default for PersonsLimits {
    fn default() -> Self {
        Self {
            min: 1,
            max: 20,
            default: 2,
        }
    }
}

impl Default for DurationLimits {
    fn default() -> Self {
        Self {
            min: 1,
            max: 8,
            default_from: 3,
            default_to: 7,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "Sahan Tourism".to_string(),
            brand_name: "SAHAN".to_string(),
            brand_tagline: "Tourism Somalia".to_string(),
            helpline_label: "+01 (123) 4567 90".to_string(),
            helpline_href: "tel:+01123456790".to_string(),
            admin_name: "Admin User".to_string(),
            admin_email: "admin@sahantourism.com".to_string(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            persons: PersonsLimits::default(),
            duration_days: DurationLimits::default(),
        }
    }
}

impl SiteConfig {
    pub fn scroll_state(&self) -> ScrollState {
        ScrollState::new(self.scroll_threshold)
    }

    /// Проверка согласованности границ
    pub fn validate(&self) -> anyhow::Result<()> {
        let p = &self.persons;
        ensure!(
            p.min >= 1 && p.min <= p.default && p.default <= p.max,
            "persons limits must satisfy 1 <= min <= default <= max, got {}..={} (default {})",
            p.min,
            p.max,
            p.default
        );
        let d = &self.duration_days;
        ensure!(
            d.min <= d.default_from && d.default_from <= d.default_to && d.default_to <= d.max,
            "duration limits must satisfy min <= from <= to <= max, got {}..={} (default {}-{})",
            d.min,
            d.max,
            d.default_from,
            d.default_to
        );
        ensure!(
            self.scroll_threshold >= 0.0,
            "scroll_threshold must not be negative, got {}",
            self.scroll_threshold
        );
        Ok(())
    }
}

/// Разбор конфигурации из JSON с проверкой границ
pub fn parse_site_config(json: &str) -> anyhow::Result<SiteConfig> {
    let config: SiteConfig =
        serde_json::from_str(json).context("failed to parse site configuration")?;
    config.validate().context("invalid site configuration")?;
    Ok(config)
}

/// Встроенная конфигурация
pub fn load_site_config() -> anyhow::Result<SiteConfig> {
    parse_site_config(DEFAULT_CONFIG)
}

static SITE_CONFIG: Lazy<SiteConfig> = Lazy::new(|| load_site_config().unwrap_or_default());

/// Общая конфигурация; при ошибке разбора используются значения по умолчанию
pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_site_config();
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = parse_site_config(r#"{ "brand_name": "PATHFINDER" }"#).unwrap();
        assert_eq!(config.brand_name, "PATHFINDER");
        assert_eq!(config.scroll_threshold, 200.0);
        assert_eq!(config.persons, PersonsLimits::default());
    }

    #[test]
    fn test_invalid_limits_are_rejected() {
        let err = parse_site_config(r#"{ "persons": { "min": 5, "max": 3, "default": 4 } }"#)
            .unwrap_err();
        assert!(format!("{:#}", err).contains("persons limits"));

        let err = parse_site_config(
            r#"{ "duration_days": { "min": 1, "max": 8, "default_from": 7, "default_to": 3 } }"#,
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("duration limits"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = parse_site_config("{ not json").unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_shared_config_and_scroll_state() {
        let config = site_config();
        assert_eq!(config.site_title, "Sahan Tourism");
        assert!(config.scroll_state().is_scrolled(200.0));
    }
}
