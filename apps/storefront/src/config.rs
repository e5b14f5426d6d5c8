use std::{fs, path::Path};

use anyhow::Context;
use storefront_core::StorefrontConfig;
use tracing::{info, warn};

pub const DEFAULT_CONFIG_PATH: &str = "storefront.toml";

/// Defaults, then the TOML file if present, then `APP__*` environment
/// overrides.
pub fn load_settings(path: &Path) -> anyhow::Result<StorefrontConfig> {
    let mut settings = match fs::read_to_string(path) {
        Ok(raw) => {
            info!(path = %path.display(), "loading storefront settings");
            parse_settings(&raw)
                .with_context(|| format!("failed to parse settings file '{}'", path.display()))?
        }
        Err(_) => StorefrontConfig::default(),
    };

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

pub fn parse_settings(raw: &str) -> anyhow::Result<StorefrontConfig> {
    let settings: StorefrontConfig = toml::from_str(raw)?;
    if settings.products.is_empty() {
        warn!("settings define no products; the catalog will be empty");
    }
    Ok(settings)
}

pub fn apply_env_overrides(
    settings: &mut StorefrontConfig,
    lookup: impl Fn(&str) -> Option<String>,
) {
    let millis = |key: &str| -> Option<u64> {
        let raw = lookup(key)?;
        match raw.trim().parse::<u64>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                warn!(key, value = %raw, "ignoring non-numeric override");
                None
            }
        }
    };

    if let Some(v) = millis("APP__VALIDATION_FEEDBACK_DELAY_MS") {
        settings.timings.validation_feedback_delay_ms = v;
    }
    if let Some(v) = millis("APP__PROCESSING_DELAY_MS") {
        settings.timings.processing_delay_ms = v;
    }
    if let Some(v) = millis("APP__CONFIRMATION_DELAY_MS") {
        settings.timings.confirmation_delay_ms = v;
    }
    if let Some(v) = millis("APP__RESET_DELAY_MS") {
        settings.timings.reset_delay_ms = v;
    }
    if let Some(v) = millis("APP__NOTIFICATION_COUNTDOWN_SECONDS") {
        settings.notifications.countdown_seconds = u32::try_from(v).unwrap_or(u32::MAX);
    }
    if let Some(v) = millis("APP__NOTIFICATION_TICK_MS") {
        settings.notifications.tick_ms = v;
    }
    if let Some(v) = millis("APP__CONTACT_SEND_DELAY_MS") {
        settings.contact.send_delay_ms = v;
    }
    if let Some(v) = millis("APP__CONTACT_RESET_DELAY_MS") {
        settings.contact.reset_delay_ms = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
