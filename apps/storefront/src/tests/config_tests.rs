use super::{apply_env_overrides, load_settings, parse_settings};

use std::{
    collections::HashMap,
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

use shared::domain::Rupees;
use storefront_core::StorefrontConfig;

#[test]
fn partial_file_keeps_defaults_for_missing_sections() {
    let settings = parse_settings(
        r#"
        [timings]
        processing_delay_ms = 500

        [[products]]
        name = "Tulsi Drops"
        category = "wellness"
        price = 149
        "#,
    )
    .expect("parse");

    assert_eq!(settings.timings.processing_delay_ms, 500);
    assert_eq!(settings.timings.confirmation_delay_ms, 2000);
    assert_eq!(settings.notifications.countdown_seconds, 5);
    assert_eq!(settings.products.len(), 1);
    assert_eq!(settings.products[0].price, Rupees(149));
    assert_eq!(settings.products[0].original_price, None);
}

#[test]
fn env_overrides_win_and_bad_values_are_ignored() {
    let vars: HashMap<&str, &str> = [
        ("APP__PROCESSING_DELAY_MS", "10"),
        ("APP__RESET_DELAY_MS", "soon"),
        ("APP__NOTIFICATION_COUNTDOWN_SECONDS", "2"),
    ]
    .into_iter()
    .collect();

    let mut settings = StorefrontConfig::default();
    apply_env_overrides(&mut settings, |key| vars.get(key).map(|v| v.to_string()));

    assert_eq!(settings.timings.processing_delay_ms, 10);
    assert_eq!(settings.timings.reset_delay_ms, 1000);
    assert_eq!(settings.notifications.countdown_seconds, 2);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("storefront_missing_{suffix}.toml"));

    let settings = load_settings(&path).expect("defaults");
    assert!(!settings.products.is_empty());
}

#[test]
fn malformed_file_is_an_error() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("storefront_bad_{suffix}.toml"));
    fs::write(&path, "[timings\nprocessing_delay_ms = ").expect("write");

    let err = load_settings(&path).expect_err("parse failure");
    assert!(err.to_string().contains("failed to parse settings file"));

    fs::remove_file(path).expect("cleanup");
}
