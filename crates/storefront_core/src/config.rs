//! Tunable delays and page content. Every simulated wait in the storefront
//! comes from here rather than from the flow logic.

use std::time::Duration;

use serde::Deserialize;
use shared::domain::{Product, Rupees};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FlowTimings {
    pub validation_feedback_delay_ms: u64,
    pub processing_delay_ms: u64,
    pub confirmation_delay_ms: u64,
    pub reset_delay_ms: u64,
}

impl Default for FlowTimings {
    fn default() -> Self {
        Self {
            validation_feedback_delay_ms: 3000,
            processing_delay_ms: 2000,
            confirmation_delay_ms: 2000,
            reset_delay_ms: 1000,
        }
    }
}

impl FlowTimings {
    pub fn validation_feedback_delay(&self) -> Duration {
        Duration::from_millis(self.validation_feedback_delay_ms)
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    pub fn confirmation_delay(&self) -> Duration {
        Duration::from_millis(self.confirmation_delay_ms)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub countdown_seconds: u32,
    pub tick_ms: u64,
    pub exit_duration_ms: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            countdown_seconds: 5,
            tick_ms: 1000,
            exit_duration_ms: 300,
        }
    }
}

impl NotificationSettings {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn exit_duration(&self) -> Duration {
        Duration::from_millis(self.exit_duration_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactSettings {
    pub required_fields: Vec<String>,
    pub send_delay_ms: u64,
    pub reset_delay_ms: u64,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            required_fields: vec!["name".into(), "email".into(), "message".into()],
            send_delay_ms: 1500,
            reset_delay_ms: 3000,
        }
    }
}

impl ContactSettings {
    pub fn send_delay(&self) -> Duration {
        Duration::from_millis(self.send_delay_ms)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub timings: FlowTimings,
    pub notifications: NotificationSettings,
    pub contact: ContactSettings,
    pub products: Vec<Product>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            timings: FlowTimings::default(),
            notifications: NotificationSettings::default(),
            contact: ContactSettings::default(),
            products: default_products(),
        }
    }
}

fn default_products() -> Vec<Product> {
    let product = |name: &str, category: &str, price: u64, original: Option<u64>| Product {
        name: name.to_string(),
        category: category.to_string(),
        price: Rupees(price),
        original_price: original.map(Rupees),
    };
    vec![
        product("Herbal Tea", "wellness", 199, Some(249)),
        product("Ayurvedic Kit", "wellness", 499, Some(699)),
        product("Immunity Booster", "supplements", 349, Some(449)),
        product("Joint Care Oil", "pain-relief", 299, None),
        product("Neem Soap", "personal-care", 89, Some(120)),
    ]
}
