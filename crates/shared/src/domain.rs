use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(pub u64);
    };
}

id_newtype!(NotificationId);

/// Whole-rupee amount.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rupees(pub u64);

impl Rupees {
    pub fn times(self, quantity: u32) -> Rupees {
        Rupees(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSelection {
    pub name: String,
    pub unit_price: Rupees,
    pub original_price: Option<Rupees>,
}

impl ProductSelection {
    pub fn new(name: impl Into<String>, unit_price: Rupees, original_price: Option<Rupees>) -> Self {
        Self {
            name: name.into(),
            unit_price,
            original_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub name: String,
    pub unit_price: Rupees,
    pub quantity: u32,
}

/// Catalog entry shown as a product card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub price: Rupees,
    #[serde(default)]
    pub original_price: Option<Rupees>,
}

impl Product {
    pub fn selection(&self) -> ProductSelection {
        ProductSelection::new(self.name.clone(), self.price, self.original_price)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderState {
    Idle,
    ModalOpen,
    Submitting,
    Confirmed,
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderState::Idle => "idle",
            OrderState::ModalOpen => "modal_open",
            OrderState::Submitting => "submitting",
            OrderState::Confirmed => "confirmed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactState {
    Ready,
    Sending,
    Sent,
}

impl fmt::Display for ContactState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContactState::Ready => "ready",
            ContactState::Sending => "sending",
            ContactState::Sent => "sent",
        };
        f.write_str(name)
    }
}
