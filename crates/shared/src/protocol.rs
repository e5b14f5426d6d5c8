use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        CartItem, ContactState, NotificationId, NotificationKind, OrderState, ProductSelection,
        Rupees,
    },
    error::CommandError,
};

/// Form input as produced by the page's form glue: field key to raw value.
pub type FormFields = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum UiCommand {
    OpenOrder {
        name: String,
        price: Rupees,
        #[serde(default)]
        original_price: Option<Rupees>,
    },
    /// Opens the order modal for a catalog product looked up by name.
    OpenProduct {
        name: String,
    },
    ChangeQuantity {
        delta: i32,
    },
    SubmitOrder {
        fields: FormFields,
    },
    CloseOrder,
    AddToCart {
        name: String,
        price: Rupees,
    },
    Notify {
        message: String,
        kind: NotificationKind,
    },
    Dismiss {
        id: NotificationId,
    },
    FilterProducts {
        category: String,
    },
    SubmitContact {
        fields: FormFields,
    },
    /// Moves the virtual clock forward.
    Advance {
        ms: u64,
    },
}

impl UiCommand {
    pub fn name(&self) -> &'static str {
        match self {
            UiCommand::OpenOrder { .. } => "open_order",
            UiCommand::OpenProduct { .. } => "open_product",
            UiCommand::ChangeQuantity { .. } => "change_quantity",
            UiCommand::SubmitOrder { .. } => "submit_order",
            UiCommand::CloseOrder => "close_order",
            UiCommand::AddToCart { .. } => "add_to_cart",
            UiCommand::Notify { .. } => "notify",
            UiCommand::Dismiss { .. } => "dismiss",
            UiCommand::FilterProducts { .. } => "filter_products",
            UiCommand::SubmitContact { .. } => "submit_contact",
            UiCommand::Advance { .. } => "advance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSnapshot {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub remaining_seconds: u32,
    pub leaving: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub now_ms: u64,
    pub order_state: OrderState,
    pub selection: Option<ProductSelection>,
    pub quantity: u32,
    pub total: Rupees,
    pub cart: Vec<CartItem>,
    pub notifications: Vec<NotificationSnapshot>,
    pub contact_state: ContactState,
    pub active_filter: String,
    pub visible_products: Vec<String>,
}

/// One replayed command and what came of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayStep {
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
}
