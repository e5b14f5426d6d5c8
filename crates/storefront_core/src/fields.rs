//! Required order-form fields and their human labels.

use std::fmt;

use serde::{Deserialize, Serialize};
use shared::protocol::FormFields;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderField {
    FullName,
    Phone,
    Address,
    City,
    State,
    Pincode,
    PaymentMethod,
}

impl OrderField {
    /// Validation order.
    pub const REQUIRED: [OrderField; 7] = [
        OrderField::FullName,
        OrderField::Phone,
        OrderField::Address,
        OrderField::City,
        OrderField::State,
        OrderField::Pincode,
        OrderField::PaymentMethod,
    ];

    /// Form key as submitted by the page.
    pub fn key(self) -> &'static str {
        match self {
            OrderField::FullName => "fullName",
            OrderField::Phone => "phone",
            OrderField::Address => "address",
            OrderField::City => "city",
            OrderField::State => "state",
            OrderField::Pincode => "pincode",
            OrderField::PaymentMethod => "paymentMethod",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderField::FullName => "full name",
            OrderField::Phone => "phone",
            OrderField::Address => "address",
            OrderField::City => "city",
            OrderField::State => "state",
            OrderField::Pincode => "pincode",
            OrderField::PaymentMethod => "payment method",
        }
    }

    pub fn from_key(key: &str) -> Option<OrderField> {
        Self::REQUIRED.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub(crate) fn is_blank(fields: &FormFields, key: &str) -> bool {
    fields.get(key).map_or(true, |value| value.trim().is_empty())
}

/// First required field that is absent or blank, in validation order.
pub fn first_missing(fields: &FormFields) -> Option<OrderField> {
    OrderField::REQUIRED
        .into_iter()
        .find(|field| is_blank(fields, field.key()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> FormFields {
        OrderField::REQUIRED
            .into_iter()
            .map(|field| (field.key().to_string(), format!("{field} value")))
            .collect()
    }

    #[test]
    fn labels_are_lower_case_words() {
        assert_eq!(OrderField::FullName.label(), "full name");
        assert_eq!(OrderField::PaymentMethod.label(), "payment method");
        assert_eq!(OrderField::Pincode.to_string(), "pincode");
    }

    #[test]
    fn keys_round_trip_through_lookup() {
        for field in OrderField::REQUIRED {
            assert_eq!(OrderField::from_key(field.key()), Some(field));
        }
        assert_eq!(OrderField::from_key("email"), None);
    }

    #[test]
    fn reports_first_missing_field_in_validation_order() {
        let mut fields = complete();
        assert_eq!(first_missing(&fields), None);

        fields.remove("pincode");
        fields.insert("phone".into(), "   ".into());
        assert_eq!(first_missing(&fields), Some(OrderField::Phone));
    }
}
