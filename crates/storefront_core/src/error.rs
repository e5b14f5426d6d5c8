use shared::{
    domain::{ContactState, OrderState},
    error::{CommandError, ErrorCode},
};
use thiserror::Error;

use crate::fields::OrderField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Please fill in the {}", .field.label())]
pub struct ValidationError {
    pub field: OrderField,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("cannot {operation} while the order is {state}")]
    InvalidState {
        operation: &'static str,
        state: OrderState,
    },
    #[error("cannot submit the contact form while it is {state}")]
    ContactBusy { state: ContactState },
    #[error("Please fill in all required fields ({})", .fields.join(", "))]
    Incomplete { fields: Vec<String> },
    #[error("unknown product '{name}'")]
    UnknownProduct { name: String },
}

impl From<FlowError> for CommandError {
    fn from(value: FlowError) -> Self {
        let code = match &value {
            FlowError::Validation(_) | FlowError::Incomplete { .. } => ErrorCode::Validation,
            FlowError::InvalidState { .. } | FlowError::ContactBusy { .. } => {
                ErrorCode::InvalidState
            }
            FlowError::UnknownProduct { .. } => ErrorCode::NotFound,
        };
        CommandError::new(code, value.to_string())
    }
}
