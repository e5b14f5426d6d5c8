//! Order modal state machine.
//!
//! ```text
//! Idle --open--> ModalOpen --submit--> Submitting --processing--> Confirmed
//!  ^                 |                     |                          |
//!  +----close--------+-------close---------+-----confirmation/close---+
//! ```
//!
//! The controller holds state only; the render adapter projects
//! [`OrderView`] onto the page and cues go to the animation backend.

use std::collections::BTreeMap;

use shared::{
    domain::{NotificationKind, OrderState, ProductSelection, Rupees},
    protocol::FormFields,
};
use tracing::{debug, info, warn};

use crate::{
    animation::{Cue, Target},
    cart::Cart,
    config::FlowTimings,
    effects::Effects,
    error::{FlowError, ValidationError},
    fields::{first_missing, OrderField},
    notifications::NotificationQueue,
    scheduler::TimerHandle,
};

pub const ORDER_PLACED_MESSAGE: &str =
    "🎉 Order placed successfully! We will contact you within 2 hours.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderTimer {
    ProcessingDone,
    ConfirmationDone,
    ResetSubmitControl,
    ClearInvalid(OrderField),
}

/// Appearance of the order form's submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitControl {
    Ready,
    Processing,
    Confirmed,
}

impl SubmitControl {
    pub fn label(self) -> &'static str {
        match self {
            SubmitControl::Ready => "Place Order Now",
            SubmitControl::Processing => "Processing Order...",
            SubmitControl::Confirmed => "Order Confirmed!",
        }
    }

    pub fn is_enabled(self) -> bool {
        self == SubmitControl::Ready
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderView {
    pub state: OrderState,
    pub selection: Option<ProductSelection>,
    pub quantity: u32,
    pub total: Rupees,
    pub submit: SubmitControl,
    pub invalid_fields: Vec<OrderField>,
    pub cart_count: usize,
    pub modal_visible: bool,
    /// Bumped each time the form inputs are cleared.
    pub form_resets: u64,
}

pub struct OrderFlowController {
    timings: FlowTimings,
    state: OrderState,
    selection: Option<ProductSelection>,
    quantity: u32,
    cart: Cart,
    submit: SubmitControl,
    invalid_fields: BTreeMap<OrderField, TimerHandle>,
    pending: Option<TimerHandle>,
    reset_timer: Option<TimerHandle>,
    form_resets: u64,
}

impl OrderFlowController {
    pub fn new(timings: FlowTimings) -> Self {
        Self {
            timings,
            state: OrderState::Idle,
            selection: None,
            quantity: 1,
            cart: Cart::new(),
            submit: SubmitControl::Ready,
            invalid_fields: BTreeMap::new(),
            pending: None,
            reset_timer: None,
            form_resets: 0,
        }
    }

    pub fn state(&self) -> OrderState {
        self.state
    }

    pub fn selection(&self) -> Option<&ProductSelection> {
        self.selection.as_ref()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total(&self) -> Rupees {
        self.selection
            .as_ref()
            .map(|selection| selection.unit_price.times(self.quantity))
            .unwrap_or_default()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn submit_control(&self) -> SubmitControl {
        self.submit
    }

    pub fn open_order(
        &mut self,
        fx: &mut Effects<'_>,
        selection: ProductSelection,
    ) -> Result<(), FlowError> {
        self.guard("open an order", &[OrderState::Idle, OrderState::Confirmed])?;

        // A confirmed session still owns its confirmation timer and form.
        fx.cancel_slot(&mut self.pending);
        fx.cancel_slot(&mut self.reset_timer);
        self.clear_invalid(fx);
        if self.state == OrderState::Confirmed {
            self.form_resets += 1;
        }
        self.reset_submit_control(fx);

        info!(
            product = %selection.name,
            price = selection.unit_price.0,
            "order modal opened"
        );
        self.selection = Some(selection);
        self.quantity = 1;
        self.state = OrderState::ModalOpen;
        fx.cue(Cue::Entrance(Target::Modal));
        Ok(())
    }

    /// Adjusts the quantity, never below one.
    pub fn change_quantity(&mut self, fx: &mut Effects<'_>, delta: i32) -> Result<u32, FlowError> {
        self.guard("change the quantity", &[OrderState::ModalOpen])?;

        let next = i64::from(self.quantity) + i64::from(delta);
        self.quantity = u32::try_from(next.max(1)).unwrap_or(u32::MAX);
        debug!(quantity = self.quantity, total = self.total().0, "quantity changed");
        fx.cue(Cue::Emphasis(Target::Quantity));
        Ok(self.quantity)
    }

    pub fn submit_order(
        &mut self,
        fx: &mut Effects<'_>,
        notices: &mut NotificationQueue,
        fields: &FormFields,
    ) -> Result<(), FlowError> {
        self.guard("submit an order", &[OrderState::ModalOpen])?;

        if let Some(field) = first_missing(fields) {
            let error = ValidationError { field };
            warn!(field = field.key(), "order form incomplete");
            notices.notify(fx, error.to_string(), NotificationKind::Error);
            self.flag_invalid(fx, field);
            return Err(error.into());
        }

        self.clear_invalid(fx);
        self.state = OrderState::Submitting;
        self.submit = SubmitControl::Processing;
        self.pending = Some(fx.schedule(self.timings.processing_delay(), OrderTimer::ProcessingDone));
        info!(quantity = self.quantity, total = self.total().0, "order submitted");
        Ok(())
    }

    /// Dismisses the modal from any non-idle state and cancels whatever the
    /// session still had scheduled. Idle is a no-op.
    pub fn close_order(&mut self, fx: &mut Effects<'_>) {
        if self.state == OrderState::Idle {
            return;
        }
        info!(from = %self.state, "order modal closed");
        fx.cancel_slot(&mut self.pending);
        fx.cancel_slot(&mut self.reset_timer);
        self.clear_invalid(fx);
        self.hide_modal(fx);
        self.reset_submit_control(fx);
    }

    pub fn add_to_cart(
        &mut self,
        fx: &mut Effects<'_>,
        notices: &mut NotificationQueue,
        name: &str,
        price: Rupees,
    ) {
        let quantity = self.cart.add(name, price, 1).quantity;
        info!(product = name, quantity, cart_len = self.cart.len(), "added to cart");
        fx.cue(Cue::Emphasis(Target::CartButton));
        notices.notify(fx, format!("✨ {name} added to cart!"), NotificationKind::Success);
    }

    pub fn on_timer(
        &mut self,
        fx: &mut Effects<'_>,
        notices: &mut NotificationQueue,
        handle: TimerHandle,
        timer: OrderTimer,
    ) {
        match timer {
            OrderTimer::ProcessingDone => {
                if !self.owns_pending(handle, OrderState::Submitting) {
                    return;
                }
                self.state = OrderState::Confirmed;
                self.submit = SubmitControl::Confirmed;
                fx.cue(Cue::Success(Target::SubmitButton));
                self.pending = Some(
                    fx.schedule(self.timings.confirmation_delay(), OrderTimer::ConfirmationDone),
                );
                info!("order confirmed");
            }
            OrderTimer::ConfirmationDone => {
                if !self.owns_pending(handle, OrderState::Confirmed) {
                    return;
                }
                self.pending = None;
                if let Some(selection) = &self.selection {
                    let quantity = self
                        .cart
                        .add(&selection.name, selection.unit_price, self.quantity)
                        .quantity;
                    info!(
                        product = %selection.name,
                        quantity,
                        cart_len = self.cart.len(),
                        "order added to cart"
                    );
                }
                self.hide_modal(fx);
                notices.notify(fx, ORDER_PLACED_MESSAGE, NotificationKind::Success);
                self.reset_timer =
                    Some(fx.schedule(self.timings.reset_delay(), OrderTimer::ResetSubmitControl));
            }
            OrderTimer::ResetSubmitControl => {
                if self.reset_timer != Some(handle) {
                    return;
                }
                self.reset_timer = None;
                self.reset_submit_control(fx);
                debug!("submit control reset");
            }
            OrderTimer::ClearInvalid(field) => {
                if self.invalid_fields.get(&field) == Some(&handle) {
                    self.invalid_fields.remove(&field);
                }
            }
        }
    }

    pub fn view(&self) -> OrderView {
        OrderView {
            state: self.state,
            selection: self.selection.clone(),
            quantity: self.quantity,
            total: self.total(),
            submit: self.submit,
            invalid_fields: self.invalid_fields.keys().copied().collect(),
            cart_count: self.cart.len(),
            modal_visible: self.state != OrderState::Idle,
            form_resets: self.form_resets,
        }
    }

    fn guard(&self, operation: &'static str, allowed: &[OrderState]) -> Result<(), FlowError> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            warn!(operation, state = %self.state, "order operation rejected");
            Err(FlowError::InvalidState {
                operation,
                state: self.state,
            })
        }
    }

    fn owns_pending(&self, handle: TimerHandle, expected: OrderState) -> bool {
        self.pending == Some(handle) && self.state == expected
    }

    fn hide_modal(&mut self, fx: &mut Effects<'_>) {
        fx.cue(Cue::Exit(Target::Modal));
        self.state = OrderState::Idle;
        self.form_resets += 1;
    }

    fn reset_submit_control(&mut self, fx: &mut Effects<'_>) {
        if self.submit != SubmitControl::Ready {
            self.submit = SubmitControl::Ready;
            fx.cue(Cue::Reset(Target::SubmitButton));
        }
    }

    fn flag_invalid(&mut self, fx: &mut Effects<'_>, field: OrderField) {
        let handle = fx.schedule(
            self.timings.validation_feedback_delay(),
            OrderTimer::ClearInvalid(field),
        );
        if let Some(previous) = self.invalid_fields.insert(field, handle) {
            fx.cancel(previous);
        }
    }

    fn clear_invalid(&mut self, fx: &mut Effects<'_>) {
        for (_, handle) in std::mem::take(&mut self.invalid_fields) {
            fx.cancel(handle);
        }
    }
}

#[cfg(test)]
#[path = "tests/order_flow_tests.rs"]
mod tests;
