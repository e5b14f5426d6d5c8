//! Page-session facade: owns the flow components, the virtual clock and the
//! collaborators, and re-renders after every operation.

use std::time::Duration;

use shared::{
    domain::{NotificationId, NotificationKind, ProductSelection, Rupees},
    protocol::{FormFields, StateSnapshot, UiCommand},
};
use tracing::{debug, warn};

use crate::{
    animation::{choreograph, AnimationService, Cue},
    catalog::ProductCatalog,
    config::StorefrontConfig,
    contact::ContactFormController,
    effects::{Effects, Timer},
    error::FlowError,
    notifications::NotificationQueue,
    order_flow::OrderFlowController,
    render::RenderSurface,
    scheduler::Scheduler,
    view::Renderer,
};

/// Upper bound on clock steps taken by [`Storefront::run_until_idle`].
const SETTLE_MAX_STEPS: usize = 10_000;

pub struct Storefront<A: AnimationService, R: RenderSurface> {
    order: OrderFlowController,
    notices: NotificationQueue,
    contact: ContactFormController,
    catalog: ProductCatalog,
    timers: Scheduler<Timer>,
    cues: Vec<Cue>,
    renderer: Renderer,
    animator: A,
    surface: R,
}

macro_rules! fx {
    ($self:ident) => {
        Effects::new(&mut $self.timers, &mut $self.cues)
    };
}

impl<A: AnimationService, R: RenderSurface> Storefront<A, R> {
    pub fn new(config: StorefrontConfig, animator: A, surface: R) -> Self {
        let StorefrontConfig {
            timings,
            notifications,
            contact,
            products,
        } = config;
        let mut storefront = Self {
            order: OrderFlowController::new(timings.clone()),
            notices: NotificationQueue::new(notifications),
            contact: ContactFormController::new(contact, timings),
            catalog: ProductCatalog::new(products),
            timers: Scheduler::new(),
            cues: Vec::new(),
            renderer: Renderer::new(),
            animator,
            surface,
        };
        storefront.flush();
        storefront
    }

    pub fn open_order(
        &mut self,
        name: &str,
        price: Rupees,
        original_price: Option<Rupees>,
    ) -> Result<(), FlowError> {
        let selection = ProductSelection::new(name, price, original_price);
        let result = self.order.open_order(&mut fx!(self), selection);
        self.flush();
        result
    }

    pub fn open_product(&mut self, name: &str) -> Result<(), FlowError> {
        let selection = self
            .catalog
            .find(name)
            .map(|product| product.selection())
            .ok_or_else(|| FlowError::UnknownProduct {
                name: name.to_string(),
            })?;
        let result = self.order.open_order(&mut fx!(self), selection);
        self.flush();
        result
    }

    pub fn change_quantity(&mut self, delta: i32) -> Result<u32, FlowError> {
        let result = self.order.change_quantity(&mut fx!(self), delta);
        self.flush();
        result
    }

    pub fn submit_order(&mut self, fields: &FormFields) -> Result<(), FlowError> {
        let result = self
            .order
            .submit_order(&mut fx!(self), &mut self.notices, fields);
        self.flush();
        result
    }

    pub fn close_order(&mut self) {
        self.order.close_order(&mut fx!(self));
        self.flush();
    }

    pub fn add_to_cart(&mut self, name: &str, price: Rupees) {
        self.order
            .add_to_cart(&mut fx!(self), &mut self.notices, name, price);
        self.flush();
    }

    pub fn notify(&mut self, message: &str, kind: NotificationKind) -> NotificationId {
        let id = self.notices.notify(&mut fx!(self), message, kind);
        self.flush();
        id
    }

    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let dismissed = self.notices.dismiss(&mut fx!(self), id);
        self.flush();
        dismissed
    }

    pub fn submit_contact(&mut self, fields: &FormFields) -> Result<(), FlowError> {
        let result = self
            .contact
            .submit(&mut fx!(self), &mut self.notices, fields);
        self.flush();
        result
    }

    pub fn filter_products(&mut self, category: &str) {
        self.catalog.filter(&mut fx!(self), category);
        self.flush();
    }

    /// Moves the clock forward, firing every timer that comes due on the
    /// way in deadline order.
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.timers.now().saturating_add(elapsed);
        while let Some((handle, timer)) = self.timers.pop_due(until) {
            debug!(?timer, now_ms = self.timers.now().as_millis() as u64, "timer fired");
            let mut fx = Effects::new(&mut self.timers, &mut self.cues);
            match timer {
                Timer::Order(timer) => {
                    self.order
                        .on_timer(&mut fx, &mut self.notices, handle, timer)
                }
                Timer::Notification(timer) => self.notices.on_timer(&mut fx, timer),
                Timer::Contact(timer) => {
                    self.contact
                        .on_timer(&mut fx, &mut self.notices, handle, timer)
                }
            }
            self.flush();
        }
        self.timers.settle(until);
    }

    /// Fires timers until none are pending, returning the simulated time
    /// that passed.
    pub fn run_until_idle(&mut self) -> Duration {
        let start = self.timers.now();
        let mut steps = 0usize;
        while let Some(deadline) = self.timers.next_deadline() {
            if steps >= SETTLE_MAX_STEPS {
                warn!(pending = self.timers.pending(), "timers still pending after settle limit");
                break;
            }
            self.advance(deadline.saturating_sub(self.timers.now()));
            steps += 1;
        }
        self.timers.now().saturating_sub(start)
    }

    pub fn handle(&mut self, command: &UiCommand) -> Result<(), FlowError> {
        match command {
            UiCommand::OpenOrder {
                name,
                price,
                original_price,
            } => self.open_order(name, *price, *original_price),
            UiCommand::OpenProduct { name } => self.open_product(name),
            UiCommand::ChangeQuantity { delta } => self.change_quantity(*delta).map(|_| ()),
            UiCommand::SubmitOrder { fields } => self.submit_order(fields),
            UiCommand::CloseOrder => {
                self.close_order();
                Ok(())
            }
            UiCommand::AddToCart { name, price } => {
                self.add_to_cart(name, *price);
                Ok(())
            }
            UiCommand::Notify { message, kind } => {
                self.notify(message, *kind);
                Ok(())
            }
            UiCommand::Dismiss { id } => {
                self.dismiss(*id);
                Ok(())
            }
            UiCommand::FilterProducts { category } => {
                self.filter_products(category);
                Ok(())
            }
            UiCommand::SubmitContact { fields } => self.submit_contact(fields),
            UiCommand::Advance { ms } => {
                self.advance(Duration::from_millis(*ms));
                Ok(())
            }
        }
    }

    pub fn snapshot(&self) -> StateSnapshot {
        let order = self.order.view();
        let catalog = self.catalog.view();
        StateSnapshot {
            now_ms: self.timers.now().as_millis() as u64,
            order_state: order.state,
            selection: order.selection,
            quantity: order.quantity,
            total: order.total,
            cart: self.order.cart().items().to_vec(),
            notifications: self.notices.view(),
            contact_state: self.contact.state(),
            active_filter: catalog.active_filter,
            visible_products: catalog.visible,
        }
    }

    pub fn order(&self) -> &OrderFlowController {
        &self.order
    }

    pub fn notices(&self) -> &NotificationQueue {
        &self.notices
    }

    pub fn contact(&self) -> &ContactFormController {
        &self.contact
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_idle()
    }

    fn flush(&mut self) {
        for cue in self.cues.drain(..) {
            choreograph(cue).play(&mut self.animator);
        }
        self.renderer
            .render_order(&self.order.view(), &mut self.surface);
        self.renderer
            .render_notifications(&self.notices.view(), &mut self.surface);
        self.renderer
            .render_contact(&self.contact.view(), &mut self.surface);
        self.renderer
            .render_catalog(&self.catalog.view(), &mut self.surface);
    }
}

#[cfg(test)]
#[path = "tests/storefront_tests.rs"]
mod tests;
