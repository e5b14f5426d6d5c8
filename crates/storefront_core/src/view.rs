//! Projects component snapshots onto a [`RenderSurface`].

use std::collections::BTreeSet;

use shared::{
    domain::{ContactState, NotificationId, NotificationKind},
    protocol::NotificationSnapshot,
};

use crate::{
    catalog::CatalogView,
    contact::ContactView,
    fields::OrderField,
    order_flow::{OrderView, SubmitControl},
    render::{Attribute, Region, RenderSurface},
};

#[derive(Default)]
pub struct Renderer {
    toasts: BTreeSet<NotificationId>,
    order_form_resets: u64,
    contact_form_resets: u64,
    contact_fields: BTreeSet<String>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_order(&mut self, view: &OrderView, surface: &mut dyn RenderSurface) {
        surface.set_attribute(&Region::Modal, Attribute::Hidden, !view.modal_visible);
        surface.set_attribute(&Region::Page, Attribute::ScrollLocked, view.modal_visible);

        if let Some(selection) = &view.selection {
            surface.set_text(&Region::ProductName, &selection.name);
            surface.set_text(&Region::Price, &selection.unit_price.to_string());
            let original = selection
                .original_price
                .map(|price| price.to_string())
                .unwrap_or_default();
            surface.set_text(&Region::OriginalPrice, &original);
        }
        surface.set_text(&Region::Quantity, &view.quantity.to_string());
        surface.set_text(&Region::Total, &view.total.to_string());

        surface.set_text(&Region::SubmitLabel, view.submit.label());
        surface.set_attribute(&Region::SubmitButton, Attribute::Disabled, !view.submit.is_enabled());
        surface.set_attribute(
            &Region::SubmitSpinner,
            Attribute::Hidden,
            view.submit != SubmitControl::Processing,
        );
        surface.set_attribute(
            &Region::SubmitButton,
            Attribute::Success,
            view.submit == SubmitControl::Confirmed,
        );

        if view.form_resets != self.order_form_resets {
            self.order_form_resets = view.form_resets;
            for field in OrderField::REQUIRED {
                surface.remove(&Region::OrderField(field));
            }
        }
        for field in OrderField::REQUIRED {
            surface.set_attribute(
                &Region::OrderField(field),
                Attribute::Invalid,
                view.invalid_fields.contains(&field),
            );
        }

        surface.set_text(&Region::CartCount, &view.cart_count.to_string());
    }

    /// Removes toasts that left the queue before drawing the current ones,
    /// so a preempted toast never shares the page with its replacement.
    pub fn render_notifications(
        &mut self,
        notifications: &[NotificationSnapshot],
        surface: &mut dyn RenderSurface,
    ) {
        let current: BTreeSet<NotificationId> = notifications.iter().map(|n| n.id).collect();
        for stale in self.toasts.difference(&current) {
            surface.remove(&Region::Toast(*stale));
        }
        for notification in notifications {
            let region = Region::Toast(notification.id);
            surface.set_text(&region, &notification.message);
            surface.set_attribute(
                &region,
                Attribute::Error,
                notification.kind == NotificationKind::Error,
            );
        }
        self.toasts = current;
    }

    pub fn render_contact(&mut self, view: &ContactView, surface: &mut dyn RenderSurface) {
        surface.set_text(&Region::ContactSubmit, view.label);
        surface.set_attribute(
            &Region::ContactSubmit,
            Attribute::Disabled,
            view.state != ContactState::Ready,
        );
        surface.set_attribute(
            &Region::ContactSubmit,
            Attribute::Success,
            view.state == ContactState::Sent,
        );

        if view.form_resets != self.contact_form_resets {
            self.contact_form_resets = view.form_resets;
            for key in &view.required_fields {
                surface.remove(&Region::ContactField(key.clone()));
            }
        }
        let invalid: BTreeSet<String> = view.invalid_fields.iter().cloned().collect();
        for key in self.contact_fields.union(&invalid) {
            surface.set_attribute(
                &Region::ContactField(key.clone()),
                Attribute::Invalid,
                invalid.contains(key),
            );
        }
        self.contact_fields = invalid;
    }

    pub fn render_catalog(&mut self, view: &CatalogView, surface: &mut dyn RenderSurface) {
        for filter in &view.filters {
            let region = Region::FilterButton(filter.clone());
            surface.set_text(&region, filter);
            surface.set_attribute(&region, Attribute::Active, *filter == view.active_filter);
        }
        for name in &view.visible {
            let region = Region::ProductCard(name.clone());
            surface.set_text(&region, name);
            surface.set_attribute(&region, Attribute::Hidden, false);
        }
        for name in &view.hidden {
            let region = Region::ProductCard(name.clone());
            surface.set_text(&region, name);
            surface.set_attribute(&region, Attribute::Hidden, true);
        }
    }
}
