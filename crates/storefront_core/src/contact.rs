//! Contact form: all-fields validation and a simulated send.

use std::collections::BTreeMap;

use shared::{
    domain::{ContactState, NotificationKind},
    protocol::FormFields,
};
use tracing::{info, warn};

use crate::{
    animation::{Cue, Target},
    config::{ContactSettings, FlowTimings},
    effects::Effects,
    error::FlowError,
    fields::is_blank,
    notifications::NotificationQueue,
    scheduler::TimerHandle,
};

pub const CONTACT_INCOMPLETE_MESSAGE: &str = "Please fill in all required fields";
pub const CONTACT_SENT_MESSAGE: &str = "📧 Message sent successfully! We'll get back to you soon.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactTimer {
    Sent,
    Reset,
    ClearInvalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactView {
    pub state: ContactState,
    pub label: &'static str,
    pub invalid_fields: Vec<String>,
    pub required_fields: Vec<String>,
    pub form_resets: u64,
}

pub struct ContactFormController {
    settings: ContactSettings,
    timings: FlowTimings,
    state: ContactState,
    invalid_fields: BTreeMap<String, TimerHandle>,
    pending: Option<TimerHandle>,
    form_resets: u64,
}

impl ContactFormController {
    pub fn new(settings: ContactSettings, timings: FlowTimings) -> Self {
        Self {
            settings,
            timings,
            state: ContactState::Ready,
            invalid_fields: BTreeMap::new(),
            pending: None,
            form_resets: 0,
        }
    }

    pub fn state(&self) -> ContactState {
        self.state
    }

    pub fn submit(
        &mut self,
        fx: &mut Effects<'_>,
        notices: &mut NotificationQueue,
        fields: &FormFields,
    ) -> Result<(), FlowError> {
        if self.state != ContactState::Ready {
            return Err(FlowError::ContactBusy { state: self.state });
        }

        let missing: Vec<String> = self
            .settings
            .required_fields
            .iter()
            .filter(|key| is_blank(fields, key))
            .cloned()
            .collect();
        if !missing.is_empty() {
            warn!(fields = ?missing, "contact form incomplete");
            for key in &missing {
                let handle = fx.schedule(
                    self.timings.validation_feedback_delay(),
                    ContactTimer::ClearInvalid(key.clone()),
                );
                if let Some(previous) = self.invalid_fields.insert(key.clone(), handle) {
                    fx.cancel(previous);
                }
            }
            notices.notify(fx, CONTACT_INCOMPLETE_MESSAGE, NotificationKind::Error);
            return Err(FlowError::Incomplete { fields: missing });
        }

        self.state = ContactState::Sending;
        self.pending = Some(fx.schedule(self.settings.send_delay(), ContactTimer::Sent));
        info!("contact message sending");
        Ok(())
    }

    pub fn on_timer(
        &mut self,
        fx: &mut Effects<'_>,
        notices: &mut NotificationQueue,
        handle: TimerHandle,
        timer: ContactTimer,
    ) {
        match timer {
            ContactTimer::Sent if self.pending == Some(handle) => {
                self.state = ContactState::Sent;
                fx.cue(Cue::Success(Target::ContactSubmit));
                notices.notify(fx, CONTACT_SENT_MESSAGE, NotificationKind::Success);
                self.pending = Some(fx.schedule(self.settings.reset_delay(), ContactTimer::Reset));
                info!("contact message sent");
            }
            ContactTimer::Reset if self.pending == Some(handle) => {
                self.pending = None;
                self.state = ContactState::Ready;
                self.form_resets += 1;
                fx.cue(Cue::Reset(Target::ContactSubmit));
            }
            ContactTimer::ClearInvalid(key) => {
                if self.invalid_fields.get(&key) == Some(&handle) {
                    self.invalid_fields.remove(&key);
                }
            }
            ContactTimer::Sent | ContactTimer::Reset => {}
        }
    }

    pub fn view(&self) -> ContactView {
        let label = match self.state {
            ContactState::Ready => "Send Message",
            ContactState::Sending => "Sending...",
            ContactState::Sent => "Message Sent!",
        };
        ContactView {
            state: self.state,
            label,
            invalid_fields: self.invalid_fields.keys().cloned().collect(),
            required_fields: self.settings.required_fields.clone(),
            form_resets: self.form_resets,
        }
    }
}

#[cfg(test)]
#[path = "tests/contact_tests.rs"]
mod tests;
