//! Side-effect outbox shared by the flow components for one operation.

use std::time::Duration;

use crate::{
    animation::Cue,
    contact::ContactTimer,
    notifications::NotificationTimer,
    order_flow::OrderTimer,
    scheduler::{Scheduler, TimerHandle},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timer {
    Order(OrderTimer),
    Notification(NotificationTimer),
    Contact(ContactTimer),
}

impl From<OrderTimer> for Timer {
    fn from(value: OrderTimer) -> Self {
        Timer::Order(value)
    }
}

impl From<NotificationTimer> for Timer {
    fn from(value: NotificationTimer) -> Self {
        Timer::Notification(value)
    }
}

impl From<ContactTimer> for Timer {
    fn from(value: ContactTimer) -> Self {
        Timer::Contact(value)
    }
}

pub struct Effects<'a> {
    timers: &'a mut Scheduler<Timer>,
    cues: &'a mut Vec<Cue>,
}

impl<'a> Effects<'a> {
    pub fn new(timers: &'a mut Scheduler<Timer>, cues: &'a mut Vec<Cue>) -> Self {
        Self { timers, cues }
    }

    pub fn schedule(&mut self, delay: Duration, timer: impl Into<Timer>) -> TimerHandle {
        self.timers.schedule(delay, timer.into())
    }

    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.timers.cancel(handle)
    }

    /// Cancels and clears an optional handle slot.
    pub fn cancel_slot(&mut self, slot: &mut Option<TimerHandle>) {
        if let Some(handle) = slot.take() {
            self.timers.cancel(handle);
        }
    }

    pub fn cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}
