//! Transient toast slot.
//!
//! At most one notification is visible: `notify` drops whatever is on
//! screen (including one mid-exit) before showing the new message. Each
//! toast counts down once per tick, then plays its exit and is removed.

use shared::{
    domain::{NotificationId, NotificationKind},
    protocol::NotificationSnapshot,
};
use tracing::{debug, info};

use crate::{
    animation::{Cue, Target},
    config::NotificationSettings,
    effects::Effects,
    scheduler::TimerHandle,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationTimer {
    Tick(NotificationId),
    Remove(NotificationId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Leaving,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub remaining_seconds: u32,
    pub phase: Phase,
    timer: Option<TimerHandle>,
}

impl Notification {
    fn snapshot(&self) -> NotificationSnapshot {
        NotificationSnapshot {
            id: self.id,
            message: self.message.clone(),
            kind: self.kind,
            remaining_seconds: self.remaining_seconds,
            leaving: self.phase == Phase::Leaving,
        }
    }
}

pub struct NotificationQueue {
    settings: NotificationSettings,
    active: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new(settings: NotificationSettings) -> Self {
        Self {
            settings,
            active: Vec::new(),
            next_id: 1,
        }
    }

    pub fn notify(
        &mut self,
        fx: &mut Effects<'_>,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> NotificationId {
        for previous in self.active.drain(..) {
            if let Some(handle) = previous.timer {
                fx.cancel(handle);
            }
            debug!(id = previous.id.0, "notification preempted");
        }

        let id = NotificationId(self.next_id);
        self.next_id += 1;
        let message = message.into();
        info!(id = id.0, ?kind, %message, "notification shown");

        let mut notification = Notification {
            id,
            message,
            kind,
            remaining_seconds: self.settings.countdown_seconds,
            phase: Phase::Visible,
            timer: None,
        };
        fx.cue(Cue::Entrance(Target::Toast(id)));
        if notification.remaining_seconds == 0 {
            Self::exit(&self.settings, fx, &mut notification);
        } else {
            notification.timer =
                Some(fx.schedule(self.settings.tick(), NotificationTimer::Tick(id)));
        }
        self.active.push(notification);
        id
    }

    /// Closes a visible notification ahead of its countdown. Unknown or
    /// already-leaving ids are ignored.
    pub fn dismiss(&mut self, fx: &mut Effects<'_>, id: NotificationId) -> bool {
        let settings = &self.settings;
        let Some(notification) = self
            .active
            .iter_mut()
            .find(|notification| notification.id == id && notification.phase == Phase::Visible)
        else {
            return false;
        };
        if let Some(handle) = notification.timer.take() {
            fx.cancel(handle);
        }
        info!(id = id.0, "notification dismissed");
        Self::exit(settings, fx, notification);
        true
    }

    pub fn on_timer(&mut self, fx: &mut Effects<'_>, timer: NotificationTimer) {
        match timer {
            NotificationTimer::Tick(id) => {
                let settings = &self.settings;
                let Some(notification) = self
                    .active
                    .iter_mut()
                    .find(|notification| notification.id == id)
                else {
                    return;
                };
                if notification.phase != Phase::Visible {
                    return;
                }
                notification.remaining_seconds = notification.remaining_seconds.saturating_sub(1);
                if notification.remaining_seconds == 0 {
                    debug!(id = id.0, "notification countdown elapsed");
                    Self::exit(settings, fx, notification);
                } else {
                    notification.timer =
                        Some(fx.schedule(settings.tick(), NotificationTimer::Tick(id)));
                }
            }
            NotificationTimer::Remove(id) => {
                self.active.retain(|notification| notification.id != id);
                debug!(id = id.0, "notification removed");
            }
        }
    }

    fn exit(settings: &NotificationSettings, fx: &mut Effects<'_>, notification: &mut Notification) {
        notification.phase = Phase::Leaving;
        notification.remaining_seconds = 0;
        fx.cue(Cue::Exit(Target::Toast(notification.id)));
        notification.timer = Some(fx.schedule(
            settings.exit_duration(),
            NotificationTimer::Remove(notification.id),
        ));
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.active.iter().find(|notification| notification.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn view(&self) -> Vec<NotificationSnapshot> {
        self.active.iter().map(Notification::snapshot).collect()
    }
}

#[cfg(test)]
#[path = "tests/notifications_tests.rs"]
mod tests;
