use shared::protocol::FormFields;

use crate::{
    animation::{AnimationService, Cue, Property, Target, Tween},
    effects::{Effects, Timer},
    fields::OrderField,
    scheduler::{Scheduler, TimerHandle},
};

#[derive(Default)]
pub struct RecordingAnimation {
    pub tweens: Vec<Tween>,
    pub timelines: usize,
    pub sets: Vec<Target>,
}

impl RecordingAnimation {
    pub fn targets(&self) -> Vec<&Target> {
        self.tweens.iter().map(|tween| &tween.target).collect()
    }
}

impl AnimationService for RecordingAnimation {
    fn animate(&mut self, tween: Tween) {
        self.tweens.push(tween);
    }

    fn timeline(&mut self, tweens: Vec<Tween>) {
        self.timelines += 1;
        self.tweens.extend(tweens);
    }

    fn set(&mut self, target: &Target, _props: &[(Property, f32)]) {
        self.sets.push(target.clone());
    }
}

/// Scheduler and cue outbox for driving a single component by hand.
#[derive(Default)]
pub struct Harness {
    pub timers: Scheduler<Timer>,
    pub cues: Vec<Cue>,
}

impl Harness {
    pub fn fx(&mut self) -> Effects<'_> {
        Effects::new(&mut self.timers, &mut self.cues)
    }

    pub fn take_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    /// Pops the next due timer no later than `until_ms` on the virtual clock.
    pub fn pop(&mut self, until_ms: u64) -> Option<(TimerHandle, Timer)> {
        self.timers.pop_due(std::time::Duration::from_millis(until_ms))
    }
}

pub fn complete_order_fields() -> FormFields {
    [
        (OrderField::FullName, "Asha Verma"),
        (OrderField::Phone, "9876543210"),
        (OrderField::Address, "12 MG Road"),
        (OrderField::City, "Pune"),
        (OrderField::State, "Maharashtra"),
        (OrderField::Pincode, "411001"),
        (OrderField::PaymentMethod, "cod"),
    ]
    .into_iter()
    .map(|(field, value)| (field.key().to_string(), value.to_string()))
    .collect()
}
