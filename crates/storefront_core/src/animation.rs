//! Animation collaborator boundary.
//!
//! The core never tweens anything itself. Components push semantic [`Cue`]s
//! and [`choreograph`] turns each into the concrete tweens the page uses.

use std::{fmt, time::Duration};

use shared::domain::NotificationId;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Modal,
    ModalContainer,
    Quantity,
    SubmitButton,
    CartButton,
    Toast(NotificationId),
    ContactSubmit,
    ProductCard(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cue {
    Entrance(Target),
    Exit(Target),
    Emphasis(Target),
    Success(Target),
    Show(Target),
    Hide(Target),
    /// Snap back to the resting look without a tween.
    Reset(Target),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Opacity,
    Scale,
    X,
    Y,
    Rotation,
    /// Blend toward the success colour, 0 to 1.
    SuccessTint,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Ease {
    #[default]
    Linear,
    Power2In,
    Power2Out,
    Power2InOut,
    /// Overshooting ease-out with the given overshoot strength.
    BackOut(f32),
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ease::Linear => f.write_str("none"),
            Ease::Power2In => f.write_str("power2.in"),
            Ease::Power2Out => f.write_str("power2.out"),
            Ease::Power2InOut => f.write_str("power2.inOut"),
            Ease::BackOut(strength) => write!(f, "back.out({strength})"),
        }
    }
}

pub type Props = Vec<(Property, f32)>;

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub target: Target,
    pub from: Props,
    pub to: Props,
    pub duration: Duration,
    pub ease: Ease,
    pub delay: Duration,
    /// Extra back-and-forth plays after the first.
    pub yoyo_repeats: u32,
}

impl Tween {
    pub fn new(target: Target, from: Props, to: Props, duration_ms: u64, ease: Ease) -> Self {
        Self {
            target,
            from,
            to,
            duration: Duration::from_millis(duration_ms),
            ease,
            delay: Duration::ZERO,
            yoyo_repeats: 0,
        }
    }

    pub fn delayed(mut self, delay_ms: u64) -> Self {
        self.delay = Duration::from_millis(delay_ms);
        self
    }

    pub fn yoyo(mut self, repeats: u32) -> Self {
        self.yoyo_repeats = repeats;
        self
    }
}

pub trait AnimationService {
    fn animate(&mut self, tween: Tween);

    /// Plays `tweens` back to back.
    fn timeline(&mut self, tweens: Vec<Tween>) {
        for tween in tweens {
            self.animate(tween);
        }
    }

    fn set(&mut self, target: &Target, props: &[(Property, f32)]);
}

/// Used when no animation backend is attached.
pub struct NoopAnimation;

impl AnimationService for NoopAnimation {
    fn animate(&mut self, tween: Tween) {
        debug!(target_element = ?tween.target, "animation backend unavailable; tween skipped");
    }

    fn set(&mut self, target: &Target, _props: &[(Property, f32)]) {
        debug!(target_element = ?target, "animation backend unavailable; set skipped");
    }
}

/// Tweens for a single cue.
#[derive(Debug, Clone, PartialEq)]
pub enum Choreography {
    /// Tweens start together.
    Parallel(Vec<Tween>),
    /// Tweens run one after another.
    Sequence(Vec<Tween>),
    /// Properties applied immediately.
    Set(Target, Props),
}

impl Choreography {
    pub fn play(self, animator: &mut dyn AnimationService) {
        match self {
            Choreography::Parallel(tweens) => {
                for tween in tweens {
                    animator.animate(tween);
                }
            }
            Choreography::Sequence(tweens) => animator.timeline(tweens),
            Choreography::Set(target, props) => animator.set(&target, &props),
        }
    }
}

pub fn choreograph(cue: Cue) -> Choreography {
    use Property::*;

    match cue {
        Cue::Entrance(Target::Modal) | Cue::Entrance(Target::ModalContainer) => {
            Choreography::Parallel(vec![
                Tween::new(
                    Target::Modal,
                    vec![(Opacity, 0.0)],
                    vec![(Opacity, 1.0)],
                    400,
                    Ease::Linear,
                ),
                Tween::new(
                    Target::ModalContainer,
                    vec![(Opacity, 0.0), (Scale, 0.7), (Y, 100.0)],
                    vec![(Opacity, 1.0), (Scale, 1.0), (Y, 0.0)],
                    600,
                    Ease::BackOut(1.7),
                ),
            ])
        }
        Cue::Exit(Target::Modal) | Cue::Exit(Target::ModalContainer) => {
            Choreography::Parallel(vec![
                Tween::new(
                    Target::ModalContainer,
                    vec![],
                    vec![(Opacity, 0.0), (Scale, 0.7), (Y, 100.0)],
                    300,
                    Ease::Power2In,
                ),
                Tween::new(
                    Target::Modal,
                    vec![],
                    vec![(Opacity, 0.0)],
                    300,
                    Ease::Linear,
                )
                .delayed(100),
            ])
        }
        Cue::Entrance(target @ Target::Toast(_)) => Choreography::Parallel(vec![Tween::new(
            target,
            vec![(Opacity, 0.0), (X, 100.0), (Scale, 0.8), (Rotation, 10.0)],
            vec![(Opacity, 1.0), (X, 0.0), (Scale, 1.0), (Rotation, 0.0)],
            500,
            Ease::BackOut(1.7),
        )]),
        Cue::Exit(target @ Target::Toast(_)) => Choreography::Parallel(vec![Tween::new(
            target,
            vec![],
            vec![(Opacity, 0.0), (X, 100.0), (Scale, 0.8)],
            300,
            Ease::Power2In,
        )]),
        Cue::Emphasis(Target::CartButton) => Choreography::Sequence(vec![
            Tween::new(
                Target::CartButton,
                vec![(Scale, 1.0)],
                vec![(Scale, 1.3)],
                200,
                Ease::Power2InOut,
            )
            .yoyo(1),
            Tween::new(
                Target::CartButton,
                vec![],
                vec![(Rotation, 360.0)],
                500,
                Ease::Power2InOut,
            ),
        ]),
        Cue::Emphasis(target) => Choreography::Parallel(vec![Tween::new(
            target,
            vec![(Scale, 1.2)],
            vec![(Scale, 1.0)],
            200,
            Ease::BackOut(1.7),
        )]),
        Cue::Success(target) => Choreography::Parallel(vec![Tween::new(
            target,
            vec![],
            vec![(SuccessTint, 1.0)],
            300,
            Ease::Linear,
        )]),
        Cue::Show(target) => Choreography::Parallel(vec![Tween::new(
            target,
            vec![],
            vec![(Opacity, 1.0), (Scale, 1.0)],
            500,
            Ease::Power2Out,
        )]),
        Cue::Hide(target) => Choreography::Parallel(vec![Tween::new(
            target,
            vec![],
            vec![(Opacity, 0.0), (Scale, 0.8)],
            300,
            Ease::Power2In,
        )]),
        Cue::Reset(target) => Choreography::Set(target, vec![(SuccessTint, 0.0)]),
        Cue::Entrance(target) => Choreography::Parallel(vec![Tween::new(
            target,
            vec![(Opacity, 0.0)],
            vec![(Opacity, 1.0)],
            300,
            Ease::Power2Out,
        )]),
        Cue::Exit(target) => Choreography::Parallel(vec![Tween::new(
            target,
            vec![],
            vec![(Opacity, 0.0)],
            300,
            Ease::Power2In,
        )]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_entrance_fades_backdrop_and_pops_container() {
        let Choreography::Parallel(tweens) = choreograph(Cue::Entrance(Target::Modal)) else {
            panic!("modal entrance should run in parallel");
        };
        assert_eq!(tweens.len(), 2);
        assert_eq!(tweens[1].target, Target::ModalContainer);
        assert_eq!(tweens[1].ease, Ease::BackOut(1.7));
        assert_eq!(tweens[1].duration, Duration::from_millis(600));
    }

    #[test]
    fn cart_emphasis_pulses_then_spins() {
        let Choreography::Sequence(tweens) = choreograph(Cue::Emphasis(Target::CartButton)) else {
            panic!("cart emphasis should be sequenced");
        };
        assert_eq!(tweens[0].yoyo_repeats, 1);
        assert_eq!(tweens[1].to, vec![(Property::Rotation, 360.0)]);
    }

    #[test]
    fn reset_clears_success_tint_through_set() {
        let mut recorder = crate::test_support::RecordingAnimation::default();
        choreograph(Cue::Reset(Target::SubmitButton)).play(&mut recorder);

        assert!(recorder.tweens.is_empty());
        assert_eq!(recorder.sets, vec![Target::SubmitButton]);
    }

    #[test]
    fn ease_names_match_tween_engine_vocabulary() {
        assert_eq!(Ease::BackOut(1.7).to_string(), "back.out(1.7)");
        assert_eq!(Ease::Power2In.to_string(), "power2.in");
    }
}
