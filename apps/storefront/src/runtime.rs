//! Wall-clock driver: feeds queued commands and elapsed time to a storefront.

use std::time::Duration;

use crossbeam_channel::{Receiver, TryRecvError};
use shared::{error::CommandError, protocol::UiCommand};
use storefront_core::{
    animation::{Property, Target, Tween},
    AnimationService, RenderSurface, Storefront,
};
use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::controller::orchestration::apply_command;

/// Logs every requested tween instead of drawing it.
#[derive(Default)]
pub struct TraceAnimation {
    pub played: usize,
}

impl AnimationService for TraceAnimation {
    fn animate(&mut self, tween: Tween) {
        self.played += 1;
        debug!(
            target_element = ?tween.target,
            to = ?tween.to,
            duration_ms = tween.duration.as_millis() as u64,
            delay_ms = tween.delay.as_millis() as u64,
            ease = %tween.ease,
            "tween"
        );
    }

    fn set(&mut self, target: &Target, props: &[(Property, f32)]) {
        debug!(target_element = ?target, ?props, "set");
    }
}

#[derive(Debug, Clone)]
pub struct LoopOptions {
    pub frame: Duration,
    /// Simulated time per wall-clock second.
    pub speed: f64,
    /// Keep running pending timers after the command sender hangs up.
    pub drain_on_disconnect: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            frame: Duration::from_millis(50),
            speed: 1.0,
            drain_on_disconnect: true,
        }
    }
}

pub async fn run_loop<A, R, F>(
    storefront: &mut Storefront<A, R>,
    cmd_rx: Receiver<UiCommand>,
    options: LoopOptions,
    mut on_command: F,
) where
    A: AnimationService,
    R: RenderSurface,
    F: FnMut(&Storefront<A, R>, &UiCommand, Option<&CommandError>),
{
    let mut ticker = interval(options.frame);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let speed = if options.speed.is_finite() && options.speed > 0.0 {
        options.speed
    } else {
        1.0
    };
    let mut last = Instant::now();
    let mut disconnected = false;

    loop {
        ticker.tick().await;

        loop {
            match cmd_rx.try_recv() {
                Ok(cmd) => {
                    let result = apply_command(storefront, &cmd);
                    on_command(storefront, &cmd, result.as_ref().err());
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        let now = Instant::now();
        storefront.advance((now - last).mul_f64(speed));
        last = now;

        if disconnected && (!options.drain_on_disconnect || !storefront.has_pending_timers()) {
            info!(
                now_ms = storefront.now().as_millis() as u64,
                "storefront loop finished"
            );
            break;
        }
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
