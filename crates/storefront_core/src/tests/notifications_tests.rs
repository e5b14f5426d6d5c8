use super::*;
use crate::{effects::Timer, test_support::Harness};

fn queue() -> NotificationQueue {
    NotificationQueue::new(NotificationSettings::default())
}

/// Fires every notification timer due by `until_ms`.
fn run(queue: &mut NotificationQueue, harness: &mut Harness, until_ms: u64) {
    while let Some((_, timer)) = harness.pop(until_ms) {
        let Timer::Notification(timer) = timer else {
            panic!("unexpected timer {timer:?}");
        };
        queue.on_timer(&mut harness.fx(), timer);
    }
}

#[test]
fn notify_shows_toast_with_full_countdown_and_entrance_cue() {
    let mut harness = Harness::default();
    let mut queue = queue();

    let id = queue.notify(&mut harness.fx(), "Saved", NotificationKind::Success);

    let shown = queue.get(id).expect("notification");
    assert_eq!(shown.remaining_seconds, 5);
    assert_eq!(shown.phase, Phase::Visible);
    assert_eq!(harness.take_cues(), vec![Cue::Entrance(Target::Toast(id))]);
}

#[test]
fn countdown_ticks_down_then_exits_and_removes() {
    let mut harness = Harness::default();
    let mut queue = queue();
    let id = queue.notify(&mut harness.fx(), "Saved", NotificationKind::Success);
    harness.take_cues();

    let mut seen = vec![queue.get(id).expect("toast").remaining_seconds];
    for second in 1..=4 {
        run(&mut queue, &mut harness, second * 1000);
        seen.push(queue.get(id).expect("toast").remaining_seconds);
    }
    assert_eq!(seen, vec![5, 4, 3, 2, 1]);
    assert!(harness.take_cues().is_empty());

    run(&mut queue, &mut harness, 5000);
    assert_eq!(queue.get(id).expect("leaving toast").phase, Phase::Leaving);
    assert_eq!(harness.take_cues(), vec![Cue::Exit(Target::Toast(id))]);

    run(&mut queue, &mut harness, 5299);
    assert!(queue.get(id).is_some());
    run(&mut queue, &mut harness, 5300);
    assert!(queue.is_empty());
    assert!(harness.timers.is_idle());
}

#[test]
fn second_notify_preempts_the_first() {
    let mut harness = Harness::default();
    let mut queue = queue();

    let first = queue.notify(&mut harness.fx(), "first", NotificationKind::Success);
    run(&mut queue, &mut harness, 1500);
    let second = queue.notify(&mut harness.fx(), "second", NotificationKind::Error);

    let ids: Vec<_> = queue.active().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![second]);
    assert_ne!(first, second);
    // Only the second toast's countdown is still scheduled.
    assert_eq!(harness.timers.pending(), 1);
}

#[test]
fn notify_during_exit_leaves_no_orphan() {
    let mut harness = Harness::default();
    let mut queue = queue();

    let first = queue.notify(&mut harness.fx(), "first", NotificationKind::Success);
    run(&mut queue, &mut harness, 5000);
    assert_eq!(queue.get(first).expect("leaving").phase, Phase::Leaving);

    let second = queue.notify(&mut harness.fx(), "second", NotificationKind::Success);
    assert!(queue.get(first).is_none());

    run(&mut queue, &mut harness, 5300);
    assert_eq!(queue.active().len(), 1);
    assert_eq!(queue.active()[0].id, second);
}

#[test]
fn dismiss_cancels_countdown_and_runs_exit() {
    let mut harness = Harness::default();
    let mut queue = queue();
    let id = queue.notify(&mut harness.fx(), "bye", NotificationKind::Error);
    harness.take_cues();

    assert!(queue.dismiss(&mut harness.fx(), id));
    assert_eq!(harness.take_cues(), vec![Cue::Exit(Target::Toast(id))]);
    assert!(!queue.dismiss(&mut harness.fx(), id), "already leaving");
    assert!(!queue.dismiss(&mut harness.fx(), NotificationId(999)));

    run(&mut queue, &mut harness, 300);
    assert!(queue.is_empty());
    assert!(harness.timers.is_idle());
}

#[test]
fn zero_countdown_exits_immediately() {
    let mut harness = Harness::default();
    let mut queue = NotificationQueue::new(NotificationSettings {
        countdown_seconds: 0,
        ..NotificationSettings::default()
    });

    let id = queue.notify(&mut harness.fx(), "blink", NotificationKind::Success);
    assert_eq!(
        harness.take_cues(),
        vec![Cue::Entrance(Target::Toast(id)), Cue::Exit(Target::Toast(id))]
    );
    run(&mut queue, &mut harness, 300);
    assert!(queue.is_empty());
}
