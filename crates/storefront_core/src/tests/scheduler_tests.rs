use super::*;

fn drain(scheduler: &mut Scheduler<&'static str>, until: Duration) -> Vec<&'static str> {
    let mut fired = Vec::new();
    while let Some((_, task)) = scheduler.pop_due(until) {
        fired.push(task);
    }
    scheduler.settle(until);
    fired
}

#[test]
fn shorter_delays_fire_first_and_ties_keep_scheduling_order() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule(Duration::from_millis(200), "late");
    scheduler.schedule(Duration::from_millis(100), "early-a");
    scheduler.schedule(Duration::from_millis(100), "early-b");

    assert_eq!(
        drain(&mut scheduler, Duration::from_secs(1)),
        vec!["early-a", "early-b", "late"]
    );
    assert_eq!(scheduler.now(), Duration::from_secs(1));
    assert!(scheduler.is_idle());
}

#[test]
fn tasks_beyond_the_horizon_stay_parked() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule(Duration::from_millis(500), "soon");
    scheduler.schedule(Duration::from_millis(1500), "later");

    assert_eq!(drain(&mut scheduler, Duration::from_secs(1)), vec!["soon"]);
    assert_eq!(scheduler.pending(), 1);
    assert_eq!(scheduler.next_deadline(), Some(Duration::from_millis(1500)));
}

#[test]
fn cancelled_timer_never_fires() {
    let mut scheduler = Scheduler::new();
    let keep = scheduler.schedule(Duration::from_millis(10), "keep");
    let dropped = scheduler.schedule(Duration::from_millis(10), "drop");

    assert!(scheduler.cancel(dropped));
    assert!(!scheduler.cancel(dropped));
    assert_eq!(scheduler.pending(), 1);
    assert_eq!(drain(&mut scheduler, Duration::from_millis(10)), vec!["keep"]);
    assert!(!scheduler.cancel(keep));
}

#[test]
fn delays_are_relative_to_the_advanced_clock() {
    let mut scheduler = Scheduler::new();
    scheduler.settle(Duration::from_secs(3));
    scheduler.schedule(Duration::from_secs(2), "relative");

    assert!(drain(&mut scheduler, Duration::from_millis(4999)).is_empty());
    assert_eq!(
        drain(&mut scheduler, Duration::from_secs(5)),
        vec!["relative"]
    );
}
