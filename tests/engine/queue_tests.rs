//! Command queue tests.
//!
//! Tests for priority ordering, delayed readiness, interruption, and fault
//! isolation.

use std::sync::Arc;
use std::time::Duration;

use proptest::prelude::*;
use wayfarer_engine::{CommandPriority, CommandQueue};
use wayfarer_foundation::{Error, ManualClock};

fn queue<T>() -> (CommandQueue<T>, ManualClock) {
    let clock = ManualClock::new();
    (CommandQueue::with_clock(Arc::new(clock.clone())), clock)
}

#[test]
fn priority_scenario() {
    let (mut queue, _clock) = queue();
    queue.enqueue("fn_a", || Ok("fn_a"), CommandPriority::Normal, Duration::ZERO);
    queue.enqueue("fn_b", || Ok("fn_b"), CommandPriority::Low, Duration::ZERO);
    queue.enqueue("fn_c", || Ok("fn_c"), CommandPriority::High, Duration::ZERO);

    assert_eq!(queue.process_queue(), vec!["fn_c", "fn_a", "fn_b"]);
    assert!(queue.is_empty());
}

#[test]
fn delayed_command_waits() {
    let (mut queue, clock) = queue();
    queue.enqueue("bell", || Ok(1), CommandPriority::Normal, Duration::from_secs(3));

    assert!(queue.get_next_command().is_none());
    clock.advance(Duration::from_secs(3));
    let command = queue.get_next_command().unwrap();
    assert_eq!(command.kind(), "bell");
    assert_eq!(command.execute().unwrap(), 1);
}

#[test]
fn arguments_are_captured_at_enqueue() {
    let (mut queue, _clock) = queue();
    for n in 1..=3 {
        queue.enqueue("count", move || Ok(n * 10), CommandPriority::Normal, Duration::ZERO);
    }
    assert_eq!(queue.process_queue(), vec![10, 20, 30]);
}

#[test]
fn failing_command_does_not_stop_the_drain() {
    let (mut queue, _clock) = queue();
    queue.enqueue("ok", || Ok("first"), CommandPriority::Low, Duration::ZERO);
    queue.enqueue(
        "bad",
        || Err(Error::queued_command("trap misfired")),
        CommandPriority::Critical,
        Duration::ZERO,
    );
    queue.enqueue("ok", || Ok("second"), CommandPriority::Low, Duration::ZERO);

    assert_eq!(queue.process_queue(), vec!["first", "second"]);
    assert!(queue.is_empty());
}

#[test]
fn clear_by_type_leaves_other_kinds() {
    let (mut queue, _clock) = queue();
    queue.enqueue("weather", || Ok(()), CommandPriority::Low, Duration::ZERO);
    queue.enqueue("spawn", || Ok(()), CommandPriority::Low, Duration::ZERO);
    queue.enqueue("weather", || Ok(()), CommandPriority::High, Duration::ZERO);

    queue.clear_by_type("weather");
    let kinds: Vec<_> = queue.iter().map(|c| c.kind().to_string()).collect();
    assert_eq!(kinds, ["spawn"]);

    queue.clear();
    assert!(queue.is_empty());
}

// =============================================================================
// Properties
// =============================================================================

fn priority() -> impl Strategy<Value = CommandPriority> {
    prop_oneof![
        Just(CommandPriority::Low),
        Just(CommandPriority::Normal),
        Just(CommandPriority::High),
        Just(CommandPriority::Critical),
    ]
}

proptest! {
    #[test]
    fn ready_commands_drain_by_priority(
        entries in prop::collection::vec((priority(), 0u64..50), 0..30),
    ) {
        let (mut queue, clock) = queue();
        for (index, (priority, delay)) in entries.iter().enumerate() {
            let priority = *priority;
            queue.enqueue(
                "entry",
                move || Ok((priority, index)),
                priority,
                Duration::from_millis(*delay),
            );
        }
        clock.advance(Duration::from_millis(50));

        let drained = queue.process_queue();
        prop_assert_eq!(drained.len(), entries.len());
        prop_assert!(drained.windows(2).all(|pair| pair[0].0 >= pair[1].0));
    }

    #[test]
    fn never_ready_before_delay(delay in 1u64..10_000, early in 1u64..10_000) {
        let (mut queue, clock) = queue();
        queue.enqueue("late", || Ok(()), CommandPriority::Critical, Duration::from_millis(delay));

        clock.set(Duration::from_millis(delay.saturating_sub(early)));
        prop_assert!(queue.process_queue().is_empty());
        prop_assert_eq!(queue.len(), 1);

        clock.set(Duration::from_millis(delay));
        prop_assert_eq!(queue.process_queue().len(), 1);
    }

    #[test]
    fn interrupt_evicts_strictly_lower(
        queued in prop::collection::vec(priority(), 0..20),
        incoming in priority(),
    ) {
        let (mut queue, _clock) = queue();
        for priority in &queued {
            queue.enqueue("queued", || Ok(()), *priority, Duration::ZERO);
        }

        let command = queue.command("interrupt", || Ok(()), incoming, Duration::ZERO);
        queue.interrupt(command);

        prop_assert!(queue.iter().all(|c| c.priority() >= incoming));
        let survivors = queued.iter().filter(|p| **p >= incoming).count();
        prop_assert_eq!(queue.len(), survivors + 1);
    }
}
