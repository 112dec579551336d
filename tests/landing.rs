//! End-to-end runs of the landing screen against a manual clock.

use std::time::Duration;

use spark_landing::pipeline::{step, LandingConfig, LandingContent, LandingScreen};
use spark_landing::state::animate::reset_blink_registries;
use spark_landing::state::reset_lifecycle;
use spark_landing::{
    mark_ready, ready_signal, Clock, DiffRenderer, FrameBuffer, ManualClock, ScriptedSource,
    WordList,
};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn setup(draws: &[usize]) -> (LandingScreen<ScriptedSource>, ManualClock) {
    reset_lifecycle();
    reset_blink_registries();

    let content = LandingContent {
        words: WordList::new(["Go", "Rust"]).unwrap(),
        ..LandingContent::default()
    };
    let screen = LandingScreen::new(
        content,
        LandingConfig::default(),
        ScriptedSource::new(draws.to_vec()),
        ready_signal(),
        true,
        (80, 25),
    )
    .unwrap();
    (screen, ManualClock::new())
}

fn frame_contains(frame: &FrameBuffer, needle: &str) -> bool {
    (0..frame.height()).any(|y| frame.row_text(y).contains(needle))
}

#[test]
fn test_nothing_starts_before_ready() {
    let (mut screen, clock) = setup(&[0, 1]);
    clock.advance_ms(10_000);
    screen.update(clock.now());
    assert!(!screen.is_started());
    assert_eq!(screen.rotating_text(), "");
}

#[test]
fn test_timed_go_rust_cycle() {
    let (mut screen, clock) = setup(&[0, 1]);
    mark_ready();
    screen.update(clock.now());

    // Ready at 0; effects start 2500 + 500 ms later
    let expected: [(u64, &str); 12] = [
        (3000, "R"),
        (3080, "Ru"),
        (3160, "Rus"),
        (3240, "Rust"),
        (4840, "Rus"),
        (4880, "Ru"),
        (4920, "R"),
        (4960, ""),
        (5120, "G"),
        (5200, "Go"),
        (6800, "G"),
        (6840, ""),
    ];

    let mut previous = String::new();
    for (at, text) in expected {
        clock.set(ms(at - 1));
        screen.update(clock.now());
        assert_eq!(screen.rotating_text(), previous, "just before {at}ms");

        clock.set(ms(at));
        screen.update(clock.now());
        assert_eq!(screen.rotating_text(), text, "at {at}ms");
        previous = text.to_string();
    }

    assert_eq!(screen.typewriter().cycles(), 1);
    assert_eq!(screen.typewriter().current_word(), "Go");
}

#[test]
fn test_late_update_does_not_burst() {
    let (mut screen, clock) = setup(&[0]);
    mark_ready();
    screen.update(clock.now());

    clock.set(ms(3000));
    screen.update(clock.now());
    assert_eq!(screen.rotating_text(), "R");

    // A stalled loop catches up by one tick, not four
    clock.set(ms(3500));
    screen.update(clock.now());
    assert_eq!(screen.rotating_text(), "Ru");
    assert_eq!(screen.next_wake(clock.now()), ms(16).min(ms(80)));
}

#[test]
fn test_rendered_frame_shows_rotating_word() {
    let (mut screen, clock) = setup(&[0, 1]);
    let mut renderer = DiffRenderer::new(Vec::new());
    mark_ready();

    for at in [0, 3000, 3080, 3160, 3240] {
        clock.set(ms(at));
        assert!(step(&mut screen, &mut renderer, None, clock.now()).unwrap());
    }

    let frame = screen.compose(clock.now());
    assert!(frame_contains(&frame, "Rust"));
    assert!(!renderer.into_inner().is_empty());
}
