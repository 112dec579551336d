//! Drive the typewriter against a manual clock and print every tick.
//!
//! ```text
//! cargo run --example headless -- 12000
//! ```
//!
//! The optional argument is how many simulated milliseconds to run.

use std::time::Duration;

use spark_landing::{
    Clock, ManualClock, RecordingTarget, TimerSlot, TypewriterBuilder, LANGUAGES,
};

fn main() -> spark_landing::Result<()> {
    env_logger::init();

    let run_for = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .map(Duration::from_millis)
        .unwrap_or(Duration::from_secs(10));

    let clock = ManualClock::new();
    let target = RecordingTarget::new();
    let mut typewriter = TypewriterBuilder::new()
        .words(LANGUAGES)
        .target(target.clone())
        .build()?;

    let mut timer = TimerSlot::new();
    timer.arm(clock.now(), Duration::ZERO);

    while let Some(due) = timer.due() {
        if due > run_for {
            break;
        }
        clock.set(due);
        let mut last = None;
        timer.fire(clock.now(), || {
            let tick = typewriter.tick();
            let delay = tick.delay;
            last = Some(tick);
            delay
        });
        if let Some(tick) = last {
            println!(
                "{:>6}ms  {:<12} {:?} (next in {}ms)",
                due.as_millis(),
                tick.text,
                tick.transition,
                tick.delay.as_millis()
            );
        }
    }

    println!("{} writes, {} full cycles", target.writes(), typewriter.cycles());
    Ok(())
}
