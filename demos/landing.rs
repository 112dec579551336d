//! Full landing screen in the terminal.
//!
//! ```text
//! cargo run --example landing
//! RUST_LOG=debug cargo run --example landing 2> landing.log
//! ```
//!
//! Quit with `q`, `Esc` or Ctrl+C. Scroll with the wheel, arrows or `j`/`k`.

use spark_landing::{run, LandingConfig, LandingContent};

fn main() -> spark_landing::Result<()> {
    env_logger::init();
    run(LandingConfig::default(), LandingContent::default())
}
