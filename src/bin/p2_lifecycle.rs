//! Lesson 2: Constructors and Destructors
//!
//! Run with: cargo run --bin p2_lifecycle

use std::io::{self, Write};

use object_basics::{telemetry, Lesson};

fn main() -> object_basics::Result<()> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Lesson::Lifecycle.run(&mut out)?;
    out.flush()?;
    Ok(())
}
