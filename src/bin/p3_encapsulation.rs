//! Lesson 3: Encapsulation
//!
//! Run with: cargo run --bin p3_encapsulation

use std::io::{self, Write};

use object_basics::{telemetry, Lesson};

fn main() -> object_basics::Result<()> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Lesson::Encapsulation.run(&mut out)?;
    out.flush()?;
    Ok(())
}
