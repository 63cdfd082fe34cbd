//! Lesson 1: Virtual Dispatch
//!
//! Run with: cargo run --bin p1_polymorphism

use std::io::{self, Write};

use object_basics::{telemetry, Lesson};

fn main() -> object_basics::Result<()> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    // Drawing a circle, then Drawing a square
    Lesson::Polymorphism.run(&mut out)?;
    out.flush()?;
    Ok(())
}
