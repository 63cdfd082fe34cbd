//! Lesson 5: References
//!
//! Run with: cargo run --bin p5_references

use std::io::{self, Write};

use object_basics::{telemetry, Lesson};

fn main() -> object_basics::Result<()> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Lesson::References.run(&mut out)?;
    out.flush()?;
    Ok(())
}
