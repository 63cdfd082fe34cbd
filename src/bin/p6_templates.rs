//! Lesson 6: Generic Functions
//!
//! Run with: cargo run --bin p6_templates

use std::io::{self, Write};

use object_basics::{telemetry, Lesson};

fn main() -> object_basics::Result<()> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Lesson::Templates.run(&mut out)?;
    out.flush()?;
    Ok(())
}
