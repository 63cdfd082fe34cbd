//! Lesson 4: Namespaces
//!
//! Run with: cargo run --bin p4_namespaces

use std::io::{self, Write};

use object_basics::{telemetry, Lesson};

fn main() -> object_basics::Result<()> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Lesson::Namespaces.run(&mut out)?;
    out.flush()?;
    Ok(())
}
