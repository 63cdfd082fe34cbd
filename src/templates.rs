//! Lesson 6: Generic Functions
//!
//! One definition, monomorphized for each `T` it is called with.

use std::io::{self, Write};

/// Ties return `b`.
pub fn max_value<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

// The lesson prints this literal, not PI.
#[allow(clippy::approx_constant)]
pub fn run(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", max_value(5, 10))?;
    writeln!(out, "{}", max_value(3.14, 2.71))?;
    writeln!(out, "{}", max_value('x', 'm'))
}
