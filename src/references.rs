//! Lesson 5: References

use std::io::{self, Write};

pub fn increase(num: &mut i32) {
    *num += 10;
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let mut value = 5;
    increase(&mut value);
    writeln!(out, "New value: {}", value)?;

    let val_alias = &mut value;
    *val_alias += 6;
    writeln!(out, "New value: {}", val_alias)?;
    // The alias is no longer used, so `value` can be read again.
    writeln!(out, "New value: {}", value)
}
