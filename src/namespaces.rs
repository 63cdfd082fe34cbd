//! Lesson 4: Namespaces
//!
//! Modules group related items; callers reach them through the path.

use std::io::{self, Write};

pub mod physics {
    pub const GRAVITY: f64 = 9.8;

    pub fn describe() -> &'static str {
        "This is the physics namespace."
    }
}

pub mod math {
    pub fn add(a: i32, b: i32) -> i32 {
        a + b
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", physics::describe())?;
    writeln!(out, "Gravity constant: {}", physics::GRAVITY)?;
    writeln!(out, "Sum: {}", math::add(3, 4))
}
