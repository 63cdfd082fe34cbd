//! Lesson 1: Virtual Dispatch
//!
//! `draw` has a default body on the trait; implementors override it. The
//! caller holds `&dyn Shape` and the vtable picks the variant at run time.

use std::io::{self, Write};

pub trait Shape {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Drawing a generic shape")
    }
}

/// Keeps the trait's default `draw`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericShape;

#[derive(Debug, Default, Clone, Copy)]
pub struct Circle;

#[derive(Debug, Default, Clone, Copy)]
pub struct Square;

impl Shape for GenericShape {}

impl Shape for Circle {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Drawing a circle")
    }
}

impl Shape for Square {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Drawing a square")
    }
}

/// Decided at run time: only the abstraction is known here.
pub fn render(shape: &dyn Shape, out: &mut dyn Write) -> io::Result<()> {
    shape.draw(out)
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let circle = Circle;
    let square = Square;

    render(&circle, out)?;
    render(&square, out)?;
    Ok(())
}
