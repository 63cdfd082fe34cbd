//! Runs a configured list of lessons one after another.

use std::io::Write;

use colored::Colorize;

use crate::config::TourConfig;

pub fn header(index: usize, title: &str) -> String {
    format!("=== Lesson {}: {} ===", index + 1, title)
}

/// Lessons are separated by a blank line. Headers are plain when `color` is off.
pub fn run(config: &TourConfig, out: &mut dyn Write) -> crate::Result<()> {
    for (index, lesson) in config.lessons.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        let header = header(index, lesson.title());
        if config.color {
            writeln!(out, "{}", header.bold().cyan())?;
        } else {
            writeln!(out, "{}", header)?;
        }
        lesson.run(out)?;
    }
    Ok(())
}
