use std::fmt;
use std::io::{self, Write};

use serde::Deserialize;

use crate::{account, building, namespaces, references, shapes, templates};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lesson {
    Polymorphism,
    Lifecycle,
    Encapsulation,
    Namespaces,
    References,
    Templates,
}

impl Lesson {
    pub const ALL: [Lesson; 6] = [
        Lesson::Polymorphism,
        Lesson::Lifecycle,
        Lesson::Encapsulation,
        Lesson::Namespaces,
        Lesson::References,
        Lesson::Templates,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Lesson::Polymorphism => "polymorphism",
            Lesson::Lifecycle => "lifecycle",
            Lesson::Encapsulation => "encapsulation",
            Lesson::Namespaces => "namespaces",
            Lesson::References => "references",
            Lesson::Templates => "templates",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Lesson::Polymorphism => "Virtual Dispatch",
            Lesson::Lifecycle => "Constructors and Destructors",
            Lesson::Encapsulation => "Encapsulation",
            Lesson::Namespaces => "Namespaces",
            Lesson::References => "References",
            Lesson::Templates => "Generic Functions",
        }
    }

    pub fn run(self, out: &mut dyn Write) -> io::Result<()> {
        tracing::debug!(lesson = self.name(), "running lesson");
        match self {
            Lesson::Polymorphism => shapes::run(out),
            Lesson::Lifecycle => building::run(out),
            Lesson::Encapsulation => account::run(out),
            Lesson::Namespaces => namespaces::run(out),
            Lesson::References => references::run(out),
            Lesson::Templates => templates::run(out),
        }
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
