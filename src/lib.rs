//! # Object Basics
//!
//! Small runnable lessons on the object model: construction and destruction,
//! dynamic dispatch, encapsulation, namespaces, references and generic
//! functions.
//!
//! ## Lesson 1: Virtual Dispatch
//! - A `Shape` trait with a default `draw`
//! - `Circle` and `Square` override it, `GenericShape` keeps the default
//! - `render` only sees `&dyn Shape`
//!
//! ## Lesson 2: Constructors and Destructors
//! - `Building` and `Apartment` announce construction and `Drop`
//! - Composition instead of a re-declared base
//! - Heap values behind `Box<dyn Structure>` released explicitly
//!
//! ## Lesson 3: Encapsulation
//! - `BankAccount` with a private balance and a guarded deposit
//!
//! ## Lesson 4: Namespaces
//! - Nested modules `physics` and `math`
//!
//! ## Lesson 5: References
//! - `&mut` parameters and aliases
//!
//! ## Lesson 6: Generic Functions
//! - `max_value` over any `PartialOrd`
//!
//! Run a lesson with: `cargo run --bin <name>`, or all of them with
//! `cargo run --bin tour [config.toml]`.

pub mod account;
pub mod building;
pub mod config;
pub mod error;
pub mod lesson;
pub mod namespaces;
pub mod references;
pub mod shapes;
pub mod telemetry;
pub mod templates;
pub mod tour;

pub use error::{Error, Result};
pub use lesson::Lesson;
