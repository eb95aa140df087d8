#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Core of the coffee machine simulator (I/O-agnostic).
//!
//! This crate holds the whole command interpreter: the mutable machine
//! state, the fixed recipe catalog, the line grammar, and the session
//! that turns input lines into deterministic text replies. The binary in
//! `brewer_cli` only moves lines between stdin/stdout and the [`Session`].
//!
//! ## Architecture
//!
//! - **Configuration**: capacities, initial fill, cleaning cycle (`config`)
//! - **Inventory**: ingredient kinds and amounts (`ingredient`)
//! - **Recipes**: fixed drinks plus ad-hoc custom drinks (`recipe`)
//! - **State machine**: power, cup counter, stock mutations (`machine`)
//! - **Grammar**: tokenizing one line into a `Command` (`command`)
//! - **Interpreter**: preconditions and reply rendering (`session`)

pub mod command;
pub mod config;
pub mod error;
pub mod ingredient;
pub mod machine;
pub mod recipe;
pub mod session;

pub use command::Command;
pub use config::MachineCfg;
pub use error::{BrewError, ConfigError, MachineError, ParseError};
pub use ingredient::{IngredientKind, Ingredients};
pub use machine::{BrewOutcome, Machine, RefillOutcome};
pub use recipe::Drink;
pub use session::{GREETING, Reply, Session};
