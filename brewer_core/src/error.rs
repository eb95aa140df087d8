//! Typed failures for the interpreter. Every variant's `Display` text is
//! exactly what the session prints after its `--` prefix; none of them is
//! fatal to the loop.

use thiserror::Error;

/// Rejected `MachineCfg` values, caught at construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Power-state violations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MachineError {
    #[error("Coffee machine is already on")]
    AlreadyOn,
    #[error("Coffee machine is already off")]
    AlreadyOff,
    #[error("Coffee machine is off. Run 'on' to turn on")]
    PowerOff,
}

/// Rejections of a brew request. A rejected brew never mutates the machine.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BrewError {
    #[error("Please clean the coffee machine first.")]
    NeedsCleaning,
    /// The request would exceed the per-cycle cup cap.
    #[error("Only {remaining} cups can be made.")]
    CupLimit { remaining: u32, cups_made: u32 },
    /// Some ingredient requirement exceeds the current stock.
    #[error("Not enough ingredients to make {quantity} {name}.")]
    OutOfStock { quantity: u32, name: &'static str },
}

/// Per-command input rejections. The wording is part of the protocol:
/// `add` complains about an "ingredient" while `check` complains about an
/// "argument", and the two numeric messages differ per command.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("Incorrect command. Run 'help' to view manual")]
    UnknownCommand,
    #[error("Incorrect input")]
    BadInput,
    #[error("Incorrect arguments count")]
    BadArgCount,
    #[error("Incorrect ingredient")]
    UnknownIngredient,
    #[error("Incorrect argument")]
    UnknownArgument,
    #[error("Incorrect amount")]
    BadAmount,
    #[error("Incorrect drink name")]
    UnknownDrink,
    #[error("Incorrect cups number")]
    BadCupsNumber,
}
