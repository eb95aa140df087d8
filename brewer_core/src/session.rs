//! The command interpreter: owns the machine, enforces power
//! preconditions, and renders deterministic replies.
//!
//! Every failure becomes a single `--`-prefixed reply; nothing here
//! terminates the loop except the `quit` command itself.

use std::fmt::Display;

use crate::command::{self, Command, Verb};
use crate::config::MachineCfg;
use crate::error::{BrewError, ConfigError, MachineError, ParseError};
use crate::ingredient::IngredientKind;
use crate::machine::Machine;
use crate::recipe::Drink;

/// Greeting printed once before the loop starts.
pub const GREETING: &str = "Run 'help' to view manual";

/// Outcome of evaluating one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to print; possibly multi-line, no trailing newline.
    Output(String),
    /// The `quit` command: end the loop, print nothing.
    Quit,
}

/// Interactive interpreter session over a single [`Machine`].
#[derive(Debug, Default)]
pub struct Session {
    machine: Machine,
}

impl Session {
    pub fn new(cfg: MachineCfg) -> Result<Self, ConfigError> {
        Ok(Self {
            machine: Machine::new(cfg)?,
        })
    }

    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// Evaluate one input line into a full reply.
    ///
    /// The power precondition sits between the two grammar stages: a
    /// powered-off machine is reported before the arguments of a state
    /// command are inspected (`add x` while off is a power error, not an
    /// ingredient error).
    pub fn eval(&mut self, line: &str) -> Reply {
        tracing::trace!(line, "eval");
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&head, args)) = tokens.split_first() else {
            return Reply::Output(reject(&ParseError::UnknownCommand));
        };
        let Some(verb) = Verb::from_token(head) else {
            return Reply::Output(reject(&ParseError::UnknownCommand));
        };
        if verb.requires_power() && !self.machine.is_on() {
            return Reply::Output(reject(&MachineError::PowerOff));
        }
        match command::parse_args(verb, args) {
            Ok(cmd) => self.run(cmd),
            Err(e) => Reply::Output(reject(&e)),
        }
    }

    fn run(&mut self, cmd: Command) -> Reply {
        let text = match cmd {
            // `help` and `quit` work regardless of power state.
            Command::Help => usage(),
            Command::Quit => return Reply::Quit,
            Command::On => self.turn_on(),
            Command::Off => self.turn_off(),
            Command::Add { kind, amount } => self.add(kind, amount),
            Command::Check { kind } => self.check(kind),
            Command::Make { drink, cups } => self.make(&drink, cups),
            Command::Clean => self.clean(),
            Command::Recipe { drink } => recipe_card(&drink),
        };
        Reply::Output(text)
    }

    fn turn_on(&mut self) -> String {
        match self.machine.turn_on() {
            Ok(()) => format!(
                "Coffee machine is ready to use.\n{}\n{}",
                self.machine.ingredients_status(),
                self.machine.cleaning_status()
            ),
            Err(e) => reject(&e),
        }
    }

    fn turn_off(&mut self) -> String {
        match self.machine.turn_off() {
            Ok(()) => "Bye!".to_string(),
            Err(e) => reject(&e),
        }
    }

    fn add(&mut self, kind: IngredientKind, amount: Option<u32>) -> String {
        // An omitted amount is an unbounded request, clamped by the machine.
        let outcome = self.machine.refill(kind, amount.unwrap_or(u32::MAX));
        let cap = self.machine.capacity(kind);
        let unit = kind.unit();
        let status = format!(
            "{}: {}/{cap} {unit} -> {}/{cap} {unit}",
            kind.label(),
            outcome.old,
            outcome.new
        );
        if outcome.clamped {
            format!(
                "Can only add {} {unit} {}\n{status}",
                outcome.added,
                kind.label()
            )
        } else {
            status
        }
    }

    fn check(&self, kind: Option<IngredientKind>) -> String {
        match kind {
            None => format!(
                "{}\n{}",
                self.machine.ingredients_status(),
                self.machine.cleaning_status()
            ),
            Some(kind) => self.machine.ingredient_status(kind),
        }
    }

    fn clean(&mut self) -> String {
        self.machine.clean();
        format!(
            "Cleaning completed! Now you can make up to {} cups.",
            self.machine.cups_before_clean()
        )
    }

    fn make(&mut self, drink: &Drink, cups: u32) -> String {
        match self.machine.brew(drink, cups) {
            Ok(outcome) => {
                let head = if outcome.quantity == 1 {
                    format!("Your {} is ready!", drink.name())
                } else {
                    format!("Your {} {} are ready!", outcome.quantity, drink.name())
                };
                format!(
                    "{head}\n{}\n{}",
                    self.machine.ingredients_status(),
                    self.machine.cleaning_status()
                )
            }
            Err(err) => {
                let msg = reject(&err);
                match err {
                    // Nudge towards cleaning only once cups were made this cycle.
                    BrewError::CupLimit { cups_made, .. } if cups_made > 0 => format!(
                        "{msg}\n--Please clean the coffee machine first to make up to {} cups.",
                        self.machine.cups_before_clean()
                    ),
                    BrewError::OutOfStock { .. } => {
                        format!("{msg}\n{}", self.machine.ingredients_status())
                    }
                    _ => msg,
                }
            }
        }
    }
}

fn reject(err: &impl Display) -> String {
    format!("--{err}")
}

fn recipe_card(drink: &Drink) -> String {
    let need = drink.requirements();
    format!(
        "~{}~\nWater: {} ml, coffee: {} g, milk: {} ml",
        capitalize(drink.name()),
        need.water,
        need.coffee,
        need.milk
    )
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn usage() -> String {
    [
        "==Coffee machine usage==",
        "Use full or short argument names: w == water, c == coffee, m == milk; es == espresso, ca == cappuccino, la == latte",
        "on - To turn on",
        "off - To turn off",
        "add 'ingredient name' 'quantity' - To add ingredients (run without 'quantity' to fill completely). Example: add c 200",
        "check 'ingredient name' - To check ingredient amount (run without arguments to check all ingredients and cleaning status). Example: check w",
        "clean - To clean the coffee machine",
        "make 'coffee drink' 'cups' - To make a drink (espresso, cappuccino, latte). Without cups quantity one cup will be made. Example: make latte 2",
        "make 'coffee amount' 'water amount' 'milk amount' - To make a custom coffee drink. Example: make 15 60 100",
        "recipe 'coffee drink' - To print a recipe of a drink. Example: recipe ca",
        "help - To view manual",
        "quit - To quit the program",
    ]
    .join("\n")
}
