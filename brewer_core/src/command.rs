//! Line grammar: split one input line on whitespace and match it against
//! the fixed command vocabulary.
//!
//! Parsing is two-staged on purpose. The first token resolves to a
//! [`Verb`]; the session checks the power precondition between the
//! stages, because the interpreter reports a powered-off machine before
//! it even looks at the arguments of `add`/`check`/`make`/`clean`/
//! `recipe` (while `on`/`off` validate their argument count first).
//!
//! The check order inside each command is also part of the protocol:
//! `add` resolves the ingredient before inspecting the amount, so
//! `add z 1 2` reports the ingredient while `add w 1 2` reports the
//! argument count.

use crate::error::ParseError;
use crate::ingredient::{IngredientKind, Ingredients};
use crate::recipe::Drink;

/// First-stage result: the command word, matched case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    On,
    Off,
    Add,
    Check,
    Make,
    Clean,
    Recipe,
    Help,
    Quit,
}

impl Verb {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "on" => Some(Self::On),
            "off" => Some(Self::Off),
            "add" => Some(Self::Add),
            "check" => Some(Self::Check),
            "make" => Some(Self::Make),
            "clean" => Some(Self::Clean),
            "recipe" => Some(Self::Recipe),
            "help" => Some(Self::Help),
            "quit" => Some(Self::Quit),
            _ => None,
        }
    }

    /// Commands whose power precondition is checked before their
    /// arguments. `help` and `quit` are always available; `on`/`off`
    /// handle power state themselves after the argument-count check.
    pub fn requires_power(self) -> bool {
        matches!(
            self,
            Self::Add | Self::Check | Self::Make | Self::Clean | Self::Recipe
        )
    }
}

/// One fully parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    On,
    Off,
    /// `amount: None` means "fill to capacity".
    Add {
        kind: IngredientKind,
        amount: Option<u32>,
    },
    /// `kind: None` reports all levels plus the cleaning status.
    Check {
        kind: Option<IngredientKind>,
    },
    /// Covers both named recipes and custom drinks (`cups` is 1 for custom).
    Make {
        drink: Drink,
        cups: u32,
    },
    Clean,
    Recipe {
        drink: Drink,
    },
    Help,
    Quit,
}

/// Second stage: parse the argument tokens of a resolved verb. Errors
/// carry the exact text the interpreter prints (minus the `--` prefix).
/// `clean`, `help` and `quit` tolerate trailing tokens.
pub fn parse_args(verb: Verb, args: &[&str]) -> Result<Command, ParseError> {
    match verb {
        Verb::On => no_args(args, Command::On),
        Verb::Off => no_args(args, Command::Off),
        Verb::Add => parse_add(args),
        Verb::Check => parse_check(args),
        Verb::Make => parse_make(args),
        Verb::Clean => Ok(Command::Clean),
        Verb::Recipe => parse_recipe(args),
        Verb::Help => Ok(Command::Help),
        Verb::Quit => Ok(Command::Quit),
    }
}

/// Both stages in one call, ignoring power state. Grammar tests and any
/// caller that does not interleave preconditions use this.
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = tokens.split_first() else {
        return Err(ParseError::UnknownCommand);
    };
    let verb = Verb::from_token(head).ok_or(ParseError::UnknownCommand)?;
    parse_args(verb, args)
}

fn no_args(args: &[&str], cmd: Command) -> Result<Command, ParseError> {
    if args.is_empty() {
        Ok(cmd)
    } else {
        Err(ParseError::BadInput)
    }
}

/// A strictly positive integer. Values beyond `u32::MAX` saturate: for
/// amounts that is indistinguishable from a fill request and for cup
/// counts it still exceeds the per-cycle cap.
fn parse_positive(token: &str) -> Option<u32> {
    token
        .parse::<u64>()
        .ok()
        .filter(|&n| n > 0)
        .map(|n| n.min(u64::from(u32::MAX)) as u32)
}

fn parse_add(args: &[&str]) -> Result<Command, ParseError> {
    if args.is_empty() {
        return Err(ParseError::BadInput);
    }
    let kind = IngredientKind::from_token(args[0]).ok_or(ParseError::UnknownIngredient)?;
    match args.len() {
        1 => Ok(Command::Add { kind, amount: None }),
        2 => {
            let amount = parse_positive(args[1]).ok_or(ParseError::BadAmount)?;
            Ok(Command::Add {
                kind,
                amount: Some(amount),
            })
        }
        _ => Err(ParseError::BadArgCount),
    }
}

fn parse_check(args: &[&str]) -> Result<Command, ParseError> {
    match args {
        [] => Ok(Command::Check { kind: None }),
        [token] => {
            let kind = IngredientKind::from_token(token).ok_or(ParseError::UnknownArgument)?;
            Ok(Command::Check { kind: Some(kind) })
        }
        _ => Err(ParseError::BadArgCount),
    }
}

fn parse_make(args: &[&str]) -> Result<Command, ParseError> {
    match args {
        [drink_token] | [drink_token, _] => {
            let drink = Drink::from_token(drink_token).ok_or(ParseError::UnknownDrink)?;
            let cups = match args.get(1) {
                Some(token) => parse_positive(token).ok_or(ParseError::BadCupsNumber)?,
                None => 1,
            };
            Ok(Command::Make { drink, cups })
        }
        // Custom drink: positional coffee, water, milk (not field order).
        [coffee, water, milk] => {
            match (
                parse_positive(coffee),
                parse_positive(water),
                parse_positive(milk),
            ) {
                (Some(coffee), Some(water), Some(milk)) => Ok(Command::Make {
                    drink: Drink::Custom(Ingredients::new(water, coffee, milk)),
                    cups: 1,
                }),
                _ => Err(ParseError::BadInput),
            }
        }
        _ => Err(ParseError::BadInput),
    }
}

fn parse_recipe(args: &[&str]) -> Result<Command, ParseError> {
    match args {
        [token] => {
            let drink = Drink::from_token(token).ok_or(ParseError::UnknownDrink)?;
            Ok(Command::Recipe { drink })
        }
        _ => Err(ParseError::BadInput),
    }
}
