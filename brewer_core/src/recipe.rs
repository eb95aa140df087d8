//! Drink recipes: a fixed catalog plus ad-hoc custom drinks.

use crate::ingredient::Ingredients;

/// A drink the machine can brew.
///
/// Built-in recipes are constants; `Custom` carries user-supplied per-cup
/// amounts and is never stored anywhere beyond the invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drink {
    Espresso,
    Cappuccino,
    Latte,
    Custom(Ingredients),
}

impl Drink {
    /// Lowercase name used in replies.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Espresso => "espresso",
            Self::Cappuccino => "cappuccino",
            Self::Latte => "latte",
            Self::Custom(_) => "drink",
        }
    }

    /// Per-cup ingredient requirements.
    pub fn requirements(&self) -> Ingredients {
        match self {
            Self::Espresso => Ingredients::new(40, 10, 0),
            Self::Cappuccino => Ingredients::new(60, 10, 100),
            Self::Latte => Ingredients::new(60, 8, 140),
            Self::Custom(amounts) => *amounts,
        }
    }

    /// Resolve a named drink from the first two characters of the token
    /// (`es`, `ca`, `la`). Loose on purpose, like the one-letter
    /// ingredient codes: "latte2go" resolves to Latte.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.get(..2) {
            Some("es") => Some(Self::Espresso),
            Some("ca") => Some(Self::Cappuccino),
            Some("la") => Some(Self::Latte),
            _ => None,
        }
    }
}
