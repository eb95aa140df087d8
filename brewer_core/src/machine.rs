//! The machine state: power flag, inventory, cup counter.
//!
//! `Machine` is a pure state machine; the power precondition for each
//! command lives in [`crate::session::Session`], mirroring the split
//! between validation and mutation in the interpreter.

use crate::config::MachineCfg;
use crate::error::{BrewError, ConfigError, MachineError};
use crate::ingredient::{IngredientKind, Ingredients};
use crate::recipe::Drink;

/// Result of a refill request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefillOutcome {
    pub kind: IngredientKind,
    pub old: u32,
    pub new: u32,
    /// Amount actually added, after clamping to free space.
    pub added: u32,
    /// The request exceeded free space and was clamped.
    pub clamped: bool,
}

/// Result of a successful brew.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrewOutcome {
    pub quantity: u32,
    /// Total ingredients consumed (per-cup requirements × quantity).
    pub used: Ingredients,
}

/// The single mutable state object of the simulator. Created once at
/// process start and alive for the process lifetime; mutated only through
/// the operations below.
///
/// Invariants: `0 <= stock <= capacity` per ingredient and
/// `0 <= cups_made <= cups_before_clean` at all times.
#[derive(Debug, Clone)]
pub struct Machine {
    cfg: MachineCfg,
    is_on: bool,
    cups_made: u32,
    ingredients: Ingredients,
}

impl Default for Machine {
    fn default() -> Self {
        let cfg = MachineCfg::default();
        Self {
            ingredients: cfg.initial_fill,
            is_on: false,
            cups_made: 0,
            cfg,
        }
    }
}

impl Machine {
    pub fn new(cfg: MachineCfg) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            ingredients: cfg.initial_fill,
            is_on: false,
            cups_made: 0,
            cfg,
        })
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn cups_made(&self) -> u32 {
        self.cups_made
    }

    pub fn cups_before_clean(&self) -> u32 {
        self.cfg.cups_before_clean
    }

    pub fn ingredients(&self) -> &Ingredients {
        &self.ingredients
    }

    pub fn capacity(&self, kind: IngredientKind) -> u32 {
        self.cfg.capacity(kind)
    }

    pub fn needs_cleaning(&self) -> bool {
        self.cups_made == self.cfg.cups_before_clean
    }

    /// Set the power flag. Cups and ingredients persist across off/on.
    pub fn turn_on(&mut self) -> Result<(), MachineError> {
        if self.is_on {
            return Err(MachineError::AlreadyOn);
        }
        self.is_on = true;
        tracing::info!("powered on");
        Ok(())
    }

    pub fn turn_off(&mut self) -> Result<(), MachineError> {
        if !self.is_on {
            return Err(MachineError::AlreadyOff);
        }
        self.is_on = false;
        tracing::info!("powered off");
        Ok(())
    }

    /// Refill one ingredient. A `u32::MAX` request means "fill to capacity".
    ///
    /// Adds `min(requested, free_space)` and reports `clamped` whenever the
    /// request exceeded free space, so a fill request always carries the
    /// capacity-limited warning, including when free space is zero.
    pub fn refill(&mut self, kind: IngredientKind, requested: u32) -> RefillOutcome {
        let cap = self.capacity(kind);
        let slot = self.ingredients.get_mut(kind);
        let old = *slot;
        let free = cap.saturating_sub(old);
        let added = requested.min(free);
        *slot += added;
        let new = *slot;
        tracing::debug!(kind = kind.label(), old, new, added, "refill");
        RefillOutcome {
            kind,
            old,
            new,
            added,
            clamped: requested > free,
        }
    }

    /// Reset the cup counter for a fresh cleaning cycle.
    pub fn clean(&mut self) {
        self.cups_made = 0;
        tracing::debug!("cleaned");
    }

    /// Brew `quantity` cups of `drink`. Guards short-circuit in a fixed
    /// order: cleaning due, per-cycle cup cap, ingredient stock. Any
    /// rejection leaves the machine untouched.
    pub fn brew(&mut self, drink: &Drink, quantity: u32) -> Result<BrewOutcome, BrewError> {
        if self.needs_cleaning() {
            return Err(BrewError::NeedsCleaning);
        }
        let remaining = self.cfg.cups_before_clean - self.cups_made;
        if quantity > remaining {
            return Err(BrewError::CupLimit {
                remaining,
                cups_made: self.cups_made,
            });
        }
        let need = drink.requirements().scaled(quantity);
        if !self.ingredients.covers(&need) {
            return Err(BrewError::OutOfStock {
                quantity,
                name: drink.name(),
            });
        }
        self.ingredients.consume(&need);
        self.cups_made += quantity;
        tracing::debug!(
            drink = drink.name(),
            quantity,
            cups_made = self.cups_made,
            "brewed"
        );
        Ok(BrewOutcome {
            quantity,
            used: need,
        })
    }

    /// One ingredient level, e.g. `"Water: 1000/2000 ml"`.
    pub fn ingredient_status(&self, kind: IngredientKind) -> String {
        format!(
            "{}: {}/{} {}",
            kind.label(),
            self.ingredients.get(kind),
            self.capacity(kind),
            kind.unit()
        )
    }

    /// All three levels joined, e.g.
    /// `"Water: 1000/2000 ml. Coffee: 300/500 g. Milk: 800/1000 ml"`.
    pub fn ingredients_status(&self) -> String {
        IngredientKind::ALL
            .map(|kind| self.ingredient_status(kind))
            .join(". ")
    }

    /// `"Needs cleaning after {n} cups"`, or `"Needs cleaning"` once the
    /// cycle is exhausted.
    pub fn cleaning_status(&self) -> String {
        if self.cups_made < self.cfg.cups_before_clean {
            format!(
                "Needs cleaning after {} cups",
                self.cfg.cups_before_clean - self.cups_made
            )
        } else {
            "Needs cleaning".to_string()
        }
    }
}
