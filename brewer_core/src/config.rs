//! Runtime configuration for the simulated machine.

use crate::error::ConfigError;
use crate::ingredient::{IngredientKind, Ingredients};

/// Capacities, power-up fill and the cleaning cycle length.
///
/// `Default` carries the fixed constants of the simulated device; tests
/// construct smaller machines to hit edge cases cheaply.
#[derive(Debug, Clone)]
pub struct MachineCfg {
    /// Water tank capacity (ml).
    pub water_capacity: u32,
    /// Coffee hopper capacity (g).
    pub coffee_capacity: u32,
    /// Milk tank capacity (ml).
    pub milk_capacity: u32,
    /// Stock at process start.
    pub initial_fill: Ingredients,
    /// Cups that can be made between cleanings.
    pub cups_before_clean: u32,
}

impl Default for MachineCfg {
    fn default() -> Self {
        Self {
            water_capacity: 2000,
            coffee_capacity: 500,
            milk_capacity: 1000,
            initial_fill: Ingredients::new(1000, 300, 800),
            cups_before_clean: 7,
        }
    }
}

impl MachineCfg {
    pub fn capacity(&self, kind: IngredientKind) -> u32 {
        match kind {
            IngredientKind::Water => self.water_capacity,
            IngredientKind::Coffee => self.coffee_capacity,
            IngredientKind::Milk => self.milk_capacity,
        }
    }

    /// Validate invariants before a machine is built around this config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.water_capacity == 0 || self.coffee_capacity == 0 || self.milk_capacity == 0 {
            return Err(ConfigError::Invalid("capacities must be > 0"));
        }
        if self.cups_before_clean == 0 {
            return Err(ConfigError::Invalid("cups_before_clean must be >= 1"));
        }
        for kind in IngredientKind::ALL {
            if self.initial_fill.get(kind) > self.capacity(kind) {
                return Err(ConfigError::Invalid("initial fill exceeds capacity"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(MachineCfg::default().validate().is_ok());
    }

    #[test]
    fn overfull_initial_fill_is_rejected() {
        let cfg = MachineCfg {
            initial_fill: Ingredients::new(3000, 0, 0),
            ..MachineCfg::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::Invalid("initial fill exceeds capacity"))
        );
    }

    #[test]
    fn zero_cycle_is_rejected() {
        let cfg = MachineCfg {
            cups_before_clean: 0,
            ..MachineCfg::default()
        };
        assert!(cfg.validate().is_err());
    }
}
