//! Ingredient kinds and the inventory value type.

/// The three consumables tracked by the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IngredientKind {
    Water,
    Coffee,
    Milk,
}

impl IngredientKind {
    /// All kinds in status-line order.
    pub const ALL: [Self; 3] = [Self::Water, Self::Coffee, Self::Milk];

    /// Capitalized label used in status lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Water => "Water",
            Self::Coffee => "Coffee",
            Self::Milk => "Milk",
        }
    }

    /// Measurement unit used in status lines.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Water | Self::Milk => "ml",
            Self::Coffee => "g",
        }
    }

    /// Resolve an argument token by its first character (`w`, `c`, `m`).
    ///
    /// Loose on purpose: "water123" resolves to Water. This is observable
    /// protocol behavior; do not tighten to an exact match.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.chars().next() {
            Some('w') => Some(Self::Water),
            Some('c') => Some(Self::Coffee),
            Some('m') => Some(Self::Milk),
            _ => None,
        }
    }
}

/// Non-negative amounts per ingredient. Used both for stock levels and
/// for per-cup recipe requirements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ingredients {
    pub water: u32,
    pub coffee: u32,
    pub milk: u32,
}

impl Ingredients {
    pub const fn new(water: u32, coffee: u32, milk: u32) -> Self {
        Self {
            water,
            coffee,
            milk,
        }
    }

    pub fn get(&self, kind: IngredientKind) -> u32 {
        match kind {
            IngredientKind::Water => self.water,
            IngredientKind::Coffee => self.coffee,
            IngredientKind::Milk => self.milk,
        }
    }

    pub fn get_mut(&mut self, kind: IngredientKind) -> &mut u32 {
        match kind {
            IngredientKind::Water => &mut self.water,
            IngredientKind::Coffee => &mut self.coffee,
            IngredientKind::Milk => &mut self.milk,
        }
    }

    /// Requirements scaled to a cup count. Saturates instead of wrapping;
    /// a saturated demand can never be covered by a bounded stock anyway.
    pub fn scaled(&self, quantity: u32) -> Self {
        Self {
            water: self.water.saturating_mul(quantity),
            coffee: self.coffee.saturating_mul(quantity),
            milk: self.milk.saturating_mul(quantity),
        }
    }

    /// True when every field of `need` is covered by this stock.
    pub fn covers(&self, need: &Self) -> bool {
        self.water >= need.water && self.coffee >= need.coffee && self.milk >= need.milk
    }

    /// Subtract `used` from the stock. Callers check [`covers`](Self::covers) first.
    pub fn consume(&mut self, used: &Self) {
        debug_assert!(self.covers(used), "consume called without covering stock");
        self.water = self.water.saturating_sub(used.water);
        self.coffee = self.coffee.saturating_sub(used.coffee);
        self.milk = self.milk.saturating_sub(used.milk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_resolution_is_loose() {
        assert_eq!(IngredientKind::from_token("w"), Some(IngredientKind::Water));
        assert_eq!(
            IngredientKind::from_token("water123"),
            Some(IngredientKind::Water)
        );
        assert_eq!(
            IngredientKind::from_token("cappuccino"),
            Some(IngredientKind::Coffee)
        );
        assert_eq!(IngredientKind::from_token("latte"), None);
        assert_eq!(IngredientKind::from_token(""), None);
    }

    #[test]
    fn covers_and_consume() {
        let mut stock = Ingredients::new(100, 50, 0);
        let need = Ingredients::new(40, 50, 0);
        assert!(stock.covers(&need));
        stock.consume(&need);
        assert_eq!(stock, Ingredients::new(60, 0, 0));
        assert!(!stock.covers(&Ingredients::new(0, 1, 0)));
    }

    #[test]
    fn scaled_saturates() {
        let per_cup = Ingredients::new(u32::MAX, 1, 0);
        let need = per_cup.scaled(3);
        assert_eq!(need.water, u32::MAX);
        assert_eq!(need.coffee, 3);
    }
}
