use brewer_core::{Drink, IngredientKind, Ingredients, Machine, MachineCfg};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Refill(IngredientKind, u32),
    Brew(Drink, u32),
    Clean,
}

fn kind_strategy() -> impl Strategy<Value = IngredientKind> {
    prop_oneof![
        Just(IngredientKind::Water),
        Just(IngredientKind::Coffee),
        Just(IngredientKind::Milk),
    ]
}

fn drink_strategy() -> impl Strategy<Value = Drink> {
    prop_oneof![
        Just(Drink::Espresso),
        Just(Drink::Cappuccino),
        Just(Drink::Latte),
        (1u32..300, 1u32..300, 1u32..300)
            .prop_map(|(w, c, m)| Drink::Custom(Ingredients::new(w, c, m))),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (kind_strategy(), 1u32..5000).prop_map(|(k, n)| Op::Refill(k, n)),
        // u32::MAX models the "fill to capacity" request
        kind_strategy().prop_map(|k| Op::Refill(k, u32::MAX)),
        (drink_strategy(), 1u32..12).prop_map(|(d, q)| Op::Brew(d, q)),
        Just(Op::Clean),
    ]
}

proptest! {
    /// Refills never overflow a tank and never remove anything; the
    /// capacity-limited warning fires exactly when the request exceeds
    /// free space.
    #[test]
    fn refill_stays_within_capacity(kind in kind_strategy(), requested in 1u32..) {
        let mut m = Machine::new(MachineCfg::default()).unwrap();
        m.turn_on().unwrap();
        let free = m.capacity(kind) - m.ingredients().get(kind);
        let out = m.refill(kind, requested);
        prop_assert!(out.new <= m.capacity(kind));
        prop_assert!(out.new >= out.old);
        prop_assert_eq!(out.clamped, requested > free);
        if requested <= free {
            prop_assert_eq!(out.added, requested);
        } else {
            prop_assert_eq!(out.added, free);
        }
    }

    /// A brew either consumes exactly requirements × quantity and bumps
    /// the cup counter by quantity, or leaves the machine untouched.
    #[test]
    fn brew_is_all_or_nothing(drink in drink_strategy(), quantity in 1u32..12) {
        let mut m = Machine::new(MachineCfg::default()).unwrap();
        m.turn_on().unwrap();
        let stock = *m.ingredients();
        let cups = m.cups_made();
        match m.brew(&drink, quantity) {
            Ok(out) => {
                prop_assert_eq!(out.used, drink.requirements().scaled(quantity));
                prop_assert_eq!(m.ingredients().water, stock.water - out.used.water);
                prop_assert_eq!(m.ingredients().coffee, stock.coffee - out.used.coffee);
                prop_assert_eq!(m.ingredients().milk, stock.milk - out.used.milk);
                prop_assert_eq!(m.cups_made(), cups + quantity);
            }
            Err(_) => {
                prop_assert_eq!(*m.ingredients(), stock);
                prop_assert_eq!(m.cups_made(), cups);
            }
        }
    }

    /// State invariants hold across arbitrary operation sequences: stock
    /// within [0, capacity] and the cup counter within [0, cycle cap].
    #[test]
    fn invariants_hold_over_random_ops(ops in proptest::collection::vec(op_strategy(), 1..60)) {
        let mut m = Machine::new(MachineCfg::default()).unwrap();
        m.turn_on().unwrap();
        for op in ops {
            match op {
                Op::Refill(kind, requested) => {
                    let before = m.ingredients().get(kind);
                    let out = m.refill(kind, requested);
                    prop_assert!(out.new >= before);
                }
                Op::Brew(drink, quantity) => {
                    let before = *m.ingredients();
                    if m.brew(&drink, quantity).is_err() {
                        prop_assert_eq!(*m.ingredients(), before);
                    }
                }
                Op::Clean => {
                    m.clean();
                    prop_assert_eq!(m.cups_made(), 0);
                }
            }
            for kind in IngredientKind::ALL {
                prop_assert!(m.ingredients().get(kind) <= m.capacity(kind));
            }
            prop_assert!(m.cups_made() <= m.cups_before_clean());
        }
    }
}
