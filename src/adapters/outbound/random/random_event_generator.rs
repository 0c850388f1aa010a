use crate::freshness::domain::{EventCategory, EventDraft};
use crate::ports::outbound::EventGenerator;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const MIN_AMOUNT: f64 = 10.0;
const MAX_AMOUNT: f64 = 600.0;

const CUSTOMERS: [&str; 6] = ["Aarav", "Priya", "Kabir", "Meera", "Rohan", "Ananya"];
const PRODUCTS: [&str; 5] = [
    "Wireless Earbuds",
    "Cotton Kurta",
    "Steel Water Bottle",
    "Yoga Mat",
    "Desk Lamp",
];

/// RandomEventGenerator adapter for the simulated live feed
///
/// Sales and orders carry an amount drawn uniformly from 10 to 600, so
/// roughly half of all sales end up above the high-priority threshold.
pub struct RandomEventGenerator {
    rng: StdRng,
}

impl RandomEventGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, options: &[&'static str]) -> &'static str {
        options.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn amount(&mut self) -> f64 {
        let cents = self.rng.gen_range(MIN_AMOUNT * 100.0..=MAX_AMOUNT * 100.0);
        cents.round() / 100.0
    }
}

impl Default for RandomEventGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl EventGenerator for RandomEventGenerator {
    fn next_event(&mut self) -> EventDraft {
        let category = EventCategory::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(EventCategory::Order);
        let customer = self.pick(&CUSTOMERS);
        let product = self.pick(&PRODUCTS);

        match category {
            EventCategory::Sale => {
                let amount = self.amount();
                EventDraft::new(
                    category,
                    Some(amount),
                    format!("{} bought {} for ₹{:.2}", customer, product, amount),
                )
            }
            EventCategory::Order => {
                let amount = self.amount();
                EventDraft::new(
                    category,
                    Some(amount),
                    format!("New order from {} worth ₹{:.2}", customer, amount),
                )
            }
            EventCategory::Signup => {
                EventDraft::new(category, None, format!("{} created an account", customer))
            }
            EventCategory::InventoryAlert => {
                let left = self.rng.gen_range(1..=5);
                EventDraft::new(
                    category,
                    None,
                    format!("Only {} left in stock: {}", left, product),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amounts_within_bounds() {
        let mut generator = RandomEventGenerator::with_seed(7);
        for _ in 0..500 {
            let draft = generator.next_event();
            match draft.category {
                EventCategory::Sale | EventCategory::Order => {
                    let amount = draft.amount.unwrap();
                    assert!((MIN_AMOUNT..=MAX_AMOUNT).contains(&amount));
                }
                EventCategory::Signup | EventCategory::InventoryAlert => {
                    assert!(draft.amount.is_none());
                }
            }
            assert!(!draft.message.is_empty());
        }
    }

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let mut a = RandomEventGenerator::with_seed(42);
        let mut b = RandomEventGenerator::with_seed(42);
        for _ in 0..20 {
            assert_eq!(a.next_event(), b.next_event());
        }
    }

    #[test]
    fn test_all_categories_occur() {
        let mut generator = RandomEventGenerator::with_seed(1);
        let seen: std::collections::HashSet<EventCategory> =
            (0..200).map(|_| generator.next_event().category).collect();
        assert_eq!(seen.len(), EventCategory::ALL.len());
    }
}
