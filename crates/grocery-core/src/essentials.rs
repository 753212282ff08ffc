//! # Essentials
//!
//! The built-in starter set offered when the list is empty.
//!
//! ```text
//! ┌──────────────────┬────────────────────┐
//! │ Title            │ Initial completion │
//! ├──────────────────┼────────────────────┤
//! │ Bakery & Bread   │ false              │
//! │ Meat & Seafood   │ true               │
//! │ Cereals          │ random             │
//! │ Pasta & Rice     │ random             │
//! │ Cheese & Eggs    │ random             │
//! └──────────────────┴────────────────────┘
//! ```
//!
//! Random flags are drawn independently per item, per call, from the `Rng`
//! the caller passes in. Seeding twice does not reproduce the same flags
//! unless the caller reuses a seeded generator.

use rand::Rng;

use crate::types::NewItem;

/// How an essential's initial completion flag is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EssentialFlag {
    Fixed(bool),
    Random,
}

impl EssentialFlag {
    /// Resolves the flag, drawing a fair coin for [`EssentialFlag::Random`].
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> bool {
        match self {
            EssentialFlag::Fixed(value) => value,
            EssentialFlag::Random => rng.gen_bool(0.5),
        }
    }
}

/// One entry of the essentials catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Essential {
    pub title: &'static str,
    pub flag: EssentialFlag,
}

/// The catalog, in the order items are created and returned.
pub const ESSENTIALS: [Essential; 5] = [
    Essential {
        title: "Bakery & Bread",
        flag: EssentialFlag::Fixed(false),
    },
    Essential {
        title: "Meat & Seafood",
        flag: EssentialFlag::Fixed(true),
    },
    Essential {
        title: "Cereals",
        flag: EssentialFlag::Random,
    },
    Essential {
        title: "Pasta & Rice",
        flag: EssentialFlag::Random,
    },
    Essential {
        title: "Cheese & Eggs",
        flag: EssentialFlag::Random,
    },
];

/// Materializes the catalog into creation requests.
pub fn draw_essentials<R: Rng + ?Sized>(rng: &mut R) -> Vec<NewItem> {
    ESSENTIALS
        .iter()
        .map(|essential| NewItem::with_completed(essential.title, essential.flag.resolve(rng)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_titles_in_catalog_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let titles: Vec<String> = draw_essentials(&mut rng)
            .into_iter()
            .map(|item| item.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Bakery & Bread",
                "Meat & Seafood",
                "Cereals",
                "Pasta & Rice",
                "Cheese & Eggs"
            ]
        );
    }

    #[test]
    fn test_fixed_flags_never_change() {
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let batch = draw_essentials(&mut rng);
            assert!(!batch[0].is_completed, "Bakery & Bread is always pending");
            assert!(batch[1].is_completed, "Meat & Seafood is always completed");
        }
    }

    #[test]
    fn test_random_flags_take_both_values() {
        // Across many draws each random slot must land on both sides.
        let mut seen = [[false; 2]; 3];
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let batch = draw_essentials(&mut rng);
            for (slot, item) in batch[2..].iter().enumerate() {
                seen[slot][item.is_completed as usize] = true;
            }
        }
        assert_eq!(seen, [[true; 2]; 3]);
    }

    #[test]
    fn test_same_seed_same_draw() {
        let a = draw_essentials(&mut StdRng::seed_from_u64(9));
        let b = draw_essentials(&mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
