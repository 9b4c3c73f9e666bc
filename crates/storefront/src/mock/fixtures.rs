//! Generated names and prices for mock records.

use std::collections::HashSet;

use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Random attempts before falling back to a numbered name.
const MAX_ATTEMPTS: usize = 64;

const DEPARTMENTS: &[&str] = &[
    "Automotive",
    "Baby",
    "Beauty",
    "Books",
    "Clothing",
    "Computers",
    "Electronics",
    "Games",
    "Garden",
    "Grocery",
    "Health",
    "Home",
    "Industrial",
    "Jewelery",
    "Kids",
    "Movies",
    "Music",
    "Outdoors",
    "Shoes",
    "Sports",
    "Tools",
    "Toys",
];

const ADJECTIVES: &[&str] = &[
    "Awesome",
    "Elegant",
    "Ergonomic",
    "Fantastic",
    "Generic",
    "Gorgeous",
    "Handcrafted",
    "Incredible",
    "Intelligent",
    "Licensed",
    "Practical",
    "Refined",
    "Rustic",
    "Sleek",
    "Small",
    "Tasty",
];

const MATERIALS: &[&str] = &[
    "Bamboo", "Bronze", "Concrete", "Cotton", "Fresh", "Frozen", "Granite", "Metal", "Plastic",
    "Rubber", "Soft", "Steel", "Wooden",
];

const GOODS: &[&str] = &[
    "Bacon", "Ball", "Bike", "Car", "Chair", "Cheese", "Chips", "Computer", "Fish", "Gloves",
    "Hat", "Keyboard", "Mouse", "Pants", "Pizza", "Salad", "Sausages", "Shirt", "Shoes", "Soap",
    "Table", "Towels",
];

fn pick(rng: &mut ThreadRng, words: &[&'static str]) -> &'static str {
    words.choose(rng).copied().unwrap_or("Item")
}

/// A price in `1..=100`, in whole units.
pub fn random_price() -> f64 {
    f64::from(rand::rng().random_range(1u32..=100))
}

/// Hands out names that were never handed out before by this generator.
#[derive(Debug, Default)]
pub struct NameGenerator {
    used: HashSet<String>,
}

impl NameGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A department name such as "Garden".
    pub fn category_name(&mut self) -> String {
        self.unique(|rng| pick(rng, DEPARTMENTS).to_string())
    }

    /// A product name such as "Rustic Wooden Chair".
    pub fn product_name(&mut self) -> String {
        self.unique(|rng| {
            format!(
                "{} {} {}",
                pick(rng, ADJECTIVES),
                pick(rng, MATERIALS),
                pick(rng, GOODS)
            )
        })
    }

    fn unique(&mut self, generate: impl Fn(&mut ThreadRng) -> String) -> String {
        let mut rng = rand::rng();
        for _ in 0..MAX_ATTEMPTS {
            let name = generate(&mut rng);
            if self.used.insert(name.clone()) {
                return name;
            }
        }

        let base = generate(&mut rng);
        let mut suffix = 2;
        loop {
            let name = format!("{base} {suffix}");
            if self.used.insert(name.clone()) {
                return name;
            }
            suffix += 1;
        }
    }
}
