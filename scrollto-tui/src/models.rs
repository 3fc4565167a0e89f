//! Carousel items.
//!
//! The item sequence is generated once at startup from a seeded RNG and is
//! never mutated afterwards. Labels are crocodilian species names.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::{Builder, Uuid};

/// Number of items when none is configured
pub const DEFAULT_ITEM_COUNT: usize = 10;

const CROCODILIANS: &[&str] = &[
    "American Alligator",
    "Chinese Alligator",
    "Black Caiman",
    "Broad-snouted Caiman",
    "Spectacled Caiman",
    "Yacare Caiman",
    "Cuvier's Dwarf Caiman",
    "Smooth-fronted Caiman",
    "Saltwater Crocodile",
    "Nile Crocodile",
    "Mugger Crocodile",
    "American Crocodile",
    "Orinoco Crocodile",
    "Morelet's Crocodile",
    "Cuban Crocodile",
    "Philippine Crocodile",
    "Siamese Crocodile",
    "New Guinea Crocodile",
    "Freshwater Crocodile",
    "West African Crocodile",
    "Dwarf Crocodile",
    "Slender-snouted Crocodile",
    "Gharial",
    "Tomistoma",
];

/// A single carousel entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Unique id (uuid string)
    pub id: String,
    /// Text shown in the carousel
    pub label: String,
}

impl Item {
    /// Short form of the id for log lines
    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }
}

/// Generate `count` items. The same seed always yields the same sequence.
pub fn generate_items(count: usize, seed: u64) -> Vec<Item> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let id: Uuid = Builder::from_random_bytes(rng.gen()).into_uuid();
            let label = CROCODILIANS
                .choose(&mut rng)
                .copied()
                .unwrap_or("Crocodile");
            Item {
                id: id.to_string(),
                label: label.to_string(),
            }
        })
        .collect()
}
