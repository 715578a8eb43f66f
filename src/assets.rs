//! Display-image lookup by item name

use crate::UNKNOWN_IMAGE;

/// Item names with a bundled image, lowercase
pub const KNOWN_IMAGES: &[&str] = &[
    "apple",
    "banana",
    "lemon",
    "strawberry",
    "orange",
    "grapes",
    "watermelon",
    "kiwi",
    "pineapple",
    "pear",
    "peach",
    "plum",
    "cherry",
    "mango",
    "avocado",
];

/// Image identifier for an item name, case-insensitive; unknown names get `UNKNOWN_IMAGE`
pub fn image_for(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    KNOWN_IMAGES
        .iter()
        .find(|known| **known == lower)
        .copied()
        .unwrap_or(UNKNOWN_IMAGE)
}
