use crate::ui::text::title_case;

/// The 18 type names PokeAPI recognizes, in selector order.
pub const CATEGORIES: [&str; 18] = [
    "normal", "fighting", "flying", "poison", "ground", "rock", "bug", "ghost", "steel", "fire",
    "water", "grass", "electric", "psychic", "ice", "dragon", "dark", "fairy",
];

/// Display form of a category token (`"fire"` -> `"Fire"`).
pub fn category_label(category: &str) -> String {
    title_case(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_lower_case_and_unique() {
        for (idx, category) in CATEGORIES.iter().enumerate() {
            assert_eq!(*category, category.to_lowercase());
            assert!(!CATEGORIES[idx + 1..].contains(category));
        }
    }

    #[test]
    fn labels_are_capitalized() {
        assert_eq!(category_label("fire"), "Fire");
        assert_eq!(category_label("psychic"), "Psychic");
    }
}
