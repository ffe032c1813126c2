//! Display helpers for upstream identifiers such as `lightning-rod`.

/// `"lightning-rod"` -> `"Lightning Rod"`.
pub fn title_case(name: &str) -> String {
    name.split(['-', ' '])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `"special-attack"` -> `"SPECIAL ATTACK"`.
pub fn upper_label(name: &str) -> String {
    name.replace('-', " ").to_uppercase()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
