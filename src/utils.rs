// Utility functions

/// Lowercases and trims a raw tag into a comparable token.
pub fn canon_token(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Turns a token into a display label: `stove-top` -> `Stove Top`.
pub fn pretty_label(token: &str) -> String {
    token
        .replace('-', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
