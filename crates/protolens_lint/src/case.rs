//! Identifier case conversion for rename fixes.
//!
//! Words are split at `_`, at lower-to-upper transitions (`fooBar`), and at
//! the end of an acronym (`HTTPServer` -> `HTTP`, `Server`). Digits stay
//! with the word before them.

/// Split an identifier into words.
fn words(ident: &str) -> Vec<&str> {
    let mut words = Vec::new();
    for chunk in ident.split(|c: char| !c.is_alphanumeric()) {
        let chars: Vec<(usize, char)> = chunk.char_indices().collect();
        let mut start = 0;
        for i in 1..chars.len() {
            let (at, current) = chars[i];
            let previous = chars[i - 1].1;
            let next_is_lower = chars.get(i + 1).is_some_and(|(_, c)| c.is_lowercase());
            let boundary = current.is_uppercase()
                && (previous.is_lowercase()
                    || previous.is_ascii_digit()
                    || (previous.is_uppercase() && next_is_lower));
            if boundary {
                words.push(&chunk[start..at]);
                start = at;
            }
        }
        if start < chunk.len() {
            words.push(&chunk[start..]);
        }
    }
    words
}

/// `fooBar` -> `FOO_BAR`.
pub fn to_upper_snake_case(ident: &str) -> String {
    words(ident)
        .iter()
        .map(|word| word.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// `FooBar` -> `foo_bar`.
pub fn to_lower_snake_case(ident: &str) -> String {
    words(ident)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// `foo_bar` -> `FooBar`.
pub fn to_upper_camel_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len());
    for word in words(ident) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out
}
