//! Name normalization for emitted identifiers.

use serde::Serialize;

/// Lowercase the first character, leave the rest untouched.
///
/// Idempotent: normalizing a normalized name returns it unchanged.
pub fn lowercase_first_letter(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A node whose document name differs from its normalized name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rename {
    pub id: String,
    pub name: String,
}

impl Rename {
    /// `Some` when normalizing `current` changes it
    pub fn needed(id: &str, current: &str) -> Option<Self> {
        let name = lowercase_first_letter(current);
        (name != current).then(|| Rename {
            id: id.to_string(),
            name,
        })
    }
}
