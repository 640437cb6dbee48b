pub mod campaign;
pub mod dashboard;
pub mod news;

mod wire;

/// Upper-cases the first character, leaving the rest untouched.
///
/// Used for breakdown keys that arrive as raw wire values (`"active"`).
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
