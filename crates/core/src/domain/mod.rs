pub mod order;
pub mod rules;
pub mod vendor;

/// Normalization applied at every case-insensitive comparison site
/// (blacklist names, material categories). Explicit lowercase + trim,
/// never locale-dependent collation.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
