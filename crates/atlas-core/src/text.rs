// crates/atlas-core/src/text.rs

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Åland` -> `Aland`)
/// 2\) Normalize to lowercase
///
/// The exclusion-set and repair-table lookups run on folded keys so that
/// "Réunion" and "Reunion" compare equal.
///
/// # Examples
///
/// ```rust
/// use atlas_core::fold_key;
///
/// assert_eq!(fold_key("Réunion"), "reunion");
/// assert_eq!(fold_key("Curaçao"), "curacao");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding and normalization.
///
/// # Examples
///
/// ```rust
/// use atlas_core::equals_folded;
///
/// assert!(equals_folded("Åland Islands", "aland islands"));
/// assert!(!equals_folded("Greenland", "Iceland"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_diacritics_and_case() {
        assert_eq!(fold_key("Saint Barthélemy"), "saint barthelemy");
        assert!(equals_folded("CURAÇAO", "curacao"));
    }
}
