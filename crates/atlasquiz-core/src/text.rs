// crates/atlasquiz-core/src/text.rs

/// Convert a string into a folded key suitable for table lookups.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Österreich` -> `Osterreich`)
/// 2\) Normalize to lowercase
/// 3\) Trim surrounding whitespace
///
/// # Examples
///
/// ```rust
/// use atlasquiz_core::text::fold_key;
///
/// assert_eq!(fold_key("Österreich"), "osterreich");
/// assert_eq!(fold_key("  Dänemark "), "danemark");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s.trim()).to_lowercase()
}

/// Compares two strings for equality after Unicode folding.
///
/// ```rust
/// use atlasquiz_core::text::equals_folded;
///
/// assert!(equals_folded("Türkei (Teil)", "turkei (teil)"));
/// assert!(!equals_folded("Island", "Irland"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
