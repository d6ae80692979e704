// crates/atlasquiz-core/src/resolver.rs

//! # Name Resolver
//!
//! Reconciles three naming domains: localized display names (possibly
//! misspelled), canonical English names, and feature codes.
//!
//! Resolution is two table lookups followed by a code lookup:
//! 1. synonym table: corrects a known misspelling to its display form
//! 2. display table: display form → canonical English name
//! 3. code table: canonical name → feature code
//!
//! Stages 1 and 2 fall through unchanged on a miss. A miss in stage 3 leaves
//! the feature code absent. Keys are compared in [`fold_key`] form, so casing
//! and diacritic variants hit the same row.

use crate::tables;
use crate::text::fold_key;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

static BUILTIN: Lazy<NameResolver> = Lazy::new(NameResolver::builtin);

/// Who a display name refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryIdentity {
    /// The name as it appears in the region list; the catalog key.
    pub display_name: String,
    /// English name used by classification rules.
    pub canonical_name: String,
    /// Geographic feature code (alpha-3), when one is known.
    pub feature_code: Option<String>,
}

/// Extra rows merged over the built-in tables, read from `aliases.json`.
///
/// ```json
/// { "synonyms": { "Kossova": "Kosovo" },
///   "display_to_canonical": { "Färöer": "Faroe Islands" },
///   "canonical_to_code": { "Faroe Islands": "FRO" } }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableOverrides {
    #[serde(default)]
    pub synonyms: HashMap<String, String>,
    #[serde(default)]
    pub display_to_canonical: HashMap<String, String>,
    #[serde(default)]
    pub canonical_to_code: HashMap<String, String>,
}

impl TableOverrides {
    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty()
            && self.display_to_canonical.is_empty()
            && self.canonical_to_code.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct NameResolver {
    synonyms: HashMap<String, String>,
    display_to_canonical: HashMap<String, String>,
    canonical_to_code: HashMap<String, String>,
}

fn index<'a>(rows: impl IntoIterator<Item = (&'a str, &'a str)>) -> HashMap<String, String> {
    rows.into_iter()
        .map(|(k, v)| (fold_key(k), v.to_owned()))
        .collect()
}

impl NameResolver {
    /// Resolver over the tables in [`crate::tables`].
    pub fn builtin() -> Self {
        Self::from_tables(
            tables::SYNONYMS,
            tables::DISPLAY_TO_CANONICAL,
            tables::CANONICAL_TO_CODE,
        )
    }

    pub fn from_tables(
        synonyms: &[(&str, &str)],
        display_to_canonical: &[(&str, &str)],
        canonical_to_code: &[(&str, &str)],
    ) -> Self {
        Self {
            synonyms: index(synonyms.iter().copied()),
            display_to_canonical: index(display_to_canonical.iter().copied()),
            canonical_to_code: index(canonical_to_code.iter().copied()),
        }
    }

    /// Merge `overrides` over the current tables; override rows win.
    pub fn with_overrides(mut self, overrides: &TableOverrides) -> Self {
        let pairs = |m: &HashMap<String, String>| {
            m.iter()
                .map(|(k, v)| (fold_key(k), v.clone()))
                .collect::<Vec<_>>()
        };
        self.synonyms.extend(pairs(&overrides.synonyms));
        self.display_to_canonical
            .extend(pairs(&overrides.display_to_canonical));
        self.canonical_to_code.extend(pairs(&overrides.canonical_to_code));
        self
    }

    /// Stage 1: the corrected display form, or `name` unchanged.
    pub fn correct<'a>(&'a self, name: &'a str) -> &'a str {
        self.synonyms
            .get(&fold_key(name))
            .map(String::as_str)
            .unwrap_or(name)
    }

    /// Stages 1 and 2: the canonical English name, or the (corrected) input.
    pub fn canonical_name(&self, name: &str) -> String {
        let corrected = self.correct(name);
        self.display_to_canonical
            .get(&fold_key(corrected))
            .cloned()
            .unwrap_or_else(|| corrected.to_owned())
    }

    pub fn feature_code(&self, canonical_name: &str) -> Option<&str> {
        self.canonical_to_code
            .get(&fold_key(canonical_name))
            .map(String::as_str)
    }

    pub fn resolve(&self, display_name: &str) -> CountryIdentity {
        let canonical_name = self.canonical_name(display_name);
        let feature_code = self.feature_code(&canonical_name).map(str::to_owned);
        CountryIdentity {
            display_name: display_name.to_owned(),
            canonical_name,
            feature_code,
        }
    }
}

/// Resolve against the built-in tables.
pub fn resolve(display_name: &str) -> CountryIdentity {
    BUILTIN.resolve(display_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn german_names_resolve_to_english_and_code() {
        let id = resolve("Italien");
        assert_eq!(id.display_name, "Italien");
        assert_eq!(id.canonical_name, "Italy");
        assert_eq!(id.feature_code.as_deref(), Some("ITA"));
    }

    #[test]
    fn synonym_then_display_table() {
        let id = resolve("Kossovo");
        assert_eq!(id.display_name, "Kossovo");
        assert_eq!(id.canonical_name, "Kosovo");
        assert_eq!(id.feature_code.as_deref(), Some("XKX"));

        assert_eq!(resolve("Weißrussland").canonical_name, "Belarus");
        assert_eq!(resolve("Oesterreich").canonical_name, "Austria");
    }

    #[test]
    fn casing_variants_hit_the_same_row() {
        assert_eq!(resolve("ITALIEN").canonical_name, "Italy");
        assert_eq!(resolve("kossovo").canonical_name, "Kosovo");
        assert_eq!(resolve("Daenemark").canonical_name, "Denmark");
    }

    #[test]
    fn unknown_names_pass_through() {
        for name in ["Atlantis", "Mittelerde", "Neverland Süd"] {
            let id = resolve(name);
            assert_eq!(id.canonical_name, name);
            assert_eq!(id.feature_code, None);
        }
    }

    #[test]
    fn english_names_skip_stage_two_but_still_get_a_code() {
        let id = resolve("Italy");
        assert_eq!(id.canonical_name, "Italy");
        assert_eq!(id.feature_code.as_deref(), Some("ITA"));
    }

    #[test]
    fn overrides_extend_and_replace_rows() {
        let mut overrides = TableOverrides::default();
        overrides
            .display_to_canonical
            .insert("Färöer".into(), "Faroe Islands".into());
        overrides
            .canonical_to_code
            .insert("Faroe Islands".into(), "FRO".into());
        overrides
            .canonical_to_code
            .insert("Kosovo".into(), "CS-KM".into());

        let resolver = NameResolver::builtin().with_overrides(&overrides);
        assert_eq!(
            resolver.resolve("Färöer").feature_code.as_deref(),
            Some("FRO")
        );
        assert_eq!(
            resolver.resolve("Kosovo").feature_code.as_deref(),
            Some("CS-KM")
        );
        assert_eq!(
            resolver.resolve("Italien").feature_code.as_deref(),
            Some("ITA")
        );
    }

    #[test]
    fn empty_tables_are_pure_identity() {
        let resolver = NameResolver::default();
        let id = resolver.resolve("Italien");
        assert_eq!(id.canonical_name, "Italien");
        assert_eq!(id.feature_code, None);
    }
}
