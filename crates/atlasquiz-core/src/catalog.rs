// crates/atlasquiz-core/src/catalog.rs

//! # Country Catalog
//!
//! The authoritative, immutable list of `(region, identity, geometry)` rows.
//! Built once by [`build_catalog`] and shared read-only afterwards
//! (typically behind an `Arc`).

use crate::common::CatalogStats;
use crate::error::AtlasError;
use crate::geometry::{extract, FeatureSet, Geometry};
use crate::raw::{CountryRecord, RegionListRaw};
use crate::resolver::{CountryIdentity, NameResolver};
use crate::session::RegionChoice;
use crate::tables;
use crate::text::{equals_folded, fold_key};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Europe,
    Asia,
    Africa,
    Americas,
    Oceania,
}

impl Region {
    /// Catalog order.
    pub const ALL: [Region; 5] = [
        Region::Europe,
        Region::Asia,
        Region::Africa,
        Region::Americas,
        Region::Oceania,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::Africa => "Africa",
            Region::Americas => "Americas",
            Region::Oceania => "Oceania",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| equals_folded(r.name(), s))
            .ok_or_else(|| AtlasError::UnknownRegion(s.to_owned()))
    }
}

/// One country row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub region: Region,
    pub identity: CountryIdentity,
    pub geometry: Geometry,
}

impl CatalogEntry {
    pub fn display_name(&self) -> &str {
        &self.identity.display_name
    }

    pub fn canonical_name(&self) -> &str {
        &self.identity.canonical_name
    }

    pub fn feature_code(&self) -> Option<&str> {
        self.identity.feature_code.as_deref()
    }

    pub fn has_shape(&self) -> bool {
        !self.geometry.is_degenerate()
    }
}

/// The five region lists as delivered by the data files.
///
/// Americas is the union of the two American lists. The Asia/Oceania list is
/// split: rows naming an explicit `region` of Asia or Oceania go there; all
/// others go to Oceania when listed in [`tables::OCEANIA_ALLOW_LIST`] and to
/// Asia otherwise.
#[derive(Debug, Clone, Default)]
pub struct RegionInputs {
    pub europe: RegionListRaw,
    pub asia_oceania: RegionListRaw,
    pub africa: RegionListRaw,
    pub north_america: RegionListRaw,
    pub south_america: RegionListRaw,
}

impl RegionInputs {
    /// Records of `region`, in input order.
    pub fn records(&self, region: Region) -> Vec<&CountryRecord> {
        match region {
            Region::Europe => self.europe.iter().collect(),
            Region::Africa => self.africa.iter().collect(),
            Region::Americas => self
                .north_america
                .iter()
                .chain(self.south_america.iter())
                .collect(),
            Region::Asia | Region::Oceania => self
                .asia_oceania
                .iter()
                .filter(|r| asia_oceania_region(r) == region)
                .collect(),
        }
    }
}

fn asia_oceania_region(record: &CountryRecord) -> Region {
    if let Some(explicit) = record.region.as_deref() {
        match explicit.parse::<Region>() {
            Ok(r @ (Region::Asia | Region::Oceania)) => return r,
            _ => warn!(
                "ignoring region '{explicit}' on Asia/Oceania record '{}'",
                record.country
            ),
        }
    }
    if tables::OCEANIA_ALLOW_LIST
        .iter()
        .any(|n| equals_folded(n, &record.country))
    {
        Region::Oceania
    } else {
        Region::Asia
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    /// display name → first row with that name
    by_name: HashMap<String, usize>,
    /// folded canonical name → first row with that name
    by_canonical: HashMap<String, usize>,
}

/// Resolve every input row, extract its outline, and freeze the result.
///
/// Rows are never deduplicated: a display name present in two regions yields
/// two rows, and name lookups return the first.
pub fn build_catalog(
    inputs: &RegionInputs,
    features: &FeatureSet,
    resolver: &NameResolver,
) -> Catalog {
    let mut entries = Vec::new();
    for region in Region::ALL {
        for record in inputs.records(region) {
            let identity = resolver.resolve(&record.country);
            if identity.feature_code.is_none() {
                warn!(
                    "no feature code for '{}' (display name '{}')",
                    identity.canonical_name, identity.display_name
                );
            }
            let geometry = extract(identity.feature_code.as_deref(), features);
            entries.push(CatalogEntry {
                region,
                identity,
                geometry,
            });
        }
    }
    let catalog = Catalog::from_entries(entries);
    let stats = catalog.stats();
    info!(
        "catalog built: {} countries ({} without code, {} without shape)",
        stats.entries, stats.unmapped, stats.degenerate
    );
    catalog
}

impl Catalog {
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_canonical = HashMap::with_capacity(entries.len());
        for (i, e) in entries.iter().enumerate() {
            if by_name.contains_key(e.display_name()) {
                warn!(
                    "duplicate display name '{}' in {}; lookups return the first row",
                    e.display_name(),
                    e.region
                );
            }
            by_name.entry(e.display_name().to_owned()).or_insert(i);
            by_canonical.entry(fold_key(e.canonical_name())).or_insert(i);
        }
        Self {
            entries,
            by_name,
            by_canonical,
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display names of `region`, in catalog order.
    pub fn by_region(&self, region: Region) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.region == region)
            .map(CatalogEntry::display_name)
            .collect()
    }

    pub fn by_display_name(&self, display_name: &str) -> Option<&CatalogEntry> {
        self.by_name.get(display_name).map(|&i| &self.entries[i])
    }

    /// Lookup by canonical English name (accent/case-insensitive).
    pub fn by_canonical_name(&self, canonical_name: &str) -> Option<&CatalogEntry> {
        self.by_canonical
            .get(&fold_key(canonical_name))
            .map(|&i| &self.entries[i])
    }

    /// Every display name, duplicates included, in catalog order.
    pub fn all_names(&self) -> Vec<&str> {
        self.entries.iter().map(CatalogEntry::display_name).collect()
    }

    /// Display names for a session's region choice.
    pub fn names_for(&self, choice: RegionChoice) -> Vec<&str> {
        match choice {
            RegionChoice::All => self.all_names(),
            RegionChoice::Only(region) => self.by_region(region),
        }
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            entries: self.entries.len(),
            ..CatalogStats::default()
        };
        for e in &self.entries {
            match e.region {
                Region::Europe => stats.europe += 1,
                Region::Asia => stats.asia += 1,
                Region::Africa => stats.africa += 1,
                Region::Americas => stats.americas += 1,
                Region::Oceania => stats.oceania += 1,
            }
            if e.feature_code().is_none() {
                stats.unmapped += 1;
            }
            if !e.has_shape() {
                stats.degenerate += 1;
            }
        }
        stats
    }
}
