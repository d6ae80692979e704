// crates/atlasquiz-core/src/raw.rs
use serde::Deserialize;

/// One row of a region list file: `[{"country": "Italien"}, ...]`.
/// NOTE: This type mirrors the external input files; unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryRecord {
    pub country: String,
    /// Explicit region, only honored on Asia/Oceania records.
    #[serde(default)]
    pub region: Option<String>,
}

impl CountryRecord {
    pub fn named(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            region: None,
        }
    }
}

pub type RegionListRaw = Vec<CountryRecord>;

/// GeoJSON `FeatureCollection`, reduced to what the extractor reads.
#[derive(Debug, Default, Deserialize)]
pub struct FeatureCollectionRaw {
    #[serde(default)]
    pub features: Vec<FeatureRaw>,
}

/// A GeoJSON feature. `id` is usually an alpha-3 string but some datasets use
/// numbers, so it stays untyped until the feature set is indexed.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureRaw {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub geometry: Option<GeometryRaw>,
}

/// Geometry with its coordinates left unparsed, so an unsupported `type`
/// degrades one feature instead of failing the whole collection.
#[derive(Debug, Clone, Deserialize)]
pub struct GeometryRaw {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub coordinates: serde_json::Value,
}
