// crates/atlasquiz-core/src/geometry.rs

//! # Geometry Extractor
//!
//! Turns GeoJSON features into the internal [`Geometry`]: one flattened ring of
//! `(lat, lon)` points. Extraction never fails; every problem yields
//! [`Geometry::degenerate`], a single `(0, 0)` point that callers treat as
//! "no renderable shape".

use crate::raw::{FeatureCollectionRaw, GeometryRaw};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A point in map order (latitude first).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub const ORIGIN: LatLon = LatLon::new(0.0, 0.0);

    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Latitude/longitude bounding box of a ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Bounds {
    pub fn center(&self) -> LatLon {
        LatLon::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    pub fn lat_range(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_range(&self) -> f64 {
        self.max_lon - self.min_lon
    }
}

/// A country outline.
///
/// Separate landmasses and holes are not distinguished: a multipolygon is
/// flattened into a single ring in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    ring: Vec<LatLon>,
}

impl Geometry {
    pub fn from_ring(ring: Vec<LatLon>) -> Self {
        if ring.is_empty() {
            return Self::degenerate();
        }
        Self { ring }
    }

    /// Placeholder for "no shape available".
    pub fn degenerate() -> Self {
        Self {
            ring: vec![LatLon::ORIGIN],
        }
    }

    /// A ring of one point (or none) cannot be drawn.
    pub fn is_degenerate(&self) -> bool {
        self.ring.len() <= 1
    }

    pub fn ring(&self) -> &[LatLon] {
        &self.ring
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Arithmetic mean of all latitudes and longitudes.
    pub fn centroid(&self) -> Option<LatLon> {
        if self.ring.is_empty() {
            return None;
        }
        let n = self.ring.len() as f64;
        let (lat, lon) = self
            .ring
            .iter()
            .fold((0.0, 0.0), |(lat, lon), p| (lat + p.lat, lon + p.lon));
        Some(LatLon::new(lat / n, lon / n))
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.ring.first()?;
        let init = Bounds {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lon: first.lon,
            max_lon: first.lon,
        };
        Some(self.ring.iter().fold(init, |b, p| Bounds {
            min_lat: b.min_lat.min(p.lat),
            max_lat: b.max_lat.max(p.lat),
            min_lon: b.min_lon.min(p.lon),
            max_lon: b.max_lon.max(p.lon),
        }))
    }

    /// The ring with its first point appended when it is not already closed.
    pub fn closed_ring(&self) -> Vec<LatLon> {
        let mut out = self.ring.clone();
        if let (Some(first), Some(last)) = (self.ring.first(), self.ring.last()) {
            if first != last {
                out.push(*first);
            }
        }
        out
    }
}

/// GeoJSON geometry kinds the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GeometryKind {
    Polygon,
    MultiPolygon,
}

impl GeometryKind {
    fn parse(kind: &str) -> Option<Self> {
        if kind.eq_ignore_ascii_case("polygon") {
            Some(Self::Polygon)
        } else if kind.eq_ignore_ascii_case("multipolygon") {
            Some(Self::MultiPolygon)
        } else {
            None
        }
    }
}

/// GeoJSON position: `[lon, lat]` with an optional altitude.
type Position = Vec<f64>;

/// Features indexed by code. When a code repeats, the first feature wins.
#[derive(Debug, Default, Clone)]
pub struct FeatureSet {
    by_code: HashMap<String, Option<GeometryRaw>>,
}

impl FeatureSet {
    pub fn from_raw(raw: FeatureCollectionRaw) -> Self {
        let mut by_code = HashMap::with_capacity(raw.features.len());
        for feature in raw.features {
            let code = match feature.id {
                Some(serde_json::Value::String(s)) => s,
                Some(serde_json::Value::Number(n)) => n.to_string(),
                _ => continue,
            };
            by_code.entry(code).or_insert(feature.geometry);
        }
        Self { by_code }
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    fn get(&self, code: &str) -> Option<&Option<GeometryRaw>> {
        self.by_code.get(code)
    }
}

/// Extract the outline for `code` from `features`.
///
/// - `Polygon`: the first (outer) ring only.
/// - `MultiPolygon`: every ring of every sub-polygon, concatenated.
///
/// Coordinates are swapped from GeoJSON `(lon, lat)` to `(lat, lon)`.
/// Absent codes, unknown codes, missing geometry, unsupported kinds, and
/// malformed or empty coordinates all return [`Geometry::degenerate`].
pub fn extract(code: Option<&str>, features: &FeatureSet) -> Geometry {
    let Some(code) = code else {
        return Geometry::degenerate();
    };
    let Some(feature) = features.get(code) else {
        warn!("feature code {code} not present in the feature collection");
        return Geometry::degenerate();
    };
    let Some(geometry) = feature else {
        warn!("feature {code} has no geometry");
        return Geometry::degenerate();
    };

    let ring = match GeometryKind::parse(&geometry.kind) {
        Some(GeometryKind::Polygon) => polygon_ring(&geometry.coordinates),
        Some(GeometryKind::MultiPolygon) => multipolygon_ring(&geometry.coordinates),
        None => {
            warn!("feature {code} has unsupported geometry type {}", geometry.kind);
            return Geometry::degenerate();
        }
    };

    match ring {
        Some(ring) if !ring.is_empty() => {
            debug!("extracted {} points for {code}", ring.len());
            Geometry::from_ring(ring)
        }
        Some(_) => {
            warn!("feature {code} has empty coordinates");
            Geometry::degenerate()
        }
        None => {
            warn!("feature {code} has malformed coordinates");
            Geometry::degenerate()
        }
    }
}

fn polygon_ring(coordinates: &serde_json::Value) -> Option<Vec<LatLon>> {
    let rings = Vec::<Vec<Position>>::deserialize(coordinates).ok()?;
    match rings.first() {
        Some(outer) => swap_all(outer),
        None => Some(Vec::new()),
    }
}

fn multipolygon_ring(coordinates: &serde_json::Value) -> Option<Vec<LatLon>> {
    let polygons = Vec::<Vec<Vec<Position>>>::deserialize(coordinates).ok()?;
    let mut out = Vec::new();
    for ring in polygons.iter().flatten() {
        out.extend(swap_all(ring)?);
    }
    Some(out)
}

fn swap_all(ring: &[Position]) -> Option<Vec<LatLon>> {
    ring.iter()
        .map(|pos| match pos.as_slice() {
            [lon, lat, ..] => Some(LatLon::new(*lat, *lon)),
            _ => None,
        })
        .collect()
}
