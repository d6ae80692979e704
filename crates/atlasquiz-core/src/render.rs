// crates/atlasquiz-core/src/render.rs

//! # Render Strategy Selector
//!
//! Decides how the current country is drawn and where the map looks.
//!
//! Priority, first match wins:
//! 1. canonical name is a European microstate → [`RenderPlan::MicrostateCluster`]
//! 2. canonical name has a fixed marker (Russia) → [`RenderPlan::PointMarker`]
//! 3. region is Asia → [`RenderPlan::PointMarker`] at the outline's centroid
//! 4. anything with a shape → [`RenderPlan::Polygon`]
//! 5. otherwise → [`RenderPlan::Empty`]
//!
//! Shapeless entries render [`RenderPlan::Empty`], Asian ones included: a
//! centroid of the degenerate `(0, 0)` point would be meaningless. Only
//! microstates and fixed markers have positions of their own and still render.

use crate::catalog::{Catalog, CatalogEntry, Region};
use crate::geometry::LatLon;
use crate::session::Mode;
use crate::tables;
use crate::text::equals_folded;
use serde::{Deserialize, Serialize};

/// Fixed view that keeps every microstate marker on screen.
pub const EUROPE_CLUSTER_VIEW: MapView = MapView::new(LatLon::new(43.0, 11.0), 4.0);
/// Zoom used for every point marker.
pub const POINT_MARKER_ZOOM: f64 = 3.0;
pub const MIN_ZOOM: f64 = 2.0;
pub const MAX_ZOOM: f64 = 12.0;
/// Smallest span (degrees) used for zoom; keeps tiny shapes finite.
pub const MIN_SPAN: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: LatLon,
    pub zoom: f64,
}

impl MapView {
    /// Whole-world view used when there is nothing to show.
    pub const WORLD: MapView = MapView::new(LatLon::ORIGIN, 1.0);

    pub const fn new(center: LatLon, zoom: f64) -> Self {
        Self { center, zoom }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub label: String,
    pub position: LatLon,
    pub color: Color,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RenderPlan {
    Empty {
        view: MapView,
    },
    /// Filled outline; `outline` is closed (first point == last point).
    Polygon {
        view: MapView,
        outline: Vec<LatLon>,
        color: Color,
    },
    PointMarker {
        view: MapView,
        marker: Marker,
    },
    /// Every microstate at once, the selected one highlighted.
    MicrostateCluster {
        view: MapView,
        markers: Vec<Marker>,
    },
}

impl RenderPlan {
    pub fn empty() -> Self {
        RenderPlan::Empty {
            view: MapView::WORLD,
        }
    }

    pub fn view(&self) -> MapView {
        match self {
            RenderPlan::Empty { view }
            | RenderPlan::Polygon { view, .. }
            | RenderPlan::PointMarker { view, .. }
            | RenderPlan::MicrostateCluster { view, .. } => *view,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RenderPlan::Empty { .. } => "empty",
            RenderPlan::Polygon { .. } => "polygon",
            RenderPlan::PointMarker { .. } => "point-marker",
            RenderPlan::MicrostateCluster { .. } => "microstate-cluster",
        }
    }
}

/// Plan for `display_name` with the Learn-mode palette.
pub fn render_plan(catalog: &Catalog, display_name: &str) -> RenderPlan {
    render_plan_for(catalog, display_name, Mode::Learn)
}

/// Plan for `display_name`; unknown names get [`RenderPlan::empty`].
pub fn render_plan_for(catalog: &Catalog, display_name: &str, mode: Mode) -> RenderPlan {
    match catalog.by_display_name(display_name) {
        Some(entry) => plan_entry(catalog, entry, mode),
        None => RenderPlan::empty(),
    }
}

pub fn plan_entry(catalog: &Catalog, entry: &CatalogEntry, mode: Mode) -> RenderPlan {
    let canonical = entry.canonical_name();

    if let Some(selected) = tables::MICROSTATES
        .iter()
        .position(|(name, _)| equals_folded(name, canonical))
    {
        return microstate_cluster(catalog, selected);
    }

    if let Some((_, position)) = tables::FIXED_MARKERS
        .iter()
        .find(|(name, _)| equals_folded(name, canonical))
    {
        return point_marker(entry, *position);
    }

    if entry.region == Region::Asia {
        return match entry.geometry.centroid() {
            Some(c) if entry.has_shape() => point_marker(entry, c),
            _ => RenderPlan::empty(),
        };
    }

    polygon(entry, mode)
}

fn microstate_cluster(catalog: &Catalog, selected: usize) -> RenderPlan {
    let markers = tables::MICROSTATES
        .iter()
        .enumerate()
        .map(|(i, (name, fallback))| {
            let entry = catalog.by_canonical_name(name);
            let position = entry
                .filter(|e| e.has_shape())
                .and_then(|e| e.geometry.centroid())
                .unwrap_or(*fallback);
            let is_selected = i == selected;
            Marker {
                label: entry
                    .map(|e| e.display_name().to_owned())
                    .unwrap_or_else(|| (*name).to_owned()),
                position,
                color: if is_selected { Color::Red } else { Color::Blue },
                selected: is_selected,
            }
        })
        .collect();
    RenderPlan::MicrostateCluster {
        view: EUROPE_CLUSTER_VIEW,
        markers,
    }
}

fn point_marker(entry: &CatalogEntry, position: LatLon) -> RenderPlan {
    RenderPlan::PointMarker {
        view: MapView::new(position, POINT_MARKER_ZOOM),
        marker: Marker {
            label: entry.display_name().to_owned(),
            position,
            color: Color::Red,
            selected: true,
        },
    }
}

fn polygon(entry: &CatalogEntry, mode: Mode) -> RenderPlan {
    let Some(bounds) = entry.geometry.bounds().filter(|_| entry.has_shape()) else {
        return RenderPlan::empty();
    };
    let span = bounds.lat_range().max(bounds.lon_range()).max(MIN_SPAN);
    let highlighted = tables::HIGHLIGHTED_DISPLAY_NAMES
        .iter()
        .any(|n| *n == entry.display_name());
    let color = match mode {
        Mode::Learn if !highlighted => Color::Blue,
        _ => Color::Red,
    };
    RenderPlan::Polygon {
        view: MapView::new(bounds.center(), (4.0 / span).clamp(MIN_ZOOM, MAX_ZOOM)),
        outline: entry.geometry.closed_ring(),
        color,
    }
}
