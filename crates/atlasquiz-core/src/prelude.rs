//! atlasquiz prelude: bring common types into scope for consumers and demos.

#![allow(unused_imports)]

pub use crate::app::QuizApp;
pub use crate::catalog::{build_catalog, Catalog, CatalogEntry, Region, RegionInputs};
pub use crate::common::CatalogStats;
pub use crate::error::{AtlasError, Result};
pub use crate::geometry::{extract, FeatureSet, Geometry, LatLon};
pub use crate::loader::DataSources;
pub use crate::raw::{CountryRecord, FeatureCollectionRaw};
pub use crate::render::{render_plan, render_plan_for, Color, MapView, Marker, RenderPlan};
pub use crate::resolver::{resolve, CountryIdentity, NameResolver, TableOverrides};
pub use crate::session::{DisplayState, Mode, QuizSession, RegionChoice};
