// crates/atlasquiz-core/src/lib.rs

//! # atlasquiz-core
//!
//! Country data normalization and map render planning for a geography
//! learning/quiz tool.
//!
//! The crate turns three inconsistent inputs (localized region lists, a
//! GeoJSON feature collection, static naming tables) into an immutable
//! [`Catalog`], and answers two questions for a presentation layer:
//! which country is current in a [`QuizSession`], and how it should be drawn
//! ([`RenderPlan`]).
//!
//! ```no_run
//! use atlasquiz_core::prelude::*;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::load(Catalog::default_data_dir())?);
//! let mut app = QuizApp::new(catalog);
//! app.choose_mode(Mode::Learn);
//! app.choose_region(RegionChoice::Only(Region::Europe));
//! println!("{}", app.current_display_state().headline());
//! # Ok::<(), atlasquiz_core::AtlasError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod common;
pub mod error;
pub mod geometry;
pub mod loader; // Startup I/O + snapshot cache
pub mod prelude;
pub mod render;
pub mod resolver;
pub mod session;
pub mod tables; // Static lookup data, no logic
pub mod text;
// Serde mirrors of the external inputs (region files, GeoJSON)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::app::QuizApp;
pub use crate::catalog::{build_catalog, Catalog, CatalogEntry, Region, RegionInputs};
pub use crate::common::CatalogStats;
pub use crate::error::{AtlasError, Result};
pub use crate::geometry::{extract, FeatureSet, Geometry, LatLon};
pub use crate::loader::DataSources;
pub use crate::render::{render_plan, render_plan_for, Color, MapView, Marker, RenderPlan};
pub use crate::resolver::{CountryIdentity, NameResolver, TableOverrides};
pub use crate::session::{DisplayState, Mode, QuizSession, RegionChoice};
