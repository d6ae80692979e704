//! Basic usage example for atlasquiz-rs
//!
//! This example demonstrates how to:
//! - Build a catalog from region lists and GeoJSON features
//! - Resolve misspelled country names
//! - Ask the selector how a country is drawn
//! - Walk through a seeded quiz session
//!
//! Set `ATLASQUIZ_DATA_DIR` to a full data directory to run it on real data;
//! otherwise a small built-in fixture is used.

use atlasquiz_core::loader::DATA_DIR_ENV;
use atlasquiz_core::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

const FIXTURE_FEATURES: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    { "type": "Feature", "id": "ITA",
      "geometry": { "type": "Polygon",
                    "coordinates": [[[6.6, 36.6], [18.5, 40.1], [12.4, 47.1], [6.6, 45.9]]] } },
    { "type": "Feature", "id": "FRA",
      "geometry": { "type": "MultiPolygon",
                    "coordinates": [[[[-4.8, 48.4], [8.2, 49.0], [7.4, 43.7], [-1.8, 43.4]]],
                                    [[[8.6, 42.9], [9.5, 42.9], [9.2, 41.4]]]] } },
    { "type": "Feature", "id": "CHN",
      "geometry": { "type": "Polygon",
                    "coordinates": [[[73.5, 39.4], [134.8, 48.4], [121.9, 25.0], [97.5, 21.1]]] } }
  ]
}"#;

fn fixture_catalog() -> Result<Catalog> {
    let raw: FeatureCollectionRaw = serde_json::from_str(FIXTURE_FEATURES).map_err(|e| {
        AtlasError::Json {
            input: "fixture".into(),
            source: e,
        }
    })?;
    let named = |names: &[&str]| -> Vec<CountryRecord> {
        names.iter().map(|n| CountryRecord::named(*n)).collect()
    };
    let inputs = RegionInputs {
        europe: named(&["Italien", "Frankreich", "Kossovo", "Russland (Teil)"]),
        asia_oceania: named(&["China", "Australien"]),
        ..RegionInputs::default()
    };
    Ok(build_catalog(
        &inputs,
        &FeatureSet::from_raw(raw),
        &NameResolver::builtin(),
    ))
}

fn main() -> Result<()> {
    println!("=== atlasquiz-rs Basic Usage Example ===\n");

    let catalog = match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) => {
            println!("Loading catalog from {}...", dir.to_string_lossy());
            Catalog::load(dir)?
        }
        None => {
            println!("Building the fixture catalog...");
            fixture_catalog()?
        }
    };
    println!("✓ {} countries\n", catalog.len());

    // Example 1: Name resolution
    println!("--- Example 1: Resolving names ---");
    for name in ["Kossovo", "Russland (Teil)", "Vereinigte Staaten", "Atlantis"] {
        let id = resolve(name);
        println!(
            "{:<20} -> {:<15} {}",
            name,
            id.canonical_name,
            id.feature_code.as_deref().unwrap_or("-")
        );
    }
    println!();

    // Example 2: Render plans
    println!("--- Example 2: How countries are drawn ---");
    for entry in catalog.entries().iter().take(8) {
        let plan = render_plan(&catalog, entry.display_name());
        let view = plan.view();
        println!(
            "{:<20} {:<18} center=({:.2}, {:.2}) zoom={:.1}",
            entry.display_name(),
            plan.kind(),
            view.center.lat,
            view.center.lon,
            view.zoom
        );
    }
    println!();

    // Example 3: A quiz round
    println!("--- Example 3: Quiz round over all regions ---");
    let mut app = QuizApp::new(Arc::new(catalog));
    app.choose_mode(Mode::Quiz);
    app.choose_region_with(RegionChoice::All, &mut StdRng::seed_from_u64(7));
    for _ in 0..app.session().order().len().min(3) {
        print!("{} ", app.current_display_state().headline());
        app.reveal();
        println!("-> {}", app.current_display_state().headline());
        app.advance();
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
