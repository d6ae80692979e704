//! End-to-end behavior of catalog, selector and session over small fixtures.

use atlasquiz_core::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use std::sync::Arc;

fn records(names: &[&str]) -> Vec<CountryRecord> {
    names.iter().map(|n| CountryRecord::named(*n)).collect()
}

fn features(value: serde_json::Value) -> FeatureSet {
    let raw: FeatureCollectionRaw = serde_json::from_value(value).unwrap();
    FeatureSet::from_raw(raw)
}

fn italy_features() -> FeatureSet {
    features(json!({ "type": "FeatureCollection", "features": [
        { "type": "Feature", "id": "ITA", "properties": { "name": "Italy" },
          "geometry": { "type": "Polygon",
                        "coordinates": [[[10, 45], [11, 45], [11, 46], [10, 46]]] } }
    ]}))
}

#[test]
fn italy_is_a_closed_highlighted_polygon() {
    let inputs = RegionInputs {
        europe: records(&["Italien"]),
        ..RegionInputs::default()
    };
    let catalog = build_catalog(&inputs, &italy_features(), &NameResolver::builtin());

    let italy = catalog.by_display_name("Italien").unwrap();
    assert_eq!(italy.canonical_name(), "Italy");
    assert_eq!(
        italy.geometry.ring(),
        &[
            LatLon::new(45.0, 10.0),
            LatLon::new(45.0, 11.0),
            LatLon::new(46.0, 11.0),
            LatLon::new(46.0, 10.0),
        ]
    );

    match render_plan(&catalog, "Italien") {
        RenderPlan::Polygon {
            outline,
            color,
            view,
        } => {
            assert_eq!(outline.len(), 5);
            assert_eq!(outline.first(), outline.last());
            assert_eq!(color, Color::Red);
            assert_eq!(view.center, LatLon::new(45.5, 10.5));
            assert_eq!(view.zoom, 4.0);
        }
        other => panic!("expected polygon, got {other:?}"),
    }
}

#[test]
fn kossovo_is_corrected_and_clustered() {
    let identity = resolve("Kossovo");
    assert_eq!(identity.canonical_name, "Kosovo");

    let inputs = RegionInputs {
        europe: records(&["Kossovo", "Italien"]),
        ..RegionInputs::default()
    };
    let catalog = build_catalog(&inputs, &italy_features(), &NameResolver::builtin());

    let plan = render_plan(&catalog, "Kossovo");
    assert_eq!(plan.kind(), "microstate-cluster");
    let RenderPlan::MicrostateCluster { markers, .. } = plan else {
        unreachable!()
    };
    assert_eq!(markers.len(), 7);
    let highlighted: Vec<_> = markers.iter().filter(|m| m.color == Color::Red).collect();
    assert_eq!(highlighted.len(), 1);
    assert_eq!(highlighted[0].label, "Kossovo");
    assert!(highlighted[0].selected);
    assert!(markers
        .iter()
        .filter(|m| !m.selected)
        .all(|m| m.color == Color::Blue));
}

#[test]
fn all_regions_round_trip_in_ten_steps() {
    let inputs = RegionInputs {
        europe: records(&["Italien", "Spanien", "Polen"]),
        asia_oceania: records(&["Japan", "Australien"]),
        africa: records(&["Kenia", "Ghana"]),
        north_america: records(&["Kanada"]),
        south_america: records(&["Chile", "Peru"]),
    };
    let catalog = Arc::new(build_catalog(
        &inputs,
        &FeatureSet::default(),
        &NameResolver::builtin(),
    ));
    assert_eq!(catalog.len(), 10);

    let mut app = QuizApp::new(catalog);
    app.choose_mode(Mode::Learn);
    app.choose_region_with(RegionChoice::All, &mut StdRng::seed_from_u64(42));

    let order = app.session().order().to_vec();
    let mut sorted = order.clone();
    sorted.sort();
    let mut expected = app.catalog().all_names();
    expected.sort();
    assert_eq!(sorted, expected);

    assert_eq!(app.session().index(), 0);
    for _ in 0..10 {
        app.advance();
    }
    assert_eq!(app.session().index(), 0);
    assert_eq!(app.current_display_state().display_name.as_deref(), Some(order[0].as_str()));
}

#[test]
fn russia_is_pinned_to_moscow() {
    let geo = features(json!({ "features": [
        { "id": "RUS", "geometry": { "type": "MultiPolygon", "coordinates": [
            [[[27.0, 57.0], [180.0, 70.0], [130.0, 43.0], [27.0, 57.0]]],
            [[[-180.0, 65.0], [-170.0, 66.0], [-175.0, 64.0]]]
        ]}}
    ]}));
    let inputs = RegionInputs {
        europe: records(&["Russland (Teil)"]),
        ..RegionInputs::default()
    };
    let catalog = build_catalog(&inputs, &geo, &NameResolver::builtin());
    assert_eq!(catalog.by_display_name("Russland (Teil)").unwrap().geometry.len(), 7);

    match render_plan(&catalog, "Russland (Teil)") {
        RenderPlan::PointMarker { view, marker } => {
            assert_eq!(marker.position, LatLon::new(55.7558, 37.6173));
            assert_eq!(view.center, LatLon::new(55.7558, 37.6173));
        }
        other => panic!("expected point marker, got {other:?}"),
    }
}

#[test]
fn missing_shapes_render_empty_except_fixed_cases() {
    let inputs = RegionInputs {
        europe: records(&["Deutschland", "Monaco", "Russland (Teil)", "Atlantis"]),
        asia_oceania: records(&["Japan"]),
        ..RegionInputs::default()
    };
    let catalog = build_catalog(&inputs, &FeatureSet::default(), &NameResolver::builtin());
    for entry in catalog.entries() {
        assert!(!entry.has_shape());
    }
    assert_eq!(render_plan(&catalog, "Deutschland"), RenderPlan::empty());
    assert_eq!(render_plan(&catalog, "Atlantis"), RenderPlan::empty());
    assert_eq!(render_plan(&catalog, "Japan"), RenderPlan::empty());
    assert_eq!(render_plan(&catalog, "Monaco").kind(), "microstate-cluster");
    assert_eq!(render_plan(&catalog, "Russland (Teil)").kind(), "point-marker");

    let atlantis = catalog.by_display_name("Atlantis").unwrap();
    assert_eq!(atlantis.canonical_name(), "Atlantis");
    assert_eq!(atlantis.feature_code(), None);
    assert_eq!(catalog.stats().unmapped, 1);
}

#[test]
fn quiz_flow_hides_until_revealed() {
    let inputs = RegionInputs {
        africa: records(&["Kenia", "Ghana", "Mali"]),
        ..RegionInputs::default()
    };
    let catalog = Arc::new(build_catalog(
        &inputs,
        &FeatureSet::default(),
        &NameResolver::builtin(),
    ));
    let mut app = QuizApp::new(catalog);
    app.choose_mode(Mode::Quiz);
    app.choose_region(Region::Africa.into());

    let state = app.current_display_state();
    assert_eq!(state.mode, Some(Mode::Quiz));
    assert_eq!(state.headline(), "?");

    app.reveal();
    let revealed = app.current_display_state();
    assert!(revealed.revealed);
    assert_eq!(Some(revealed.headline()), revealed.display_name.as_deref());

    app.go_back();
    assert_eq!(app.current_display_state().headline(), "?");
    assert_eq!(app.session().index(), 2);

    app.return_to_menu();
    assert_eq!(app.current_display_state().headline(), "Select a region to start");
}
