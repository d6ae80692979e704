use atlasquiz_core::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::json;
use std::hint::black_box;

/// Every display name from the built-in tables, each with a small square.
fn fixture() -> (RegionInputs, FeatureSet) {
    let resolver = NameResolver::builtin();
    let mut features = Vec::new();
    let mut inputs = RegionInputs::default();
    for (i, (display, _)) in atlasquiz_core::tables::DISPLAY_TO_CANONICAL.iter().enumerate() {
        let id = resolver.resolve(display);
        let (lon, lat) = ((i % 36) as f64 * 10.0 - 180.0, (i / 36) as f64 * 10.0 - 60.0);
        if let Some(code) = id.feature_code {
            features.push(json!({ "id": code, "geometry": { "type": "Polygon", "coordinates": [
                [[lon, lat], [lon + 5.0, lat], [lon + 5.0, lat + 5.0], [lon, lat + 5.0], [lon, lat]]
            ]}}));
        }
        let record = CountryRecord::named(*display);
        match i % 5 {
            0 => inputs.europe.push(record),
            1 => inputs.asia_oceania.push(record),
            2 => inputs.africa.push(record),
            3 => inputs.north_america.push(record),
            _ => inputs.south_america.push(record),
        }
    }
    let raw: FeatureCollectionRaw = serde_json::from_value(json!({ "features": features })).unwrap();
    (inputs, FeatureSet::from_raw(raw))
}

fn bench_build(c: &mut Criterion) {
    let (inputs, features) = fixture();
    let resolver = NameResolver::builtin();
    c.bench_function("build_catalog", |b| {
        b.iter(|| build_catalog(black_box(&inputs), black_box(&features), &resolver))
    });
}

fn bench_render(c: &mut Criterion) {
    let (inputs, features) = fixture();
    let catalog = build_catalog(&inputs, &features, &NameResolver::builtin());
    let names: Vec<String> = catalog.all_names().into_iter().map(str::to_owned).collect();
    c.bench_function("render_plan_all", |b| {
        b.iter(|| {
            for name in &names {
                black_box(render_plan(&catalog, name));
            }
        })
    });
}

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve", |b| {
        b.iter(|| {
            black_box(resolve(black_box("Kossovo")));
            black_box(resolve(black_box("Vereinigte Arabische Emirate")));
            black_box(resolve(black_box("Atlantis")));
        })
    });
}

criterion_group!(benches, bench_build, bench_render, bench_resolve);
criterion_main!(benches);
