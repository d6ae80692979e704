// crates/atlasquiz-core/src/loader/mod.rs

//! # Data Loader
//!
//! Startup I/O: reads the five region lists, the GeoJSON feature collection
//! and the optional `aliases.json`, then builds (or restores) the catalog.
//! Any unreadable or malformed input is fatal and named in the error.

use crate::catalog::{build_catalog, Catalog, RegionInputs};
use crate::error::Result;
use crate::geometry::FeatureSet;
use crate::raw::FeatureCollectionRaw;
use crate::resolver::{NameResolver, TableOverrides};
use log::{debug, info};
use std::path::{Path, PathBuf};

pub mod common_io;
mod snapshot;

pub use snapshot::{SnapshotKey, SNAPSHOT_FILE};

/// Environment variable that overrides [`Catalog::default_data_dir`].
pub const DATA_DIR_ENV: &str = "ATLASQUIZ_DATA_DIR";
/// Optional table overrides inside the data directory.
pub const ALIASES_FILE: &str = "aliases.json";
/// A public country outline collection whose feature ids are alpha-3 codes.
pub const GEO_FEATURES_URL: &str =
    "https://raw.githubusercontent.com/johan/world.geo.json/master/countries.geo.json";

/// Where every startup input lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSources {
    pub europe: PathBuf,
    pub asia_oceania: PathBuf,
    pub africa: PathBuf,
    pub north_america: PathBuf,
    pub south_america: PathBuf,
    pub features: PathBuf,
    /// Read only when present.
    pub aliases: PathBuf,
    /// `None` disables the snapshot cache.
    pub snapshot: Option<PathBuf>,
}

/// `dir/name` if present, else `dir/name.gz` if present, else `dir/name`
/// (so a missing file is reported under its plain name).
fn locate(dir: &Path, name: &str) -> PathBuf {
    let plain = dir.join(name);
    if plain.exists() {
        return plain;
    }
    let gz = dir.join(format!("{name}.gz"));
    if gz.exists() {
        gz
    } else {
        plain
    }
}

impl DataSources {
    /// The standard file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            europe: locate(dir, "europe.json"),
            asia_oceania: locate(dir, "asia_oceania.json"),
            africa: locate(dir, "africa.json"),
            north_america: locate(dir, "north_america.json"),
            south_america: locate(dir, "south_america.json"),
            features: locate(dir, "geo.json"),
            aliases: dir.join(ALIASES_FILE),
            snapshot: Some(dir.join(SNAPSHOT_FILE)),
        }
    }

    /// The built-in resolver with `aliases.json` merged over it, as used for
    /// building the catalog.
    pub fn resolver(&self) -> Result<NameResolver> {
        let overrides = load_overrides(&self.aliases)?;
        Ok(NameResolver::builtin().with_overrides(&overrides))
    }

    pub fn without_snapshot(mut self) -> Self {
        self.snapshot = None;
        self
    }

    /// Every file the catalog depends on.
    pub fn inputs(&self) -> [&Path; 7] {
        [
            self.europe.as_path(),
            self.asia_oceania.as_path(),
            self.africa.as_path(),
            self.north_america.as_path(),
            self.south_america.as_path(),
            self.features.as_path(),
            self.aliases.as_path(),
        ]
    }
}

impl Catalog {
    /// `$ATLASQUIZ_DATA_DIR`, or the `data/` directory shipped with this crate.
    pub fn default_data_dir() -> PathBuf {
        std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load the catalog from the standard files in `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        Self::load_from(&DataSources::in_dir(dir))
    }

    /// **Smart Load:** uses a fresh snapshot when there is one, otherwise
    /// builds from the inputs and refreshes the snapshot (best effort).
    ///
    /// A snapshot is fresh when it is strictly newer than every input and was
    /// written for the same [`SnapshotKey`] (crate version, built-in tables,
    /// set of present inputs).
    pub fn load_from(sources: &DataSources) -> Result<Self> {
        let key = SnapshotKey::for_sources(sources);
        if let Some(snapshot) = &sources.snapshot {
            if common_io::is_cache_fresh(snapshot, sources.inputs()) {
                match Self::load_snapshot(snapshot, &key) {
                    Ok(catalog) => {
                        info!(
                            "catalog restored from {} ({} countries)",
                            snapshot.display(),
                            catalog.len()
                        );
                        return Ok(catalog);
                    }
                    Err(e) => debug!("snapshot {} unusable: {e}", snapshot.display()),
                }
            }
        }

        let catalog = Self::build_from_files(sources)?;

        if let Some(snapshot) = &sources.snapshot {
            if let Err(e) = catalog.save_snapshot(snapshot, &key) {
                debug!("could not write snapshot {}: {e}", snapshot.display());
            }
        }
        Ok(catalog)
    }

    /// Parse every input and build without touching the snapshot.
    pub fn build_from_files(sources: &DataSources) -> Result<Self> {
        let inputs = RegionInputs {
            europe: common_io::read_json(&sources.europe, "europe")?,
            asia_oceania: common_io::read_json(&sources.asia_oceania, "asia_oceania")?,
            africa: common_io::read_json(&sources.africa, "africa")?,
            north_america: common_io::read_json(&sources.north_america, "north_america")?,
            south_america: common_io::read_json(&sources.south_america, "south_america")?,
        };
        let raw: FeatureCollectionRaw = common_io::read_json(&sources.features, "geo")?;
        let features = FeatureSet::from_raw(raw);
        debug!("{} features indexed", features.len());

        let resolver = sources.resolver()?;

        Ok(build_catalog(&inputs, &features, &resolver))
    }
}

/// Table overrides from `path`; a missing file means none.
pub fn load_overrides(path: &Path) -> Result<TableOverrides> {
    if !path.exists() {
        return Ok(TableOverrides::default());
    }
    let overrides: TableOverrides = common_io::read_json(path, ALIASES_FILE)?;
    debug!(
        "{} synonym, {} display, {} code overrides",
        overrides.synonyms.len(),
        overrides.display_to_canonical.len(),
        overrides.canonical_to_code.len()
    );
    Ok(overrides)
}
