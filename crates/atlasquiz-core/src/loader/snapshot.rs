// crates/atlasquiz-core/src/loader/snapshot.rs

//! Binary snapshot of a built [`Catalog`], so restarts skip GeoJSON parsing.
//!
//! Layout: a [`SnapshotKey`] followed by the catalog. A snapshot is only
//! restored when its key equals the key of the current build inputs.

use super::{common_io, DataSources};
use crate::catalog::Catalog;
use crate::error::{AtlasError, Result};
use crate::tables;
use bincode::Options;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// File name of the snapshot inside the data directory.
#[cfg(not(feature = "compact"))]
pub const SNAPSHOT_FILE: &str = "catalog.bin";
#[cfg(feature = "compact")]
pub const SNAPSHOT_FILE: &str = "catalog.comp.bin";

/// Upper bound for decoding, against corrupt length prefixes.
const SNAPSHOT_LIMIT: u64 = 256 * 1024 * 1024;

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

/// Everything besides input mtimes that decides what a build produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotKey {
    /// Version of this crate.
    pub version: String,
    /// [`tables::catalog_fingerprint`] of the built-in tables.
    pub tables: u64,
    /// File names of the inputs that existed, in [`DataSources::inputs`] order.
    pub present: Vec<String>,
}

impl SnapshotKey {
    pub fn for_sources(sources: &DataSources) -> Self {
        let present = sources
            .inputs()
            .iter()
            .filter(|p| p.exists())
            .filter_map(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        Self {
            version: env!("CARGO_PKG_VERSION").to_owned(),
            tables: tables::catalog_fingerprint(),
            present,
        }
    }
}

impl Catalog {
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        options().serialize(self).map_err(AtlasError::Bincode)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let catalog: Catalog = options().deserialize(data)?;
        Ok(catalog)
    }

    /// Write the snapshot to `path` (gzip-wrapped under `compact`).
    pub fn save_snapshot(&self, path: impl AsRef<Path>, key: &SnapshotKey) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let writer = BufWriter::new(file);

        #[cfg(feature = "compact")]
        {
            let mut encoder = GzEncoder::new(writer, Compression::default());
            options().serialize_into(&mut encoder, key)?;
            options().serialize_into(&mut encoder, self)?;
            encoder.finish()?.flush()?;
        }
        #[cfg(not(feature = "compact"))]
        {
            let mut writer = writer;
            options().serialize_into(&mut writer, key)?;
            options().serialize_into(&mut writer, self)?;
            writer.flush()?;
        }
        Ok(())
    }

    /// Restore the snapshot at `path`; fails when it was written for a
    /// different key.
    pub fn load_snapshot(path: impl AsRef<Path>, expected: &SnapshotKey) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path, "catalog snapshot")?;

        #[cfg(feature = "compact")]
        let mut reader: Box<dyn Read> = Box::new(GzDecoder::new(reader));
        #[cfg(not(feature = "compact"))]
        let mut reader = reader;

        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;

        let mut rest = data.as_slice();
        let key: SnapshotKey = options().deserialize_from(&mut rest)?;
        if key != *expected {
            return Err(AtlasError::InvalidData(format!(
                "snapshot {} is stale (written for {key:?})",
                path.display()
            )));
        }
        let catalog: Catalog = options().deserialize_from(&mut rest)?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(present: &[&str]) -> SnapshotKey {
        SnapshotKey {
            version: env!("CARGO_PKG_VERSION").to_owned(),
            tables: tables::catalog_fingerprint(),
            present: present.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn snapshot_round_trips_under_its_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SNAPSHOT_FILE);
        let k = key(&["europe.json", "geo.json"]);
        Catalog::default().save_snapshot(&path, &k).unwrap();
        assert!(Catalog::load_snapshot(&path, &k).unwrap().is_empty());
    }

    #[test]
    fn snapshot_under_another_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SNAPSHOT_FILE);
        Catalog::default()
            .save_snapshot(&path, &key(&["geo.json", "aliases.json"]))
            .unwrap();

        let err = Catalog::load_snapshot(&path, &key(&["geo.json"])).unwrap_err();
        assert!(matches!(err, AtlasError::InvalidData(_)));

        let mut other_tables = key(&["geo.json", "aliases.json"]);
        other_tables.tables ^= 1;
        assert!(Catalog::load_snapshot(&path, &other_tables).is_err());
    }

    #[test]
    fn key_lists_only_existing_inputs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("geo.json"), b"{}").unwrap();
        let k = SnapshotKey::for_sources(&DataSources::in_dir(dir.path()));
        assert_eq!(k.present, vec!["geo.json".to_string()]);
    }
}
