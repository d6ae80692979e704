// crates/atlasquiz-core/src/loader/common_io.rs
use crate::error::{AtlasError, Result};
use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::SystemTime;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens `path`, buffered, and unzips it when it ends in `.gz`.
/// `input` names the file in error messages.
pub fn open_stream(path: &Path, input: &str) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        AtlasError::NotFound(format!(
            "input '{input}' not found at {}: {e}",
            path.display()
        ))
    })?;

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(AtlasError::InvalidData(format!(
            "input '{input}' at {} is gzip-compressed but 'compact' is disabled",
            path.display()
        )))
    }
}

pub fn read_json<T: DeserializeOwned>(path: &Path, input: &str) -> Result<T> {
    let reader = open_stream(path, input)?;
    serde_json::from_reader(reader).map_err(|source| AtlasError::Json {
        input: input.to_owned(),
        source,
    })
}

pub fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

pub fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// True when `cache` exists and is strictly newer than every existing source.
/// A source stamped in the same tick as the cache counts as changed.
pub fn is_cache_fresh<'a>(cache: &Path, sources: impl IntoIterator<Item = &'a Path>) -> bool {
    let Some(cache_time) = modified(cache) else {
        return false;
    };
    sources
        .into_iter()
        .filter_map(modified)
        .all(|t| t < cache_time)
}
