// crates/atlasquiz-core/src/common.rs

use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a catalog.
///
/// Returned by [`Catalog::stats`](crate::Catalog::stats). `unmapped` counts
/// entries whose canonical name has no feature code; `degenerate` counts
/// entries with no renderable shape (which includes every unmapped entry).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub entries: usize,
    pub europe: usize,
    pub asia: usize,
    pub africa: usize,
    pub americas: usize,
    pub oceania: usize,
    pub unmapped: usize,
    pub degenerate: usize,
}
