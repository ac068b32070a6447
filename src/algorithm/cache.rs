use crate::analysis::weights::WeightTable;
use crate::io::error::Result;
use std::collections::HashMap;

/// Memoization map from neighborhood size to built weight table
///
/// A table is a pure function of the sample and `n`, so it is built at most
/// once per `n` until the owner replaces the sample and calls
/// [`WeightCache::invalidate`].
#[derive(Default)]
pub struct WeightCache {
    /// Neighborhood size to weight table mapping
    tables: HashMap<usize, WeightTable>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl WeightCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve the cached table for `n` or build and store a new one
    ///
    /// The build closure only runs on a miss. A failed build leaves the cache
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by `build_fn`
    pub fn get_or_build<F>(&mut self, n: usize, build_fn: F) -> Result<&WeightTable>
    where
        F: FnOnce() -> Result<WeightTable>,
    {
        use std::collections::hash_map::Entry;

        match self.tables.entry(n) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                Ok(&*entry.into_mut())
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                Ok(&*entry.insert(build_fn()?))
            }
        }
    }

    /// Whether a table for `n` is currently cached
    pub fn contains(&self, n: usize) -> bool {
        self.tables.contains_key(&n)
    }

    /// Number of cached tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether no tables are cached
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Drop every cached table
    pub fn invalidate(&mut self) {
        self.tables.clear();
    }
}
