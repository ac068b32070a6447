//! Tests for per-neighborhood weight table memoization and hit/miss tracking

#[cfg(test)]
mod tests {
    use convchain::algorithm::cache::{CacheStats, WeightCache};
    use convchain::analysis::weights::WeightTable;
    use convchain::io::error::invalid_source;
    use convchain::spatial::Sample;

    fn sample() -> Sample {
        Sample::from_cells(&[true, false, false, true, true, false], 3, 2).expect("valid sample")
    }

    // Verifies new cache starts with 0 hits and 0 misses
    // Verified by initializing cache with non-zero hit and miss counts
    #[test]
    fn test_cache_new() {
        let cache = WeightCache::new();
        assert_eq!(cache.stats, CacheStats::default());
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
    }

    // Tests cache miss on first access and hit on second
    // Verified by removing hit counter increment logic
    #[test]
    fn test_cache_miss_and_hit() {
        let sample = sample();
        let mut cache = WeightCache::new();
        let mut builds = 0;

        let first = cache
            .get_or_build(2, || {
                builds += 1;
                WeightTable::build(&sample, 2)
            })
            .expect("build succeeds")
            .clone();
        let second = cache
            .get_or_build(2, || {
                builds += 1;
                WeightTable::build(&sample, 2)
            })
            .expect("cached")
            .clone();

        assert_eq!(first, second);
        assert_eq!(builds, 1);
        assert_eq!(cache.stats, CacheStats { hits: 1, misses: 1 });
    }

    // Tests tables for different sizes are stored independently
    // Verified by keying the cache on a constant
    #[test]
    fn test_sizes_cached_separately() {
        let sample = sample();
        let mut cache = WeightCache::new();

        let small = cache
            .get_or_build(1, || WeightTable::build(&sample, 1))
            .expect("build succeeds")
            .len();
        let large = cache
            .get_or_build(3, || WeightTable::build(&sample, 3))
            .expect("build succeeds")
            .len();

        assert_eq!((small, large), (2, 512));
        assert!(cache.contains(1));
        assert!(cache.contains(3));
        assert!(!cache.contains(2));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stats.misses, 2);
    }

    // Tests a failed build is not cached
    // Verified by inserting a placeholder before building
    #[test]
    fn test_failed_build_not_cached() {
        let mut cache = WeightCache::new();
        let result = cache.get_or_build(2, || Err(invalid_source(&"broken sample")));
        assert!(result.is_err());
        assert!(!cache.contains(2));
        assert!(cache.is_empty());
    }

    // Tests invalidation drops every table but keeps the statistics
    // Verified by making invalidate a no-op
    #[test]
    fn test_invalidate() {
        let sample = sample();
        let mut cache = WeightCache::new();
        for n in 1..=2 {
            let _ = cache.get_or_build(n, || WeightTable::build(&sample, n));
        }
        cache.invalidate();

        assert!(cache.is_empty());
        assert_eq!(cache.stats.misses, 2);

        let _ = cache.get_or_build(1, || WeightTable::build(&sample, 1));
        assert_eq!(cache.stats.misses, 3);
        assert_eq!(cache.stats.hits, 0);
    }
}
