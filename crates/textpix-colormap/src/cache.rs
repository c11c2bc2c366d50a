/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Lazily built reverse tables, one slot per algorithm
use std::sync::OnceLock;

use textpix_core::log::trace;

use crate::algorithms::{Algorithm, NUM_ALGORITHMS};
use crate::matcher::{LinearScan, NearestMatcher};
use crate::table::ReverseTable;

/// Reverse tables built on first use and kept for the lifetime of the cache
///
/// Each algorithm has its own slot. A slot is initialized at most once,
/// threads asking for a table that is being built wait for that build
/// instead of starting another one. Built tables are never mutated, so
/// references to them can be shared freely.
pub struct LookupCache<M: NearestMatcher = LinearScan> {
    slots: [OnceLock<ReverseTable<M>>; NUM_ALGORITHMS]
}

impl<M: NearestMatcher> LookupCache<M> {
    pub fn new() -> LookupCache<M> {
        LookupCache {
            slots: core::array::from_fn(|_| OnceLock::new())
        }
    }

    /// Return the table for `algorithm`, building it if this is the first request
    pub fn get(&self, algorithm: Algorithm) -> &ReverseTable<M> {
        self.slots[algorithm.index()].get_or_init(|| {
            trace!("Reverse table for {algorithm} not cached, building");
            ReverseTable::build(algorithm)
        })
    }

    /// Whether the table for `algorithm` has already been built
    pub fn is_built(&self, algorithm: Algorithm) -> bool {
        self.slots[algorithm.index()].get().is_some()
    }
}

impl<M: NearestMatcher> Default for LookupCache<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::algorithms::Algorithm;
    use crate::cache::LookupCache;
    use crate::table::ReverseTable;

    #[test]
    fn test_builds_on_demand() {
        let cache: LookupCache = LookupCache::new();

        assert!(!cache.is_built(Algorithm::Frequency));

        let first = cache.get(Algorithm::Frequency);
        assert!(cache.is_built(Algorithm::Frequency));
        assert!(!cache.is_built(Algorithm::Hsl));

        let second = cache.get(Algorithm::Frequency);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_concurrent_requests_share_one_table() {
        let cache: LookupCache = LookupCache::new();

        let addresses = std::thread::scope(|s| {
            let handles = (0..8)
                .map(|_| s.spawn(|| cache.get(Algorithm::DirectRgb) as *const ReverseTable as usize))
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect::<Vec<_>>()
        });

        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
