//! Injected sources of identifiers and randomness.
//!
//! [`ListStore`](crate::app::ListStore) never calls a global RNG or UUID
//! generator directly. It owns one [`IdProvider`] and one [`RandomProvider`],
//! so tests can swap in deterministic implementations.

use crate::domain::ItemId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Debug;

/// Produces identifiers for newly created items.
pub trait IdProvider: Debug {
    fn next_id(&mut self) -> ItemId;
}

/// Produces uniformly distributed indices for random picks.
pub trait RandomProvider: Debug {
    /// Returns an index in `0..len`. Callers guarantee `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Random v4 UUIDs from the platform entropy source.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdProvider for UuidIds {
    fn next_id(&mut self) -> ItemId {
        ItemId::new_v4()
    }
}

/// Uniform picks backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seeds from the platform entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomProvider for StdRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn uuid_ids_do_not_collide_over_ten_thousand_draws() {
        let mut ids = UuidIds;
        let drawn: HashSet<ItemId> = (0..10_000).map(|_| ids.next_id()).collect();
        assert_eq!(drawn.len(), 10_000);
    }

    #[test]
    fn consecutive_uuid_ids_differ() {
        let mut ids = UuidIds;
        let mut prev = ids.next_id();
        for _ in 0..10_000 {
            let next = ids.next_id();
            assert_ne!(prev, next);
            prev = next;
        }
    }

    #[test]
    fn picks_stay_in_range() {
        let mut random = StdRandom::seeded(7);
        for _ in 0..1_000 {
            assert!(random.pick_index(3) < 3);
        }
    }

    #[test]
    fn picks_cover_every_index() {
        let mut random = StdRandom::seeded(42);
        let seen: HashSet<usize> = (0..300).map(|_| random.pick_index(3)).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = StdRandom::seeded(99);
        let mut b = StdRandom::seeded(99);
        let left: Vec<usize> = (0..20).map(|_| a.pick_index(10)).collect();
        let right: Vec<usize> = (0..20).map(|_| b.pick_index(10)).collect();
        assert_eq!(left, right);
    }
}
