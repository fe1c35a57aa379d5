//! Ordered tick index.
//!
//! Two maps are kept: `active`, which only holds ticks with nonzero
//! `liquidity_gross` and backs neighbour lookup during a swap, and
//! `all_ticks`, an append-only history of every tick ever initialized. A
//! position only stores tick *indices*; once a boundary tick's liquidity
//! drops to zero it is dropped from `active` but its `fee_growth_outside`
//! at the moment of removal remains readable through `all_ticks` so fee
//! settlement for positions still referencing it stays correct.

use std::collections::BTreeMap;

use crate::types::Tick;

/// Direction to search for a neighbouring tick from a given index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Strictly greater tick index.
    Up,
    /// Strictly less tick index.
    Down,
}

/// The tick map owned by a pool.
#[derive(Clone, Debug, Default)]
pub struct TickIndex {
    active: BTreeMap<i64, Tick>,
    all_ticks: BTreeMap<i64, Tick>,
}

impl TickIndex {
    pub fn new() -> Self {
        Self {
            active: BTreeMap::new(),
            all_ticks: BTreeMap::new(),
        }
    }

    /// The nearest active tick strictly above (`Direction::Up`) or strictly
    /// below (`Direction::Down`) `from`, if any.
    pub fn find_next(&self, from: i64, direction: Direction) -> Option<&Tick> {
        match direction {
            Direction::Up => self
                .active
                .range((std::ops::Bound::Excluded(from), std::ops::Bound::Unbounded))
                .next()
                .map(|(_, t)| t),
            Direction::Down => self
                .active
                .range((std::ops::Bound::Unbounded, std::ops::Bound::Excluded(from)))
                .next_back()
                .map(|(_, t)| t),
        }
    }

    /// Looks up a tick by index regardless of whether it is still active,
    /// falling back to the retained history. Used by fee settlement for a
    /// position whose boundary tick may have been removed from `active`.
    pub fn get_any(&self, idx: i64) -> Option<&Tick> {
        self.active.get(&idx).or_else(|| self.all_ticks.get(&idx))
    }

    /// Whether `idx` is currently an active (nonzero liquidity) tick.
    pub fn is_active(&self, idx: i64) -> bool {
        self.active.contains_key(&idx)
    }

    /// Inserts a brand-new tick into both maps.
    pub fn insert(&mut self, tick: Tick) {
        self.all_ticks.insert(tick.idx, tick.clone());
        self.active.insert(tick.idx, tick);
    }

    /// Ensures `idx` is active, reusing the retained record from
    /// `all_ticks` (preserving its `fee_growth_outside`) if the tick was
    /// previously initialized and later removed for lack of liquidity.
    /// Returns `true` if a brand-new tick record had to be created (neither
    /// active nor retained), leaving the caller to populate it via
    /// `update`.
    pub fn ensure_active(&mut self, idx: i64, fresh: impl FnOnce() -> Tick) -> bool {
        if self.active.contains_key(&idx) {
            return false;
        }
        if let Some(retained) = self.all_ticks.get(&idx).cloned() {
            self.active.insert(idx, retained);
            return false;
        }
        self.insert(fresh());
        true
    }

    /// Applies `f` to both the active and retained copy of a tick, keeping
    /// them in sync. No-op if the tick does not exist.
    pub fn update<F: FnOnce(&mut Tick)>(&mut self, idx: i64, f: F) {
        if let Some(t) = self.active.get_mut(&idx) {
            f(t);
            let updated = t.clone();
            self.all_ticks.insert(idx, updated);
        }
    }

    /// Removes a tick from the active map if its gross liquidity has
    /// dropped to zero. The retained copy in `all_ticks` is left untouched.
    pub fn remove_if_empty(&mut self, idx: i64) {
        if self.active.get(&idx).map(Tick::is_empty).unwrap_or(false) {
            self.active.remove(&idx);
        }
    }

    /// Iterator over all currently active ticks, in ascending order.
    pub fn iter_active(&self) -> impl Iterator<Item = &Tick> {
        self.active.values()
    }
}
