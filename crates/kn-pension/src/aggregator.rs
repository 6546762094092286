//! `SatisfactionAggregator`: running mean of every dog's satisfaction.

use std::collections::{BTreeMap, BTreeSet};

use kn_core::DogId;
use kn_needs::{NeedSnapshot, SatisfactionProvider};

/// Per-dog needs projection returned by
/// [`SatisfactionAggregator::all_needs_snapshot`].
#[cfg(feature = "fx-hash")]
pub type SnapshotMap = rustc_hash::FxHashMap<DogId, Vec<NeedSnapshot>>;

/// Per-dog needs projection returned by
/// [`SatisfactionAggregator::all_needs_snapshot`].
#[cfg(not(feature = "fx-hash"))]
pub type SnapshotMap = std::collections::HashMap<DogId, Vec<NeedSnapshot>>;

// ── ProviderLookup ────────────────────────────────────────────────────────────

/// Resolves a dog handle to its satisfaction provider.
///
/// `None` means the handle is stale (the dog left, or never existed); the
/// aggregator skips such handles.
pub trait ProviderLookup {
    type Provider: SatisfactionProvider + ?Sized;

    fn provider(&self, id: DogId) -> Option<&Self::Provider>;
}

/// Slices resolve by position: `DogId(i)` is element `i`.
impl<T: SatisfactionProvider> ProviderLookup for [T] {
    type Provider = T;

    fn provider(&self, id: DogId) -> Option<&T> {
        self.get(id.index())
    }
}

impl<T: SatisfactionProvider> ProviderLookup for Vec<T> {
    type Provider = T;

    fn provider(&self, id: DogId) -> Option<&T> {
        self.as_slice().provider(id)
    }
}

impl<T: SatisfactionProvider> ProviderLookup for BTreeMap<DogId, T> {
    type Provider = T;

    fn provider(&self, id: DogId) -> Option<&T> {
        self.get(&id)
    }
}

// ── SatisfactionAggregator ────────────────────────────────────────────────────

/// Set of registered dogs plus the last computed mean satisfaction.
///
/// Registration changes mark the aggregate dirty; [`recompute`][Self::recompute]
/// brings it up to date.  Removing the last dog resets the aggregate to 1.0
/// immediately, since an empty pension has nothing to recompute.
#[derive(Clone, Debug)]
pub struct SatisfactionAggregator {
    providers: BTreeSet<DogId>,
    current:   f32,
    dirty:     bool,
}

impl Default for SatisfactionAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl SatisfactionAggregator {
    pub fn new() -> Self {
        Self {
            providers: BTreeSet::new(),
            current:   1.0,
            dirty:     false,
        }
    }

    /// Add `id`.  Returns `false` (and changes nothing) if already present.
    pub fn register(&mut self, id: DogId) -> bool {
        if !self.providers.insert(id) {
            return false;
        }
        self.dirty = true;
        tracing::info!(dog = %id, providers = self.providers.len(), "satisfaction provider registered");
        true
    }

    /// Remove `id`.  Returns `false` (and changes nothing) if absent.
    pub fn unregister(&mut self, id: DogId) -> bool {
        if !self.providers.remove(&id) {
            return false;
        }
        tracing::info!(dog = %id, providers = self.providers.len(), "satisfaction provider unregistered");
        if self.providers.is_empty() {
            self.current = 1.0;
            self.dirty = false;
        } else {
            self.dirty = true;
        }
        true
    }

    /// Recompute the mean of every resolvable provider's satisfaction,
    /// each clamped to `[0, 1]` first.
    ///
    /// Handles that do not resolve, or whose provider reports NaN, are left
    /// out of both sum and count.  With nothing left the result is 1.0.
    pub fn recompute<L>(&mut self, lookup: &L) -> f32
    where
        L: ProviderLookup + ?Sized,
    {
        let mut sum = 0.0f32;
        let mut count = 0usize;
        for &id in &self.providers {
            let Some(provider) = lookup.provider(id) else {
                continue;
            };
            let s = provider.satisfaction();
            if s.is_nan() {
                continue;
            }
            sum += s.clamp(0.0, 1.0);
            count += 1;
        }

        self.current = if count == 0 { 1.0 } else { sum / count as f32 };
        self.dirty = false;
        self.current
    }

    /// The last computed aggregate, in `[0, 1]`.
    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    /// `true` if membership changed since the last recompute.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    pub fn contains(&self, id: DogId) -> bool {
        self.providers.contains(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Registered handles in ascending id order.
    pub fn handles(&self) -> impl Iterator<Item = DogId> + '_ {
        self.providers.iter().copied()
    }

    /// Drop every provider; the aggregate returns to 1.0.
    pub fn clear(&mut self) {
        self.providers.clear();
        self.current = 1.0;
        self.dirty = false;
    }

    /// Needs snapshots of every resolvable provider, keyed by dog.
    pub fn all_needs_snapshot<L>(&self, lookup: &L) -> SnapshotMap
    where
        L: ProviderLookup + ?Sized,
    {
        let mut map = SnapshotMap::default();
        for &id in &self.providers {
            if let Some(provider) = lookup.provider(id) {
                map.insert(id, provider.needs_snapshot());
            }
        }
        map
    }
}
