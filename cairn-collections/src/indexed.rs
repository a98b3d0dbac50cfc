//! Indexed priority queue over an entry arena.
//!
//! Entries live in a stable arena and embed their own heap position,
//! enabling O(log n) in-place priority mutation and O(log n) removal of
//! any key, not just the current best.

use crate::error::QueueError;
use crate::order::{KeyOrder, TieBreak};
use crate::queue::PriorityQueue;

use slab::Slab;
use std::cmp::Ordering;
use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

/// An arena entry: the stored key, its current priority, and its position
/// in the heap array.
#[derive(Debug, Clone)]
struct Entry<K> {
    key: K,
    priority: f64,
    pos: usize,
}

/// A set of keys ranked by `f64` priority, highest first.
///
/// Three parts cooperate, none owning the others' job:
///
/// ```text
/// entries (Slab)  - owns key/priority pairs, slot index is a stable handle
/// heap (Vec)      - orders handles, best first, repaired by sifting
/// index (HashMap) - key -> handle, the membership set in O(1)
/// ```
///
/// Each entry records its own heap position, so a key found through the
/// index reaches its heap slot without searching. The hash map and the
/// entry each own a copy of the key (the one clone per insertion); repair
/// walks touch neither the map nor the hasher.
///
/// # Example
///
/// ```
/// use cairn_collections::{IndexedPriorityQueue, PriorityQueue};
///
/// let mut queue: IndexedPriorityQueue<&str> = IndexedPriorityQueue::new();
///
/// queue.add("rebalance");
/// queue.relax(&"rebalance", 3.0).unwrap();
/// queue.add_with_priority("settle", 8.0);
/// queue.add_with_priority("audit", 5.0);
///
/// // Highest priority first.
/// assert_eq!(queue.peek().unwrap(), (&"settle", 8.0));
///
/// // Keys move in place.
/// queue.change_priority(&"audit", 9.5).unwrap();
/// assert_eq!(queue.extract_first().unwrap(), "audit");
///
/// // Still a set: members can be tested and removed by key.
/// assert!(queue.contains(&"rebalance"));
/// assert_eq!(queue.remove(&"settle"), Some(8.0));
/// assert_eq!(queue.len(), 1);
/// ```
///
/// # Ordering
///
/// Priorities compare under `f64::total_cmp`, so every value is ranked:
/// negative infinity (the sentinel new keys start at) sorts below all
/// finite values, and NaN sorts above positive infinity. Ties go to the
/// [`TieBreak`] policy `B`; the default [`KeyOrder`] prefers the smaller
/// key and requires `K: Ord`, while [`Unordered`](crate::Unordered) works
/// for any key and leaves tie order unspecified.
///
/// The heap property itself is maintained over priorities alone. The
/// policy only steers repair walks, which is what lets `add` append a
/// sentinel-priority leaf without repairing.
///
/// # Hashing
///
/// `S` is the membership index's hasher, defaulting to the standard
/// `RandomState`. Pass a cheaper hasher through
/// [`with_hasher`](IndexedPriorityQueue::with_hasher) when keys are small
/// and HashDoS is not a concern.
pub struct IndexedPriorityQueue<K, B = KeyOrder, S = RandomState>
where
    K: Hash + Eq + Clone,
    B: TieBreak<K>,
    S: BuildHasher,
{
    /// Entry arena; the slot index is the entry's stable handle.
    entries: Slab<Entry<K>>,
    /// Heap of handles, best first.
    heap: Vec<usize>,
    /// Key -> handle. The key domain is the membership set.
    index: HashMap<K, usize, S>,
    _marker: PhantomData<B>,
}

impl<K, B> IndexedPriorityQueue<K, B, RandomState>
where
    K: Hash + Eq + Clone,
    B: TieBreak<K>,
{
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::with_capacity_and_hasher(0, RandomState::default())
    }

    /// Creates an empty queue with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::default())
    }
}

impl<K, B, S> IndexedPriorityQueue<K, B, S>
where
    K: Hash + Eq + Clone,
    B: TieBreak<K>,
    S: BuildHasher,
{
    /// Creates an empty queue that hashes keys with `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates an empty queue with pre-allocated capacity, hashing keys
    /// with `hasher`.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            entries: Slab::with_capacity(capacity),
            heap: Vec::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, hasher),
            _marker: PhantomData,
        }
    }

    // ========================================================================
    // Size and capacity
    // ========================================================================

    /// Returns the number of queued keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if no keys are queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of keys the heap can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Reserves capacity for at least `additional` more keys.
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
        self.heap.reserve(additional);
        self.index.reserve(additional);
    }

    /// Removes every key from the queue.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.heap.clear();
        self.index.clear();
    }

    // ========================================================================
    // Membership access
    // ========================================================================

    /// Returns the stored key equal to `key`, or `None` if it is not
    /// queued.
    ///
    /// Useful when keys are interned and the stored instance is the
    /// canonical one.
    pub fn get(&self, key: &K) -> Option<&K> {
        let &id = self.index.get(key)?;
        Some(&self.entries[id].key)
    }

    /// Removes `key` from the queue, returning its priority.
    ///
    /// Returns `None` if the key is not queued. Removal from the middle of
    /// the heap is O(log n): the last leaf takes the vacated position and
    /// sifts to wherever it belongs.
    ///
    /// # Example
    ///
    /// ```
    /// use cairn_collections::{IndexedPriorityQueue, PriorityQueue};
    ///
    /// let mut queue: IndexedPriorityQueue<&str> = IndexedPriorityQueue::new();
    /// queue.add_with_priority("keep", 2.0);
    /// queue.add_with_priority("drop", 7.0);
    ///
    /// assert_eq!(queue.remove(&"drop"), Some(7.0));
    /// assert_eq!(queue.remove(&"drop"), None);
    /// assert_eq!(queue.peek().unwrap(), (&"keep", 2.0));
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<f64> {
        let &id = self.index.get(key)?;
        let pos = self.entries[id].pos;
        // The position came from a live entry, so it is in range.
        let entry = self.remove_at(pos).unwrap();
        Some(entry.priority)
    }

    /// Keeps only the keys for which `pred` returns `true`.
    ///
    /// The predicate sees each entry exactly once, in arbitrary order,
    /// before any removal happens.
    pub fn retain<F>(&mut self, mut pred: F)
    where
        F: FnMut(&K, f64) -> bool,
    {
        let doomed: Vec<usize> = self
            .heap
            .iter()
            .copied()
            .filter(|&id| {
                let entry = &self.entries[id];
                !pred(&entry.key, entry.priority)
            })
            .collect();

        for id in doomed {
            // Handles stay valid while other entries are removed; only the
            // heap position has to be re-read.
            let pos = self.entries[id].pos;
            self.remove_at(pos).unwrap();
        }
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over `(key, priority)` pairs in arbitrary
    /// order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over the queued keys in arbitrary order.
    pub fn keys(&self) -> Keys<'_, K> {
        Keys { inner: self.iter() }
    }

    /// Consumes the queue, returning every `(key, priority)` pair in
    /// priority order, highest first.
    ///
    /// # Example
    ///
    /// ```
    /// use cairn_collections::{IndexedPriorityQueue, PriorityQueue};
    ///
    /// let mut queue: IndexedPriorityQueue<&str> = IndexedPriorityQueue::new();
    /// queue.add_with_priority("low", 1.0);
    /// queue.add_with_priority("high", 9.0);
    /// queue.add_with_priority("mid", 4.0);
    ///
    /// let sorted = queue.into_sorted_vec();
    /// assert_eq!(sorted, [("high", 9.0), ("mid", 4.0), ("low", 1.0)]);
    /// ```
    pub fn into_sorted_vec(mut self) -> Vec<(K, f64)> {
        let mut sorted = Vec::with_capacity(self.len());
        while !self.heap.is_empty() {
            // Position 0 of a non-empty heap is always valid.
            let entry = self.remove_at(0).unwrap();
            sorted.push((entry.key, entry.priority));
        }
        sorted
    }

    // ========================================================================
    // Set relations
    // ========================================================================

    /// Returns `true` if every key in `self` is also in `other`.
    pub fn is_subset<B2, S2>(&self, other: &IndexedPriorityQueue<K, B2, S2>) -> bool
    where
        B2: TieBreak<K>,
        S2: BuildHasher,
    {
        self.len() <= other.len() && self.keys().all(|key| other.contains(key))
    }

    /// Returns `true` if every key in `other` is also in `self`.
    pub fn is_superset<B2, S2>(&self, other: &IndexedPriorityQueue<K, B2, S2>) -> bool
    where
        B2: TieBreak<K>,
        S2: BuildHasher,
    {
        other.is_subset(self)
    }

    /// Returns `true` if `self` and `other` share no keys.
    pub fn is_disjoint<B2, S2>(&self, other: &IndexedPriorityQueue<K, B2, S2>) -> bool
    where
        B2: TieBreak<K>,
        S2: BuildHasher,
    {
        if self.len() <= other.len() {
            self.keys().all(|key| !other.contains(key))
        } else {
            other.keys().all(|key| !self.contains(key))
        }
    }

    /// Visits the keys of both queues, in arbitrary order, without
    /// duplicates.
    ///
    /// # Example
    ///
    /// ```
    /// use cairn_collections::{IndexedPriorityQueue, PriorityQueue};
    ///
    /// let mut a: IndexedPriorityQueue<u32> = IndexedPriorityQueue::new();
    /// let mut b: IndexedPriorityQueue<u32> = IndexedPriorityQueue::new();
    /// a.add(1);
    /// a.add(2);
    /// b.add(2);
    /// b.add(3);
    ///
    /// let mut all: Vec<u32> = a.union(&b).copied().collect();
    /// all.sort_unstable();
    /// assert_eq!(all, [1, 2, 3]);
    /// ```
    pub fn union<'a, B2, S2>(
        &'a self,
        other: &'a IndexedPriorityQueue<K, B2, S2>,
    ) -> impl Iterator<Item = &'a K>
    where
        B2: TieBreak<K>,
        S2: BuildHasher,
    {
        self.keys()
            .chain(other.keys().filter(move |key| !self.contains(key)))
    }

    /// Visits the keys queued in both `self` and `other`.
    pub fn intersection<'a, B2, S2>(
        &'a self,
        other: &'a IndexedPriorityQueue<K, B2, S2>,
    ) -> impl Iterator<Item = &'a K>
    where
        B2: TieBreak<K>,
        S2: BuildHasher,
    {
        self.keys().filter(move |key| other.contains(key))
    }

    /// Visits the keys queued in `self` but not in `other`.
    pub fn difference<'a, B2, S2>(
        &'a self,
        other: &'a IndexedPriorityQueue<K, B2, S2>,
    ) -> impl Iterator<Item = &'a K>
    where
        B2: TieBreak<K>,
        S2: BuildHasher,
    {
        self.keys().filter(move |key| !other.contains(key))
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Appends a new entry as the last leaf at the sentinel priority.
    ///
    /// The key must not already be in the index. No repair walk runs:
    /// nothing ranks below negative infinity, so the leaf cannot violate
    /// the heap property.
    fn insert_entry(&mut self, key: K) -> usize {
        let pos = self.heap.len();
        let id = self.entries.insert(Entry {
            key: key.clone(),
            priority: f64::NEG_INFINITY,
            pos,
        });
        self.heap.push(id);
        self.index.insert(key, id);
        id
    }

    /// Removes the entry at heap position `pos`.
    ///
    /// The last leaf takes the vacated position and sifts in whichever
    /// direction it needs.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidOperation`] if `pos` is outside the
    /// heap.
    fn remove_at(&mut self, pos: usize) -> Result<Entry<K>, QueueError> {
        if pos >= self.heap.len() {
            return Err(QueueError::InvalidOperation("heap position out of range"));
        }

        let last = self.heap.len() - 1;
        if pos != last {
            self.swap_positions(pos, last);
        }
        let id = self.heap.pop().unwrap();
        let entry = self.entries.remove(id);
        self.index.remove(&entry.key);

        if pos != last {
            // The displaced leaf may belong above or below its new position.
            self.sift_down(pos);
            self.sift_up(pos);
        }

        Ok(entry)
    }

    /// Returns `true` if the entry at handle `a` ranks before the entry at
    /// handle `b`.
    #[inline]
    fn outranks(&self, a: usize, b: usize) -> bool {
        let lhs = &self.entries[a];
        let rhs = &self.entries[b];
        match lhs.priority.total_cmp(&rhs.priority) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => B::tie_break(&lhs.key, &rhs.key) == Ordering::Less,
        }
    }

    /// Exchanges two heap positions.
    ///
    /// Heap slots and the entries' position fields move together or not at
    /// all; this is the only place the handle/position bijection changes
    /// shape.
    #[inline]
    fn swap_positions(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.entries[self.heap[a]].pos = a;
        self.entries[self.heap[b]].pos = b;
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.outranks(self.heap[pos], self.heap[parent]) {
                self.swap_positions(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let best = if right < len && self.outranks(self.heap[right], self.heap[left]) {
                right
            } else {
                left
            };

            if self.outranks(self.heap[best], self.heap[pos]) {
                self.swap_positions(pos, best);
                pos = best;
            } else {
                break;
            }
        }
    }
}

impl<K, B, S> PriorityQueue<K> for IndexedPriorityQueue<K, B, S>
where
    K: Hash + Eq + Clone,
    B: TieBreak<K>,
    S: BuildHasher,
{
    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn priority_of(&self, key: &K) -> Option<f64> {
        let &id = self.index.get(key)?;
        Some(self.entries[id].priority)
    }

    fn add(&mut self, key: K) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        self.insert_entry(key);
        true
    }

    fn add_with_priority(&mut self, key: K, priority: f64) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        let id = self.insert_entry(key);
        let entry = &mut self.entries[id];
        if priority.total_cmp(&entry.priority).is_gt() {
            entry.priority = priority;
            let pos = entry.pos;
            self.sift_up(pos);
        }
        true
    }

    fn relax(&mut self, key: &K, priority: f64) -> Result<bool, QueueError> {
        let &id = self.index.get(key).ok_or(QueueError::KeyNotFound)?;
        let entry = &mut self.entries[id];
        if !priority.total_cmp(&entry.priority).is_gt() {
            return Ok(false);
        }
        entry.priority = priority;
        let pos = entry.pos;
        self.sift_up(pos);
        Ok(true)
    }

    fn change_priority(&mut self, key: &K, priority: f64) -> Result<(), QueueError> {
        let &id = self.index.get(key).ok_or(QueueError::KeyNotFound)?;
        let entry = &mut self.entries[id];
        let pos = entry.pos;
        match priority.total_cmp(&entry.priority) {
            Ordering::Greater => {
                entry.priority = priority;
                self.sift_up(pos);
            }
            Ordering::Less => {
                entry.priority = priority;
                self.sift_down(pos);
            }
            Ordering::Equal => {}
        }
        Ok(())
    }

    fn peek(&self) -> Result<(&K, f64), QueueError> {
        let &id = self.heap.first().ok_or(QueueError::Empty)?;
        let entry = &self.entries[id];
        Ok((&entry.key, entry.priority))
    }

    fn extract_first(&mut self) -> Result<K, QueueError> {
        if self.heap.is_empty() {
            return Err(QueueError::Empty);
        }
        let entry = self.remove_at(0)?;
        Ok(entry.key)
    }
}

impl<K, B, S> Default for IndexedPriorityQueue<K, B, S>
where
    K: Hash + Eq + Clone,
    B: TieBreak<K>,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_capacity_and_hasher(0, S::default())
    }
}

impl<K, B, S> Clone for IndexedPriorityQueue<K, B, S>
where
    K: Hash + Eq + Clone,
    B: TieBreak<K>,
    S: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            heap: self.heap.clone(),
            index: self.index.clone(),
            _marker: PhantomData,
        }
    }
}

impl<K, B, S> fmt::Debug for IndexedPriorityQueue<K, B, S>
where
    K: Hash + Eq + Clone + fmt::Debug,
    B: TieBreak<K>,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, B, S> FromIterator<(K, f64)> for IndexedPriorityQueue<K, B, S>
where
    K: Hash + Eq + Clone,
    B: TieBreak<K>,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut queue = Self::with_capacity_and_hasher(iter.size_hint().0, S::default());
        for (key, priority) in iter {
            queue.add_with_priority(key, priority);
        }
        queue
    }
}

impl<K, B, S> Extend<(K, f64)> for IndexedPriorityQueue<K, B, S>
where
    K: Hash + Eq + Clone,
    B: TieBreak<K>,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, f64)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (key, priority) in iter {
            self.add_with_priority(key, priority);
        }
    }
}

impl<'a, K, B, S> IntoIterator for &'a IndexedPriorityQueue<K, B, S>
where
    K: Hash + Eq + Clone,
    B: TieBreak<K>,
    S: BuildHasher,
{
    type Item = (&'a K, f64);
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `(key, priority)` pairs in arbitrary order.
///
/// Created by [`IndexedPriorityQueue::iter`].
pub struct Iter<'a, K> {
    inner: slab::Iter<'a, Entry<K>>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = (&'a K, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let (_, entry) = self.inner.next()?;
        Some((&entry.key, entry.priority))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Iterator over queued keys in arbitrary order.
///
/// Created by [`IndexedPriorityQueue::keys`].
pub struct Keys<'a, K> {
    inner: Iter<'a, K>,
}

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for Keys<'_, K> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}
