//! Operation contract for keyed priority queues.
//!
//! A priority queue here is also a set: each key is present at most once,
//! membership is cheap to test, and a queued key's priority can be changed
//! in place without removing and re-inserting it.

use crate::error::QueueError;

/// A set of keys ranked by `f64` priority, highest first.
///
/// # Requirements
///
/// Implementations must provide:
/// - **Set semantics**: a key is present at most once; inserting a present
///   key is a no-op that must not disturb the existing entry
/// - **O(1)** membership tests and priority lookups
/// - **O(log n)** extraction and in-place priority mutation
///
/// Priorities compare under IEEE 754 total order (`f64::total_cmp`), which
/// ranks every value, including infinities and NaN. Newly added keys start
/// at negative infinity, the lowest priority there is, and are raised with
/// [`relax`](PriorityQueue::relax) or
/// [`change_priority`](PriorityQueue::change_priority).
pub trait PriorityQueue<K> {
    /// Returns the number of queued keys.
    fn len(&self) -> usize;

    /// Returns `true` if no keys are queued.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `key` is in the queue.
    fn contains(&self, key: &K) -> bool;

    /// Returns `key`'s current priority, or `None` if it is not queued.
    fn priority_of(&self, key: &K) -> Option<f64>;

    /// Adds `key` at the lowest possible priority.
    ///
    /// Returns `false` without touching the queue if the key is already
    /// present. A new key enters as the last leaf of the heap; since
    /// nothing ranks below its sentinel priority, no repair is needed.
    fn add(&mut self, key: K) -> bool;

    /// Adds `key` and immediately relaxes it to `priority`.
    ///
    /// Equivalent to [`add`](PriorityQueue::add) followed by
    /// [`relax`](PriorityQueue::relax). Returns `false` without touching
    /// the queue, including the existing entry's priority, if the key is
    /// already present.
    fn add_with_priority(&mut self, key: K, priority: f64) -> bool;

    /// Raises `key` to `priority` if that improves on its current value.
    ///
    /// A priority is applied only when strictly greater than the current
    /// one; equal or lower values leave the queue untouched. Returns
    /// whether the new priority was applied.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::KeyNotFound`] if `key` is not queued.
    fn relax(&mut self, key: &K, priority: f64) -> Result<bool, QueueError>;

    /// Sets `key`'s priority to `priority` unconditionally.
    ///
    /// The entry moves up or down as the new value requires.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::KeyNotFound`] if `key` is not queued.
    fn change_priority(&mut self, key: &K, priority: f64) -> Result<(), QueueError>;

    /// Returns the highest-priority key and its priority without removing
    /// it.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] if the queue has no entries.
    fn peek(&self) -> Result<(&K, f64), QueueError>;

    /// Returns the highest priority in the queue without removing its key.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] if the queue has no entries.
    #[inline]
    fn first_priority(&self) -> Result<f64, QueueError> {
        self.peek().map(|(_, priority)| priority)
    }

    /// Removes and returns the highest-priority key.
    ///
    /// The extracted key leaves the membership set; adding it again later
    /// starts a fresh entry at the sentinel priority.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] if the queue has no entries.
    fn extract_first(&mut self) -> Result<K, QueueError>;
}
