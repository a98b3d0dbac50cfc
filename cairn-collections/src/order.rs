//! Tie-break policies for equal-priority entries.
//!
//! The queue orders entries by priority alone. A tie-break policy only
//! steers repair walks when two priorities compare exactly equal, so the
//! choice of policy never changes which priorities surface, only which of
//! several equally ranked keys surfaces first.

use std::cmp::Ordering;

/// Decides which of two equal-priority keys surfaces first.
///
/// Selected as a type parameter on the queue, so the decision costs nothing
/// when ties are left unresolved.
///
/// # Example
///
/// ```
/// use cairn_collections::{IndexedPriorityQueue, PriorityQueue, KeyOrder};
///
/// let mut queue: IndexedPriorityQueue<&str, KeyOrder> = IndexedPriorityQueue::new();
/// queue.add_with_priority("beta", 1.0);
/// queue.add_with_priority("alpha", 1.0);
///
/// // Equal priorities, so the key order decides.
/// assert_eq!(queue.extract_first().unwrap(), "alpha");
/// assert_eq!(queue.extract_first().unwrap(), "beta");
/// ```
pub trait TieBreak<K> {
    /// Returns `Less` if `a` should surface before `b`, `Greater` for the
    /// reverse, `Equal` to leave the tie unresolved.
    fn tie_break(a: &K, b: &K) -> Ordering;
}

/// Breaks ties by the key's own total order, smaller key first.
///
/// This is the default policy. It requires `K: Ord` and makes extraction
/// order fully deterministic.
#[derive(Debug, Clone, Copy)]
pub struct KeyOrder;

impl<K: Ord> TieBreak<K> for KeyOrder {
    #[inline]
    fn tie_break(a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Leaves ties unresolved.
///
/// Equal-priority entries surface in an unspecified order. Use this when
/// keys have no total order, or when determinism among ties is not worth
/// the comparison.
#[derive(Debug, Clone, Copy)]
pub struct Unordered;

impl<K> TieBreak<K> for Unordered {
    #[inline]
    fn tie_break(_a: &K, _b: &K) -> Ordering {
        Ordering::Equal
    }
}
