//! Indexed priority queue with set semantics.
//!
//! This crate provides a priority queue for workloads that need more than
//! push and pop: membership tests, in-place priority mutation, and removal
//! by key, all without scanning. The motivating consumer is best-first
//! search, where a frontier vertex's tentative score improves while it is
//! still queued.
//!
//! # Design Philosophy
//!
//! `std::collections::BinaryHeap` owns bare values and can only push and
//! pop them:
//!
//! ```text
//! BinaryHeap<T>  - no membership test, no decrease-key, duplicates pile up
//! ```
//!
//! This crate splits the queue into three cooperating parts:
//!
//! ```text
//! entries (Slab)  - owns key/priority pairs, slot index is a stable handle
//! heap (Vec)      - orders handles, best first
//! index (HashMap) - key -> handle, membership in O(1)
//! ```
//!
//! Each entry embeds its own heap position, so a key found through the
//! index reaches its heap slot without searching, and repair walks update
//! positions as they swap. Benefits:
//!
//! - **Set semantics**: each key queued at most once; re-adding is a no-op
//! - **O(1) membership**: `contains` and priority lookups never touch the heap
//! - **O(log n) mutation**: raise or rewrite a queued key's priority in place
//! - **O(log n) removal by key**: not just the current best
//!
//! # Quick Start
//!
//! ```
//! use cairn_collections::{IndexedPriorityQueue, PriorityQueue};
//!
//! let mut queue: IndexedPriorityQueue<&str> = IndexedPriorityQueue::new();
//!
//! queue.add_with_priority("replay", 1.0);
//! queue.add_with_priority("login", 5.0);
//! queue.add_with_priority("logout", 3.0);
//!
//! // Highest priority surfaces first.
//! assert_eq!(queue.peek().unwrap(), (&"login", 5.0));
//!
//! // Raise a queued entry in place.
//! queue.relax(&"replay", 9.0).unwrap();
//! assert_eq!(queue.extract_first().unwrap(), "replay");
//! ```
//!
//! # Operations
//!
//! | Operation | Cost | Notes |
//! |-----------|------|-------|
//! | `add` | O(1) amortized | new keys start at negative infinity |
//! | `contains`, `priority_of` | O(1) | hash lookup only |
//! | `relax`, `change_priority` | O(log n) | in place, no re-insertion |
//! | `peek`, `first_priority` | O(1) | |
//! | `extract_first`, `remove` | O(log n) | |
//!
//! The operation contract lives on the [`PriorityQueue`] trait;
//! [`IndexedPriorityQueue`] is its implementation.
//!
//! # Tie-Breaking
//!
//! Priorities are `f64`, compared under IEEE 754 total order. What happens
//! when two priorities compare equal is a policy choice, made by type
//! parameter: [`KeyOrder`] (the default) surfaces the smaller key first
//! and requires `K: Ord`; [`Unordered`] accepts any key and leaves tie
//! order unspecified. See [`TieBreak`].

#![warn(missing_docs)]

pub mod error;
pub mod indexed;
pub mod order;
pub mod queue;

pub use error::QueueError;
pub use indexed::{IndexedPriorityQueue, Iter, Keys};
pub use order::{KeyOrder, TieBreak, Unordered};
pub use queue::PriorityQueue;
