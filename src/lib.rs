//! probemap: a string-keyed hash map built on open addressing with double
//! hashing.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small, deterministic map from owned string keys to values,
//!   with every structural mechanism (hashing, probing, growth) explicit
//!   and separately testable.
//! - Layers:
//!   - hash: fixed-seed 64-bit byte-string hash. The seed is a compile-time
//!     constant, so a key's probe sequence is reproducible across runs and
//!     independent of insertion order.
//!   - probe: double-hashing probe sequences. The starting index comes from
//!     the low hash bits, the stride from the high bits forced odd; an odd
//!     stride over a power-of-two slot count visits every slot once per
//!     cycle.
//!   - map: `ProbeMap<V>`, the slot array plus insert/lookup/remove/growth
//!     logic and the borrowing iterators.
//!
//! Constraints
//! - Keys are text strings; the map owns one `String` copy per entry, made
//!   on first insert and reused on update.
//! - Slot count is a power of two, at least 16, and only ever doubles; the
//!   table never shrinks.
//! - At most half the slots are in use (occupied or tombstone). Growth runs
//!   eagerly before an insert would cross that line, which is what bounds
//!   probe lengths and guarantees probing terminates at an empty slot.
//! - Removal leaves a tombstone so probe chains through the freed slot stay
//!   intact; growth rehashes occupied entries only and drops tombstones.
//! - Each entry stores its precomputed `u64` hash; growth re-places entries
//!   by stored hash and never re-reads key bytes.
//!
//! Failure boundaries
//! - Growing the slot array and copying a key are the only fallible
//!   operations; both report allocation failure as `InsertError` and leave
//!   the map valid. Absent keys are `None`, not errors. Nothing panics in
//!   library code.
//!
//! Notes and non-goals
//! - Single-threaded use is the design point. There is no internal locking
//!   and no interior mutability; `&mut` exclusivity is the only mutual
//!   exclusion, and the auto traits follow from the owned data.
//! - Iterators borrow the map, so structural mutation during iteration is
//!   a compile error rather than a documented hazard.
//! - No persistence, no custom allocator, no non-string keys.

mod hash;
mod map;
mod map_proptest;
mod probe;

// Public surface
pub use map::{InsertError, Iter, IterMut, ProbeMap};
