//! Approximate stream summaries: a Bloom filter for set membership and a
//! HyperLogLog for distinct counts.
//!
//! Both sketches hash items as byte strings through [`hash::salted_hash`] and
//! are sized once at construction. Neither performs internal locking; `add`
//! takes `&mut self`, so shared population needs a `Mutex` or per-thread
//! sketches combined with `merge`.

pub mod cardinality;
pub mod config;
pub mod error;
pub mod hash;
mod numeric;
pub mod set_membership;

pub use cardinality::hll::HyperLogLog;
pub use cardinality::Cardinality;
pub use error::{Result, SketchError};
pub use set_membership::bloom::BloomFilter;
pub use set_membership::SetMembership;
