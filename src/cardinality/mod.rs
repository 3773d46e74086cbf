pub mod hash_set;
pub mod hll;

/// Estimates the number of distinct items added.
pub trait Cardinality {
    fn add(&mut self, item: &[u8]);
    fn count(&self) -> u64;
}
