pub mod bloom;
pub mod hash_set;

/// Answers "was this item possibly added?".
pub trait SetMembership {
    fn add(&mut self, item: &[u8]);
    fn contains(&self, item: &[u8]) -> bool;
}
