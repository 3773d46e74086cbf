use crate::set_membership::SetMembership;
use std::collections::HashSet;
use std::hash::BuildHasher;

/// Exact membership, useful as a baseline when measuring false positives.
impl<S> SetMembership for HashSet<Vec<u8>, S>
where
    S: BuildHasher,
{
    fn add(&mut self, item: &[u8]) {
        if !HashSet::contains(self, item) {
            self.insert(item.to_vec());
        }
    }

    fn contains(&self, item: &[u8]) -> bool {
        HashSet::contains(self, item)
    }
}
