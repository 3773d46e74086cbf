use crate::cardinality::Cardinality;
use std::collections::HashSet;
use std::hash::BuildHasher;

/// Exact distinct count, the baseline a sketch estimate is compared against.
impl<S> Cardinality for HashSet<Vec<u8>, S>
where
    S: BuildHasher,
{
    fn add(&mut self, item: &[u8]) {
        if !self.contains(item) {
            self.insert(item.to_vec());
        }
    }

    fn count(&self) -> u64 {
        self.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact() {
        let mut set = HashSet::<Vec<u8>>::new();
        for i in 0..100 {
            Cardinality::add(&mut set, format!("item-{}", i % 10).as_bytes());
        }

        assert_eq!(Cardinality::count(&set), 10);
    }
}
