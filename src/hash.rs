//! Salted 64-bit hashing shared by both sketches.
//!
//! Every sketch derives its indices from [`salted_hash`], which feeds the
//! little-endian salt followed by the item bytes into a single hasher. With
//! [`DefaultBuildHasher`] (XXH64, seed 0) the result is identical across runs
//! and platforms. All bit arithmetic downstream assumes [`HASH_BITS`] wide
//! values.

use std::hash::{BuildHasher, BuildHasherDefault, Hasher};
use twox_hash::XxHash64;

pub type DefaultBuildHasher = BuildHasherDefault<XxHash64>;

pub const HASH_BITS: u32 = u64::BITS;

pub fn salted_hash<H>(build_hasher: &H, item: &[u8], salt: u64) -> u64
where
    H: BuildHasher,
{
    let mut hasher = build_hasher.build_hasher();
    hasher.write(&salt.to_le_bytes());
    hasher.write(item);
    hasher.finish()
}

/// Yields `num_hashes` indices in `[0, modulus)`, one per salt `0..num_hashes`.
pub(crate) fn iter_indices<'a, H>(
    item: &'a [u8],
    modulus: usize,
    num_hashes: usize,
    build_hasher: &'a H,
) -> impl Iterator<Item = usize> + 'a
where
    H: BuildHasher,
{
    (0..num_hashes as u64)
        .map(move |salt| (salted_hash(build_hasher, item, salt) % modulus as u64) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let a = DefaultBuildHasher::default();
        let b = DefaultBuildHasher::default();

        for item in [&b""[..], b"a", b"192.168.0.1"] {
            for salt in 0..4 {
                assert_eq!(salted_hash(&a, item, salt), salted_hash(&b, item, salt));
            }
        }
    }

    #[test]
    fn test_salt_changes_hash() {
        let build_hasher = DefaultBuildHasher::default();
        let hashes = (0..16)
            .map(|salt| salted_hash(&build_hasher, b"item", salt))
            .collect::<std::collections::HashSet<_>>();

        assert_eq!(hashes.len(), 16);
    }

    #[test]
    fn test_salt_then_item() {
        let build_hasher = DefaultBuildHasher::default();
        let mut concatenated = 7u64.to_le_bytes().to_vec();
        concatenated.extend_from_slice(b"item");

        let mut hasher = build_hasher.build_hasher();
        hasher.write(&concatenated);

        assert_eq!(salted_hash(&build_hasher, b"item", 7), hasher.finish());
    }

    #[test]
    fn test_empty_item() {
        let build_hasher = DefaultBuildHasher::default();

        assert_eq!(
            salted_hash(&build_hasher, b"", 0),
            salted_hash(&build_hasher, b"", 0)
        );
        assert_ne!(
            salted_hash(&build_hasher, b"", 0),
            salted_hash(&build_hasher, b"", 1)
        );
    }

    #[test]
    fn test_iter_indices_in_range() {
        let build_hasher = DefaultBuildHasher::default();
        let indices = iter_indices(b"item", 13, 7, &build_hasher).collect::<Vec<_>>();

        assert_eq!(indices.len(), 7);
        assert!(indices.iter().all(|&i| i < 13));
    }
}
