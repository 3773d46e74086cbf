use crate::error::{Result, SketchError};
use crate::hash::{iter_indices, DefaultBuildHasher};
use crate::set_membership::SetMembership;
use fixedbitset::FixedBitSet;
use std::f64::consts::LN_2;
use std::fmt::{Debug, Formatter};
use std::hash::BuildHasher;
use tracing::{debug, trace};

/// Bloom filter over byte strings.
///
/// Each item sets `num_hashes` bits, chosen by hashing the item with the salts
/// `0..num_hashes` modulo the bit-vector size. Bits are never cleared, so an
/// added item is always reported as present. Items never added may be reported
/// as present with probability `(1 - e^(-kn/m))^k`.
#[derive(Clone)]
pub struct BloomFilter<H = DefaultBuildHasher> {
    bits: FixedBitSet,
    num_hashes: usize,
    build_hasher: H,
}

impl BloomFilter {
    pub fn new(size: usize, num_hashes: usize) -> Result<Self> {
        Self::with_hasher(size, num_hashes, DefaultBuildHasher::default())
    }

    /// Sizes the filter for `num_items` distinct items at a target false
    /// positive `probability`.
    pub fn with_probability(num_items: usize, probability: f64) -> Result<Self> {
        Self::with_probability_and_hasher(num_items, probability, DefaultBuildHasher::default())
    }
}

impl<H> BloomFilter<H> {
    pub fn with_hasher(size: usize, num_hashes: usize, build_hasher: H) -> Result<Self> {
        if size == 0 {
            return Err(SketchError::invalid_configuration("size must be > 0"));
        }
        if num_hashes == 0 {
            return Err(SketchError::invalid_configuration("num_hashes must be > 0"));
        }
        debug!(size, num_hashes, "created bloom filter");
        Ok(Self {
            bits: FixedBitSet::with_capacity(size),
            num_hashes,
            build_hasher,
        })
    }

    pub fn with_probability_and_hasher(
        num_items: usize,
        probability: f64,
        build_hasher: H,
    ) -> Result<Self> {
        if num_items == 0 {
            return Err(SketchError::invalid_configuration("num_items must be > 0"));
        }
        if !(0. < probability && probability < 1.) {
            return Err(SketchError::invalid_configuration(
                "probability must be in the range (0, 1)",
            ));
        }
        let n = num_items as f64;
        let optimal_size = (-n * probability.ln() / (LN_2 * LN_2)).ceil();
        if !(optimal_size.is_finite() && optimal_size <= (usize::MAX / 2) as f64) {
            return Err(SketchError::invalid_configuration(
                "num_items and probability need too many bits",
            ));
        }
        let size = optimal_size as usize;
        let num_hashes = ((size as f64 / n * LN_2).round() as usize).max(1);
        debug!(num_items, probability, size, num_hashes, "sized bloom filter");
        Self::with_hasher(size, num_hashes, build_hasher)
    }

    pub fn size(&self) -> usize {
        self.bits.len()
    }

    pub fn num_hashes(&self) -> usize {
        self.num_hashes
    }

    /// Read-only view of the bit vector, for callers that persist filters.
    pub fn bit_vector(&self) -> &FixedBitSet {
        &self.bits
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// True until the first `add`.
    pub fn is_empty(&self) -> bool {
        self.count_ones() == 0
    }

    /// Estimated number of distinct items added, from the fraction of set bits.
    ///
    /// Saturates at `usize::MAX` once every bit is set.
    pub fn estimated_len(&self) -> usize {
        let m = self.bits.len() as f64;
        let k = self.num_hashes as f64;
        let ones = self.count_ones() as f64;
        (-m / k * (1. - ones / m).ln()) as usize
    }

    /// Expected false positive rate after `num_items` distinct items.
    pub fn false_positive_rate(&self, num_items: usize) -> f64 {
        let m = self.bits.len() as f64;
        let k = self.num_hashes as f64;
        let n = num_items as f64;
        (1. - (-k * n / m).exp()).powf(k)
    }

    /// Unions `other` into `self`.
    ///
    /// Both filters must share size, hash count and hasher, otherwise the same
    /// item maps to different bits.
    pub fn merge(&mut self, other: &Self) -> Result<()> {
        if self.bits.len() != other.bits.len() {
            return Err(SketchError::incompatible_merge("size differs"));
        }
        if self.num_hashes != other.num_hashes {
            return Err(SketchError::incompatible_merge("num_hashes differs"));
        }
        self.bits.union_with(&other.bits);
        trace!(ones = self.count_ones(), "merged bloom filter");
        Ok(())
    }
}

impl<H> BloomFilter<H>
where
    H: BuildHasher,
{
    pub fn add(&mut self, item: &[u8]) {
        for index in iter_indices(item, self.bits.len(), self.num_hashes, &self.build_hasher) {
            self.bits.insert(index);
        }
    }

    pub fn contains(&self, item: &[u8]) -> bool {
        iter_indices(item, self.bits.len(), self.num_hashes, &self.build_hasher)
            .all(|index| self.bits.contains(index))
    }
}

impl<H> SetMembership for BloomFilter<H>
where
    H: BuildHasher,
{
    fn add(&mut self, item: &[u8]) {
        BloomFilter::add(self, item)
    }

    fn contains(&self, item: &[u8]) -> bool {
        BloomFilter::contains(self, item)
    }
}

impl<H> Debug for BloomFilter<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BloomFilter {{ size: {}, num_hashes: {} }}",
            self.bits.len(),
            self.num_hashes
        )
    }
}
