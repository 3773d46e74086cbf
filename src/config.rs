//! Serializable sizing parameters, for applications that read sketch sizes
//! from their own configuration files.

use crate::cardinality::hll::HyperLogLog;
use crate::error::Result;
use crate::set_membership::bloom::BloomFilter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloomFilterConfig {
    pub size: usize,
    pub num_hashes: usize,
}

impl Default for BloomFilterConfig {
    fn default() -> Self {
        Self {
            size: 1000,
            num_hashes: 5,
        }
    }
}

impl BloomFilterConfig {
    pub fn build(&self) -> Result<BloomFilter> {
        BloomFilter::new(self.size, self.num_hashes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HyperLogLogConfig {
    pub precision: u8,
}

impl Default for HyperLogLogConfig {
    fn default() -> Self {
        Self { precision: 12 }
    }
}

impl HyperLogLogConfig {
    pub fn build(&self) -> Result<HyperLogLog> {
        HyperLogLog::new(self.precision)
    }
}
