use crate::cardinality::Cardinality;
use crate::error::{Result, SketchError};
use crate::hash::{salted_hash, DefaultBuildHasher, HASH_BITS};
use crate::numeric::{alpha, rank};
use std::fmt::{Debug, Formatter};
use std::hash::BuildHasher;
use tracing::{debug, trace};

/// Largest precision that still leaves one rank bit of the 64-bit hash.
pub const MAX_PRECISION: u8 = (HASH_BITS - 1) as u8;

const HLL_SALT: u64 = 0;

/// HyperLogLog distinct counter over byte strings.
///
/// The low `precision` bits of the 64-bit item hash select a register and the
/// remaining bits supply the rank. [`count`](Self::count) returns the raw
/// harmonic-mean estimate without small- or large-range corrections, with a
/// relative standard error of about `1.04 / sqrt(2^precision)`.
#[derive(Clone)]
pub struct HyperLogLog<H = DefaultBuildHasher> {
    registers: Registers,
    precision: u8,
    build_hasher: H,
}

impl HyperLogLog {
    pub fn new(precision: u8) -> Result<Self> {
        Self::with_hasher(precision, DefaultBuildHasher::default())
    }

    /// Picks the smallest precision whose standard error is at most `epsilon`.
    pub fn with_error(epsilon: f64) -> Result<Self> {
        Self::with_error_and_hasher(epsilon, DefaultBuildHasher::default())
    }
}

impl<H> HyperLogLog<H> {
    pub fn with_hasher(precision: u8, build_hasher: H) -> Result<Self> {
        if precision == 0 {
            return Err(SketchError::invalid_configuration("precision must be > 0"));
        }
        if precision > MAX_PRECISION {
            return Err(SketchError::invalid_configuration(
                "precision must be < 64",
            ));
        }
        let count = 1usize
            .checked_shl(precision as u32)
            .ok_or_else(|| SketchError::invalid_configuration("register table too large"))?;
        let registers = Registers::new(count)?;
        debug!(precision, registers = count, "created hyperloglog");
        Ok(Self {
            registers,
            precision,
            build_hasher,
        })
    }

    pub fn with_error_and_hasher(epsilon: f64, build_hasher: H) -> Result<Self> {
        if !(0. < epsilon && epsilon < 1.) {
            return Err(SketchError::invalid_configuration(
                "epsilon must be in the range (0, 1)",
            ));
        }
        let m = (1.04 / epsilon).powi(2);
        let precision = m.log2().ceil().clamp(1., u8::MAX as f64) as u8;
        debug!(epsilon, precision, "sized hyperloglog");
        Self::with_hasher(precision, build_hasher)
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn register_count(&self) -> usize {
        self.registers.count()
    }

    /// Read-only view of the registers, for callers that persist sketches.
    pub fn registers(&self) -> &[u8] {
        self.registers.as_slice()
    }

    pub fn relative_error(&self) -> f64 {
        1.04 / (self.registers.count() as f64).sqrt()
    }

    /// True until the first `add`.
    pub fn is_empty(&self) -> bool {
        self.registers.iter().all(|register| register == 0)
    }

    pub fn count(&self) -> u64 {
        let m = self.registers.count() as f64;
        let z: f64 = self
            .registers
            .iter()
            .map(|register| 2f64.powi(-(register as i32)))
            .sum();
        (alpha(self.registers.count()) * m * m / z).floor() as u64
    }

    /// Takes the register-wise maximum of `self` and `other`.
    pub fn merge(&mut self, other: &Self) -> Result<()> {
        if self.precision != other.precision {
            return Err(SketchError::incompatible_merge("precision differs"));
        }
        self.registers.merge(&other.registers);
        trace!(precision = self.precision, "merged hyperloglog");
        Ok(())
    }
}

impl<H> HyperLogLog<H>
where
    H: BuildHasher,
{
    pub fn add(&mut self, item: &[u8]) {
        let hash = salted_hash(&self.build_hasher, item, HLL_SALT);
        let index = (hash & (self.registers.count() as u64 - 1)) as usize;
        let remainder = hash >> self.precision;
        self.registers
            .update_max(index, rank(remainder, HASH_BITS - self.precision as u32));
    }
}

impl<H> Cardinality for HyperLogLog<H>
where
    H: BuildHasher,
{
    fn add(&mut self, item: &[u8]) {
        HyperLogLog::add(self, item)
    }

    fn count(&self) -> u64 {
        HyperLogLog::count(self)
    }
}

impl<H> Debug for HyperLogLog<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "HyperLogLog {{ precision: {} }}", self.precision)
    }
}

#[derive(Clone, PartialEq, Eq)]
struct Registers {
    buf: Vec<u8>,
}

impl Registers {
    fn new(count: usize) -> Result<Self> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(count)
            .map_err(|_| SketchError::invalid_configuration("register table too large"))?;
        buf.resize(count, 0);
        Ok(Self { buf })
    }

    fn count(&self) -> usize {
        self.buf.len()
    }

    fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.buf.iter().copied()
    }

    fn update_max(&mut self, index: usize, value: u8) {
        let current = &mut self.buf[index];
        if value > *current {
            *current = value;
        }
    }

    fn merge(&mut self, other: &Self) {
        debug_assert_eq!(self.count(), other.count(), "register count mismatch");
        for (register, &value) in self.buf.iter_mut().zip(&other.buf) {
            *register = (*register).max(value);
        }
    }
}
