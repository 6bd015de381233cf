//! Primitive arbitraries.

use crate::{arbitrary::Arbitrary, error::*};
use rand::{Rng, RngCore};

/// Integers drawn uniformly from an inclusive range.
///
/// Shrinks move toward the nearest of the two bounds and zero (when the range
/// contains it). Candidates never leave the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedInt {
    low: i32,
    high: i32,
}

impl BoundedInt {
    /// Integers in `[low, high]`.
    pub fn new(low: i32, high: i32) -> Result<Self> {
        if low > high {
            return Err(GenerativeError::invalid_configuration(format!(
                "lower bound {low} exceeds upper bound {high}"
            )));
        }
        Ok(BoundedInt { low, high })
    }

    /// Any `i32`.
    pub fn any() -> Self {
        BoundedInt {
            low: i32::MIN,
            high: i32::MAX,
        }
    }

    /// Integers in `[1, bound - 1]`.
    pub fn positive_less_than(bound: i32) -> Result<Self> {
        if bound <= 1 {
            return Err(GenerativeError::invalid_configuration(format!(
                "no positive integer is less than {bound}"
            )));
        }
        BoundedInt::new(1, bound - 1)
    }

    /// Inclusive lower bound.
    pub fn low(&self) -> i32 {
        self.low
    }

    /// Inclusive upper bound.
    pub fn high(&self) -> i32 {
        self.high
    }

    /// The point `value` shrinks toward: whichever of the bounds, or zero
    /// when the range holds it, lies closest. Ties go to zero, then `low`.
    pub fn shrink_target(&self, value: i32) -> i32 {
        let zero = (self.low <= 0 && 0 <= self.high).then_some(0);
        zero.into_iter()
            .chain([self.low, self.high])
            .min_by_key(|&target| (value as i64 - target as i64).abs())
            .unwrap_or(self.low)
    }

    fn contains(&self, value: i32) -> bool {
        self.low <= value && value <= self.high
    }
}

impl Arbitrary for BoundedInt {
    type Value = i32;

    fn get(&self, rng: &mut dyn RngCore) -> i32 {
        rng.gen_range(self.low..=self.high)
    }

    fn shrink(&self, value: &i32) -> Vec<i32> {
        if !self.contains(*value) {
            return Vec::new();
        }
        // Candidates lie between target and value, so the casts are lossless.
        towards(self.shrink_target(*value) as i64, *value as i64)
            .into_iter()
            .map(|candidate| candidate as i32)
            .collect()
    }

    fn accepts(&self, value: &i32) -> bool {
        self.contains(*value)
    }
}

/// Byte vectors whose length is drawn uniformly from an inclusive range.
///
/// Shrinks first try shorter prefixes, then simpler bytes at the same length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteArray {
    min_len: usize,
    max_len: usize,
}

impl ByteArray {
    /// Byte vectors with a length in `[min_len, max_len]`.
    pub fn new(min_len: usize, max_len: usize) -> Result<Self> {
        if min_len > max_len {
            return Err(GenerativeError::invalid_configuration(format!(
                "minimum length {min_len} exceeds maximum length {max_len}"
            )));
        }
        Ok(ByteArray { min_len, max_len })
    }

    /// Byte vectors of any length up to and including `max_len`.
    pub fn up_to(max_len: usize) -> Self {
        ByteArray { min_len: 0, max_len }
    }

    /// Byte vectors of exactly `len` bytes.
    pub fn of_length(len: usize) -> Self {
        ByteArray {
            min_len: len,
            max_len: len,
        }
    }

    /// Shortest length produced.
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Longest length produced.
    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

impl Arbitrary for ByteArray {
    type Value = Vec<u8>;

    fn get(&self, rng: &mut dyn RngCore) -> Vec<u8> {
        let len = rng.gen_range(self.min_len..=self.max_len);
        let mut bytes = vec![0u8; len];
        rng.fill_bytes(&mut bytes);
        bytes
    }

    fn shrink(&self, value: &Vec<u8>) -> Vec<Vec<u8>> {
        if !self.accepts(value) {
            return Vec::new();
        }

        let mut candidates: Vec<Vec<u8>> = towards(self.min_len as i64, value.len() as i64)
            .into_iter()
            .map(|len| value[..len as usize].to_vec())
            .collect();

        for (index, &byte) in value.iter().enumerate() {
            if byte == 0 {
                continue;
            }
            let mut zeroed = value.clone();
            zeroed[index] = 0;
            candidates.push(zeroed);

            if byte > 1 {
                let mut halved = value.clone();
                halved[index] = byte / 2;
                candidates.push(halved);
            }
        }

        candidates
    }

    fn accepts(&self, value: &Vec<u8>) -> bool {
        (self.min_len..=self.max_len).contains(&value.len())
    }
}

/// Always the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant<T> {
    value: T,
}

impl<T: Clone> Constant<T> {
    pub fn new(value: T) -> Self {
        Constant { value }
    }
}

impl<T: Clone + PartialEq> Arbitrary for Constant<T> {
    type Value = T;

    fn get(&self, _rng: &mut dyn RngCore) -> T {
        self.value.clone()
    }

    fn accepts(&self, value: &T) -> bool {
        *value == self.value
    }
}

/// Fixed-length vectors of values from an element arbitrary.
///
/// Shrinking substitutes one element at a time with each of its own shrinks.
#[derive(Debug, Clone)]
pub struct ListOf<A> {
    element: A,
    length: usize,
}

impl<A: Arbitrary> ListOf<A> {
    pub fn new(element: A, length: usize) -> Self {
        ListOf { element, length }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl<A> Arbitrary for ListOf<A>
where
    A: Arbitrary,
    A::Value: Clone,
{
    type Value = Vec<A::Value>;

    fn get(&self, rng: &mut dyn RngCore) -> Vec<A::Value> {
        (0..self.length).map(|_| self.element.get(rng)).collect()
    }

    fn shrink(&self, value: &Vec<A::Value>) -> Vec<Vec<A::Value>> {
        let mut candidates = Vec::new();
        for (index, item) in value.iter().enumerate() {
            for smaller in self.element.shrink(item) {
                let mut candidate = value.clone();
                candidate[index] = smaller;
                candidates.push(candidate);
            }
        }
        candidates
    }

    fn accepts(&self, value: &Vec<A::Value>) -> bool {
        value.len() == self.length && value.iter().all(|item| self.element.accepts(item))
    }
}

/// Points between `destination` and `value`, each halving the remaining
/// distance back toward `value`: `destination, ..., value - 1`.
fn towards(destination: i64, value: i64) -> Vec<i64> {
    if destination == value {
        return Vec::new();
    }
    std::iter::successors(Some(value - destination), |&diff| Some(diff / 2))
        .take_while(|&diff| diff != 0)
        .map(|diff| value - diff)
        .collect()
}
