use crate::{CodecError, Result, Weight};
use std::collections::BTreeMap;

/// Stacks of values indexed by weight.
///
/// Every key present in the map has a non-empty stack, popping the last value of a stack removes the
/// key. Within one weight values are returned LIFO, so the most recently added value of the smallest
/// weight is returned first by `pop_min`.
#[derive(Debug, Clone)]
pub struct BucketMultimap<V> {
    buckets: BTreeMap<Weight, Vec<V>>,
    /// total number of values over all buckets
    size: usize,
}

impl<V> Default for BucketMultimap<V> {
    fn default() -> Self {
        BucketMultimap {
            buckets: BTreeMap::new(),
            size: 0,
        }
    }
}

impl<V> BucketMultimap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// pushes `value` onto the stack of `key`
    pub fn add(&mut self, key: Weight, value: V) {
        self.buckets.entry(key).or_insert_with(Vec::new).push(value);
        self.size += 1;
    }

    /// removes and returns the top of the stack of `key`
    pub fn pop(&mut self, key: Weight) -> Result<V> {
        let stack = self
            .buckets
            .get_mut(&key)
            .ok_or(CodecError::NotFound { key })?;
        let value = stack.pop().ok_or(CodecError::NotFound { key })?;
        if stack.is_empty() {
            self.buckets.remove(&key);
        }
        self.size -= 1;
        Ok(value)
    }

    /// smallest key currently present
    pub fn min_key(&self) -> Result<Weight> {
        self.buckets
            .keys()
            .next()
            .copied()
            .ok_or(CodecError::Empty)
    }

    /// pops from the stack with the smallest key
    pub fn pop_min(&mut self) -> Result<(Weight, V)> {
        let key = self.min_key()?;
        let value = self.pop(key)?;
        Ok((key, value))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// true if exactly one value is left over all buckets
    #[inline]
    pub fn is_singleton(&self) -> bool {
        self.size == 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// number of distinct keys
    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }
}
