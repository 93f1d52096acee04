//! Priority key structures: a collection of values with accumulating
//! non-negative keys, supporting `increment` and `pop_max`.
//!
//! Two backends satisfy the same [`PriorityQueue`] contract so the ordering
//! engine never branches on which one it holds: [`BucketQueue`] for
//! unweighted hypergraphs (unit increments only, O(1) amortized `pop_max`)
//! and [`HeapQueue`] for weighted ones (arbitrary positive increments,
//! O(log n) `increment`).
//!
//! Both are deterministic in the sense required by the ordering engine:
//! repeating the same sequence of operations on the same backend yields the
//! same `pop_max` sequence. Ties between equal keys are broken arbitrarily
//! but consistently within one run.

use ahash::AHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::VertexId;

pub trait PriorityQueue {
    fn increment(&mut self, value: VertexId, amount: f64);
    fn pop_max(&mut self) -> Option<(VertexId, f64)>;
    fn is_empty(&self) -> bool;
}

/// Bucket-array backend for unit-weight increments.
///
/// `max_key` only ever decreases inside `pop_max` (scanning down past empty
/// buckets) and increases on `increment` when a new, higher bucket becomes
/// populated; `pop_max` is therefore amortized O(1) and worst case O(capacity).
pub struct BucketQueue {
    buckets: Vec<Vec<VertexId>>,
    key: AHashMap<VertexId, usize>,
    max_key: usize,
}

impl BucketQueue {
    /// `capacity` should be at least the number of increments any single
    /// value can receive (e.g. the hypergraph's rank for KW).
    pub fn new(values: &[VertexId], capacity: usize) -> Self {
        let mut buckets = vec![Vec::new()];
        buckets.resize_with(capacity + 1, Vec::new);
        let mut key = AHashMap::with_capacity(values.len());
        for &v in values {
            buckets[0].push(v);
            key.insert(v, 0);
        }
        Self { buckets, key, max_key: 0 }
    }

    fn grow_to(&mut self, bucket: usize) {
        if bucket >= self.buckets.len() {
            self.buckets.resize_with(bucket + 1, Vec::new);
        }
    }
}

impl PriorityQueue for BucketQueue {
    fn increment(&mut self, value: VertexId, amount: f64) {
        debug_assert!(amount >= 0.0 && amount.fract() == 0.0, "bucket queue only supports unit increments");
        let amount = amount as usize;
        let Some(&current) = self.key.get(&value) else { return };

        if let Some(pos) = self.buckets[current].iter().position(|&v| v == value) {
            self.buckets[current].swap_remove(pos);
        }

        let next = current + amount;
        self.grow_to(next);
        self.buckets[next].push(value);
        self.key.insert(value, next);
        if next > self.max_key {
            self.max_key = next;
        }
    }

    fn pop_max(&mut self) -> Option<(VertexId, f64)> {
        while self.max_key > 0 && self.buckets[self.max_key].is_empty() {
            self.max_key -= 1;
        }
        let top = &mut self.buckets[self.max_key];
        let value = top.pop()?;
        self.key.remove(&value);
        Some((value, self.max_key as f64))
    }

    fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

struct HeapEntry {
    key: f64,
    version: u64,
    value: VertexId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}
impl Eq for HeapEntry {}
impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.partial_cmp(&other.key).unwrap_or(Ordering::Equal)
    }
}

/// Max-heap backend for arbitrary positive-weight increments.
///
/// `increment` pushes a fresh heap entry rather than adjusting one in
/// place (a binary heap offers no decrease/increase-key); `pop_max` lazily
/// discards entries whose `version` no longer matches the value's latest
/// known version, which is the standard lazy-deletion trick for a heap
/// without an index back into its own storage.
pub struct HeapQueue {
    heap: BinaryHeap<HeapEntry>,
    current: AHashMap<VertexId, (f64, u64)>,
}

impl HeapQueue {
    pub fn new(values: &[VertexId], _capacity: usize) -> Self {
        let mut heap = BinaryHeap::with_capacity(values.len());
        let mut current = AHashMap::with_capacity(values.len());
        for &v in values {
            heap.push(HeapEntry { key: 0.0, version: 0, value: v });
            current.insert(v, (0.0, 0));
        }
        Self { heap, current }
    }
}

impl PriorityQueue for HeapQueue {
    fn increment(&mut self, value: VertexId, amount: f64) {
        let Some((key, version)) = self.current.get_mut(&value) else { return };
        *key += amount;
        *version += 1;
        self.heap.push(HeapEntry { key: *key, version: *version, value });
    }

    fn pop_max(&mut self) -> Option<(VertexId, f64)> {
        while let Some(top) = self.heap.pop() {
            if let Some(&(key, version)) = self.current.get(&top.value) {
                if version == top.version {
                    self.current.remove(&top.value);
                    return Some((top.value, key));
                }
            }
        }
        None
    }

    fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}
