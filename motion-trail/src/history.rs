//! Fixed-capacity sample history.
//!
//! A ring buffer indexed by a head offset and a length. Pushing into a full
//! buffer overwrites the oldest slot, so eviction is O(1). Iteration always
//! runs oldest first.
//!
//! ```text
//!  capacity = 4, after pushing a b c d e:
//!
//!  slots: [ e | b | c | d ]
//!                ^ head (oldest)
//!  iter:  b c d e
//! ```

use crate::point::TrailPoint;

/// Bounded, oldest-first store of recent samples.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    slots: Vec<TrailPoint>,
    capacity: usize,
    /// Index of the oldest sample in `slots`.
    head: usize,
    len: usize,
}

impl HistoryBuffer {
    /// Create an empty buffer holding at most `capacity` samples.
    ///
    /// A capacity of 0 never stores anything. Slots are allocated as samples
    /// arrive, so a huge capacity costs nothing up front.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            capacity,
            head: 0,
            len: 0,
        }
    }

    /// Append a sample, evicting and returning the oldest one if the buffer is full.
    ///
    /// With a capacity of 0 the sample itself is returned.
    pub fn push(&mut self, point: TrailPoint) -> Option<TrailPoint> {
        if self.capacity == 0 {
            return Some(point);
        }

        if self.len < self.capacity {
            let idx = (self.head + self.len) % self.capacity;
            if idx == self.slots.len() {
                self.slots.push(point);
            } else {
                self.slots[idx] = point;
            }
            self.len += 1;
            return None;
        }

        let evicted = std::mem::replace(&mut self.slots[self.head], point);
        self.head = (self.head + 1) % self.capacity;
        Some(evicted)
    }

    /// Remove every sample.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = 0;
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Sample at logical position `index` (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&TrailPoint> {
        if index >= self.len {
            return None;
        }
        self.slots.get((self.head + index) % self.capacity)
    }

    /// Oldest sample (the tail of the trail).
    pub fn oldest(&self) -> Option<&TrailPoint> {
        self.get(0)
    }

    /// Newest sample (the head of the trail).
    pub fn newest(&self) -> Option<&TrailPoint> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterate samples oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> + '_ {
        (0..self.len).filter_map(move |i| self.get(i))
    }

    /// Iterate adjacent `(older, newer)` pairs, oldest pair first.
    pub fn pairs(&self) -> impl Iterator<Item = (&TrailPoint, &TrailPoint)> + '_ {
        self.iter().zip(self.iter().skip(1))
    }

    /// Copy the samples out, oldest first.
    pub fn to_vec(&self) -> Vec<TrailPoint> {
        self.iter().copied().collect()
    }
}
