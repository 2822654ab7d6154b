//! Priority queue of tentative distances for dijkstra searches over dense matrix indices.

use crate::types::*;

const NOT_QUEUED: usize = usize::MAX;

/// a matrix index together with its tentative distance
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QueueEntry {
    pub distance: Distance,
    pub node_index: usize,
}

impl QueueEntry {

    // equal distances are settled by the smaller index first, which keeps searches deterministic
    fn key(&self) -> (Distance, usize) {
        (self.distance, self.node_index)
    }
}

/// binary min heap keyed by distance. every matrix index in 0..num_indices is queued at most
/// once, pushing a queued index again only ever lowers its distance.
///
/// indices outside of 0..num_indices panic like slice indexing does
#[derive(Clone, Debug)]
pub struct DistanceQueue {
    entries: Vec<QueueEntry>,
    positions: Vec<usize>,
}

impl DistanceQueue {

    pub fn new(num_indices: usize) -> Self {
        DistanceQueue {
            entries: Vec::with_capacity(num_indices),
            positions: vec![NOT_QUEUED; num_indices],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, node_index: usize) -> bool {
        self.positions[node_index] != NOT_QUEUED
    }

    /// tentative distance of a queued index
    pub fn queued_distance(&self, node_index: usize) -> Option<Distance> {
        match self.positions[node_index] {
            NOT_QUEUED => None,
            position => Some(self.entries[position].distance),
        }
    }

    /// queues the index or lowers its tentative distance.
    /// returns false and leaves the queue unchanged for INFINITY or a distance that is no improvement
    pub fn push_or_decrease(&mut self, node_index: usize, distance: Distance) -> bool {
        if !is_finite(distance) {
            return false;
        }

        let entry = QueueEntry { distance, node_index };

        match self.positions[node_index] {
            NOT_QUEUED => {
                self.entries.push(entry);
                self.sift_up(self.entries.len() - 1, entry);
            },
            position => {
                if self.entries[position].distance <= distance {
                    return false;
                }

                self.sift_up(position, entry);
            },
        }

        true
    }

    /// removes the entry with the smallest distance, the index may be queued again afterwards
    pub fn pop(&mut self) -> Option<QueueEntry> {
        let last = self.entries.pop()?;

        let min_entry = match self.entries.first().copied() {
            Some(min_entry) => {
                self.sift_down(0, last);
                min_entry
            },
            None => last,
        };

        self.positions[min_entry.node_index] = NOT_QUEUED;
        Some(min_entry)
    }

    pub fn clear(&mut self) {
        for entry in self.entries.drain(..) {
            self.positions[entry.node_index] = NOT_QUEUED;
        }
    }

    // moves parents down into the hole at `position` until `entry` fits there
    fn sift_up(&mut self, mut position: usize, entry: QueueEntry) {
        while position > 0 {
            let parent = (position - 1) / 2;

            if self.entries[parent].key() <= entry.key() {
                break;
            }

            self.place(position, self.entries[parent]);
            position = parent;
        }

        self.place(position, entry);
    }

    // moves the smaller child up into the hole at `position` until `entry` fits there
    fn sift_down(&mut self, mut position: usize, entry: QueueEntry) {
        let len = self.entries.len();

        loop {
            let left = 2 * position + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let child = if right < len && self.entries[right].key() < self.entries[left].key() { right } else { left };

            if entry.key() <= self.entries[child].key() {
                break;
            }

            self.place(position, self.entries[child]);
            position = child;
        }

        self.place(position, entry);
    }

    fn place(&mut self, position: usize, entry: QueueEntry) {
        self.entries[position] = entry;
        self.positions[entry.node_index] = position;
    }
}
