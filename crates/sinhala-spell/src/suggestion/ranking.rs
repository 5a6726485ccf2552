// Bounded top-K selection of scored candidates

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A scored item with its position in the scan. Greater means better:
/// higher score, or equal score and earlier position.
#[derive(Debug)]
struct Ranked<T> {
    score: f64,
    position: usize,
    item: T,
}

impl<T> PartialEq for Ranked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Ranked<T> {}

impl<T> PartialOrd for Ranked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Ranked<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.position.cmp(&self.position))
    }
}

/// Keeps the `capacity` best items seen so far in constant memory.
///
/// Backed by a min-heap whose top is the worst retained item, so each offer
/// costs `O(log capacity)`.
#[derive(Debug)]
pub struct TopCandidates<T> {
    capacity: usize,
    heap: BinaryHeap<Reverse<Ranked<T>>>,
}

impl<T> TopCandidates<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity + 1),
        }
    }

    /// Offer an item. `position` breaks score ties: lower positions win.
    pub fn offer(&mut self, score: f64, position: usize, item: T) {
        if self.capacity == 0 {
            return;
        }
        let ranked = Ranked {
            score,
            position,
            item,
        };
        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(ranked));
            return;
        }
        let better = self
            .heap
            .peek()
            .is_some_and(|Reverse(worst)| ranked > *worst);
        if better {
            self.heap.pop();
            self.heap.push(Reverse(ranked));
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Retained items, best first.
    pub fn into_sorted(self) -> Vec<(T, f64)> {
        // Ascending order of Reverse<_> is best first.
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(r)| (r.item, r.score))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_best_in_order() {
        let mut top = TopCandidates::new(3);
        for (i, score) in [72.0, 95.0, 80.0, 71.0, 88.0].into_iter().enumerate() {
            top.offer(score, i, i);
        }
        let got: Vec<f64> = top.into_sorted().into_iter().map(|(_, s)| s).collect();
        assert_eq!(got, [95.0, 88.0, 80.0]);
    }

    #[test]
    fn ties_prefer_earlier_position() {
        let mut top = TopCandidates::new(2);
        top.offer(80.0, 0, "first");
        top.offer(80.0, 1, "second");
        top.offer(80.0, 2, "third");
        let got: Vec<&str> = top.into_sorted().into_iter().map(|(w, _)| w).collect();
        assert_eq!(got, ["first", "second"]);
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut top = TopCandidates::new(0);
        top.offer(99.0, 0, ());
        assert!(top.is_empty());
    }

    #[test]
    fn worse_items_do_not_displace_once_full() {
        let mut top = TopCandidates::new(2);
        top.offer(75.0, 0, 'a');
        top.offer(90.0, 1, 'b');
        top.offer(70.0, 2, 'c');
        assert_eq!(top.len(), 2);
        top.offer(80.0, 3, 'd');
        let got: Vec<char> = top.into_sorted().into_iter().map(|(c, _)| c).collect();
        assert_eq!(got, ['b', 'd']);
    }
}
