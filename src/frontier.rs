//! Open sets for the exploration loop. A frontier hands out the next cell to expand; FIFO and
//! LIFO frontiers ignore the priority they are given, the [PriorityFrontier] pops the smallest.
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::cell::Cell;

/// A discovered cell together with the path cost it was discovered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate<C> {
    pub cell: Cell,
    pub cost: C,
}

pub trait Frontier<C> {
    fn push(&mut self, candidate: Candidate<C>, priority: C);
    fn pop(&mut self) -> Option<Candidate<C>>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out.
#[derive(Debug)]
pub struct FifoFrontier<C>(VecDeque<Candidate<C>>);

impl<C> Default for FifoFrontier<C> {
    fn default() -> Self {
        FifoFrontier(VecDeque::new())
    }
}

impl<C> Frontier<C> for FifoFrontier<C> {
    fn push(&mut self, candidate: Candidate<C>, _priority: C) {
        self.0.push_back(candidate);
    }
    fn pop(&mut self) -> Option<Candidate<C>> {
        self.0.pop_front()
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Last in, first out.
#[derive(Debug)]
pub struct LifoFrontier<C>(Vec<Candidate<C>>);

impl<C> Default for LifoFrontier<C> {
    fn default() -> Self {
        LifoFrontier(Vec::new())
    }
}

impl<C> Frontier<C> for LifoFrontier<C> {
    fn push(&mut self, candidate: Candidate<C>, _priority: C) {
        self.0.push(candidate);
    }
    fn pop(&mut self) -> Option<Candidate<C>> {
        self.0.pop()
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}

struct SmallestPriorityHolder<C> {
    priority: C,
    sequence: usize,
    candidate: Candidate<C>,
}

impl<C: PartialEq> Eq for SmallestPriorityHolder<C> {}

impl<C: PartialEq> PartialEq for SmallestPriorityHolder<C> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority)
            && self.candidate.cost.eq(&other.candidate.cost)
            && self.sequence == other.sequence
    }
}

impl<C: Ord> PartialOrd for SmallestPriorityHolder<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for SmallestPriorityHolder<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for the max-heap: smallest priority first, then the largest cost, favoring
        // cells further along their path, then the earliest insertion
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.candidate.cost.cmp(&other.candidate.cost))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Binary heap keyed on priority. Equal priorities pop the candidate with the larger path cost
/// first and fall back to insertion order, so the frontier is deterministic for a fixed
/// neighbour order.
pub struct PriorityFrontier<C> {
    heap: BinaryHeap<SmallestPriorityHolder<C>>,
    next_sequence: usize,
}

impl<C: Ord> Default for PriorityFrontier<C> {
    fn default() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }
}

impl<C: Ord> Frontier<C> for PriorityFrontier<C> {
    fn push(&mut self, candidate: Candidate<C>, priority: C) {
        self.heap.push(SmallestPriorityHolder {
            priority,
            sequence: self.next_sequence,
            candidate,
        });
        self.next_sequence += 1;
    }
    fn pop(&mut self) -> Option<Candidate<C>> {
        self.heap.pop().map(|holder| holder.candidate)
    }
    fn len(&self) -> usize {
        self.heap.len()
    }
}
