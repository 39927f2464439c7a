//! Node storage for the circular doubly linked list
//!
//! Nodes live in a slab; links are slab keys rather than pointers, so the
//! ring's self-referencing cycle never fights the borrow checker. Removed
//! nodes leave a vacant slot which the next insertion reuses.
//!

use slab::Slab;

use crate::Digit;

/// Key of a node inside its ring's arena
pub(crate) type NodeIdx = usize;


/// One digit and the keys of its neighbours in the cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct DigitNode {
    pub value: Digit,
    pub next: NodeIdx,
    pub prev: NodeIdx,
}


/// Arena owning every node of a single ring
#[derive(Clone, Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Slab<DigitNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Allocate a node which links to itself in both directions
    pub fn alloc_singleton(&mut self, value: Digit) -> NodeIdx {
        let idx = self.nodes.vacant_key();
        let inserted = self.nodes.insert(DigitNode { value, next: idx, prev: idx });
        debug_assert_eq!(idx, inserted);
        inserted
    }

    /// Allocate a node and splice it into the cycle directly before `at`
    pub fn insert_before(&mut self, at: NodeIdx, value: Digit) -> NodeIdx {
        let prev = self.nodes[at].prev;
        let idx = self.nodes.insert(DigitNode { value, next: at, prev });
        self.nodes[prev].next = idx;
        self.nodes[at].prev = idx;
        idx
    }

    /// Unlink node from the cycle and free its slot
    ///
    /// Neighbours are joined to each other; a node that was alone in its
    /// cycle simply disappears.
    ///
    pub fn unlink(&mut self, idx: NodeIdx) -> DigitNode {
        let node = self.nodes.remove(idx);
        if node.next != idx {
            self.nodes[node.prev].next = node.next;
            self.nodes[node.next].prev = node.prev;
        }
        node
    }

    #[inline]
    pub fn next(&self, idx: NodeIdx) -> NodeIdx {
        self.nodes[idx].next
    }

    #[inline]
    pub fn prev(&self, idx: NodeIdx) -> NodeIdx {
        self.nodes[idx].prev
    }

    #[inline]
    pub fn value(&self, idx: NodeIdx) -> Digit {
        self.nodes[idx].value
    }

    /// Overwrite value stored in node, returning the old one
    #[inline]
    pub fn replace_value(&mut self, idx: NodeIdx, value: Digit) -> Digit {
        core::mem::replace(&mut self.nodes[idx].value, value)
    }

    /// Exchange the values (not the links) of two nodes
    pub fn swap_values(&mut self, a: NodeIdx, b: NodeIdx) {
        if a == b {
            return;
        }
        let tmp = self.nodes[a].value;
        self.nodes[a].value = self.nodes[b].value;
        self.nodes[b].value = tmp;
    }

    /// Drop every node
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}
