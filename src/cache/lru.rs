//! LRU Tracker Module
//!
//! Recency ordering for the cache, kept as a doubly-linked list inside an
//! arena so that any tracked key can be moved or removed in O(1).

// == Handle ==
/// Stable reference to a node in the tracker.
///
/// A handle stays valid until the node it names is removed or popped. Slots
/// are reused, so each handle also carries the generation of its slot; a
/// handle from an earlier occupant never matches the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    index: usize,
    generation: u32,
}

/// Sentinel slots. Real nodes always sit strictly between them.
const FRONT: usize = 0;
const BACK: usize = 1;

/// Upper bound on slots reserved up front; larger trackers grow on demand.
const MAX_RESERVE: usize = 4096;

#[derive(Debug)]
struct Node<K> {
    /// `None` for the sentinels and for slots on the free list
    key: Option<K>,
    /// Bumped every time the slot is vacated
    generation: u32,
    prev: usize,
    next: usize,
}

impl<K> Node<K> {
    fn sentinel() -> Self {
        Self {
            key: None,
            generation: 0,
            prev: FRONT,
            next: BACK,
        }
    }
}

// == LRU Tracker ==
/// Tracks access order for LRU eviction.
///
/// - Front = least recently used
/// - Back = most recently used
#[derive(Debug)]
pub struct LruTracker<K> {
    nodes: Vec<Node<K>>,
    /// Vacated slots available for reuse
    free: Vec<usize>,
    len: usize,
}

impl<K> Default for LruTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> LruTracker<K> {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty tracker with room for up to `capacity` keys before
    /// the arena has to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.min(MAX_RESERVE) + 2);
        nodes.push(Node::sentinel());
        nodes.push(Node::sentinel());
        Self {
            nodes,
            free: Vec::new(),
            len: 0,
        }
    }

    // == Push Back ==
    /// Adds `key` as the most recently used entry and returns its handle.
    pub fn push_back(&mut self, key: K) -> Handle {
        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx].key = Some(key);
                idx
            }
            None => {
                self.nodes.push(Node {
                    key: Some(key),
                    generation: 0,
                    prev: FRONT,
                    next: BACK,
                });
                self.nodes.len() - 1
            }
        };
        self.link_last(idx);
        self.len += 1;
        Handle {
            index: idx,
            generation: self.nodes[idx].generation,
        }
    }

    // == Move To Back ==
    /// Marks the node behind `handle` as most recently used.
    ///
    /// Returns false, leaving the order untouched, if the handle is stale.
    pub fn move_to_back(&mut self, handle: Handle) -> bool {
        if !self.is_live(handle) {
            return false;
        }
        let idx = handle.index;
        if self.nodes[BACK].prev != idx {
            self.unlink(idx);
            self.link_last(idx);
        }
        true
    }

    // == Remove ==
    /// Unlinks the node behind `handle` and returns its key.
    ///
    /// Returns None if the handle no longer names a tracked key.
    pub fn remove(&mut self, handle: Handle) -> Option<K> {
        if !self.is_live(handle) {
            return None;
        }
        let idx = handle.index;
        self.unlink(idx);
        let node = &mut self.nodes[idx];
        node.generation = node.generation.wrapping_add(1);
        let key = node.key.take();
        self.free.push(idx);
        self.len -= 1;
        key
    }

    // == Pop Front ==
    /// Removes and returns the least recently used key.
    pub fn pop_front(&mut self) -> Option<K> {
        let first = self.nodes[FRONT].next;
        if first == BACK {
            return None;
        }
        let generation = self.nodes[first].generation;
        self.remove(Handle {
            index: first,
            generation,
        })
    }

    // == Peek Front ==
    /// Returns the least recently used key without removing it.
    pub fn peek_front(&self) -> Option<&K> {
        self.nodes[self.nodes[FRONT].next].key.as_ref()
    }

    /// Returns the key behind `handle`, if still tracked.
    pub fn get(&self, handle: Handle) -> Option<&K> {
        if !self.is_live(handle) {
            return None;
        }
        self.nodes[handle.index].key.as_ref()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates keys from least to most recently used.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            tracker: self,
            cursor: self.nodes[FRONT].next,
            remaining: self.len,
        }
    }

    /// Drops every tracked key. Slots stay allocated for reuse so that
    /// handles issued before the clear remain stale.
    pub fn clear(&mut self) {
        self.free.clear();
        for (idx, node) in self.nodes.iter_mut().enumerate().skip(2) {
            if node.key.take().is_some() {
                node.generation = node.generation.wrapping_add(1);
            }
            self.free.push(idx);
        }
        self.nodes[FRONT] = Node::sentinel();
        self.nodes[BACK] = Node::sentinel();
        self.len = 0;
    }

    fn is_live(&self, handle: Handle) -> bool {
        handle.index > BACK
            && self.nodes.get(handle.index).is_some_and(|n| {
                n.key.is_some() && n.generation == handle.generation
            })
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
    }

    fn link_last(&mut self, idx: usize) {
        let last = self.nodes[BACK].prev;
        self.nodes[idx].prev = last;
        self.nodes[idx].next = BACK;
        self.nodes[last].next = idx;
        self.nodes[BACK].prev = idx;
    }
}

// == Iterator ==
/// Iterator over tracked keys, least recently used first.
pub struct Iter<'a, K> {
    tracker: &'a LruTracker<K>,
    cursor: usize,
    remaining: usize,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == BACK {
            return None;
        }
        let node = &self.tracker.nodes[self.cursor];
        self.cursor = node.next;
        self.remaining -= 1;
        node.key.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
