use crate::config::ListConfig;
use crate::error::AllocError;
use crate::memory::NodeIndex;

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use log::{debug, warn};

/// A list element: one value and the link to its successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    value: i32,
    next: Option<NodeIndex>,
}

impl Node {
    pub const fn new(value: i32, next: Option<NodeIndex>) -> Self {
        Self { value, next }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn next(&self) -> Option<NodeIndex> {
        self.next
    }

    pub fn set_next(&mut self, next: Option<NodeIndex>) {
        self.next = next;
    }
}

#[derive(Debug)]
enum Slot {
    Occupied(Node),
    Vacant { next_free: Option<NodeIndex> },
}

/// Slot arena that owns every node of a list.
///
/// Vacated slots are threaded into an intrusive free list and handed out
/// again LIFO before the arena grows. Growth is fallible: it stops at the
/// configured capacity, and a refused reservation from the global allocator
/// is reported instead of aborting.
#[derive(Debug)]
pub struct NodePool {
    slots: Vec<Slot>,
    free_head: Option<NodeIndex>,
    live: usize,
    config: ListConfig,
}

impl NodePool {
    pub const fn new(config: ListConfig) -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            live: 0,
            config,
        }
    }

    pub fn config(&self) -> ListConfig {
        self.config
    }

    /// number of occupied slots
    pub fn live(&self) -> usize {
        self.live
    }

    /// number of slots ever created, occupied or vacant
    #[cfg(test)]
    pub fn slots(&self) -> usize {
        self.slots.len()
    }

    pub fn allocate(&mut self, node: Node) -> Result<NodeIndex, AllocError> {
        if let Some(capacity) = self.config.capacity
            && self.live >= capacity
        {
            warn!(
                "refusing node allocation: {} of {} slots in use",
                self.live, capacity
            );
            return Err(AllocError::CapacityExhausted { capacity });
        }

        let index = match self.pop_free() {
            Some(index) => {
                debug!("reusing vacant slot {index}");
                self.slots[index.as_usize()] = Slot::Occupied(node);
                index
            }
            None => {
                self.slots.try_reserve(1).map_err(|_| {
                    warn!(
                        "global allocator refused to grow the node pool past {} slots",
                        self.slots.len()
                    );
                    AllocError::OutOfMemory
                })?;

                let index = NodeIndex::new(self.slots.len());
                debug!("growing node pool with slot {index}");
                self.slots.push(Slot::Occupied(node));
                index
            }
        };

        self.live += 1;
        Ok(index)
    }

    /// Vacates the slot and hands its node back.
    ///
    /// Returns `None` for a slot that was never allocated. Releasing a vacant
    /// slot is a double release; debug builds panic on it.
    pub fn release(&mut self, index: NodeIndex) -> Option<Node> {
        let slot = self.slots.get_mut(index.as_usize())?;

        debug_assert!(
            matches!(slot, Slot::Occupied(_)),
            "Double release detected at slot {index}"
        );

        let Slot::Occupied(node) = *slot else {
            return None;
        };

        *slot = Slot::Vacant {
            next_free: self.free_head,
        };
        self.free_head = Some(index);
        self.live -= 1;

        if self.live == 0 {
            debug!("last node released, returning {} slots", self.slots.len());
            self.clear();
        }

        Some(node)
    }

    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        match self.slots.get(index.as_usize())? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        match self.slots.get_mut(index.as_usize())? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    /// Drops every node and hands the slot storage back to the allocator.
    pub fn clear(&mut self) {
        self.slots = Vec::new();
        self.free_head = None;
        self.live = 0;
    }

    fn pop_free(&mut self) -> Option<NodeIndex> {
        let index = self.free_head?;
        match self.slots[index.as_usize()] {
            Slot::Vacant { next_free } => {
                self.free_head = next_free;
                Some(index)
            }
            Slot::Occupied(_) => unreachable!("slot {index} is on the free list but occupied"),
        }
    }
}

impl Default for NodePool {
    fn default() -> Self {
        Self::new(ListConfig::default())
    }
}

impl Index<NodeIndex> for NodePool {
    type Output = Node;

    fn index(&self, index: NodeIndex) -> &Node {
        match self.get(index) {
            Some(node) => node,
            None => panic!("node pool slot {index} is not occupied"),
        }
    }
}

impl IndexMut<NodeIndex> for NodePool {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Node {
        match self.get_mut(index) {
            Some(node) => node,
            None => panic!("node pool slot {index} is not occupied"),
        }
    }
}
