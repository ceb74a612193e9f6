use crate::config::ListConfig;
use crate::error::AllocError;
use crate::memory::{Node, NodeIndex, NodePool};

use core::fmt;
use core::iter::{Enumerate, FusedIterator};
use log::trace;

/// A singly-linked list of `i32` values.
///
/// Nodes live in a slot pool owned by the list and link to their
/// successor by index, so the chain is always exclusively owned and can
/// never alias or cycle. There is no tail pointer: operations on the tail
/// walk the chain from the head.
pub struct SinglyLinkedList {
    head: Option<NodeIndex>,
    len: usize,
    pool: NodePool,
}

/// Lazily yields `(position, value)` pairs from head to tail.
pub type Traverse<'a> = Enumerate<Iter<'a>>;

impl SinglyLinkedList {
    pub const fn new() -> Self {
        Self::with_config(ListConfig::UNBOUNDED)
    }

    pub const fn with_config(config: ListConfig) -> Self {
        Self {
            head: None,
            len: 0,
            pool: NodePool::new(config),
        }
    }

    /// Builds an unbounded list holding `values` in order.
    pub fn try_from_values<I>(values: I) -> Result<Self, AllocError>
    where
        I: IntoIterator<Item = i32>,
    {
        let mut list = Self::new();
        list.extend_at_tail(values)?;
        Ok(list)
    }

    pub fn config(&self) -> ListConfig {
        self.pool.config()
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(self.len, self.pool.live());
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn front(&self) -> Option<i32> {
        self.head.map(|head| self.pool[head].value())
    }

    /// O(n)
    pub fn back(&self) -> Option<i32> {
        self.terminal().map(|tail| self.pool[tail].value())
    }

    /// Pushes `value` in front of the current head. O(1).
    ///
    /// On error the list is unchanged.
    pub fn insert_at_head(&mut self, value: i32) -> Result<(), AllocError> {
        let node = self.pool.allocate(Node::new(value, self.head))?;
        self.head = Some(node);
        self.len += 1;

        trace!("inserted {value} at head, len {}", self.len);
        Ok(())
    }

    /// Appends `value` after the terminal node. O(n), the whole chain is walked.
    ///
    /// On error the list is unchanged.
    pub fn insert_at_tail(&mut self, value: i32) -> Result<(), AllocError> {
        let tail = self.terminal();
        self.append_after(tail, value)?;

        trace!("inserted {value} at tail, len {}", self.len);
        Ok(())
    }

    /// Tail-inserts every value in order, walking the chain only once.
    ///
    /// Values appended before an allocation failure stay in the list.
    pub fn extend_at_tail<I>(&mut self, values: I) -> Result<(), AllocError>
    where
        I: IntoIterator<Item = i32>,
    {
        let mut tail = self.terminal();
        for value in values {
            tail = Some(self.append_after(tail, value)?);
        }
        Ok(())
    }

    /// Unlinks the head and returns its value, or `None` on an empty list. O(1).
    pub fn delete_at_head(&mut self) -> Option<i32> {
        let head = self.head?;
        let node = self.pool.release(head)?;

        self.head = node.next();
        self.len -= 1;

        trace!("deleted {} at head, len {}", node.value(), self.len);
        Some(node.value())
    }

    /// Unlinks the terminal node and returns its value, or `None` on an empty
    /// list. O(n), the predecessor of the terminal node is found by walking.
    pub fn delete_at_tail(&mut self) -> Option<i32> {
        let mut current = self.head?;
        let mut prev = None;

        while let Some(next) = self.pool[current].next() {
            prev = Some(current);
            current = next;
        }

        match prev {
            Some(prev) => self.pool[prev].set_next(None),
            // single node, list becomes empty
            None => self.head = None,
        }

        let node = self.pool.release(current)?;
        self.len -= 1;

        trace!("deleted {} at tail, len {}", node.value(), self.len);
        Some(node.value())
    }

    /// Releases every node.
    pub fn clear(&mut self) {
        self.pool.clear();
        self.head = None;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            pool: &self.pool,
            current: self.head,
            remaining: self.len,
        }
    }

    /// Visits every node from head to tail as `(position, value)` pairs.
    pub fn traverse(&self) -> Traverse<'_> {
        self.iter().enumerate()
    }

    fn terminal(&self) -> Option<NodeIndex> {
        let mut current = self.head?;
        while let Some(next) = self.pool[current].next() {
            current = next;
        }
        Some(current)
    }

    fn append_after(
        &mut self,
        tail: Option<NodeIndex>,
        value: i32,
    ) -> Result<NodeIndex, AllocError> {
        let node = self.pool.allocate(Node::new(value, None))?;

        match tail {
            Some(tail) => self.pool[tail].set_next(Some(node)),
            None => self.head = Some(node),
        }
        self.len += 1;

        Ok(node)
    }
}

impl Default for SinglyLinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SinglyLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for SinglyLinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for SinglyLinkedList {}

impl<'a> IntoIterator for &'a SinglyLinkedList {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

pub struct Iter<'a> {
    pool: &'a NodePool,
    current: Option<NodeIndex>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = self.pool[self.current?];
        self.current = node.next();
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn values(list: &SinglyLinkedList) -> Vec<i32> {
        list.iter().collect()
    }

    fn list_of(items: &[i32]) -> SinglyLinkedList {
        SinglyLinkedList::try_from_values(items.iter().copied()).unwrap()
    }

    #[test]
    fn new_list_is_empty() {
        let list = SinglyLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.traverse().next(), None);
    }

    #[test]
    fn head_insertion_reverses_order() {
        let mut list = SinglyLinkedList::new();
        for value in [7, 5, 3] {
            list.insert_at_head(value).unwrap();
        }
        assert_eq!(values(&list), [3, 5, 7]);
        assert_eq!(list.front(), Some(3));
        assert_eq!(list.back(), Some(7));
    }

    #[test]
    fn tail_insertion_keeps_order() {
        let mut list = SinglyLinkedList::new();
        for value in [10, 12, 14] {
            list.insert_at_tail(value).unwrap();
        }
        assert_eq!(values(&list), [10, 12, 14]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn head_then_tail_insertion() {
        let mut list = SinglyLinkedList::new();
        for value in [7, 5, 3] {
            list.insert_at_head(value).unwrap();
        }
        assert_eq!(values(&list), [3, 5, 7]);

        for value in [10, 12, 14] {
            list.insert_at_tail(value).unwrap();
        }
        assert_eq!(values(&list), [3, 5, 7, 10, 12, 14]);
    }

    #[test]
    fn delete_head_then_tail() {
        let mut list = SinglyLinkedList::new();
        for value in [7, 5, 3] {
            list.insert_at_head(value).unwrap();
        }

        assert_eq!(list.delete_at_head(), Some(3));
        assert_eq!(values(&list), [5, 7]);

        assert_eq!(list.delete_at_tail(), Some(7));
        assert_eq!(values(&list), [5]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn deletes_on_empty_list_are_noops() {
        let mut list = SinglyLinkedList::new();
        assert_eq!(list.delete_at_head(), None);
        assert_eq!(list.delete_at_tail(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn singleton_deletes_to_empty_either_way() {
        let mut list = list_of(&[42]);
        assert_eq!(list.delete_at_head(), Some(42));
        assert!(list.is_empty());
        assert_eq!(list.delete_at_tail(), None);

        let mut list = list_of(&[42]);
        assert_eq!(list.delete_at_tail(), Some(42));
        assert!(list.is_empty());
        assert_eq!(list.delete_at_head(), None);
    }

    #[test]
    fn tail_insert_then_delete_restores_list() {
        let mut list = list_of(&[1, 2, 3]);
        list.insert_at_tail(4).unwrap();
        assert_eq!(list.delete_at_tail(), Some(4));
        assert_eq!(list, list_of(&[1, 2, 3]));
    }

    #[test]
    fn traverse_pairs_positions_with_values() {
        let list = list_of(&[5, 6, 7]);
        let pairs: Vec<_> = list.traverse().collect();
        assert_eq!(pairs, [(0, 5), (1, 6), (2, 7)]);

        // traversal is repeatable and leaves the list alone
        assert_eq!(list.traverse().count(), 3);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn iter_reports_exact_size() {
        let list = list_of(&[1, 2, 3]);
        let mut iter = list.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn bounded_list_refuses_and_stays_intact() {
        let mut list = SinglyLinkedList::with_config(ListConfig::bounded(2));
        list.insert_at_head(1).unwrap();
        list.insert_at_tail(2).unwrap();

        let err = AllocError::CapacityExhausted { capacity: 2 };
        assert_eq!(list.insert_at_head(0), Err(err));
        assert_eq!(list.insert_at_tail(3), Err(err));
        assert_eq!(values(&list), [1, 2]);
        assert_eq!(list.len(), 2);

        list.delete_at_head();
        list.insert_at_tail(3).unwrap();
        assert_eq!(values(&list), [2, 3]);
    }

    #[test]
    fn extend_keeps_values_appended_before_failure() {
        let mut list = SinglyLinkedList::with_config(ListConfig::bounded(3));
        list.insert_at_head(0).unwrap();

        assert!(list.extend_at_tail([1, 2, 3, 4]).is_err());
        assert_eq!(values(&list), [0, 1, 2]);
    }

    #[test]
    fn clear_releases_every_node() {
        let mut list = list_of(&[1, 2, 3]);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.insert_at_tail(9).unwrap();
        assert_eq!(values(&list), [9]);
    }

    #[test]
    fn len_matches_reachable_nodes() {
        let mut list = SinglyLinkedList::new();
        for value in 0..10 {
            list.insert_at_tail(value).unwrap();
        }
        for _ in 0..4 {
            list.delete_at_tail();
            list.delete_at_head();
        }
        assert_eq!(list.len(), list.iter().count());
        assert_eq!(list.len(), list.pool.live());
        assert_eq!(values(&list), [4, 5]);
    }

    #[test]
    fn config_reflects_construction() {
        assert_eq!(SinglyLinkedList::new().config(), ListConfig::UNBOUNDED);
        assert_eq!(SinglyLinkedList::default().config(), ListConfig::UNBOUNDED);

        let list = SinglyLinkedList::with_config(ListConfig::bounded(4));
        assert_eq!(list.config(), ListConfig::bounded(4));
        assert_eq!(list.config().capacity, Some(4));
    }

    #[test]
    fn emptied_list_drops_slot_storage() {
        let mut list = SinglyLinkedList::new();
        list.extend_at_tail(0..10_000).unwrap();
        while list.delete_at_head().is_some() {}

        assert!(list.is_empty());
        assert_eq!(list.pool.slots(), 0);

        list.insert_at_tail(1).unwrap();
        assert_eq!(values(&list), [1]);
    }

    #[test]
    fn debug_renders_values() {
        let list = list_of(&[3, 5, 7]);
        assert_eq!(alloc::format!("{list:?}"), "[3, 5, 7]");
    }
}
