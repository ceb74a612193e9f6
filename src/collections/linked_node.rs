use core::iter::{Enumerate, FusedIterator};

/// A node wired by hand to a borrowed successor.
///
/// Nothing is allocated: the caller owns every node (typically on the
/// stack) and the borrow checker guarantees each successor outlives its
/// predecessor, so a chain of `LinkedNode`s is always finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkedNode<'a> {
    value: i32,
    next: Option<&'a LinkedNode<'a>>,
}

impl<'a> LinkedNode<'a> {
    /// terminal node
    pub const fn new(value: i32) -> Self {
        Self { value, next: None }
    }

    pub const fn with_next(value: i32, next: &'a LinkedNode<'a>) -> Self {
        Self {
            value,
            next: Some(next),
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }

    pub fn next(&self) -> Option<&'a LinkedNode<'a>> {
        self.next
    }

    pub fn set_next(&mut self, next: Option<&'a LinkedNode<'a>>) {
        self.next = next;
    }

    /// Values from this node to the terminal node.
    pub fn iter(&self) -> Links<'_> {
        Links {
            current: Some(self),
        }
    }

    /// `(position, value)` pairs from this node to the terminal node.
    pub fn traverse(&self) -> Enumerate<Links<'_>> {
        self.iter().enumerate()
    }
}

pub struct Links<'a> {
    current: Option<&'a LinkedNode<'a>>,
}

impl Iterator for Links<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = self.current?;
        self.current = node.next;
        Some(node.value)
    }
}

impl FusedIterator for Links<'_> {}
