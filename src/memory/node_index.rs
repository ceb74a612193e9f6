use core::fmt;

/// Handle to a slot in a [`NodePool`](super::NodePool).
///
/// Handles are only minted by the pool that owns the slot, so a link can
/// never point outside the arena it lives in.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub(super) const fn new(slot: usize) -> Self {
        Self(slot)
    }

    pub const fn as_usize(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
