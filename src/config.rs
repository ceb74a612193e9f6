/// Storage limits for a list's node pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    /// Maximum number of live nodes. `None` leaves the pool bounded only by
    /// what the global allocator will hand out.
    pub capacity: Option<usize>,
}

impl ListConfig {
    pub const UNBOUNDED: Self = Self { capacity: None };

    pub const fn bounded(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}
