use embedded_io::ErrorKind;
use thiserror::Error;

/// Node allocation was refused. The list is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocError {
    #[error("node pool exhausted: all {capacity} slots are in use")]
    CapacityExhausted { capacity: usize },
    #[error("out of memory while growing the node pool")]
    OutOfMemory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PrintError {
    #[error("output sink rejected write: {0:?}")]
    Io(ErrorKind),
    #[error("failed to format node line")]
    Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DemoError {
    #[error(transparent)]
    Alloc(#[from] AllocError),
    #[error(transparent)]
    Print(#[from] PrintError),
}
