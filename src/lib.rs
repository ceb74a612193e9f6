#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod collections;
pub mod config;
pub mod demo;
pub mod error;
pub(crate) mod memory;
pub mod printing;

pub use collections::{LinkedNode, SinglyLinkedList};
pub use config::ListConfig;
pub use error::{AllocError, DemoError, PrintError};
