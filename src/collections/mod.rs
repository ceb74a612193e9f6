pub mod linked_node;
pub mod singly_linked_list;

pub use linked_node::{LinkedNode, Links};
pub use singly_linked_list::{Iter, SinglyLinkedList, Traverse};
