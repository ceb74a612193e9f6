pub mod node_index;
pub mod node_pool;

pub use node_index::NodeIndex;
pub use node_pool::{Node, NodePool};
