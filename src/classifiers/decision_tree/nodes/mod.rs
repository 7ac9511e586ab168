mod node;
mod root;

pub use node::{Edge, InternalNode, LeafNode, Node, NodeId};
pub use root::Root;
