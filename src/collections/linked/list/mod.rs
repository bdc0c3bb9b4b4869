mod iter;
mod node;
mod position;
mod singly_linked_list;
mod tests;

pub use iter::*;
pub(crate) use node::Chain;
pub use node::Link;
pub use position::*;
pub use singly_linked_list::*;
