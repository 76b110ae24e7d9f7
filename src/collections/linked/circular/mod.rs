mod circular_linked_list;
mod iter;
mod node;
mod tests;

pub use circular_linked_list::*;
pub use iter::*;
pub(crate) use node::*;
