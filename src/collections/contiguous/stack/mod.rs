mod iter;
mod stack;
mod tests;

pub use iter::*;
pub use stack::*;
