mod iter;
mod queue;
mod tests;

pub use iter::*;
pub use queue::*;
