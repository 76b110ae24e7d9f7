//! Contiguous collection types with a capacity fixed at construction: [`BoundedStack`] and
//! [`BoundedQueue`].

mod buffer;
pub mod queue;
pub mod stack;

pub(crate) use buffer::Buffer;
#[doc(inline)]
pub use queue::BoundedQueue;
#[doc(inline)]
pub use stack::BoundedStack;
