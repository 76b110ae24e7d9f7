use std::mem::MaybeUninit;
use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

/// A copyable handle to a heap allocated [`Node`]. The node may be a sentinel, in which case its
/// value is uninitialized and must never be read.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    /// # Safety
    /// The node must not be a sentinel.
    pub const unsafe fn value<'a>(&self) -> &'a T {
        // SAFETY: The node is live and, per the caller, holds an initialized value.
        unsafe { (*self.0.as_ptr()).value.assume_init_ref() }
    }

    /// # Safety
    /// The node must not be a sentinel.
    #[allow(clippy::mut_from_ref)]
    pub const unsafe fn value_mut<'a>(&self) -> &'a mut T {
        // SAFETY: The node is live and, per the caller, holds an initialized value.
        unsafe { (*self.0.as_ptr()).value.assume_init_mut() }
    }

    pub const fn prev<'a>(&self) -> &'a Link<T> {
        // SAFETY: The handle points to a live node owned by the list.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The handle points to a live node owned by the list.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub const fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: The handle points to a live node owned by the list.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The handle points to a live node owned by the list.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Allocates a node with no value, used to mark one end of a list.
    pub fn sentinel() -> NodePtr<T> {
        NodePtr::from_node(Node {
            value: MaybeUninit::uninit(),
            prev: None,
            next: None,
        })
    }

    /// Reclaims the node, moving it off the heap. The value, if any, is left untouched.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: The handle was created from a Box and this is the only place it is reclaimed.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}

pub(crate) struct Node<T> {
    pub value: MaybeUninit<T>,
    pub prev: Link<T>,
    pub next: Link<T>,
}
