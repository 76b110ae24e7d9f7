use std::ptr::NonNull;

/// A copyable handle to a heap allocated [`Node`] in a ring. Every node in a ring has a successor,
/// so unlike the other lists, `next` isn't optional: a lone node points at itself.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub const fn value<'a>(&self) -> &'a T {
        // SAFETY: The handle points to a live node owned by the list.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub const fn next(&self) -> NodePtr<T> {
        // SAFETY: The handle points to a live node owned by the list.
        unsafe { (*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn next_mut<'a>(&self) -> &'a mut NodePtr<T> {
        // SAFETY: The handle points to a live node owned by the list.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    /// Allocates a node holding `value` which links back to itself, forming a ring of one.
    pub fn ring_of_one(value: T) -> NodePtr<T> {
        let node = NodePtr(NonNull::from(Box::leak(Box::new(Node {
            value,
            next: NodePtr(NonNull::dangling()),
        }))));
        *node.next_mut() = node;
        node
    }

    /// Reclaims the node, moving it off the heap.
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
    pub value: T,
    pub next: NodePtr<T>,
}
