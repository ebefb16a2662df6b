//! The list node: a forward link plus the element it owns.

#![allow(unsafe_code)]

use std::ptr::NonNull;

/// One link of a [`List`](crate::List) chain.
///
/// The node owns its element directly; there is no type-erased payload or
/// offset arithmetic. Nodes are heap-allocated one at a time and freed
/// exactly once, by the operation that unlinks them or by the list's drop.
pub(crate) struct Node<T> {
    /// Forward link; `None` marks the tail.
    pub(crate) next: Option<NonNull<Node<T>>>,
    /// The element stored in this node.
    pub(crate) value: T,
}

impl<T> Node<T> {
    /// Heap-allocate a tail node holding `value`.
    pub(crate) fn alloc(value: T) -> NonNull<Node<T>> {
        let boxed = Box::new(Node { next: None, value });
        // SAFETY: Box::into_raw never returns null.
        unsafe { NonNull::new_unchecked(Box::into_raw(boxed)) }
    }

    /// Reclaim a node allocated by [`alloc`](Node::alloc), returning its
    /// element.
    ///
    /// # Safety
    ///
    /// `node` must have come from [`alloc`](Node::alloc) and must not be
    /// referenced anywhere after this call.
    pub(crate) unsafe fn reclaim(node: NonNull<Node<T>>) -> T {
        // SAFETY: per the caller's contract the pointer is a live
        // Box-allocated node with no other references.
        unsafe { Box::from_raw(node.as_ptr()) }.value
    }
}
