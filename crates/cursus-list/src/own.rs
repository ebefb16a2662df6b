//! Ownership extension for lists of raw heap pointers.
//!
//! Mirrors the array side (`cursus_array::own`): a `List<*mut T>` has two
//! release paths. The ordinary `Drop` is the **shallow free** — node chain
//! only, payloads stay alive. [`dispose_deep`](List::dispose_deep) /
//! [`dispose_deep_with`](List::dispose_deep_with) are the **owning free**
//! — each payload is destroyed, then the chain.
//!
//! # Hazard
//!
//! The choice is the caller's and unchecked: owning-freeing a list whose
//! pointers are also referenced elsewhere, or doing so twice over shared
//! pointers, is undefined behavior. The `unsafe` contract is the only
//! guard, by design.

#![allow(unsafe_code)]

use crate::List;

impl<T> List<*mut T> {
    /// Build a pointer list from owned boxes, transferring ownership of
    /// every payload into the list's nodes.
    ///
    /// The result must eventually go through an owning free; a plain drop
    /// leaks every payload.
    pub fn from_owned(items: Vec<Box<T>>) -> Self {
        items.into_iter().map(Box::into_raw).collect()
    }

    /// Owning free with the default destructor: every non-null payload is
    /// reconstructed with [`Box::from_raw`] and dropped, then the node
    /// chain is released.
    ///
    /// # Safety
    ///
    /// Every non-null element must point to a live allocation created by
    /// [`Box::into_raw`] that nothing else owns or will touch afterwards.
    pub unsafe fn dispose_deep(self) {
        // SAFETY: forwarded to the caller's contract above.
        unsafe {
            self.dispose_deep_with(|p| {
                drop(Box::from_raw(p));
            });
        }
    }

    /// Owning free with a caller-supplied destructor, called once per
    /// non-null payload before the node chain is released.
    ///
    /// # Safety
    ///
    /// `destroy` must match how the payloads were allocated, and no
    /// payload may be owned or used elsewhere afterwards.
    pub unsafe fn dispose_deep_with(self, mut destroy: impl FnMut(*mut T)) {
        for &p in self.iter() {
            if !p.is_null() {
                destroy(p);
            }
        }
        // Node chain is released here by the ordinary drop.
    }
}
