//! Ownership extension for arrays of raw heap pointers.
//!
//! An `Array<*mut T>` has two distinct release paths, and choosing the
//! right one is the caller's responsibility:
//!
//! - **Shallow free** is the ordinary `Drop`: the array structure is
//!   released, every payload stays alive. Use it when something else owns
//!   the payloads (or when leaking them is intended).
//! - **Owning free** is [`dispose_deep`](Array::dispose_deep) /
//!   [`dispose_deep_with`](Array::dispose_deep_with): each payload is
//!   destroyed first, then the structure.
//!
//! # Hazard
//!
//! The split is deliberate and unchecked. Owning-freeing an array whose
//! pointers are also referenced elsewhere, owning-freeing pointers that
//! did not come from [`Box::into_raw`] (for the default destructor), or
//! touching a payload after its owning free is undefined behavior. The
//! `unsafe` on these functions is the whole contract — there is no runtime
//! check, mirroring the discipline course material teaches.

#![allow(unsafe_code)]

use crate::Array;

impl<T> Array<*mut T> {
    /// Build a pointer array from owned boxes, transferring ownership of
    /// every payload into the array's slots.
    ///
    /// The result must eventually go through an owning free; a plain drop
    /// leaks every payload.
    pub fn from_owned(items: Vec<Box<T>>) -> Self {
        items.into_iter().map(Box::into_raw).collect()
    }

    /// Owning free with the default destructor: every non-null payload is
    /// reconstructed with [`Box::from_raw`] and dropped, then the array
    /// structure is released.
    ///
    /// # Safety
    ///
    /// Every non-null element must point to a live allocation created by
    /// [`Box::into_raw`] that nothing else owns or will touch afterwards.
    /// Calling this twice on arrays sharing pointers is a double free.
    pub unsafe fn dispose_deep(self) {
        // SAFETY: forwarded to the caller's contract above.
        unsafe {
            self.dispose_deep_with(|p| {
                drop(Box::from_raw(p));
            });
        }
    }

    /// Owning free with a caller-supplied destructor, called once per
    /// non-null payload before the array structure is released.
    ///
    /// # Safety
    ///
    /// `destroy` must be the matching destructor for how the payloads were
    /// allocated, and no payload may be owned or used elsewhere afterwards.
    pub unsafe fn dispose_deep_with(self, mut destroy: impl FnMut(*mut T)) {
        for &p in self.as_slice() {
            if !p.is_null() {
                destroy(p);
            }
        }
        // Structure is released here by the ordinary drop.
    }
}
