//! Singly-linked generic lists for the cursus container library.
//!
//! A [`List<T>`] is a chain of heap nodes, each owning its element inline,
//! with head and tail pointers for O(1) [`append`](List::append) and
//! [`prepend`](List::prepend). Positional access walks the chain in O(i).
//!
//! # Error model
//!
//! [`get`](List::get), [`set`](List::set) and [`insert`](List::insert)
//! fail fast when their walk leaves the list — an out-of-range position is
//! a contract violation. [`remove`](List::remove) past the tail (or from
//! an empty list) is a **silent no-op** instead. The asymmetry is
//! inherited from the course material this library serves and is kept
//! deliberately; see `List::remove`.
//!
//! # Unsafe
//!
//! The tail pointer makes the node links `NonNull` rather than owned
//! boxes; all `unsafe` is confined to [`list`]'s internals (plus the
//! ownership extension in [`own`]) with the chain invariants documented on
//! the type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

mod combinators;
pub mod list;
mod node;
mod ops;
pub mod own;

pub use list::{IntoIter, Iter, IterMut, List};
