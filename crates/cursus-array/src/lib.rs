//! Fixed-length generic arrays for the cursus container library.
//!
//! An [`Array<T>`] owns one contiguous buffer of elements whose length is
//! fixed at creation. Nothing resizes an array: `sub`, `concat`, `map`,
//! `filter`, and `choose` all allocate fresh arrays that never alias their
//! input's storage.
//!
//! # Error model
//!
//! Out-of-range element access and invalid copy spans are contract
//! violations and panic (see [`cursus_core::contract`]). Benign edge cases
//! — an empty clamped [`sub`](Array::sub) range, a
//! [`blit`](Array::blit_from) of zero or negative count — silently produce
//! the empty/default result. Only course-input parsing ([`parse`]) returns
//! `Result`, because malformed input is an expected runtime condition.
//!
//! # Ownership
//!
//! Arrays of raw heap pointers carry two distinct release paths — the
//! ordinary `Drop` (shallow) and an explicit owning free — documented in
//! [`own`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
// `unsafe` is confined to the ownership extension in `own.rs`.
#![deny(unsafe_code)]

mod array;
mod combinators;
mod ops;
pub mod own;
pub mod parse;

pub use array::Array;
pub use parse::{parse_f64s, parse_ints, ParseError};
