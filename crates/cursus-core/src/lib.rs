//! Core contracts and traits for the cursus container library.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! three things every container crate shares:
//!
//! - the [`contract`] module: fail-fast precondition checks (a violated
//!   precondition is a programmer bug and aborts via panic, never a
//!   recoverable error),
//! - the [`order`] module: the comparator convention used by every sort,
//! - the [`Sequence`] trait: the single calling convention for the
//!   higher-order combinators (map, filter, fold, each, exists, forall,
//!   choose) implemented by both container kinds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod contract;
pub mod order;
pub mod sequence;

pub use order::{natural, reversed, Comparator};
pub use sequence::Sequence;
