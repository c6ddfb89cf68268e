//! dynvec: a type-erased dynamic array with a typed generic façade.
//!
//! The erased core ([`ByteVec`]) stores fixed-width elements as raw
//! bytes and exposes the full mutator and algorithm surface with an
//! explicit closed error set. This crate adds the typed layer:
//! [`TypedVec<T>`] boxes and unboxes single values through the
//! [`Element`] codec trait and otherwise forwards everything to the
//! core. For most users, depending on `dynvec` alone is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use dynvec::prelude::*;
//!
//! let mut ints: TypedVec<i32> = TypedVec::new(0)?;
//! ints.push(1234)?;
//! ints.push(5132)?;
//! ints.push(9604)?;
//! assert_eq!(ints.len(), 3);
//! assert_eq!(ints.capacity(), 10);
//!
//! // Element-wise transform into a differently-typed vector.
//! let fractions: TypedVec<f32> = ints.map(|x| x as f32 / 10.0)?;
//! assert_eq!(fractions.get(0)?, 123.4);
//!
//! // Derived algorithms copy; the source stays usable.
//! let sorted = ints.sorted()?;
//! assert_eq!(sorted.first()?, 1234);
//! # Ok::<(), dynvec::VecError>(())
//! ```
//!
//! # Error handling
//!
//! Every fallible operation returns `Result<_, VecError>`. The
//! opt-in fail-fast path is [`abort`], which renders the error and
//! exits; no operation calls it implicitly.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod typed;

pub use dynvec_core::{
    abort, destroy, print, print_dbg, render, render_dbg, ByteVec, VecError, DEFAULT_CAPACITY,
};
pub use element::Element;
pub use typed::TypedVec;

/// The common import surface.
pub mod prelude {
    pub use crate::element::Element;
    pub use crate::typed::TypedVec;
    pub use dynvec_core::{ByteVec, VecError};
}
