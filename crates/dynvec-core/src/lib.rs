//! Type-erased dynamic array core.
//!
//! The container stores fixed-width elements as raw bytes: the element
//! width is chosen at construction and every element occupies one
//! `element_size`-byte slot in a single contiguous buffer. Elements move
//! in and out of the container by value copy only — the buffer never
//! aliases caller memory, and every value handed back to the caller is
//! an independent owned copy.
//!
//! # Architecture
//!
//! ```text
//! ByteVec (length + invariants)
//! └── RawBuffer (capacity × element_size zeroed bytes, doubling growth)
//!     derived: map / sorted / reversed / subvec (new vector, source untouched)
//!     diagnostics: render / print (read-only), abort (opt-in fail-fast)
//! ```
//!
//! # Error convention
//!
//! Every fallible operation returns `Result<_, VecError>`; the error set
//! is closed (see [`VecError`]). No operation terminates the process on
//! its own — [`abort`] is the only escalation path and is always invoked
//! explicitly by the caller.
//!
//! # Safety posture
//!
//! Type erasure is expressed over a full-capacity zero-initialised
//! `Vec<u8>` plus a length cursor. No raw pointers, no `unsafe`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod raw;
pub mod render;
mod sort;
mod transform;
pub mod vec;

pub use error::{abort, VecError};
pub use render::{print, print_dbg, render, render_dbg};
pub use vec::{destroy, ByteVec, DEFAULT_CAPACITY};
