//! The closed error set for vector operations.

use std::error::Error;
use std::fmt;
use std::io::Write;
use std::process;

/// Errors that can occur during vector operations.
///
/// The set is closed: every failure path in the crate maps to exactly
/// one of these kinds. Success is expressed through `Ok(_)`, never
/// through a sentinel value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VecError {
    /// Buffer allocation failed at construction time.
    AllocFailed,
    /// Buffer reallocation failed while growing. The vector keeps its
    /// prior capacity and contents.
    ReallocFailed,
    /// The handle was absent (`None` passed where a vector was required).
    NullVec,
    /// Pop or remove was attempted on an empty vector.
    IllegalDelete,
    /// Read access on an empty vector, or slice bounds outside the
    /// source vector.
    IllegalAccess,
    /// An index outside the valid range: `index >= len` for access and
    /// removal, `index > len` for insertion.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// The vector length at the time of the call.
        len: usize,
    },
}

impl fmt::Display for VecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocFailed => write!(f, "allocation failed"),
            Self::ReallocFailed => write!(f, "reallocation failed"),
            Self::NullVec => write!(f, "null vector handle"),
            Self::IllegalDelete => write!(f, "illegal deletion from empty vector"),
            Self::IllegalAccess => write!(f, "illegal access"),
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
        }
    }
}

impl Error for VecError {}

/// Abort the process with a human-readable rendering of `err`.
///
/// This is the opt-in fail-fast escape hatch: a caller that has
/// inspected an error and cannot continue invokes it explicitly. No
/// operation in this crate ever calls it on the caller's behalf.
///
/// The message is written to stderr in ANSI red, then the process exits
/// with a failure status.
pub fn abort(err: VecError) -> ! {
    // Best effort: a broken stderr must not prevent the exit.
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "\x1b[31m{err}\x1b[m");
    let _ = stderr.flush();
    process::exit(1);
}
