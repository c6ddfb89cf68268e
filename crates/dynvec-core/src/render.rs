//! Read-only debug rendering of vectors.
//!
//! A live vector renders as `<e0, e1, …, en>` (or `<>` when empty) and
//! an absent handle as the fixed placeholder `(nullvec)`. Rendering
//! never mutates vector state.

use std::io::{self, Write};

use crate::vec::ByteVec;

/// Render `v` to `w` using a caller-supplied per-element printer.
///
/// The printer receives each element's bytes in index order and writes
/// its own representation; separators and delimiters are handled here.
pub fn render<W, F>(v: Option<&ByteVec>, w: &mut W, mut printer: F) -> io::Result<()>
where
    W: Write,
    F: FnMut(&[u8], &mut W) -> io::Result<()>,
{
    let Some(v) = v else {
        return write!(w, "(nullvec)");
    };
    if v.is_empty() {
        return write!(w, "<>");
    }
    write!(w, "<")?;
    for i in 0..v.len() {
        if i > 0 {
            write!(w, ", ")?;
        }
        printer(v.slot_view(i), w)?;
    }
    write!(w, ">")
}

/// Render `v` to stdout with a trailing newline.
pub fn print<F>(v: Option<&ByteVec>, printer: F) -> io::Result<()>
where
    F: FnMut(&[u8], &mut io::StdoutLock<'_>) -> io::Result<()>,
{
    let mut stdout = io::stdout().lock();
    render(v, &mut stdout, printer)?;
    writeln!(stdout)
}

/// Render `v` to `w` printing each element as lowercase hex bytes.
///
/// A printer-free view for quick inspection when no typed printer is
/// at hand.
pub fn render_dbg<W: Write>(v: Option<&ByteVec>, w: &mut W) -> io::Result<()> {
    render(v, w, |bytes, w| {
        for b in bytes {
            write!(w, "{b:02x}")?;
        }
        Ok(())
    })
}

/// Render `v` to stdout as hex slots with a trailing newline.
pub fn print_dbg(v: Option<&ByteVec>) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    render_dbg(v, &mut stdout)?;
    writeln!(stdout)
}
