//! Build an integer vector, map it into fractions, and print both.

use dynvec::prelude::*;

fn main() {
    let mut ints: TypedVec<i32> = TypedVec::new(0).unwrap_or_else(|e| dynvec::abort(e));
    ints.print().expect("stdout");

    for x in [1234, 5132, 9604] {
        if let Err(e) = ints.push(x) {
            dynvec::abort(e);
        }
    }
    ints.print().expect("stdout");

    let fractions: TypedVec<f32> = ints
        .map(|x| x as f32 / 10.0)
        .unwrap_or_else(|e| dynvec::abort(e));
    fractions.print().expect("stdout");
    ints.print().expect("stdout");

    dynvec::destroy(Some(fractions.into_erased())).expect("live handle");
    dynvec::destroy(Some(ints.into_erased())).expect("live handle");
}
