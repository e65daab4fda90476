use sim::{chip, PartSpec};

use crate::{not, xor};

/// A two-input XNOR gate: an inverted XOR.
pub fn xnor() -> PartSpec {
    chip(
        "XNOR",
        "a, b",
        "out",
        &[
            xor().new_part("a=a, b=b, out=x").expect("XNOR wiring"),
            not().new_part("in=x, out=out").expect("XNOR wiring"),
        ],
    )
    .expect("XNOR wiring")
}
