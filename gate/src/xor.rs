use sim::{chip, PartSpec};

use crate::nand;

/// A two-input XOR gate, the classic four-NAND network:
///
/// ```text
/// nandAB = NAND(a, b)
/// outA   = NAND(a, nandAB)
/// outB   = NAND(nandAB, b)
/// out    = NAND(outA, outB)
/// ```
pub fn xor() -> PartSpec {
    chip(
        "XOR",
        "a, b",
        "out",
        &[
            nand().new_part("a=a, b=b, out=nandAB").expect("XOR wiring"),
            nand().new_part("a=a, b=nandAB, out=outA").expect("XOR wiring"),
            nand().new_part("a=nandAB, b=b, out=outB").expect("XOR wiring"),
            nand().new_part("a=outA, b=outB, out=out").expect("XOR wiring"),
        ],
    )
    .expect("XOR wiring")
}
