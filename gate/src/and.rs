use sim::{chip, PartSpec};

use crate::{nand, not};

/// A two-input AND gate, composed from a NAND and an inverter.
pub fn and() -> PartSpec {
    chip(
        "AND",
        "a, b",
        "out",
        &[
            nand().new_part("a=a, b=b, out=x").expect("AND wiring"),
            not().new_part("in=x, out=out").expect("AND wiring"),
        ],
    )
    .expect("AND wiring")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::truth_table2;

    #[test]
    fn test_and_truth_table() {
        assert_eq!(truth_table2(&and()), [false, false, false, true]);
    }
}
