use sim::{chip, PartSpec};

use crate::{nor, not};

/// A two-input OR gate, composed from a NOR and an inverter.
pub fn or() -> PartSpec {
    chip(
        "OR",
        "a, b",
        "out",
        &[
            nor().new_part("a=a, b=b, out=x").expect("OR wiring"),
            not().new_part("in=x, out=out").expect("OR wiring"),
        ],
    )
    .expect("OR wiring")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::truth_table2;

    #[test]
    fn test_or_truth_table() {
        assert_eq!(truth_table2(&or()), [false, true, true, true]);
    }
}
