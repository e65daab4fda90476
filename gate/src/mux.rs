use sim::{chip, PartSpec};

use crate::{and, not, or};

/// A two-way multiplexer with inputs `a, b, sel` and output `out`.
///
/// `out` is `a` while `sel` is low and `b` while it is high.
pub fn mux() -> PartSpec {
    chip(
        "MUX",
        "a, b, sel",
        "out",
        &[
            not().new_part("in=sel, out=nsel").expect("MUX wiring"),
            and().new_part("a=a, b=nsel, out=keepA").expect("MUX wiring"),
            and().new_part("a=b, b=sel, out=keepB").expect("MUX wiring"),
            or().new_part("a=keepA, b=keepB, out=out").expect("MUX wiring"),
        ],
    )
    .expect("MUX wiring")
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use sim::{input, output, Circuit};

    use super::*;

    #[test]
    fn test_mux_selects() {
        let a = Rc::new(Cell::new(false));
        let b = Rc::new(Cell::new(false));
        let sel = Rc::new(Cell::new(false));
        let seen = Rc::new(Cell::new(false));
        let (read_a, read_b, read_sel, probe) =
            (a.clone(), b.clone(), sel.clone(), seen.clone());
        let mut circuit = Circuit::new(vec![
            input(move || read_a.get()).new_part("out=a").unwrap(),
            input(move || read_b.get()).new_part("out=b").unwrap(),
            input(move || read_sel.get()).new_part("out=sel").unwrap(),
            mux().new_part("a=a, b=b, sel=sel, out=x").unwrap(),
            output(move |value| probe.set(value)).new_part("in=x").unwrap(),
        ])
        .unwrap();
        for (va, vb) in [(false, false), (false, true), (true, false), (true, true)] {
            a.set(va);
            b.set(vb);
            sel.set(false);
            circuit.tick_tock();
            assert_eq!(seen.get(), va);
            sel.set(true);
            circuit.tick_tock();
            assert_eq!(seen.get(), vb);
        }
    }
}
