use sim::{chip, PartSpec};

use crate::not;

/// A buffer: `out` follows `in`, two inverter delays later.
pub fn buffer() -> PartSpec {
    chip(
        "BUFFER",
        "in",
        "out",
        &[
            not().new_part("in=in, out=x").expect("BUFFER wiring"),
            not().new_part("in=x, out=out").expect("BUFFER wiring"),
        ],
    )
    .expect("BUFFER wiring")
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use sim::{input, output, Circuit};

    use super::*;

    #[test]
    fn test_buffer_follows_input() {
        let source = Rc::new(Cell::new(false));
        let seen = Rc::new(Cell::new(true));
        let (read, probe) = (source.clone(), seen.clone());
        let mut circuit = Circuit::new(vec![
            input(move || read.get()).new_part("out=a").unwrap(),
            buffer().new_part("in=a, out=x").unwrap(),
            output(move |value| probe.set(value)).new_part("in=x").unwrap(),
        ])
        .unwrap();
        for value in [false, true, true, false] {
            source.set(value);
            circuit.tick_tock();
            assert_eq!(seen.get(), value);
        }
    }
}
