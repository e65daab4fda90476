use gate::{and, xor};
use sim::{chip, PartSpec};

/// Adds two bits: inputs `a, b`, sum `s` and carry `c`.
pub fn half_adder() -> PartSpec {
    chip(
        "HalfAdder",
        "a, b",
        "s, c",
        &[
            xor().new_part("a=a, b=b, out=s").expect("half adder wiring"),
            and().new_part("a=a, b=b, out=c").expect("half adder wiring"),
        ],
    )
    .expect("half adder wiring")
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use sim::{input, output, Circuit};

    use super::*;

    #[test]
    fn test_half_adder_adds() {
        let a = Rc::new(Cell::new(false));
        let b = Rc::new(Cell::new(false));
        let sum = Rc::new(Cell::new(false));
        let carry = Rc::new(Cell::new(false));
        let (read_a, read_b, probe_s, probe_c) =
            (a.clone(), b.clone(), sum.clone(), carry.clone());
        let mut circuit = Circuit::new(vec![
            input(move || read_a.get()).new_part("out=a").unwrap(),
            input(move || read_b.get()).new_part("out=b").unwrap(),
            half_adder().new_part("a=a, b=b, s=s, c=c").unwrap(),
            output(move |value| probe_s.set(value)).new_part("in=s").unwrap(),
            output(move |value| probe_c.set(value)).new_part("in=c").unwrap(),
        ])
        .unwrap();
        for (va, vb) in [(false, false), (false, true), (true, false), (true, true)] {
            a.set(va);
            b.set(vb);
            circuit.tick_tock();
            let total = va as u8 + vb as u8;
            assert_eq!(sum.get(), total % 2 == 1);
            assert_eq!(carry.get(), total / 2 == 1);
        }
    }
}
