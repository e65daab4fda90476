use gate::or;
use sim::{chip, PartSpec};

use super::half_adder;

/// Adds two bits and a carry: inputs `a, b, cin`, sum `s` and carry `cout`.
/// Two half adders chained through an OR on their carries.
pub fn full_adder() -> PartSpec {
    chip(
        "FullAdder",
        "a, b, cin",
        "s, cout",
        &[
            half_adder().new_part("a=a, b=b, s=ab, c=c1").expect("full adder wiring"),
            half_adder().new_part("a=ab, b=cin, s=s, c=c2").expect("full adder wiring"),
            or().new_part("a=c1, b=c2, out=cout").expect("full adder wiring"),
        ],
    )
    .expect("full adder wiring")
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use sim::{input, output, Circuit};

    use super::*;

    #[test]
    fn test_full_adder_adds() {
        let a = Rc::new(Cell::new(false));
        let b = Rc::new(Cell::new(false));
        let cin = Rc::new(Cell::new(false));
        let sum = Rc::new(Cell::new(false));
        let carry = Rc::new(Cell::new(false));
        let (read_a, read_b, read_cin, probe_s, probe_c) = (
            a.clone(),
            b.clone(),
            cin.clone(),
            sum.clone(),
            carry.clone(),
        );
        let mut circuit = Circuit::new(vec![
            input(move || read_a.get()).new_part("out=a").unwrap(),
            input(move || read_b.get()).new_part("out=b").unwrap(),
            input(move || read_cin.get()).new_part("out=cin").unwrap(),
            full_adder().new_part("a=a, b=b, cin=cin, s=s, cout=cout").unwrap(),
            output(move |value| probe_s.set(value)).new_part("in=s").unwrap(),
            output(move |value| probe_c.set(value)).new_part("in=cout").unwrap(),
        ])
        .unwrap();
        for bits in 0..8u8 {
            let (va, vb, vc) = (bits & 1 == 1, bits & 2 == 2, bits & 4 == 4);
            a.set(va);
            b.set(vb);
            cin.set(vc);
            circuit.tick_tock();
            let total = va as u8 + vb as u8 + vc as u8;
            assert_eq!(sum.get(), total % 2 == 1);
            assert_eq!(carry.get(), total / 2 == 1);
        }
    }
}
