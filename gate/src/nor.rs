use std::cell::RefCell;
use std::rc::Rc;

use sim::{Component, ComponentRef, Mounted, PartSpec, Wire, WireRef};

/// A two-input NOR gate with inputs `a, b` and output `out`.
pub fn nor() -> PartSpec {
    PartSpec::primitive("NOR", "a, b", "out", |socket| {
        let a = socket.wire("a");
        let b = socket.wire("b");
        let out = socket.wire("out");
        let component: ComponentRef = Rc::new(RefCell::new(Nor {
            a,
            b,
            out: out.clone(),
        }));
        Wire::set_source(&out, &component);
        Mounted::Updater(component)
    })
}

struct Nor {
    a: WireRef,
    b: WireRef,
    out: WireRef,
}

impl Component for Nor {
    fn update(&mut self, clk: bool) {
        let a = Wire::recv(&self.a, clk);
        let b = Wire::recv(&self.b, clk);
        Wire::send(&self.out, clk, !(a || b));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use sim::{chip, input, output, Circuit};

    use super::*;
    use crate::harness::truth_table2;

    #[test]
    fn test_nor_truth_table() {
        assert_eq!(truth_table2(&nor()), [true, false, false, false]);
    }

    #[test]
    fn test_nor_clock() {
        // A NOR with its output fed back to one input: out = NOR(disable, out).
        // Disabled, the loop pins low; enabled, the double buffer's one-step
        // propagation delay turns it into a ring oscillator.
        let disable = Rc::new(Cell::new(true));
        let seen = Rc::new(Cell::new(false));
        let (read, probe) = (disable.clone(), seen.clone());
        let oscillator = chip(
            "oscillator",
            "disable",
            "out",
            &[nor().new_part("a=disable, b=out, out=out").unwrap()],
        )
        .unwrap();
        let mut circuit = Circuit::new(vec![
            input(move || read.get()).new_part("out=disable").unwrap(),
            oscillator.new_part("disable=disable, out=osc").unwrap(),
            output(move |value| probe.set(value)).new_part("in=osc").unwrap(),
        ])
        .unwrap();

        for _ in 0..4 {
            circuit.tick();
            assert!(!seen.get());
            circuit.tock();
            assert!(!seen.get());
        }

        disable.set(false);
        let mut last = seen.get();
        for _ in 0..8 {
            circuit.tick();
            assert_eq!(seen.get(), !last);
            last = seen.get();
            circuit.tock();
            assert_eq!(seen.get(), !last);
            last = seen.get();
        }
    }
}
