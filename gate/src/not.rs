use std::cell::RefCell;
use std::rc::Rc;

use sim::{Component, ComponentRef, Mounted, PartSpec, Wire, WireRef};

/// An inverter with input `in` and output `out`.
pub fn not() -> PartSpec {
    PartSpec::primitive("NOT", "in", "out", |socket| {
        let input = socket.wire("in");
        let out = socket.wire("out");
        let component: ComponentRef = Rc::new(RefCell::new(Not {
            input,
            out: out.clone(),
        }));
        Wire::set_source(&out, &component);
        Mounted::Updater(component)
    })
}

struct Not {
    input: WireRef,
    out: WireRef,
}

impl Component for Not {
    fn update(&mut self, clk: bool) {
        let value = Wire::recv(&self.input, clk);
        Wire::send(&self.out, clk, !value);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use sim::{input, output, Circuit};

    use super::*;

    #[test]
    fn test_not_inverts() {
        let source = Rc::new(Cell::new(false));
        let seen = Rc::new(Cell::new(false));
        let (read, probe) = (source.clone(), seen.clone());
        let mut circuit = Circuit::new(vec![
            input(move || read.get()).new_part("out=a").unwrap(),
            not().new_part("in=a, out=x").unwrap(),
            output(move |value| probe.set(value)).new_part("in=x").unwrap(),
        ])
        .unwrap();
        circuit.tick_tock();
        assert!(seen.get());
        source.set(true);
        circuit.tick_tock();
        assert!(!seen.get());
    }
}
