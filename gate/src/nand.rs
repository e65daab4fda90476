use std::cell::RefCell;
use std::rc::Rc;

use sim::{Component, ComponentRef, Mounted, PartSpec, Wire, WireRef};

/// A two-input NAND gate with inputs `a, b` and output `out`.
///
/// This is the primitive everything else is built from; a NAND alone is
/// functionally complete, though the library keeps NOR and NOT as primitives
/// too so composed gates stay shallow.
pub fn nand() -> PartSpec {
    PartSpec::primitive("NAND", "a, b", "out", |socket| {
        let a = socket.wire("a");
        let b = socket.wire("b");
        let out = socket.wire("out");
        let component: ComponentRef = Rc::new(RefCell::new(Nand {
            a,
            b,
            out: out.clone(),
        }));
        Wire::set_source(&out, &component);
        Mounted::Updater(component)
    })
}

struct Nand {
    a: WireRef,
    b: WireRef,
    out: WireRef,
}

impl Component for Nand {
    fn update(&mut self, clk: bool) {
        let a = Wire::recv(&self.a, clk);
        let b = Wire::recv(&self.b, clk);
        Wire::send(&self.out, clk, !(a && b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::truth_table2;

    #[test]
    fn test_nand_truth_table() {
        assert_eq!(truth_table2(&nand()), [true, true, true, false]);
    }
}
