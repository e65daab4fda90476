//! The built-in part library.
//!
//! Three primitives (NAND, NOR, NOT) are authored directly against the
//! simulator's mount interface; every other combinational gate here is a
//! chip composed from them, so mounting any of these leaves nothing but
//! primitive gates at runtime. The D flip-flop is the one sequential part
//! and is authored through `part_derive::Part`.
#![deny(missing_docs)]

mod and;
mod buffer;
mod demux;
mod dff;
mod mux;
mod nand;
mod nor;
mod not;
mod or;
mod xnor;
mod xor;

pub use and::and;
pub use buffer::buffer;
pub use demux::demux;
pub use dff::{dff, Dff};
pub use mux::mux;
pub use nand::nand;
pub use nor::nor;
pub use not::not;
pub use or::or;
pub use xnor::xnor;
pub use xor::xor;

#[cfg(test)]
pub(crate) mod harness {
    use std::cell::Cell;
    use std::rc::Rc;

    use sim::{input, output, Circuit, PartSpec};

    /// Runs a two-input gate (interface `a, b` -> `out`) through every input
    /// combination, one tick-tock per case, returning the four outputs in
    /// `(false,false), (false,true), (true,false), (true,true)` order.
    pub(crate) fn truth_table2(spec: &PartSpec) -> Vec<bool> {
        let a = Rc::new(Cell::new(false));
        let b = Rc::new(Cell::new(false));
        let seen = Rc::new(Cell::new(false));
        let (read_a, read_b, probe) = (a.clone(), b.clone(), seen.clone());
        let mut circuit = Circuit::new(vec![
            input(move || read_a.get()).new_part("out=a").unwrap(),
            input(move || read_b.get()).new_part("out=b").unwrap(),
            spec.new_part("a=a, b=b, out=x").unwrap(),
            output(move |value| probe.set(value)).new_part("in=x").unwrap(),
        ])
        .unwrap();
        let mut table = Vec::new();
        for (va, vb) in [(false, false), (false, true), (true, false), (true, true)] {
            a.set(va);
            b.set(vb);
            circuit.tick_tock();
            table.push(seen.get());
        }
        table
    }
}
