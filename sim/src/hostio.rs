use std::cell::RefCell;
use std::rc::Rc;

use crate::part::{Component, ComponentRef, Mounted, PartSpec};
use crate::wire::{Wire, WireRef};

/// A part with a single output `out` that drives `read()` onto it every
/// half-cycle. The host-side hatch for feeding a simulation.
pub fn input<F>(read: F) -> PartSpec
where
    F: Fn() -> bool + 'static,
{
    let read = Rc::new(read);
    PartSpec::primitive("input", "", "out", move |socket| {
        let out = socket.wire("out");
        let component: ComponentRef = Rc::new(RefCell::new(InputPart {
            out: out.clone(),
            read: read.clone(),
            phase: None,
        }));
        Wire::set_source(&out, &component);
        Mounted::Ticker(component)
    })
}

/// A part with a single input `in` that hands the observed bit to `write`
/// every half-cycle. The host-side hatch for probing a simulation.
pub fn output<F>(write: F) -> PartSpec
where
    F: Fn(bool) + 'static,
{
    let write = Rc::new(write);
    PartSpec::primitive("output", "in", "", move |socket| {
        let input = socket.wire("in");
        Mounted::Ticker(Rc::new(RefCell::new(OutputPart {
            input,
            write: write.clone(),
            phase: None,
        })))
    })
}

/// The bus form of [`input`]: `bits` output pins `out[0..bits-1]` driven from
/// the unsigned value of `read()`, least significant bit first.
///
/// # Panics
///
/// Panics if `bits` exceeds the 64 bits a `u64` can carry.
pub fn input_n<F>(bits: usize, read: F) -> PartSpec
where
    F: Fn() -> u64 + 'static,
{
    assert!(bits <= 64, "input_n carries at most 64 bits");
    let read = Rc::new(read);
    PartSpec::primitive("inputN", "", &format!("out[{bits}]"), move |socket| {
        let out = socket.bus("out", bits);
        let component: ComponentRef = Rc::new(RefCell::new(InputBus {
            out: out.clone(),
            read: read.clone(),
            phase: None,
        }));
        for wire in &out {
            Wire::set_source(wire, &component);
        }
        Mounted::Ticker(component)
    })
}

/// The bus form of [`output`]: `bits` input pins `in[0..bits-1]` assembled
/// into an unsigned value, least significant bit first.
///
/// # Panics
///
/// Panics if `bits` exceeds the 64 bits a `u64` can carry.
pub fn output_n<F>(bits: usize, write: F) -> PartSpec
where
    F: Fn(u64) + 'static,
{
    assert!(bits <= 64, "output_n carries at most 64 bits");
    let write = Rc::new(write);
    PartSpec::primitive("outputN", &format!("in[{bits}]"), "", move |socket| {
        let input = socket.bus("in", bits);
        Mounted::Ticker(Rc::new(RefCell::new(OutputBus {
            input,
            write: write.clone(),
            phase: None,
        })))
    })
}

struct InputPart {
    out: WireRef,
    read: Rc<dyn Fn() -> bool>,
    phase: Option<bool>,
}

impl Component for InputPart {
    fn update(&mut self, clk: bool) {
        if self.phase == Some(clk) {
            return;
        }
        self.phase = Some(clk);
        Wire::send(&self.out, clk, (self.read)());
    }
}

struct OutputPart {
    input: WireRef,
    write: Rc<dyn Fn(bool)>,
    phase: Option<bool>,
}

impl Component for OutputPart {
    fn update(&mut self, clk: bool) {
        if self.phase == Some(clk) {
            return;
        }
        self.phase = Some(clk);
        (self.write)(Wire::recv(&self.input, clk));
    }
}

struct InputBus {
    out: Vec<WireRef>,
    read: Rc<dyn Fn() -> u64>,
    phase: Option<bool>,
}

impl Component for InputBus {
    fn update(&mut self, clk: bool) {
        if self.phase == Some(clk) {
            return;
        }
        self.phase = Some(clk);
        let value = (self.read)();
        for (bit, wire) in self.out.iter().enumerate() {
            Wire::send(wire, clk, (value >> bit) & 1 == 1);
        }
    }
}

struct OutputBus {
    input: Vec<WireRef>,
    write: Rc<dyn Fn(u64)>,
    phase: Option<bool>,
}

impl Component for OutputBus {
    fn update(&mut self, clk: bool) {
        if self.phase == Some(clk) {
            return;
        }
        self.phase = Some(clk);
        let mut value = 0u64;
        for (bit, wire) in self.input.iter().enumerate() {
            if Wire::recv(wire, clk) {
                value |= 1 << bit;
            }
        }
        (self.write)(value);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::Circuit;

    #[test]
    fn test_input_feeds_output() {
        let source = Rc::new(Cell::new(false));
        let seen = Rc::new(Cell::new(true));
        let (read, probe) = (source.clone(), seen.clone());
        let mut circuit = Circuit::new(vec![
            input(move || read.get()).new_part("out=x").unwrap(),
            output(move |value| probe.set(value)).new_part("in=x").unwrap(),
        ])
        .unwrap();
        circuit.tick_tock();
        assert!(!seen.get());
        source.set(true);
        circuit.tick_tock();
        assert!(seen.get());
    }

    #[test]
    fn test_bus_round_trip_is_unsigned() {
        let source = Rc::new(Cell::new(0u64));
        let seen = Rc::new(Cell::new(0u64));
        let (read, probe) = (source.clone(), seen.clone());
        let mut circuit = Circuit::new(vec![
            input_n(8, move || read.get()).new_part("out[0..7]=bus[0..7]").unwrap(),
            output_n(8, move |value| probe.set(value)).new_part("in[0..7]=bus[0..7]").unwrap(),
        ])
        .unwrap();
        for value in [0u64, 1, 2, 127, 128, 200, 255] {
            source.set(value);
            circuit.tick_tock();
            assert_eq!(seen.get(), value);
        }
        // Bits beyond the bus width fall off.
        source.set(256 + 5);
        circuit.tick_tock();
        assert_eq!(seen.get(), 5);
    }

    #[test]
    fn test_input_bus_splits_bits() {
        let bits: Vec<Rc<Cell<bool>>> = (0..3).map(|_| Rc::new(Cell::new(false))).collect();
        let mut parts = vec![input_n(3, || 0b101).new_part("out[0..2]=bus[0..2]").unwrap()];
        for (i, bit) in bits.iter().enumerate() {
            let probe = bit.clone();
            parts.push(
                output(move |value| probe.set(value))
                    .new_part(&format!("in=bus[{i}]"))
                    .unwrap(),
            );
        }
        let mut circuit = Circuit::new(parts).unwrap();
        circuit.tick_tock();
        assert!(bits[0].get());
        assert!(!bits[1].get());
        assert!(bits[2].get());
    }
}
