//! A gate-level digital logic simulator that doubles as an embedded hardware
//! description framework. Parts are wired together with small connection
//! strings, composed into chips, and mounted into a circuit driven by a
//! two-phase clock.
//!
//! # Concepts
//!
//! The following is a short guide to the concepts in the framework.
//!
//! ## Part specs and parts
//!
//! A [`PartSpec`] is the immutable blueprint of a reusable component: a name,
//! an interface of input and output pins, and a mount function that knows how
//! to instantiate the component over concrete wires. Specs are created once
//! and reused freely; [`PartSpec::new_part`] pairs a spec with a parsed
//! connection string, yielding a [`Part`] ready to be placed inside a chip.
//!
//! Interfaces are declared with pin specs like `"a, b, data[4]"`, expanded by
//! [`io`] into scalar pin names (`data[4]` is a bus of width four).
//! Connection strings assign part pins to chip-side wire names, one
//! assignment per pin or bus slice: `"a=x, data[0..3]=y[4..7]"`. The reserved
//! names `false`, `true` and `clk` may appear on the right-hand side of any
//! assignment and are bound to the circuit's constant sources.
//!
//! ## Chips
//!
//! [`chip`] composes parts into a new spec. It resolves which pins share a
//! wire, validates the result (a wire has exactly one driver, nothing drives
//! a constant or a chip input, no name dangles), and collapses the chip-side
//! labels away, so a composed chip adds no runtime overhead of its own: when
//! mounted it dissolves into its leaf components sharing a common pool of
//! wires. Chips nest arbitrarily.
//!
//! ## Wires and the clock
//!
//! A [`Wire`] carries one bit with double-buffer semantics: a bit written
//! during one half-cycle becomes visible to readers in the next. Each wire
//! has exactly one source component. Readers pull: reading a wire whose bit
//! is stale for the current half-cycle runs its source first, so evaluation
//! order never matters and no topological sort exists anywhere. A
//! combinational loop simply observes its own previous bit, which is how
//! feedback circuits (latches, ring oscillators) get their propagation-delay
//! behavior.
//!
//! The [`Circuit`] owns the wires and the flattened leaves. [`Circuit::tick`]
//! raises the clock, [`Circuit::tock`] lowers it; each transition runs every
//! sequential leaf once. Sequential parts sample on the rising edge and
//! present their new output during the following low half-cycle.
//!
//! ## Authoring primitives
//!
//! A primitive part is a mount closure handed to [`PartSpec::primitive`]. The
//! closure acquires wires from the [`Socket`], builds a value implementing
//! [`Component`], registers it as the source of its output wires, and wraps
//! it in a [`Mounted`] marker: an `Updater` for pure combinational logic or a
//! `Ticker` for anything the scheduler must run every half-cycle. The
//! [`input`], [`output`], [`input_n`] and [`output_n`] parts bridge a running
//! circuit to host code through plain closures.
//!
//! # Example
//!
//! Authoring a NAND primitive, composing an XOR chip out of four of them, and
//! simulating it:
//!
//! ```
//! use std::cell::{Cell, RefCell};
//! use std::rc::Rc;
//! use sim::{chip, input, output, Circuit, Component, ComponentRef, Mounted, PartSpec, Wire, WireRef};
//!
//! struct Nand {
//!     a: WireRef,
//!     b: WireRef,
//!     out: WireRef,
//! }
//!
//! impl Component for Nand {
//!     fn update(&mut self, clk: bool) {
//!         let a = Wire::recv(&self.a, clk);
//!         let b = Wire::recv(&self.b, clk);
//!         Wire::send(&self.out, clk, !(a && b));
//!     }
//! }
//!
//! fn nand() -> PartSpec {
//!     PartSpec::primitive("NAND", "a, b", "out", |socket| {
//!         let (a, b) = (socket.wire("a"), socket.wire("b"));
//!         let out = socket.wire("out");
//!         let component: ComponentRef = Rc::new(RefCell::new(Nand { a, b, out: out.clone() }));
//!         Wire::set_source(&out, &component);
//!         Mounted::Updater(component)
//!     })
//! }
//!
//! fn main() -> sim::Result<()> {
//!     let xor = chip("XOR", "a, b", "out", &[
//!         nand().new_part("a=a, b=b, out=nab")?,
//!         nand().new_part("a=a, b=nab, out=x")?,
//!         nand().new_part("a=nab, b=b, out=y")?,
//!         nand().new_part("a=x, b=y, out=out")?,
//!     ])?;
//!
//!     let switch = Rc::new(Cell::new(false));
//!     let probe = Rc::new(Cell::new(false));
//!     let (read, write) = (switch.clone(), probe.clone());
//!     let mut circuit = Circuit::new(vec![
//!         input(move || read.get()).new_part("out=a")?,
//!         xor.new_part("a=a, b=true, out=result")?,
//!         output(move |value| write.set(value)).new_part("in=result")?,
//!     ])?;
//!
//!     circuit.tick_tock();
//!     assert!(probe.get()); // false XOR true
//!     switch.set(true);
//!     circuit.tick_tock();
//!     assert!(!probe.get()); // true XOR true
//!     Ok(())
//! }
//! ```
//!
//! # Scheduling model
//!
//! The simulator is single-threaded and deliberately naive: no event queue,
//! no change propagation, no timing model beyond the one-step delay the
//! double buffer implies. For a given circuit and the same input samples the
//! wire trace is fully deterministic.

#![deny(missing_docs)]

// Modules.
mod chip;
mod circuit;
mod conn;
mod error;
mod hostio;
mod part;
mod pin;
mod socket;
mod wire;
mod wiring;

// Re-exports.
pub use chip::chip;
pub use circuit::Circuit;
pub use conn::Conn;
pub use error::{Error, Result};
pub use hostio::{input, input_n, output, output_n};
pub use part::{Component, ComponentRef, Mounted, Part, PartSpec};
pub use pin::io;
pub use socket::Socket;
pub use wire::{Wire, WireRef};
