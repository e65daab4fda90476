use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::conn::{parse_connections, Conn};
use crate::error::Result;
use crate::pin::{ensure_unique, io};
use crate::socket::Socket;

/// A leaf of the simulation: anything with an `update` routine the scheduler
/// or an eager reader can run for the current half-cycle.
pub trait Component {
    /// Recomputes the component for half-cycle `clk`, reading its input wires
    /// with [`crate::Wire::recv`] and driving its outputs with
    /// [`crate::Wire::send`].
    fn update(&mut self, clk: bool);
}

/// A convenience alias for a shared internally-mutable reference to a
/// `Component`, the form in which wires and the circuit hold their leaves.
pub type ComponentRef = Rc<RefCell<dyn Component>>;

/// What a mount function hands back to the framework.
pub enum Mounted {
    /// A pure combinational leaf, evaluated on demand through wire pulls.
    Updater(ComponentRef),
    /// A sequential or side-effecting leaf the scheduler must run every
    /// half-cycle.
    Ticker(ComponentRef),
    /// A transparent container of sub-components, used by composite chips so
    /// that composition leaves no residual work at runtime.
    Wrapper(Vec<Mounted>),
}

type MountFn = Rc<dyn Fn(&mut Socket) -> Mounted>;

/// The immutable blueprint of a reusable component: its name, interface, the
/// pinout mapping exposed pin names to chip-internal wire names, and the
/// mount function that instantiates it inside a circuit.
///
/// Specs are cheap to clone and may be reused across many chips and circuits;
/// each mount produces a fresh component over fresh wires.
#[derive(Clone)]
pub struct PartSpec {
    name: String,
    inputs: Vec<String>,
    outputs: Vec<String>,
    pinout: HashMap<String, String>,
    mount: MountFn,
}

impl std::fmt::Debug for PartSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PartSpec")
            .field("name", &self.name)
            .field("inputs", &self.inputs)
            .field("outputs", &self.outputs)
            .field("pinout", &self.pinout)
            .finish_non_exhaustive()
    }
}

impl PartSpec {
    /// Builds a primitive part spec from pin-spec strings, e.g.
    /// `PartSpec::primitive("NAND", "a, b", "out", |socket| ...)`.
    ///
    /// The pinout is the identity. The mount function receives the socket of
    /// the enclosing instance, acquires its wires with [`Socket::wire`] or
    /// [`Socket::bus`], registers itself as the source of its output wires,
    /// and returns the component.
    ///
    /// # Panics
    ///
    /// Panics if a pin spec does not parse or declares a name twice; part
    /// interfaces are written by part authors, not end users, so a bad one is
    /// a programming error.
    pub fn primitive(
        name: &str,
        inputs: &str,
        outputs: &str,
        mount: impl Fn(&mut Socket) -> Mounted + 'static,
    ) -> PartSpec {
        let inputs = match io(inputs) {
            Ok(pins) => pins,
            Err(err) => panic!("part {name}: {err}"),
        };
        let outputs = match io(outputs) {
            Ok(pins) => pins,
            Err(err) => panic!("part {name}: {err}"),
        };
        PartSpec::with_pins(name, inputs, outputs, mount)
    }

    /// Builds a primitive part spec from already-expanded pin names. This is
    /// the entry point used by generated code (`#[derive(Part)]`).
    ///
    /// # Panics
    ///
    /// Panics if the combined interface declares a name twice.
    pub fn with_pins(
        name: &str,
        inputs: Vec<String>,
        outputs: Vec<String>,
        mount: impl Fn(&mut Socket) -> Mounted + 'static,
    ) -> PartSpec {
        let combined: Vec<String> = inputs.iter().chain(outputs.iter()).cloned().collect();
        if let Err(err) = ensure_unique(&combined) {
            panic!("part {name}: {err}");
        }
        let pinout = combined.iter().map(|pin| (pin.clone(), pin.clone())).collect();
        PartSpec {
            name: name.to_string(),
            inputs,
            outputs,
            pinout,
            mount: Rc::new(mount),
        }
    }

    /// Assembles a composite spec whose pinout was computed by the chip
    /// builder.
    pub(crate) fn assemble(
        name: &str,
        inputs: Vec<String>,
        outputs: Vec<String>,
        pinout: HashMap<String, String>,
        mount: MountFn,
    ) -> PartSpec {
        PartSpec {
            name: name.to_string(),
            inputs,
            outputs,
            pinout,
            mount,
        }
    }

    /// The part's name, as used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The expanded input pin names, in declaration order.
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// The expanded output pin names, in declaration order.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Parses a connection string and attaches it to this spec, producing an
    /// instance ready to be composed into a chip or circuit.
    pub fn new_part(&self, connections: &str) -> Result<Part> {
        let conns = parse_connections(connections)?;
        Ok(Part {
            spec: self.clone(),
            conns,
        })
    }

    pub(crate) fn pinout(&self) -> &HashMap<String, String> {
        &self.pinout
    }

    pub(crate) fn mount(&self, socket: &mut Socket) -> Mounted {
        (self.mount)(socket)
    }
}

/// A part spec together with its connection configuration inside one chip.
#[derive(Clone)]
pub struct Part {
    spec: PartSpec,
    conns: Vec<Conn>,
}

impl Part {
    /// The underlying spec.
    pub fn spec(&self) -> &PartSpec {
        &self.spec
    }

    pub(crate) fn conns(&self) -> &[Conn] {
        &self.conns
    }
}
