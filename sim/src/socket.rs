use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::part::PartSpec;
use crate::wire::{Wire, WireRef};
use crate::wiring::CONST_NAMES;

/// The circuit-wide wire allocator. The first three slots are fixed: the
/// `false` and `true` constants and the scheduler-driven `clk` wire.
pub(crate) struct WirePool {
    wires: Vec<WireRef>,
}

impl WirePool {
    pub(crate) fn new() -> WirePool {
        WirePool {
            wires: vec![
                Wire::constant(CONST_NAMES[0], false),
                Wire::constant(CONST_NAMES[1], true),
                Wire::clock(CONST_NAMES[2]),
            ],
        }
    }

    pub(crate) fn alloc(&mut self, name: &str) -> WireRef {
        let wire = Wire::new(name);
        self.wires.push(wire.clone());
        wire
    }

    pub(crate) fn constant(&self, index: usize) -> WireRef {
        self.wires[index].clone()
    }

    pub(crate) fn clk_wire(&self) -> WireRef {
        self.wires[2].clone()
    }

    pub(crate) fn wires(&self) -> &[WireRef] {
        &self.wires
    }

    pub(crate) fn len(&self) -> usize {
        self.wires.len()
    }
}

/// The per-chip-instance scope that maps canonical wire names to wires.
///
/// A part's mount function asks its socket for the wires behind its pin
/// names; the enclosing chip decides (through [`Socket::nest`]) which of its
/// own wires those names resolve to. The reserved names `false`, `true` and
/// `clk` are bound in every socket.
pub struct Socket {
    pool: Rc<RefCell<WirePool>>,
    names: HashMap<String, WireRef>,
}

impl Socket {
    /// A fresh scope over the pool with only the constants bound.
    pub(crate) fn root(pool: Rc<RefCell<WirePool>>) -> Socket {
        let mut names = HashMap::new();
        for (index, name) in CONST_NAMES.iter().enumerate() {
            names.insert(name.to_string(), pool.borrow().constant(index));
        }
        Socket { pool, names }
    }

    /// Looks up or allocates the wire behind `name` in this scope.
    pub fn wire(&mut self, name: &str) -> WireRef {
        if let Some(wire) = self.names.get(name) {
            return wire.clone();
        }
        let wire = self.pool.borrow_mut().alloc(name);
        self.names.insert(name.to_string(), wire.clone());
        wire
    }

    /// Shorthand for the indexed wires of a bus:
    /// `[wire("p[0]"), ..., wire("p[n-1]")]`.
    pub fn bus(&mut self, prefix: &str, n: usize) -> Vec<WireRef> {
        (0..n).map(|i| self.wire(&format!("{prefix}[{i}]"))).collect()
    }

    /// Creates the scope for a sub-part instance: every exposed pin of the
    /// sub-part is resolved through its pinout and bound to the wire behind
    /// the canonical name `canon` in *this* scope.
    pub(crate) fn nest(&mut self, spec: &PartSpec, pins: &[(String, String)]) -> Socket {
        let mut child = Socket::root(self.pool.clone());
        for (exposed, canon) in pins {
            let wire = self.wire(canon);
            let internal = spec.pinout()[exposed.as_str()].clone();
            child.names.entry(internal).or_insert(wire);
        }
        child
    }
}
