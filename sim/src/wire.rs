use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::part::{Component, ComponentRef};

/// A convenience alias for a shared internally-mutable reference to a `Wire`,
/// so we don't have to type all those angle brackets.
pub type WireRef = Rc<RefCell<Wire>>;

/// Distinguishes ordinary signal wires from the three fixed sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WireKind {
    Signal,
    Constant(bool),
    Clock,
}

/// A single-bit runtime signal with double-buffer semantics.
///
/// A wire remembers the half-cycle at which its current bit was written (the
/// phase tag). A bit written during half-cycle T only becomes visible to
/// readers in T+1, except through the wire's unique source component, which
/// may overwrite the staged bit within the half-cycle. Reading a wire whose
/// tag is stale triggers a one-shot pull on its source, so readers force
/// not-yet-updated dependencies to compute without any topological sort.
pub struct Wire {
    name: String,
    kind: WireKind,
    value: bool,
    prev: bool,
    phase: bool,
    source: Option<Weak<RefCell<dyn Component>>>,
}

impl Wire {
    pub(crate) fn new(name: &str) -> WireRef {
        Rc::new(RefCell::new(Wire {
            name: name.to_string(),
            kind: WireKind::Signal,
            value: false,
            prev: false,
            phase: false,
            source: None,
        }))
    }

    pub(crate) fn constant(name: &str, value: bool) -> WireRef {
        Rc::new(RefCell::new(Wire {
            name: name.to_string(),
            kind: WireKind::Constant(value),
            value,
            prev: value,
            phase: false,
            source: None,
        }))
    }

    pub(crate) fn clock(name: &str) -> WireRef {
        Rc::new(RefCell::new(Wire {
            name: name.to_string(),
            kind: WireKind::Clock,
            value: false,
            prev: false,
            phase: false,
            source: None,
        }))
    }

    /// The canonical name the wire was allocated under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bit the wire carried during the previous half-cycle.
    pub fn prev(&self) -> bool {
        self.prev
    }

    /// Reads the wire's bit for half-cycle `clk`.
    ///
    /// If the wire has already been driven this half-cycle the current bit is
    /// returned directly. Otherwise the phase tag is latched *first* and the
    /// source component gets a one-shot pull; latching first means a
    /// combinational cycle re-entering this wire observes the previous
    /// half-cycle's bit, which is exactly the propagation delay the double
    /// buffer models. Constant wires always return their fixed bit.
    pub fn recv(wire: &WireRef, clk: bool) -> bool {
        let source = {
            let mut this = wire.borrow_mut();
            if let WireKind::Constant(value) = this.kind {
                return value;
            }
            if this.phase == clk {
                return this.value;
            }
            this.prev = this.value;
            this.phase = clk;
            this.source.clone()
        };
        if let Some(source) = source.and_then(|weak| weak.upgrade()) {
            // A source that is mid-update is a combinational cycle closing on
            // itself; skipping the pull leaves the previous bit in place.
            if let Ok(mut component) = source.try_borrow_mut() {
                component.update(clk);
            }
        }
        wire.borrow().value
    }

    /// Drives the wire with `value` for half-cycle `clk`.
    ///
    /// On the first write of a half-cycle the current bit is latched into the
    /// previous-bit buffer. A second write in the same half-cycle overwrites
    /// the staged bit; only the wire's designated source ever holds the write
    /// end of a wire, so that is the eager-reader case described in `recv`.
    ///
    /// # Panics
    ///
    /// Panics when called on one of the constant wires; a circuit that could
    /// reach this is rejected at build time.
    pub fn send(wire: &WireRef, clk: bool, value: bool) {
        let mut this = wire.borrow_mut();
        if let WireKind::Constant(_) = this.kind {
            panic!("wire {}: constant wire driven", this.name);
        }
        if this.phase == clk {
            this.value = value;
        } else {
            this.prev = this.value;
            this.value = value;
            this.phase = clk;
        }
    }

    /// Registers `component` as the unique writer of this wire.
    ///
    /// # Panics
    ///
    /// Panics if the wire already has a source or is one of the constants;
    /// both indicate a bug in a part's mount function.
    pub fn set_source(wire: &WireRef, component: &ComponentRef) {
        let mut this = wire.borrow_mut();
        match this.kind {
            WireKind::Constant(_) | WireKind::Clock => {
                panic!("wire {}: constant wire cannot have a source", this.name)
            }
            WireKind::Signal => {}
        }
        if this.source.is_some() {
            panic!("wire {}: second source component", this.name);
        }
        this.source = Some(Rc::downgrade(component));
    }

    /// True when the wire will produce a bit on demand: it has a source
    /// component or is one of the scheduler-driven constants.
    pub(crate) fn has_source(&self) -> bool {
        match self.kind {
            WireKind::Signal => self.source.is_some(),
            WireKind::Constant(_) | WireKind::Clock => true,
        }
    }

    /// Advances the phase tag of a wire nothing touched this half-cycle, so
    /// the next half-cycle's first write latches correctly.
    pub(crate) fn settle(&mut self, clk: bool) {
        if self.kind == WireKind::Signal && self.phase != clk {
            self.prev = self.value;
            self.phase = clk;
        }
    }

    /// The scheduler's write end for the clock wire, stamped at the start of
    /// every half-cycle before any component runs.
    pub(crate) fn drive_clock(&mut self, clk: bool) {
        self.prev = self.value;
        self.value = clk;
        self.phase = clk;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::Component;

    struct Echo {
        out: WireRef,
        value: bool,
    }

    impl Component for Echo {
        fn update(&mut self, clk: bool) {
            Wire::send(&self.out, clk, self.value);
        }
    }

    #[test]
    fn test_constant_wire_always_reads_fixed_bit() {
        let wire = Wire::constant("true", true);
        assert!(Wire::recv(&wire, true));
        assert!(Wire::recv(&wire, false));
    }

    #[test]
    #[should_panic(expected = "constant wire driven")]
    fn test_constant_wire_rejects_send() {
        let wire = Wire::constant("false", false);
        Wire::send(&wire, true, true);
    }

    #[test]
    fn test_send_latches_previous_bit_on_phase_change() {
        let wire = Wire::new("w");
        Wire::send(&wire, true, true);
        assert!(!wire.borrow().prev());
        Wire::send(&wire, false, false);
        assert!(wire.borrow().prev());
    }

    #[test]
    fn test_recv_pulls_the_source_once() {
        let wire = Wire::new("w");
        let echo = Rc::new(RefCell::new(Echo {
            out: wire.clone(),
            value: true,
        }));
        let component: ComponentRef = echo.clone();
        Wire::set_source(&wire, &component);
        assert!(Wire::recv(&wire, true));
        // The staged bit is now visible without another pull.
        echo.borrow_mut().value = false;
        assert!(Wire::recv(&wire, true));
        // A new half-cycle pulls again and sees the new bit.
        assert!(!Wire::recv(&wire, false));
    }

    #[test]
    #[should_panic(expected = "second source component")]
    fn test_second_source_rejected() {
        let wire = Wire::new("w");
        let component: ComponentRef = Rc::new(RefCell::new(Echo {
            out: wire.clone(),
            value: true,
        }));
        Wire::set_source(&wire, &component);
        Wire::set_source(&wire, &component);
    }
}
