use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::chip::chip;
use crate::error::{Error, Result};
use crate::part::{ComponentRef, Mounted, Part};
use crate::socket::{Socket, WirePool};

/// A mounted, runnable circuit: the wire pool, the flat list of leaf
/// components, and the clocked two-phase scheduler.
///
/// The clock starts low. [`Circuit::tick`] raises it and [`Circuit::tock`]
/// lowers it; each transition runs one half-cycle of updates. Repeating the
/// same transition is a no-op, so `tick(); tick()` is `tick()`.
pub struct Circuit {
    pool: Rc<RefCell<WirePool>>,
    leaves: Vec<ComponentRef>,
    tickers: Vec<ComponentRef>,
    ticks: u64,
    clk: bool,
}

impl Circuit {
    /// Wraps `parts` into an anonymous chip, mounts it, and validates the
    /// result. Fails on an empty part list, on any wiring violation, and on
    /// any mounted wire that ended up without a source component.
    pub fn new(parts: Vec<Part>) -> Result<Circuit> {
        let spec = chip("circuit", "", "", &parts)?;
        let pool = Rc::new(RefCell::new(WirePool::new()));
        let mut socket = Socket::root(pool.clone());
        let mounted = spec.mount(&mut socket);

        let mut leaves = Vec::new();
        let mut tickers = Vec::new();
        collect(mounted, &mut leaves, &mut tickers);

        for wire in pool.borrow().wires() {
            let wire = wire.borrow();
            if !wire.has_source() {
                return Err(Error::WireWithoutSource {
                    name: wire.name().to_string(),
                });
            }
        }

        debug!(
            "circuit: {} components ({} tickers), {} wires",
            leaves.len(),
            tickers.len(),
            pool.borrow().len()
        );
        Ok(Circuit {
            pool,
            leaves,
            tickers,
            ticks: 0,
            clk: false,
        })
    }

    /// Raises the clock and runs one half-cycle. A no-op if the clock is
    /// already high.
    pub fn tick(&mut self) {
        if !self.clk {
            self.clk = true;
            self.ticks += 1;
            self.update();
        }
    }

    /// Lowers the clock and runs one half-cycle. A no-op if the clock is
    /// already low.
    pub fn tock(&mut self) {
        if self.clk {
            self.clk = false;
            self.ticks += 1;
            self.update();
        }
    }

    /// One full clock cycle: `tick` then `tock`.
    pub fn tick_tock(&mut self) {
        self.tick();
        self.tock();
    }

    /// Number of half-cycles executed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Number of leaf components in the flattened circuit.
    pub fn component_count(&self) -> usize {
        self.leaves.len()
    }

    /// Number of wires in the pool, including the three constant slots.
    pub fn wire_count(&self) -> usize {
        self.pool.borrow().len()
    }

    fn update(&mut self) {
        let clk = self.clk;
        // The clock source is stamped before anything can read it.
        let clk_wire = self.pool.borrow().clk_wire();
        clk_wire.borrow_mut().drive_clock(clk);
        for ticker in &self.tickers {
            ticker.borrow_mut().update(clk);
        }
        // Wires nobody touched this half-cycle still advance their phase tag
        // so the next half-cycle's first write latches correctly.
        for wire in self.pool.borrow().wires() {
            wire.borrow_mut().settle(clk);
        }
    }
}

fn collect(mounted: Mounted, leaves: &mut Vec<ComponentRef>, tickers: &mut Vec<ComponentRef>) {
    match mounted {
        Mounted::Updater(component) => leaves.push(component),
        Mounted::Ticker(component) => {
            leaves.push(component.clone());
            tickers.push(component);
        }
        Mounted::Wrapper(children) => {
            for child in children {
                collect(child, leaves, tickers);
            }
        }
    }
}
