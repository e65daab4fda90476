use part_derive::Part;
use sim::{Component, Mounted, PartSpec, Wire, WireRef};

/// A rising-edge D flip-flop with input `in` and output `out`.
///
/// The stored bit is sampled when the clock goes high and presented on `out`
/// from the following low half-cycle, so a value fed in during cycle *t* is
/// observable during cycle *t+1*. The output is driven on every half-cycle,
/// which is what lets combinational logic hang off a flip-flop without caring
/// about evaluation order.
#[derive(Part)]
#[part(name = "DFF", ticker)]
pub struct Dff {
    #[input(name = "in")]
    input: WireRef,
    #[output]
    out: WireRef,
    state: bool,
    phase: Option<bool>,
}

impl Component for Dff {
    fn update(&mut self, clk: bool) {
        // Run once per half-cycle, whether the scheduler or an eager reader
        // gets here first.
        if self.phase == Some(clk) {
            return;
        }
        self.phase = Some(clk);
        Wire::send(&self.out, clk, self.state);
        if clk {
            self.state = Wire::recv(&self.input, clk);
        }
    }
}

/// Builds the D flip-flop part spec.
pub fn dff() -> PartSpec {
    Dff::spec()
}
