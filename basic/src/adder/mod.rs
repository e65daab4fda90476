//! Adder circuits, from a single half adder up to a parametric ripple-carry
//! adder.

mod full_adder;
mod half_adder;
mod ripple_carry_adder;

pub use full_adder::full_adder;
pub use half_adder::half_adder;
pub use ripple_carry_adder::ripple_carry_adder;
