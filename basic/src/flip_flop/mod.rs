//! Storage circuits: a latch built from raw feedback and a clocked register.

mod register;
mod sr_latch;

pub use register::register;
pub use sr_latch::sr_latch;
