//! Composed example chips built from the gate library: adders and storage.
//!
//! Nothing in this crate touches the simulator's authoring interface; every
//! chip here is pure composition, which is the way user hardware is meant to
//! be described.
#![deny(missing_docs)]

pub mod adder;
pub mod flip_flop;
