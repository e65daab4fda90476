use sim::{chip, PartSpec};

use super::full_adder;

/// An n-bit ripple-carry adder: interface `a[n], b[n], cin` to `s[n], cout`.
/// Bit 0 is the least significant; each full adder's carry ripples into the
/// next stage.
///
/// # Panics
///
/// Panics for a width of zero.
pub fn ripple_carry_adder(bits: usize) -> PartSpec {
    assert!(bits > 0, "an adder needs at least one bit");
    let mut parts = Vec::with_capacity(bits);
    for i in 0..bits {
        let carry_in = if i == 0 {
            "cin".to_string()
        } else {
            format!("carry{}", i - 1)
        };
        let carry_out = if i == bits - 1 {
            "cout".to_string()
        } else {
            format!("carry{i}")
        };
        let conns = format!("a=a[{i}], b=b[{i}], cin={carry_in}, s=s[{i}], cout={carry_out}");
        parts.push(full_adder().new_part(&conns).expect("adder wiring"));
    }
    chip(
        "RippleCarryAdder",
        &format!("a[{bits}], b[{bits}], cin"),
        &format!("s[{bits}], cout"),
        &parts,
    )
    .expect("adder wiring")
}
