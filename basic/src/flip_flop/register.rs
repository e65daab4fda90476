use gate::{dff, mux};
use sim::{chip, PartSpec};

/// An n-bit register with a load enable: interface `in[n], load` to `out[n]`.
///
/// Each bit is a flip-flop behind a multiplexer that either recirculates the
/// stored bit or admits the input bit, so the register samples `in` on the
/// rising edge of any cycle where `load` is high and holds otherwise.
///
/// # Panics
///
/// Panics for a width of zero.
pub fn register(bits: usize) -> PartSpec {
    assert!(bits > 0, "a register needs at least one bit");
    let mut parts = Vec::with_capacity(2 * bits);
    for i in 0..bits {
        parts.push(
            mux()
                .new_part(&format!("a=out[{i}], b=in[{i}], sel=load, out=next{i}"))
                .expect("register wiring"),
        );
        parts.push(
            dff()
                .new_part(&format!("in=next{i}, out=out[{i}]"))
                .expect("register wiring"),
        );
    }
    chip(
        "Register",
        &format!("in[{bits}], load"),
        &format!("out[{bits}]"),
        &parts,
    )
    .expect("register wiring")
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use sim::{input, input_n, output_n, Circuit};

    use super::*;

    #[test]
    fn test_register_loads_and_holds() {
        let value = Rc::new(Cell::new(0u64));
        let load = Rc::new(Cell::new(false));
        let seen = Rc::new(Cell::new(0u64));
        let (read, read_load, probe) = (value.clone(), load.clone(), seen.clone());
        let mut circuit = Circuit::new(vec![
            input_n(4, move || read.get()).new_part("out[0..3]=in[0..3]").unwrap(),
            input(move || read_load.get()).new_part("out=load").unwrap(),
            register(4)
                .new_part("in[0..3]=in[0..3], load=load, out[0..3]=out[0..3]")
                .unwrap(),
            output_n(4, move |bits| probe.set(bits)).new_part("in[0..3]=out[0..3]").unwrap(),
        ])
        .unwrap();

        value.set(5);
        load.set(true);
        circuit.tick_tock();
        assert_eq!(seen.get(), 5);

        value.set(9);
        load.set(false);
        circuit.tick_tock();
        assert_eq!(seen.get(), 5);

        load.set(true);
        circuit.tick_tock();
        assert_eq!(seen.get(), 9);
        circuit.tick_tock();
        assert_eq!(seen.get(), 9);
    }
}
