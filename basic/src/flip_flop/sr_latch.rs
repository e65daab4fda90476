use gate::nor;
use sim::{chip, PartSpec};

/// The fundamental structure for storing information in digital logic: two
/// cross-coupled NOR gates. Inputs `s, r`, outputs `q, nq`.
///
/// The feedback loop works because a wire read inside its own update chain
/// observes the previous half-cycle's bit; after an input change the latch
/// settles within one clock cycle.
pub fn sr_latch() -> PartSpec {
    chip(
        "SrLatch",
        "s, r",
        "q, nq",
        &[
            nor().new_part("a=r, b=nq, out=q").expect("latch wiring"),
            nor().new_part("a=s, b=q, out=nq").expect("latch wiring"),
        ],
    )
    .expect("latch wiring")
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use sim::{input, output, Circuit};

    use super::*;

    #[test]
    fn test_sr_latch_remembers() {
        let set = Rc::new(Cell::new(false));
        let reset = Rc::new(Cell::new(false));
        let q = Rc::new(Cell::new(false));
        let nq = Rc::new(Cell::new(false));
        let (read_s, read_r, probe_q, probe_nq) =
            (set.clone(), reset.clone(), q.clone(), nq.clone());
        let mut circuit = Circuit::new(vec![
            input(move || read_s.get()).new_part("out=s").unwrap(),
            input(move || read_r.get()).new_part("out=r").unwrap(),
            sr_latch().new_part("s=s, r=r, q=q, nq=nq").unwrap(),
            output(move |value| probe_q.set(value)).new_part("in=q").unwrap(),
            output(move |value| probe_nq.set(value)).new_part("in=nq").unwrap(),
        ])
        .unwrap();

        let settle = |circuit: &mut Circuit| {
            circuit.tick_tock();
            circuit.tick_tock();
        };
        let check = |q: &Rc<Cell<bool>>, nq: &Rc<Cell<bool>>, value: bool| {
            assert_eq!(q.get(), value);
            assert_eq!(nq.get(), !value);
        };

        settle(&mut circuit);
        check(&q, &nq, false);

        for _ in 0..3 {
            set.set(true);
            settle(&mut circuit);
            check(&q, &nq, true);

            set.set(false);
            settle(&mut circuit);
            check(&q, &nq, true);

            reset.set(true);
            settle(&mut circuit);
            check(&q, &nq, false);

            reset.set(false);
            settle(&mut circuit);
            check(&q, &nq, false);
        }
    }
}
