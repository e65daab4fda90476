use sim::{chip, PartSpec};

use crate::{and, not};

/// A two-way demultiplexer with inputs `in, sel` and outputs `a, b`.
///
/// `in` is routed to `a` while `sel` is low and to `b` while it is high; the
/// unselected output is low.
pub fn demux() -> PartSpec {
    chip(
        "DEMUX",
        "in, sel",
        "a, b",
        &[
            not().new_part("in=sel, out=nsel").expect("DEMUX wiring"),
            and().new_part("a=in, b=nsel, out=a").expect("DEMUX wiring"),
            and().new_part("a=in, b=sel, out=b").expect("DEMUX wiring"),
        ],
    )
    .expect("DEMUX wiring")
}
