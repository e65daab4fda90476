use crate::error::{Error, Result};
use crate::pin::parse_token;

/// One normalized connection record: a part-side pin and the chip-side wire
/// names it is attached to.
///
/// A part output may fan out to several wires; a part input must end up with
/// exactly one, which the chip builder enforces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conn {
    /// The part-side scalar pin name.
    pub pin: String,
    /// The chip-side scalar wire names, in declaration order.
    pub wires: Vec<String>,
}

/// Parses a connection string like `"a=x, bus[0..3]=y[4..7]"` into normalized
/// `Conn` records.
///
/// Each assignment's sides are expanded to scalar pin lists first. Equal
/// lengths pair up element-wise; a single left-hand pin fans out to every
/// right-hand wire; a single right-hand wire is broadcast to every left-hand
/// pin. Anything else is a length mismatch.
pub(crate) fn parse_connections(conns: &str) -> Result<Vec<Conn>> {
    let mut normalized: Vec<Conn> = Vec::new();
    let mut offset = 0;
    for raw in conns.split(',') {
        let at = offset;
        offset += raw.len() + 1;
        let eq = match raw.find('=') {
            Some(i) => i,
            None => {
                return Err(Error::MissingEquals {
                    conn: raw.trim().to_string(),
                })
            }
        };
        let lhs = expand_expr(conns, &raw[..eq], at)?;
        let rhs = expand_expr(conns, &raw[eq + 1..], at + eq + 1)?;
        let pairs: Vec<(String, String)> = if lhs.len() == rhs.len() {
            lhs.into_iter().zip(rhs).collect()
        } else if lhs.len() == 1 {
            let pin = &lhs[0];
            rhs.into_iter().map(|wire| (pin.clone(), wire)).collect()
        } else if rhs.len() == 1 {
            let wire = &rhs[0];
            lhs.into_iter().map(|pin| (pin, wire.clone())).collect()
        } else {
            return Err(Error::LengthMismatch {
                conn: raw.trim().to_string(),
                lhs: lhs.len(),
                rhs: rhs.len(),
            });
        };
        for (pin, wire) in pairs {
            match normalized.iter_mut().find(|conn| conn.pin == pin) {
                Some(conn) => conn.wires.push(wire),
                None => normalized.push(Conn {
                    pin,
                    wires: vec![wire],
                }),
            }
        }
    }
    Ok(normalized)
}

/// Expands one side of an assignment to its scalar pin names. In connection
/// context `b[2]` is the single pin `b[2]` and `b[0..2]` is the inclusive
/// range `b[0], b[1], b[2]`.
fn expand_expr(conns: &str, expr: &str, at: usize) -> Result<Vec<String>> {
    let start = at + (expr.len() - expr.trim_start().len());
    let token = parse_token(conns, expr.trim(), start)?;
    Ok(match token.index {
        None => vec![token.name.to_string()],
        Some((i, None)) => vec![format!("{}[{}]", token.name, i)],
        Some((lo, Some(hi))) => (lo..=hi)
            .map(|i| format!("{}[{}]", token.name, i))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn conn(pin: &str, wires: &[&str]) -> Conn {
        Conn {
            pin: pin.to_string(),
            wires: wires.iter().map(|w| w.to_string()).collect(),
        }
    }

    #[test]
    fn test_scalar_assignments() {
        assert_eq!(
            parse_connections("a=x, b=y").unwrap(),
            vec![conn("a", &["x"]), conn("b", &["y"])]
        );
    }

    #[test]
    fn test_range_pairs_elementwise() {
        assert_eq!(
            parse_connections("bus[0..2]=y[4..6]").unwrap(),
            vec![
                conn("bus[0]", &["y[4]"]),
                conn("bus[1]", &["y[5]"]),
                conn("bus[2]", &["y[6]"]),
            ]
        );
    }

    #[test]
    fn test_single_pin_fans_out() {
        assert_eq!(
            parse_connections("out=x[0..2]").unwrap(),
            vec![conn("out", &["x[0]", "x[1]", "x[2]"])]
        );
    }

    #[test]
    fn test_single_wire_broadcasts() {
        assert_eq!(
            parse_connections("a[0..2]=zero").unwrap(),
            vec![
                conn("a[0]", &["zero"]),
                conn("a[1]", &["zero"]),
                conn("a[2]", &["zero"]),
            ]
        );
    }

    #[test]
    fn test_repeated_pin_merges() {
        assert_eq!(
            parse_connections("out=x, out=y").unwrap(),
            vec![conn("out", &["x", "y"])]
        );
    }

    #[test]
    fn test_indexed_pin_is_a_single_pin() {
        assert_eq!(
            parse_connections("a=x[2]").unwrap(),
            vec![conn("a", &["x[2]"])]
        );
    }

    #[test]
    fn test_missing_equals_rejected() {
        assert_eq!(
            parse_connections("a=x, b"),
            Err(Error::MissingEquals {
                conn: "b".to_string(),
            })
        );
    }

    #[test]
    fn test_length_mismatch_rejected() {
        assert_eq!(
            parse_connections("a[0..1]=x[0..2]"),
            Err(Error::LengthMismatch {
                conn: "a[0..1]=x[0..2]".to_string(),
                lhs: 2,
                rhs: 3,
            })
        );
    }

    #[test]
    fn test_reversed_range_rejected() {
        assert!(matches!(
            parse_connections("a=x[3..1]"),
            Err(Error::InvalidIndex { .. })
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            parse_connections("a=x=y"),
            Err(Error::InvalidPinChar { .. })
        ));
    }
}
