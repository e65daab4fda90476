use crate::error::{Error, Result};

/// A single parsed pin expression: a name plus an optional bracket suffix.
///
/// In an interface declaration the bracket is a bus width; in a connection it
/// is an index or an inclusive range. The caller decides which readings are
/// legal.
pub(crate) struct PinToken<'a> {
    pub(crate) name: &'a str,
    pub(crate) index: Option<(usize, Option<usize>)>,
}

/// Expands an interface pin spec like `"a, b, bus[4]"` into the ordered list
/// of scalar pin names: `["a", "b", "bus[0]", "bus[1]", "bus[2]", "bus[3]"]`.
///
/// Whitespace is insignificant. A bracketed number is a bus *width*, so
/// `bus[0]` expands to nothing and ranges (`bus[0..3]`) are rejected; those
/// belong to connection strings. An empty or blank spec yields an empty list,
/// which is how interface-less chips (the circuit wrapper) are declared.
pub fn io(spec: &str) -> Result<Vec<String>> {
    let mut pins = Vec::new();
    if spec.trim().is_empty() {
        return Ok(pins);
    }
    for (at, token) in split_tokens(spec) {
        let parsed = parse_token(spec, token, at)?;
        match parsed.index {
            None => pins.push(parsed.name.to_string()),
            Some((width, None)) => {
                for i in 0..width {
                    pins.push(format!("{}[{}]", parsed.name, i));
                }
            }
            Some((_, Some(_))) => {
                return Err(Error::RangeInInterface {
                    spec: spec.to_string(),
                })
            }
        }
    }
    Ok(pins)
}

/// Checks that an expanded pin list has no repeated names.
pub(crate) fn ensure_unique(pins: &[String]) -> Result<()> {
    for (i, pin) in pins.iter().enumerate() {
        if pins[..i].contains(pin) {
            return Err(Error::DuplicatePinName { name: pin.clone() });
        }
    }
    Ok(())
}

/// Splits a comma-separated list into trimmed tokens, keeping the byte offset
/// of each token within the original string for error reporting.
pub(crate) fn split_tokens(spec: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    spec.split(',').map(move |raw| {
        let start = offset + (raw.len() - raw.trim_start().len());
        offset += raw.len() + 1;
        (start, raw.trim())
    })
}

/// Parses one pin expression. `at` is the token's offset inside `spec`, used
/// only to build error values.
pub(crate) fn parse_token<'a>(spec: &str, token: &'a str, at: usize) -> Result<PinToken<'a>> {
    let (name, bracket) = match token.find('[') {
        Some(i) => (&token[..i], Some((at + i, &token[i..]))),
        None => (token, None),
    };
    if name.is_empty() {
        return Err(Error::EmptyPinName {
            spec: spec.to_string(),
            at,
        });
    }
    for (i, ch) in name.char_indices() {
        let legal = if i == 0 {
            ch.is_ascii_alphabetic() || ch == '_'
        } else {
            ch.is_ascii_alphanumeric() || ch == '_'
        };
        if !legal {
            return Err(Error::InvalidPinChar {
                spec: spec.to_string(),
                at: at + i,
                found: ch,
            });
        }
    }
    let index = match bracket {
        None => None,
        Some((bracket_at, rest)) => {
            let close = match rest.find(']') {
                Some(i) => i,
                None => {
                    return Err(Error::MissingBracket {
                        spec: spec.to_string(),
                        at: bracket_at,
                    })
                }
            };
            if close != rest.len() - 1 {
                let found = rest[close + 1..].chars().next().unwrap_or(']');
                return Err(Error::TrailingGarbage {
                    spec: spec.to_string(),
                    at: bracket_at + close + 1,
                    found,
                });
            }
            let body = &rest[1..close];
            let index_at = bracket_at + 1;
            match body.split_once("..") {
                None => Some((parse_index(spec, body, index_at)?, None)),
                Some((lo, hi)) => {
                    let lo = parse_index(spec, lo, index_at)?;
                    let hi = parse_index(spec, hi, index_at)?;
                    if hi < lo {
                        return Err(Error::InvalidIndex {
                            spec: spec.to_string(),
                            at: index_at,
                        });
                    }
                    Some((lo, Some(hi)))
                }
            }
        }
    };
    Ok(PinToken { name, index })
}

fn parse_index(spec: &str, text: &str, at: usize) -> Result<usize> {
    text.trim().parse().map_err(|_| Error::InvalidIndex {
        spec: spec.to_string(),
        at,
    })
}
