use std::collections::HashMap;
use std::rc::Rc;

use log::debug;

use crate::error::{Error, Result};
use crate::part::{Mounted, Part, PartSpec};
use crate::pin::io;
use crate::socket::Socket;
use crate::wiring::{NodeKind, PinKey, Wiring};

/// Composes part instances into a new reusable part spec.
///
/// The interface strings are pin specs in the sense of [`io`]. Every
/// connection of every part is checked against the wiring invariants: a wire
/// has exactly one driver, constants and chip inputs are never driven, every
/// chip-internal name has both a driver and a consumer. Unused chip inputs
/// are dropped; part inputs the connection lists never mention are fed the
/// `false` constant at mount time.
///
/// The result closes over the parts, so the returned spec stays valid however
/// the caller disposes of the `parts` slice, and may itself be instantiated
/// inside further chips.
pub fn chip(name: &str, inputs: &str, outputs: &str, parts: &[Part]) -> Result<PartSpec> {
    if parts.is_empty() {
        return Err(Error::EmptyPartList {
            chip: name.to_string(),
        });
    }
    let input_pins = io(inputs)?;
    let output_pins = io(outputs)?;
    let part_names: Vec<String> = parts
        .iter()
        .map(|part| part.spec().name().to_string())
        .collect();
    let mut wiring = Wiring::new(&input_pins, &output_pins, part_names)?;

    for (idx, part) in parts.iter().enumerate() {
        for conn in part.conns() {
            if part.spec().inputs().contains(&conn.pin) {
                if conn.wires.len() > 1 {
                    return Err(Error::InputFanIn {
                        pin: format!("{}.{}", part.spec().name(), conn.pin),
                    });
                }
                wiring.connect(
                    PinKey::Chip(conn.wires[0].clone()),
                    NodeKind::Unknown,
                    PinKey::Part(idx, conn.pin.clone()),
                    NodeKind::Input,
                )?;
            } else if part.spec().outputs().contains(&conn.pin) {
                for wire in &conn.wires {
                    wiring.connect(
                        PinKey::Part(idx, conn.pin.clone()),
                        NodeKind::Output,
                        PinKey::Chip(wire.clone()),
                        NodeKind::Unknown,
                    )?;
                }
            } else {
                return Err(Error::InvalidPinName {
                    pin: conn.pin.clone(),
                    part: part.spec().name().to_string(),
                });
            }
        }
        // Outputs left out of the connection list still own a wire.
        for pin in part.spec().outputs() {
            wiring.touch_output(idx, pin)?;
        }
    }

    let resolution = wiring.prune_and_name()?;

    // The mount plan: for each sub-part, every exposed pin paired with the
    // canonical wire name it resolves to in this chip's scope.
    let mut plan = Vec::with_capacity(parts.len());
    for (idx, part) in parts.iter().enumerate() {
        let mut pins = Vec::new();
        for pin in part.spec().inputs() {
            let canon = resolution.parts[idx]
                .get(pin)
                .cloned()
                .unwrap_or_else(|| "false".to_string());
            pins.push((pin.clone(), canon));
        }
        for pin in part.spec().outputs() {
            let canon = resolution.parts[idx]
                .get(pin)
                .cloned()
                .expect("every part output owns a wiring node");
            pins.push((pin.clone(), canon));
        }
        plan.push((part.clone(), pins));
    }

    let mut pinout = HashMap::new();
    for pin in &input_pins {
        pinout.insert(pin.clone(), pin.clone());
    }
    for pin in &output_pins {
        let canon = resolution
            .outputs
            .get(pin)
            .cloned()
            .expect("every chip output is wired");
        pinout.insert(pin.clone(), canon);
    }

    debug!(
        "chip {}: {} parts, {} inputs, {} outputs",
        name,
        parts.len(),
        input_pins.len(),
        output_pins.len()
    );

    let mount = move |socket: &mut Socket| {
        let mut mounted = Vec::with_capacity(plan.len());
        for (part, pins) in &plan {
            let mut child = socket.nest(part.spec(), pins);
            mounted.push(part.spec().mount(&mut child));
        }
        Mounted::Wrapper(mounted)
    };
    Ok(PartSpec::assemble(
        name,
        input_pins,
        output_pins,
        pinout,
        Rc::new(mount),
    ))
}
