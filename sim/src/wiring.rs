use std::collections::{HashMap, HashSet};

use log::warn;

use crate::error::{Error, Result};

/// The three reserved wire names every chip can consume without declaring.
pub(crate) const CONST_NAMES: [&str; 3] = ["false", "true", "clk"];

/// What a wiring node does with a value, seen from inside the chip.
///
/// The enclosing chip's own inputs are `Output` here because they drive the
/// interior, and its outputs are `Input` because they consume an interior
/// value. Chip-internal labels start as `Unknown` and are refined as
/// connections commit them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeKind {
    Input,
    Output,
    Unknown,
}

/// Identity of a pin appearance inside the chip being composed: either one of
/// the chip's own names (interface pins, constants, internal labels) or a pin
/// of the numbered sub-part.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub(crate) enum PinKey {
    Chip(String),
    Part(usize, String),
}

#[derive(Debug)]
struct Node {
    key: PinKey,
    kind: NodeKind,
    constant: bool,
    interface: bool,
    src: Option<usize>,
    outs: Vec<usize>,
    name: Option<String>,
    dead: bool,
}

/// Canonical wire names computed by [`Wiring::prune_and_name`].
#[derive(Debug)]
pub(crate) struct Resolution {
    /// Per part: every wired pin mapped to its canonical wire name. Inputs
    /// the connection list never mentioned are absent; the chip builder
    /// defaults those to the `false` constant.
    pub(crate) parts: Vec<HashMap<String, String>>,
    /// The chip's own output pins mapped to their canonical wire names.
    pub(crate) outputs: HashMap<String, String>,
}

/// A node-per-pin forest tracking who drives whom inside one chip under
/// composition. Every edge addition enforces the wiring invariants: one
/// source per node, constants and chip inputs are never driven, part pins
/// only appear on their declared side.
#[derive(Debug)]
pub(crate) struct Wiring {
    nodes: Vec<Node>,
    index: HashMap<PinKey, usize>,
    part_names: Vec<String>,
}

impl Wiring {
    /// Seeds the forest with the chip's interface and the constant sources.
    pub(crate) fn new(
        inputs: &[String],
        outputs: &[String],
        part_names: Vec<String>,
    ) -> Result<Wiring> {
        let mut wiring = Wiring {
            nodes: Vec::new(),
            index: HashMap::new(),
            part_names,
        };
        for name in CONST_NAMES {
            wiring.seed(PinKey::Chip(name.to_string()), NodeKind::Output, true, false)?;
        }
        for pin in inputs {
            wiring.seed(PinKey::Chip(pin.clone()), NodeKind::Output, false, true)?;
        }
        for pin in outputs {
            wiring.seed(PinKey::Chip(pin.clone()), NodeKind::Input, false, true)?;
        }
        Ok(wiring)
    }

    /// Adds a driving edge from `src` to `dst`, creating nodes as needed and
    /// refining `Unknown` kinds to the requested ones.
    pub(crate) fn connect(
        &mut self,
        src: PinKey,
        src_kind: NodeKind,
        dst: PinKey,
        dst_kind: NodeKind,
    ) -> Result<()> {
        let wire = match (&src, &dst) {
            (_, PinKey::Chip(name)) => name.clone(),
            (PinKey::Chip(name), _) => name.clone(),
            (_, PinKey::Part(_, pin)) => pin.clone(),
        };
        let src_id = self.lookup_or_create(src, src_kind, &wire)?;
        let dst_id = self.lookup_or_create(dst, dst_kind, &wire)?;

        if matches!(self.nodes[src_id].key, PinKey::Part(..))
            && self.nodes[src_id].kind == NodeKind::Input
        {
            return Err(Error::InputUsedAsOutput {
                pin: self.qualify(src_id, &wire),
            });
        }
        let dst_node = &self.nodes[dst_id];
        if dst_node.constant {
            let name = match &dst_node.key {
                PinKey::Chip(name) => name.clone(),
                PinKey::Part(..) => unreachable!("constants are chip-level nodes"),
            };
            return Err(Error::ConstantDriven {
                pin: self.qualify(src_id, &wire),
                name,
            });
        }
        if dst_node.interface && dst_node.kind == NodeKind::Output {
            return Err(Error::ChipInputDriven {
                pin: self.qualify(src_id, &wire),
            });
        }
        if matches!(dst_node.key, PinKey::Part(..)) && dst_node.kind == NodeKind::Output {
            return Err(Error::OutputUsedAsInput {
                pin: self.qualify(dst_id, &wire),
            });
        }
        if dst_node.src.is_some() {
            return Err(Error::OutputAlreadyDriven {
                pin: self.qualify(src_id, &wire),
            });
        }

        self.nodes[dst_id].src = Some(src_id);
        self.nodes[src_id].outs.push(dst_id);
        Ok(())
    }

    /// Makes sure a declared part output owns a node even when the connection
    /// list never mentions it, so the part still gets a wire to drive.
    pub(crate) fn touch_output(&mut self, part: usize, pin: &str) -> Result<()> {
        let key = PinKey::Part(part, pin.to_string());
        self.lookup_or_create(key, NodeKind::Output, pin)?;
        Ok(())
    }

    /// The final pass over a fully connected chip: drops unused chip inputs,
    /// rejects dangling names, collapses ephemeral chip-internal labels into
    /// their drivers, and gives every surviving node a canonical wire name.
    pub(crate) fn prune_and_name(mut self) -> Result<Resolution> {
        for id in 0..self.nodes.len() {
            let node = &self.nodes[id];
            if matches!(node.key, PinKey::Chip(_))
                && node.kind == NodeKind::Output
                && node.outs.is_empty()
            {
                if node.interface {
                    warn!("chip input pin {} is not connected, dropping it", self.pin_name(id));
                }
                self.nodes[id].dead = true;
            }
        }

        for id in 0..self.nodes.len() {
            let node = &self.nodes[id];
            if node.dead {
                continue;
            }
            match node.kind {
                NodeKind::Unknown => {
                    if node.src.is_none() {
                        return Err(Error::NoSource {
                            pin: self.pin_name(id),
                        });
                    }
                    if node.outs.is_empty() {
                        return Err(Error::NoSink {
                            pin: self.pin_name(id),
                        });
                    }
                }
                NodeKind::Input => {
                    if node.interface && node.src.is_none() {
                        return Err(Error::NoSource {
                            pin: self.pin_name(id),
                        });
                    }
                }
                NodeKind::Output => {}
            }
        }

        loop {
            let ephemeral = self
                .nodes
                .iter()
                .position(|node| !node.dead && node.kind == NodeKind::Unknown);
            let Some(id) = ephemeral else { break };
            let src = self.nodes[id]
                .src
                .expect("dangling names are rejected before collapsing");
            let outs = std::mem::take(&mut self.nodes[id].outs);
            for &out in &outs {
                self.nodes[out].src = Some(src);
            }
            let src_outs = &mut self.nodes[src].outs;
            src_outs.retain(|&out| out != id);
            src_outs.extend(outs);
            self.nodes[id].dead = true;
        }

        let interface_names: HashSet<String> = self
            .nodes
            .iter()
            .filter(|node| node.interface)
            .filter_map(|node| match &node.key {
                PinKey::Chip(name) => Some(name.clone()),
                PinKey::Part(..) => None,
            })
            .collect();
        let mut generated = 0usize;
        for id in 0..self.nodes.len() {
            let node = &self.nodes[id];
            if node.dead || node.src.is_some() {
                continue;
            }
            let name = match &node.key {
                PinKey::Chip(name) => name.clone(),
                PinKey::Part(..) => loop {
                    let candidate = format!("__{generated}");
                    generated += 1;
                    if !interface_names.contains(&candidate) {
                        break candidate;
                    }
                },
            };
            self.assign_name(id, &name);
        }

        let mut parts = vec![HashMap::new(); self.part_names.len()];
        let mut outputs = HashMap::new();
        for node in &self.nodes {
            if node.dead {
                continue;
            }
            let name = node.name.as_ref().expect("every live node is named");
            match &node.key {
                PinKey::Part(idx, pin) => {
                    parts[*idx].insert(pin.clone(), name.clone());
                }
                PinKey::Chip(pin) if node.interface && node.kind == NodeKind::Input => {
                    outputs.insert(pin.clone(), name.clone());
                }
                PinKey::Chip(_) => {}
            }
        }
        Ok(Resolution { parts, outputs })
    }

    fn seed(&mut self, key: PinKey, kind: NodeKind, constant: bool, interface: bool) -> Result<()> {
        if self.index.contains_key(&key) {
            let name = match key {
                PinKey::Chip(name) => name,
                PinKey::Part(_, pin) => pin,
            };
            return Err(Error::DuplicatePinName { name });
        }
        let id = self.nodes.len();
        self.nodes.push(Node {
            key: key.clone(),
            kind,
            constant,
            interface,
            src: None,
            outs: Vec::new(),
            name: None,
            dead: false,
        });
        self.index.insert(key, id);
        Ok(())
    }

    fn lookup_or_create(&mut self, key: PinKey, kind: NodeKind, wire: &str) -> Result<usize> {
        if let Some(&id) = self.index.get(&key) {
            match (self.nodes[id].kind, kind) {
                (_, NodeKind::Unknown) => {}
                (current, requested) if current == requested => {}
                (NodeKind::Unknown, requested) => self.nodes[id].kind = requested,
                (NodeKind::Input, NodeKind::Output) => {
                    return Err(Error::InputUsedAsOutput {
                        pin: self.qualify(id, wire),
                    })
                }
                (NodeKind::Output, NodeKind::Input) => {
                    return Err(Error::OutputUsedAsInput {
                        pin: self.qualify(id, wire),
                    })
                }
                _ => unreachable!("kind pairs are covered above"),
            }
            return Ok(id);
        }
        let id = self.nodes.len();
        self.nodes.push(Node {
            key: key.clone(),
            kind,
            constant: false,
            interface: false,
            src: None,
            outs: Vec::new(),
            name: None,
            dead: false,
        });
        self.index.insert(key, id);
        Ok(id)
    }

    /// The qualified identifier used in error messages: `Part.pin:wire` for
    /// part pins, the bare name for the chip's own.
    fn qualify(&self, id: usize, wire: &str) -> String {
        match &self.nodes[id].key {
            PinKey::Part(idx, pin) => format!("{}.{}:{}", self.part_names[*idx], pin, wire),
            PinKey::Chip(name) => name.clone(),
        }
    }

    fn pin_name(&self, id: usize) -> String {
        match &self.nodes[id].key {
            PinKey::Chip(name) => name.clone(),
            PinKey::Part(idx, pin) => format!("{}.{}", self.part_names[*idx], pin),
        }
    }

    fn assign_name(&mut self, root: usize, name: &str) {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            self.nodes[id].name = Some(name.to_string());
            stack.extend(self.nodes[id].outs.iter().copied());
        }
    }
}
