use thiserror::Error;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Everything that can go wrong while parsing pin specs, composing chips, or
/// mounting a circuit.
///
/// All of these surface at build time; once a `Circuit` has been constructed
/// the simulation itself is pure computation on validated state. Wiring
/// variants carry a qualified pin identifier of the form `Part.pin:wire`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A pin spec or connection string contains an empty name token.
    #[error("empty pin name in {spec:?} at offset {at}")]
    EmptyPinName {
        /// The full string being parsed.
        spec: String,
        /// Byte offset of the offending token.
        at: usize,
    },

    /// A pin name contains a character outside `[A-Za-z_][A-Za-z_0-9]*`.
    #[error("invalid character {found:?} in pin name in {spec:?} at offset {at}")]
    InvalidPinChar {
        /// The full string being parsed.
        spec: String,
        /// Byte offset of the offending character.
        at: usize,
        /// The character that is not legal in a pin name.
        found: char,
    },

    /// A `[` was opened but never closed.
    #[error("missing ']' in {spec:?} at offset {at}")]
    MissingBracket {
        /// The full string being parsed.
        spec: String,
        /// Byte offset of the opening bracket.
        at: usize,
    },

    /// The text between brackets is not a non-negative integer.
    #[error("invalid bus index in {spec:?} at offset {at}")]
    InvalidIndex {
        /// The full string being parsed.
        spec: String,
        /// Byte offset of the index text.
        at: usize,
    },

    /// A `N..M` range was used in an interface declaration, where only plain
    /// widths are allowed.
    #[error("bus range forbidden in interface declaration {spec:?}")]
    RangeInInterface {
        /// The full interface spec.
        spec: String,
    },

    /// An assignment in a connection string has no `=`.
    #[error("missing '=' in connection {conn:?}")]
    MissingEquals {
        /// The offending assignment text.
        conn: String,
    },

    /// Text followed a closing bracket inside a single pin expression.
    #[error("unexpected {found:?} in {spec:?} at offset {at}")]
    TrailingGarbage {
        /// The full string being parsed.
        spec: String,
        /// Byte offset of the unexpected character.
        at: usize,
        /// The unexpected character.
        found: char,
    },

    /// The two sides of a bus assignment expand to incompatible lengths.
    #[error("mismatched bus lengths in connection {conn:?} ({lhs} pins vs {rhs} pins)")]
    LengthMismatch {
        /// The offending assignment text.
        conn: String,
        /// Number of scalar pins on the left-hand side.
        lhs: usize,
        /// Number of scalar pins on the right-hand side.
        rhs: usize,
    },

    /// An interface declares the same scalar pin name twice, or reuses one of
    /// the reserved constant names `false`, `true`, `clk`.
    #[error("duplicate pin name {name:?}")]
    DuplicatePinName {
        /// The duplicated name.
        name: String,
    },

    /// A connection names a pin the part does not have.
    #[error("invalid pin name {pin} for part {part}")]
    InvalidPinName {
        /// The unknown pin name.
        pin: String,
        /// Name of the part whose interface was searched.
        part: String,
    },

    /// Two sources drive the same wire.
    #[error("{pin}: output pin already used as output")]
    OutputAlreadyDriven {
        /// Qualified identifier of the second driver.
        pin: String,
    },

    /// A part input is assigned more than one wire. A part input has exactly
    /// one source, so fan-in on it is always a mistake.
    #[error("{pin}: input pin connected to more than one wire")]
    InputFanIn {
        /// Qualified identifier of the over-assigned input.
        pin: String,
    },

    /// Something drives one of the enclosing chip's own input pins.
    #[error("{pin}: chip input pin used as output")]
    ChipInputDriven {
        /// Qualified identifier of the offending driver.
        pin: String,
    },

    /// Something drives one of the constant sources.
    #[error("{pin}: output pin connected to constant {name} input")]
    ConstantDriven {
        /// Qualified identifier of the offending driver.
        pin: String,
        /// Which constant was driven (`false`, `true` or `clk`).
        name: String,
    },

    /// A part output appears on the consuming side of a connection.
    #[error("{pin}: output pin used as input")]
    OutputUsedAsInput {
        /// Qualified identifier of the misused pin.
        pin: String,
    },

    /// A part input appears on the driving side of a connection.
    #[error("{pin}: input pin used as output")]
    InputUsedAsOutput {
        /// Qualified identifier of the misused pin.
        pin: String,
    },

    /// A chip-internal name or chip output is consumed but never driven.
    #[error("pin {pin} not connected to any output")]
    NoSource {
        /// The dangling pin.
        pin: String,
    },

    /// A chip-internal name is driven but never consumed.
    #[error("pin {pin} not connected to any input")]
    NoSink {
        /// The dangling pin.
        pin: String,
    },

    /// A chip or circuit was built from an empty part list.
    #[error("chip {chip:?} has no parts")]
    EmptyPartList {
        /// Name of the chip being composed.
        chip: String,
    },

    /// A wire survived mounting without a source component. This indicates a
    /// hole in build-time validation, not a user mistake.
    #[error("wire {name} has no source component")]
    WireWithoutSource {
        /// Canonical name of the sourceless wire.
        name: String,
    },
}
