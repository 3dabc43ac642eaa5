//! Field descriptors produced by `#[derive(Flags)]`.

use std::fmt;
use std::time::Duration;

use crate::value::FlagValue;

/// Whether code outside the struct's module may set a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Declared with any form of `pub`.
    Public,
    /// Declared without a visibility qualifier.
    Private,
}

/// The address of a field, tagged with how it becomes a flag.
pub enum Slot<'a> {
    /// The field's type implements [`FlagValue`].
    Extension(&'a mut dyn FlagValue),
    /// A `bool` field.
    Bool(&'a mut bool),
    /// An `i32` field.
    Int(&'a mut i32),
    /// An `i64` field.
    Int64(&'a mut i64),
    /// A [`Duration`] field.
    Duration(&'a mut Duration),
    /// A `usize` field.
    Uint(&'a mut usize),
    /// A `u64` field.
    Uint64(&'a mut u64),
    /// An `f64` field.
    Float64(&'a mut f64),
    /// A `String` field.
    Text(&'a mut String),
    /// A field of any other type.
    Unsupported {
        /// The field's type name.
        kind: &'static str,
    },
}

impl Slot<'_> {
    /// Short name of the slot's kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Extension(_) => "value",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Int64(_) => "int64",
            Self::Duration(_) => "duration",
            Self::Uint(_) => "uint",
            Self::Uint64(_) => "uint64",
            Self::Float64(_) => "float64",
            Self::Text(_) => "string",
            Self::Unsupported { kind } => *kind,
        }
    }
}

impl fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slot").field(&self.kind()).finish()
    }
}

/// One struct field as seen by [`bind`](crate::bind).
#[derive(Debug)]
pub struct Field<'a> {
    name: &'static str,
    tag: Option<&'static str>,
    visibility: Visibility,
    slot: Slot<'a>,
}

impl<'a> Field<'a> {
    /// Describes a field.
    #[must_use]
    pub const fn new(
        name: &'static str,
        tag: Option<&'static str>,
        visibility: Visibility,
        slot: Slot<'a>,
    ) -> Self {
        Self {
            name,
            tag,
            visibility,
            slot,
        }
    }

    /// Declared field name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Raw `#[flag(...)]` annotation, if any.
    #[must_use]
    pub const fn tag(&self) -> Option<&'static str> {
        self.tag
    }

    /// Declared visibility.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Whether the field may be bound to a flag.
    #[must_use]
    pub const fn is_settable(&self) -> bool {
        matches!(self.visibility, Visibility::Public)
    }

    /// Kind of the field's slot.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.slot.kind()
    }

    /// Releases the field's address.
    #[must_use]
    pub fn into_slot(self) -> Slot<'a> {
        self.slot
    }
}
