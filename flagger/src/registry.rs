//! The boundary between field binding and the flag store.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use crate::decode::Primitive;
use crate::value::{FlagValue, TypedValue};

/// A store that accepts flag registrations.
///
/// [`bind`](crate::bind) issues exactly one [`register`](Self::register)
/// call per bound field. Name uniqueness is the registry's concern.
pub trait FlagRegistry<'a> {
    /// Error raised when a registration is refused.
    type Error: Error + Send + Sync + 'static;

    /// Adds one flag.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] when the registry refuses the flag, for
    /// example because the name is already taken.
    fn register(&mut self, registration: Registration<'a>) -> Result<(), Self::Error>;
}

/// A field address together with its decoded default.
pub enum Binding<'a> {
    /// A self-describing value; it carries its own default.
    Extension(&'a mut dyn FlagValue),
    /// A `bool` field.
    Bool {
        /// Field address.
        target: &'a mut bool,
        /// Decoded default.
        default: bool,
    },
    /// An `i32` field.
    Int {
        /// Field address.
        target: &'a mut i32,
        /// Decoded default.
        default: i32,
    },
    /// An `i64` field.
    Int64 {
        /// Field address.
        target: &'a mut i64,
        /// Decoded default.
        default: i64,
    },
    /// A [`Duration`] field.
    Duration {
        /// Field address.
        target: &'a mut Duration,
        /// Decoded default.
        default: Duration,
    },
    /// A `usize` field.
    Uint {
        /// Field address.
        target: &'a mut usize,
        /// Decoded default.
        default: usize,
    },
    /// A `u64` field.
    Uint64 {
        /// Field address.
        target: &'a mut u64,
        /// Decoded default.
        default: u64,
    },
    /// An `f64` field.
    Float64 {
        /// Field address.
        target: &'a mut f64,
        /// Decoded default.
        default: f64,
    },
    /// A `String` field.
    Text {
        /// Field address.
        target: &'a mut String,
        /// Default text.
        default: String,
    },
}

fn typed<'a, T: Primitive + 'a>(target: &'a mut T, default: T) -> Box<dyn FlagValue + 'a> {
    Box::new(TypedValue::bind(target, default))
}

impl<'a> Binding<'a> {
    /// Short name of the bound kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Extension(_) => "value",
            Self::Bool { .. } => bool::KIND,
            Self::Int { .. } => i32::KIND,
            Self::Int64 { .. } => i64::KIND,
            Self::Duration { .. } => Duration::KIND,
            Self::Uint { .. } => usize::KIND,
            Self::Uint64 { .. } => u64::KIND,
            Self::Float64 { .. } => f64::KIND,
            Self::Text { .. } => String::KIND,
        }
    }

    /// Text form of the kind's zero value; `None` for extension values.
    #[must_use]
    pub fn zero_value(&self) -> Option<String> {
        match self {
            Self::Extension(_) => None,
            Self::Bool { .. } => Some(bool::default().format()),
            Self::Int { .. } => Some(i32::default().format()),
            Self::Int64 { .. } => Some(i64::default().format()),
            Self::Duration { .. } => Some(Duration::default().format()),
            Self::Uint { .. } => Some(usize::default().format()),
            Self::Uint64 { .. } => Some(u64::default().format()),
            Self::Float64 { .. } => Some(f64::default().format()),
            Self::Text { .. } => Some(String::new()),
        }
    }

    /// Stores the default in the field and returns the field as a
    /// [`FlagValue`].
    #[must_use]
    pub fn into_value(self) -> Box<dyn FlagValue + 'a> {
        match self {
            Self::Extension(value) => Box::new(value),
            Self::Bool { target, default } => typed(target, default),
            Self::Int { target, default } => typed(target, default),
            Self::Int64 { target, default } => typed(target, default),
            Self::Duration { target, default } => typed(target, default),
            Self::Uint { target, default } => typed(target, default),
            Self::Uint64 { target, default } => typed(target, default),
            Self::Float64 { target, default } => typed(target, default),
            Self::Text { target, default } => typed(target, default),
        }
    }
}

impl fmt::Debug for Binding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Binding").field(&self.kind()).finish()
    }
}

/// A request to create one flag bound to one field.
#[derive(Debug)]
pub struct Registration<'a> {
    /// Flag name.
    pub name: String,
    /// Help text.
    pub usage: String,
    /// Target field and default.
    pub binding: Binding<'a>,
}
