//! Default-value decoders for the built-in flag kinds.
//!
//! Every supported field type implements [`Primitive`], which knows how to
//! parse a non-empty literal and how to print itself back as a flag default.
//! [`decode_default`] layers the shared rule on top: an empty literal is the
//! type's zero value and never reaches the parser, so `""` is not handed to
//! the duration grammar or the integer parser.

mod duration;

use std::num::{ParseFloatError, ParseIntError};
use std::time::Duration;

use thiserror::Error;

use crate::field::Slot;

pub use duration::{DurationError, format_duration, parse_duration};

/// Failure to decode a literal into a flag's type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The literal is not one of the accepted boolean spellings.
    #[error("invalid boolean literal {literal:?}")]
    Bool {
        /// The rejected literal.
        literal: String,
    },
    /// The literal is not a decimal integer in range.
    #[error(transparent)]
    Int(#[from] ParseIntError),
    /// The literal is not a floating-point number.
    #[error(transparent)]
    Float(#[from] ParseFloatError),
    /// The literal is not a valid duration.
    #[error(transparent)]
    Duration(#[from] DurationError),
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for bool {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for std::time::Duration {}
    impl Sealed for usize {}
    impl Sealed for u64 {}
    impl Sealed for f64 {}
    impl Sealed for String {}
}

/// Field types with a built-in decoder.
///
/// The set is closed: `bool`, `i32`, `i64`, [`Duration`], `usize`, `u64`,
/// `f64` and `String`. Other types become flags by implementing
/// [`FlagValue`](crate::FlagValue).
///
/// Accepted literals per kind:
///
/// - `bool`: `1 t T TRUE true True` and `0 f F FALSE false False`.
/// - integers: optionally signed decimal digits, in range for the width.
/// - `f64`: decimal or exponent form (`1.5`, `-2e3`) and, in any case,
///   `inf`, `infinity` and `nan`. Hexadecimal floats and `_` digit
///   separators are rejected.
/// - [`Duration`]: see [`parse_duration`].
/// - `String`: any text, verbatim.
pub trait Primitive: Default + sealed::Sealed {
    /// Kind name used in error messages.
    const KIND: &'static str;

    /// Whether a bare `--name` means `true` for this kind.
    const IS_BOOL: bool = false;

    /// Parses a non-empty literal.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] when the literal is malformed or out of
    /// range for the type.
    fn parse(literal: &str) -> Result<Self, DecodeError>;

    /// Renders the value the way a flag default is recorded.
    fn format(&self) -> String;

    /// Wraps a field address in the matching [`Slot`].
    fn slot(target: &mut Self) -> Slot<'_>;
}

/// Decodes a default literal, mapping the empty literal to the zero value.
///
/// ```rust
/// use std::time::Duration;
/// use flagger::decode::decode_default;
///
/// assert_eq!(decode_default::<i64>("").unwrap(), 0);
/// assert_eq!(decode_default::<Duration>("").unwrap(), Duration::ZERO);
/// assert!(decode_default::<bool>("tru").is_err());
/// ```
///
/// # Errors
///
/// Returns the type's [`DecodeError`] for a non-empty malformed literal.
pub fn decode_default<T: Primitive>(literal: &str) -> Result<T, DecodeError> {
    if literal.is_empty() {
        return Ok(T::default());
    }
    T::parse(literal)
}

/// Parses the boolean spellings accepted on the command line.
///
/// # Errors
///
/// Returns [`DecodeError::Bool`] for anything but `1 t T TRUE true True`
/// and `0 f F FALSE false False`.
pub fn parse_bool(literal: &str) -> Result<bool, DecodeError> {
    match literal {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(DecodeError::Bool {
            literal: literal.to_owned(),
        }),
    }
}

impl Primitive for bool {
    const KIND: &'static str = "bool";
    const IS_BOOL: bool = true;

    fn parse(literal: &str) -> Result<Self, DecodeError> {
        parse_bool(literal)
    }

    fn format(&self) -> String {
        self.to_string()
    }

    fn slot(target: &mut Self) -> Slot<'_> {
        Slot::Bool(target)
    }
}

/// Integer kinds share `str::parse`; only the width differs.
macro_rules! integer_primitive {
    ($ty:ty, $kind:literal, $variant:ident) => {
        impl Primitive for $ty {
            const KIND: &'static str = $kind;

            fn parse(literal: &str) -> Result<Self, DecodeError> {
                Ok(literal.parse::<$ty>()?)
            }

            fn format(&self) -> String {
                self.to_string()
            }

            fn slot(target: &mut Self) -> Slot<'_> {
                Slot::$variant(target)
            }
        }
    };
}

integer_primitive!(i32, "int", Int);
integer_primitive!(i64, "int64", Int64);
integer_primitive!(usize, "uint", Uint);
integer_primitive!(u64, "uint64", Uint64);

impl Primitive for f64 {
    const KIND: &'static str = "float64";

    fn parse(literal: &str) -> Result<Self, DecodeError> {
        Ok(literal.parse::<Self>()?)
    }

    fn format(&self) -> String {
        self.to_string()
    }

    fn slot(target: &mut Self) -> Slot<'_> {
        Slot::Float64(target)
    }
}

impl Primitive for Duration {
    const KIND: &'static str = "duration";

    fn parse(literal: &str) -> Result<Self, DecodeError> {
        Ok(parse_duration(literal)?)
    }

    fn format(&self) -> String {
        format_duration(*self)
    }

    fn slot(target: &mut Self) -> Slot<'_> {
        Slot::Duration(target)
    }
}

impl Primitive for String {
    const KIND: &'static str = "string";

    fn parse(literal: &str) -> Result<Self, DecodeError> {
        Ok(literal.to_owned())
    }

    fn format(&self) -> String {
        self.clone()
    }

    fn slot(target: &mut Self) -> Slot<'_> {
        Slot::Text(target)
    }
}

#[cfg(test)]
mod tests;
