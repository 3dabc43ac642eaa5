//! The field-enumeration trait implemented by `#[derive(Flags)]`.

use std::any::type_name;

use crate::error::FlagError;
use crate::field::Field;

/// Structs whose fields can be bound to command-line flags.
///
/// Implement it with `#[derive(Flags)]`. The derive accepts structs with
/// named fields (or no fields) and reads an optional
/// `#[flag("name,default,usage")]` annotation per field.
///
/// References, boxes and options of a `Flags` type are `Flags` too, so any
/// number of indirection layers may sit between the caller and the struct.
/// An absent `Option` is rejected with [`FlagError::InvalidTarget`].
pub trait Flags {
    /// Lists the fields in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::InvalidTarget`] when the target is absent.
    fn flag_fields(&mut self) -> Result<Vec<Field<'_>>, FlagError>;
}

impl<T: Flags + ?Sized> Flags for &mut T {
    fn flag_fields(&mut self) -> Result<Vec<Field<'_>>, FlagError> {
        (**self).flag_fields()
    }
}

impl<T: Flags + ?Sized> Flags for Box<T> {
    fn flag_fields(&mut self) -> Result<Vec<Field<'_>>, FlagError> {
        (**self).flag_fields()
    }
}

impl<T: Flags> Flags for Option<T> {
    fn flag_fields(&mut self) -> Result<Vec<Field<'_>>, FlagError> {
        match self {
            Some(inner) => inner.flag_fields(),
            None => Err(FlagError::InvalidTarget {
                target: type_name::<Self>(),
                reason: "target is absent",
            }),
        }
    }
}
