//! Support code for `#[derive(Flags)]`. Not public API.
//!
//! The derive resolves each field's slot with method-resolution ranking
//! instead of runtime reflection. For a field of type `T` it emits
//!
//! ```text
//! (&&&Probe::of(&self.field)).flag_kind().slot(&mut self.field)
//! ```
//!
//! Auto-deref tries `&&Probe<T>` first (only implemented when
//! `T: FlagValue`), then `&Probe<T>` (when `T: Primitive`), then `Probe<T>`
//! (always). The first match picks the tag whose `slot` builds the
//! [`Slot`].

use std::any::type_name;
use std::marker::PhantomData;

use crate::decode::Primitive;
use crate::field::Slot;
use crate::value::FlagValue;

/// Zero-sized stand-in for a field's type.
pub struct Probe<T>(PhantomData<T>);

impl<T> Probe<T> {
    /// Captures the type of `field` without borrowing it past the call.
    #[must_use]
    pub const fn of(_field: &T) -> Self {
        Self(PhantomData)
    }
}

/// Chosen when the field implements [`FlagValue`].
pub struct ExtensionTag;

/// Chosen when the field has a built-in decoder.
pub struct PrimitiveTag;

/// Chosen for every other field.
pub struct UnsupportedTag;

/// Highest-ranked probe.
pub trait ExtensionKind {
    /// Selects the extension path.
    fn flag_kind(&self) -> ExtensionTag {
        ExtensionTag
    }
}

impl<T: FlagValue> ExtensionKind for &&Probe<T> {}

/// Middle-ranked probe.
pub trait PrimitiveKind {
    /// Selects the primitive path.
    fn flag_kind(&self) -> PrimitiveTag {
        PrimitiveTag
    }
}

impl<T: Primitive> PrimitiveKind for &Probe<T> {}

/// Fallback probe.
pub trait UnsupportedKind {
    /// Selects the unsupported path.
    fn flag_kind(&self) -> UnsupportedTag {
        UnsupportedTag
    }
}

impl<T> UnsupportedKind for Probe<T> {}

impl ExtensionTag {
    /// Borrows the field as a [`FlagValue`].
    pub fn slot<T: FlagValue>(self, field: &mut T) -> Slot<'_> {
        Slot::Extension(field)
    }
}

impl PrimitiveTag {
    /// Borrows the field as its primitive slot.
    pub fn slot<T: Primitive>(self, field: &mut T) -> Slot<'_> {
        T::slot(field)
    }
}

impl UnsupportedTag {
    /// Records the field's type name.
    pub fn slot<T>(self, _field: &mut T) -> Slot<'_> {
        Slot::Unsupported {
            kind: type_name::<T>(),
        }
    }
}
