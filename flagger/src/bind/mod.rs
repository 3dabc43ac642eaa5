//! Walking a struct's fields and turning them into flag registrations.

use std::any::type_name;

use tracing::{debug, trace};

use crate::decode::{Primitive, decode_default};
use crate::error::FlagError;
use crate::field::Slot;
use crate::flags::Flags;
use crate::metadata::{FlagMetadata, is_ignored, parse_metadata};
use crate::registry::{Binding, FlagRegistry, Registration};

/// Registers one flag per bindable field of `target` with `registry`.
///
/// Fields are visited in declaration order. Private fields and fields
/// annotated `#[flag("-")]` are skipped silently. Every other field is
/// dispatched on its type and registered; the registry keeps `&'a mut`
/// access to it so that parsing later writes into `target` directly.
///
/// The first failure aborts the walk. Flags registered for earlier fields
/// are not withdrawn, so a failed call can leave the registry partially
/// populated.
///
/// # Errors
///
/// - [`FlagError::InvalidTarget`] when `target` is an absent `Option`.
/// - [`FlagError::BadDefault`] when a default literal does not decode.
/// - [`FlagError::UnsupportedType`] when a field has no decoder and no
///   [`FlagValue`](crate::FlagValue) impl.
/// - [`FlagError::Registry`] when the registry refuses a flag.
pub fn bind<'a, R, T>(registry: &mut R, target: &'a mut T) -> Result<(), FlagError>
where
    R: FlagRegistry<'a> + ?Sized,
    T: Flags + ?Sized,
{
    let fields = target.flag_fields()?;
    let mut registered = 0_usize;
    for field in fields {
        if !field.is_settable() {
            trace!(field = field.name(), "skipping private field");
            continue;
        }
        if field.tag().is_some_and(is_ignored) {
            trace!(field = field.name(), "skipping ignored field");
            continue;
        }
        let field_name = field.name();
        let metadata = parse_metadata(field.tag(), field_name);
        let registration = dispatch(field_name, field.into_slot(), metadata)?;
        let flag = registration.name.clone();
        registry
            .register(registration)
            .map_err(|source| FlagError::Registry {
                flag,
                source: Box::new(source),
            })?;
        registered += 1;
    }
    debug!(target_type = type_name::<T>(), registered, "bound flags");
    Ok(())
}

/// Turns one field's slot and metadata into a registration.
///
/// Extension values are passed through untouched; primitive slots have
/// their default literal decoded first.
///
/// # Errors
///
/// Returns [`FlagError::BadDefault`] when the default does not decode and
/// [`FlagError::UnsupportedType`] for [`Slot::Unsupported`].
pub fn dispatch<'a>(
    field: &'static str,
    slot: Slot<'a>,
    metadata: FlagMetadata,
) -> Result<Registration<'a>, FlagError> {
    let FlagMetadata {
        name,
        default_literal,
        usage,
    } = metadata;
    let binding = match slot {
        Slot::Extension(value) => Binding::Extension(value),
        Slot::Bool(target) => Binding::Bool {
            default: decode(&name, &default_literal)?,
            target,
        },
        Slot::Int(target) => Binding::Int {
            default: decode(&name, &default_literal)?,
            target,
        },
        Slot::Int64(target) => Binding::Int64 {
            default: decode(&name, &default_literal)?,
            target,
        },
        Slot::Duration(target) => Binding::Duration {
            default: decode(&name, &default_literal)?,
            target,
        },
        Slot::Uint(target) => Binding::Uint {
            default: decode(&name, &default_literal)?,
            target,
        },
        Slot::Uint64(target) => Binding::Uint64 {
            default: decode(&name, &default_literal)?,
            target,
        },
        Slot::Float64(target) => Binding::Float64 {
            default: decode(&name, &default_literal)?,
            target,
        },
        Slot::Text(target) => Binding::Text {
            default: default_literal,
            target,
        },
        Slot::Unsupported { kind } => return Err(FlagError::UnsupportedType { field, kind }),
    };
    Ok(Registration {
        name,
        usage,
        binding,
    })
}

fn decode<T: Primitive>(flag: &str, literal: &str) -> Result<T, FlagError> {
    decode_default(literal).map_err(|source| FlagError::BadDefault {
        flag: flag.to_owned(),
        kind: T::KIND,
        literal: literal.to_owned(),
        source,
    })
}
