//! Core crate for the `flagger` flag-binding library.
//!
//! A configuration struct derives [`Flags`]; [`bind`] walks its fields and
//! registers one command-line flag per public field with a [`FlagRegistry`],
//! usually a [`FlagSet`]. Parsing arguments afterwards writes straight into
//! the struct's fields.
//!
//! ```rust
//! use flagger::{Flags, FlagSet};
//!
//! #[derive(Default, Flags)]
//! struct Config {
//!     #[flag("verbose,false,print more")]
//!     pub verbose: bool,
//!     #[flag("port,8080,listen port")]
//!     pub port: u64,
//!     pub name: String,
//! }
//!
//! # fn main() -> Result<(), flagger::FlagError> {
//! let mut config = Config::default();
//! {
//!     let mut flags = FlagSet::new("demo");
//!     flagger::bind(&mut flags, &mut config)?;
//!     flags.parse(["--verbose", "--name", "api"])?;
//! }
//! assert!(config.verbose);
//! assert_eq!(config.port, 8080);
//! assert_eq!(config.name, "api");
//! # Ok(())
//! # }
//! ```
//!
//! The derive implementation lives in the companion `flagger_macros` crate.

pub use flagger_macros::Flags;

mod bind;
pub mod decode;
mod error;
mod field;
mod flag_set;
mod flags;
pub mod metadata;
mod registry;
mod value;

#[doc(hidden)]
pub mod __private;

use std::ffi::OsString;

pub use bind::{bind, dispatch};
pub use decode::{DecodeError, DurationError, Primitive};
pub use error::FlagError;
pub use field::{Field, Slot, Visibility};
pub use flag_set::{Flag, FlagSet, RegistryError};
pub use flags::Flags;
pub use metadata::{FlagMetadata, parse_metadata};
pub use registry::{Binding, FlagRegistry, Registration};
pub use value::{FlagValue, ValueError};

/// Forwards `args` to [`FlagSet::parse`] unchanged.
///
/// # Errors
///
/// Returns whatever [`FlagSet::parse`] reports.
pub fn parse<I, S>(flags: &mut FlagSet<'_>, args: I) -> Result<(), FlagError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    flags.parse(args)
}

/// Builds a `T` from its defaults and a full argument vector.
///
/// The first item of `args` is the program name and names the throwaway
/// [`FlagSet`]; the rest is parsed after the fields of a fresh
/// `T::default()` have been bound.
///
/// ```rust
/// use flagger::Flags;
///
/// #[derive(Default, Flags)]
/// struct Opts {
///     #[flag("retries,3,how often to retry")]
///     pub retries: i32,
/// }
///
/// # fn main() -> Result<(), flagger::FlagError> {
/// let opts: Opts = flagger::parse_from(["tool", "--retries=5"])?;
/// assert_eq!(opts.retries, 5);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns any binding failure from [`bind`] or parsing failure from
/// [`FlagSet::parse`].
pub fn parse_from<T, I, S>(args: I) -> Result<T, FlagError>
where
    T: Flags + Default,
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let mut args = args.into_iter();
    let program = args.next().map_or_else(
        || String::from(env!("CARGO_PKG_NAME")),
        |arg| arg.into().to_string_lossy().into_owned(),
    );
    let mut config = T::default();
    {
        let mut flags = FlagSet::new(program);
        bind(&mut flags, &mut config)?;
        flags.parse(args)?;
    }
    Ok(config)
}
