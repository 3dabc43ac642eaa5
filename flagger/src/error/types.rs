//! Primary error enum for binding and parsing flows.

use clap::error::ErrorKind;
use thiserror::Error;

use crate::decode::DecodeError;
use crate::value::ValueError;

/// Errors that can occur while binding a struct or parsing its flags.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlagError {
    /// The bind target did not resolve to a struct.
    #[error("invalid bind target `{target}`: {reason}")]
    InvalidTarget {
        /// Type name of the rejected target.
        target: &'static str,
        /// Why the target was rejected.
        reason: &'static str,
    },

    /// A field's default literal could not be decoded into its type.
    #[error("could not decode default {literal:?} of flag `{flag}` as {kind}: {source}")]
    BadDefault {
        /// Flag whose default was rejected.
        flag: String,
        /// Kind the literal was decoded as.
        kind: &'static str,
        /// The offending literal.
        literal: String,
        /// Underlying decoder failure.
        #[source]
        source: DecodeError,
    },

    /// A field's type has neither a decoder nor a [`FlagValue`](crate::FlagValue) impl.
    #[error("unsupported type `{kind}` for field `{field}`")]
    UnsupportedType {
        /// Declared field name.
        field: &'static str,
        /// Type name of the field.
        kind: &'static str,
    },

    /// The flag registry refused a registration.
    #[error("failed to register flag `{flag}`: {source}")]
    Registry {
        /// Flag that could not be registered.
        flag: String,
        /// Error reported by the registry.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error parsing command-line arguments.
    #[error("Failed to parse command-line arguments: {0}")]
    CliParsing(#[from] Box<clap::Error>),

    /// A flag rejected the value supplied for it.
    #[error("invalid value {value:?} for flag `{flag}`: {source}")]
    InvalidValue {
        /// Flag that rejected the value.
        flag: String,
        /// The rejected text.
        value: String,
        /// Error reported by the flag value.
        #[source]
        source: ValueError,
    },

    /// No flag with this name is registered.
    #[error("no such flag `{name}`")]
    UnknownFlag {
        /// The requested flag name.
        name: String,
    },
}

impl FlagError {
    /// Returns `true` when parsing stopped because help or version output
    /// was requested rather than because the arguments were wrong.
    #[must_use]
    pub fn is_display_request(&self) -> bool {
        let Self::CliParsing(err) = self else {
            return false;
        };
        matches!(
            err.kind(),
            ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        )
    }
}
