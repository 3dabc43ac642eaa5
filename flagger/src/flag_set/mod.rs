//! The default flag registry.
//!
//! A [`FlagSet`] owns one [`Flag`] per registration. Each flag keeps a
//! mutable borrow of the field it was bound to, so parsing writes straight
//! into the caller's struct and the struct becomes readable again once the
//! set is dropped.

mod command;

use std::ffi::OsString;
use std::fmt;
use std::slice;

use thiserror::Error;
use tracing::debug;

use crate::error::FlagError;
use crate::registry::{FlagRegistry, Registration};
use crate::value::FlagValue;

/// Reasons a [`FlagSet`] refuses a registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// A flag with this name already exists in the set.
    #[error("flag redefined: {name}")]
    Redefined {
        /// The duplicated name.
        name: String,
    },
    /// The name cannot be used as a long option.
    #[error("invalid flag name {name:?}: {reason}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// One registered flag.
pub struct Flag<'a> {
    name: String,
    kind: &'static str,
    usage: String,
    default_value: String,
    default_is_zero: bool,
    value: Box<dyn FlagValue + 'a>,
    was_set: bool,
}

impl Flag<'_> {
    /// Flag name as used on the command line, without dashes.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind of the bound field, `value` for [`FlagValue`] fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Help text.
    #[must_use]
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// The value's text form at registration time.
    #[must_use]
    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    /// The value's current text form.
    #[must_use]
    pub fn value(&self) -> String {
        self.value.get()
    }

    /// Whether a bare `--name` sets the flag to `true`.
    #[must_use]
    pub fn is_bool_flag(&self) -> bool {
        self.value.is_bool_flag()
    }

    /// Whether the flag was set by [`FlagSet::parse`] or [`FlagSet::set`].
    #[must_use]
    pub const fn was_set(&self) -> bool {
        self.was_set
    }

    fn apply(&mut self, raw: &str) -> Result<(), FlagError> {
        self.value
            .set(raw)
            .map_err(|source| FlagError::InvalidValue {
                flag: self.name.clone(),
                value: raw.to_owned(),
                source,
            })?;
        self.was_set = true;
        Ok(())
    }
}

impl fmt::Debug for Flag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flag")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("usage", &self.usage)
            .field("default_value", &self.default_value)
            .field("default_is_zero", &self.default_is_zero)
            .field("value", &self.value.get())
            .field("was_set", &self.was_set)
            .finish()
    }
}

/// A named collection of flags bound to struct fields.
///
/// ```rust
/// use flagger::{Flags, FlagSet};
///
/// #[derive(Default, Flags)]
/// struct Opts {
///     #[flag("name,world,who to greet")]
///     pub name: String,
/// }
///
/// # fn main() -> Result<(), flagger::FlagError> {
/// let mut opts = Opts::default();
/// let mut flags = FlagSet::new("greet");
/// flagger::bind(&mut flags, &mut opts)?;
/// assert_eq!(flags.lookup("name").map(|flag| flag.default_value()), Some("world"));
///
/// flags.parse(["--name=there", "extra"])?;
/// assert_eq!(flags.args(), ["extra"]);
/// drop(flags);
/// assert_eq!(opts.name, "there");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FlagSet<'a> {
    name: String,
    flags: Vec<Flag<'a>>,
    args: Vec<String>,
    parsed: bool,
}

impl<'a> FlagSet<'a> {
    /// Creates an empty set; `name` heads the generated usage text.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flags: Vec::new(),
            args: Vec::new(),
            parsed: false,
        }
    }

    /// The set's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Finds a flag by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Flag<'a>> {
        self.flags.iter().find(|flag| flag.name == name)
    }

    /// Sets a flag from text as if it had appeared on the command line.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::UnknownFlag`] when no flag has this name and
    /// [`FlagError::InvalidValue`] when the flag rejects `raw`.
    pub fn set(&mut self, name: &str, raw: &str) -> Result<(), FlagError> {
        let flag = self
            .flags
            .iter_mut()
            .find(|flag| flag.name == name)
            .ok_or_else(|| FlagError::UnknownFlag {
                name: name.to_owned(),
            })?;
        flag.apply(raw)
    }

    /// Iterates flags in registration order.
    pub fn iter(&self) -> slice::Iter<'_, Flag<'a>> {
        self.flags.iter()
    }

    /// Number of registered flags.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether no flag is registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Positional arguments left over by the last [`parse`](Self::parse).
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Whether [`parse`](Self::parse) has completed successfully.
    #[must_use]
    pub const fn is_parsed(&self) -> bool {
        self.parsed
    }

    /// Parses `args` and writes every supplied value into its field.
    ///
    /// `args` excludes the program name. Flags are long options:
    /// `--name value` or `--name=value`. Boolean flags take no separate
    /// value; a bare `--name` means `true` and `--name=false` clears them.
    /// A flag given several times receives every value in order, so the
    /// last one wins for plain fields. Everything from the first positional
    /// argument (or after `--`) on is kept in [`args`](Self::args).
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::CliParsing`] for unknown flags, missing values
    /// and help requests, and [`FlagError::InvalidValue`] when a flag
    /// rejects its value. Values applied before a rejected one stay applied.
    pub fn parse<I, S>(&mut self, args: I) -> Result<(), FlagError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString> + Clone,
    {
        let matches = self
            .command()
            .try_get_matches_from(args)
            .map_err(Box::new)?;
        for flag in &mut self.flags {
            let Some(values) = matches.get_many::<String>(&flag.name) else {
                continue;
            };
            for raw in values {
                flag.apply(raw)?;
            }
        }
        self.args = matches
            .get_many::<String>(command::ARGS_ID)
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        self.parsed = true;
        debug!(set = %self.name, positional = self.args.len(), "parsed flags");
        Ok(())
    }

    /// Renders the help text listing every flag with its usage and default.
    #[must_use]
    pub fn render_usage(&self) -> String {
        self.command().render_help().to_string()
    }

    fn check_name(&self, name: &str) -> Result<(), RegistryError> {
        let reason = if name.is_empty() {
            Some("name is empty")
        } else if name.starts_with('-') {
            Some("name starts with '-'")
        } else if name.contains('=') {
            Some("name contains '='")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(RegistryError::InvalidName {
                name: name.to_owned(),
                reason,
            });
        }
        if self.lookup(name).is_some() {
            return Err(RegistryError::Redefined {
                name: name.to_owned(),
            });
        }
        Ok(())
    }
}

impl<'a> FlagRegistry<'a> for FlagSet<'a> {
    type Error = RegistryError;

    fn register(&mut self, registration: Registration<'a>) -> Result<(), RegistryError> {
        let Registration {
            name,
            usage,
            binding,
        } = registration;
        self.check_name(&name)?;
        let kind = binding.kind();
        let zero_value = binding.zero_value();
        let value = binding.into_value();
        let default_value = value.get();
        let default_is_zero =
            default_value.is_empty() || zero_value.is_some_and(|zero| zero == default_value);
        debug!(flag = %name, kind, default = %default_value, "registered flag");
        self.flags.push(Flag {
            name,
            kind,
            usage,
            default_value,
            default_is_zero,
            value,
            was_set: false,
        });
        Ok(())
    }
}

impl<'s, 'a> IntoIterator for &'s FlagSet<'a> {
    type Item = &'s Flag<'a>;
    type IntoIter = slice::Iter<'s, Flag<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
