//! The capability contract for self-describing flag values.

use std::error::Error;
use std::fmt;

use crate::decode::Primitive;

/// Boxed error returned when a flag value rejects its input.
pub type ValueError = Box<dyn Error + Send + Sync>;

/// A value that can read, write and print itself as a flag.
///
/// Giving a field's type this trait routes the field through the extension
/// path of [`bind`](crate::bind): its annotation's default literal is not
/// decoded, and the value's state at bind time becomes the recorded default.
/// The extension path wins over the built-in decoders, so a newtype around an
/// integer is still handled by its own [`set`](Self::set).
///
/// ```rust
/// use std::fmt;
/// use flagger::{FlagValue, ValueError};
///
/// #[derive(Default)]
/// struct Tags(Vec<String>);
///
/// impl fmt::Display for Tags {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str(&self.0.join(","))
///     }
/// }
///
/// impl FlagValue for Tags {
///     fn set(&mut self, raw: &str) -> Result<(), ValueError> {
///         self.0.push(raw.to_owned());
///         Ok(())
///     }
/// }
///
/// let mut tags = Tags::default();
/// tags.set("a").unwrap();
/// tags.set("b").unwrap();
/// assert_eq!(tags.get(), "a,b");
/// ```
pub trait FlagValue: fmt::Display {
    /// Updates the value from command-line text.
    ///
    /// # Errors
    ///
    /// Returns an error when `raw` is not acceptable for this value.
    fn set(&mut self, raw: &str) -> Result<(), ValueError>;

    /// Reads the current value as text.
    fn get(&self) -> String {
        self.to_string()
    }

    /// Whether a bare `--name` without a value means `true`.
    fn is_bool_flag(&self) -> bool {
        false
    }
}

impl<V: FlagValue + ?Sized> FlagValue for &mut V {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        (**self).set(raw)
    }

    fn get(&self) -> String {
        (**self).get()
    }

    fn is_bool_flag(&self) -> bool {
        (**self).is_bool_flag()
    }
}

/// Adapts a primitive field to [`FlagValue`].
pub(crate) struct TypedValue<'a, T> {
    target: &'a mut T,
}

impl<'a, T: Primitive> TypedValue<'a, T> {
    /// Stores `default` in the field and wraps its address.
    pub(crate) fn bind(target: &'a mut T, default: T) -> Self {
        *target = default;
        Self { target }
    }
}

impl<T: Primitive> fmt::Display for TypedValue<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.target.format())
    }
}

impl<T: Primitive> FlagValue for TypedValue<'_, T> {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        *self.target = T::parse(raw)?;
        Ok(())
    }

    fn is_bool_flag(&self) -> bool {
        T::IS_BOOL
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for the primitive adapter.

    use std::time::Duration;

    use super::*;
    use anyhow::{Result, anyhow, ensure};
    use rstest::rstest;

    #[rstest]
    fn binding_writes_the_default_into_the_field() {
        let mut port = 1_u64;
        let value = TypedValue::bind(&mut port, 8080);
        assert_eq!(value.get(), "8080");
        drop(value);
        assert_eq!(port, 8080);
    }

    #[rstest]
    fn set_parses_through_the_primitive() -> Result<()> {
        let mut timeout = Duration::ZERO;
        let mut value = TypedValue::bind(&mut timeout, Duration::from_secs(1));
        value.set("1m30s").map_err(|err| anyhow!(err))?;
        ensure!(value.get() == "1m30s", "got {}", value.get());
        drop(value);
        ensure!(timeout == Duration::from_secs(90), "got {timeout:?}");
        Ok(())
    }

    #[rstest]
    fn set_rejects_empty_numeric_text() {
        let mut count = 3_i32;
        let mut value = TypedValue::bind(&mut count, 3);
        assert!(value.set("").is_err());
        assert_eq!(value.get(), "3");
    }

    #[rstest]
    fn only_booleans_are_bool_flags() {
        let mut flag = false;
        let mut text = String::new();
        assert!(TypedValue::bind(&mut flag, true).is_bool_flag());
        assert!(!TypedValue::bind(&mut text, String::new()).is_bool_flag());
    }
}
