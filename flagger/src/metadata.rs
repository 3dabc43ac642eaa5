//! Parsing of per-field flag annotations.
//!
//! An annotation has the form `name,default,usage`. Segments are positional
//! and optional; the sentinel `-` excludes a field altogether.

/// Separates the segments of an annotation.
pub const SEPARATOR: char = ',';

/// Annotation value that excludes a field from binding.
pub const IGNORE: &str = "-";

/// Flag settings read from a field annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagMetadata {
    /// Flag name; the declared field name when the annotation omits it.
    pub name: String,
    /// Default literal; empty means the type's zero value.
    pub default_literal: String,
    /// Help text shown for the flag.
    pub usage: String,
}

/// Returns `true` when the annotation excludes its field.
#[must_use]
pub fn is_ignored(raw: &str) -> bool {
    raw == IGNORE
}

/// Splits an annotation into flag name, default literal and usage.
///
/// Parsing never fails. Missing segments fall back to `field_name` for the
/// name and to the empty string otherwise; segments after the third are
/// dropped. There is no escaping, so a `,` inside the default or the usage
/// ends that segment early.
///
/// ```rust
/// use flagger::parse_metadata;
///
/// let meta = parse_metadata(Some("port,8080,listen port"), "Port");
/// assert_eq!(meta.name, "port");
/// assert_eq!(meta.default_literal, "8080");
/// assert_eq!(meta.usage, "listen port");
///
/// let bare = parse_metadata(None, "Port");
/// assert_eq!(bare.name, "Port");
/// assert!(bare.default_literal.is_empty());
/// ```
#[must_use]
pub fn parse_metadata(raw: Option<&str>, field_name: &str) -> FlagMetadata {
    let mut segments = raw.unwrap_or_default().split(SEPARATOR).take(3);
    let name = segments
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(field_name);
    let default_literal = segments.next().unwrap_or_default();
    let usage = segments.next().unwrap_or_default();
    FlagMetadata {
        name: name.to_owned(),
        default_literal: default_literal.to_owned(),
        usage: usage.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for annotation parsing.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::absent(None, "Field", "", "")]
    #[case::empty(Some(""), "Field", "", "")]
    #[case::name_only(Some("bool"), "bool", "", "")]
    #[case::name_default(Some("int,7"), "int", "7", "")]
    #[case::all(Some("b,true,desc"), "b", "true", "desc")]
    #[case::empty_default(Some("s,,desc"), "s", "", "desc")]
    #[case::empty_name(Some(",5,usage"), "Field", "5", "usage")]
    #[case::trailing_separator(Some("name,"), "name", "", "")]
    #[case::excess(Some("n,1,usage,extra,more"), "n", "1", "usage")]
    fn splits_segments_positionally(
        #[case] raw: Option<&str>,
        #[case] name: &str,
        #[case] default_literal: &str,
        #[case] usage: &str,
    ) {
        assert_eq!(
            parse_metadata(raw, "Field"),
            FlagMetadata {
                name: name.to_owned(),
                default_literal: default_literal.to_owned(),
                usage: usage.to_owned(),
            }
        );
    }

    #[rstest]
    fn separator_in_usage_truncates() {
        let meta = parse_metadata(Some("mode,fast,fast, or slow"), "Mode");
        assert_eq!(meta.usage, "fast");
    }

    #[rstest]
    #[case("-", true)]
    #[case("--", false)]
    #[case("-,1", false)]
    #[case("", false)]
    fn recognises_only_the_bare_sentinel(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(is_ignored(raw), expected);
    }
}
