//! Duration literals such as `42s`, `1h30m` or `1.5ms`.
//!
//! A literal is an optional sign followed by one or more `number unit`
//! pairs. Numbers may carry a fraction; units are `ns`, `us` (or `µs`/`μs`),
//! `ms`, `s`, `m` and `h`. A bare `0` needs no unit. Negative spans cannot be
//! represented by [`Duration`] and are rejected.

use std::time::Duration;

use thiserror::Error;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Fraction digits beyond this scale are below nanosecond precision for
/// every unit and are dropped.
const MAX_FRACTION_SCALE: u128 = 1_000_000_000_000_000_000;

/// Failure to parse a duration literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DurationError {
    /// The literal does not follow the `number unit` grammar.
    #[error("invalid duration {literal:?}")]
    Invalid {
        /// The rejected literal.
        literal: String,
    },
    /// A number is not followed by a unit.
    #[error("missing unit in duration {literal:?}")]
    MissingUnit {
        /// The rejected literal.
        literal: String,
    },
    /// A unit is not one of `ns us µs μs ms s m h`.
    #[error("unknown unit {unit:?} in duration {literal:?}")]
    UnknownUnit {
        /// The unrecognised unit.
        unit: String,
        /// The rejected literal.
        literal: String,
    },
    /// The literal is negative.
    #[error("negative duration {literal:?} is not supported")]
    Negative {
        /// The rejected literal.
        literal: String,
    },
    /// The literal exceeds the representable range.
    #[error("duration {literal:?} is out of range")]
    Overflow {
        /// The rejected literal.
        literal: String,
    },
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(60 * NANOS_PER_SECOND),
        "h" => Some(3_600 * NANOS_PER_SECOND),
        _ => None,
    }
}

/// Splits the leading ASCII digits off `input`.
fn split_digits(input: &str) -> (&str, &str) {
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    input.split_at(end)
}

/// Parses a duration literal.
///
/// ```rust
/// use std::time::Duration;
/// use flagger::decode::parse_duration;
///
/// assert_eq!(parse_duration("42s").unwrap(), Duration::from_secs(42));
/// assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(5_400));
/// assert_eq!(parse_duration("1.5ms").unwrap(), Duration::from_micros(1_500));
/// ```
///
/// # Errors
///
/// Returns a [`DurationError`] describing the first problem found.
#[expect(
    clippy::integer_division,
    reason = "fractions are scaled in integral nanoseconds"
)]
pub fn parse_duration(literal: &str) -> Result<Duration, DurationError> {
    let invalid = || DurationError::Invalid {
        literal: literal.to_owned(),
    };
    let overflow = || DurationError::Overflow {
        literal: literal.to_owned(),
    };

    let (negative, mut rest) = match literal.strip_prefix('-') {
        Some(tail) => (true, tail),
        None => (false, literal.strip_prefix('+').unwrap_or(literal)),
    };
    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, after_whole) = split_digits(rest);
        let (fraction, after_number) = match after_whole.strip_prefix('.') {
            Some(tail) => split_digits(tail),
            None => ("", after_whole),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let unit_end = after_number
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_number.len());
        if unit_end == 0 {
            return Err(DurationError::MissingUnit {
                literal: literal.to_owned(),
            });
        }
        let (unit, tail) = after_number.split_at(unit_end);
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_owned(),
            literal: literal.to_owned(),
        })?;

        let whole_value = if whole.is_empty() {
            0
        } else {
            whole.parse::<u128>().map_err(|_| overflow())?
        };
        let mut fraction_value: u128 = 0;
        let mut fraction_scale: u128 = 1;
        for digit in fraction.bytes() {
            if fraction_scale >= MAX_FRACTION_SCALE {
                break;
            }
            fraction_value = fraction_value * 10 + u128::from(digit - b'0');
            fraction_scale *= 10;
        }

        let span = whole_value
            .checked_mul(scale)
            .and_then(|nanos| nanos.checked_add(fraction_value * scale / fraction_scale))
            .ok_or_else(overflow)?;
        total = total.checked_add(span).ok_or_else(overflow)?;
        rest = tail;
    }

    if negative && total > 0 {
        return Err(DurationError::Negative {
            literal: literal.to_owned(),
        });
    }
    let nanos = u64::try_from(total).map_err(|_| overflow())?;
    Ok(Duration::from_nanos(nanos))
}

/// Renders `value / unit` with a trimmed decimal fraction and `suffix`.
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "splitting whole and fractional parts of an integral count"
)]
fn with_fraction(value: u128, unit: u128, suffix: &str) -> String {
    let whole = value / unit;
    let fraction = value % unit;
    if fraction == 0 {
        return format!("{whole}{suffix}");
    }
    let width = unit.ilog10() as usize;
    let digits = format!("{fraction:0width$}");
    format!("{whole}.{}{suffix}", digits.trim_end_matches('0'))
}

/// Formats a duration the way [`parse_duration`] reads it back.
///
/// Spans under a second use the largest sub-second unit that keeps a whole
/// part (`1.5ms`, `250ns`); longer spans use `h`, `m` and `s` components
/// (`1h0m0s`, `1m30s`). Zero is `0s`.
///
/// ```rust
/// use std::time::Duration;
/// use flagger::decode::format_duration;
///
/// assert_eq!(format_duration(Duration::ZERO), "0s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m30s");
/// assert_eq!(format_duration(Duration::from_micros(1_500)), "1.5ms");
/// ```
#[must_use]
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "splitting seconds into clock components"
)]
pub fn format_duration(value: Duration) -> String {
    let nanos = value.as_nanos();
    if nanos == 0 {
        return String::from("0s");
    }
    if nanos < NANOS_PER_MICRO {
        return format!("{nanos}ns");
    }
    if nanos < NANOS_PER_MILLI {
        return with_fraction(nanos, NANOS_PER_MICRO, "\u{b5}s");
    }
    if nanos < NANOS_PER_SECOND {
        return with_fraction(nanos, NANOS_PER_MILLI, "ms");
    }

    let secs = value.as_secs();
    let hours = secs / 3_600;
    let minutes = secs % 3_600 / 60;
    let seconds = u128::from(secs % 60) * NANOS_PER_SECOND + u128::from(value.subsec_nanos());

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&hours.to_string());
        out.push('h');
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&minutes.to_string());
        out.push('m');
    }
    out.push_str(&with_fraction(seconds, NANOS_PER_SECOND, "s"));
    out
}
