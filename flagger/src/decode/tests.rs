//! Unit tests for the default-value decoders.

use std::time::Duration;

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;

use super::*;

#[rstest]
fn empty_literal_yields_zero_value_for_every_kind() -> Result<()> {
    ensure!(!decode_default::<bool>("")?, "bool zero");
    ensure!(decode_default::<i32>("")? == 0, "int zero");
    ensure!(decode_default::<i64>("")? == 0, "int64 zero");
    ensure!(decode_default::<usize>("")? == 0, "uint zero");
    ensure!(decode_default::<u64>("")? == 0, "uint64 zero");
    ensure!(decode_default::<f64>("")?.to_bits() == 0.0_f64.to_bits(), "float zero");
    ensure!(decode_default::<Duration>("")? == Duration::ZERO, "duration zero");
    ensure!(decode_default::<String>("")?.is_empty(), "string zero");
    Ok(())
}

#[rstest]
#[case("1", true)]
#[case("t", true)]
#[case("T", true)]
#[case("TRUE", true)]
#[case("true", true)]
#[case("True", true)]
#[case("0", false)]
#[case("f", false)]
#[case("F", false)]
#[case("FALSE", false)]
#[case("false", false)]
#[case("False", false)]
fn accepts_boolean_spellings(#[case] literal: &str, #[case] expected: bool) -> Result<()> {
    let value = decode_default::<bool>(literal)?;
    ensure!(value == expected, "{literal} decoded as {value}");
    Ok(())
}

#[rstest]
#[case("tru")]
#[case("yes")]
#[case("tRUE")]
#[case(" true")]
fn rejects_other_boolean_spellings(#[case] literal: &str) {
    assert_eq!(
        decode_default::<bool>(literal),
        Err(DecodeError::Bool {
            literal: literal.to_owned()
        })
    );
}

#[rstest]
fn decodes_signed_integers() -> Result<()> {
    ensure!(decode_default::<i32>("-42")? == -42, "negative int");
    ensure!(decode_default::<i32>("+7")? == 7, "explicit plus");
    ensure!(
        decode_default::<i64>("-101010")? == -101_010,
        "negative int64"
    );
    ensure!(
        decode_default::<i64>("9223372036854775807")? == i64::MAX,
        "int64 max"
    );
    Ok(())
}

#[rstest]
#[case::suffix("-42i")]
#[case::float("1.5")]
#[case::overflow("2147483648")]
#[case::blank(" ")]
fn rejects_malformed_narrow_integers(#[case] literal: &str) {
    assert!(matches!(
        decode_default::<i32>(literal),
        Err(DecodeError::Int(_))
    ));
}

#[rstest]
fn narrow_and_wide_integers_differ_in_range() -> Result<()> {
    ensure!(
        decode_default::<i32>("2147483648").is_err(),
        "i32 should overflow"
    );
    ensure!(
        decode_default::<i64>("2147483648")? == 2_147_483_648,
        "i64 should hold the value"
    );
    Ok(())
}

#[rstest]
fn decodes_unsigned_integers() -> Result<()> {
    ensure!(decode_default::<usize>("42")? == 42, "uint");
    ensure!(
        decode_default::<u64>("18446744073709551615")? == u64::MAX,
        "uint64 max"
    );
    ensure!(decode_default::<u64>("-1").is_err(), "negative uint64");
    ensure!(decode_default::<usize>("-1").is_err(), "negative uint");
    Ok(())
}

#[rstest]
#[case("1.2", 1.2)]
#[case("-3", -3.0)]
#[case("1e3", 1000.0)]
#[case("2.5E-1", 0.25)]
#[case("Infinity", f64::INFINITY)]
#[case("-inf", f64::NEG_INFINITY)]
fn decodes_floats(#[case] literal: &str, #[case] expected: f64) -> Result<()> {
    let value = decode_default::<f64>(literal)?;
    ensure!(
        value.to_bits() == expected.to_bits(),
        "{literal} decoded as {value}"
    );
    Ok(())
}

#[rstest]
fn decodes_nan() -> Result<()> {
    ensure!(decode_default::<f64>("NaN")?.is_nan(), "NaN");
    Ok(())
}

#[rstest]
#[case("1.2.3")]
#[case("0x1p-2")]
#[case("1_000.5")]
fn rejects_malformed_floats(#[case] literal: &str) {
    assert!(matches!(
        decode_default::<f64>(literal),
        Err(DecodeError::Float(_))
    ));
}

#[rstest]
fn text_passes_through_unchanged() -> Result<()> {
    ensure!(
        decode_default::<String>(" spaced  out ")? == " spaced  out ",
        "text should be verbatim"
    );
    Ok(())
}

#[rstest]
#[case("42s", Duration::from_secs(42))]
#[case("0", Duration::ZERO)]
#[case("-0", Duration::ZERO)]
#[case("+5m", Duration::from_secs(300))]
#[case("1h30m", Duration::from_secs(5_400))]
#[case("1.5h", Duration::from_secs(5_400))]
#[case(".5s", Duration::from_millis(500))]
#[case("300ms", Duration::from_millis(300))]
#[case("2us", Duration::from_micros(2))]
#[case("2\u{b5}s", Duration::from_micros(2))]
#[case("2\u{3bc}s", Duration::from_micros(2))]
#[case("15ns", Duration::from_nanos(15))]
#[case("1m0.25s", Duration::from_millis(60_250))]
fn parses_duration_literals(#[case] literal: &str, #[case] expected: Duration) -> Result<()> {
    let value = parse_duration(literal)?;
    ensure!(value == expected, "{literal} parsed as {value:?}");
    Ok(())
}

#[rstest]
fn duration_errors_name_the_problem() -> Result<()> {
    let missing = parse_duration("42").err().ok_or_else(|| anyhow!("42 parsed"))?;
    ensure!(
        matches!(missing, DurationError::MissingUnit { .. }),
        "unexpected error {missing:?}"
    );

    let unknown = parse_duration("3days")
        .err()
        .ok_or_else(|| anyhow!("3days parsed"))?;
    ensure!(
        matches!(&unknown, DurationError::UnknownUnit { unit, .. } if unit == "days"),
        "unexpected error {unknown:?}"
    );

    let negative = parse_duration("-1s")
        .err()
        .ok_or_else(|| anyhow!("-1s parsed"))?;
    ensure!(
        matches!(negative, DurationError::Negative { .. }),
        "unexpected error {negative:?}"
    );

    for literal in ["", "-", "s", ".s", "1s.", "abc"] {
        let err = parse_duration(literal)
            .err()
            .ok_or_else(|| anyhow!("{literal:?} parsed"))?;
        ensure!(
            matches!(
                err,
                DurationError::Invalid { .. } | DurationError::MissingUnit { .. }
            ),
            "{literal:?} gave {err:?}"
        );
    }
    Ok(())
}

#[rstest]
fn duration_overflow_is_reported() {
    assert!(matches!(
        parse_duration("99999999999999999999h"),
        Err(DurationError::Overflow { .. })
    ));
}

#[rstest]
#[case(Duration::ZERO, "0s")]
#[case(Duration::from_nanos(250), "250ns")]
#[case(Duration::from_nanos(1_500), "1.5\u{b5}s")]
#[case(Duration::from_micros(1_500), "1.5ms")]
#[case(Duration::from_secs(42), "42s")]
#[case(Duration::from_millis(1_500), "1.5s")]
#[case(Duration::from_secs(90), "1m30s")]
#[case(Duration::from_secs(3_600), "1h0m0s")]
#[case(Duration::from_secs(5_401), "1h30m1s")]
fn formats_durations(#[case] value: Duration, #[case] expected: &str) {
    assert_eq!(format_duration(value), expected);
}

#[rstest]
fn duration_decode_errors_surface_through_decode_default() {
    assert!(matches!(
        decode_default::<Duration>("soon"),
        Err(DecodeError::Duration(DurationError::Invalid { .. }))
    ));
}

#[rstest]
fn formats_primitives_as_recorded_defaults() {
    assert_eq!(true.format(), "true");
    assert_eq!((-7_i32).format(), "-7");
    assert_eq!(0.0_f64.format(), "0");
    assert_eq!(1.2_f64.format(), "1.2");
    assert_eq!(Duration::from_secs(42).format(), "42s");
    assert_eq!(String::from("x").format(), "x");
}
