//! # CCSDS numeric formatting
//!
//! ODM numeric values carry at most [`MAX_DIGITS`] significant digits and switch to
//! scientific notation outside a fixed exponent window. Inside a data block every
//! number is written so that its **decimal point falls in the same column**, whatever
//! its magnitude or sign.
//!
//! ## How alignment works
//!
//! [`format_number`] never returns a bare number: it returns the number preceded by
//! enough spaces that the decimal point sits at a fixed offset from the start of the
//! string. A column of such strings is therefore already aligned. The decimal-aligned
//! renderer then:
//!
//! 1. strips the trailing zeros of fixed-point values with [`strip_trailing_zeros`],
//! 2. removes the indentation common to the whole column with [`dedent`].
//!
//! ```text
//!                 6655.9942                  fixed, exponent 3
//!                   -0.5                     fixed, exponent -1, negative
//!                    1.500000000000000e-10   scientific, exponent -10
//! ```
//!
//! ## Thresholds
//!
//! * `exponent > MAX_DIGITS - 2` or `exponent < -4` → scientific, `e±NN`.
//! * Otherwise fixed-point: `MAX_DIGITS - 1 - exponent` fractional digits for
//!   `exponent > 0`, `MAX_DIGITS - 2` for `exponent ≤ 0`.
use crate::constants::{
    FIXED_FIELD_WIDTH, FIXED_MAX_EXPONENT, FIXED_MIN_EXPONENT, MAX_DIGITS, SCIENTIFIC_PADDING,
    SCIENTIFIC_PRECISION,
};

/// Decompose `num` as `mantissa × 10^exponent` with `1 ≤ |mantissa| < 10`.
///
/// Zero has no logarithm; it follows the convention `0 = 0 × 10^0`.
///
/// Return
/// ----------
/// * `(mantissa, exponent)`
pub fn mant_exp(num: f64) -> (f64, i32) {
    if num == 0.0 {
        return (0.0, 0);
    }
    let exponent = num.abs().log10().floor();
    let mantissa = num / 10f64.powf(exponent);
    (mantissa, exponent as i32)
}

/// `'-'` for negative values (including `-0.0`), a space otherwise.
fn sign_column(num: f64) -> char {
    if num.is_sign_negative() {
        '-'
    } else {
        ' '
    }
}

/// Scientific notation with a reserved sign column and a signed, at least
/// two-digit exponent: `" 1.500000000000000e-10"`.
fn scientific(num: f64) -> String {
    let raw = format!("{:.*e}", SCIENTIFIC_PRECISION, num.abs());
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let exp_sign = if exponent < 0 { '-' } else { '+' };
    format!(
        "{}{}e{}{:02}",
        sign_column(num),
        mantissa,
        exp_sign,
        exponent.abs()
    )
}

/// Fixed point with a reserved sign column, right-aligned in `width` characters.
fn fixed(num: f64, precision: usize, width: usize) -> String {
    let body = format!("{}{:.*}", sign_column(num), precision, num.abs());
    format!("{body:>width$}")
}

/// Format a number for ODM output.
///
/// The result is padded on the left so that any value passed in has its decimal
/// point in the same character position; see the module documentation for the
/// thresholds.
///
/// Arguments
/// -----------------
/// * `number`: the value to format.
///
/// Return
/// ----------
/// * The padded representation. Trailing zeros are kept; see
///   [`strip_trailing_zeros`].
pub fn format_number(number: f64) -> String {
    let (_, exponent) = mant_exp(number);

    if !(FIXED_MIN_EXPONENT..=FIXED_MAX_EXPONENT).contains(&exponent) {
        return format!("{}{}", " ".repeat(SCIENTIFIC_PADDING), scientific(number));
    }

    if exponent > 0 {
        let precision = (MAX_DIGITS - 1 - exponent) as usize;
        let padded = fixed(number, precision, FIXED_FIELD_WIDTH);
        // a wider integer part eats into the padding instead of growing the field
        let consumed = (exponent - 1) as usize;
        padded[consumed..].to_string()
    } else {
        fixed(number, (MAX_DIGITS - 2) as usize, FIXED_FIELD_WIDTH)
    }
}

/// Remove the trailing zeros of a fixed-point value, keeping at least one digit
/// after the decimal point. Scientific values are returned unchanged.
///
/// ```text
/// 1.500000              -> 1.5
/// 1.000000              -> 1.0
/// 2.500000000000000e-10 -> 2.500000000000000e-10
/// ```
pub fn strip_trailing_zeros(formatted: &str) -> String {
    if formatted.contains('e') {
        return formatted.to_string();
    }
    let Some(point) = formatted.find('.') else {
        return formatted.to_string();
    };

    let trimmed = formatted.trim_end_matches('0');
    let keep = trimmed.len().max(point + 2).min(formatted.len());
    formatted[..keep].to_string()
}

/// Remove the leading spaces shared by every line of a column.
///
/// Lines made only of spaces do not take part in the computation of the common
/// indentation and come out empty.
pub fn dedent<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let common = lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start_matches(' ').len())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|l| {
            let l = l.as_ref();
            if l.trim().is_empty() {
                String::new()
            } else {
                l[common..].to_string()
            }
        })
        .collect()
}

/// Format, strip and dedent a column of numbers; the output has one entry per
/// input value, in order, with all decimal points aligned.
pub fn align_decimal_column(numbers: &[f64]) -> Vec<String> {
    let stripped: Vec<String> = numbers
        .iter()
        .map(|&x| strip_trailing_zeros(&format_number(x)))
        .collect();
    dedent(&stripped)
}
