use approx::assert_relative_eq;

use odmkit::number_format::{align_decimal_column, format_number, mant_exp};

/// Deterministic spread of magnitudes in `[1, 1e12)`, both signs.
fn samples() -> Vec<f64> {
    (0..12)
        .flat_map(|exp| {
            [1.0, 1.234_567_890_123, 3.5, 7.777_777, 9.999_999_999]
                .into_iter()
                .map(move |m| m * 10f64.powi(exp))
        })
        .flat_map(|x| [x, -x])
        .collect()
}

fn significant_digits(formatted: &str) -> usize {
    let digits: String = formatted
        .trim()
        .trim_start_matches('-')
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    digits.trim_start_matches('0').len()
}

#[test]
fn test_at_most_sixteen_significant_digits() {
    for x in samples() {
        let formatted = format_number(x);
        assert!(
            significant_digits(&formatted) <= 16,
            "{x} formatted as {formatted:?}"
        );
    }
}

#[test]
fn test_formatted_value_parses_back() {
    for x in samples() {
        let parsed: f64 = format_number(x).trim().parse().unwrap();
        assert_relative_eq!(parsed, x, max_relative = 1e-15);
    }
}

#[test]
fn test_decimal_point_column_is_fixed() {
    let columns: Vec<usize> = [0.0, 1.0, -42.5, 123456789.25, 1.5e-3, -1.5e-7, 2.0e20]
        .into_iter()
        .map(|x| {
            let s = format_number(x);
            s.find('.').unwrap()
        })
        .collect();
    assert!(columns.windows(2).all(|w| w[0] == w[1]), "{columns:?}");
}

#[test]
fn test_zero_convention() {
    assert_eq!(mant_exp(0.0), (0.0, 0));
    assert_eq!(format_number(0.0).trim(), "0.00000000000000");
}

#[test]
fn test_column_alignment() {
    let column = align_decimal_column(&[1.0e-7, 12.5, -3.0]);
    assert_eq!(column, vec![" 1.000000000000000e-07", "12.5", "-3.0"]);
}
