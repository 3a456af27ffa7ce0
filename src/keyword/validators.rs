//! Validators attached to keywords.
//!
//! The `validate_*` functions on `&str` / [`Epoch`](hifitime::Epoch) are the raw checks; the
//! functions taking a [`Value`] are the ones stored in a
//! [`Keyword`](crate::keyword::Keyword) and also check the kind of value.
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::OBJECT_ID_PATTERN;
use crate::keyword::Value;

pub use crate::time::validate_date;

static OBJECT_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(OBJECT_ID_PATTERN).expect("object id pattern is a valid regex")
});

/// Check a string is non-empty.
pub fn validate_string(s: &str) -> bool {
    !s.is_empty()
}

/// Check an international designator such as `2010-026A`.
pub fn validate_object_id(object_id: &str) -> bool {
    OBJECT_ID_REGEX.is_match(object_id)
}

pub fn accept_any(_: &Value) -> bool {
    true
}

pub fn validate_text(value: &Value) -> bool {
    matches!(value, Value::Text(_))
}

pub fn validate_non_empty_text(value: &Value) -> bool {
    value.as_text().is_some_and(validate_string)
}

pub fn validate_object_id_value(value: &Value) -> bool {
    value.as_text().is_some_and(validate_object_id)
}

/// Finite numbers only: NaN and infinities have no ODM representation.
pub fn validate_number(value: &Value) -> bool {
    value.as_number().is_some_and(f64::is_finite)
}

pub fn validate_date_value(value: &Value) -> bool {
    value.as_date().is_some_and(|e| validate_date(&e))
}

pub fn validate_ref_frame(value: &Value) -> bool {
    value.as_ref_frame().is_some()
}

pub fn validate_time_system(value: &Value) -> bool {
    value.as_time_system().is_some()
}
