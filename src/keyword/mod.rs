//! # Keywords
//!
//! A [`Keyword`] is one `NAME = value` slot of an ODM section. It carries:
//!
//! - an optional [`Value`] (number, text, date, reference frame or time system),
//! - whether the keyword is **mandatory**,
//! - an optional **formatter** turning the value into text (identity when absent),
//! - a **validator** the value must satisfy before anything is written,
//! - optional **units**, for documentation only; units are never written out.
//!
//! Keywords with units are the *data keywords* of the data blocks; header and
//! metadata keywords have none.
//!
//! Keywords are grouped, in output order, by a
//! [`KeywordContainer`](crate::keyword::container::KeywordContainer).
use std::fmt;

use hifitime::Epoch;

use crate::constants::COMMENT;
use crate::ref_system::{RefFrame, TimeSystem};
use crate::time::{format_date, format_date_yyyyddd};

pub mod container;
pub mod validators;

/// Value held by a keyword.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Date(Epoch),
    RefFrame(RefFrame),
    TimeSystem(TimeSystem),
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<Epoch> {
        match self {
            Value::Date(e) => Some(*e),
            _ => None,
        }
    }

    pub fn as_ref_frame(&self) -> Option<RefFrame> {
        match self {
            Value::RefFrame(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_time_system(&self) -> Option<TimeSystem> {
        match self {
            Value::TimeSystem(ts) => Some(*ts),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }
}

/// Plain rendering: numbers with the shortest round-trip representation (always
/// with a fractional part or an exponent, e.g. `1.0`, `1e-20`), dates in calendar
/// form, enumerations with their CCSDS spelling.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(x) => write!(f, "{x:?}"),
            Value::Text(s) => f.write_str(s),
            Value::Date(e) => f.write_str(&format_date(e)),
            Value::RefFrame(frame) => f.write_str(frame.as_str()),
            Value::TimeSystem(ts) => f.write_str(ts.as_str()),
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Number(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Epoch> for Value {
    fn from(e: Epoch) -> Self {
        Value::Date(e)
    }
}

impl From<RefFrame> for Value {
    fn from(frame: RefFrame) -> Self {
        Value::RefFrame(frame)
    }
}

impl From<TimeSystem> for Value {
    fn from(ts: TimeSystem) -> Self {
        Value::TimeSystem(ts)
    }
}

/// Turns a value into the text written after `NAME = `.
pub type Formatter = fn(&Value) -> String;

/// Decides whether a value may be written.
pub type Validator = fn(&Value) -> bool;

/// Dates as `YYYY-MM-DDThh:mm:ss[.ffffff]`.
pub fn date_formatter(value: &Value) -> String {
    match value {
        Value::Date(e) => format_date(e),
        other => other.to_string(),
    }
}

/// Dates as `YYYY-DDDThh:mm:ss[.ffffff]`.
pub fn ordinal_date_formatter(value: &Value) -> String {
    match value {
        Value::Date(e) => format_date_yyyyddd(e),
        other => other.to_string(),
    }
}

/// One ODM keyword: name, optional value, and the rules to check and print it.
#[derive(Debug, Clone)]
pub struct Keyword {
    name: &'static str,
    value: Option<Value>,
    mandatory: bool,
    units: Option<&'static str>,
    formatter: Option<Formatter>,
    validator: Validator,
}

impl Keyword {
    /// Mandatory keyword, no formatter, accepting any value.
    ///
    /// Keywords are mandatory by default: optional keywords opt out with
    /// [`Keyword::optional`].
    pub fn new(name: &'static str) -> Self {
        Keyword {
            name,
            value: None,
            mandatory: true,
            units: None,
            formatter: None,
            validator: validators::accept_any,
        }
    }

    /// Numeric data keyword expressed in `units`.
    pub fn data(name: &'static str, units: &'static str) -> Self {
        Keyword::new(name)
            .with_units(units)
            .with_validator(validators::validate_number)
    }

    /// Optional `COMMENT` keyword holding free text.
    pub fn comment() -> Self {
        Keyword::new(COMMENT)
            .optional()
            .with_validator(validators::validate_text)
    }

    pub fn optional(mut self) -> Self {
        self.mandatory = false;
        self
    }

    pub fn with_units(mut self, units: &'static str) -> Self {
        self.units = Some(units);
        self
    }

    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_value(mut self, value: Option<Value>) -> Self {
        self.value = value;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    pub fn units(&self) -> Option<&'static str> {
        self.units
    }

    pub fn is_comment(&self) -> bool {
        self.name == COMMENT
    }

    /// `true` when a formatter other than the identity is attached.
    ///
    /// Numeric keywords with a custom formatter are printed through it and do not
    /// take part in decimal alignment.
    pub fn has_custom_formatter(&self) -> bool {
        self.formatter.is_some()
    }

    pub fn set_value(&mut self, value: Option<Value>) {
        self.value = value;
    }

    pub fn set_formatter(&mut self, formatter: Option<Formatter>) {
        self.formatter = formatter;
    }

    pub fn set_validator(&mut self, validator: Validator) {
        self.validator = validator;
    }

    /// Text written for the current value, `None` when unset.
    pub fn formatted_value(&self) -> Option<String> {
        self.value.as_ref().map(|v| match self.formatter {
            Some(format) => format(v),
            None => v.to_string(),
        })
    }

    /// Whether the current value passes the validator. Unset keywords are valid
    /// here; mandatory ones are caught by the container.
    pub fn is_valid(&self) -> bool {
        self.value.as_ref().map_or(true, |v| (self.validator)(v))
    }
}

#[cfg(test)]
mod keyword_test {
    use super::*;

    #[test]
    fn test_defaults() {
        let k = Keyword::new("ORIGINATOR");
        assert!(k.is_mandatory());
        assert!(!k.is_set());
        assert!(k.is_valid());
        assert_eq!(k.formatted_value(), None);
        assert_eq!(k.units(), None);
    }

    #[test]
    fn test_data_keyword() {
        let mut k = Keyword::data("X", "km");
        assert_eq!(k.units(), Some("km"));
        k.set_value(Some(Value::Number(1.5)));
        assert!(k.is_valid());
        assert_eq!(k.formatted_value().as_deref(), Some("1.5"));

        k.set_value(Some(Value::Text("one".into())));
        assert!(!k.is_valid());

        k.set_value(Some(Value::Number(f64::NAN)));
        assert!(!k.is_valid());
    }

    #[test]
    fn test_formatter_override() {
        let e = Epoch::from_gregorian_utc_hms(2014, 11, 12, 13, 14, 15);
        let mut k = Keyword::new("EPOCH")
            .with_formatter(date_formatter)
            .with_value(Some(e.into()));
        assert!(k.has_custom_formatter());
        assert_eq!(k.formatted_value().as_deref(), Some("2014-11-12T13:14:15"));

        k.set_formatter(Some(ordinal_date_formatter));
        assert_eq!(k.formatted_value().as_deref(), Some("2014-316T13:14:15"));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::from(RefFrame::Gcrf).to_string(), "GCRF");
        assert_eq!(Value::from(TimeSystem::Utc).to_string(), "UTC");
        assert_eq!(Value::from("Dragon").to_string(), "Dragon");
        assert_eq!(Value::from(0.25).to_string(), "0.25");
        assert_eq!(Value::from(1.0).to_string(), "1.0");
        assert_eq!(Value::from(1.0e-20).to_string(), "1e-20");
        assert_eq!(Value::from(-2.5e300).to_string(), "-2.5e300");
    }
}
