//! # Keyword containers
//!
//! An ODM file is split into sections (header, metadata, data blocks), each an
//! ordered list of keywords. [`KeywordContainer`] holds that list and knows how to
//! validate it and print it in one of two layouts:
//!
//! * **equals-aligned** ([`KeywordContainer::output_align_equals`]), used by the
//!   header and metadata: names are padded so every `=` lines up.
//! * **decimal-aligned** ([`KeywordContainer::output_align_decimal`]), used by the
//!   data blocks: in addition, every plain numeric value has its decimal point in
//!   the same column.
//!
//! ```text
//! EPOCH   = 2011-02-24T01:02:03
//! X       = 6655.9942
//! Y       =   -0.5
//! Z       =    1.500000000000000e-10
//! ```
//!
//! Unset keywords are skipped; `COMMENT` keywords become one `COMMENT <text>` line
//! per line of text. Units are never printed.
use log::trace;

use crate::keyword::{Keyword, Value};
use crate::number_format::align_decimal_column;
use crate::odm_errors::OdmError;
use crate::opm::prefix;

#[derive(Debug, Clone, Default)]
pub struct KeywordContainer {
    keywords: Vec<Keyword>,
}

impl KeywordContainer {
    pub fn new(keywords: Vec<Keyword>) -> Self {
        KeywordContainer { keywords }
    }

    /// Keywords in output order.
    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    pub fn keyword(&self, name: &str) -> Option<&Keyword> {
        self.keywords.iter().find(|k| k.name() == name)
    }

    /// Mutable access to a keyword, e.g. to swap its formatter or validator.
    pub fn keyword_mut(&mut self, name: &str) -> Option<&mut Keyword> {
        self.keywords.iter_mut().find(|k| k.name() == name)
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Value> {
        self.keyword(name).and_then(Keyword::value)
    }

    pub(crate) fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_number)
    }

    pub(crate) fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_text)
    }

    pub(crate) fn set(&mut self, name: &str, value: Option<Value>) {
        if let Some(k) = self.keyword_mut(name) {
            k.set_value(value);
        }
    }

    /// Ensure every mandatory keyword is set and every set value is valid.
    ///
    /// Keywords are checked in declaration order and the first violation is
    /// returned.
    ///
    /// Errors
    /// ------
    /// * [`OdmError::MissingKeyword`] – a mandatory keyword has no value.
    /// * [`OdmError::InvalidValue`] – a value fails its validator.
    pub fn validate(&self) -> Result<(), OdmError> {
        for keyword in &self.keywords {
            if keyword.is_mandatory() && !keyword.is_set() {
                trace!("missing mandatory keyword {}", keyword.name());
                return Err(OdmError::MissingKeyword(keyword.name().to_string()));
            }
            if !keyword.is_valid() {
                trace!("keyword {} failed validation", keyword.name());
                return Err(OdmError::InvalidValue(keyword.name().to_string()));
            }
        }
        Ok(())
    }

    /// Validate, then print with every `=` aligned.
    pub fn output_align_equals(&self) -> Result<Vec<String>, OdmError> {
        self.validate()?;
        Ok(self.render_align_equals())
    }

    /// Validate, then print with `=` and decimal points aligned.
    pub fn output_align_decimal(&self) -> Result<Vec<String>, OdmError> {
        self.validate()?;
        Ok(self.render_align_decimal())
    }

    /// Width of the longest declared keyword name, set or not.
    fn name_width(&self) -> usize {
        self.keywords
            .iter()
            .map(|k| k.name().len())
            .max()
            .unwrap_or(0)
    }

    fn comment_lines(keyword: &Keyword, out: &mut Vec<String>) {
        if let Some(text) = keyword.formatted_value() {
            out.extend(prefix("COMMENT ", text.lines()));
        }
    }

    /// Equals-aligned lines of an already validated container.
    pub(crate) fn render_align_equals(&self) -> Vec<String> {
        let width = self.name_width();
        let mut out = Vec::with_capacity(self.keywords.len());

        for keyword in self.keywords.iter().filter(|k| k.is_set()) {
            if keyword.is_comment() {
                Self::comment_lines(keyword, &mut out);
            } else if let Some(value) = keyword.formatted_value() {
                out.push(format!("{:<width$} = {}", keyword.name(), value));
            }
        }
        out
    }

    /// Decimal-aligned lines of an already validated container.
    ///
    /// Every numeric value goes into the aligned column, in declaration order, so
    /// the column keeps one entry per number. A numeric keyword with a custom
    /// formatter still consumes its entry but prints its own formatting.
    pub(crate) fn render_align_decimal(&self) -> Vec<String> {
        let numbers: Vec<f64> = self
            .keywords
            .iter()
            .filter_map(|k| k.value().and_then(Value::as_number))
            .collect();
        let mut aligned = align_decimal_column(&numbers).into_iter();

        let width = self.name_width();
        let mut out = Vec::with_capacity(self.keywords.len());

        for keyword in self.keywords.iter().filter(|k| k.is_set()) {
            if keyword.is_comment() {
                Self::comment_lines(keyword, &mut out);
                continue;
            }

            let is_number = keyword.value().is_some_and(Value::is_number);
            let value = if is_number {
                let column_entry = aligned.next();
                if keyword.has_custom_formatter() {
                    keyword.formatted_value()
                } else {
                    column_entry
                }
            } else {
                keyword.formatted_value()
            };

            if let Some(value) = value {
                out.push(format!("{:<width$} = {}", keyword.name(), value));
            }
        }
        out
    }
}
