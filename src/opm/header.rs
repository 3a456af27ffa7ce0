use hifitime::Epoch;

use crate::constants::{COMMENT, DEFAULT_OPM_VERSION};
use crate::keyword::container::KeywordContainer;
use crate::keyword::validators::{validate_date_value, validate_non_empty_text};
use crate::keyword::{date_formatter, Keyword, Value};
use crate::odm_errors::OdmError;

const CCSDS_OPM_VERS: &str = "CCSDS_OPM_VERS";
const CREATION_DATE: &str = "CREATION_DATE";
const ORIGINATOR: &str = "ORIGINATOR";

/// OPM header: format version, creation date and originator.
#[derive(Debug, Clone)]
pub struct Header {
    keywords: KeywordContainer,
}

impl Default for Header {
    /// Empty header: every keyword must still be set before writing.
    fn default() -> Self {
        Header {
            keywords: KeywordContainer::new(vec![
                Keyword::new(CCSDS_OPM_VERS).with_validator(validate_non_empty_text),
                Keyword::comment(),
                Keyword::new(CREATION_DATE)
                    .with_formatter(date_formatter)
                    .with_validator(validate_date_value),
                Keyword::new(ORIGINATOR).with_validator(validate_non_empty_text),
            ]),
        }
    }
}

impl Header {
    /// Header for the current OPM version, created now.
    ///
    /// The creation date is taken from the system clock; if the clock cannot be
    /// read it stays unset and must be provided with
    /// [`Header::set_creation_date`].
    ///
    /// Arguments
    /// -----------------
    /// * `originator`: agency or operator creating the message.
    pub fn new(originator: &str) -> Self {
        let mut header = Header::default();
        header.set_opm_version(Some(DEFAULT_OPM_VERSION));
        header.set_creation_date(Epoch::now().ok());
        header.set_originator(Some(originator));
        header
    }

    pub fn with_creation_date(mut self, creation_date: Epoch) -> Self {
        self.set_creation_date(creation_date);
        self
    }

    pub fn opm_version(&self) -> Option<&str> {
        self.keywords.text(CCSDS_OPM_VERS)
    }

    pub fn set_opm_version(&mut self, version: Option<&str>) {
        self.keywords.set(CCSDS_OPM_VERS, version.map(Into::into));
    }

    pub fn creation_date(&self) -> Option<Epoch> {
        self.keywords.get(CREATION_DATE).and_then(Value::as_date)
    }

    pub fn set_creation_date(&mut self, creation_date: impl Into<Option<Epoch>>) {
        self.keywords
            .set(CREATION_DATE, creation_date.into().map(Value::Date));
    }

    pub fn originator(&self) -> Option<&str> {
        self.keywords.text(ORIGINATOR)
    }

    pub fn set_originator(&mut self, originator: Option<&str>) {
        self.keywords.set(ORIGINATOR, originator.map(Into::into));
    }

    pub fn comment(&self) -> Option<&str> {
        self.keywords.text(COMMENT)
    }

    pub fn set_comment(&mut self, comment: Option<&str>) {
        self.keywords.set(COMMENT, comment.map(Into::into));
    }

    pub fn validate(&self) -> Result<(), OdmError> {
        self.keywords.validate()
    }

    pub fn keywords(&self) -> &KeywordContainer {
        &self.keywords
    }

    pub fn keywords_mut(&mut self) -> &mut KeywordContainer {
        &mut self.keywords
    }
}

#[cfg(test)]
mod header_test {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let header = Header::new("ESA");
        assert_eq!(header.opm_version(), Some("2.0"));
        assert_eq!(header.originator(), Some("ESA"));
        assert!(header.creation_date().is_some());
        assert!(header.validate().is_ok());
    }

    #[test]
    fn test_output() {
        let mut header = Header::new("ESA")
            .with_creation_date(Epoch::from_gregorian_utc_hms(2011, 3, 1, 1, 2, 3));
        header.set_comment(Some("generated for testing"));

        assert_eq!(
            header.keywords().output_align_equals().unwrap(),
            vec![
                "CCSDS_OPM_VERS = 2.0",
                "COMMENT generated for testing",
                "CREATION_DATE  = 2011-03-01T01:02:03",
                "ORIGINATOR     = ESA",
            ]
        );
    }

    #[test]
    fn test_empty_originator() {
        let mut header = Header::new("ESA");
        header.set_originator(Some(""));
        assert_eq!(
            header.validate(),
            Err(OdmError::InvalidValue("ORIGINATOR".to_string()))
        );

        header.set_originator(None);
        assert_eq!(
            header.validate(),
            Err(OdmError::MissingKeyword("ORIGINATOR".to_string()))
        );
    }
}
