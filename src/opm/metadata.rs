use hifitime::Epoch;

use crate::constants::COMMENT;
use crate::keyword::container::KeywordContainer;
use crate::keyword::validators::{
    validate_date_value, validate_non_empty_text, validate_object_id_value, validate_ref_frame,
    validate_time_system,
};
use crate::keyword::{date_formatter, Keyword, Value};
use crate::odm_errors::OdmError;
use crate::ref_system::{RefFrame, TimeSystem};

const OBJECT_NAME: &str = "OBJECT_NAME";
const OBJECT_ID: &str = "OBJECT_ID";
const CENTER_NAME: &str = "CENTER_NAME";
const REF_FRAME: &str = "REF_FRAME";
const REF_FRAME_EPOCH: &str = "REF_FRAME_EPOCH";
const TIME_SYSTEM: &str = "TIME_SYSTEM";

/// OPM metadata: which object, around which body, in which frame and time
/// system.
#[derive(Debug, Clone)]
pub struct Metadata {
    keywords: KeywordContainer,
}

impl Default for Metadata {
    fn default() -> Self {
        Metadata {
            keywords: KeywordContainer::new(vec![
                Keyword::comment(),
                Keyword::new(OBJECT_NAME).with_validator(validate_non_empty_text),
                Keyword::new(OBJECT_ID).with_validator(validate_object_id_value),
                Keyword::new(CENTER_NAME).with_validator(validate_non_empty_text),
                Keyword::new(REF_FRAME).with_validator(validate_ref_frame),
                Keyword::new(REF_FRAME_EPOCH)
                    .optional()
                    .with_formatter(date_formatter)
                    .with_validator(validate_date_value),
                Keyword::new(TIME_SYSTEM).with_validator(validate_time_system),
            ]),
        }
    }
}

impl Metadata {
    /// Arguments
    /// -----------------
    /// * `object_name`: spacecraft name, e.g. `Dragon`.
    /// * `object_id`: international designator, e.g. `2010-026A`.
    /// * `center_name`: origin of the reference frame, e.g. `EARTH`.
    /// * `ref_frame`: frame of the state vector.
    /// * `time_system`: time system of every epoch in the data section.
    pub fn new(
        object_name: &str,
        object_id: &str,
        center_name: &str,
        ref_frame: RefFrame,
        time_system: TimeSystem,
    ) -> Self {
        let mut metadata = Metadata::default();
        metadata.set_object_name(Some(object_name));
        metadata.set_object_id(Some(object_id));
        metadata.set_center_name(Some(center_name));
        metadata.set_ref_frame(ref_frame);
        metadata.set_time_system(time_system);
        metadata
    }

    pub fn object_name(&self) -> Option<&str> {
        self.keywords.text(OBJECT_NAME)
    }

    pub fn set_object_name(&mut self, object_name: Option<&str>) {
        self.keywords.set(OBJECT_NAME, object_name.map(Into::into));
    }

    pub fn object_id(&self) -> Option<&str> {
        self.keywords.text(OBJECT_ID)
    }

    pub fn set_object_id(&mut self, object_id: Option<&str>) {
        self.keywords.set(OBJECT_ID, object_id.map(Into::into));
    }

    pub fn center_name(&self) -> Option<&str> {
        self.keywords.text(CENTER_NAME)
    }

    pub fn set_center_name(&mut self, center_name: Option<&str>) {
        self.keywords.set(CENTER_NAME, center_name.map(Into::into));
    }

    pub fn ref_frame(&self) -> Option<RefFrame> {
        self.keywords.get(REF_FRAME).and_then(Value::as_ref_frame)
    }

    pub fn set_ref_frame(&mut self, ref_frame: impl Into<Option<RefFrame>>) {
        self.keywords
            .set(REF_FRAME, ref_frame.into().map(Value::RefFrame));
    }

    /// Epoch of the reference frame, for frames that are not implied by their
    /// name.
    pub fn ref_frame_epoch(&self) -> Option<Epoch> {
        self.keywords.get(REF_FRAME_EPOCH).and_then(Value::as_date)
    }

    pub fn set_ref_frame_epoch(&mut self, epoch: impl Into<Option<Epoch>>) {
        self.keywords
            .set(REF_FRAME_EPOCH, epoch.into().map(Value::Date));
    }

    pub fn time_system(&self) -> Option<TimeSystem> {
        self.keywords
            .get(TIME_SYSTEM)
            .and_then(Value::as_time_system)
    }

    pub fn set_time_system(&mut self, time_system: impl Into<Option<TimeSystem>>) {
        self.keywords
            .set(TIME_SYSTEM, time_system.into().map(Value::TimeSystem));
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
