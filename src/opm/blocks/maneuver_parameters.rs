use hifitime::Epoch;
use nalgebra::Vector3;

use crate::keyword::container::KeywordContainer;
use crate::keyword::validators::{validate_date_value, validate_ref_frame};
use crate::keyword::{date_formatter, Keyword, Value};
use crate::ref_system::RefFrame;

const MAN_EPOCH_IGNITION: &str = "MAN_EPOCH_IGNITION";
const MAN_REF_FRAME: &str = "MAN_REF_FRAME";

/// One impulsive or finite maneuver.
///
/// The data section may carry any number of these; their presence requires a
/// spacecraft parameters block, since `MAN_DELTA_MASS` only makes sense
/// against a known mass.
#[derive(Debug, Clone)]
pub struct ManeuverParameters {
    name: Option<String>,
    keywords: KeywordContainer,
}

impl Default for ManeuverParameters {
    fn default() -> Self {
        ManeuverParameters {
            name: None,
            keywords: KeywordContainer::new(vec![
                Keyword::comment(),
                Keyword::new(MAN_EPOCH_IGNITION)
                    .with_formatter(date_formatter)
                    .with_validator(validate_date_value),
                Keyword::data("MAN_DURATION", "s"),
                Keyword::data("MAN_DELTA_MASS", "kg"),
                Keyword::new(MAN_REF_FRAME).with_validator(validate_ref_frame),
                Keyword::data("MAN_DV_1", "km/s"),
                Keyword::data("MAN_DV_2", "km/s"),
                Keyword::data("MAN_DV_3", "km/s"),
            ]),
        }
    }
}

impl ManeuverParameters {
    /// Arguments
    /// -----------------
    /// * `epoch_ignition`: start of the maneuver.
    /// * `duration`: in seconds, `0` for an impulsive maneuver.
    /// * `delta_mass`: mass change in kg (negative for a burn).
    /// * `ref_frame`: frame of the delta-v components.
    /// * `dv`: delta-v components in km/s.
    pub fn new(
        epoch_ignition: Epoch,
        duration: f64,
        delta_mass: f64,
        ref_frame: RefFrame,
        dv: &Vector3<f64>,
    ) -> Self {
        let mut man = ManeuverParameters::default();
        man.set_man_epoch_ignition(epoch_ignition);
        man.set_man_duration(duration);
        man.set_man_delta_mass(delta_mass);
        man.set_man_ref_frame(ref_frame);
        man.set_man_dv(dv);
        man
    }

    block_common!();

    number_keywords! {
        man_duration, set_man_duration => "MAN_DURATION";
        man_delta_mass, set_man_delta_mass => "MAN_DELTA_MASS";
        man_dv_1, set_man_dv_1 => "MAN_DV_1";
        man_dv_2, set_man_dv_2 => "MAN_DV_2";
        man_dv_3, set_man_dv_3 => "MAN_DV_3";
    }

    pub fn man_epoch_ignition(&self) -> Option<Epoch> {
        self.keywords
            .get(MAN_EPOCH_IGNITION)
            .and_then(Value::as_date)
    }

    pub fn set_man_epoch_ignition(&mut self, epoch: impl Into<Option<Epoch>>) {
        self.keywords
            .set(MAN_EPOCH_IGNITION, epoch.into().map(Value::Date));
    }

    pub fn man_ref_frame(&self) -> Option<RefFrame> {
        self.keywords.get(MAN_REF_FRAME).and_then(Value::as_ref_frame)
    }

    pub fn set_man_ref_frame(&mut self, frame: impl Into<Option<RefFrame>>) {
        self.keywords
            .set(MAN_REF_FRAME, frame.into().map(Value::RefFrame));
    }

    /// Delta-v vector, when all three components are set.
    pub fn man_dv(&self) -> Option<Vector3<f64>> {
        Some(Vector3::new(
            self.man_dv_1()?,
            self.man_dv_2()?,
            self.man_dv_3()?,
        ))
    }

    pub fn set_man_dv(&mut self, dv: &Vector3<f64>) {
        self.set_man_dv_1(dv.x);
        self.set_man_dv_2(dv.y);
        self.set_man_dv_3(dv.z);
    }
}

#[cfg(test)]
mod maneuver_parameters_test {
    use super::*;
    use crate::keyword::ordinal_date_formatter;
    use crate::odm_errors::OdmError;

    fn burn() -> ManeuverParameters {
        ManeuverParameters::new(
            Epoch::from_gregorian_utc_hms(2011, 2, 24, 9, 0, 0),
            132.6,
            -18.418,
            RefFrame::Rtn,
            &Vector3::new(-0.02325, 0.01683, -0.00893),
        )
    }

    #[test]
    fn test_output() {
        let lines = burn().keywords().output_align_decimal().unwrap();
        assert_eq!(
            lines,
            vec![
                "MAN_EPOCH_IGNITION = 2011-02-24T09:00:00",
                "MAN_DURATION       = 132.6",
                "MAN_DELTA_MASS     = -18.418",
                "MAN_REF_FRAME      = RTN",
                "MAN_DV_1           =  -0.02325",
                "MAN_DV_2           =   0.01683",
                "MAN_DV_3           =  -0.00893",
            ]
        );
    }

    #[test]
    fn test_ordinal_ignition_epoch() {
        let mut man = burn();
        if let Some(k) = man.keywords_mut().keyword_mut(MAN_EPOCH_IGNITION) {
            k.set_formatter(Some(ordinal_date_formatter));
        }
        let lines = man.keywords().output_align_decimal().unwrap();
        assert_eq!(lines[0], "MAN_EPOCH_IGNITION = 2011-055T09:00:00");
    }

    #[test]
    fn test_missing_ref_frame() {
        let mut man = burn();
        man.set_man_ref_frame(None);
        assert_eq!(man.man_dv().map(|dv| dv.y), Some(0.01683));
        assert_eq!(
            man.keywords().validate(),
            Err(OdmError::MissingKeyword("MAN_REF_FRAME".to_string()))
        );
    }
}
