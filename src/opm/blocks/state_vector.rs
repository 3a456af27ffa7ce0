use hifitime::Epoch;
use nalgebra::Vector3;

use crate::keyword::container::KeywordContainer;
use crate::keyword::validators::validate_date_value;
use crate::keyword::{date_formatter, Keyword, Value};

const EPOCH: &str = "EPOCH";

/// State vector block (mandatory in every OPM).
///
/// Position in km, velocity in km/s, expressed in the metadata `REF_FRAME` at
/// `EPOCH`.
#[derive(Debug, Clone)]
pub struct StateVector {
    name: Option<String>,
    keywords: KeywordContainer,
}

impl Default for StateVector {
    fn default() -> Self {
        StateVector {
            name: None,
            keywords: KeywordContainer::new(vec![
                Keyword::comment(),
                Keyword::new(EPOCH)
                    .with_formatter(date_formatter)
                    .with_validator(validate_date_value),
                Keyword::data("X", "km"),
                Keyword::data("Y", "km"),
                Keyword::data("Z", "km"),
                Keyword::data("X_DOT", "km/s"),
                Keyword::data("Y_DOT", "km/s"),
                Keyword::data("Z_DOT", "km/s"),
            ]),
        }
    }
}

impl StateVector {
    /// Complete state vector from a Cartesian position and velocity.
    ///
    /// Arguments
    /// -----------------
    /// * `epoch`: epoch of the state.
    /// * `position`: `[x, y, z]` in km.
    /// * `velocity`: `[x_dot, y_dot, z_dot]` in km/s.
    pub fn new(epoch: Epoch, position: &Vector3<f64>, velocity: &Vector3<f64>) -> Self {
        let mut sv = StateVector::default();
        sv.set_epoch(epoch);
        sv.set_position(position);
        sv.set_velocity(velocity);
        sv
    }

    block_common!();

    number_keywords! {
        x, set_x => "X";
        y, set_y => "Y";
        z, set_z => "Z";
        x_dot, set_x_dot => "X_DOT";
        y_dot, set_y_dot => "Y_DOT";
        z_dot, set_z_dot => "Z_DOT";
    }

    pub fn epoch(&self) -> Option<Epoch> {
        self.keywords.get(EPOCH).and_then(Value::as_date)
    }

    pub fn set_epoch(&mut self, epoch: impl Into<Option<Epoch>>) {
        self.keywords.set(EPOCH, epoch.into().map(Value::Date));
    }

    pub fn set_position(&mut self, position: &Vector3<f64>) {
        self.set_x(position.x);
        self.set_y(position.y);
        self.set_z(position.z);
    }

    pub fn set_velocity(&mut self, velocity: &Vector3<f64>) {
        self.set_x_dot(velocity.x);
        self.set_y_dot(velocity.y);
        self.set_z_dot(velocity.z);
    }

    /// Position vector, when all three components are set.
    pub fn position(&self) -> Option<Vector3<f64>> {
        Some(Vector3::new(self.x()?, self.y()?, self.z()?))
    }

    /// Velocity vector, when all three components are set.
    pub fn velocity(&self) -> Option<Vector3<f64>> {
        Some(Vector3::new(self.x_dot()?, self.y_dot()?, self.z_dot()?))
    }
}
