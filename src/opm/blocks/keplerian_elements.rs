use crate::keyword::container::KeywordContainer;
use crate::keyword::validators::validate_number;
use crate::keyword::Keyword;
use crate::odm_errors::OdmError;

const TRUE_ANOMALY: &str = "TRUE_ANOMALY";
const MEAN_ANOMALY: &str = "MEAN_ANOMALY";

/// Osculating Keplerian elements block.
///
/// Exactly one of `TRUE_ANOMALY` and `MEAN_ANOMALY` describes the position on
/// the orbit: the two are mutually exclusive and setting one while the other
/// holds a value fails with [`OdmError::DuplicateKeyword`]. A complete block
/// carries one of them, see [`KeplerianElements::validate`].
#[derive(Debug, Clone)]
pub struct KeplerianElements {
    name: Option<String>,
    keywords: KeywordContainer,
}

impl Default for KeplerianElements {
    fn default() -> Self {
        KeplerianElements {
            name: None,
            keywords: KeywordContainer::new(vec![
                Keyword::comment(),
                Keyword::data("SEMI_MAJOR_AXIS", "km"),
                Keyword::new("ECCENTRICITY").with_validator(validate_number),
                Keyword::data("INCLINATION", "deg"),
                Keyword::data("RA_OF_ASC_NODE", "deg"),
                Keyword::data("ARG_OF_PERICENTER", "deg"),
                Keyword::data(TRUE_ANOMALY, "deg").optional(),
                Keyword::data(MEAN_ANOMALY, "deg").optional(),
                Keyword::data("GM", "km**3/s**2"),
            ]),
        }
    }
}

impl KeplerianElements {
    /// Keplerian elements without anomaly.
    ///
    /// Arguments
    /// -----------------
    /// * `semi_major_axis`: in km.
    /// * `eccentricity`: unitless.
    /// * `inclination`, `ra_of_asc_node`, `arg_of_pericenter`: in degrees.
    /// * `gm`: gravitational parameter of the central body in km³/s².
    ///
    /// See also
    /// ------------
    /// * [`KeplerianElements::with_anomalies`] – add the true or mean anomaly.
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        ra_of_asc_node: f64,
        arg_of_pericenter: f64,
        gm: f64,
    ) -> Self {
        let mut kep = KeplerianElements::default();
        kep.set_semi_major_axis(semi_major_axis);
        kep.set_eccentricity(eccentricity);
        kep.set_inclination(inclination);
        kep.set_ra_of_asc_node(ra_of_asc_node);
        kep.set_arg_of_pericenter(arg_of_pericenter);
        kep.set_gm(gm);
        kep
    }

    /// Set the anomalies at construction time.
    ///
    /// Return
    /// ----------
    /// * [`OdmError::DuplicateKeyword`] when both anomalies are given.
    pub fn with_anomalies(
        mut self,
        true_anomaly: Option<f64>,
        mean_anomaly: Option<f64>,
    ) -> Result<Self, OdmError> {
        if true_anomaly.is_some() && mean_anomaly.is_some() {
            return Err(OdmError::DuplicateKeyword(format!(
                "{TRUE_ANOMALY} and {MEAN_ANOMALY} are mutually exclusive"
            )));
        }
        self.set_true_anomaly(true_anomaly)?;
        self.set_mean_anomaly(mean_anomaly)?;
        Ok(self)
    }

    block_common!();

    number_keywords! {
        semi_major_axis, set_semi_major_axis => "SEMI_MAJOR_AXIS";
        eccentricity, set_eccentricity => "ECCENTRICITY";
        inclination, set_inclination => "INCLINATION";
        ra_of_asc_node, set_ra_of_asc_node => "RA_OF_ASC_NODE";
        arg_of_pericenter, set_arg_of_pericenter => "ARG_OF_PERICENTER";
        gm, set_gm => "GM";
    }

    pub fn true_anomaly(&self) -> Option<f64> {
        self.keywords.number(TRUE_ANOMALY)
    }

    pub fn mean_anomaly(&self) -> Option<f64> {
        self.keywords.number(MEAN_ANOMALY)
    }

    /// Set or clear the true anomaly (deg). Fails if the mean anomaly is set.
    pub fn set_true_anomaly(&mut self, value: impl Into<Option<f64>>) -> Result<(), OdmError> {
        self.set_exclusive(TRUE_ANOMALY, MEAN_ANOMALY, value.into())
    }

    /// Set or clear the mean anomaly (deg). Fails if the true anomaly is set.
    pub fn set_mean_anomaly(&mut self, value: impl Into<Option<f64>>) -> Result<(), OdmError> {
        self.set_exclusive(MEAN_ANOMALY, TRUE_ANOMALY, value.into())
    }

    /// Keyword validation plus the presence of one anomaly.
    ///
    /// Return
    /// ----------
    /// * [`OdmError::MissingKeyword`] naming both anomalies when neither is set,
    ///   otherwise the result of [`KeywordContainer::validate`].
    pub fn validate(&self) -> Result<(), OdmError> {
        self.keywords.validate()?;
        if self.true_anomaly().is_none() && self.mean_anomaly().is_none() {
            return Err(OdmError::MissingKeyword(format!(
                "{TRUE_ANOMALY} or {MEAN_ANOMALY}"
            )));
        }
        Ok(())
    }

    fn set_exclusive(
        &mut self,
        name: &str,
        other: &str,
        value: Option<f64>,
    ) -> Result<(), OdmError> {
        if value.is_some() && self.keywords.number(other).is_some() {
            return Err(OdmError::DuplicateKeyword(format!(
                "cannot set {name} while {other} is set"
            )));
        }
        self.keywords.set(name, value.map(Into::into));
        Ok(())
    }
}
