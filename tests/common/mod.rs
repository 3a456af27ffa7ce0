#![allow(dead_code)]

use approx::assert_relative_eq;
use hifitime::Epoch;
use nalgebra::{Matrix6, Vector3};

use odmkit::opm::{
    CovarianceMatrix, Data, Header, KeplerianElements, ManeuverParameters, Metadata,
    SpacecraftParameters, StateVector,
};
use odmkit::ref_system::{RefFrame, TimeSystem};

pub fn fixture(name: &str) -> String {
    let path = format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {path}: {e}"))
}

pub fn creation_date() -> Epoch {
    Epoch::from_gregorian_utc_hms(2011, 3, 1, 1, 2, 3)
}

pub fn epoch() -> Epoch {
    Epoch::from_gregorian_utc_hms(2011, 2, 24, 1, 2, 3)
}

pub fn esa_header() -> Header {
    Header::new("ESA").with_creation_date(creation_date())
}

pub fn dragon_metadata() -> Metadata {
    Metadata::new("Dragon", "2010-026A", "EARTH", RefFrame::Gcrf, TimeSystem::Utc)
}

pub fn zero_state_vector() -> StateVector {
    StateVector::new(epoch(), &Vector3::zeros(), &Vector3::zeros())
}

pub fn state_vector() -> StateVector {
    let mut sv = StateVector::new(
        epoch(),
        &Vector3::new(6655.9942, -40218.5751, -82.9375),
        &Vector3::new(3.11548208, 0.47042605, -0.00101495),
    );
    sv.set_comment(Some("GEOCENTRIC, CARTESIAN, EARTH FIXED"));
    sv
}

pub fn spacecraft_parameters() -> SpacecraftParameters {
    SpacecraftParameters::new(3000.0, 18.77, 1.0, 18.77, 2.5)
}

pub fn keplerian_elements() -> KeplerianElements {
    KeplerianElements::new(
        41399.5123,
        0.020842611,
        0.117746,
        17.604721,
        218.242943,
        398600.4415,
    )
    .with_anomalies(None, Some(247.476772))
    .expect("a single anomaly is always accepted")
}

pub const COVARIANCE_LOWER: [f64; 21] = [
    3.331349e-04,
    4.618927e-04,
    6.782421e-04,
    -3.070007e-04,
    -4.221234e-04,
    3.231931e-04,
    -3.349365e-07,
    -4.686084e-07,
    2.484949e-07,
    4.296022e-10,
    -2.211832e-07,
    -2.864186e-07,
    1.798098e-07,
    2.608899e-10,
    1.767514e-10,
    -3.041346e-07,
    -4.989496e-07,
    3.540310e-07,
    1.869263e-10,
    1.008862e-10,
    6.224444e-10,
];

pub fn covariance_matrix() -> CovarianceMatrix {
    let mut m = Matrix6::zeros();
    let mut values = COVARIANCE_LOWER.iter();
    for row in 0..6 {
        for col in 0..=row {
            let v = *values.next().expect("21 lower triangle values");
            m[(row, col)] = v;
            m[(col, row)] = v;
        }
    }
    let mut cov = CovarianceMatrix::from_matrix(&m);
    cov.set_cov_ref_frame(RefFrame::Rtn);
    cov
}

pub fn first_burn() -> ManeuverParameters {
    ManeuverParameters::new(
        Epoch::from_gregorian_utc_hms(2011, 2, 24, 9, 0, 0),
        132.6,
        -18.418,
        RefFrame::Rtn,
        &Vector3::new(-0.02325, 0.01683, -0.00893),
    )
}

pub fn second_burn() -> ManeuverParameters {
    let mut man = ManeuverParameters::new(
        Epoch::from_gregorian_utc(2011, 2, 25, 10, 30, 0, 250_000_000),
        0.0,
        -1.5,
        RefFrame::Tnw,
        &Vector3::new(0.0012, 0.0, -2.5e-5),
    )
    .with_name("Second burn");
    man.set_comment(Some("Station keeping"));
    man
}

/// Data section with every kind of block and two maneuvers.
pub fn full_data() -> Data {
    let mut data = Data::new(state_vector());
    data.set_spacecraft_parameters(Some(spacecraft_parameters()))
        .expect("setting spacecraft parameters never fails");
    data.set_keplerian_elements(Some(keplerian_elements()));
    data.set_covariance_matrix(Some(covariance_matrix()));
    data.set_maneuver_parameters(vec![first_burn(), second_burn()]);
    data
}

pub fn assert_state_close(actual: &StateVector, expected: &StateVector, epsilon: f64) {
    let (p1, p2) = (actual.position().unwrap(), expected.position().unwrap());
    let (v1, v2) = (actual.velocity().unwrap(), expected.velocity().unwrap());
    assert_relative_eq!(p1, p2, epsilon = epsilon);
    assert_relative_eq!(v1, v2, epsilon = epsilon);
}
