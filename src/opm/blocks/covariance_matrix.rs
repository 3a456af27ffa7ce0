use nalgebra::Matrix6;

use crate::keyword::container::KeywordContainer;
use crate::keyword::validators::validate_ref_frame;
use crate::keyword::{Keyword, Value};
use crate::ref_system::RefFrame;

const COV_REF_FRAME: &str = "COV_REF_FRAME";

/// Lower-triangle element names in row-major order, with their units.
///
/// Row `i` holds the covariances of state component `i` with components
/// `0..=i`, state order being `X, Y, Z, X_DOT, Y_DOT, Z_DOT`.
const LOWER_TRIANGLE: [(&str, &str); 21] = [
    ("CX_X", "km**2"),
    ("CY_X", "km**2"),
    ("CY_Y", "km**2"),
    ("CZ_X", "km**2"),
    ("CZ_Y", "km**2"),
    ("CZ_Z", "km**2"),
    ("CX_DOT_X", "km**2/s"),
    ("CX_DOT_Y", "km**2/s"),
    ("CX_DOT_Z", "km**2/s"),
    ("CX_DOT_X_DOT", "km**2/s**2"),
    ("CY_DOT_X", "km**2/s"),
    ("CY_DOT_Y", "km**2/s"),
    ("CY_DOT_Z", "km**2/s"),
    ("CY_DOT_X_DOT", "km**2/s**2"),
    ("CY_DOT_Y_DOT", "km**2/s**2"),
    ("CZ_DOT_X", "km**2/s"),
    ("CZ_DOT_Y", "km**2/s"),
    ("CZ_DOT_Z", "km**2/s"),
    ("CZ_DOT_X_DOT", "km**2/s**2"),
    ("CZ_DOT_Y_DOT", "km**2/s**2"),
    ("CZ_DOT_Z_DOT", "km**2/s**2"),
];

/// Position/velocity covariance matrix block.
///
/// The 21 elements of the lower triangle of the 6×6 symmetric covariance are
/// all mandatory. `COV_REF_FRAME` is optional; when absent the covariance is
/// expressed in the metadata `REF_FRAME`.
#[derive(Debug, Clone)]
pub struct CovarianceMatrix {
    name: Option<String>,
    keywords: KeywordContainer,
}

impl Default for CovarianceMatrix {
    fn default() -> Self {
        let mut keywords = vec![
            Keyword::comment(),
            Keyword::new(COV_REF_FRAME)
                .optional()
                .with_validator(validate_ref_frame),
        ];
        keywords.extend(
            LOWER_TRIANGLE
                .iter()
                .map(|&(name, units)| Keyword::data(name, units)),
        );

        CovarianceMatrix {
            name: None,
            keywords: KeywordContainer::new(keywords),
        }
    }
}

impl CovarianceMatrix {
    /// Covariance block from a full 6×6 matrix.
    ///
    /// Only the lower triangle (diagonal included) is read; the matrix is
    /// assumed symmetric.
    ///
    /// Arguments
    /// -----------------
    /// * `cov`: covariance of `[x, y, z, x_dot, y_dot, z_dot]`, in km and km/s.
    pub fn from_matrix(cov: &Matrix6<f64>) -> Self {
        let mut block = CovarianceMatrix::default();
        let mut names = LOWER_TRIANGLE.iter();
        for row in 0..6 {
            for col in 0..=row {
                if let Some((name, _)) = names.next() {
                    block.keywords.set(name, Some(Value::Number(cov[(row, col)])));
                }
            }
        }
        block
    }

    /// The covariance as a symmetric 6×6 matrix, when every element is set.
    pub fn to_matrix(&self) -> Option<Matrix6<f64>> {
        let mut cov = Matrix6::zeros();
        let mut names = LOWER_TRIANGLE.iter();
        for row in 0..6 {
            for col in 0..=row {
                let (name, _) = names.next()?;
                let value = self.keywords.number(name)?;
                cov[(row, col)] = value;
                cov[(col, row)] = value;
            }
        }
        Some(cov)
    }

    block_common!();

    pub fn cov_ref_frame(&self) -> Option<RefFrame> {
        self.keywords
            .get(COV_REF_FRAME)
            .and_then(Value::as_ref_frame)
    }

    pub fn set_cov_ref_frame(&mut self, frame: impl Into<Option<RefFrame>>) {
        self.keywords
            .set(COV_REF_FRAME, frame.into().map(Value::RefFrame));
    }

    number_keywords! {
        cx_x, set_cx_x => "CX_X";
        cy_x, set_cy_x => "CY_X";
        cy_y, set_cy_y => "CY_Y";
        cz_x, set_cz_x => "CZ_X";
        cz_y, set_cz_y => "CZ_Y";
        cz_z, set_cz_z => "CZ_Z";
        cx_dot_x, set_cx_dot_x => "CX_DOT_X";
        cx_dot_y, set_cx_dot_y => "CX_DOT_Y";
        cx_dot_z, set_cx_dot_z => "CX_DOT_Z";
        cx_dot_x_dot, set_cx_dot_x_dot => "CX_DOT_X_DOT";
        cy_dot_x, set_cy_dot_x => "CY_DOT_X";
        cy_dot_y, set_cy_dot_y => "CY_DOT_Y";
        cy_dot_z, set_cy_dot_z => "CY_DOT_Z";
        cy_dot_x_dot, set_cy_dot_x_dot => "CY_DOT_X_DOT";
        cy_dot_y_dot, set_cy_dot_y_dot => "CY_DOT_Y_DOT";
        cz_dot_x, set_cz_dot_x => "CZ_DOT_X";
        cz_dot_y, set_cz_dot_y => "CZ_DOT_Y";
        cz_dot_z, set_cz_dot_z => "CZ_DOT_Z";
        cz_dot_x_dot, set_cz_dot_x_dot => "CZ_DOT_X_DOT";
        cz_dot_y_dot, set_cz_dot_y_dot => "CZ_DOT_Y_DOT";
        cz_dot_z_dot, set_cz_dot_z_dot => "CZ_DOT_Z_DOT";
    }
}

#[cfg(test)]
mod covariance_matrix_test {
    use super::*;
    use crate::odm_errors::OdmError;
    use approx::assert_relative_eq;

    fn sample_matrix() -> Matrix6<f64> {
        let mut m = Matrix6::zeros();
        for row in 0..6 {
            for col in 0..=row {
                let v = (row * 10 + col) as f64 * 1.0e-3 + 1.0e-3;
                m[(row, col)] = v;
                m[(col, row)] = v;
            }
        }
        m
    }

    #[test]
    fn test_from_matrix_lower_triangle_order() {
        let cov = CovarianceMatrix::from_matrix(&sample_matrix());
        assert_relative_eq!(cov.cx_x().unwrap(), 1.0e-3);
        assert_relative_eq!(cov.cy_x().unwrap(), 11.0e-3);
        assert_relative_eq!(cov.cx_dot_z().unwrap(), 33.0e-3);
        assert_relative_eq!(cov.cz_dot_y_dot().unwrap(), 55.0e-3);
        assert_relative_eq!(cov.cz_dot_z_dot().unwrap(), 56.0e-3);
        assert!(cov.keywords().validate().is_ok());
    }

    #[test]
    fn test_matrix_round_trip() {
        let m = sample_matrix();
        let back = CovarianceMatrix::from_matrix(&m).to_matrix().unwrap();
        assert_relative_eq!(back, m);
    }

    #[test]
    fn test_incomplete_matrix() {
        let mut cov = CovarianceMatrix::from_matrix(&sample_matrix());
        cov.set_cy_dot_z(None);
        assert!(cov.to_matrix().is_none());
        assert_eq!(
            cov.keywords().validate(),
            Err(OdmError::MissingKeyword("CY_DOT_Z".to_string()))
        );
    }

    #[test]
    fn test_cov_ref_frame_is_optional() {
        let mut cov = CovarianceMatrix::from_matrix(&Matrix6::identity());
        assert!(cov.keywords().validate().is_ok());

        cov.set_cov_ref_frame(RefFrame::Rtn);
        let lines = cov.keywords().output_align_decimal().unwrap();
        assert_eq!(lines[0], "COV_REF_FRAME = RTN");
        assert_eq!(lines[1], "CX_X          = 1.0");
        assert_eq!(lines[2], "CY_X          = 0.0");
        assert_eq!(lines.len(), 22);
    }
}
