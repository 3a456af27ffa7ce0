use crate::keyword::container::KeywordContainer;
use crate::keyword::validators::validate_number;
use crate::keyword::Keyword;

/// Spacecraft parameters block.
///
/// Every keyword is optional. The block is required as soon as maneuver
/// parameters are present in the data section.
#[derive(Debug, Clone)]
pub struct SpacecraftParameters {
    name: Option<String>,
    keywords: KeywordContainer,
}

impl Default for SpacecraftParameters {
    fn default() -> Self {
        SpacecraftParameters {
            name: None,
            keywords: KeywordContainer::new(vec![
                Keyword::comment(),
                Keyword::data("MASS", "kg").optional(),
                Keyword::data("SOLAR_RAD_AREA", "m**2").optional(),
                Keyword::new("SOLAR_RAD_COEFF")
                    .optional()
                    .with_validator(validate_number),
                Keyword::data("DRAG_AREA", "m**2").optional(),
                Keyword::new("DRAG_COEFF")
                    .optional()
                    .with_validator(validate_number),
            ]),
        }
    }
}

impl SpacecraftParameters {
    /// Arguments
    /// -----------------
    /// * `mass`: spacecraft mass in kg.
    /// * `solar_rad_area`: solar radiation pressure area in m².
    /// * `solar_rad_coeff`: solar radiation pressure coefficient.
    /// * `drag_area`: drag area in m².
    /// * `drag_coeff`: drag coefficient.
    pub fn new(
        mass: impl Into<Option<f64>>,
        solar_rad_area: impl Into<Option<f64>>,
        solar_rad_coeff: impl Into<Option<f64>>,
        drag_area: impl Into<Option<f64>>,
        drag_coeff: impl Into<Option<f64>>,
    ) -> Self {
        let mut sp = SpacecraftParameters::default();
        sp.set_mass(mass);
        sp.set_solar_rad_area(solar_rad_area);
        sp.set_solar_rad_coeff(solar_rad_coeff);
        sp.set_drag_area(drag_area);
        sp.set_drag_coeff(drag_coeff);
        sp
    }

    block_common!();

    number_keywords! {
        mass, set_mass => "MASS";
        solar_rad_area, set_solar_rad_area => "SOLAR_RAD_AREA";
        solar_rad_coeff, set_solar_rad_coeff => "SOLAR_RAD_COEFF";
        drag_area, set_drag_area => "DRAG_AREA";
        drag_coeff, set_drag_coeff => "DRAG_COEFF";
    }
}
