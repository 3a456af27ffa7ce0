//! # Constants for OPM generation
//!
//! Keyword names, block titles and the numeric limits of the CCSDS 502.0-B-2
//! keyword/value notation. Everything that shapes the bytes of a generated
//! file and is not a per-keyword setting lives here.

// -------------------------------------------------------------------------------------------------
// Numeric formatting
// -------------------------------------------------------------------------------------------------

/// Maximum number of significant digits allowed in an ODM numeric value.
pub const MAX_DIGITS: i32 = 16;

/// Largest base-10 exponent still written in fixed-point notation.
pub const FIXED_MAX_EXPONENT: i32 = MAX_DIGITS - 2;

/// Smallest base-10 exponent still written in fixed-point notation.
pub const FIXED_MIN_EXPONENT: i32 = -4;

/// Width of the padded field used for fixed-point values.
pub const FIXED_FIELD_WIDTH: usize = (MAX_DIGITS * 2) as usize;

/// Leading spaces placed in front of a scientific-notation value.
pub const SCIENTIFIC_PADDING: usize = (MAX_DIGITS - 1) as usize;

/// Fractional digits of a scientific-notation mantissa.
pub const SCIENTIFIC_PRECISION: usize = 15;

// -------------------------------------------------------------------------------------------------
// Keywords
// -------------------------------------------------------------------------------------------------

/// Pseudo-keyword used for free text lines.
pub const COMMENT: &str = "COMMENT";

/// Prefix of every user-defined keyword.
pub const USER_DEFINED_PREFIX: &str = "USER_DEFINED_";

/// Comment line opening the metadata section.
pub const METADATA_TITLE: &str = "Metadata";

/// OPM version written when the caller does not pick one.
pub const DEFAULT_OPM_VERSION: &str = "2.0";

/// International designator pattern, e.g. `2010-026A`.
pub const OBJECT_ID_PATTERN: &str = r"^[0-9]{4}-[0-9]{3}[A-Z]{1,3}$";

// -------------------------------------------------------------------------------------------------
// Data block titles
// -------------------------------------------------------------------------------------------------

pub const STATE_VECTOR_TITLE: &str = "State Vector Components";
pub const SPACECRAFT_PARAMETERS_TITLE: &str = "Spacecraft Parameters";
pub const KEPLERIAN_ELEMENTS_TITLE: &str = "Osculating Keplerian Elements";
pub const COVARIANCE_MATRIX_TITLE: &str = "Position/Velocity Covariance Matrix";
pub const MANEUVER_PARAMETERS_TITLE: &str = "Maneuver Parameters";
