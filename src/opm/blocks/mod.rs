//! # Data blocks
//!
//! The data section of an OPM is made of up to five kinds of blocks, each a
//! [`KeywordContainer`] printed with decimal alignment:
//!
//! | Kind                         | Type                      | Default title                          |
//! |------------------------------|---------------------------|----------------------------------------|
//! | State vector                 | [`StateVector`]           | `State Vector Components`              |
//! | Spacecraft parameters        | [`SpacecraftParameters`]  | `Spacecraft Parameters`                |
//! | Osculating Keplerian elements| [`KeplerianElements`]     | `Osculating Keplerian Elements`        |
//! | Covariance matrix            | [`CovarianceMatrix`]      | `Position/Velocity Covariance Matrix`  |
//! | Maneuver parameters          | [`ManeuverParameters`]    | `Maneuver Parameters`                  |
//!
//! Every block can override its title with a display name; otherwise the title
//! of the slot it is placed in is used. [`DataBlock`] is the tagged union the
//! [`Data`](crate::opm::data::Data) section stores.
use std::fmt;

use crate::constants::{
    COVARIANCE_MATRIX_TITLE, KEPLERIAN_ELEMENTS_TITLE, MANEUVER_PARAMETERS_TITLE,
    SPACECRAFT_PARAMETERS_TITLE, STATE_VECTOR_TITLE,
};
use crate::keyword::container::KeywordContainer;
use crate::odm_errors::OdmError;

/// Getter/setter pairs for numeric keywords of a block.
macro_rules! number_keywords {
    ($($getter:ident, $setter:ident => $name:literal;)*) => {
        $(
            #[doc = concat!("Value of `", $name, "`.")]
            pub fn $getter(&self) -> Option<f64> {
                self.keywords.number($name)
            }

            #[doc = concat!("Set or clear `", $name, "`.")]
            pub fn $setter(&mut self, value: impl Into<Option<f64>>) {
                self.keywords
                    .set($name, value.into().map($crate::keyword::Value::Number));
            }
        )*
    };
}

/// Display name and comment handling shared by every block.
macro_rules! block_common {
    () => {
        /// Title override printed in the `COMMENT` line opening the block.
        pub fn name(&self) -> Option<&str> {
            self.name.as_deref()
        }

        pub fn set_name(&mut self, name: Option<&str>) {
            self.name = name.map(str::to_string);
        }

        pub fn with_name(mut self, name: &str) -> Self {
            self.name = Some(name.to_string());
            self
        }

        pub fn comment(&self) -> Option<&str> {
            self.keywords.text($crate::constants::COMMENT)
        }

        pub fn set_comment(&mut self, comment: Option<&str>) {
            self.keywords
                .set($crate::constants::COMMENT, comment.map(Into::into));
        }

        pub fn keywords(&self) -> &$crate::keyword::container::KeywordContainer {
            &self.keywords
        }

        pub fn keywords_mut(&mut self) -> &mut $crate::keyword::container::KeywordContainer {
            &mut self.keywords
        }
    };
}

pub mod covariance_matrix;
pub mod keplerian_elements;
pub mod maneuver_parameters;
pub mod spacecraft_parameters;
pub mod state_vector;

pub use covariance_matrix::CovarianceMatrix;
pub use keplerian_elements::KeplerianElements;
pub use maneuver_parameters::ManeuverParameters;
pub use spacecraft_parameters::SpacecraftParameters;
pub use state_vector::StateVector;

/// The five kinds of data blocks, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    StateVector,
    SpacecraftParameters,
    KeplerianElements,
    CovarianceMatrix,
    ManeuverParameters,
}

impl BlockKind {
    pub const ALL: [BlockKind; 5] = [
        BlockKind::StateVector,
        BlockKind::SpacecraftParameters,
        BlockKind::KeplerianElements,
        BlockKind::CovarianceMatrix,
        BlockKind::ManeuverParameters,
    ];

    /// Default title of blocks of this kind.
    pub fn title(&self) -> &'static str {
        match self {
            BlockKind::StateVector => STATE_VECTOR_TITLE,
            BlockKind::SpacecraftParameters => SPACECRAFT_PARAMETERS_TITLE,
            BlockKind::KeplerianElements => KEPLERIAN_ELEMENTS_TITLE,
            BlockKind::CovarianceMatrix => COVARIANCE_MATRIX_TITLE,
            BlockKind::ManeuverParameters => MANEUVER_PARAMETERS_TITLE,
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A data block of any kind.
#[derive(Debug, Clone)]
pub enum DataBlock {
    StateVector(StateVector),
    SpacecraftParameters(SpacecraftParameters),
    KeplerianElements(KeplerianElements),
    CovarianceMatrix(CovarianceMatrix),
    ManeuverParameters(ManeuverParameters),
}

impl DataBlock {
    pub fn kind(&self) -> BlockKind {
        match self {
            DataBlock::StateVector(_) => BlockKind::StateVector,
            DataBlock::SpacecraftParameters(_) => BlockKind::SpacecraftParameters,
            DataBlock::KeplerianElements(_) => BlockKind::KeplerianElements,
            DataBlock::CovarianceMatrix(_) => BlockKind::CovarianceMatrix,
            DataBlock::ManeuverParameters(_) => BlockKind::ManeuverParameters,
        }
    }

    /// Display name override of the wrapped block.
    pub fn name(&self) -> Option<&str> {
        match self {
            DataBlock::StateVector(b) => b.name(),
            DataBlock::SpacecraftParameters(b) => b.name(),
            DataBlock::KeplerianElements(b) => b.name(),
            DataBlock::CovarianceMatrix(b) => b.name(),
            DataBlock::ManeuverParameters(b) => b.name(),
        }
    }

    /// Keyword validation of the wrapped block, including block-level rules
    /// such as the Keplerian anomaly requirement.
    pub fn validate(&self) -> Result<(), OdmError> {
        match self {
            DataBlock::KeplerianElements(b) => b.validate(),
            other => other.keywords().validate(),
        }
    }

    pub fn keywords(&self) -> &KeywordContainer {
        match self {
            DataBlock::StateVector(b) => b.keywords(),
            DataBlock::SpacecraftParameters(b) => b.keywords(),
            DataBlock::KeplerianElements(b) => b.keywords(),
            DataBlock::CovarianceMatrix(b) => b.keywords(),
            DataBlock::ManeuverParameters(b) => b.keywords(),
        }
    }
}

impl From<StateVector> for DataBlock {
    fn from(b: StateVector) -> Self {
        DataBlock::StateVector(b)
    }
}

impl From<SpacecraftParameters> for DataBlock {
    fn from(b: SpacecraftParameters) -> Self {
        DataBlock::SpacecraftParameters(b)
    }
}

impl From<KeplerianElements> for DataBlock {
    fn from(b: KeplerianElements) -> Self {
        DataBlock::KeplerianElements(b)
    }
}

impl From<CovarianceMatrix> for DataBlock {
    fn from(b: CovarianceMatrix) -> Self {
        DataBlock::CovarianceMatrix(b)
    }
}

impl From<ManeuverParameters> for DataBlock {
    fn from(b: ManeuverParameters) -> Self {
        DataBlock::ManeuverParameters(b)
    }
}
