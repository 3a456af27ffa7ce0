//! # Orbit Parameter Message (KVN)
//!
//! Building blocks of an OPM, from the outside in:
//!
//! - [`document::Opm`]: the validated message, written line by line.
//! - [`header::Header`] and [`metadata::Metadata`]: equals-aligned sections.
//! - [`data::Data`]: the five data block slots and their structural rules.
//! - [`blocks`]: the typed data blocks themselves.
//! - [`user_defined::UserDefined`]: trailing `USER_DEFINED_*` parameters.
//!
//! ```rust
//! use hifitime::Epoch;
//! use nalgebra::Vector3;
//! use odmkit::opm::{Data, Header, Metadata, Opm, StateVector};
//! use odmkit::ref_system::{RefFrame, TimeSystem};
//!
//! let header = Header::new("ESA")
//!     .with_creation_date(Epoch::from_gregorian_utc_hms(2011, 3, 1, 1, 2, 3));
//! let metadata = Metadata::new("Dragon", "2010-026A", "EARTH", RefFrame::Gcrf, TimeSystem::Utc);
//! let data = Data::new(StateVector::new(
//!     Epoch::from_gregorian_utc_hms(2011, 2, 24, 1, 2, 3),
//!     &Vector3::new(6655.9942, -40218.5751, -82.9375),
//!     &Vector3::new(3.11548208, 0.47042605, -0.00101495),
//! ));
//!
//! let opm = Opm::new(header, metadata, data, None).unwrap();
//! assert!(opm.to_string().starts_with("CCSDS_OPM_VERS = 2.0\n"));
//! ```
use std::fmt::Display;

pub mod blocks;
pub mod data;
pub mod document;
pub mod header;
pub mod metadata;
pub mod user_defined;

pub use blocks::{
    BlockKind, CovarianceMatrix, DataBlock, KeplerianElements, ManeuverParameters,
    SpacecraftParameters, StateVector,
};
pub use data::{BlockSlot, Data, SlotEntry};
pub use document::Opm;
pub use header::Header;
pub use metadata::Metadata;
pub use user_defined::UserDefined;

/// Prepend `prefix` to every item.
pub fn prefix<'a, I>(prefix: &'a str, items: I) -> impl Iterator<Item = String> + 'a
where
    I: IntoIterator + 'a,
    I::Item: Display,
    I::IntoIter: 'a,
{
    items.into_iter().map(move |item| format!("{prefix}{item}"))
}

/// Append `suffix` to every item.
pub fn suffix<'a, I>(suffix: &'a str, items: I) -> impl Iterator<Item = String> + 'a
where
    I: IntoIterator + 'a,
    I::Item: Display,
    I::IntoIter: 'a,
{
    items.into_iter().map(move |item| format!("{item}{suffix}"))
}
