//! # odmkit
//!
//! Writer for CCSDS 502.0-B-2 **Orbit Parameter Messages** in keyword/value
//! notation (KVN).
//!
//! ## Overview
//!
//! - [`opm`]: header, metadata, data blocks and the validated [`opm::Opm`]
//!   message.
//! - [`keyword`]: keywords, validators and the containers that print them.
//! - [`number_format`]: CCSDS numeric formatting and decimal alignment.
//! - [`time`]: calendar and day-of-year date rendering.
//! - [`ref_system`]: reference frames and time systems.
//! - [`odm_errors`]: the crate error type.
pub mod constants;
pub mod keyword;
pub mod number_format;
pub mod odm_errors;
pub mod opm;
pub mod ref_system;
pub mod time;

pub use odm_errors::OdmError;
pub use opm::Opm;
