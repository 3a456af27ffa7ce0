//! # Reference frames and time systems
//!
//! Enumerations of the values allowed for the `REF_FRAME`, `COV_REF_FRAME`,
//! `MAN_REF_FRAME` and `TIME_SYSTEM` keywords. Each value is written with its
//! CCSDS spelling through [`fmt::Display`], parsed back with [`FromStr`], and
//! (de)serialized with the same spelling through `serde`.
//!
//! ```rust
//! use odmkit::ref_system::{RefFrame, TimeSystem};
//!
//! let frame: RefFrame = "ITRF_93".parse().unwrap();
//! assert_eq!(frame, RefFrame::Itrf93);
//! assert_eq!(TimeSystem::Utc.to_string(), "UTC");
//! ```
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::odm_errors::OdmError;

/// Reference frame in which a state, a covariance or a maneuver is expressed.
///
/// Inertial and Earth-fixed frames (`EME2000` … `TOD`) apply to states; the
/// local orbital frames `RSW`, `RTN` and `TNW` are used for covariance and
/// maneuver data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RefFrame {
    #[serde(rename = "EME2000")]
    Eme2000,
    #[serde(rename = "GCRF")]
    Gcrf,
    #[serde(rename = "GRC")]
    Grc,
    #[serde(rename = "ICRF")]
    Icrf,
    #[serde(rename = "ITRF2000")]
    Itrf2000,
    #[serde(rename = "ITRF_93")]
    Itrf93,
    #[serde(rename = "ITRF_97")]
    Itrf97,
    #[serde(rename = "MCI")]
    Mci,
    #[serde(rename = "TDR")]
    Tdr,
    #[serde(rename = "TEME")]
    Teme,
    #[serde(rename = "TOD")]
    Tod,
    #[serde(rename = "RSW")]
    Rsw,
    #[serde(rename = "RTN")]
    Rtn,
    #[serde(rename = "TNW")]
    Tnw,
}

impl RefFrame {
    pub const ALL: [RefFrame; 14] = [
        RefFrame::Eme2000,
        RefFrame::Gcrf,
        RefFrame::Grc,
        RefFrame::Icrf,
        RefFrame::Itrf2000,
        RefFrame::Itrf93,
        RefFrame::Itrf97,
        RefFrame::Mci,
        RefFrame::Tdr,
        RefFrame::Teme,
        RefFrame::Tod,
        RefFrame::Rsw,
        RefFrame::Rtn,
        RefFrame::Tnw,
    ];

    /// CCSDS spelling of the frame.
    pub fn as_str(&self) -> &'static str {
        match self {
            RefFrame::Eme2000 => "EME2000",
            RefFrame::Gcrf => "GCRF",
            RefFrame::Grc => "GRC",
            RefFrame::Icrf => "ICRF",
            RefFrame::Itrf2000 => "ITRF2000",
            RefFrame::Itrf93 => "ITRF_93",
            RefFrame::Itrf97 => "ITRF_97",
            RefFrame::Mci => "MCI",
            RefFrame::Tdr => "TDR",
            RefFrame::Teme => "TEME",
            RefFrame::Tod => "TOD",
            RefFrame::Rsw => "RSW",
            RefFrame::Rtn => "RTN",
            RefFrame::Tnw => "TNW",
        }
    }
}

impl fmt::Display for RefFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RefFrame {
    type Err = OdmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RefFrame::ALL
            .into_iter()
            .find(|frame| frame.as_str() == s)
            .ok_or_else(|| OdmError::InvalidEnumValue {
                kind: "reference frame",
                value: format!(
                    "{s} (expected one of {})",
                    RefFrame::ALL.iter().join(", ")
                ),
            })
    }
}

/// Time system of every date in the data section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSystem {
    #[serde(rename = "GMST")]
    Gmst,
    #[serde(rename = "GPS")]
    Gps,
    #[serde(rename = "MET")]
    Met,
    #[serde(rename = "MRT")]
    Mrt,
    #[serde(rename = "SCLK")]
    Sclk,
    #[serde(rename = "TAI")]
    Tai,
    #[serde(rename = "TCB")]
    Tcb,
    #[serde(rename = "TDB")]
    Tdb,
    #[serde(rename = "TCG")]
    Tcg,
    #[serde(rename = "TT")]
    Tt,
    #[serde(rename = "UT1")]
    Ut1,
    #[serde(rename = "UTC")]
    Utc,
}

impl TimeSystem {
    pub const ALL: [TimeSystem; 12] = [
        TimeSystem::Gmst,
        TimeSystem::Gps,
        TimeSystem::Met,
        TimeSystem::Mrt,
        TimeSystem::Sclk,
        TimeSystem::Tai,
        TimeSystem::Tcb,
        TimeSystem::Tdb,
        TimeSystem::Tcg,
        TimeSystem::Tt,
        TimeSystem::Ut1,
        TimeSystem::Utc,
    ];

    /// CCSDS spelling of the time system.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSystem::Gmst => "GMST",
            TimeSystem::Gps => "GPS",
            TimeSystem::Met => "MET",
            TimeSystem::Mrt => "MRT",
            TimeSystem::Sclk => "SCLK",
            TimeSystem::Tai => "TAI",
            TimeSystem::Tcb => "TCB",
            TimeSystem::Tdb => "TDB",
            TimeSystem::Tcg => "TCG",
            TimeSystem::Tt => "TT",
            TimeSystem::Ut1 => "UT1",
            TimeSystem::Utc => "UTC",
        }
    }
}

impl fmt::Display for TimeSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeSystem {
    type Err = OdmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSystem::ALL
            .into_iter()
            .find(|ts| ts.as_str() == s)
            .ok_or_else(|| OdmError::InvalidEnumValue {
                kind: "time system",
                value: format!(
                    "{s} (expected one of {})",
                    TimeSystem::ALL.iter().join(", ")
                ),
            })
    }
}

#[cfg(test)]
mod ref_system_test {
    use super::*;

    #[test]
    fn test_ref_frame_round_trip() {
        for frame in RefFrame::ALL {
            assert_eq!(frame.as_str().parse::<RefFrame>().unwrap(), frame);
        }
        assert_eq!(RefFrame::Itrf97.to_string(), "ITRF_97");
    }

    #[test]
    fn test_time_system_round_trip() {
        for ts in TimeSystem::ALL {
            assert_eq!(ts.as_str().parse::<TimeSystem>().unwrap(), ts);
        }
    }

    #[test]
    fn test_unknown_values() {
        let err = "J2000".parse::<RefFrame>().unwrap_err();
        assert!(matches!(
            err,
            OdmError::InvalidEnumValue {
                kind: "reference frame",
                ..
            }
        ));
        assert!("utc".parse::<TimeSystem>().is_err());
    }

    #[test]
    fn test_serde_spelling() {
        assert_eq!(
            serde_json::to_string(&RefFrame::Itrf93).unwrap(),
            "\"ITRF_93\""
        );
        let ts: TimeSystem = serde_json::from_str("\"TDB\"").unwrap();
        assert_eq!(ts, TimeSystem::Tdb);
    }
}
