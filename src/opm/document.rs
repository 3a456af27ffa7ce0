//! # Orbit Parameter Message
//!
//! [`Opm`] ties a [`Header`], a [`Metadata`] section, a [`Data`] section and
//! optional [`UserDefined`] parameters into a complete message. The parts are
//! validated once, when the message is built: an [`Opm`] that exists can always
//! be written, and nothing is written for an invalid one.
//!
//! ## Layout
//!
//! ```text
//! CCSDS_OPM_VERS = 2.0
//! CREATION_DATE  = 2011-03-01T01:02:03
//! ORIGINATOR     = ESA
//!
//! COMMENT Metadata
//! OBJECT_NAME     = Dragon
//! ...
//!
//! COMMENT State Vector Components
//! EPOCH   = 2011-02-24T01:02:03
//! X       = 0.0
//! ...
//!
//! USER_DEFINED_EARTH_MODEL = WGS-84
//! ```
//!
//! The header and metadata are equals-aligned, each data block is
//! decimal-aligned and opened by a `COMMENT <title>` line. Every line ends
//! with `\n`.
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::iter;

use camino::Utf8Path;
use log::debug;

use crate::constants::{COMMENT, METADATA_TITLE};
use crate::odm_errors::OdmError;
use crate::opm::data::Data;
use crate::opm::header::Header;
use crate::opm::metadata::Metadata;
use crate::opm::user_defined::UserDefined;
use crate::opm::suffix;

/// A validated Orbit Parameter Message, ready to be written.
#[derive(Debug, Clone)]
pub struct Opm {
    header: Header,
    metadata: Metadata,
    data: Data,
    user_defined: Option<UserDefined>,
}

impl Opm {
    /// Assemble and validate a message.
    ///
    /// Arguments
    /// -----------------
    /// * `header`: version, creation date and originator.
    /// * `metadata`: object, center, frame and time system.
    /// * `data`: the data blocks; a state vector is required.
    /// * `user_defined`: extra `USER_DEFINED_*` parameters.
    ///
    /// Return
    /// ----------
    /// * The message, or the first error found in the header, then the
    ///   metadata, then the data section, then the user-defined parameters.
    pub fn new(
        header: Header,
        metadata: Metadata,
        data: Data,
        user_defined: Option<UserDefined>,
    ) -> Result<Self, OdmError> {
        header.validate()?;
        metadata.validate()?;
        data.validate()?;
        if let Some(ud) = &user_defined {
            ud.validate()?;
        }

        debug!(
            "OPM built for {} with {} data block(s)",
            metadata.object_name().unwrap_or_default(),
            data.blocks().count()
        );

        Ok(Opm {
            header,
            metadata,
            data,
            user_defined,
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn data(&self) -> &Data {
        &self.data
    }

    pub fn user_defined(&self) -> Option<&UserDefined> {
        self.user_defined.as_ref()
    }

    /// Split the message back into its parts, e.g. to modify and rebuild it.
    pub fn into_parts(self) -> (Header, Metadata, Data, Option<UserDefined>) {
        (self.header, self.metadata, self.data, self.user_defined)
    }

    /// Lines of the message, without line terminators.
    ///
    /// Sections are rendered on demand as the iterator advances.
    pub fn output(&self) -> impl Iterator<Item = String> + '_ {
        let header =
            iter::once_with(move || self.header.keywords().render_align_equals()).flatten();
        let metadata =
            iter::once_with(move || self.metadata.keywords().render_align_equals()).flatten();

        let blocks = self.data.blocks().flat_map(|(slot, block)| {
            let title = block.name().unwrap_or(slot.name());
            iter::once(format!("{COMMENT} {title}"))
                .chain(block.keywords().render_align_decimal())
                .chain(iter::once(String::new()))
        });

        let user_defined = self.user_defined.iter().flat_map(|ud| ud.output());

        header
            .chain(iter::once(String::new()))
            .chain(iter::once(format!("{COMMENT} {METADATA_TITLE}")))
            .chain(metadata)
            .chain(iter::once(String::new()))
            .chain(blocks)
            .chain(user_defined)
    }

    /// Write the message to `writer`, one `\n`-terminated line at a time.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<(), OdmError> {
        for line in suffix("\n", self.output()) {
            writer.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    /// Create (or truncate) `path` and write the message into it.
    pub fn write_file(&self, path: &Utf8Path) -> Result<(), OdmError> {
        debug!("writing OPM to {path}");
        let mut writer = BufWriter::new(File::create(path)?);
        self.write(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Display for Opm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.output() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
