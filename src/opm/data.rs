//! # OPM data section
//!
//! The data section is a fixed sequence of five **slots**, one per
//! [`BlockKind`], always walked in the same order:
//!
//! | Slot                         | Mandatory | Repeatable | Requires               |
//! |------------------------------|-----------|------------|------------------------|
//! | State vector                 | yes       | no         |                        |
//! | Spacecraft parameters        | no        | no         |                        |
//! | Osculating Keplerian elements| no        | no         |                        |
//! | Covariance matrix            | no        | no         |                        |
//! | Maneuver parameters          | no        | yes        | spacecraft parameters  |
//!
//! Typed setters ([`Data::set_state_vector`], …) always put the right kind of
//! block in the right slot. [`Data::set_entry`] accepts any [`DataBlock`] in any
//! slot; mismatches are then reported by [`Data::validate`].
//!
//! Two rules are enforced as soon as a slot is assigned:
//!
//! * the state vector slot can never be emptied,
//! * spacecraft parameters cannot be removed while maneuvers are present.
//!
//! Everything else is checked by [`Data::validate`].
use log::trace;

use crate::odm_errors::OdmError;
use crate::opm::blocks::{
    BlockKind, CovarianceMatrix, DataBlock, KeplerianElements, ManeuverParameters,
    SpacecraftParameters, StateVector,
};

const MANEUVER_PREREQUISITE_ERROR: &str =
    "spacecraft parameters block mandatory if any maneuver parameters are given";

/// Content of a non-empty slot: one block, or a sequence for repeatable slots.
#[derive(Debug, Clone)]
pub enum SlotEntry {
    Single(DataBlock),
    Multiple(Vec<DataBlock>),
}

impl SlotEntry {
    /// Blocks of the entry, in output order.
    pub fn blocks(&self) -> &[DataBlock] {
        match self {
            SlotEntry::Single(block) => std::slice::from_ref(block),
            SlotEntry::Multiple(blocks) => blocks,
        }
    }
}

impl From<DataBlock> for SlotEntry {
    fn from(block: DataBlock) -> Self {
        SlotEntry::Single(block)
    }
}

impl From<Vec<DataBlock>> for SlotEntry {
    fn from(blocks: Vec<DataBlock>) -> Self {
        SlotEntry::Multiple(blocks)
    }
}

impl From<ManeuverParameters> for SlotEntry {
    fn from(block: ManeuverParameters) -> Self {
        SlotEntry::Single(block.into())
    }
}

impl From<Vec<ManeuverParameters>> for SlotEntry {
    fn from(blocks: Vec<ManeuverParameters>) -> Self {
        SlotEntry::Multiple(blocks.into_iter().map(DataBlock::from).collect())
    }
}

/// A named position of the data section with its structural rules.
#[derive(Debug, Clone)]
pub struct BlockSlot {
    kind: BlockKind,
    entry: Option<SlotEntry>,
    allow_multiple: bool,
    mandatory: bool,
    prerequisite: Option<BlockKind>,
    prerequisite_error: &'static str,
}

impl BlockSlot {
    fn new(kind: BlockKind) -> Self {
        BlockSlot {
            kind,
            entry: None,
            allow_multiple: false,
            mandatory: false,
            prerequisite: None,
            prerequisite_error: "",
        }
    }

    /// Title printed before each block of the slot, unless the block has its own
    /// name.
    pub fn name(&self) -> &'static str {
        self.kind.title()
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn entry(&self) -> Option<&SlotEntry> {
        self.entry.as_ref()
    }

    pub fn allow_multiple(&self) -> bool {
        self.allow_multiple
    }

    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    /// Kind of block that must be present for this slot to be filled.
    pub fn prerequisite(&self) -> Option<BlockKind> {
        self.prerequisite
    }

    /// Blocks held by the slot; empty when the slot is unset.
    pub fn blocks(&self) -> &[DataBlock] {
        match &self.entry {
            Some(entry) => entry.blocks(),
            None => &[],
        }
    }

    /// A slot holding an empty sequence counts as empty.
    pub fn is_present(&self) -> bool {
        !self.blocks().is_empty()
    }

    /// Structural check of this slot alone: kind and repetition.
    fn check_entry(&self) -> Result<(), OdmError> {
        let Some(entry) = &self.entry else {
            return Ok(());
        };

        if let SlotEntry::Multiple(_) = entry {
            if !self.allow_multiple {
                return Err(OdmError::TypeMismatch(format!(
                    "the '{}' block cannot be repeated.",
                    self.name()
                )));
            }
        }

        match entry.blocks().iter().find(|b| b.kind() != self.kind) {
            Some(wrong) => Err(OdmError::TypeMismatch(format!(
                "'{}' slot expects a {} block, got a {} block",
                self.name(),
                self.kind,
                wrong.kind()
            ))),
            None => Ok(()),
        }
    }
}

/// OPM data section.
#[derive(Debug, Clone)]
pub struct Data {
    slots: [BlockSlot; 5],
}

impl Default for Data {
    /// Data section with every slot empty. It does not validate until a state
    /// vector is set.
    fn default() -> Self {
        let mut state_vector = BlockSlot::new(BlockKind::StateVector);
        state_vector.mandatory = true;

        let mut maneuvers = BlockSlot::new(BlockKind::ManeuverParameters);
        maneuvers.allow_multiple = true;
        maneuvers.prerequisite = Some(BlockKind::SpacecraftParameters);
        maneuvers.prerequisite_error = MANEUVER_PREREQUISITE_ERROR;

        Data {
            slots: [
                state_vector,
                BlockSlot::new(BlockKind::SpacecraftParameters),
                BlockSlot::new(BlockKind::KeplerianElements),
                BlockSlot::new(BlockKind::CovarianceMatrix),
                maneuvers,
            ],
        }
    }
}

impl Data {
    /// Data section holding only a state vector.
    pub fn new(state_vector: StateVector) -> Self {
        let mut data = Data::default();
        data.slot_mut(BlockKind::StateVector).entry = Some(DataBlock::from(state_vector).into());
        data
    }

    /// Slots in output order.
    pub fn slots(&self) -> &[BlockSlot] {
        &self.slots
    }

    pub fn slot(&self, kind: BlockKind) -> &BlockSlot {
        &self.slots[kind as usize]
    }

    fn slot_mut(&mut self, kind: BlockKind) -> &mut BlockSlot {
        &mut self.slots[kind as usize]
    }

    /// Every block of the section, with the slot it sits in, in output order.
    pub fn blocks(&self) -> impl Iterator<Item = (&BlockSlot, &DataBlock)> + '_ {
        self.slots
            .iter()
            .flat_map(|slot| slot.blocks().iter().map(move |block| (slot, block)))
    }

    /// Put any entry in any slot.
    ///
    /// Only the assignment-time rules are checked here; kind and repetition are
    /// left to [`Data::validate`].
    ///
    /// Return
    /// ----------
    /// * [`OdmError::MissingBlock`] when emptying the state vector slot.
    /// * [`OdmError::PrerequisiteFailed`] when emptying a slot another present
    ///   slot depends on.
    pub fn set_entry(&mut self, kind: BlockKind, entry: Option<SlotEntry>) -> Result<(), OdmError> {
        let empties = entry.as_ref().map_or(true, |e| e.blocks().is_empty());
        if empties {
            let slot = self.slot(kind);
            if slot.mandatory {
                return Err(OdmError::MissingBlock(slot.name().to_string()));
            }
            if let Some(dependent) = self
                .slots
                .iter()
                .find(|s| s.prerequisite == Some(kind) && s.is_present())
            {
                return Err(OdmError::PrerequisiteFailed(
                    dependent.prerequisite_error.to_string(),
                ));
            }
        }
        self.slot_mut(kind).entry = entry;
        Ok(())
    }

    fn single(&self, kind: BlockKind) -> Option<&DataBlock> {
        match self.slot(kind).entry.as_ref()? {
            SlotEntry::Single(block) => Some(block),
            SlotEntry::Multiple(_) => None,
        }
    }

    pub fn state_vector(&self) -> Option<&StateVector> {
        match self.single(BlockKind::StateVector)? {
            DataBlock::StateVector(b) => Some(b),
            _ => None,
        }
    }

    /// Replace the state vector.
    ///
    /// Return
    /// ----------
    /// * [`OdmError::MissingBlock`] when `state_vector` is `None`: the state
    ///   vector is mandatory and cannot be removed.
    pub fn set_state_vector(&mut self, state_vector: Option<StateVector>) -> Result<(), OdmError> {
        self.set_entry(
            BlockKind::StateVector,
            state_vector.map(|b| DataBlock::from(b).into()),
        )
    }

    pub fn spacecraft_parameters(&self) -> Option<&SpacecraftParameters> {
        match self.single(BlockKind::SpacecraftParameters)? {
            DataBlock::SpacecraftParameters(b) => Some(b),
            _ => None,
        }
    }

    /// Set or remove the spacecraft parameters.
    ///
    /// Return
    /// ----------
    /// * [`OdmError::PrerequisiteFailed`] when removing them while maneuver
    ///   parameters are present.
    pub fn set_spacecraft_parameters(
        &mut self,
        spacecraft_parameters: Option<SpacecraftParameters>,
    ) -> Result<(), OdmError> {
        self.set_entry(
            BlockKind::SpacecraftParameters,
            spacecraft_parameters.map(|b| DataBlock::from(b).into()),
        )
    }

    pub fn keplerian_elements(&self) -> Option<&KeplerianElements> {
        match self.single(BlockKind::KeplerianElements)? {
            DataBlock::KeplerianElements(b) => Some(b),
            _ => None,
        }
    }

    pub fn set_keplerian_elements(&mut self, keplerian_elements: Option<KeplerianElements>) {
        self.slot_mut(BlockKind::KeplerianElements).entry =
            keplerian_elements.map(|b| DataBlock::from(b).into());
    }

    pub fn covariance_matrix(&self) -> Option<&CovarianceMatrix> {
        match self.single(BlockKind::CovarianceMatrix)? {
            DataBlock::CovarianceMatrix(b) => Some(b),
            _ => None,
        }
    }

    pub fn set_covariance_matrix(&mut self, covariance_matrix: Option<CovarianceMatrix>) {
        self.slot_mut(BlockKind::CovarianceMatrix).entry =
            covariance_matrix.map(|b| DataBlock::from(b).into());
    }

    /// Maneuvers in output order.
    pub fn maneuver_parameters(&self) -> Vec<&ManeuverParameters> {
        self.slot(BlockKind::ManeuverParameters)
            .blocks()
            .iter()
            .filter_map(|b| match b {
                DataBlock::ManeuverParameters(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    /// Set one maneuver or a sequence of maneuvers.
    ///
    /// The spacecraft parameters prerequisite is checked by [`Data::validate`],
    /// so maneuvers can be set before the spacecraft parameters.
    pub fn set_maneuver_parameters(&mut self, maneuvers: impl Into<SlotEntry>) {
        self.slot_mut(BlockKind::ManeuverParameters).entry = Some(maneuvers.into());
    }

    pub fn clear_maneuver_parameters(&mut self) {
        self.slot_mut(BlockKind::ManeuverParameters).entry = None;
    }

    /// Check the structure of the section, then the keywords of every block.
    ///
    /// Slots are walked in output order; for each one:
    ///
    /// 1. a mandatory empty slot fails with [`OdmError::MissingBlock`],
    /// 2. a filled slot whose prerequisite is empty fails with
    ///    [`OdmError::PrerequisiteFailed`],
    /// 3. a sequence in a non-repeatable slot, or a block of the wrong kind,
    ///    fails with [`OdmError::TypeMismatch`].
    ///
    /// Once the structure is sound, each block is validated in output order
    /// (see [`DataBlock::validate`]).
    pub fn validate(&self) -> Result<(), OdmError> {
        for slot in &self.slots {
            if !slot.is_present() {
                if slot.mandatory {
                    trace!("mandatory data block '{}' is missing", slot.name());
                    return Err(OdmError::MissingBlock(slot.name().to_string()));
                }
                continue;
            }

            if let Some(required) = slot.prerequisite {
                if !self.slot(required).is_present() {
                    trace!("'{}' requires '{}'", slot.name(), required);
                    return Err(OdmError::PrerequisiteFailed(
                        slot.prerequisite_error.to_string(),
                    ));
                }
            }

            slot.check_entry()?;
        }

        self.blocks().try_for_each(|(_, block)| block.validate())
    }
}

#[cfg(test)]
mod data_test {
    use super::*;
    use hifitime::Epoch;
    use nalgebra::Vector3;

    use crate::ref_system::RefFrame;

    fn state_vector() -> StateVector {
        StateVector::new(
            Epoch::from_gregorian_utc_hms(2011, 2, 24, 1, 2, 3),
            &Vector3::zeros(),
            &Vector3::zeros(),
        )
    }

    fn maneuver() -> ManeuverParameters {
        ManeuverParameters::new(
            Epoch::from_gregorian_utc_hms(2011, 2, 24, 9, 0, 0),
            0.0,
            -1.5,
            RefFrame::Rtn,
            &Vector3::new(0.001, 0.0, 0.0),
        )
    }

    #[test]
    fn test_empty_data_misses_state_vector() {
        assert_eq!(
            Data::default().validate(),
            Err(OdmError::MissingBlock("State Vector Components".to_string()))
        );
    }

    #[test]
    fn test_state_vector_only() {
        let data = Data::new(state_vector());
        assert!(data.validate().is_ok());
        assert_eq!(data.blocks().count(), 1);
    }

    #[test]
    fn test_state_vector_cannot_be_removed() {
        let mut data = Data::new(state_vector());
        assert_eq!(
            data.set_state_vector(None),
            Err(OdmError::MissingBlock("State Vector Components".to_string()))
        );
        assert!(data.state_vector().is_some());
    }

    #[test]
    fn test_maneuver_prerequisite() {
        let mut data = Data::new(state_vector());
        data.set_maneuver_parameters(maneuver());
        assert_eq!(
            data.validate(),
            Err(OdmError::PrerequisiteFailed(
                MANEUVER_PREREQUISITE_ERROR.to_string()
            ))
        );

        data.set_spacecraft_parameters(Some(SpacecraftParameters::new(
            1000.0, None, None, None, None,
        )))
        .unwrap();
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_spacecraft_parameters_locked_by_maneuvers() {
        let mut data = Data::new(state_vector());
        data.set_spacecraft_parameters(Some(SpacecraftParameters::default()))
            .unwrap();
        data.set_maneuver_parameters(vec![maneuver(), maneuver()]);

        assert!(matches!(
            data.set_spacecraft_parameters(None),
            Err(OdmError::PrerequisiteFailed(_))
        ));

        data.clear_maneuver_parameters();
        assert!(data.set_spacecraft_parameters(None).is_ok());
    }

    #[test]
    fn test_multiple_maneuvers() {
        let mut data = Data::new(state_vector());
        data.set_spacecraft_parameters(Some(SpacecraftParameters::default()))
            .unwrap();
        data.set_maneuver_parameters(vec![maneuver(), maneuver().with_name("Second burn")]);

        assert!(data.validate().is_ok());
        let maneuvers = data.maneuver_parameters();
        assert_eq!(maneuvers.len(), 2);
        assert_eq!(maneuvers[1].name(), Some("Second burn"));
    }

    #[test]
    fn test_repeated_single_slot() {
        let mut data = Data::new(state_vector());
        data.set_entry(
            BlockKind::KeplerianElements,
            Some(SlotEntry::Multiple(vec![
                KeplerianElements::default().into(),
                KeplerianElements::default().into(),
            ])),
        )
        .unwrap();
        assert_eq!(
            data.validate(),
            Err(OdmError::TypeMismatch(
                "the 'Osculating Keplerian Elements' block cannot be repeated.".to_string()
            ))
        );
    }

    #[test]
    fn test_wrong_block_kind() {
        let mut data = Data::new(state_vector());
        data.set_entry(
            BlockKind::CovarianceMatrix,
            Some(DataBlock::from(SpacecraftParameters::default()).into()),
        )
        .unwrap();
        assert!(matches!(data.validate(), Err(OdmError::TypeMismatch(_))));
    }

    #[test]
    fn test_wrong_kind_inside_sequence() {
        let mut data = Data::new(state_vector());
        data.set_spacecraft_parameters(Some(SpacecraftParameters::default()))
            .unwrap();
        data.set_maneuver_parameters(vec![
            DataBlock::from(maneuver()),
            DataBlock::from(state_vector()),
        ]);
        assert!(matches!(data.validate(), Err(OdmError::TypeMismatch(_))));
    }

    #[test]
    fn test_block_keywords_are_validated() {
        let mut sv = state_vector();
        sv.set_z_dot(None);
        let data = Data::new(sv);
        assert_eq!(
            data.validate(),
            Err(OdmError::MissingKeyword("Z_DOT".to_string()))
        );
    }
}
