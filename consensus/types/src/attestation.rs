use crate::test_utils::TestRandom;
use crate::{AttestationData, ForkName, Slot};
use deep_copy_derive::DeepCopy;
use superstruct::superstruct;
use test_random_derive::TestRandom;

/// An aggregate vote for a block, as included in a block body.
///
/// Electra attestations additionally carry the bitfield of committees they aggregate over.
#[superstruct(
    variants(Base, Electra),
    variant_attributes(derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Default,
        DeepCopy,
        TestRandom
    )),
    ref_attributes(derive(Debug, PartialEq)),
    cast_error(ty = "crate::Error", expr = "crate::Error::IncorrectVariant"),
    partial_getter_error(ty = "crate::Error", expr = "crate::Error::IncorrectVariant")
)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, DeepCopy)]
pub struct Attestation {
    pub aggregation_bits: Option<Vec<u8>>,
    pub data: Option<AttestationData>,
    pub signature: Option<Vec<u8>>,
    #[superstruct(only(Electra))]
    pub committee_bits: Option<Vec<u8>>,
}

impl Attestation {
    /// The earliest fork at which this shape of attestation may appear in a block.
    pub fn fork_name(&self) -> ForkName {
        self.to_ref().fork_name()
    }

    /// Slot of the attested-to data, if the data is present.
    pub fn slot(&self) -> Option<Slot> {
        self.data().as_ref().map(|data| data.slot)
    }
}

impl<'a> AttestationRef<'a> {
    pub fn fork_name(self) -> ForkName {
        match self {
            AttestationRef::Base(_) => ForkName::Base,
            AttestationRef::Electra(_) => ForkName::Electra,
        }
    }

    /// Number of bytes in the aggregation bitfield, zero when absent.
    pub fn aggregation_bits_len(self) -> usize {
        self.aggregation_bits().as_ref().map_or(0, Vec::len)
    }
}
