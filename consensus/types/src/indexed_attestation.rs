use crate::test_utils::TestRandom;
use crate::AttestationData;
use deep_copy_derive::DeepCopy;
use superstruct::superstruct;
use test_random_derive::TestRandom;

/// Details an attestation that can be slashable.
///
/// To be included in an `AttesterSlashing`. The Electra variant is indexed over the whole slot
/// rather than a single committee, so its index list may be much longer.
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
pub struct IndexedAttestation {
    /// Lists validator registry indices, not committee indices.
    pub attesting_indices: Option<Vec<u64>>,
    pub data: Option<AttestationData>,
    pub signature: Option<Vec<u8>>,
}

impl<'a> IndexedAttestationRef<'a> {
    pub fn attesting_indices_len(self) -> usize {
        self.attesting_indices().as_ref().map_or(0, Vec::len)
    }

    pub fn attesting_indices_iter(self) -> impl Iterator<Item = &'a u64> {
        self.attesting_indices().iter().flatten()
    }
}
