use crate::test_utils::TestRandom;
use crate::{IndexedAttestationBase, IndexedAttestationElectra, IndexedAttestationRef};
use deep_copy_derive::DeepCopy;
use superstruct::superstruct;
use test_random_derive::TestRandom;

/// Two conflicting attestations.
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
pub struct AttesterSlashing {
    #[superstruct(only(Base), partial_getter(rename = "attestation_1_base"))]
    pub attestation_1: Option<IndexedAttestationBase>,
    #[superstruct(only(Electra), partial_getter(rename = "attestation_1_electra"))]
    pub attestation_1: Option<IndexedAttestationElectra>,
    #[superstruct(only(Base), partial_getter(rename = "attestation_2_base"))]
    pub attestation_2: Option<IndexedAttestationBase>,
    #[superstruct(only(Electra), partial_getter(rename = "attestation_2_electra"))]
    pub attestation_2: Option<IndexedAttestationElectra>,
}

impl<'a> AttesterSlashingRef<'a> {
    pub fn attestation_1(self) -> Option<IndexedAttestationRef<'a>> {
        match self {
            AttesterSlashingRef::Base(slashing) => slashing
                .attestation_1
                .as_ref()
                .map(IndexedAttestationRef::Base),
            AttesterSlashingRef::Electra(slashing) => slashing
                .attestation_1
                .as_ref()
                .map(IndexedAttestationRef::Electra),
        }
    }

    pub fn attestation_2(self) -> Option<IndexedAttestationRef<'a>> {
        match self {
            AttesterSlashingRef::Base(slashing) => slashing
                .attestation_2
                .as_ref()
                .map(IndexedAttestationRef::Base),
            AttesterSlashingRef::Electra(slashing) => slashing
                .attestation_2
                .as_ref()
                .map(IndexedAttestationRef::Electra),
        }
    }
}
