use crate::test_utils::TestRandom;
use crate::*;
use deep_copy_derive::DeepCopy;
use std::marker::PhantomData;
use superstruct::superstruct;
use test_random_derive::TestRandom;

pub const GRAFFITI_BYTES_LEN: usize = 32;

/// The body of a `BeaconChain` block, containing operations.
///
/// This *superstruct* abstracts over the hard-fork. Each variant carries exactly the fields its
/// fork defines, and `Payload` selects between full execution payloads and blinded headers.
#[superstruct(
    variants(Base, Altair, Bellatrix, Capella, Deneb, Electra),
    variant_attributes(derive(Debug, Clone, PartialEq, Default, DeepCopy, TestRandom)),
    ref_attributes(derive(Debug, PartialEq)),
    cast_error(ty = "Error", expr = "Error::IncorrectVariant"),
    partial_getter_error(ty = "Error", expr = "Error::IncorrectVariant")
)]
#[derive(Debug, Clone, PartialEq, DeepCopy)]
pub struct BeaconBlockBody<Payload: AbstractExecPayload = FullPayload> {
    pub randao_reveal: Option<Vec<u8>>,
    pub eth1_data: Option<Eth1Data>,
    pub graffiti: Option<Vec<u8>>,
    pub proposer_slashings: Option<Vec<ProposerSlashing>>,
    #[superstruct(
        only(Base, Altair, Bellatrix, Capella, Deneb),
        partial_getter(rename = "attester_slashings_base")
    )]
    pub attester_slashings: Option<Vec<AttesterSlashingBase>>,
    #[superstruct(only(Electra), partial_getter(rename = "attester_slashings_electra"))]
    pub attester_slashings: Option<Vec<AttesterSlashingElectra>>,
    #[superstruct(
        only(Base, Altair, Bellatrix, Capella, Deneb),
        partial_getter(rename = "attestations_base")
    )]
    pub attestations: Option<Vec<AttestationBase>>,
    #[superstruct(only(Electra), partial_getter(rename = "attestations_electra"))]
    pub attestations: Option<Vec<AttestationElectra>>,
    pub deposits: Option<Vec<Deposit>>,
    pub voluntary_exits: Option<Vec<SignedVoluntaryExit>>,
    #[superstruct(only(Altair, Bellatrix, Capella, Deneb, Electra))]
    pub sync_aggregate: Option<SyncAggregate>,
    #[superstruct(only(Bellatrix), partial_getter(rename = "execution_payload_bellatrix"))]
    pub execution_payload: Option<Payload::Bellatrix>,
    #[superstruct(only(Capella), partial_getter(rename = "execution_payload_capella"))]
    pub execution_payload: Option<Payload::Capella>,
    #[superstruct(only(Deneb), partial_getter(rename = "execution_payload_deneb"))]
    pub execution_payload: Option<Payload::Deneb>,
    #[superstruct(only(Electra), partial_getter(rename = "execution_payload_electra"))]
    pub execution_payload: Option<Payload::Electra>,
    #[superstruct(only(Capella, Deneb, Electra))]
    pub bls_to_execution_changes: Option<Vec<SignedBlsToExecutionChange>>,
    #[superstruct(only(Deneb, Electra))]
    pub blob_kzg_commitments: Option<Vec<Option<Vec<u8>>>>,
    #[superstruct(only(Base, Altair))]
    #[test_random(default)]
    pub _phantom: PhantomData<Payload>,
}

impl<Payload: AbstractExecPayload> BeaconBlockBody<Payload> {
    /// Returns a body for `fork_name` in which every field is present and every list is empty.
    ///
    /// Post-Bellatrix bodies get a default execution payload (or header).
    pub fn empty(fork_name: ForkName) -> Self {
        let mut body = match fork_name {
            ForkName::Base => Self::Base(<_>::default()),
            ForkName::Altair => Self::Altair(<_>::default()),
            ForkName::Bellatrix => Self::Bellatrix(<_>::default()),
            ForkName::Capella => Self::Capella(<_>::default()),
            ForkName::Deneb => Self::Deneb(<_>::default()),
            ForkName::Electra => Self::Electra(<_>::default()),
        };

        *body.randao_reveal_mut() = Some(vec![]);
        *body.eth1_data_mut() = Some(Eth1Data::default());
        *body.graffiti_mut() = Some(vec![0; GRAFFITI_BYTES_LEN]);
        *body.proposer_slashings_mut() = Some(vec![]);
        *body.deposits_mut() = Some(vec![]);
        *body.voluntary_exits_mut() = Some(vec![]);

        if let Ok(slashings) = body.attester_slashings_base_mut() {
            *slashings = Some(vec![]);
        }
        if let Ok(slashings) = body.attester_slashings_electra_mut() {
            *slashings = Some(vec![]);
        }
        if let Ok(attestations) = body.attestations_base_mut() {
            *attestations = Some(vec![]);
        }
        if let Ok(attestations) = body.attestations_electra_mut() {
            *attestations = Some(vec![]);
        }
        if let Ok(sync_aggregate) = body.sync_aggregate_mut() {
            *sync_aggregate = Some(SyncAggregate::default());
        }
        if let Ok(payload) = body.execution_payload_bellatrix_mut() {
            *payload = Some(<_>::default());
        }
        if let Ok(payload) = body.execution_payload_capella_mut() {
            *payload = Some(<_>::default());
        }
        if let Ok(payload) = body.execution_payload_deneb_mut() {
            *payload = Some(<_>::default());
        }
        if let Ok(payload) = body.execution_payload_electra_mut() {
            *payload = Some(<_>::default());
        }
        if let Ok(changes) = body.bls_to_execution_changes_mut() {
            *changes = Some(vec![]);
        }
        if let Ok(commitments) = body.blob_kzg_commitments_mut() {
            *commitments = Some(vec![]);
        }

        body
    }

    pub fn fork_name(&self) -> ForkName {
        self.to_ref().fork_name()
    }

    pub fn execution_block_number(&self) -> Option<u64> {
        self.to_ref().execution_block_number()
    }
}

impl<'a, Payload: AbstractExecPayload> BeaconBlockBodyRef<'a, Payload> {
    /// Get the fork_name of this object
    pub fn fork_name(self) -> ForkName {
        match self {
            BeaconBlockBodyRef::Base { .. } => ForkName::Base,
            BeaconBlockBodyRef::Altair { .. } => ForkName::Altair,
            BeaconBlockBodyRef::Bellatrix { .. } => ForkName::Bellatrix,
            BeaconBlockBodyRef::Capella { .. } => ForkName::Capella,
            BeaconBlockBodyRef::Deneb { .. } => ForkName::Deneb,
            BeaconBlockBodyRef::Electra { .. } => ForkName::Electra,
        }
    }

    pub fn attestations(self) -> Box<dyn Iterator<Item = AttestationRef<'a>> + 'a> {
        match self {
            BeaconBlockBodyRef::Base(body) => {
                Box::new(body.attestations.iter().flatten().map(AttestationRef::Base))
            }
            BeaconBlockBodyRef::Altair(body) => {
                Box::new(body.attestations.iter().flatten().map(AttestationRef::Base))
            }
            BeaconBlockBodyRef::Bellatrix(body) => {
                Box::new(body.attestations.iter().flatten().map(AttestationRef::Base))
            }
            BeaconBlockBodyRef::Capella(body) => {
                Box::new(body.attestations.iter().flatten().map(AttestationRef::Base))
            }
            BeaconBlockBodyRef::Deneb(body) => {
                Box::new(body.attestations.iter().flatten().map(AttestationRef::Base))
            }
            BeaconBlockBodyRef::Electra(body) => Box::new(
                body.attestations
                    .iter()
                    .flatten()
                    .map(AttestationRef::Electra),
            ),
        }
    }

    pub fn attester_slashings(self) -> Box<dyn Iterator<Item = AttesterSlashingRef<'a>> + 'a> {
        match self {
            BeaconBlockBodyRef::Base(body) => Box::new(
                body.attester_slashings
                    .iter()
                    .flatten()
                    .map(AttesterSlashingRef::Base),
            ),
            BeaconBlockBodyRef::Altair(body) => Box::new(
                body.attester_slashings
                    .iter()
                    .flatten()
                    .map(AttesterSlashingRef::Base),
            ),
            BeaconBlockBodyRef::Bellatrix(body) => Box::new(
                body.attester_slashings
                    .iter()
                    .flatten()
                    .map(AttesterSlashingRef::Base),
            ),
            BeaconBlockBodyRef::Capella(body) => Box::new(
                body.attester_slashings
                    .iter()
                    .flatten()
                    .map(AttesterSlashingRef::Base),
            ),
            BeaconBlockBodyRef::Deneb(body) => Box::new(
                body.attester_slashings
                    .iter()
                    .flatten()
                    .map(AttesterSlashingRef::Base),
            ),
            BeaconBlockBodyRef::Electra(body) => Box::new(
                body.attester_slashings
                    .iter()
                    .flatten()
                    .map(AttesterSlashingRef::Electra),
            ),
        }
    }

    /// Number of attestations in the body, zero when the list is absent.
    pub fn attestations_len(self) -> usize {
        match self {
            BeaconBlockBodyRef::Base(body) => body.attestations.as_ref().map_or(0, Vec::len),
            BeaconBlockBodyRef::Altair(body) => body.attestations.as_ref().map_or(0, Vec::len),
            BeaconBlockBodyRef::Bellatrix(body) => body.attestations.as_ref().map_or(0, Vec::len),
            BeaconBlockBodyRef::Capella(body) => body.attestations.as_ref().map_or(0, Vec::len),
            BeaconBlockBodyRef::Deneb(body) => body.attestations.as_ref().map_or(0, Vec::len),
            BeaconBlockBodyRef::Electra(body) => body.attestations.as_ref().map_or(0, Vec::len),
        }
    }

    /// Block number of the execution payload (or header), if this fork has one and it is present.
    pub fn execution_block_number(self) -> Option<u64> {
        match self {
            BeaconBlockBodyRef::Base(_) | BeaconBlockBodyRef::Altair(_) => None,
            BeaconBlockBodyRef::Bellatrix(body) => {
                body.execution_payload.as_ref().map(ExecPayload::block_number)
            }
            BeaconBlockBodyRef::Capella(body) => {
                body.execution_payload.as_ref().map(ExecPayload::block_number)
            }
            BeaconBlockBodyRef::Deneb(body) => {
                body.execution_payload.as_ref().map(ExecPayload::block_number)
            }
            BeaconBlockBodyRef::Electra(body) => {
                body.execution_payload.as_ref().map(ExecPayload::block_number)
            }
        }
    }

    pub fn has_execution_payload(self) -> bool {
        self.execution_block_number().is_some()
    }
}
