//! Ethereum consensus-layer records and their fork-versioned block families.
//!
//! Every record implements `deep_copy::DeepCopy`, producing a replica that shares no storage with
//! its source so that it can be handed to another processing stage and mutated independently.

#[macro_use]
pub mod test_utils;

pub mod attestation;
pub mod attestation_data;
pub mod attester_slashing;
pub mod beacon_block;
pub mod beacon_block_body;
pub mod beacon_block_header;
pub mod blinded_beacon_block;
pub mod bls_to_execution_change;
pub mod checkpoint;
pub mod deposit;
pub mod deposit_data;
pub mod errors;
pub mod eth1_data;
pub mod execution_payload;
pub mod execution_payload_header;
pub mod fork_name;
pub mod historical_summary;
pub mod indexed_attestation;
pub mod payload;
pub mod pending_attestation;
pub mod pending_balance_deposit;
pub mod pending_consolidation;
pub mod pending_partial_withdrawal;
pub mod proposer_slashing;
pub mod signed_beacon_block;
pub mod signed_beacon_block_header;
pub mod signed_bls_to_execution_change;
pub mod signed_voluntary_exit;
pub mod slot_epoch;
pub mod sync_aggregate;
pub mod sync_committee_contribution;
pub mod sync_committee_message;
pub mod validator;
pub mod voluntary_exit;
pub mod withdrawal;

pub use crate::attestation::{Attestation, AttestationBase, AttestationElectra, AttestationRef};
pub use crate::attestation_data::AttestationData;
pub use crate::attester_slashing::{
    AttesterSlashing, AttesterSlashingBase, AttesterSlashingElectra, AttesterSlashingRef,
};
pub use crate::beacon_block::{
    BeaconBlock, BeaconBlockAltair, BeaconBlockBase, BeaconBlockBellatrix, BeaconBlockCapella,
    BeaconBlockDeneb, BeaconBlockElectra, BeaconBlockRef, BeaconBlockRefMut,
};
pub use crate::beacon_block_body::{
    BeaconBlockBody, BeaconBlockBodyAltair, BeaconBlockBodyBase, BeaconBlockBodyBellatrix,
    BeaconBlockBodyCapella, BeaconBlockBodyDeneb, BeaconBlockBodyElectra, BeaconBlockBodyRef,
    BeaconBlockBodyRefMut,
};
pub use crate::beacon_block_header::BeaconBlockHeader;
pub use crate::blinded_beacon_block::*;
pub use crate::bls_to_execution_change::BlsToExecutionChange;
pub use crate::checkpoint::Checkpoint;
pub use crate::deposit::{Deposit, DEPOSIT_TREE_DEPTH};
pub use crate::deposit_data::DepositData;
pub use crate::errors::Error;
pub use crate::eth1_data::Eth1Data;
pub use crate::execution_payload::{
    ExecutionPayload, ExecutionPayloadBellatrix, ExecutionPayloadCapella, ExecutionPayloadDeneb,
    ExecutionPayloadElectra, ExecutionPayloadRef, Transaction, Transactions,
};
pub use crate::execution_payload_header::{
    ExecutionPayloadHeader, ExecutionPayloadHeaderBellatrix, ExecutionPayloadHeaderCapella,
    ExecutionPayloadHeaderDeneb, ExecutionPayloadHeaderElectra, ExecutionPayloadHeaderRef,
};
pub use crate::fork_name::ForkName;
pub use crate::historical_summary::HistoricalSummary;
pub use crate::indexed_attestation::{
    IndexedAttestation, IndexedAttestationBase, IndexedAttestationElectra, IndexedAttestationRef,
};
pub use crate::payload::{AbstractExecPayload, BlindedPayload, BlockType, ExecPayload, FullPayload};
pub use crate::pending_attestation::PendingAttestation;
pub use crate::pending_balance_deposit::PendingBalanceDeposit;
pub use crate::pending_consolidation::PendingConsolidation;
pub use crate::pending_partial_withdrawal::PendingPartialWithdrawal;
pub use crate::proposer_slashing::ProposerSlashing;
pub use crate::signed_beacon_block::{
    SignedBeaconBlock, SignedBeaconBlockAltair, SignedBeaconBlockBase, SignedBeaconBlockBellatrix,
    SignedBeaconBlockCapella, SignedBeaconBlockDeneb, SignedBeaconBlockElectra,
};
pub use crate::signed_beacon_block_header::SignedBeaconBlockHeader;
pub use crate::signed_bls_to_execution_change::SignedBlsToExecutionChange;
pub use crate::signed_voluntary_exit::SignedVoluntaryExit;
pub use crate::slot_epoch::{Epoch, Slot};
pub use crate::sync_aggregate::SyncAggregate;
pub use crate::sync_committee_contribution::SyncCommitteeContribution;
pub use crate::sync_committee_message::SyncCommitteeMessage;
pub use crate::validator::Validator;
pub use crate::voluntary_exit::VoluntaryExit;
pub use crate::withdrawal::Withdrawal;

pub use deep_copy::{copy_bytes, copy_bytes_list, DeepCopy};
