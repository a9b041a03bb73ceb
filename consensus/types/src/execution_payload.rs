use crate::test_utils::TestRandom;
use crate::{ForkName, Withdrawal};
use deep_copy_derive::DeepCopy;
use std::sync::Arc;
use superstruct::superstruct;
use test_random_derive::TestRandom;

pub type Transaction = Vec<u8>;
pub type Transactions = Vec<Transaction>;

/// An execution-layer block, as embedded in a beacon block body.
///
/// Transactions sit behind an `Arc`, so `Clone` is cheap and shares them between clones.
/// `DeepCopy` re-allocates the whole list.
#[superstruct(
    variants(Bellatrix, Capella, Deneb, Electra),
    variant_attributes(derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Default,
        DeepCopy,
        TestRandom
    )),
    ref_attributes(derive(Debug, PartialEq)),
    cast_error(ty = "crate::Error", expr = "crate::Error::IncorrectVariant"),
    partial_getter_error(ty = "crate::Error", expr = "crate::Error::IncorrectVariant")
)]
#[derive(Debug, Clone, PartialEq, Eq, DeepCopy)]
pub struct ExecutionPayload {
    pub parent_hash: Option<Vec<u8>>,
    pub fee_recipient: Option<Vec<u8>>,
    pub state_root: Option<Vec<u8>>,
    pub receipts_root: Option<Vec<u8>>,
    pub logs_bloom: Option<Vec<u8>>,
    pub prev_randao: Option<Vec<u8>>,
    #[superstruct(getter(copy))]
    pub block_number: u64,
    #[superstruct(getter(copy))]
    pub gas_limit: u64,
    #[superstruct(getter(copy))]
    pub gas_used: u64,
    #[superstruct(getter(copy))]
    pub timestamp: u64,
    pub extra_data: Option<Vec<u8>>,
    /// Little-endian `U256`.
    pub base_fee_per_gas: Option<Vec<u8>>,
    pub block_hash: Option<Vec<u8>>,
    pub transactions: Option<Arc<Transactions>>,
    #[superstruct(only(Capella, Deneb, Electra))]
    pub withdrawals: Option<Vec<Withdrawal>>,
    #[superstruct(only(Deneb, Electra), partial_getter(copy))]
    pub blob_gas_used: u64,
    #[superstruct(only(Deneb, Electra), partial_getter(copy))]
    pub excess_blob_gas: u64,
}

impl<'a> ExecutionPayloadRef<'a> {
    pub fn fork_name(self) -> ForkName {
        match self {
            ExecutionPayloadRef::Bellatrix(_) => ForkName::Bellatrix,
            ExecutionPayloadRef::Capella(_) => ForkName::Capella,
            ExecutionPayloadRef::Deneb(_) => ForkName::Deneb,
            ExecutionPayloadRef::Electra(_) => ForkName::Electra,
        }
    }

    pub fn transactions_len(self) -> usize {
        self.transactions().as_ref().map_or(0, |transactions| transactions.len())
    }
}

impl ExecutionPayload {
    pub fn fork_name(&self) -> ForkName {
        self.to_ref().fork_name()
    }
}
