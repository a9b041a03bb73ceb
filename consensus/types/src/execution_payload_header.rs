use crate::test_utils::TestRandom;
use crate::ForkName;
use deep_copy_derive::DeepCopy;
use superstruct::superstruct;
use test_random_derive::TestRandom;

/// Summary of an execution payload, with transactions and withdrawals replaced by their roots.
///
/// Carried by blinded blocks.
#[superstruct(
    variants(Bellatrix, Capella, Deneb, Electra),
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
pub struct ExecutionPayloadHeader {
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
    pub base_fee_per_gas: Option<Vec<u8>>,
    pub block_hash: Option<Vec<u8>>,
    pub transactions_root: Option<Vec<u8>>,
    #[superstruct(only(Capella, Deneb, Electra))]
    pub withdrawals_root: Option<Vec<u8>>,
    #[superstruct(only(Deneb, Electra), partial_getter(copy))]
    pub blob_gas_used: u64,
    #[superstruct(only(Deneb, Electra), partial_getter(copy))]
    pub excess_blob_gas: u64,
}

impl<'a> ExecutionPayloadHeaderRef<'a> {
    pub fn fork_name(self) -> ForkName {
        match self {
            ExecutionPayloadHeaderRef::Bellatrix(_) => ForkName::Bellatrix,
            ExecutionPayloadHeaderRef::Capella(_) => ForkName::Capella,
            ExecutionPayloadHeaderRef::Deneb(_) => ForkName::Deneb,
            ExecutionPayloadHeaderRef::Electra(_) => ForkName::Electra,
        }
    }
}

impl ExecutionPayloadHeader {
    pub fn fork_name(&self) -> ForkName {
        self.to_ref().fork_name()
    }
}
