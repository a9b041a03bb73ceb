use crate::test_utils::TestRandom;
use crate::Slot;
use deep_copy_derive::DeepCopy;
use test_random_derive::TestRandom;

/// The data upon which a `SyncCommitteeContribution` is based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, DeepCopy, TestRandom)]
pub struct SyncCommitteeMessage {
    pub slot: Slot,
    pub beacon_block_root: Option<Vec<u8>>,
    pub validator_index: u64,
    // Signature by the validator over `beacon_block_root`.
    pub signature: Option<Vec<u8>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    deep_copy_tests!(SyncCommitteeMessage);
}
