use crate::test_utils::TestRandom;
use deep_copy_derive::DeepCopy;
use test_random_derive::TestRandom;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Default, DeepCopy, TestRandom)]
pub struct BlsToExecutionChange {
    pub validator_index: u64,
    pub from_bls_pubkey: Option<Vec<u8>>,
    pub to_execution_address: Option<Vec<u8>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    deep_copy_tests!(BlsToExecutionChange);
}
