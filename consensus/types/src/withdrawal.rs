use crate::test_utils::TestRandom;
use deep_copy_derive::DeepCopy;
use test_random_derive::TestRandom;

/// A withdrawal from the consensus layer, carried by Capella and later execution payloads.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default, DeepCopy, TestRandom)]
pub struct Withdrawal {
    pub index: u64,
    pub validator_index: u64,
    pub address: Option<Vec<u8>>,
    pub amount: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    deep_copy_tests!(Withdrawal);
}
