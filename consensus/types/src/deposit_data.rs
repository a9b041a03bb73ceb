use crate::test_utils::TestRandom;
use deep_copy_derive::DeepCopy;
use test_random_derive::TestRandom;

/// The data supplied by the user to the deposit contract.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default, DeepCopy, TestRandom)]
pub struct DepositData {
    pub pubkey: Option<Vec<u8>>,
    pub withdrawal_credentials: Option<Vec<u8>>,
    pub amount: u64,
    pub signature: Option<Vec<u8>>,
}
