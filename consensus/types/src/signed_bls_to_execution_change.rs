use crate::test_utils::TestRandom;
use crate::BlsToExecutionChange;
use deep_copy_derive::DeepCopy;
use test_random_derive::TestRandom;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Default, DeepCopy, TestRandom)]
pub struct SignedBlsToExecutionChange {
    pub message: Option<BlsToExecutionChange>,
    pub signature: Option<Vec<u8>>,
}
