use crate::test_utils::TestRandom;
use crate::Epoch;
use deep_copy_derive::DeepCopy;
use test_random_derive::TestRandom;

/// Casper FFG checkpoint, used in attestations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash, DeepCopy, TestRandom)]
pub struct Checkpoint {
    pub epoch: Epoch,
    pub root: Option<Vec<u8>>,
}
