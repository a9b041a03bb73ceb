use crate::test_utils::TestRandom;
use deep_copy_derive::DeepCopy;
use test_random_derive::TestRandom;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Default, DeepCopy, TestRandom)]
pub struct PendingConsolidation {
    pub source_index: u64,
    pub target_index: u64,
}
