use crate::test_utils::TestRandom;
use deep_copy_derive::DeepCopy;
use test_random_derive::TestRandom;

/// Summary roots of a past period of blocks and states, kept once the period leaves the state's
/// ring buffers.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default, DeepCopy, TestRandom)]
pub struct HistoricalSummary {
    pub block_summary_root: Option<Vec<u8>>,
    pub state_summary_root: Option<Vec<u8>>,
}
