use crate::{test_utils::TestRandom, BeaconBlockHeader};
use deep_copy_derive::DeepCopy;
use test_random_derive::TestRandom;

/// A signed header of a `BeaconBlock`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default, DeepCopy, TestRandom)]
pub struct SignedBeaconBlockHeader {
    pub message: Option<BeaconBlockHeader>,
    pub signature: Option<Vec<u8>>,
}
