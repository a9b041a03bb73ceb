use crate::test_utils::TestRandom;
use crate::{SignedBeaconBlockHeader, Slot};
use deep_copy_derive::DeepCopy;
use test_random_derive::TestRandom;

/// A header of a `BeaconBlock`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default, DeepCopy, TestRandom)]
pub struct BeaconBlockHeader {
    pub slot: Slot,
    pub proposer_index: u64,
    pub parent_root: Option<Vec<u8>>,
    pub state_root: Option<Vec<u8>>,
    pub body_root: Option<Vec<u8>>,
}

impl BeaconBlockHeader {
    /// Attach an already-computed signature.
    pub fn into_signed(self, signature: Vec<u8>) -> SignedBeaconBlockHeader {
        SignedBeaconBlockHeader {
            message: Some(self),
            signature: Some(signature),
        }
    }
}
