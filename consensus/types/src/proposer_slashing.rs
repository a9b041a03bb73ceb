use crate::test_utils::TestRandom;
use crate::SignedBeaconBlockHeader;
use deep_copy_derive::DeepCopy;
use test_random_derive::TestRandom;

/// Two conflicting proposals from the same proposer (validator).
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default, DeepCopy, TestRandom)]
pub struct ProposerSlashing {
    pub signed_header_1: Option<SignedBeaconBlockHeader>,
    pub signed_header_2: Option<SignedBeaconBlockHeader>,
}

impl ProposerSlashing {
    /// Get proposer index, assuming slashing validity has already been checked.
    ///
    /// Returns `None` if the first header is absent.
    pub fn proposer_index(&self) -> Option<u64> {
        self.signed_header_1
            .as_ref()?
            .message
            .as_ref()
            .map(|header| header.proposer_index)
    }
}
