use crate::{test_utils::TestRandom, Epoch, SignedVoluntaryExit};
use deep_copy_derive::DeepCopy;
use test_random_derive::TestRandom;

/// An exit voluntarily submitted a validator who wishes to withdraw.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default, DeepCopy, TestRandom)]
pub struct VoluntaryExit {
    /// Earliest epoch when voluntary exit can be processed.
    pub epoch: Epoch,
    pub validator_index: u64,
}

impl VoluntaryExit {
    /// Attach an already-computed signature.
    pub fn into_signed(self, signature: Vec<u8>) -> SignedVoluntaryExit {
        SignedVoluntaryExit {
            message: Some(self),
            signature: Some(signature),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    deep_copy_tests!(VoluntaryExit);
}
