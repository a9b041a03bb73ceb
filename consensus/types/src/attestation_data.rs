use crate::test_utils::TestRandom;
use crate::{Checkpoint, Slot};
use deep_copy_derive::DeepCopy;
use test_random_derive::TestRandom;

/// The data upon which an attestation is based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, DeepCopy, TestRandom)]
pub struct AttestationData {
    pub slot: Slot,
    pub index: u64,

    // LMD GHOST vote
    pub beacon_block_root: Option<Vec<u8>>,

    // FFG Vote
    pub source: Option<Checkpoint>,
    pub target: Option<Checkpoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Epoch;
    use deep_copy::DeepCopy;

    deep_copy_tests!(AttestationData);

    #[test]
    fn checkpoints_are_copied_recursively() {
        let data = AttestationData {
            slot: Slot::new(65),
            index: 3,
            beacon_block_root: Some(vec![7; 32]),
            source: Some(Checkpoint {
                epoch: Epoch::new(1),
                root: Some(vec![1; 32]),
            }),
            target: None,
        };
        let mut copy = data.deep_copy();

        assert_eq!(copy, data);
        assert_eq!(copy.target, None);

        copy.source.as_mut().unwrap().root.as_mut().unwrap()[0] = 0;
        assert_eq!(data.source.as_ref().unwrap().root, Some(vec![1; 32]));
    }
}
