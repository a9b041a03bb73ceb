use crate::test_utils::TestRandom;
use deep_copy_derive::DeepCopy;
use test_random_derive::TestRandom;

#[derive(Debug, Clone, PartialEq, Eq, Default, Hash, DeepCopy, TestRandom)]
pub struct SyncAggregate {
    pub sync_committee_bits: Option<Vec<u8>>,
    pub sync_committee_signature: Option<Vec<u8>>,
}

impl SyncAggregate {
    /// An aggregate with no participants: all-zero bits and the infinity signature.
    pub fn empty(sync_committee_size: usize) -> Self {
        let mut signature = vec![0; 96];
        signature[0] = 0xc0;
        Self {
            sync_committee_bits: Some(vec![0; sync_committee_size.div_ceil(8)]),
            sync_committee_signature: Some(signature),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deep_copy::DeepCopy;

    deep_copy_tests!(SyncAggregate);

    #[test]
    fn empty_aggregate() {
        let aggregate = SyncAggregate::empty(512);
        assert_eq!(aggregate.sync_committee_bits.as_ref().unwrap().len(), 64);
        assert!(aggregate
            .sync_committee_bits
            .as_ref()
            .unwrap()
            .iter()
            .all(|byte| *byte == 0));
        assert_eq!(aggregate.deep_copy(), aggregate);
    }

    #[test]
    fn absent_signature_stays_absent() {
        let aggregate = SyncAggregate {
            sync_committee_bits: Some(vec![0b1011, 0xff]),
            sync_committee_signature: None,
        };
        let copy = aggregate.deep_copy();
        assert_eq!(copy.sync_committee_signature, None);
        assert_ne!(
            copy.sync_committee_bits.as_ref().unwrap().as_ptr(),
            aggregate.sync_committee_bits.as_ref().unwrap().as_ptr()
        );
    }
}
