use crate::test_utils::TestRandom;
use deep_copy_derive::DeepCopy;
use test_random_derive::TestRandom;

/// Contains data obtained from the Eth1 chain.
#[derive(Debug, PartialEq, Clone, Default, Eq, Hash, DeepCopy, TestRandom)]
pub struct Eth1Data {
    pub deposit_root: Option<Vec<u8>>,
    pub deposit_count: u64,
    pub block_hash: Option<Vec<u8>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use deep_copy::DeepCopy;

    deep_copy_tests!(Eth1Data);

    #[test]
    fn absent_roots_stay_absent() {
        let data = Eth1Data {
            deposit_root: None,
            deposit_count: 0,
            block_hash: Some(vec![]),
        };
        let copy = data.deep_copy();

        assert_eq!(copy.deposit_root, None);
        assert_eq!(copy.block_hash, Some(vec![]));
        assert_eq!(copy.deposit_count, 0);
    }
}
