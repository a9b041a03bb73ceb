use crate::test_utils::TestRandom;
use deep_copy_derive::DeepCopy;
use test_random_derive::TestRandom;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Default, DeepCopy, TestRandom)]
pub struct PendingBalanceDeposit {
    pub index: u64,
    pub amount: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use deep_copy::DeepCopy;

    deep_copy_tests!(PendingBalanceDeposit);
    deep_copy_tests!(Vec<PendingBalanceDeposit>, test_deep_copy_list);

    #[test]
    fn empty_list_stays_present() {
        let deposits: Option<Vec<PendingBalanceDeposit>> = Some(vec![]);
        assert_eq!(deposits.deep_copy(), Some(vec![]));
    }
}
