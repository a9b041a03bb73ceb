use crate::test_utils::TestRandom;
use crate::Epoch;
use deep_copy_derive::DeepCopy;
use test_random_derive::TestRandom;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Default, DeepCopy, TestRandom)]
pub struct PendingPartialWithdrawal {
    pub index: u64,
    pub amount: u64,
    pub withdrawable_epoch: Epoch,
}

#[cfg(test)]
mod tests {
    use super::*;
    use deep_copy::DeepCopy;

    deep_copy_tests!(PendingPartialWithdrawal);
    deep_copy_tests!(Vec<PendingPartialWithdrawal>, test_deep_copy_list);

    #[test]
    fn list_copy() {
        let withdrawals = Some(vec![
            PendingPartialWithdrawal {
                index: 4,
                amount: 1_000_000_000,
                withdrawable_epoch: Epoch::new(10),
            },
            PendingPartialWithdrawal::default(),
        ]);
        let copy = withdrawals.deep_copy();

        assert_eq!(copy, withdrawals);
        assert_eq!(copy.unwrap()[1].amount, 0);
    }
}
