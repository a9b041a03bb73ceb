use crate::test_utils::TestRandom;
use crate::DepositData;
use deep_copy::{copy_bytes_list, DeepCopy};
use test_random_derive::TestRandom;

pub const DEPOSIT_TREE_DEPTH: usize = 32;

/// A deposit to potentially become a beacon chain validator.
///
/// `proof` normally holds `DEPOSIT_TREE_DEPTH + 1` branch nodes. The length is not checked here;
/// a malformed proof is carried through as-is.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default, TestRandom)]
pub struct Deposit {
    pub proof: Option<Vec<Option<Vec<u8>>>>,
    pub data: Option<DepositData>,
}

impl DeepCopy for Deposit {
    fn deep_copy(&self) -> Self {
        Self {
            proof: copy_bytes_list(self.proof.as_deref()),
            data: self.data.deep_copy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    deep_copy_tests!(Deposit);
    deep_copy_tests!(Vec<Deposit>, test_deep_copy_list);

    fn deposit_with_proof(proof: Option<Vec<Option<Vec<u8>>>>) -> Deposit {
        Deposit {
            proof,
            data: Some(DepositData {
                pubkey: Some(vec![1; 48]),
                withdrawal_credentials: Some(vec![0; 32]),
                amount: 32_000_000_000,
                signature: Some(vec![2; 96]),
            }),
        }
    }

    #[test]
    fn full_proof() {
        let proof = (0..=DEPOSIT_TREE_DEPTH)
            .map(|i| Some(vec![i as u8; 32]))
            .collect::<Vec<_>>();
        let deposit = deposit_with_proof(Some(proof));
        let mut copy = deposit.deep_copy();

        assert_eq!(copy, deposit);
        assert_eq!(copy.proof.as_ref().unwrap().len(), DEPOSIT_TREE_DEPTH + 1);

        copy.proof.as_mut().unwrap()[5].as_mut().unwrap()[0] = 0xff;
        assert_eq!(deposit.proof.as_ref().unwrap()[5], Some(vec![5; 32]));
    }

    #[test]
    fn proof_absence_is_preserved() {
        assert_eq!(deposit_with_proof(None).deep_copy().proof, None);
        assert_eq!(
            deposit_with_proof(Some(vec![])).deep_copy().proof,
            Some(vec![])
        );

        let sparse = deposit_with_proof(Some(vec![None, Some(vec![])]));
        assert_eq!(
            sparse.deep_copy().proof,
            Some(vec![None, Some(vec![])])
        );
    }

    #[test]
    fn absent_data() {
        let deposit = Deposit {
            proof: Some(vec![Some(vec![9; 32])]),
            data: None,
        };
        assert_eq!(deposit.deep_copy().data, None);
    }
}
