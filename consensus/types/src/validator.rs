use crate::{test_utils::TestRandom, Epoch};
use deep_copy::DeepCopy;
use test_random_derive::TestRandom;

/// Information about a `BeaconChain` validator.
///
/// Unlike most records, a validator's key material is never absent, so its buffers are plain
/// `Vec<u8>` and copying it is total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, TestRandom)]
pub struct Validator {
    pub pubkey: Vec<u8>,
    pub withdrawal_credentials: Vec<u8>,
    pub effective_balance: u64,
    pub slashed: bool,
    pub activation_eligibility_epoch: Epoch,
    pub activation_epoch: Epoch,
    pub exit_epoch: Epoch,
    pub withdrawable_epoch: Epoch,
}

impl DeepCopy for Validator {
    fn deep_copy(&self) -> Self {
        Self {
            pubkey: self.pubkey.to_vec(),
            withdrawal_credentials: self.withdrawal_credentials.to_vec(),
            effective_balance: self.effective_balance,
            slashed: self.slashed,
            activation_eligibility_epoch: self.activation_eligibility_epoch,
            activation_epoch: self.activation_epoch,
            exit_epoch: self.exit_epoch,
            withdrawable_epoch: self.withdrawable_epoch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    deep_copy_tests!(Validator);

    #[test]
    fn epochs_copied_by_value() {
        let validator = Validator {
            activation_epoch: Epoch::new(10),
            exit_epoch: Epoch::new(u64::MAX),
            ..Validator::default()
        };
        let mut copy = validator.deep_copy();

        copy.exit_epoch = Epoch::new(12);
        assert_eq!(validator.exit_epoch, Epoch::new(u64::MAX));
        assert_eq!(copy.activation_epoch, Epoch::new(10));
    }

    #[test]
    fn copy_does_not_share_keys() {
        let validator = Validator {
            pubkey: vec![0xab; 48],
            withdrawal_credentials: vec![],
            effective_balance: 32_000_000_000,
            slashed: true,
            ..Validator::default()
        };
        let mut copy = validator.deep_copy();

        assert_eq!(copy, validator);
        assert_ne!(copy.pubkey.as_ptr(), validator.pubkey.as_ptr());

        copy.pubkey[0] = 0;
        copy.withdrawal_credentials.push(1);
        assert_eq!(validator.pubkey, vec![0xab; 48]);
        assert!(validator.withdrawal_credentials.is_empty());
    }
}
