use crate::{test_utils::TestRandom, VoluntaryExit};
use deep_copy_derive::DeepCopy;
use test_random_derive::TestRandom;

/// An exit voluntarily submitted a validator who wishes to withdraw.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default, DeepCopy, TestRandom)]
pub struct SignedVoluntaryExit {
    pub message: Option<VoluntaryExit>,
    pub signature: Option<Vec<u8>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Epoch;
    use deep_copy::DeepCopy;

    deep_copy_tests!(SignedVoluntaryExit);
    deep_copy_tests!(Vec<SignedVoluntaryExit>, test_deep_copy_list);

    #[test]
    fn copies_exit_and_signature() {
        let exit = VoluntaryExit {
            epoch: Epoch::new(256),
            validator_index: 0,
        }
        .into_signed(vec![3; 96]);
        let mut copy = exit.deep_copy();

        assert_eq!(copy, exit);
        copy.signature.as_mut().unwrap()[0] = 4;
        copy.message.as_mut().unwrap().validator_index = 1;
        assert_eq!(exit.signature, Some(vec![3; 96]));
        assert_eq!(exit.message.as_ref().unwrap().validator_index, 0);
    }

    #[test]
    fn absent_message() {
        let exit = SignedVoluntaryExit {
            message: None,
            signature: Some(vec![]),
        };
        assert_eq!(exit.deep_copy().message, None);
        assert_eq!(exit.deep_copy().signature, Some(vec![]));
    }
}
