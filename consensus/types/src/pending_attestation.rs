use crate::test_utils::TestRandom;
use crate::AttestationData;
use deep_copy_derive::DeepCopy;
use test_random_derive::TestRandom;

/// An attestation that has been included in the state but not yet fully processed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, DeepCopy, TestRandom)]
pub struct PendingAttestation {
    pub aggregation_bits: Option<Vec<u8>>,
    pub data: Option<AttestationData>,
    pub inclusion_delay: u64,
    pub proposer_index: u64,
}
