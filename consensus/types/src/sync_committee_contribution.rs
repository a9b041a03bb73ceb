use crate::test_utils::TestRandom;
use crate::{Slot, SyncCommitteeMessage};
use deep_copy::copy_bytes;
use deep_copy_derive::DeepCopy;
use test_random_derive::TestRandom;

/// An aggregation of `SyncCommitteeMessage`s from one sync subcommittee.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, DeepCopy, TestRandom)]
pub struct SyncCommitteeContribution {
    pub slot: Slot,
    pub beacon_block_root: Option<Vec<u8>>,
    pub subcommittee_index: u64,
    pub aggregation_bits: Option<Vec<u8>>,
    pub signature: Option<Vec<u8>>,
}

impl SyncCommitteeContribution {
    /// Create a contribution containing a single message.
    ///
    /// `position` is the index of the message's author within the subcommittee and
    /// `subcommittee_size` the number of aggregation bits.
    pub fn from_message(
        message: &SyncCommitteeMessage,
        subcommittee_index: u64,
        position: usize,
        subcommittee_size: usize,
    ) -> Option<Self> {
        if position >= subcommittee_size {
            return None;
        }

        let mut bits = vec![0; subcommittee_size.div_ceil(8)];
        bits[position / 8] |= 1 << (position % 8);

        Some(Self {
            slot: message.slot,
            beacon_block_root: copy_bytes(message.beacon_block_root.as_deref()),
            subcommittee_index,
            aggregation_bits: Some(bits),
            signature: copy_bytes(message.signature.as_deref()),
        })
    }
}
