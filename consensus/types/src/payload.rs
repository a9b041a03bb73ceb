use crate::test_utils::TestRandom;
use crate::*;
use deep_copy::DeepCopy;
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Blinded,
    Full,
}

/// A trait representing behavior of an `ExecutionPayload` that either has a full list of transactions
/// or a transaction root in its place.
///
/// Block bodies treat implementors as opaque: copying a body forwards to the payload's own
/// `DeepCopy`, which must not leave any storage shared with the source.
pub trait ExecPayload:
    DeepCopy + TestRandom + Debug + Clone + PartialEq + Default + Send + Sync + 'static
{
    fn block_type() -> BlockType;

    /// We provide a subset of field accessors, for the fields used in `consensus`.
    ///
    /// More fields can be added here if you wish.
    fn parent_hash(&self) -> Option<&[u8]>;
    fn block_hash(&self) -> Option<&[u8]>;
    fn block_number(&self) -> u64;
    fn timestamp(&self) -> u64;
    fn gas_limit(&self) -> u64;
    /// `None` for payload headers, which only carry a transactions root.
    fn transactions(&self) -> Option<&Transactions>;
}

/// Selects, for each post-Bellatrix fork, which execution payload type a block body carries.
pub trait AbstractExecPayload:
    Debug + Clone + Copy + PartialEq + Default + Send + Sync + 'static
{
    type Bellatrix: ExecPayload;
    type Capella: ExecPayload;
    type Deneb: ExecPayload;
    type Electra: ExecPayload;

    fn block_type() -> BlockType;
}

/// Blocks carrying full execution payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FullPayload;

/// Blinded blocks, carrying only execution payload headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlindedPayload;

impl AbstractExecPayload for FullPayload {
    type Bellatrix = ExecutionPayloadBellatrix;
    type Capella = ExecutionPayloadCapella;
    type Deneb = ExecutionPayloadDeneb;
    type Electra = ExecutionPayloadElectra;

    fn block_type() -> BlockType {
        BlockType::Full
    }
}

impl AbstractExecPayload for BlindedPayload {
    type Bellatrix = ExecutionPayloadHeaderBellatrix;
    type Capella = ExecutionPayloadHeaderCapella;
    type Deneb = ExecutionPayloadHeaderDeneb;
    type Electra = ExecutionPayloadHeaderElectra;

    fn block_type() -> BlockType {
        BlockType::Blinded
    }
}

macro_rules! impl_exec_payload {
    ($payload: ident, $block_type: ident, |$this: ident| $transactions: expr) => {
        impl ExecPayload for $payload {
            fn block_type() -> BlockType {
                BlockType::$block_type
            }

            fn parent_hash(&self) -> Option<&[u8]> {
                self.parent_hash.as_deref()
            }

            fn block_hash(&self) -> Option<&[u8]> {
                self.block_hash.as_deref()
            }

            fn block_number(&self) -> u64 {
                self.block_number
            }

            fn timestamp(&self) -> u64 {
                self.timestamp
            }

            fn gas_limit(&self) -> u64 {
                self.gas_limit
            }

            fn transactions(&self) -> Option<&Transactions> {
                let $this = self;
                $transactions
            }
        }
    };
}

impl_exec_payload!(ExecutionPayloadBellatrix, Full, |payload| payload
    .transactions
    .as_deref());
impl_exec_payload!(ExecutionPayloadCapella, Full, |payload| payload
    .transactions
    .as_deref());
impl_exec_payload!(ExecutionPayloadDeneb, Full, |payload| payload
    .transactions
    .as_deref());
impl_exec_payload!(ExecutionPayloadElectra, Full, |payload| payload
    .transactions
    .as_deref());

impl_exec_payload!(ExecutionPayloadHeaderBellatrix, Blinded, |_header| None);
impl_exec_payload!(ExecutionPayloadHeaderCapella, Blinded, |_header| None);
impl_exec_payload!(ExecutionPayloadHeaderDeneb, Blinded, |_header| None);
impl_exec_payload!(ExecutionPayloadHeaderElectra, Blinded, |_header| None);

#[cfg(test)]
mod tests {
    use super::*;

    fn block_types<P: AbstractExecPayload>() -> Vec<BlockType> {
        vec![
            P::block_type(),
            <P::Bellatrix as ExecPayload>::block_type(),
            <P::Capella as ExecPayload>::block_type(),
            <P::Deneb as ExecPayload>::block_type(),
            <P::Electra as ExecPayload>::block_type(),
        ]
    }

    #[test]
    fn payload_selection_is_consistent() {
        assert!(block_types::<FullPayload>()
            .into_iter()
            .all(|block_type| block_type == BlockType::Full));
        assert!(block_types::<BlindedPayload>()
            .into_iter()
            .all(|block_type| block_type == BlockType::Blinded));
    }

    #[test]
    fn headers_have_no_transactions() {
        let header = ExecutionPayloadHeaderDeneb {
            block_number: 11,
            block_hash: Some(vec![0xbb; 32]),
            transactions_root: Some(vec![0xcc; 32]),
            ..Default::default()
        };

        assert_eq!(header.transactions(), None);
        assert_eq!(ExecPayload::block_number(&header), 11);
        assert_eq!(ExecPayload::block_hash(&header), Some(&[0xbb; 32][..]));
    }
}
