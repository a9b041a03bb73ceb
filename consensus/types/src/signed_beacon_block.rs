use crate::test_utils::TestRandom;
use crate::*;
use deep_copy_derive::DeepCopy;
use superstruct::superstruct;
use test_random_derive::TestRandom;

/// A `BeaconBlock` and a signature from its proposer.
#[superstruct(
    variants(Base, Altair, Bellatrix, Capella, Deneb, Electra),
    variant_attributes(derive(Debug, PartialEq, Clone, Default, DeepCopy, TestRandom)),
    cast_error(ty = "Error", expr = "Error::IncorrectVariant"),
    partial_getter_error(ty = "Error", expr = "Error::IncorrectVariant")
)]
#[derive(Debug, PartialEq, Clone, DeepCopy)]
pub struct SignedBeaconBlock<Payload: AbstractExecPayload = FullPayload> {
    #[superstruct(only(Base), partial_getter(rename = "message_base"))]
    pub message: Option<BeaconBlockBase<Payload>>,
    #[superstruct(only(Altair), partial_getter(rename = "message_altair"))]
    pub message: Option<BeaconBlockAltair<Payload>>,
    #[superstruct(only(Bellatrix), partial_getter(rename = "message_bellatrix"))]
    pub message: Option<BeaconBlockBellatrix<Payload>>,
    #[superstruct(only(Capella), partial_getter(rename = "message_capella"))]
    pub message: Option<BeaconBlockCapella<Payload>>,
    #[superstruct(only(Deneb), partial_getter(rename = "message_deneb"))]
    pub message: Option<BeaconBlockDeneb<Payload>>,
    #[superstruct(only(Electra), partial_getter(rename = "message_electra"))]
    pub message: Option<BeaconBlockElectra<Payload>>,
    pub signature: Option<Vec<u8>>,
}

impl<Payload: AbstractExecPayload> SignedBeaconBlock<Payload> {
    /// Create a new `SignedBeaconBlock` from a `BeaconBlock` and signature.
    pub fn from_block(block: BeaconBlock<Payload>, signature: Option<Vec<u8>>) -> Self {
        match block {
            BeaconBlock::Base(message) => SignedBeaconBlock::Base(SignedBeaconBlockBase {
                message: Some(message),
                signature,
            }),
            BeaconBlock::Altair(message) => SignedBeaconBlock::Altair(SignedBeaconBlockAltair {
                message: Some(message),
                signature,
            }),
            BeaconBlock::Bellatrix(message) => {
                SignedBeaconBlock::Bellatrix(SignedBeaconBlockBellatrix {
                    message: Some(message),
                    signature,
                })
            }
            BeaconBlock::Capella(message) => {
                SignedBeaconBlock::Capella(SignedBeaconBlockCapella {
                    message: Some(message),
                    signature,
                })
            }
            BeaconBlock::Deneb(message) => SignedBeaconBlock::Deneb(SignedBeaconBlockDeneb {
                message: Some(message),
                signature,
            }),
            BeaconBlock::Electra(message) => {
                SignedBeaconBlock::Electra(SignedBeaconBlockElectra {
                    message: Some(message),
                    signature,
                })
            }
        }
    }

    /// Deconstruct the `SignedBeaconBlock` into a `BeaconBlock` and signature.
    ///
    /// The block is `None` if the message was absent.
    pub fn deconstruct(self) -> (Option<BeaconBlock<Payload>>, Option<Vec<u8>>) {
        match self {
            SignedBeaconBlock::Base(block) => {
                (block.message.map(BeaconBlock::Base), block.signature)
            }
            SignedBeaconBlock::Altair(block) => {
                (block.message.map(BeaconBlock::Altair), block.signature)
            }
            SignedBeaconBlock::Bellatrix(block) => {
                (block.message.map(BeaconBlock::Bellatrix), block.signature)
            }
            SignedBeaconBlock::Capella(block) => {
                (block.message.map(BeaconBlock::Capella), block.signature)
            }
            SignedBeaconBlock::Deneb(block) => {
                (block.message.map(BeaconBlock::Deneb), block.signature)
            }
            SignedBeaconBlock::Electra(block) => {
                (block.message.map(BeaconBlock::Electra), block.signature)
            }
        }
    }

    /// Accessor for the block's `message` field as a ref.
    pub fn message(&self) -> Option<BeaconBlockRef<'_, Payload>> {
        match self {
            SignedBeaconBlock::Base(inner) => inner.message.as_ref().map(BeaconBlockRef::Base),
            SignedBeaconBlock::Altair(inner) => {
                inner.message.as_ref().map(BeaconBlockRef::Altair)
            }
            SignedBeaconBlock::Bellatrix(inner) => {
                inner.message.as_ref().map(BeaconBlockRef::Bellatrix)
            }
            SignedBeaconBlock::Capella(inner) => {
                inner.message.as_ref().map(BeaconBlockRef::Capella)
            }
            SignedBeaconBlock::Deneb(inner) => inner.message.as_ref().map(BeaconBlockRef::Deneb),
            SignedBeaconBlock::Electra(inner) => {
                inner.message.as_ref().map(BeaconBlockRef::Electra)
            }
        }
    }

    /// Accessor for the block's `message` as a mutable reference (for testing only).
    pub fn message_mut(&mut self) -> Option<BeaconBlockRefMut<'_, Payload>> {
        match self {
            SignedBeaconBlock::Base(inner) => inner.message.as_mut().map(BeaconBlockRefMut::Base),
            SignedBeaconBlock::Altair(inner) => {
                inner.message.as_mut().map(BeaconBlockRefMut::Altair)
            }
            SignedBeaconBlock::Bellatrix(inner) => {
                inner.message.as_mut().map(BeaconBlockRefMut::Bellatrix)
            }
            SignedBeaconBlock::Capella(inner) => {
                inner.message.as_mut().map(BeaconBlockRefMut::Capella)
            }
            SignedBeaconBlock::Deneb(inner) => {
                inner.message.as_mut().map(BeaconBlockRefMut::Deneb)
            }
            SignedBeaconBlock::Electra(inner) => {
                inner.message.as_mut().map(BeaconBlockRefMut::Electra)
            }
        }
    }

    /// Returns the name of the fork pertaining to `self`.
    ///
    /// Known even when the message is absent, since it is carried by the variant.
    pub fn fork_name(&self) -> ForkName {
        match self {
            SignedBeaconBlock::Base(_) => ForkName::Base,
            SignedBeaconBlock::Altair(_) => ForkName::Altair,
            SignedBeaconBlock::Bellatrix(_) => ForkName::Bellatrix,
            SignedBeaconBlock::Capella(_) => ForkName::Capella,
            SignedBeaconBlock::Deneb(_) => ForkName::Deneb,
            SignedBeaconBlock::Electra(_) => ForkName::Electra,
        }
    }

    /// Convenience accessor for the block's slot.
    pub fn slot(&self) -> Option<Slot> {
        self.message().map(|block| block.slot())
    }

    /// Convenience accessor for the block's parent root.
    pub fn parent_root(&self) -> Option<&[u8]> {
        self.message()
            .and_then(|block| block.parent_root().as_deref())
    }

    /// Produce a signed beacon block header corresponding to this block, with no body root.
    pub fn signed_block_header(&self) -> SignedBeaconBlockHeader {
        SignedBeaconBlockHeader {
            message: self
                .message()
                .map(|block| block.temporary_block_header()),
            signature: copy_bytes(self.signature().as_deref()),
        }
    }

    pub fn execution_block_number(&self) -> Option<u64> {
        self.message()?.body()?.execution_block_number()
    }
}

impl<Payload: AbstractExecPayload> From<BeaconBlock<Payload>> for SignedBeaconBlock<Payload> {
    /// Wrap an unsigned block, leaving the signature absent.
    fn from(block: BeaconBlock<Payload>) -> Self {
        Self::from_block(block, None)
    }
}

impl<Payload: AbstractExecPayload> slog::KV for SignedBeaconBlock<Payload> {
    fn serialize(
        &self,
        record: &slog::Record,
        serializer: &mut dyn slog::Serializer,
    ) -> slog::Result {
        use slog::Value;
        Value::serialize(&self.fork_name(), record, "fork", serializer)?;
        serializer.emit_arguments("block_type", &format_args!("{:?}", Payload::block_type()))?;
        if let Some(block) = self.message() {
            Value::serialize(&block.slot(), record, "slot", serializer)?;
            serializer.emit_u64("proposer_index", block.proposer_index())?;
            if let Some(body) = block.body() {
                serializer.emit_usize("attestations", body.attestations_len())?;
                if let Some(block_number) = body.execution_block_number() {
                    serializer.emit_u64("execution_block_number", block_number)?;
                }
            }
        }
        slog::Result::Ok(())
    }
}
