use crate::beacon_block_body::{
    BeaconBlockBodyAltair, BeaconBlockBodyBase, BeaconBlockBodyBellatrix, BeaconBlockBodyCapella,
    BeaconBlockBodyDeneb, BeaconBlockBodyElectra, BeaconBlockBodyRef, BeaconBlockBodyRefMut,
};
use crate::test_utils::TestRandom;
use crate::*;
use deep_copy_derive::DeepCopy;
use superstruct::superstruct;
use test_random_derive::TestRandom;

/// A block of the `BeaconChain`.
#[superstruct(
    variants(Base, Altair, Bellatrix, Capella, Deneb, Electra),
    variant_attributes(derive(Debug, PartialEq, Clone, Default, DeepCopy, TestRandom)),
    ref_attributes(derive(Debug, PartialEq)),
    cast_error(ty = "Error", expr = "Error::IncorrectVariant"),
    partial_getter_error(ty = "Error", expr = "Error::IncorrectVariant")
)]
#[derive(Debug, PartialEq, Clone, DeepCopy)]
pub struct BeaconBlock<Payload: AbstractExecPayload = FullPayload> {
    #[superstruct(getter(copy))]
    pub slot: Slot,
    #[superstruct(getter(copy))]
    pub proposer_index: u64,
    pub parent_root: Option<Vec<u8>>,
    pub state_root: Option<Vec<u8>>,
    #[superstruct(only(Base), partial_getter(rename = "body_base"))]
    pub body: Option<BeaconBlockBodyBase<Payload>>,
    #[superstruct(only(Altair), partial_getter(rename = "body_altair"))]
    pub body: Option<BeaconBlockBodyAltair<Payload>>,
    #[superstruct(only(Bellatrix), partial_getter(rename = "body_bellatrix"))]
    pub body: Option<BeaconBlockBodyBellatrix<Payload>>,
    #[superstruct(only(Capella), partial_getter(rename = "body_capella"))]
    pub body: Option<BeaconBlockBodyCapella<Payload>>,
    #[superstruct(only(Deneb), partial_getter(rename = "body_deneb"))]
    pub body: Option<BeaconBlockBodyDeneb<Payload>>,
    #[superstruct(only(Electra), partial_getter(rename = "body_electra"))]
    pub body: Option<BeaconBlockBodyElectra<Payload>>,
}

impl<Payload: AbstractExecPayload> BeaconBlock<Payload> {
    /// Returns an empty block at slot zero, with an empty body for `fork_name`.
    pub fn empty(fork_name: ForkName) -> Self {
        Self::from_body(
            Slot::new(0),
            0,
            Some(vec![0; 32]),
            Some(vec![0; 32]),
            BeaconBlockBody::empty(fork_name),
        )
    }

    /// Assemble a block whose variant is dictated by the variant of `body`.
    pub fn from_body(
        slot: Slot,
        proposer_index: u64,
        parent_root: Option<Vec<u8>>,
        state_root: Option<Vec<u8>>,
        body: BeaconBlockBody<Payload>,
    ) -> Self {
        macro_rules! block {
            ($variant: ident, $block: ident, $body: expr) => {
                BeaconBlock::$variant($block {
                    slot,
                    proposer_index,
                    parent_root,
                    state_root,
                    body: $body,
                })
            };
        }

        match body {
            BeaconBlockBody::Base(body) => block!(Base, BeaconBlockBase, Some(body)),
            BeaconBlockBody::Altair(body) => block!(Altair, BeaconBlockAltair, Some(body)),
            BeaconBlockBody::Bellatrix(body) => {
                block!(Bellatrix, BeaconBlockBellatrix, Some(body))
            }
            BeaconBlockBody::Capella(body) => block!(Capella, BeaconBlockCapella, Some(body)),
            BeaconBlockBody::Deneb(body) => block!(Deneb, BeaconBlockDeneb, Some(body)),
            BeaconBlockBody::Electra(body) => block!(Electra, BeaconBlockElectra, Some(body)),
        }
    }

    /// Assemble a block for `fork_name` from its parts. The body may be absent.
    ///
    /// Returns `Error::InconsistentFork` if a present body belongs to a different fork.
    pub fn from_parts(
        fork_name: ForkName,
        slot: Slot,
        proposer_index: u64,
        parent_root: Option<Vec<u8>>,
        state_root: Option<Vec<u8>>,
        body: Option<BeaconBlockBody<Payload>>,
    ) -> Result<Self, Error> {
        if let Some(body) = body {
            let found = body.fork_name();
            if found != fork_name {
                return Err(Error::InconsistentFork {
                    expected: fork_name,
                    found,
                });
            }
            return Ok(Self::from_body(
                slot,
                proposer_index,
                parent_root,
                state_root,
                body,
            ));
        }

        macro_rules! block {
            ($variant: ident, $block: ident) => {
                BeaconBlock::$variant($block {
                    slot,
                    proposer_index,
                    parent_root,
                    state_root,
                    body: None,
                })
            };
        }

        Ok(match fork_name {
            ForkName::Base => block!(Base, BeaconBlockBase),
            ForkName::Altair => block!(Altair, BeaconBlockAltair),
            ForkName::Bellatrix => block!(Bellatrix, BeaconBlockBellatrix),
            ForkName::Capella => block!(Capella, BeaconBlockCapella),
            ForkName::Deneb => block!(Deneb, BeaconBlockDeneb),
            ForkName::Electra => block!(Electra, BeaconBlockElectra),
        })
    }

    pub fn fork_name(&self) -> ForkName {
        self.to_ref().fork_name()
    }

    /// Convenience accessor for the `body` as a `BeaconBlockBodyRef`.
    pub fn body(&self) -> Option<BeaconBlockBodyRef<'_, Payload>> {
        self.to_ref().body()
    }

    /// Convenience accessor for the `body` as a `BeaconBlockBodyRefMut`.
    pub fn body_mut(&mut self) -> Option<BeaconBlockBodyRefMut<'_, Payload>> {
        self.to_mut().body_mut()
    }

    /// Returns a "temporary" header, where the `body_root` is absent.
    pub fn temporary_block_header(&self) -> BeaconBlockHeader {
        self.to_ref().temporary_block_header()
    }
}

impl<'a, Payload: AbstractExecPayload> BeaconBlockRef<'a, Payload> {
    /// Returns the name of the fork pertaining to `self`.
    pub fn fork_name(&self) -> ForkName {
        match self {
            BeaconBlockRef::Base { .. } => ForkName::Base,
            BeaconBlockRef::Altair { .. } => ForkName::Altair,
            BeaconBlockRef::Bellatrix { .. } => ForkName::Bellatrix,
            BeaconBlockRef::Capella { .. } => ForkName::Capella,
            BeaconBlockRef::Deneb { .. } => ForkName::Deneb,
            BeaconBlockRef::Electra { .. } => ForkName::Electra,
        }
    }

    /// Convenience accessor for the `body` as a `BeaconBlockBodyRef`.
    pub fn body(&self) -> Option<BeaconBlockBodyRef<'a, Payload>> {
        match self {
            BeaconBlockRef::Base(block) => block.body.as_ref().map(BeaconBlockBodyRef::Base),
            BeaconBlockRef::Altair(block) => block.body.as_ref().map(BeaconBlockBodyRef::Altair),
            BeaconBlockRef::Bellatrix(block) => {
                block.body.as_ref().map(BeaconBlockBodyRef::Bellatrix)
            }
            BeaconBlockRef::Capella(block) => {
                block.body.as_ref().map(BeaconBlockBodyRef::Capella)
            }
            BeaconBlockRef::Deneb(block) => block.body.as_ref().map(BeaconBlockBodyRef::Deneb),
            BeaconBlockRef::Electra(block) => {
                block.body.as_ref().map(BeaconBlockBodyRef::Electra)
            }
        }
    }

    /// Returns a "temporary" header, where the `body_root` is absent.
    pub fn temporary_block_header(&self) -> BeaconBlockHeader {
        BeaconBlockHeader {
            slot: self.slot(),
            proposer_index: self.proposer_index(),
            parent_root: copy_bytes(self.parent_root().as_deref()),
            state_root: copy_bytes(self.state_root().as_deref()),
            body_root: None,
        }
    }
}

impl<'a, Payload: AbstractExecPayload> BeaconBlockRefMut<'a, Payload> {
    /// Convert a mutable reference to a beacon block to a mutable ref to its body.
    pub fn body_mut(self) -> Option<BeaconBlockBodyRefMut<'a, Payload>> {
        match self {
            BeaconBlockRefMut::Base(block) => block.body.as_mut().map(BeaconBlockBodyRefMut::Base),
            BeaconBlockRefMut::Altair(block) => {
                block.body.as_mut().map(BeaconBlockBodyRefMut::Altair)
            }
            BeaconBlockRefMut::Bellatrix(block) => {
                block.body.as_mut().map(BeaconBlockBodyRefMut::Bellatrix)
            }
            BeaconBlockRefMut::Capella(block) => {
                block.body.as_mut().map(BeaconBlockBodyRefMut::Capella)
            }
            BeaconBlockRefMut::Deneb(block) => {
                block.body.as_mut().map(BeaconBlockBodyRefMut::Deneb)
            }
            BeaconBlockRefMut::Electra(block) => {
                block.body.as_mut().map(BeaconBlockBodyRefMut::Electra)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{SeedableRng, TestRandom, XorShiftRng};

    mod base {
        use super::*;
        deep_copy_tests!(BeaconBlockBase);
    }
    mod altair {
        use super::*;
        deep_copy_tests!(BeaconBlockAltair);
    }
    mod bellatrix {
        use super::*;
        deep_copy_tests!(BeaconBlockBellatrix);
        deep_copy_tests!(BeaconBlockBellatrix<BlindedPayload>, test_deep_copy_blinded);
    }
    mod capella {
        use super::*;
        deep_copy_tests!(BeaconBlockCapella);
        deep_copy_tests!(BeaconBlockCapella<BlindedPayload>, test_deep_copy_blinded);
    }
    mod deneb {
        use super::*;
        deep_copy_tests!(BeaconBlockDeneb);
        deep_copy_tests!(BeaconBlockDeneb<BlindedPayload>, test_deep_copy_blinded);
    }
    mod electra {
        use super::*;
        deep_copy_tests!(BeaconBlockElectra);
        deep_copy_tests!(BeaconBlockElectra<BlindedPayload>, test_deep_copy_blinded);
    }

    #[test]
    fn from_parts_checks_fork() {
        let body = BeaconBlockBody::<FullPayload>::empty(ForkName::Deneb);

        assert_eq!(
            BeaconBlock::from_parts(ForkName::Capella, Slot::new(1), 0, None, None, Some(body)),
            Err(Error::InconsistentFork {
                expected: ForkName::Capella,
                found: ForkName::Deneb,
            })
        );
    }

    #[test]
    fn absent_body_stays_absent() {
        let block = BeaconBlock::<FullPayload>::from_parts(
            ForkName::Deneb,
            Slot::new(9),
            3,
            Some(vec![1; 32]),
            None,
            None,
        )
        .unwrap();
        let copy = block.deep_copy();

        assert_eq!(copy.fork_name(), ForkName::Deneb);
        assert!(copy.body().is_none());
        assert_eq!(copy.body_deneb(), Ok(&None));
        assert_eq!(copy.state_root(), &None);
        assert_eq!(copy.parent_root(), &Some(vec![1; 32]));
    }

    #[test]
    fn body_follows_block_variant() {
        let mut rng = XorShiftRng::from_seed([42; 16]);

        for fork_name in ForkName::list_all() {
            let block = BeaconBlock::<BlindedPayload>::from_body(
                Slot::random_for_test(&mut rng),
                u64::random_for_test(&mut rng),
                <_>::random_for_test(&mut rng),
                <_>::random_for_test(&mut rng),
                BeaconBlockBody::empty(fork_name),
            );
            let mut copy = block.deep_copy();

            assert_eq!(copy, block);
            assert_eq!(copy.fork_name(), fork_name);
            assert_eq!(copy.body().map(BeaconBlockBodyRef::fork_name), Some(fork_name));

            if let Some(BeaconBlockBodyRefMut::Electra(body)) = copy.body_mut() {
                body.graffiti = None;
            }
            assert_eq!(
                block.body().and_then(|body| body.graffiti().clone()),
                Some(vec![0; beacon_block_body::GRAFFITI_BYTES_LEN])
            );
        }
    }

    #[test]
    fn temporary_header_copies_roots() {
        let block = BeaconBlock::<FullPayload>::empty(ForkName::Altair);
        let header = block.temporary_block_header();

        assert_eq!(header.slot, block.slot());
        assert_eq!(&header.parent_root, block.parent_root());
        assert_eq!(header.body_root, None);
    }
}
