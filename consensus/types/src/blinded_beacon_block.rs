//! Blinded block families, carrying execution payload headers in place of full payloads.
//!
//! These are the same fork-tagged records as the full ones, instantiated with `BlindedPayload`.
//! Only post-Bellatrix forks differ from their full counterparts.
use crate::*;

pub type BlindedBeaconBlockBody = BeaconBlockBody<BlindedPayload>;
pub type BlindedBeaconBlockBodyBellatrix = BeaconBlockBodyBellatrix<BlindedPayload>;
pub type BlindedBeaconBlockBodyCapella = BeaconBlockBodyCapella<BlindedPayload>;
pub type BlindedBeaconBlockBodyDeneb = BeaconBlockBodyDeneb<BlindedPayload>;
pub type BlindedBeaconBlockBodyElectra = BeaconBlockBodyElectra<BlindedPayload>;

pub type BlindedBeaconBlock = BeaconBlock<BlindedPayload>;
pub type BlindedBeaconBlockBellatrix = BeaconBlockBellatrix<BlindedPayload>;
pub type BlindedBeaconBlockCapella = BeaconBlockCapella<BlindedPayload>;
pub type BlindedBeaconBlockDeneb = BeaconBlockDeneb<BlindedPayload>;
pub type BlindedBeaconBlockElectra = BeaconBlockElectra<BlindedPayload>;

pub type SignedBlindedBeaconBlock = SignedBeaconBlock<BlindedPayload>;
pub type SignedBlindedBeaconBlockBellatrix = SignedBeaconBlockBellatrix<BlindedPayload>;
pub type SignedBlindedBeaconBlockCapella = SignedBeaconBlockCapella<BlindedPayload>;
pub type SignedBlindedBeaconBlockDeneb = SignedBeaconBlockDeneb<BlindedPayload>;
pub type SignedBlindedBeaconBlockElectra = SignedBeaconBlockElectra<BlindedPayload>;
