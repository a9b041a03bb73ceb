use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::sync::Arc;
use types::{
    AttestationData, AttestationElectra, BeaconBlock, BeaconBlockBodyRefMut, Checkpoint, DeepCopy,
    Epoch, ExecutionPayloadElectra, ForkName, SignedBeaconBlock, Slot, Validator,
};

const MAX_ATTESTATIONS_ELECTRA: usize = 8;
const MAX_BLOBS_PER_BLOCK: usize = 6;

/// An Electra block with a full attestation list, blob commitments and a payload of
/// `transaction_count` transactions.
fn get_block(transaction_count: usize) -> SignedBeaconBlock {
    let mut block: BeaconBlock = BeaconBlock::empty(ForkName::Electra);

    if let Some(BeaconBlockBodyRefMut::Electra(body)) = block.body_mut() {
        let attestation = AttestationElectra {
            aggregation_bits: Some(vec![0xff; 256]),
            data: Some(AttestationData {
                slot: Slot::new(1),
                index: 0,
                beacon_block_root: Some(vec![1; 32]),
                source: Some(Checkpoint {
                    epoch: Epoch::new(0),
                    root: Some(vec![2; 32]),
                }),
                target: Some(Checkpoint {
                    epoch: Epoch::new(1),
                    root: Some(vec![3; 32]),
                }),
            }),
            signature: Some(vec![4; 96]),
            committee_bits: Some(vec![0xff; 8]),
        };
        body.attestations = Some(vec![attestation; MAX_ATTESTATIONS_ELECTRA]);
        body.blob_kzg_commitments = Some(vec![Some(vec![5; 48]); MAX_BLOBS_PER_BLOCK]);
        body.execution_payload = Some(ExecutionPayloadElectra {
            block_number: 1,
            transactions: Some(Arc::new(vec![vec![6; 512]; transaction_count])),
            ..Default::default()
        });
    }

    SignedBeaconBlock::from_block(block, Some(vec![7; 96]))
}

fn get_validators(validator_count: usize) -> Vec<Validator> {
    (0..validator_count)
        .map(|i| Validator {
            pubkey: vec![i as u8; 48],
            withdrawal_credentials: vec![0; 32],
            effective_balance: 32_000_000_000,
            slashed: false,
            activation_eligibility_epoch: Epoch::new(0),
            activation_epoch: Epoch::new(0),
            exit_epoch: Epoch::from(u64::MAX),
            withdrawable_epoch: Epoch::from(u64::MAX),
        })
        .collect()
}

fn all_benches(c: &mut Criterion) {
    for transaction_count in [0, 256, 1_024] {
        let block = get_block(transaction_count);

        let mut group = c.benchmark_group(format!("{}_transactions", transaction_count));
        group.bench_function("clone/signed_block", |b| {
            b.iter(|| black_box(block.clone()))
        });
        group.bench_function("deep_copy/signed_block", |b| {
            b.iter(|| black_box(block.deep_copy()))
        });
        group.bench_function("deep_copy_and_drop/signed_block", |b| {
            b.iter_batched_ref(
                || block.clone(),
                |block| black_box(block.deep_copy()),
                BatchSize::SmallInput,
            )
        });
        group.finish();
    }

    let validator_count = 16_384;
    let validators = get_validators(validator_count);

    let mut group = c.benchmark_group(format!("{}_validators", validator_count));
    group.sample_size(10);
    group.bench_function("deep_copy/validators", |b| {
        b.iter(|| black_box(validators.deep_copy()))
    });
    group.finish();
}

criterion_group!(benches, all_benches);
criterion_main!(benches);
