use rand::RngCore;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use std::sync::Arc;

pub fn test_random_instance<T: TestRandom>() -> T {
    let mut rng = XorShiftRng::from_seed([0x42; 16]);
    T::random_for_test(&mut rng)
}

pub trait TestRandom {
    fn random_for_test(rng: &mut impl RngCore) -> Self;
}

impl TestRandom for bool {
    fn random_for_test(rng: &mut impl RngCore) -> Self {
        (rng.next_u32() % 2) == 1
    }
}

impl TestRandom for u64 {
    fn random_for_test(rng: &mut impl RngCore) -> Self {
        rng.next_u64()
    }
}

impl TestRandom for u32 {
    fn random_for_test(rng: &mut impl RngCore) -> Self {
        rng.next_u32()
    }
}

impl TestRandom for u8 {
    fn random_for_test(rng: &mut impl RngCore) -> Self {
        rng.next_u32().to_be_bytes()[0]
    }
}

impl TestRandom for usize {
    fn random_for_test(rng: &mut impl RngCore) -> Self {
        rng.next_u32() as usize
    }
}

/// Lists get between zero and three elements, so that empty lists are produced regularly.
impl<U> TestRandom for Vec<U>
where
    U: TestRandom,
{
    fn random_for_test(rng: &mut impl RngCore) -> Self {
        let mut output = vec![];

        for _ in 0..(usize::random_for_test(rng) % 4) {
            output.push(<U>::random_for_test(rng));
        }

        output
    }
}

/// Roughly one in four values is absent.
impl<U> TestRandom for Option<U>
where
    U: TestRandom,
{
    fn random_for_test(rng: &mut impl RngCore) -> Self {
        if rng.next_u32() % 4 == 0 {
            None
        } else {
            Some(U::random_for_test(rng))
        }
    }
}

impl<U> TestRandom for Arc<U>
where
    U: TestRandom,
{
    fn random_for_test(rng: &mut impl RngCore) -> Self {
        Arc::new(U::random_for_test(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_seed() {
        let a: Vec<Option<Vec<u8>>> = test_random_instance();
        let b: Vec<Option<Vec<u8>>> = test_random_instance();
        assert_eq!(a, b);
    }

    #[test]
    fn produces_absent_empty_and_full_values() {
        let mut rng = XorShiftRng::from_seed([7; 16]);
        let values: Vec<Option<Vec<u8>>> = (0..256)
            .map(|_| TestRandom::random_for_test(&mut rng))
            .collect();

        assert!(values.iter().any(Option::is_none));
        assert!(values.iter().any(|v| v.as_ref().map_or(false, Vec::is_empty)));
        assert!(values.iter().any(|v| v.as_ref().map_or(false, |v| !v.is_empty())));
    }
}
