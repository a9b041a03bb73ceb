#[cfg(test)]
#[macro_export]
macro_rules! deep_copy_tests {
    ($type: ty) => {
        deep_copy_tests!($type, test_deep_copy);
    };
    ($type: ty, $test_name: ident) => {
        #[test]
        pub fn $test_name() {
            use deep_copy::DeepCopy;
            use $crate::test_utils::{SeedableRng, TestRandom, XorShiftRng};

            let absent: Option<$type> = None;
            assert_eq!(absent.deep_copy(), None);

            let mut rng = XorShiftRng::from_seed([42; 16]);

            for _ in 0..16 {
                let original = <$type>::random_for_test(&mut rng);
                let copy = original.deep_copy();

                assert_eq!(copy, original);
                assert_eq!(copy.deep_copy(), original);

                let present = Some(original);
                assert_eq!(present.deep_copy(), present);
            }
        }
    };
}
