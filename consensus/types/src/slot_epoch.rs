//! The `Slot` and `Epoch` types are defined as new types over u64 to enforce type-safety between
//! the two types.
//!
//! Copying either is a plain bit copy, so both implement `DeepCopy` by value.
use crate::test_utils::TestRandom;
use deep_copy::DeepCopy;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Slot(u64);

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Epoch(u64);

macro_rules! impl_common {
    ($type: ident) => {
        impl $type {
            pub const fn new(value: u64) -> $type {
                $type(value)
            }

            pub const fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $type {
            fn from(value: u64) -> $type {
                $type(value)
            }
        }

        impl From<$type> for u64 {
            fn from(value: $type) -> u64 {
                value.0
            }
        }

        impl fmt::Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl slog::Value for $type {
            fn serialize(
                &self,
                record: &slog::Record,
                key: slog::Key,
                serializer: &mut dyn slog::Serializer,
            ) -> slog::Result {
                slog::Value::serialize(&self.0, record, key, serializer)
            }
        }

        impl DeepCopy for $type {
            fn deep_copy(&self) -> Self {
                *self
            }
        }

        impl TestRandom for $type {
            fn random_for_test(rng: &mut impl RngCore) -> Self {
                $type::from(u64::random_for_test(rng))
            }
        }
    };
}

impl_common!(Slot);
impl_common!(Epoch);

impl Slot {
    /// Returns the epoch containing `self`.
    ///
    /// Returns `None` if `slots_per_epoch` is zero.
    pub fn epoch(self, slots_per_epoch: u64) -> Option<Epoch> {
        self.0.checked_div(slots_per_epoch).map(Epoch)
    }
}

impl Epoch {
    /// Returns the first slot of `self`, or `None` on overflow.
    pub fn start_slot(self, slots_per_epoch: u64) -> Option<Slot> {
        self.0.checked_mul(slots_per_epoch).map(Slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_to_epoch() {
        assert_eq!(Slot::new(0).epoch(32), Some(Epoch::new(0)));
        assert_eq!(Slot::new(31).epoch(32), Some(Epoch::new(0)));
        assert_eq!(Slot::new(32).epoch(32), Some(Epoch::new(1)));
        assert_eq!(Slot::new(32).epoch(0), None);
    }

    #[test]
    fn epoch_start_slot() {
        assert_eq!(Epoch::new(3).start_slot(32), Some(Slot::new(96)));
        assert_eq!(Epoch::new(u64::MAX).start_slot(32), None);
    }

    #[test]
    fn copies_by_value() {
        let slot = Slot::new(u64::MAX);
        assert_eq!(slot.deep_copy(), slot);
        assert_eq!(Epoch::new(0).deep_copy(), Epoch::new(0));
    }

    #[test]
    fn serde_is_transparent() {
        assert_eq!(serde_json::to_string(&Slot::new(7)).unwrap(), "7");
        assert_eq!(
            serde_json::from_str::<Epoch>("12").unwrap(),
            Epoch::new(12)
        );
    }
}
