#![allow(clippy::arithmetic_side_effects)]

#[macro_use]
mod macros;
mod test_random;

pub use rand::{RngCore, SeedableRng};
pub use rand_xorshift::XorShiftRng;
pub use test_random::{test_random_instance, TestRandom};
