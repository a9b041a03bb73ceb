//! Provides the `DeepCopy` trait, a copy which shares no heap storage with its source.
//!
//! `Clone` is allowed to be shallow (e.g. cloning an `Arc` only bumps a reference count), which is
//! not good enough when a value is about to be handed to another processing stage that expects
//! exclusive ownership of everything reachable from it. `DeepCopy` gives that guarantee at every
//! nesting depth.
//!
//! Absence is always preserved: `None` copies to `None` and `Some(vec![])` copies to
//! `Some(vec![])`, never one to the other.
use std::marker::PhantomData;
use std::sync::Arc;

pub trait DeepCopy: Sized {
    /// Returns a value equal to `self` that shares no mutable storage with it.
    fn deep_copy(&self) -> Self;
}

macro_rules! impl_deep_copy_by_value {
    ($($type: ty),*) => {
        $(
            impl DeepCopy for $type {
                fn deep_copy(&self) -> Self {
                    *self
                }
            }
        )*
    };
}

impl_deep_copy_by_value!(bool, u8, u16, u32, u64, usize);

impl<T: DeepCopy> DeepCopy for Option<T> {
    fn deep_copy(&self) -> Self {
        self.as_ref().map(DeepCopy::deep_copy)
    }
}

impl<T: DeepCopy> DeepCopy for Vec<T> {
    fn deep_copy(&self) -> Self {
        let mut copy = Vec::with_capacity(self.len());
        copy.extend(self.iter().map(DeepCopy::deep_copy));
        copy
    }
}

impl<T: DeepCopy> DeepCopy for Arc<T> {
    fn deep_copy(&self) -> Self {
        Arc::new(self.as_ref().deep_copy())
    }
}

impl<T: DeepCopy, const N: usize> DeepCopy for [T; N] {
    fn deep_copy(&self) -> Self {
        std::array::from_fn(|i| self[i].deep_copy())
    }
}

impl<T: ?Sized> DeepCopy for PhantomData<T> {
    fn deep_copy(&self) -> Self {
        PhantomData
    }
}

/// Copy a possibly-absent byte buffer into freshly allocated storage.
pub fn copy_bytes(bytes: Option<&[u8]>) -> Option<Vec<u8>> {
    bytes.map(<[u8]>::to_vec)
}

/// Copy a possibly-absent list of possibly-absent byte buffers.
///
/// Both the list and each element keep their absent/empty distinction. Used for Merkle proofs
/// and KZG commitment lists.
pub fn copy_bytes_list(list: Option<&[Option<Vec<u8>>]>) -> Option<Vec<Option<Vec<u8>>>> {
    list.map(|buffers| {
        buffers
            .iter()
            .map(|buffer| copy_bytes(buffer.as_deref()))
            .collect()
    })
}
