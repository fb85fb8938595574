//! Resetting values in place.
//!
//! [`Record::clear`](crate::Record::clear) resets every element through
//! [`Clear`]. The implementation picked for an element type decides how:
//! containers keep their allocation and call their own `clear()`, scalars
//! are overwritten with their default value.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::ffi::OsString;
use std::ops::Range;
use std::path::PathBuf;
use std::time::Duration;

use crate::strong_type::StrongType;

/// Reset a value to its empty / default state in place.
pub trait Clear {
    fn clear(&mut self);
}

/// Implement [`Clear`] for types without a `clear()` of their own by
/// assigning `Default::default()`.
///
/// ```
/// use seqkit_core::clear::Clear;
/// use seqkit_core::clear_by_default;
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Strand(i8);
///
/// clear_by_default!(Strand);
///
/// let mut s = Strand(-1);
/// s.clear();
/// assert_eq!(s, Strand(0));
/// ```
#[macro_export]
macro_rules! clear_by_default {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::clear::Clear for $ty {
                #[inline]
                fn clear(&mut self) {
                    *self = <$ty as ::core::default::Default>::default();
                }
            }
        )*
    };
}

// ======================================================================
// Scalars: overwrite with the default value
// ======================================================================

clear_by_default!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, (),
    Duration
);

impl<T> Clear for Option<T> {
    #[inline]
    fn clear(&mut self) {
        *self = None;
    }
}

impl<T: Default> Clear for Range<T> {
    #[inline]
    fn clear(&mut self) {
        *self = T::default()..T::default();
    }
}

impl<B> Clear for Cow<'_, B>
where
    B: ToOwned + ?Sized,
    B::Owned: Default,
{
    #[inline]
    fn clear(&mut self) {
        *self = Cow::Owned(B::Owned::default());
    }
}

// ======================================================================
// Containers: call their own clear()
// ======================================================================

macro_rules! clear_container {
    ($($ty:ident<$($param:ident),+>),* $(,)?) => {
        $(
            impl<$($param),+> Clear for $ty<$($param),+> {
                #[inline]
                fn clear(&mut self) {
                    $ty::clear(self);
                }
            }
        )*
    };
}

clear_container!(Vec<T>, VecDeque<T>, LinkedList<T>);

impl Clear for String {
    #[inline]
    fn clear(&mut self) {
        String::clear(self);
    }
}

impl Clear for OsString {
    #[inline]
    fn clear(&mut self) {
        OsString::clear(self);
    }
}

impl Clear for PathBuf {
    #[inline]
    fn clear(&mut self) {
        PathBuf::clear(self);
    }
}

impl<T: Ord> Clear for BTreeSet<T> {
    #[inline]
    fn clear(&mut self) {
        BTreeSet::clear(self);
    }
}

impl<K: Ord, V> Clear for BTreeMap<K, V> {
    #[inline]
    fn clear(&mut self) {
        BTreeMap::clear(self);
    }
}

impl<T: Ord> Clear for BinaryHeap<T> {
    #[inline]
    fn clear(&mut self) {
        BinaryHeap::clear(self);
    }
}

impl<T, S> Clear for HashSet<T, S> {
    #[inline]
    fn clear(&mut self) {
        HashSet::clear(self);
    }
}

impl<K, V, S> Clear for HashMap<K, V, S> {
    #[inline]
    fn clear(&mut self) {
        HashMap::clear(self);
    }
}

// ======================================================================
// Composites: clear what they hold
// ======================================================================

impl<T: Clear + ?Sized> Clear for Box<T> {
    #[inline]
    fn clear(&mut self) {
        (**self).clear();
    }
}

impl<T: Clear, const N: usize> Clear for [T; N] {
    fn clear(&mut self) {
        for item in self {
            item.clear();
        }
    }
}

impl<V: Clear, D> Clear for StrongType<V, D> {
    #[inline]
    fn clear(&mut self) {
        self.get_mut().clear();
    }
}

macro_rules! clear_tuple {
    ($(($idx:tt $T:ident))+) => {
        impl<$($T: Clear),+> Clear for ($($T,)+) {
            fn clear(&mut self) {
                $( self.$idx.clear(); )+
            }
        }
    };
}

clear_tuple!((0 T0));
clear_tuple!((0 T0) (1 T1));
clear_tuple!((0 T0) (1 T1) (2 T2));
clear_tuple!((0 T0) (1 T1) (2 T2) (3 T3));
clear_tuple!((0 T0) (1 T1) (2 T2) (3 T3) (4 T4));
clear_tuple!((0 T0) (1 T1) (2 T2) (3 T3) (4 T4) (5 T5));
clear_tuple!((0 T0) (1 T1) (2 T2) (3 T3) (4 T4) (5 T5) (6 T6));
clear_tuple!((0 T0) (1 T1) (2 T2) (3 T3) (4 T4) (5 T5) (6 T6) (7 T7));
clear_tuple!((0 T0) (1 T1) (2 T2) (3 T3) (4 T4) (5 T5) (6 T6) (7 T7) (8 T8));
clear_tuple!((0 T0) (1 T1) (2 T2) (3 T3) (4 T4) (5 T5) (6 T6) (7 T7) (8 T8) (9 T9));
clear_tuple!((0 T0) (1 T1) (2 T2) (3 T3) (4 T4) (5 T5) (6 T6) (7 T7) (8 T8) (9 T9) (10 T10));
clear_tuple!((0 T0) (1 T1) (2 T2) (3 T3) (4 T4) (5 T5) (6 T6) (7 T7) (8 T8) (9 T9) (10 T10) (11 T11));
