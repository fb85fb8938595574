//! Capability-gated strong types.
//!
//! A [`StrongType<V, D>`] wraps one value of type `V` and is a distinct type
//! for every marker `D`, so a `WindowSize` can never be passed where a
//! `KmerSize` is expected even though both hold a `u8`. It can only be built
//! with an explicit [`StrongType::new`]; there is no `From<V>`.
//!
//! By default a strong type supports no operators. The marker's
//! [`SkillSet`] decides which ones come back: every operator is implemented
//! once, bounded on `D: Grants<skill::X>`, so for an ungranted skill the
//! operator simply does not exist.
//!
//! ```
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     /// Number of bases in a window.
//!     pub type WindowSize = StrongType<u32, WindowSizeMarker> with Additive | Comparable;
//! }
//!
//! let w = WindowSize::new(20) + WindowSize::new(3);
//! assert_eq!(w, WindowSize::new(23));
//! assert_eq!(*w.get(), 23);
//! ```
//!
//! Operators outside the granted set are rejected by the compiler:
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     pub type WindowSize = StrongType<u32, WindowSizeMarker> with Additive;
//! }
//!
//! let _ = WindowSize::new(20) * WindowSize::new(3);
//! ```
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     pub type WindowSize = StrongType<u32, WindowSizeMarker> with Additive;
//! }
//!
//! // no `Comparable` skill, so no `==`
//! assert!(WindowSize::new(1) == WindowSize::new(1));
//! ```
//!
//! A bare value never converts silently:
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     pub type WindowSize = StrongType<u32, WindowSizeMarker> with Additive;
//! }
//!
//! fn takes(_: WindowSize) {}
//! takes(20_u32);
//! ```

mod display;
mod ops;

pub use display::write_value;
pub use ops::{Step, Truthy};

use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::skill::{self, Grants, SkillSet, Skills};

/// A value of type `V` made distinct by the marker `D`.
///
/// `D` is never instantiated; it only carries the skill set. Concrete strong
/// types are aliases, e.g. `type KmerSize = StrongType<u8, KmerSizeMarker>`,
/// so every operator returns the concrete type itself.
pub struct StrongType<V, D> {
    value: V,
    marker: PhantomData<fn() -> D>,
}

impl<V, D> StrongType<V, D> {
    /// Wrap a value. This is the only way to create a strong type.
    #[inline]
    #[must_use]
    pub const fn new(value: V) -> Self {
        Self {
            value,
            marker: PhantomData,
        }
    }

    /// Shared access to the held value.
    #[inline]
    pub const fn get(&self) -> &V {
        &self.value
    }

    /// Mutable access to the held value.
    #[inline]
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Move the held value out.
    #[inline]
    pub fn into_inner(self) -> V {
        self.value
    }
}

impl<V, D: SkillSet> StrongType<V, D> {
    /// The operator families this strong type exposes.
    pub const SKILLS: Skills = D::SKILLS;
}

impl<V, D: Grants<skill::Convert>> StrongType<V, D> {
    /// Explicit conversion back to the underlying value.
    #[inline]
    pub fn convert(self) -> V {
        self.value
    }
}

// ======================================================================
// Value semantics (copy/clone/default follow `V`, never `D`)
// ======================================================================

impl<V: Clone, D> Clone for StrongType<V, D> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<V: Copy, D> Copy for StrongType<V, D> {}

impl<V: Default, D> Default for StrongType<V, D> {
    #[inline]
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<V: PartialEq, D: Grants<skill::Comparable>> PartialEq for StrongType<V, D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: Eq, D: Grants<skill::Comparable>> Eq for StrongType<V, D> {}

impl<V: Hash, D: Grants<skill::Comparable>> Hash for StrongType<V, D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

// ======================================================================
// Strong-type detection for generic code
// ======================================================================

mod sealed {
    pub trait Sealed {}
}

impl<V, D> sealed::Sealed for StrongType<V, D> {}

/// Implemented by every [`StrongType`] and nothing else.
///
/// Lets generic code accept "any strong type" and still see its value type
/// and skill set.
pub trait IsStrongType: sealed::Sealed {
    type Value;
    type Marker: SkillSet;

    const SKILLS: Skills;

    fn value(&self) -> &Self::Value;
}

impl<V, D: SkillSet> IsStrongType for StrongType<V, D> {
    type Value = V;
    type Marker = D;

    const SKILLS: Skills = D::SKILLS;

    #[inline]
    fn value(&self) -> &V {
        &self.value
    }
}

// ======================================================================
// Serde (transparent: a strong type serializes as its value)
// ======================================================================

#[cfg(feature = "serde")]
impl<V: serde::Serialize, D> serde::Serialize for StrongType<V, D> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, V: serde::Deserialize<'de>, D> serde::Deserialize<'de> for StrongType<V, D> {
    fn deserialize<De: serde::Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        V::deserialize(deserializer).map(Self::new)
    }
}

// ======================================================================
// Declaration macro
// ======================================================================

/// Declare a strong type: its alias, its marker and the skills it grants.
///
/// ```
/// use seqkit_core::strong_type;
/// use seqkit_core::skill::Skills;
///
/// strong_type! {
///     /// Phred offset of a quality encoding.
///     pub type PhredOffset = StrongType<u8, PhredOffsetMarker> with Comparable | Convert;
/// }
///
/// strong_type! {
///     /// A bare identifier with no operators at all.
///     pub type ReadName = StrongType<String, ReadNameMarker>;
/// }
///
/// assert_eq!(PhredOffset::SKILLS, Skills::COMPARABLE | Skills::CONVERT);
/// assert_eq!(ReadName::SKILLS, Skills::empty());
/// assert_eq!(PhredOffset::new(33).convert(), 33_u8);
/// ```
///
/// Group names (`Additive`, `Multiplicative`, `BitwiseLogic`,
/// `BitwiseShift`, `Logic`) grant each of their members. Name a skill only
/// once: listing a group together with one of its members (`Additive | Add`)
/// grants the member twice, which the compiler reports as conflicting
/// implementations of `Grants`.
///
/// ```compile_fail
/// use seqkit_core::strong_type;
///
/// strong_type! {
///     pub type Depth = StrongType<u32, DepthMarker> with Additive | Add;
/// }
///
/// fn main() {}
/// ```
#[macro_export]
macro_rules! strong_type {
    (
        $(#[$meta:meta])*
        $vis:vis type $name:ident = StrongType<$value:ty, $marker:ident>
            $(with $($skill:ident)|+)?;
    ) => {
        $(#[$meta])*
        $vis type $name = $crate::strong_type::StrongType<$value, $marker>;

        #[doc = concat!("Skill marker of [`", stringify!($name), "`].")]
        #[derive(Debug)]
        $vis enum $marker {}

        impl $crate::skill::SkillSet for $marker {
            const SKILLS: $crate::skill::Skills = $crate::skill::Skills::empty()
                $($(.union(<$crate::skill::$skill as $crate::skill::Skill>::FLAG))+)?;
        }

        $($($crate::__grant_skill!($marker; $skill);)+)?
    };
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    crate::strong_type! {
        pub type Offset = StrongType<u64, OffsetMarker> with Comparable;
    }

    crate::strong_type! {
        pub type Opaque = StrongType<u64, OpaqueMarker>;
    }

    crate::strong_type! {
        pub type Label = StrongType<String, LabelMarker> with Comparable | Convert;
    }

    #[test]
    fn test_accessors() {
        let mut o = Offset::new(7);
        assert_eq!(*o.get(), 7);
        *o.get_mut() = 9;
        assert_eq!(o.into_inner(), 9);
    }

    #[test]
    fn test_skills_constant() {
        assert_eq!(Offset::SKILLS, Skills::COMPARABLE);
        assert_eq!(Opaque::SKILLS, Skills::empty());
        assert_eq!(
            <Label as IsStrongType>::SKILLS,
            Skills::COMPARABLE | Skills::CONVERT
        );
    }

    #[test]
    fn test_value_semantics() {
        let a = Opaque::new(3);
        let b = a;
        assert_eq!(*a.get(), *b.get());
        assert_eq!(*Opaque::default().get(), 0);

        let l = Label::new("chr1".into());
        let m = l.clone();
        assert_eq!(l, m);
        assert_eq!(m.convert(), "chr1");
    }

    #[test]
    fn test_hash_follows_value() {
        let set: HashSet<Offset> = [Offset::new(1), Offset::new(2), Offset::new(1)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_is_strong_type_bound() {
        fn skills_of<S: IsStrongType>(_: &S) -> Skills {
            S::SKILLS
        }
        fn value_of<S: IsStrongType<Value = u64>>(s: &S) -> u64 {
            *s.value()
        }
        assert_eq!(skills_of(&Offset::new(0)), Skills::COMPARABLE);
        assert_eq!(value_of(&Opaque::new(42)), 42);
    }

    #[test]
    fn test_send_sync_follow_value() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Offset>();
        assert_send_sync::<Label>();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Offset::new(12)).unwrap();
        assert_eq!(json, "12");
        let back: Offset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Offset::new(12));
    }
}
