//! Capability flags for [`StrongType`](crate::StrongType).
//!
//! A strong type starts out with no operators at all. Each operator family is
//! switched back on by one bit of [`Skills`]. The bits exist twice:
//!
//! - as a value-level [`Skills`] set, for inspection and printing, and
//! - as a zero-sized marker type per family (`skill::Add`, `skill::Comparable`,
//!   ...), which is what the operator implementations are bounded on.
//!
//! A strong type's marker grants a family by implementing [`Grants`] for the
//! family's marker. The [`strong_type!`](crate::strong_type!) macro derives
//! both representations from one list so they never disagree.

use bitflags::bitflags;
use tracing::debug;

use crate::error::{CoreError, Result};

bitflags! {
    /// The set of operator families enabled on a strong type.
    ///
    /// The composite constants are pre-unioned conveniences; they carry no
    /// bits of their own.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    #[cfg_attr(
        feature = "serde",
        derive(serde::Serialize, serde::Deserialize),
        serde(transparent)
    )]
    pub struct Skills: u32 {
        const ADD = 1 << 0;
        const SUBTRACT = 1 << 1;
        const MULTIPLY = 1 << 2;
        const DIVIDE = 1 << 3;
        const MODULO = 1 << 4;
        const BITWISE_AND = 1 << 5;
        const BITWISE_OR = 1 << 6;
        const BITWISE_XOR = 1 << 7;
        const BITWISE_NOT = 1 << 8;
        const BITWISE_LSHIFT = 1 << 9;
        const BITWISE_RSHIFT = 1 << 10;
        const LOGICAL_AND = 1 << 11;
        const LOGICAL_OR = 1 << 12;
        const LOGICAL_NOT = 1 << 13;
        const INCREMENT = 1 << 14;
        const DECREMENT = 1 << 15;
        const CONVERT = 1 << 16;
        const COMPARABLE = 1 << 17;

        const ADDITIVE = Self::ADD.bits() | Self::SUBTRACT.bits();
        const MULTIPLICATIVE = Self::MULTIPLY.bits() | Self::DIVIDE.bits() | Self::MODULO.bits();
        const BITWISE_LOGIC = Self::BITWISE_AND.bits()
            | Self::BITWISE_OR.bits()
            | Self::BITWISE_XOR.bits()
            | Self::BITWISE_NOT.bits();
        const BITWISE_SHIFT = Self::BITWISE_LSHIFT.bits() | Self::BITWISE_RSHIFT.bits();
        const LOGIC = Self::LOGICAL_AND.bits() | Self::LOGICAL_OR.bits() | Self::LOGICAL_NOT.bits();
    }
}

impl Skills {
    /// Parse a skill set from its text form, e.g. `"ADD | COMPARABLE"`.
    ///
    /// Composite names (`ADDITIVE`, `LOGIC`, ...) and hex literals
    /// (`"0x3"`) are accepted as well. The empty string is the empty set.
    pub fn parse(text: &str) -> Result<Self> {
        bitflags::parser::from_str::<Self>(text).map_err(|err| {
            debug!(input = text, %err, "rejected skill set");
            CoreError::InvalidSkills {
                reason: err.to_string(),
            }
        })
    }

    /// Names of the individual operator families in this set, in bit order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        self.iter_names().map(|(name, _)| name)
    }
}

// ---------------------------------------------------------------------------
// Type-level skills
// ---------------------------------------------------------------------------

/// A zero-sized stand-in for one operator family (or a group of them).
pub trait Skill: 'static {
    /// The bits this marker stands for.
    const FLAG: Skills;
}

/// The skill set of a strong type, attached to its marker type.
pub trait SkillSet: 'static {
    const SKILLS: Skills;
}

/// Implemented by a strong type's marker for every operator family it
/// enables. The operator implementations are bounded on this trait, so an
/// operator whose family is not granted does not exist for the type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not grant the `{S}` skill",
    label = "this operation needs the `{S}` skill"
)]
pub trait Grants<S: Skill>: SkillSet {}

macro_rules! skill_markers {
    ($( $(#[$doc:meta])* $name:ident => $flag:ident, )*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $name;

            impl Skill for $name {
                const FLAG: Skills = Skills::$flag;
            }
        )*
    };
}

skill_markers! {
    /// `a + b`
    Add => ADD,
    /// `a - b`
    Subtract => SUBTRACT,
    /// `a * b`
    Multiply => MULTIPLY,
    /// `a / b`
    Divide => DIVIDE,
    /// `a % b`
    Modulo => MODULO,
    /// `a & b`
    BitwiseAnd => BITWISE_AND,
    /// `a | b`
    BitwiseOr => BITWISE_OR,
    /// `a ^ b`
    BitwiseXor => BITWISE_XOR,
    /// `!a` on the underlying bits.
    BitwiseNot => BITWISE_NOT,
    /// `a << b` and `a << n` for primitive `n`.
    BitwiseLshift => BITWISE_LSHIFT,
    /// `a >> b` and `a >> n` for primitive `n`.
    BitwiseRshift => BITWISE_RSHIFT,
    /// `a.logical_and(&b)`
    LogicalAnd => LOGICAL_AND,
    /// `a.logical_or(&b)`
    LogicalOr => LOGICAL_OR,
    /// `a.logical_not()`
    LogicalNot => LOGICAL_NOT,
    /// `pre_increment` / `post_increment`
    Increment => INCREMENT,
    /// `pre_decrement` / `post_decrement`
    Decrement => DECREMENT,
    /// `a.convert()` back to the underlying value.
    Convert => CONVERT,
    /// `a == b` and `a != b`
    Comparable => COMPARABLE,
    /// [`Add`] and [`Subtract`].
    Additive => ADDITIVE,
    /// [`Multiply`], [`Divide`] and [`Modulo`].
    Multiplicative => MULTIPLICATIVE,
    /// All four bitwise logic families.
    BitwiseLogic => BITWISE_LOGIC,
    /// Both shift directions.
    BitwiseShift => BITWISE_SHIFT,
    /// All three logical families.
    Logic => LOGIC,
}

/// Implements [`Grants`] for a marker, expanding skill groups into their
/// members. Used by [`strong_type!`](crate::strong_type!).
#[doc(hidden)]
#[macro_export]
macro_rules! __grant_skill {
    ($marker:ident; Additive) => {
        $crate::__grant_skill!($marker; Add);
        $crate::__grant_skill!($marker; Subtract);
    };
    ($marker:ident; Multiplicative) => {
        $crate::__grant_skill!($marker; Multiply);
        $crate::__grant_skill!($marker; Divide);
        $crate::__grant_skill!($marker; Modulo);
    };
    ($marker:ident; BitwiseLogic) => {
        $crate::__grant_skill!($marker; BitwiseAnd);
        $crate::__grant_skill!($marker; BitwiseOr);
        $crate::__grant_skill!($marker; BitwiseXor);
        $crate::__grant_skill!($marker; BitwiseNot);
    };
    ($marker:ident; BitwiseShift) => {
        $crate::__grant_skill!($marker; BitwiseLshift);
        $crate::__grant_skill!($marker; BitwiseRshift);
    };
    ($marker:ident; Logic) => {
        $crate::__grant_skill!($marker; LogicalAnd);
        $crate::__grant_skill!($marker; LogicalOr);
        $crate::__grant_skill!($marker; LogicalNot);
    };
    ($marker:ident; $skill:ident) => {
        impl $crate::skill::Grants<$crate::skill::$skill> for $marker {}
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_are_distinct() {
        let atoms: Vec<Skills> = Skills::all().iter().collect();
        assert_eq!(atoms.len(), 18);
        for (i, a) in atoms.iter().enumerate() {
            assert_eq!(a.bits(), 1 << i);
        }
    }

    #[test]
    fn test_groups() {
        assert_eq!(Skills::ADDITIVE, Skills::ADD | Skills::SUBTRACT);
        assert_eq!(
            Skills::MULTIPLICATIVE,
            Skills::MULTIPLY | Skills::DIVIDE | Skills::MODULO
        );
        assert!(Skills::BITWISE_LOGIC.contains(Skills::BITWISE_NOT));
        assert!(!Skills::BITWISE_LOGIC.intersects(Skills::BITWISE_SHIFT));
        assert_eq!(Skills::LOGIC.bits().count_ones(), 3);
    }

    #[test]
    fn test_set_algebra() {
        let s = Skills::ADDITIVE | Skills::COMPARABLE;
        assert_eq!(s & Skills::ADD, Skills::ADD);
        assert_eq!(s & Skills::MULTIPLY, Skills::empty());
        assert!((!s).contains(Skills::CONVERT));
        assert!(!(!s).contains(Skills::ADD));
        assert_eq!(s.difference(Skills::ADDITIVE), Skills::COMPARABLE);
    }

    #[test]
    fn test_marker_flags() {
        assert_eq!(Add::FLAG, Skills::ADD);
        assert_eq!(Comparable::FLAG, Skills::COMPARABLE);
        assert_eq!(BitwiseShift::FLAG, Skills::BITWISE_SHIFT);
        assert_eq!(Logic::FLAG, Skills::LOGIC);
    }

    #[test]
    fn test_names_list_atoms_only() {
        let names: Vec<_> = Skills::ADDITIVE.names().collect();
        assert_eq!(names, ["ADD", "SUBTRACT"]);
        assert_eq!(Skills::empty().names().count(), 0);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            Skills::parse("ADD | COMPARABLE").unwrap(),
            Skills::ADD | Skills::COMPARABLE
        );
        assert_eq!(Skills::parse("ADDITIVE").unwrap(), Skills::ADDITIVE);
        assert_eq!(Skills::parse("").unwrap(), Skills::empty());
        assert!(matches!(
            Skills::parse("ADD | EXPONENTIATE"),
            Err(CoreError::InvalidSkills { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let s = Skills::ADDITIVE | Skills::CONVERT;
        let json = serde_json::to_string(&s).unwrap();
        let back: Skills = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
