//! Skill-gated operators for [`StrongType`].
//!
//! Every implementation here is bounded on the marker granting the matching
//! skill and on the value type supporting the underlying operation:
//! - `StrongType op StrongType` for `+ - * / % & | ^ << >>`
//! - `&StrongType op &StrongType` for the same set, cloning the values
//! - `StrongType << n` / `StrongType >> n` for every primitive integer `n`
//! - `!StrongType` (bitwise not)
//! - `logical_*`, `*_increment` and `*_decrement` as methods, since Rust
//!   cannot overload `&&`, `||` or `++`
//!
//! With every skill granted, each operator is available:
//!
//! ```
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     type Bits = StrongType<u32, BitsMarker> with
//!         Add | Subtract | Multiply | Divide | Modulo | BitwiseAnd | BitwiseOr |
//!         BitwiseXor | BitwiseNot | BitwiseLshift | BitwiseRshift | LogicalAnd |
//!         LogicalOr | LogicalNot | Increment | Decrement | Convert | Comparable;
//! }
//!
//! let mut a = Bits::new(12);
//! let b = Bits::new(2);
//! let _ = a + b;
//! let _ = a - b;
//! let _ = a * b;
//! let _ = a / b;
//! let _ = a % b;
//! let _ = a & b;
//! let _ = a | b;
//! let _ = a ^ b;
//! let _ = !a;
//! let _ = a << b;
//! let _ = a << 2_u32;
//! let _ = a >> b;
//! let _ = a >> 2_u32;
//! let _ = a.logical_and(&b);
//! let _ = a.logical_or(&b);
//! let _ = a.logical_not();
//! a.pre_increment();
//! let _ = a.post_increment();
//! a.pre_decrement();
//! let _ = a.post_decrement();
//! let _: u32 = a.convert();
//! let _ = a == b;
//! ```
//!
//! Taking away one skill removes exactly the operators it covers. Shifting
//! by another strong value and by a primitive amount are checked separately:
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     type Bits = StrongType<u32, BitsMarker> with
//!         Subtract | Multiply | Divide | Modulo | BitwiseAnd | BitwiseOr |
//!         BitwiseXor | BitwiseNot | BitwiseLshift | BitwiseRshift | LogicalAnd |
//!         LogicalOr | LogicalNot | Increment | Decrement | Convert | Comparable;
//! }
//!
//! let mut a = Bits::new(12);
//! let b = Bits::new(2);
//! let _ = a + b;
//! ```
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     type Bits = StrongType<u32, BitsMarker> with
//!         Add | Multiply | Divide | Modulo | BitwiseAnd | BitwiseOr |
//!         BitwiseXor | BitwiseNot | BitwiseLshift | BitwiseRshift | LogicalAnd |
//!         LogicalOr | LogicalNot | Increment | Decrement | Convert | Comparable;
//! }
//!
//! let mut a = Bits::new(12);
//! let b = Bits::new(2);
//! let _ = a - b;
//! ```
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     type Bits = StrongType<u32, BitsMarker> with
//!         Add | Subtract | Divide | Modulo | BitwiseAnd | BitwiseOr |
//!         BitwiseXor | BitwiseNot | BitwiseLshift | BitwiseRshift | LogicalAnd |
//!         LogicalOr | LogicalNot | Increment | Decrement | Convert | Comparable;
//! }
//!
//! let mut a = Bits::new(12);
//! let b = Bits::new(2);
//! let _ = a * b;
//! ```
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     type Bits = StrongType<u32, BitsMarker> with
//!         Add | Subtract | Multiply | Modulo | BitwiseAnd | BitwiseOr |
//!         BitwiseXor | BitwiseNot | BitwiseLshift | BitwiseRshift | LogicalAnd |
//!         LogicalOr | LogicalNot | Increment | Decrement | Convert | Comparable;
//! }
//!
//! let mut a = Bits::new(12);
//! let b = Bits::new(2);
//! let _ = a / b;
//! ```
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     type Bits = StrongType<u32, BitsMarker> with
//!         Add | Subtract | Multiply | Divide | BitwiseAnd | BitwiseOr |
//!         BitwiseXor | BitwiseNot | BitwiseLshift | BitwiseRshift | LogicalAnd |
//!         LogicalOr | LogicalNot | Increment | Decrement | Convert | Comparable;
//! }
//!
//! let mut a = Bits::new(12);
//! let b = Bits::new(2);
//! let _ = a % b;
//! ```
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     type Bits = StrongType<u32, BitsMarker> with
//!         Add | Subtract | Multiply | Divide | Modulo | BitwiseOr | BitwiseXor |
//!         BitwiseNot | BitwiseLshift | BitwiseRshift | LogicalAnd | LogicalOr |
//!         LogicalNot | Increment | Decrement | Convert | Comparable;
//! }
//!
//! let mut a = Bits::new(12);
//! let b = Bits::new(2);
//! let _ = a & b;
//! ```
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     type Bits = StrongType<u32, BitsMarker> with
//!         Add | Subtract | Multiply | Divide | Modulo | BitwiseAnd | BitwiseXor |
//!         BitwiseNot | BitwiseLshift | BitwiseRshift | LogicalAnd | LogicalOr |
//!         LogicalNot | Increment | Decrement | Convert | Comparable;
//! }
//!
//! let mut a = Bits::new(12);
//! let b = Bits::new(2);
//! let _ = a | b;
//! ```
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     type Bits = StrongType<u32, BitsMarker> with
//!         Add | Subtract | Multiply | Divide | Modulo | BitwiseAnd | BitwiseOr |
//!         BitwiseNot | BitwiseLshift | BitwiseRshift | LogicalAnd | LogicalOr |
//!         LogicalNot | Increment | Decrement | Convert | Comparable;
//! }
//!
//! let mut a = Bits::new(12);
//! let b = Bits::new(2);
//! let _ = a ^ b;
//! ```
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     type Bits = StrongType<u32, BitsMarker> with
//!         Add | Subtract | Multiply | Divide | Modulo | BitwiseAnd | BitwiseOr |
//!         BitwiseXor | BitwiseLshift | BitwiseRshift | LogicalAnd | LogicalOr |
//!         LogicalNot | Increment | Decrement | Convert | Comparable;
//! }
//!
//! let mut a = Bits::new(12);
//! let b = Bits::new(2);
//! let _ = !a;
//! ```
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     type Bits = StrongType<u32, BitsMarker> with
//!         Add | Subtract | Multiply | Divide | Modulo | BitwiseAnd | BitwiseOr |
//!         BitwiseXor | BitwiseNot | BitwiseRshift | LogicalAnd | LogicalOr |
//!         LogicalNot | Increment | Decrement | Convert | Comparable;
//! }
//!
//! let mut a = Bits::new(12);
//! let b = Bits::new(2);
//! let _ = a << b;
//! ```
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     type Bits = StrongType<u32, BitsMarker> with
//!         Add | Subtract | Multiply | Divide | Modulo | BitwiseAnd | BitwiseOr |
//!         BitwiseXor | BitwiseNot | BitwiseRshift | LogicalAnd | LogicalOr |
//!         LogicalNot | Increment | Decrement | Convert | Comparable;
//! }
//!
//! let mut a = Bits::new(12);
//! let b = Bits::new(2);
//! let _ = a << 2_u32;
//! ```
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     type Bits = StrongType<u32, BitsMarker> with
//!         Add | Subtract | Multiply | Divide | Modulo | BitwiseAnd | BitwiseOr |
//!         BitwiseXor | BitwiseNot | BitwiseLshift | LogicalAnd | LogicalOr |
//!         LogicalNot | Increment | Decrement | Convert | Comparable;
//! }
//!
//! let mut a = Bits::new(12);
//! let b = Bits::new(2);
//! let _ = a >> b;
//! ```
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     type Bits = StrongType<u32, BitsMarker> with
//!         Add | Subtract | Multiply | Divide | Modulo | BitwiseAnd | BitwiseOr |
//!         BitwiseXor | BitwiseNot | BitwiseLshift | LogicalAnd | LogicalOr |
//!         LogicalNot | Increment | Decrement | Convert | Comparable;
//! }
//!
//! let mut a = Bits::new(12);
//! let b = Bits::new(2);
//! let _ = a >> 2_u32;
//! ```
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     type Bits = StrongType<u32, BitsMarker> with
//!         Add | Subtract | Multiply | Divide | Modulo | BitwiseAnd | BitwiseOr |
//!         BitwiseXor | BitwiseNot | BitwiseLshift | BitwiseRshift | LogicalOr |
//!         LogicalNot | Increment | Decrement | Convert | Comparable;
//! }
//!
//! let mut a = Bits::new(12);
//! let b = Bits::new(2);
//! let _ = a.logical_and(&b);
//! ```
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     type Bits = StrongType<u32, BitsMarker> with
//!         Add | Subtract | Multiply | Divide | Modulo | BitwiseAnd | BitwiseOr |
//!         BitwiseXor | BitwiseNot | BitwiseLshift | BitwiseRshift | LogicalAnd |
//!         LogicalNot | Increment | Decrement | Convert | Comparable;
//! }
//!
//! let mut a = Bits::new(12);
//! let b = Bits::new(2);
//! let _ = a.logical_or(&b);
//! ```
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     type Bits = StrongType<u32, BitsMarker> with
//!         Add | Subtract | Multiply | Divide | Modulo | BitwiseAnd | BitwiseOr |
//!         BitwiseXor | BitwiseNot | BitwiseLshift | BitwiseRshift | LogicalAnd |
//!         LogicalOr | Increment | Decrement | Convert | Comparable;
//! }
//!
//! let mut a = Bits::new(12);
//! let b = Bits::new(2);
//! let _ = a.logical_not();
//! ```
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     type Bits = StrongType<u32, BitsMarker> with
//!         Add | Subtract | Multiply | Divide | Modulo | BitwiseAnd | BitwiseOr |
//!         BitwiseXor | BitwiseNot | BitwiseLshift | BitwiseRshift | LogicalAnd |
//!         LogicalOr | LogicalNot | Decrement | Convert | Comparable;
//! }
//!
//! let mut a = Bits::new(12);
//! let b = Bits::new(2);
//! a.pre_increment();
//! ```
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     type Bits = StrongType<u32, BitsMarker> with
//!         Add | Subtract | Multiply | Divide | Modulo | BitwiseAnd | BitwiseOr |
//!         BitwiseXor | BitwiseNot | BitwiseLshift | BitwiseRshift | LogicalAnd |
//!         LogicalOr | LogicalNot | Decrement | Convert | Comparable;
//! }
//!
//! let mut a = Bits::new(12);
//! let b = Bits::new(2);
//! let _ = a.post_increment();
//! ```
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     type Bits = StrongType<u32, BitsMarker> with
//!         Add | Subtract | Multiply | Divide | Modulo | BitwiseAnd | BitwiseOr |
//!         BitwiseXor | BitwiseNot | BitwiseLshift | BitwiseRshift | LogicalAnd |
//!         LogicalOr | LogicalNot | Increment | Convert | Comparable;
//! }
//!
//! let mut a = Bits::new(12);
//! let b = Bits::new(2);
//! a.pre_decrement();
//! ```
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     type Bits = StrongType<u32, BitsMarker> with
//!         Add | Subtract | Multiply | Divide | Modulo | BitwiseAnd | BitwiseOr |
//!         BitwiseXor | BitwiseNot | BitwiseLshift | BitwiseRshift | LogicalAnd |
//!         LogicalOr | LogicalNot | Increment | Convert | Comparable;
//! }
//!
//! let mut a = Bits::new(12);
//! let b = Bits::new(2);
//! let _ = a.post_decrement();
//! ```
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     type Bits = StrongType<u32, BitsMarker> with
//!         Add | Subtract | Multiply | Divide | Modulo | BitwiseAnd | BitwiseOr |
//!         BitwiseXor | BitwiseNot | BitwiseLshift | BitwiseRshift | LogicalAnd |
//!         LogicalOr | LogicalNot | Increment | Decrement | Comparable;
//! }
//!
//! let mut a = Bits::new(12);
//! let b = Bits::new(2);
//! let _: u32 = a.convert();
//! ```
//!
//! ```compile_fail
//! use seqkit_core::strong_type;
//!
//! strong_type! {
//!     type Bits = StrongType<u32, BitsMarker> with
//!         Add | Subtract | Multiply | Divide | Modulo | BitwiseAnd | BitwiseOr |
//!         BitwiseXor | BitwiseNot | BitwiseLshift | BitwiseRshift | LogicalAnd |
//!         LogicalOr | LogicalNot | Increment | Decrement | Convert;
//! }
//!
//! let mut a = Bits::new(12);
//! let b = Bits::new(2);
//! let _ = a == b;
//! ```

use core::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Not, Rem, Shl, Shr, Sub};

use crate::skill::{self, Grants};

use super::StrongType;

// ======================================================================
// StrongType op StrongType
// ======================================================================

macro_rules! impl_binop {
    ($skill:ident, $trait:ident, $method:ident, $op:tt) => {
        impl<V, D> $trait for StrongType<V, D>
        where
            V: $trait<Output = V>,
            D: Grants<skill::$skill>,
        {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::new(self.value $op rhs.value)
            }
        }

        impl<V, D> $trait for &StrongType<V, D>
        where
            V: Clone + $trait<Output = V>,
            D: Grants<skill::$skill>,
        {
            type Output = StrongType<V, D>;

            #[inline]
            fn $method(self, rhs: Self) -> StrongType<V, D> {
                StrongType::new(self.value.clone() $op rhs.value.clone())
            }
        }
    };
}

impl_binop!(Add, Add, add, +);
impl_binop!(Subtract, Sub, sub, -);
impl_binop!(Multiply, Mul, mul, *);
impl_binop!(Divide, Div, div, /);
impl_binop!(Modulo, Rem, rem, %);
impl_binop!(BitwiseAnd, BitAnd, bitand, &);
impl_binop!(BitwiseOr, BitOr, bitor, |);
impl_binop!(BitwiseXor, BitXor, bitxor, ^);
impl_binop!(BitwiseLshift, Shl, shl, <<);
impl_binop!(BitwiseRshift, Shr, shr, >>);

// ======================================================================
// StrongType << n  (plain integral shift amount, same skill bit)
// ======================================================================

macro_rules! impl_shift_by_primitive {
    ($($int:ty),* $(,)?) => {
        $(
            impl<V, D> Shl<$int> for StrongType<V, D>
            where
                V: Shl<$int, Output = V>,
                D: Grants<skill::BitwiseLshift>,
            {
                type Output = Self;

                #[inline]
                fn shl(self, rhs: $int) -> Self {
                    Self::new(self.value << rhs)
                }
            }

            impl<V, D> Shr<$int> for StrongType<V, D>
            where
                V: Shr<$int, Output = V>,
                D: Grants<skill::BitwiseRshift>,
            {
                type Output = Self;

                #[inline]
                fn shr(self, rhs: $int) -> Self {
                    Self::new(self.value >> rhs)
                }
            }
        )*
    };
}

impl_shift_by_primitive!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// ======================================================================
// Bitwise not
// ======================================================================

impl<V, D> Not for StrongType<V, D>
where
    V: Not<Output = V>,
    D: Grants<skill::BitwiseNot>,
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self::new(!self.value)
    }
}

impl<V, D> Not for &StrongType<V, D>
where
    V: Clone + Not<Output = V>,
    D: Grants<skill::BitwiseNot>,
{
    type Output = StrongType<V, D>;

    #[inline]
    fn not(self) -> StrongType<V, D> {
        StrongType::new(!self.value.clone())
    }
}

// ======================================================================
// Logical operators
// ======================================================================

/// Values with a truth value: `false` and zero are false, everything else
/// is true.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_int {
    ($($ty:ty),*) => {
        $(
            impl Truthy for $ty {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<V: Truthy, D: Grants<skill::LogicalAnd>> StrongType<V, D> {
    /// `a && b` on the held values.
    #[inline]
    pub fn logical_and(&self, other: &Self) -> bool {
        self.value.is_truthy() && other.value.is_truthy()
    }
}

impl<V: Truthy, D: Grants<skill::LogicalOr>> StrongType<V, D> {
    /// `a || b` on the held values.
    #[inline]
    pub fn logical_or(&self, other: &Self) -> bool {
        self.value.is_truthy() || other.value.is_truthy()
    }
}

impl<V: Truthy, D: Grants<skill::LogicalNot>> StrongType<V, D> {
    /// `!a` on the held value's truth value.
    #[inline]
    pub fn logical_not(&self) -> bool {
        !self.value.is_truthy()
    }
}

// ======================================================================
// Increment / decrement
// ======================================================================

/// Values that can move one unit up or down in place.
///
/// Overflow behaves like `+= 1` / `-= 1` on the value type.
pub trait Step {
    fn step_up(&mut self);
    fn step_down(&mut self);
}

macro_rules! impl_step {
    ($one:expr => $($ty:ty),*) => {
        $(
            impl Step for $ty {
                #[inline]
                fn step_up(&mut self) {
                    *self += $one;
                }

                #[inline]
                fn step_down(&mut self) {
                    *self -= $one;
                }
            }
        )*
    };
}

impl_step!(1 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_step!(1.0 => f32, f64);

impl<V: Step, D: Grants<skill::Increment>> StrongType<V, D> {
    /// Increment in place and return the updated value.
    #[inline]
    pub fn pre_increment(&mut self) -> &mut Self {
        self.value.step_up();
        self
    }

    /// Increment in place and return the value from before.
    #[inline]
    pub fn post_increment(&mut self) -> Self
    where
        V: Clone,
    {
        let snapshot = Self::new(self.value.clone());
        self.value.step_up();
        snapshot
    }
}

impl<V: Step, D: Grants<skill::Decrement>> StrongType<V, D> {
    /// Decrement in place and return the updated value.
    #[inline]
    pub fn pre_decrement(&mut self) -> &mut Self {
        self.value.step_down();
        self
    }

    /// Decrement in place and return the value from before.
    #[inline]
    pub fn post_decrement(&mut self) -> Self
    where
        V: Clone,
    {
        let snapshot = Self::new(self.value.clone());
        self.value.step_down();
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::skill::Skills;

    crate::strong_type! {
        pub type Full = StrongType<i64, FullMarker>
            with Additive | Multiplicative | BitwiseLogic | BitwiseShift | Logic
                | Increment | Decrement | Comparable | Convert;
    }

    crate::strong_type! {
        pub type Mask = StrongType<u32, MaskMarker> with BitwiseLogic | BitwiseShift | Comparable;
    }

    crate::strong_type! {
        pub type Counter = StrongType<u16, CounterMarker> with Increment | Decrement | Comparable;
    }

    crate::strong_type! {
        pub type Flag = StrongType<bool, FlagMarker> with Logic | Comparable;
    }

    crate::strong_type! {
        pub type Score = StrongType<f64, ScoreMarker> with Additive | Multiply | Divide | Increment;
    }

    fn f(v: i64) -> Full {
        Full::new(v)
    }

    #[test]
    fn test_full_skill_set() {
        assert_eq!(Full::SKILLS, Skills::all());
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(f(7) + f(5), f(12));
        assert_eq!(f(7) - f(5), f(2));
        assert_eq!(f(7) * f(5), f(35));
        assert_eq!(f(7) / f(2), f(3));
        assert_eq!(f(7) % f(5), f(2));
        assert_eq!(f(-7) % f(5), f(-2));
    }

    #[test]
    fn test_reference_operands_are_untouched() {
        let a = f(10);
        let b = f(4);
        assert_eq!(&a - &b, f(6));
        assert_eq!(&a & &b, f(0));
        assert_eq!(!&a, f(!10));
        assert_eq!(a, f(10));
        assert_eq!(b, f(4));
    }

    #[test]
    fn test_bitwise() {
        let a = Mask::new(0b1100);
        let b = Mask::new(0b1010);
        assert_eq!(a & b, Mask::new(0b1000));
        assert_eq!(a | b, Mask::new(0b1110));
        assert_eq!(a ^ b, Mask::new(0b0110));
        assert_eq!(!Mask::new(0), Mask::new(u32::MAX));
    }

    #[test]
    fn test_shift_by_strong_and_plain() {
        let a = Mask::new(1);
        assert_eq!(a << Mask::new(4), Mask::new(16));
        assert_eq!(a << 4_u8, Mask::new(16));
        assert_eq!(a << 4_usize, Mask::new(16));
        assert_eq!(Mask::new(16) >> Mask::new(2), Mask::new(4));
        assert_eq!(Mask::new(16) >> 2_i32, Mask::new(4));
        assert_eq!(f(3) << 2_u32, f(12));
    }

    #[test]
    fn test_logical() {
        let t = Flag::new(true);
        let n = Flag::new(false);
        assert!(t.logical_and(&t));
        assert!(!t.logical_and(&n));
        assert!(t.logical_or(&n));
        assert!(!n.logical_or(&n));
        assert!(n.logical_not());
        assert!(!t.logical_not());

        assert!(f(0).logical_not());
        assert!(f(2).logical_and(&f(-1)));
        assert!(!f(2).logical_and(&f(0)));
    }

    #[test]
    fn test_increment() {
        let mut c = Counter::new(5);
        let before = c.post_increment();
        assert_eq!(before, Counter::new(5));
        assert_eq!(*c.get(), 6);

        assert_eq!(*c.pre_increment().get(), 7);
        assert_eq!(*c.get(), 7);

        c.pre_increment().pre_increment();
        assert_eq!(c, Counter::new(9));
    }

    #[test]
    fn test_decrement() {
        let mut c = Counter::new(5);
        assert_eq!(c.post_decrement(), Counter::new(5));
        assert_eq!(*c.get(), 4);
        assert_eq!(*c.pre_decrement().get(), 3);
    }

    #[test]
    fn test_float_value() {
        let mut s = Score::new(1.5);
        s.pre_increment();
        assert!((*(s + Score::new(0.25)).get() - 2.75).abs() < f64::EPSILON);
        assert!((*(Score::new(3.0) / Score::new(2.0)).get() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_convert() {
        let v: i64 = f(-3).convert();
        assert_eq!(v, -3);
    }

    proptest! {
        #[test]
        fn prop_equality_matches_values(a in any::<i64>(), b in any::<i64>()) {
            let (x, y) = (f(a), f(b));
            prop_assert_eq!(x == y, a == b);
            prop_assert_eq!(x == y, y == x);
            prop_assert_eq!(x != y, !(x == y));
            prop_assert!(x == x);
        }

        #[test]
        fn prop_binops_match_values(a in any::<u32>(), b in any::<u32>(), s in 0_u32..32) {
            let (x, y) = (Mask::new(a), Mask::new(b));
            prop_assert_eq!(*(x & y).get(), a & b);
            prop_assert_eq!(*(x | y).get(), a | b);
            prop_assert_eq!(*(x ^ y).get(), a ^ b);
            prop_assert_eq!(*(x << s).get(), a << s);
            prop_assert_eq!(*(x >> Mask::new(s)).get(), a >> s);
        }

        #[test]
        fn prop_post_increment_snapshots(start in 0_u16..u16::MAX) {
            let mut c = Counter::new(start);
            let snapshot = c.post_increment();
            prop_assert_eq!(*snapshot.get(), start);
            prop_assert_eq!(*c.get(), start + 1);
        }
    }
}
