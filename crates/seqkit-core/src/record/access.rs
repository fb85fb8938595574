//! Tuple-arity implementations behind [`Record`] access.
//!
//! For every arity from 0 to 12 this generates:
//! - [`RecordLayout`], pairing a value tuple with a field tuple of the same
//!   length (any other pairing has no implementation);
//! - one [`GetField`] and one [`GetByType`] implementation per position,
//!   told apart by the type-level position in [`index`].
//!
//! `record.get(field::Id)` leaves the position to inference. It resolves
//! when exactly one position carries the tag and fails to compile otherwise.

use crate::field::{FieldList, FieldTag};

use super::Record;

/// Type-level positions `I0` to `I11`.
pub mod index {
    macro_rules! positions {
        ($($name:ident),*) => {
            $(
                #[doc = concat!("Position `", stringify!($name), "`.")]
                #[derive(Debug)]
                pub enum $name {}
            )*
        };
    }

    positions!(I0, I1, I2, I3, I4, I5, I6, I7, I8, I9, I10, I11);
}

/// Pairs a tuple of value types with a field list of the same length.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used with the field list `{F}`",
    note = "a record needs exactly one field tag per element type"
)]
pub trait RecordLayout<F: FieldList> {
    /// Number of elements in the tuple.
    const SIZE: usize;
}

/// Access to the element tagged `Tag`, at position `I`.
#[diagnostic::on_unimplemented(
    message = "the record does not contain the field `{Tag}`",
    label = "`{Tag}` is not in this record's field list"
)]
pub trait GetField<Tag, I> {
    type Output;

    fn field(&self) -> &Self::Output;
    fn field_mut(&mut self) -> &mut Self::Output;
    fn into_field(self) -> Self::Output;
}

/// Access to the element of type `U`, at position `I`.
#[diagnostic::on_unimplemented(message = "the record has no element of type `{U}`")]
pub trait GetByType<U, I> {
    fn by_type(&self) -> &U;
    fn by_type_mut(&mut self) -> &mut U;
}

impl RecordLayout<()> for () {
    const SIZE: usize = 0;
}

macro_rules! impl_record_arity {
    (@positions $all:tt $(($idx:tt $T:ident $F:ident $I:ident))+) => {
        $( impl_record_arity!(@one $all $idx $T $F $I); )+
    };

    (@one [$(($aidx:tt $AT:ident $AF:ident $AI:ident))+] $idx:tt $T:ident $F:ident $I:ident) => {
        impl<$($AT,)+ $($AF: FieldTag,)+> GetField<$F, index::$I> for Record<($($AT,)+), ($($AF,)+)> {
            type Output = $T;

            #[inline]
            fn field(&self) -> &$T {
                &self.values.$idx
            }

            #[inline]
            fn field_mut(&mut self) -> &mut $T {
                &mut self.values.$idx
            }

            #[inline]
            fn into_field(self) -> $T {
                self.values.$idx
            }
        }

        impl<$($AT,)+ $($AF: FieldTag,)+> GetByType<$T, index::$I> for Record<($($AT,)+), ($($AF,)+)> {
            #[inline]
            fn by_type(&self) -> &$T {
                &self.values.$idx
            }

            #[inline]
            fn by_type_mut(&mut self) -> &mut $T {
                &mut self.values.$idx
            }
        }
    };

    ($size:literal; $(($idx:tt $T:ident $F:ident $I:ident))+) => {
        impl<$($T,)+ $($F: FieldTag,)+> RecordLayout<($($F,)+)> for ($($T,)+) {
            const SIZE: usize = $size;
        }

        impl_record_arity!(@positions [$(($idx $T $F $I))+] $(($idx $T $F $I))+);
    };
}

impl_record_arity!(1; (0 T0 F0 I0));
impl_record_arity!(2; (0 T0 F0 I0) (1 T1 F1 I1));
impl_record_arity!(3; (0 T0 F0 I0) (1 T1 F1 I1) (2 T2 F2 I2));
impl_record_arity!(4; (0 T0 F0 I0) (1 T1 F1 I1) (2 T2 F2 I2) (3 T3 F3 I3));
impl_record_arity!(5; (0 T0 F0 I0) (1 T1 F1 I1) (2 T2 F2 I2) (3 T3 F3 I3) (4 T4 F4 I4));
impl_record_arity!(6;
    (0 T0 F0 I0) (1 T1 F1 I1) (2 T2 F2 I2) (3 T3 F3 I3) (4 T4 F4 I4) (5 T5 F5 I5)
);
impl_record_arity!(7;
    (0 T0 F0 I0) (1 T1 F1 I1) (2 T2 F2 I2) (3 T3 F3 I3) (4 T4 F4 I4) (5 T5 F5 I5)
    (6 T6 F6 I6)
);
impl_record_arity!(8;
    (0 T0 F0 I0) (1 T1 F1 I1) (2 T2 F2 I2) (3 T3 F3 I3) (4 T4 F4 I4) (5 T5 F5 I5)
    (6 T6 F6 I6) (7 T7 F7 I7)
);
impl_record_arity!(9;
    (0 T0 F0 I0) (1 T1 F1 I1) (2 T2 F2 I2) (3 T3 F3 I3) (4 T4 F4 I4) (5 T5 F5 I5)
    (6 T6 F6 I6) (7 T7 F7 I7) (8 T8 F8 I8)
);
impl_record_arity!(10;
    (0 T0 F0 I0) (1 T1 F1 I1) (2 T2 F2 I2) (3 T3 F3 I3) (4 T4 F4 I4) (5 T5 F5 I5)
    (6 T6 F6 I6) (7 T7 F7 I7) (8 T8 F8 I8) (9 T9 F9 I9)
);
impl_record_arity!(11;
    (0 T0 F0 I0) (1 T1 F1 I1) (2 T2 F2 I2) (3 T3 F3 I3) (4 T4 F4 I4) (5 T5 F5 I5)
    (6 T6 F6 I6) (7 T7 F7 I7) (8 T8 F8 I8) (9 T9 F9 I9) (10 T10 F10 I10)
);
impl_record_arity!(12;
    (0 T0 F0 I0) (1 T1 F1 I1) (2 T2 F2 I2) (3 T3 F3 I3) (4 T4 F4 I4) (5 T5 F5 I5)
    (6 T6 F6 I6) (7 T7 F7 I7) (8 T8 F8 I8) (9 T9 F9 I9) (10 T10 F10 I10) (11 T11 F11 I11)
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{self, Field};

    type Wide = Record<
        (u8, u16, u32, u64, i8, i16, i32, i64, String, Vec<u8>, bool, char),
        (
            field::Seq,
            field::Id,
            field::Qual,
            field::Offset,
            field::Bpp,
            field::Structure,
            field::Energy,
            field::React,
            field::Comment,
            field::Cigar,
            field::Flag,
            field::UserDefined9,
        ),
    >;

    #[test]
    fn test_layout_size() {
        assert_eq!(<(String, u8) as RecordLayout<(field::Id, field::Mapq)>>::SIZE, 2);
        assert_eq!(<() as RecordLayout<()>>::SIZE, 0);
        assert_eq!(Wide::SIZE, 12);
    }

    #[test]
    fn test_widest_record() {
        let mut rec = Wide::default();
        *rec.get_mut(field::UserDefined9) = 'x';
        *rec.get_mut(field::Offset) = 1 << 40;
        rec.get_mut(field::Comment).push_str("note");

        assert_eq!(*rec.get(field::UserDefined9), 'x');
        assert_eq!(rec.3, 1 << 40);
        assert_eq!(Wide::index_of(Field::UserDefined9), 11);
        assert_eq!(rec.get_by_type::<String, _>(), "note");

        rec.clear();
        assert_eq!(rec, Wide::default());
    }

    #[test]
    fn test_single_field_record() {
        let rec: Record<(f64,), (field::Evalue,)> = Record::new((1e-5,));
        assert!((rec.into_field(field::Evalue) - 1e-5).abs() < f64::EPSILON);
    }
}
