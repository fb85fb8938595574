//! Field tags for records.
//!
//! [`Field`] names the role of one value in a file record (`Seq`, `Id`,
//! `Qual`, ...). Each variant also exists as a zero-sized type in this
//! module (`field::Seq`, `field::Id`, ...) implementing [`FieldTag`]; a
//! tuple of those types is a [`FieldList`], the compile-time schema of a
//! [`Record`](crate::Record).
//!
//! | Field            | Sequence IO | Alignment IO | Structure IO |
//! | ---------------- | ----------- | ------------ | ------------ |
//! | `Seq`            | x           | x            | x            |
//! | `Id`             | x           | x            | x            |
//! | `Qual`           | x           | x            | x            |
//! | `Offset`         |             | x            | x            |
//! | `Bpp` .. `Comment` |           |              | x            |
//! | `Alignment` .. `Evalue` |      | x            |              |
//!
//! `UserDefined0` to `UserDefined9` are free for custom formats.

use core::fmt;
use core::str::FromStr;

use tracing::debug;

use crate::error::{CoreError, Result};

/// Index returned by `index_of` when a field is absent.
pub const NPOS: usize = usize::MAX;

macro_rules! define_fields {
    ($( $(#[$doc:meta])* $variant:ident => $name:literal, )*) => {
        /// The fields used in file records.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Field {
            $( $(#[$doc])* $variant, )*
        }

        impl Field {
            /// Every field, in declaration order.
            pub const ALL: &'static [Field] = &[$(Field::$variant),*];

            /// The snake_case name of the field, e.g. `"ref_offset"`.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Field::$variant => $name, )*
                }
            }
        }

        impl FromStr for Field {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $( $name => Ok(Field::$variant), )*
                    _ => {
                        debug!(name = s, "rejected unknown field name");
                        Err(CoreError::UnknownField { name: s.to_owned() })
                    }
                }
            }
        }

        $(
            #[doc = concat!("Type-level tag for [`Field::", stringify!($variant), "`].")]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $variant;

            impl FieldTag for $variant {
                const FIELD: Field = Field::$variant;
            }
        )*
    };
}

define_fields! {
    /// The "sequence", usually a range of nucleotides or amino acids.
    Seq => "seq",
    /// The identifier, usually a string.
    Id => "id",
    /// The qualities, usually in Phred score notation.
    Qual => "qual",
    /// Start position of `Seq` (0-based), unsigned.
    Offset => "offset",
    /// Base pair probability matrix of interactions.
    Bpp => "bpp",
    /// Fixed interactions, usually a string of structure characters.
    Structure => "structure",
    /// Sequence and fixed interactions combined in one range.
    StructuredSeq => "structured_seq",
    /// Energy of a folded sequence.
    Energy => "energy",
    /// Reactivity values of the sequence characters.
    React => "react",
    /// Reactivity error values corresponding to `React`.
    ReactErr => "react_err",
    /// Comment of arbitrary content, usually a string.
    Comment => "comment",
    /// A pairwise alignment.
    Alignment => "alignment",
    /// Identifier of the reference sequence `Seq` was aligned to.
    RefId => "ref_id",
    /// The reference sequence.
    RefSeq => "ref_seq",
    /// Start position of `RefSeq` (0-based), unsigned.
    RefOffset => "ref_offset",
    /// Handle to the file header.
    HeaderPtr => "header_ptr",
    /// The alignment flag bits.
    Flag => "flag",
    /// Mate pair information: reference, offset and template length.
    Mate => "mate",
    /// Mapping quality, usually Phred-scaled.
    Mapq => "mapq",
    /// The CIGAR operations of the alignment.
    Cigar => "cigar",
    /// Optional SAM tags.
    Tags => "tags",
    /// The bit score, unsigned.
    BitScore => "bit_score",
    /// The e-value.
    Evalue => "evalue",
    UserDefined0 => "user_defined_0",
    UserDefined1 => "user_defined_1",
    UserDefined2 => "user_defined_2",
    UserDefined3 => "user_defined_3",
    UserDefined4 => "user_defined_4",
    UserDefined5 => "user_defined_5",
    UserDefined6 => "user_defined_6",
    UserDefined7 => "user_defined_7",
    UserDefined8 => "user_defined_8",
    UserDefined9 => "user_defined_9",
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Field {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Field {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Compile-time field lists
// ---------------------------------------------------------------------------

/// A zero-sized type standing for one [`Field`].
pub trait FieldTag: Copy + 'static {
    const FIELD: Field;
}

/// An ordered, duplicate-free list of field tags, written as a tuple of
/// [`FieldTag`] types: `(field::Seq, field::Id, field::Qual)`.
///
/// Any use of a list that names a field twice fails to compile, record or
/// no record:
///
/// ```compile_fail
/// use seqkit_core::field::{self, Field, FieldList};
///
/// let _ = <(field::Seq, field::Id, field::Seq) as FieldList>::index_of(Field::Seq);
/// ```
///
/// ```compile_fail
/// use seqkit_core::field::{self, FieldList};
///
/// let _ = <(field::Seq, field::Id, field::Seq) as FieldList>::SIZE;
/// ```
pub trait FieldList: 'static {
    /// The fields in order, as written. Prefer [`fields`](Self::fields),
    /// which also rejects duplicates.
    const FIELDS: &'static [Field];

    /// Fails const evaluation when a field occurs twice.
    const ASSERT_UNIQUE: () = assert!(
        all_distinct(Self::FIELDS),
        "You may not include a field twice into a field list."
    );

    /// Number of fields.
    const SIZE: usize = {
        let () = Self::ASSERT_UNIQUE;
        Self::FIELDS.len()
    };

    /// The fields in order.
    #[inline]
    fn fields() -> &'static [Field] {
        let () = Self::ASSERT_UNIQUE;
        Self::FIELDS
    }

    /// Position of `field`, or [`NPOS`] when absent.
    #[inline]
    fn index_of(field: Field) -> usize {
        index_of(Self::fields(), field)
    }

    /// Whether `field` is part of the list.
    #[inline]
    fn contains(field: Field) -> bool {
        Self::index_of(field) != NPOS
    }
}

/// Position of the first occurrence of `field` in `fields`, or [`NPOS`].
pub const fn index_of(fields: &[Field], field: Field) -> usize {
    let mut i = 0;
    while i < fields.len() {
        if fields[i] as u8 == field as u8 {
            return i;
        }
        i += 1;
    }
    NPOS
}

/// Whether no field occurs twice in `fields`.
pub const fn all_distinct(fields: &[Field]) -> bool {
    let mut i = 0;
    while i < fields.len() {
        let mut j = i + 1;
        while j < fields.len() {
            if fields[i] as u8 == fields[j] as u8 {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

macro_rules! impl_field_list {
    ($($F:ident),*) => {
        impl<$($F: FieldTag),*> FieldList for ($($F,)*) {
            const FIELDS: &'static [Field] = &[$($F::FIELD),*];
        }
    };
}

impl_field_list!();
impl_field_list!(F0);
impl_field_list!(F0, F1);
impl_field_list!(F0, F1, F2);
impl_field_list!(F0, F1, F2, F3);
impl_field_list!(F0, F1, F2, F3, F4);
impl_field_list!(F0, F1, F2, F3, F4, F5);
impl_field_list!(F0, F1, F2, F3, F4, F5, F6);
impl_field_list!(F0, F1, F2, F3, F4, F5, F6, F7);
impl_field_list!(F0, F1, F2, F3, F4, F5, F6, F7, F8);
impl_field_list!(F0, F1, F2, F3, F4, F5, F6, F7, F8, F9);
impl_field_list!(F0, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10);
impl_field_list!(F0, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11);

/// Name a field list and reject duplicates where it is declared.
///
/// ```
/// use seqkit_core::fields;
/// use seqkit_core::field::{Field, FieldList, NPOS};
///
/// fields! {
///     pub type FastqFields = [Seq, Id, Qual];
/// }
///
/// assert_eq!(FastqFields::index_of(Field::Id), 1);
/// assert_eq!(FastqFields::index_of(Field::Offset), NPOS);
/// ```
///
/// ```compile_fail
/// use seqkit_core::fields;
///
/// fields! {
///     pub type Broken = [Seq, Id, Seq];
/// }
///
/// fn main() {}
/// ```
#[macro_export]
macro_rules! fields {
    ($(#[$meta:meta])* $vis:vis type $name:ident = [$($field:ident),* $(,)?];) => {
        $(#[$meta])*
        $vis type $name = ($($crate::field::$field,)*);

        const _: () = <$name as $crate::field::FieldList>::ASSERT_UNIQUE;
    };
}

// ---------------------------------------------------------------------------
// Run-time field selections
// ---------------------------------------------------------------------------

/// A duplicate-free, ordered list of fields chosen at run time, e.g. the
/// output columns a user asked for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Field>", into = "Vec<Field>")
)]
pub struct FieldSelection {
    fields: Vec<Field>,
}

impl FieldSelection {
    /// Validate and wrap a list of fields.
    pub fn new(fields: impl Into<Vec<Field>>) -> Result<Self> {
        let fields = fields.into();
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].contains(field) {
                debug!(%field, "rejected duplicate field in selection");
                return Err(CoreError::DuplicateField { field: *field });
            }
        }
        Ok(Self { fields })
    }

    /// The selection described by a compile-time field list.
    pub fn from_list<F: FieldList>() -> Self {
        Self {
            fields: F::fields().to_vec(),
        }
    }

    /// Position of `field`, or [`NPOS`] when absent.
    pub fn index_of(&self, field: Field) -> usize {
        index_of(&self.fields, field)
    }

    /// Whether `field` was selected.
    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    /// Number of selected fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The selected fields in order.
    pub fn as_slice(&self) -> &[Field] {
        &self.fields
    }

    /// Iterate over the selected fields in order.
    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().copied()
    }
}

impl TryFrom<Vec<Field>> for FieldSelection {
    type Error = CoreError;

    fn try_from(fields: Vec<Field>) -> Result<Self> {
        Self::new(fields)
    }
}

impl From<FieldSelection> for Vec<Field> {
    fn from(selection: FieldSelection) -> Self {
        selection.fields
    }
}

/// Parses a comma separated list of field names, e.g. `"seq, id, qual"`.
impl FromStr for FieldSelection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let fields = s
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Field>>>()?;
        Self::new(fields)
    }
}

impl fmt::Display for FieldSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(field.as_str())?;
        }
        Ok(())
    }
}
