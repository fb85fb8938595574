//! Tag-indexed records.
//!
//! A [`Record<T, F>`] is a tuple `T` whose positions are additionally named
//! by the field list `F`. Position `i` holds a `T.i` and is called `F.i`:
//!
//! ```
//! use seqkit_core::field::{self, Field};
//! use seqkit_core::Record;
//!
//! type FastqRecord = Record<(String, String, Vec<u8>), (field::Seq, field::Id, field::Qual)>;
//!
//! let mut rec = FastqRecord::default();
//! rec.get_mut(field::Seq).push_str("ACGT");
//! *rec.get_mut(field::Id) = "read1".into();
//! rec.get_mut(field::Qual).extend(b"IIII");
//!
//! assert_eq!(rec.get(field::Seq), "ACGT");
//! assert_eq!(rec.0, "ACGT");
//! assert_eq!(FastqRecord::index_of(Field::Qual), 2);
//!
//! rec.clear();
//! assert!(rec.get(field::Qual).is_empty());
//! ```
//!
//! Asking for a field the record does not have is a compile error:
//!
//! ```compile_fail
//! use seqkit_core::field;
//! use seqkit_core::Record;
//!
//! let rec: Record<(String, String), (field::Seq, field::Id)> = Record::default();
//! let _ = rec.get(field::Offset);
//! ```
//!
//! So are field lists with duplicates and type/field lists of different
//! length:
//!
//! ```compile_fail
//! use seqkit_core::field;
//! use seqkit_core::Record;
//!
//! let rec: Record<(String, String), (field::Seq, field::Seq)> = Record::default();
//! ```
//!
//! ```compile_fail
//! use seqkit_core::field;
//! use seqkit_core::Record;
//!
//! let rec: Record<(String, String), (field::Seq,)> = Record::default();
//! ```
//!
//! The duplicate check does not wait for a record to be built. Asking the
//! record type about its layout is enough:
//!
//! ```compile_fail
//! use seqkit_core::field::{self, Field};
//! use seqkit_core::Record;
//!
//! type Broken = Record<(String, String, String), (field::Seq, field::Id, field::Seq)>;
//! let _ = Broken::index_of(Field::Seq);
//! ```
//!
//! ```compile_fail
//! use seqkit_core::field;
//! use seqkit_core::Record;
//!
//! type Broken = Record<(String, String, String), (field::Seq, field::Id, field::Seq)>;
//! let _ = Broken::fields();
//! ```

mod access;

pub use access::{index, GetByType, GetField, RecordLayout};

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Deref, DerefMut};

use tracing::trace;

use crate::clear::Clear;
use crate::field::{self, Field, FieldList};

/// A tuple of values addressable by position, by type and by field tag.
///
/// `T` is a tuple of element types and `F` a tuple of
/// [`FieldTag`](crate::field::FieldTag) types of the same length. Records
/// with a duplicate tag in `F` fail to compile as soon as one is created or
/// its layout is queried.
pub struct Record<T, F>
where
    T: RecordLayout<F>,
    F: FieldList,
{
    values: T,
    fields: PhantomData<fn() -> F>,
}

impl<T, F> Record<T, F>
where
    T: RecordLayout<F>,
    F: FieldList,
{
    /// Number of elements.
    pub const SIZE: usize = {
        let () = F::ASSERT_UNIQUE;
        <T as RecordLayout<F>>::SIZE
    };

    /// Index returned by [`index_of`](Self::index_of) for absent fields.
    pub const NPOS: usize = field::NPOS;

    /// Build a record from its tuple of values.
    #[inline]
    pub fn new(values: T) -> Self {
        let () = F::ASSERT_UNIQUE;
        Self {
            values,
            fields: PhantomData,
        }
    }

    /// The record's fields in positional order.
    #[inline]
    pub fn fields() -> &'static [Field] {
        F::fields()
    }

    /// Position of `tag`, or [`NPOS`](Self::NPOS) when absent.
    #[inline]
    pub const fn index_of(tag: Field) -> usize {
        let () = F::ASSERT_UNIQUE;
        field::index_of(F::FIELDS, tag)
    }

    /// Whether `tag` is part of this record.
    #[inline]
    pub const fn contains(tag: Field) -> bool {
        Self::index_of(tag) != field::NPOS
    }

    /// The value tagged `tag`.
    #[inline]
    pub fn get<Tag, I>(&self, _tag: Tag) -> &<Self as GetField<Tag, I>>::Output
    where
        Self: GetField<Tag, I>,
    {
        GetField::field(self)
    }

    /// The value tagged `tag`, mutably.
    #[inline]
    pub fn get_mut<Tag, I>(&mut self, _tag: Tag) -> &mut <Self as GetField<Tag, I>>::Output
    where
        Self: GetField<Tag, I>,
    {
        GetField::field_mut(self)
    }

    /// Move the value tagged `tag` out of the record.
    #[inline]
    pub fn into_field<Tag, I>(self, _tag: Tag) -> <Self as GetField<Tag, I>>::Output
    where
        Self: GetField<Tag, I>,
    {
        GetField::into_field(self)
    }

    /// The only value of type `U`. Does not compile when `U` is absent or
    /// occurs more than once.
    #[inline]
    pub fn get_by_type<U, I>(&self) -> &U
    where
        Self: GetByType<U, I>,
    {
        GetByType::by_type(self)
    }

    #[inline]
    pub fn get_by_type_mut<U, I>(&mut self) -> &mut U
    where
        Self: GetByType<U, I>,
    {
        GetByType::by_type_mut(self)
    }

    #[inline]
    pub fn as_tuple(&self) -> &T {
        &self.values
    }

    #[inline]
    pub fn as_tuple_mut(&mut self) -> &mut T {
        &mut self.values
    }

    #[inline]
    pub fn into_tuple(self) -> T {
        self.values
    }

    /// Reset every element so the record can be reused for the next entry.
    ///
    /// Containers are emptied, everything else is set to its default.
    ///
    /// Every element type must implement [`Clear`]. The std containers,
    /// primitives and common std value types already do. A type of your own
    /// opts in with `impl Clear` or, when resetting to `Default` is right,
    /// with [`clear_by_default!`](crate::clear_by_default!); a type that does
    /// neither makes this method unavailable for the record.
    pub fn clear(&mut self)
    where
        T: Clear,
    {
        trace!(fields = ?F::FIELDS, "clearing record");
        self.values.clear();
    }
}

// ======================================================================
// Tuple behavior
// ======================================================================

impl<T, F> Deref for Record<T, F>
where
    T: RecordLayout<F>,
    F: FieldList,
{
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.values
    }
}

impl<T, F> DerefMut for Record<T, F>
where
    T: RecordLayout<F>,
    F: FieldList,
{
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.values
    }
}

impl<T, F> From<T> for Record<T, F>
where
    T: RecordLayout<F>,
    F: FieldList,
{
    #[inline]
    fn from(values: T) -> Self {
        Self::new(values)
    }
}

// ======================================================================
// Value semantics (all follow the tuple)
// ======================================================================

impl<T, F> Default for Record<T, F>
where
    T: RecordLayout<F> + Default,
    F: FieldList,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T, F> Clone for Record<T, F>
where
    T: RecordLayout<F> + Clone,
    F: FieldList,
{
    fn clone(&self) -> Self {
        Self::new(self.values.clone())
    }
}

impl<T, F> Copy for Record<T, F>
where
    T: RecordLayout<F> + Copy,
    F: FieldList,
{
}

impl<T, F> PartialEq for Record<T, F>
where
    T: RecordLayout<F> + PartialEq,
    F: FieldList,
{
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<T, F> Eq for Record<T, F>
where
    T: RecordLayout<F> + Eq,
    F: FieldList,
{
}

impl<T, F> Hash for Record<T, F>
where
    T: RecordLayout<F> + Hash,
    F: FieldList,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values.hash(state);
    }
}

impl<T, F> fmt::Debug for Record<T, F>
where
    T: RecordLayout<F> + fmt::Debug,
    F: FieldList,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("fields", &F::FIELDS)
            .field("values", &self.values)
            .finish()
    }
}

#[cfg(feature = "serde")]
impl<T, F> serde::Serialize for Record<T, F>
where
    T: RecordLayout<F> + serde::Serialize,
    F: FieldList,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, F> serde::Deserialize<'de> for Record<T, F>
where
    T: RecordLayout<F> + serde::Deserialize<'de>,
    F: FieldList,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}

// ======================================================================
// Declaration macro
// ======================================================================

/// Declare a named record type from `Tag: Type` pairs.
///
/// The field list is checked for duplicates where the record is declared.
///
/// ```
/// use seqkit_core::field::{self, Field};
/// use seqkit_core::record;
///
/// record! {
///     /// One entry of a sequence file.
///     pub type SequenceRecord = {
///         Id: String,
///         Seq: String,
///         Offset: u64,
///     };
/// }
///
/// let mut rec = SequenceRecord::default();
/// *rec.get_mut(field::Offset) = 12;
/// assert_eq!(SequenceRecord::index_of(Field::Offset), 2);
/// assert_eq!(*rec.get(field::Offset), 12);
/// ```
///
/// ```compile_fail
/// use seqkit_core::record;
///
/// record! {
///     pub type Broken = {
///         Id: String,
///         Id: String,
///     };
/// }
///
/// fn main() {}
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis type $name:ident = {
            $($field:ident : $ty:ty),* $(,)?
        };
    ) => {
        $(#[$meta])*
        $vis type $name = $crate::record::Record<($($ty,)*), ($($crate::field::$field,)*)>;

        const _: () = <($($crate::field::$field,)*) as $crate::field::FieldList>::ASSERT_UNIQUE;
    };
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashSet};
    use std::path::PathBuf;

    use proptest::prelude::*;

    use super::*;
    use crate::field::{Id, Offset, Qual, Seq, UserDefined0, NPOS};

    type Fastq = Record<(String, String, String), (Seq, Id, Qual)>;
    type Mixed = Record<(Vec<u32>, i64), (UserDefined0, Offset)>;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_seq_id_qual_scenario() {
        assert_eq!(Fastq::SIZE, 3);
        assert_eq!(Fastq::index_of(Field::Id), 1);
        assert_eq!(Fastq::index_of(Field::Offset), NPOS);
        assert_eq!(Fastq::index_of(Field::Offset), Fastq::NPOS);

        let rec = Fastq::default();
        assert_eq!(rec.get(Seq), "");
        assert!(rec.get(Id).is_empty());
    }

    #[test]
    fn test_contains_matches_index_of() {
        for &f in Field::ALL {
            assert_eq!(Fastq::contains(f), Fastq::index_of(f) != NPOS);
        }
        assert_eq!(Fastq::fields(), &[Field::Seq, Field::Id, Field::Qual]);
    }

    #[test]
    fn test_write_then_read_by_tag() {
        let mut rec = Fastq::default();
        *rec.get_mut(Seq) = "ACGTN".into();
        *rec.get_mut(Id) = "read/1".into();
        *rec.get_mut(Qual) = "IIII#".into();

        assert_eq!(rec.get(Seq), "ACGTN");
        assert_eq!(rec.get(Id), "read/1");
        assert_eq!(rec.get(Qual), "IIII#");
        assert_eq!(rec.1, "read/1");
        assert_eq!(rec.into_field(Qual), "IIII#");
    }

    #[test]
    fn test_positional_access() {
        let mut rec = Mixed::new((vec![1, 2], -4));
        rec.0.push(3);
        rec.1 += 1;
        assert_eq!(rec.as_tuple(), &(vec![1, 2, 3], -3));
        rec.as_tuple_mut().1 = 9;
        assert_eq!(*rec.get(Offset), 9);
        let (v, n) = rec.into_tuple();
        assert_eq!((v.len(), n), (3, 9));
    }

    #[test]
    fn test_access_by_type() {
        let mut rec = Mixed::from((vec![7], 70));
        assert_eq!(rec.get_by_type::<i64, _>(), &70);
        rec.get_by_type_mut::<Vec<u32>, _>().push(8);
        assert_eq!(rec.get(UserDefined0), &[7, 8]);
    }

    #[test]
    fn test_clear_mixes_container_and_scalar() {
        init_tracing();
        let mut rec = Mixed::new((vec![1, 2, 3], 42));
        rec.clear();
        assert_eq!(rec.get(UserDefined0).len(), 0);
        assert_eq!(*rec.get(Offset), 0);
    }

    #[test]
    fn test_clear_user_type_opted_in() {
        #[derive(Debug, Default, Clone, PartialEq)]
        struct Hit {
            target: String,
            score: u32,
        }

        crate::clear_by_default!(Hit);

        type Blast = Record<(String, Hit, PathBuf), (Id, field::Alignment, field::Comment)>;

        let hit = Hit {
            target: "sp|P69905".into(),
            score: 143,
        };
        let mut rec = Blast::new(("q1".into(), hit, PathBuf::from("db/swissprot")));
        rec.clear();
        assert_eq!(rec.get(field::Alignment), &Hit::default());
        assert_eq!(rec, Blast::default());
    }

    #[test]
    fn test_clear_nested_fields() {
        type Sam = Record<(String, Option<u8>, BTreeMap<String, i32>), (Id, field::Mapq, field::Tags)>;

        let mut tags = BTreeMap::new();
        tags.insert("NM".to_owned(), 2);
        let mut rec = Sam::new(("r1".into(), Some(60), tags));
        rec.clear();
        assert_eq!(rec, Sam::default());
    }

    #[test]
    fn test_value_semantics() {
        let a = Fastq::new(("A".into(), "x".into(), "I".into()));
        let mut b = a.clone();
        b.get_mut(Seq).push('C');
        assert_ne!(a, b);
        assert_eq!(a.get(Seq), "A");

        let set: HashSet<Fastq> = [a.clone(), a.clone(), b].into_iter().collect();
        assert_eq!(set.len(), 2);

        type Pos = Record<(u64, u64), (Offset, field::RefOffset)>;
        let p = Pos::new((1, 2));
        let q = p;
        assert_eq!(p, q);
    }

    #[test]
    fn test_debug_shows_fields() {
        let rec = Mixed::new((vec![1], 2));
        let text = format!("{rec:?}");
        assert!(text.contains("UserDefined0"));
        assert!(text.contains("Offset"));
        assert!(text.contains("[1]"));
    }

    #[test]
    fn test_record_macro() {
        crate::record! {
            pub type Structure = {
                Seq: String,
                Energy: f64,
                React: Vec<f32>,
            };
        }

        let mut rec = Structure::default();
        *rec.get_mut(field::Energy) = -12.5;
        rec.get_mut(field::React).push(0.25);
        assert_eq!(Structure::index_of(Field::React), 2);
        rec.clear();
        assert!(rec.get(field::Energy).abs() < f64::EPSILON);
        assert!(rec.get(field::React).is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_tuple() {
        let rec = Mixed::new((vec![1, 2], 5));
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json, "[[1,2],5]");
        let back: Mixed = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }

    proptest! {
        #[test]
        fn prop_tag_roundtrip(seq in "[ACGT]{0,32}", id in "[a-z0-9/]{1,12}", qual in "[!-J]{0,32}") {
            let mut rec = Fastq::default();
            rec.get_mut(Qual).clone_from(&qual);
            rec.get_mut(Id).clone_from(&id);
            rec.get_mut(Seq).clone_from(&seq);
            prop_assert_eq!(rec.get(Seq), &seq);
            prop_assert_eq!(rec.get(Id), &id);
            prop_assert_eq!(rec.get(Qual), &qual);
        }

        #[test]
        fn prop_clear_always_resets(values in proptest::collection::vec(any::<u32>(), 0..16), n in any::<i64>()) {
            let mut rec = Mixed::new((values, n));
            rec.clear();
            prop_assert!(rec.get(UserDefined0).is_empty());
            prop_assert_eq!(*rec.get(Offset), 0);
        }
    }
}
