//! # Seqkit
//!
//! Strong types and tag-indexed records for sequence data processing.
//!
//! One `use seqkit::prelude::*;` gives you capability-gated strong types,
//! field tags and records.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | Strong types, skills, fields, records |
//! | `serde` | `Serialize` / `Deserialize` for all of the above |
//!
//! ```
//! use seqkit::prelude::*;
//!
//! strong_type! {
//!     pub type KmerSize = StrongType<u8, KmerSizeMarker> with Comparable | Convert;
//! }
//!
//! record! {
//!     pub type FastaRecord = {
//!         Id: String,
//!         Seq: String,
//!     };
//! }
//!
//! let k = KmerSize::new(21);
//! let mut rec = FastaRecord::default();
//! rec.get_mut(field::Id).push_str("chr1");
//!
//! assert_eq!(k.convert(), 21);
//! assert_eq!(FastaRecord::index_of(Field::Seq), 1);
//! assert_eq!(rec.get(field::Id), "chr1");
//! ```

#[cfg(feature = "core")]
pub use seqkit_core as core;

/// Glob-import convenience: `use seqkit::prelude::*;`
#[cfg(feature = "core")]
pub mod prelude {
    pub use seqkit_core::prelude::*;
}
