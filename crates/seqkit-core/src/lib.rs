//! `seqkit-core`: Type-system building blocks for the Seqkit ecosystem.
//!
//! Provides two independent pieces that the file readers, writers and
//! algorithms of the other `seqkit-*` crates are written against:
//!
//! - [`StrongType`]: a wrapper that makes a plain value a distinct type and
//!   re-enables only the operators its [`Skills`] allow.
//! - [`Record`]: a tuple whose positions are also addressable by a semantic
//!   [`Field`] tag, with a uniform [`Record::clear`] for reuse.
//!
//! # Design
//!
//! - Every structural mistake is a compile error: an ungranted operator does
//!   not exist, a duplicate field tag fails const evaluation, a record field
//!   that is not in the schema cannot be named.
//! - Run-time entry points (field names, field selections, skill sets read
//!   from text) report [`CoreError`].
//! - The `serde` feature makes strong types, fields, skill sets and records
//!   (de)serializable.

pub mod clear;
pub mod error;
pub mod field;
pub mod record;
pub mod skill;
pub mod strong_type;

// Re-export key types at crate root for convenience.
pub use clear::Clear;
pub use error::{CoreError, Result};
pub use field::{Field, FieldList, FieldSelection, FieldTag, NPOS};
pub use record::Record;
pub use skill::{Grants, Skill, SkillSet, Skills};
pub use strong_type::{IsStrongType, StrongType};

/// Items intended for glob-import: `use seqkit_core::prelude::*;`
pub mod prelude {
    pub use crate::clear::Clear;
    pub use crate::error::{CoreError, Result};
    pub use crate::field::{self, Field, FieldList, FieldSelection, FieldTag, NPOS};
    pub use crate::record::Record;
    pub use crate::skill::{self, Grants, SkillSet, Skills};
    pub use crate::strong_type::{IsStrongType, StrongType};
    pub use crate::{clear_by_default, fields, record, strong_type};
}
