//! Formatted output for strong types: the held value is printed as-is.

use core::fmt;

use super::{IsStrongType, StrongType};

impl<V: fmt::Display, D> fmt::Display for StrongType<V, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<V: fmt::Debug, D> fmt::Debug for StrongType<V, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}

/// Write the value held by any strong type to a text sink.
pub fn write_value<W, S>(sink: &mut W, value: &S) -> fmt::Result
where
    W: fmt::Write,
    S: IsStrongType,
    S::Value: fmt::Display,
{
    write!(sink, "{}", value.value())
}
