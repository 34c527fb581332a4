//! Type-safe identifiers for page entities.
//!
//! Newtype wrappers prevent mixing incompatible handles at compile time.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

// ============================================================================
// NodeId
// ============================================================================

/// Opaque handle to a DOM node, minted by the [`PageDom`](crate::page::PageDom)
/// implementation during hit-testing.
///
/// The bridge never inspects the value; it only passes it back for
/// activation. The embedder decides what the number means (an index into a
/// node table, a pointer-sized key, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a node handle from a raw value.
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
