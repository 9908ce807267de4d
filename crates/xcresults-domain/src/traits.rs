//! Trait definitions for external interactions
//!
//! The parser never persists anything. These traits define the boundary to
//! the collaborators that do.

use crate::MeetResultSet;

/// Trait for the storage collaborator that receives parsed meets
///
/// Implementations own upsert/merge semantics keyed by
/// [`MeetResultSet::source_url`] and any locking needed to serialize writes of
/// the same URL.
pub trait ResultSink {
    /// Error type for store operations
    type Error;

    /// Store (insert or replace) a parsed meet
    fn store_meet(&mut self, meet: &MeetResultSet) -> Result<(), Self::Error>;
}
