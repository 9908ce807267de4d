//! xcresults Domain Layer
//!
//! Value types shared by the result parser and its collaborators (storage,
//! dashboard, batch import). Everything here is created fresh per parse and is
//! immutable once assembled.
//!
//! ## Key Concepts
//!
//! - **RawPage**: fetched HTML plus the URL it came from
//! - **FormatVariant**: which of the known layouts a page follows
//! - **RaceHeader**: gender, race type, distance and division of one race
//! - **Race**: a header with its team scores and individual results
//! - **MeetResultSet**: every race on one page, handed to storage as a unit
//! - **RaceTime**: the single canonical time representation
//!
//! ## Architecture
//!
//! - No parsing or I/O here, only data and invariants
//! - Trait definitions for the storage seam live in [`traits`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod format;
pub mod meet;
pub mod page;
pub mod race;
pub mod time;
pub mod traits;

// Re-exports for convenience
pub use format::FormatVariant;
pub use meet::MeetResultSet;
pub use page::{raw_results_url, RawPage};
pub use race::{Gender, IndividualResultRow, Race, RaceHeader, TeamScoreRow};
pub use time::{RaceTime, TimeError};
