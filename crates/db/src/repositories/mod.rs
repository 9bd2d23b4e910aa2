//! Repository abstractions for data access.

pub mod sector;
pub mod submission;

pub use sector::{SectorError, SectorRepository};
pub use submission::{CreateSubmissionInput, SubmissionError, SubmissionRepository};
