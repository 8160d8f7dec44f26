//! Core types and services for member-roster.
//!
//! This crate loads member CSV files, renders the name listing used by the
//! `display-names` utility, and answers the read-only member queries exposed
//! over MCP.

pub mod error;
pub mod loader;
pub mod models;
pub mod printer;
pub mod query;
pub mod report;

pub use error::LoadError;
pub use loader::{DEFAULT_CSV_PATH, REQUIRED_COLUMNS, load_members, read_members};
pub use models::MemberRecord;
pub use printer::{NameLine, NameListing, print_names};
pub use query::{DEFAULT_LIST_LIMIT, MemberDirectory};
pub use report::{
    GenderBucket,
    GenderReport,
    GenderStatistics,
    ListReport,
    MemberCount,
    MemberLookup,
    RESULT_LIMIT,
    SearchReport,
    UNKNOWN_GENDER,
};
