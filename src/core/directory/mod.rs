//! Employee directory domain: records, data source, search, pagination.

pub mod client;
pub mod dob;
pub mod models;
pub mod paginator;
pub mod search;

pub use client::{DirectoryError, DirectoryResult, EmployeeSource, RandomUserClient};
pub use dob::{format_dob, Timestamp};
pub use models::{ActiveList, EmployeeRecord, RecordStore};
pub use paginator::{ModalPaginator, PaginationControls, PaginatorError};
pub use search::{filter, search, SearchOutcome};
