//! Period reports over sales and accounts.

pub mod cache;
pub mod service;
pub mod types;

pub use cache::ReportCache;
pub use service::ReportService;
pub use types::{ReportFilter, ReportSummary};
