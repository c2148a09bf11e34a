mod code;
pub mod domain;
mod import;

pub use code::{JobCode, JobCodeParseError};
pub use domain::{JobStatus, Segment, ServiceLine};
pub use import::{JobImportError, JobImportSummary, LegacyJob, LegacyJobImporter};
