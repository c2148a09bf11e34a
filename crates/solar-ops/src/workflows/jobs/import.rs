use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use super::code::JobCode;
use super::domain::JobStatus;
use crate::workflows::content::derive_slug;

/// Validated row from a legacy job-tracker export.
#[derive(Debug, Clone)]
pub struct LegacyJob {
    pub code: JobCode,
    pub title: String,
    pub slug: String,
    pub status: JobStatus,
    pub created_on: Option<NaiveDate>,
}

/// Batch result: accepted jobs plus a count of rows the importer dropped.
#[derive(Debug, Default)]
pub struct JobImportSummary {
    pub jobs: Vec<LegacyJob>,
    pub skipped_rows: usize,
}

#[derive(Debug)]
pub enum JobImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for JobImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobImportError::Io(err) => write!(f, "failed to read job export: {}", err),
            JobImportError::Csv(err) => write!(f, "invalid job export data: {}", err),
        }
    }
}

impl std::error::Error for JobImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JobImportError::Io(err) => Some(err),
            JobImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for JobImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for JobImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Importer for `Code,Title,Status,Created On` exports of the old tracker.
///
/// Malformed rows are counted and skipped rather than failing the batch;
/// duplicate codes keep the first occurrence.
pub struct LegacyJobImporter;

impl LegacyJobImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<JobImportSummary, JobImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<JobImportSummary, JobImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut summary = JobImportSummary::default();
        let mut seen: HashSet<JobCode> = HashSet::new();

        for record in csv_reader.deserialize::<LegacyJobRow>() {
            let row = record?;
            let Some(job) = row.into_job() else {
                summary.skipped_rows += 1;
                continue;
            };
            if !seen.insert(job.code) {
                continue;
            }
            summary.jobs.push(job);
        }

        Ok(summary)
    }
}

#[derive(Debug, Deserialize)]
struct LegacyJobRow {
    #[serde(rename = "Code")]
    code: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Status", default, deserialize_with = "empty_string_as_none")]
    status: Option<String>,
    #[serde(
        rename = "Created On",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    created_on: Option<String>,
}

impl LegacyJobRow {
    fn into_job(self) -> Option<LegacyJob> {
        let code = self.code.parse::<JobCode>().ok()?;

        let title = self.title.trim().to_string();
        if title.is_empty() {
            return None;
        }

        let status = match self.status.as_deref() {
            Some(raw) => JobStatus::from_label(raw)?,
            None => JobStatus::Active,
        };

        let created_on = self.created_on.as_deref().and_then(parse_date);
        let slug = derive_slug(&title);

        Some(LegacyJob {
            code,
            title,
            slug,
            status,
            created_on,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::jobs::domain::{Segment, ServiceLine};
    use std::io::Cursor;

    #[test]
    fn imports_valid_rows_with_slug_and_status() {
        let csv = "Code,Title,Status,Created On\n\
RES-EPC-2025-0001,50kW Solar Installation for Tech Corp!,Active,2025-03-14\n\
COM-AUD-2024-0012,Warehouse Energy Audit,Completed,\n";

        let summary = LegacyJobImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert_eq!(summary.jobs.len(), 2);
        assert_eq!(summary.skipped_rows, 0);

        let first = &summary.jobs[0];
        assert_eq!(first.code.segment, Segment::Residential);
        assert_eq!(first.code.service, ServiceLine::Epc);
        assert_eq!(first.slug, "50kw-solar-installation-for-tech-corp");
        assert_eq!(
            first.created_on,
            Some(NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date"))
        );

        let second = &summary.jobs[1];
        assert_eq!(second.status, JobStatus::Completed);
        assert_eq!(second.created_on, None);
    }

    #[test]
    fn missing_status_defaults_to_active() {
        let csv = "Code,Title,Status,Created On\nIND-MNT-2023-0100,Plant service contract,,\n";
        let summary = LegacyJobImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert_eq!(summary.jobs[0].status, JobStatus::Active);
    }

    #[test]
    fn malformed_rows_are_counted_not_fatal() {
        let csv = "Code,Title,Status,Created On\n\
not-a-code,Broken row,Active,\n\
RES-EPC-2025-0002,,Active,\n\
RES-EPC-2025-0003,Valid row,Unknownstatus,\n\
RES-EPC-2025-0004,Kept row,Active,\n";

        let summary = LegacyJobImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert_eq!(summary.jobs.len(), 1);
        assert_eq!(summary.jobs[0].title, "Kept row");
        assert_eq!(summary.skipped_rows, 3);
    }

    #[test]
    fn duplicate_codes_keep_the_first_occurrence() {
        let csv = "Code,Title,Status,Created On\n\
RES-INS-2025-0007,First title,Active,\n\
RES-INS-2025-0007,Second title,Completed,\n";

        let summary = LegacyJobImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert_eq!(summary.jobs.len(), 1);
        assert_eq!(summary.jobs[0].title, "First title");
        assert_eq!(summary.skipped_rows, 0);
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error =
            LegacyJobImporter::from_path("./does-not-exist.csv").expect_err("expected io error");
        match error {
            JobImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
