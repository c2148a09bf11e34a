use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::{Segment, ServiceLine};

/// Structured display code identifying a job: segment, service line, intake
/// year, and per-series sequence, rendered as `RES-EPC-2025-0001`.
///
/// The code is immutable once assigned. Sequence allocation and uniqueness
/// are the store's responsibility; `next_in_series` only computes the
/// follow-on candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobCode {
    pub segment: Segment,
    pub service: ServiceLine,
    pub year: u16,
    pub sequence: u32,
}

impl JobCode {
    pub fn new(segment: Segment, service: ServiceLine, year: u16, sequence: u32) -> Self {
        Self {
            segment,
            service,
            year,
            sequence,
        }
    }

    pub fn next_in_series(self) -> Self {
        Self {
            sequence: self.sequence + 1,
            ..self
        }
    }
}

impl fmt::Display for JobCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{:04}-{:04}",
            self.segment.code(),
            self.service.code(),
            self.year,
            self.sequence
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobCodeParseError {
    #[error("expected SEGMENT-SERVICE-YEAR-SEQUENCE, found '{0}'")]
    Malformed(String),
    #[error("unknown segment code '{0}'")]
    UnknownSegment(String),
    #[error("unknown service code '{0}'")]
    UnknownService(String),
    #[error("year '{0}' must be a four digit number")]
    InvalidYear(String),
    #[error("sequence '{0}' must be a positive number")]
    InvalidSequence(String),
}

impl FromStr for JobCode {
    type Err = JobCodeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.split('-');
        let (Some(segment), Some(service), Some(year), Some(sequence), None) = (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) else {
            return Err(JobCodeParseError::Malformed(value.to_owned()));
        };

        let segment = Segment::from_code(segment)
            .ok_or_else(|| JobCodeParseError::UnknownSegment(segment.to_owned()))?;
        let service = ServiceLine::from_code(service)
            .ok_or_else(|| JobCodeParseError::UnknownService(service.to_owned()))?;

        if year.len() != 4 {
            return Err(JobCodeParseError::InvalidYear(year.to_owned()));
        }
        let year = year
            .parse::<u16>()
            .map_err(|_| JobCodeParseError::InvalidYear(year.to_owned()))?;

        let sequence = sequence
            .parse::<u32>()
            .ok()
            .filter(|parsed| *parsed > 0)
            .ok_or_else(|| JobCodeParseError::InvalidSequence(sequence.to_owned()))?;

        Ok(Self {
            segment,
            service,
            year,
            sequence,
        })
    }
}
