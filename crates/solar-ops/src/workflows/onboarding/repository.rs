use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{ApplicationId, OnboardingSnapshot, OnboardingStatus};
use super::scoring::ScoreBreakdown;

/// Repository record for a submitted partner application.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationRecord {
    pub id: ApplicationId,
    pub snapshot: OnboardingSnapshot,
    pub submitted_on: NaiveDate,
    pub status: OnboardingStatus,
    pub score: Option<ScoreBreakdown>,
}

impl ApplicationRecord {
    pub fn status_view(&self) -> ApplicationStatusView {
        ApplicationStatusView {
            application_id: self.id.clone(),
            status: self.status.label(),
            tier: self.score.as_ref().map(|breakdown| breakdown.tier.label()),
            total_score: self.score.as_ref().map(|breakdown| breakdown.total),
        }
    }
}

/// Storage abstraction so the service can be exercised in isolation.
/// Slug and code uniqueness live behind this seam, not in the core.
pub trait ApplicationRepository: Send + Sync {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError>;
    fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError>;
    fn pending(&self, limit: usize) -> Result<Vec<ApplicationRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook so fast-tracked partners reach the CRM immediately.
pub trait CrmAlertPublisher: Send + Sync {
    fn publish(&self, alert: CrmAlert) -> Result<(), AlertError>;
}

/// Alert payload handed to the CRM adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrmAlert {
    pub template: String,
    pub application_id: ApplicationId,
    pub details: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("alert transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of an application's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationStatusView {
    pub application_id: ApplicationId,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score: Option<u8>,
}
