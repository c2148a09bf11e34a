use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;

use super::domain::{ApplicationId, OnboardingSnapshot, OnboardingStatus};
use super::instance::OnboardingWizard;
use super::repository::{
    AlertError, ApplicationRecord, ApplicationRepository, CrmAlert, CrmAlertPublisher,
    RepositoryError,
};
use super::scoring::{ReviewTier, ScoringConfig, ScoringEngine};

/// Service composing the wizard completion gate, scoring engine, repository,
/// and CRM alert hook.
pub struct OnboardingService<R, A> {
    repository: Arc<R>,
    alerts: Arc<A>,
    engine: Arc<ScoringEngine>,
}

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("prt-{id:06}"))
}

impl<R, A> OnboardingService<R, A>
where
    R: ApplicationRepository + 'static,
    A: CrmAlertPublisher + 'static,
{
    pub fn new(repository: Arc<R>, alerts: Arc<A>, config: ScoringConfig) -> Self {
        Self {
            repository,
            alerts,
            engine: Arc::new(ScoringEngine::new(config)),
        }
    }

    /// Submit a finished wizard snapshot, returning the stored record.
    ///
    /// The snapshot must satisfy every step of its resolved path; anything
    /// outstanding is reported back as a validation failure.
    pub fn submit(
        &self,
        snapshot: OnboardingSnapshot,
        submitted_on: NaiveDate,
    ) -> Result<ApplicationRecord, OnboardingServiceError> {
        let wizard = OnboardingWizard::for_snapshot(&snapshot);
        let missing = wizard.outstanding(&snapshot);
        if !missing.is_empty() {
            return Err(OnboardingServiceError::Incomplete { missing });
        }

        let breakdown = self.engine.score(&snapshot);
        let record = ApplicationRecord {
            id: next_application_id(),
            snapshot,
            submitted_on,
            status: OnboardingStatus::Submitted,
            score: Some(breakdown),
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Re-score a stored application and move it into its review lane.
    /// Fast-tracked partners are announced to the CRM.
    pub fn triage(
        &self,
        application_id: &ApplicationId,
    ) -> Result<ApplicationRecord, OnboardingServiceError> {
        let mut record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;

        let breakdown = self.engine.score(&record.snapshot);
        record.status = match breakdown.tier {
            ReviewTier::FastTrack => OnboardingStatus::FastTracked,
            ReviewTier::StandardReview => OnboardingStatus::UnderReview,
            ReviewTier::NeedsImprovement => OnboardingStatus::AwaitingInfo,
        };
        record.score = Some(breakdown);

        self.repository.update(record.clone())?;

        if record.status == OnboardingStatus::FastTracked {
            let mut details = BTreeMap::new();
            details.insert(
                "tier".to_string(),
                ReviewTier::FastTrack.label().to_string(),
            );
            self.alerts.publish(CrmAlert {
                template: "partner_fast_track".to_string(),
                application_id: record.id.clone(),
                details,
            })?;
        }

        Ok(record)
    }

    /// Fetch an application and current status for API responses.
    pub fn get(
        &self,
        application_id: &ApplicationId,
    ) -> Result<ApplicationRecord, OnboardingServiceError> {
        let record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the onboarding service.
#[derive(Debug, thiserror::Error)]
pub enum OnboardingServiceError {
    #[error("application incomplete: missing {missing:?}")]
    Incomplete { missing: Vec<&'static str> },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Alert(#[from] AlertError),
}
