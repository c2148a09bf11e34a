//! Partner onboarding: the step-gated wizard, the seriousness score, and the
//! intake service that stores finished applications.

pub mod blueprint;
pub mod domain;
mod instance;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use blueprint::{WizardPath, WizardStep};
pub use domain::{
    ApplicationId, BaseLocation, CompanyIdentity, ConsentSet, ContactDetails, OnboardingSnapshot,
    OnboardingStatus, PartnerClass, UploadDescriptor,
};
pub use instance::{AdvanceOutcome, OnboardingWizard, StepProgressView};
pub use repository::{
    AlertError, ApplicationRecord, ApplicationRepository, ApplicationStatusView, CrmAlert,
    CrmAlertPublisher, RepositoryError,
};
pub use router::onboarding_router;
pub use scoring::{ReviewTier, ScoreBreakdown, ScoreComponent, ScoringConfig, ScoringEngine};
pub use service::{OnboardingService, OnboardingServiceError};
