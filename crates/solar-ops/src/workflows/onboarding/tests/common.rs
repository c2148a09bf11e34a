use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::onboarding::domain::{
    ApplicationId, BaseLocation, CompanyIdentity, ConsentSet, ContactDetails, OnboardingSnapshot,
    PartnerClass, UploadDescriptor,
};
use crate::workflows::onboarding::repository::{
    AlertError, ApplicationRecord, ApplicationRepository, CrmAlert, CrmAlertPublisher,
    RepositoryError,
};
use crate::workflows::onboarding::scoring::ScoringConfig;
use crate::workflows::onboarding::service::OnboardingService;

pub(super) fn upload(name: &str) -> UploadDescriptor {
    UploadDescriptor {
        name: name.to_string(),
        storage_key: format!("uploads/onboarding/{name}"),
    }
}

/// Snapshot that satisfies every step of the audit path and every check.
pub(super) fn complete_snapshot() -> OnboardingSnapshot {
    OnboardingSnapshot {
        company: CompanyIdentity {
            legal_name: "Beacon Solar GmbH".to_string(),
            registration_number: "HRB 98765".to_string(),
        },
        contact: ContactDetails {
            contact_name: "J. Keller".to_string(),
            email: "j.keller@beacon-solar.example".to_string(),
            phone: "+49 30 1234567".to_string(),
        },
        base_location: BaseLocation {
            city: "Berlin".to_string(),
            country: "Germany".to_string(),
        },
        partner_class: Some(PartnerClass::Installer),
        service_regions: vec!["Berlin".to_string(), "Brandenburg".to_string()],
        team_size: 18,
        completed_projects: 42,
        certifications: vec!["ISO 9001".to_string()],
        has_recent_audit: Some(true),
        audit_files: vec![upload("audit-2025.pdf")],
        bill_files: Vec::new(),
        site_files: vec![upload("rooftop-array.jpg")],
        consents: ConsentSet {
            information_accurate: true,
            data_processing: true,
            site_contact: true,
        },
    }
}

/// Snapshot missing the consents, so submission is refused.
pub(super) fn unfinished_snapshot() -> OnboardingSnapshot {
    let mut snapshot = complete_snapshot();
    snapshot.consents = ConsentSet::default();
    snapshot
}

pub(super) fn scoring_config() -> ScoringConfig {
    ScoringConfig::default()
}

pub(super) fn build_service() -> (
    OnboardingService<MemoryRepository, MemoryAlerts>,
    Arc<MemoryRepository>,
    Arc<MemoryAlerts>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let alerts = Arc::new(MemoryAlerts::default());
    let service = OnboardingService::new(repository.clone(), alerts.clone(), scoring_config());
    (service, repository, alerts)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
}

impl ApplicationRepository for MemoryRepository {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending(&self, _limit: usize) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryAlerts {
    events: Arc<Mutex<Vec<CrmAlert>>>,
}

impl MemoryAlerts {
    pub(super) fn events(&self) -> Vec<CrmAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

impl CrmAlertPublisher for MemoryAlerts {
    fn publish(&self, alert: CrmAlert) -> Result<(), AlertError> {
        self.events
            .lock()
            .expect("alert mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(super) struct UnavailableRepository;

impl ApplicationRepository for UnavailableRepository {
    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: ApplicationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn pending(&self, _limit: usize) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
