use serde::{Deserialize, Serialize};

/// Identifier wrapper for submitted partner applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Company identity captured on the first wizard step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyIdentity {
    pub legal_name: String,
    pub registration_number: String,
}

/// Primary contact for the applying partner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    pub contact_name: String,
    pub email: String,
    pub phone: String,
}

/// Where the partner operates from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseLocation {
    pub city: String,
    pub country: String,
}

/// Partner classification chosen on the service-profile step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerClass {
    Installer,
    Distributor,
    Consultant,
    EpcContractor,
}

impl PartnerClass {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Installer,
            Self::Distributor,
            Self::Consultant,
            Self::EpcContractor,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Installer => "Installer",
            Self::Distributor => "Distributor",
            Self::Consultant => "Consultant",
            Self::EpcContractor => "EPC Contractor",
        }
    }
}

/// Metadata for an uploaded evidence file; the bytes live in external storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadDescriptor {
    pub name: String,
    pub storage_key: String,
}

/// Declarations the partner must accept before submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsentSet {
    pub information_accurate: bool,
    pub data_processing: bool,
    pub site_contact: bool,
}

impl ConsentSet {
    pub const fn all_given(self) -> bool {
        self.information_accurate && self.data_processing && self.site_contact
    }
}

/// Client-accumulated wizard state.
///
/// The core treats this as an immutable value and recomputes everything from
/// it; the one sanctioned mutation is the upload reset when the audit answer
/// flips (see `OnboardingWizard::apply_audit_answer`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingSnapshot {
    pub company: CompanyIdentity,
    pub contact: ContactDetails,
    pub base_location: BaseLocation,
    pub partner_class: Option<PartnerClass>,
    pub service_regions: Vec<String>,
    pub team_size: u16,
    pub completed_projects: u32,
    pub certifications: Vec<String>,
    pub has_recent_audit: Option<bool>,
    pub audit_files: Vec<UploadDescriptor>,
    pub bill_files: Vec<UploadDescriptor>,
    pub site_files: Vec<UploadDescriptor>,
    pub consents: ConsentSet,
}

/// Review status tracked for a stored application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStatus {
    Submitted,
    FastTracked,
    UnderReview,
    AwaitingInfo,
}

impl OnboardingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            OnboardingStatus::Submitted => "submitted",
            OnboardingStatus::FastTracked => "fast_tracked",
            OnboardingStatus::UnderReview => "under_review",
            OnboardingStatus::AwaitingInfo => "awaiting_info",
        }
    }
}
