use serde::{Deserialize, Serialize};

use super::domain::OnboardingSnapshot;

/// Wizard steps across both paths, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    CompanyBasics,
    ContactDetails,
    ServiceProfile,
    TrackRecord,
    AuditReport,
    UtilityBills,
    SitePhotos,
    Review,
    Consents,
}

impl WizardStep {
    pub const fn label(self) -> &'static str {
        match self {
            Self::CompanyBasics => "Company Basics",
            Self::ContactDetails => "Contact Details",
            Self::ServiceProfile => "Service Profile",
            Self::TrackRecord => "Track Record",
            Self::AuditReport => "Audit Report",
            Self::UtilityBills => "Utility Bills",
            Self::SitePhotos => "Site Photos",
            Self::Review => "Review",
            Self::Consents => "Consents & Submit",
        }
    }

    /// Field names still missing before this step can be left.
    pub fn missing_fields(self, snapshot: &OnboardingSnapshot) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match self {
            Self::CompanyBasics => {
                if snapshot.company.legal_name.trim().is_empty() {
                    missing.push("company.legal_name");
                }
                if snapshot.company.registration_number.trim().is_empty() {
                    missing.push("company.registration_number");
                }
                if snapshot.has_recent_audit.is_none() {
                    missing.push("has_recent_audit");
                }
            }
            Self::ContactDetails => {
                if snapshot.contact.contact_name.trim().is_empty() {
                    missing.push("contact.contact_name");
                }
                if snapshot.contact.email.trim().is_empty() {
                    missing.push("contact.email");
                }
            }
            Self::ServiceProfile => {
                if snapshot.partner_class.is_none() {
                    missing.push("partner_class");
                }
                if !snapshot
                    .service_regions
                    .iter()
                    .any(|region| !region.trim().is_empty())
                {
                    missing.push("service_regions");
                }
            }
            Self::TrackRecord => {
                if snapshot.team_size == 0 {
                    missing.push("team_size");
                }
            }
            Self::AuditReport => {
                if snapshot.audit_files.is_empty() {
                    missing.push("audit_files");
                }
            }
            Self::UtilityBills => {
                if snapshot.bill_files.is_empty() {
                    missing.push("bill_files");
                }
            }
            Self::SitePhotos => {
                if snapshot.site_files.is_empty() {
                    missing.push("site_files");
                }
            }
            Self::Review => {}
            Self::Consents => {
                if !snapshot.consents.information_accurate {
                    missing.push("consents.information_accurate");
                }
                if !snapshot.consents.data_processing {
                    missing.push("consents.data_processing");
                }
                if !snapshot.consents.site_contact {
                    missing.push("consents.site_contact");
                }
            }
        }
        missing
    }

    pub fn is_satisfied(self, snapshot: &OnboardingSnapshot) -> bool {
        self.missing_fields(snapshot).is_empty()
    }
}

/// Path through the wizard, fixed once the audit answer on the first step is
/// confirmed. Partners with a recent audit on file skip the utility-bill and
/// site-photo evidence steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardPath {
    WithAudit,
    WithoutAudit,
}

impl WizardPath {
    pub const fn for_audit_answer(has_recent_audit: bool) -> Self {
        if has_recent_audit {
            Self::WithAudit
        } else {
            Self::WithoutAudit
        }
    }

    pub const fn steps(self) -> &'static [WizardStep] {
        match self {
            Self::WithAudit => &[
                WizardStep::CompanyBasics,
                WizardStep::ContactDetails,
                WizardStep::ServiceProfile,
                WizardStep::TrackRecord,
                WizardStep::AuditReport,
                WizardStep::Review,
                WizardStep::Consents,
            ],
            Self::WithoutAudit => &[
                WizardStep::CompanyBasics,
                WizardStep::ContactDetails,
                WizardStep::ServiceProfile,
                WizardStep::TrackRecord,
                WizardStep::UtilityBills,
                WizardStep::SitePhotos,
                WizardStep::Review,
                WizardStep::Consents,
            ],
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::WithAudit => "Audit on file",
            Self::WithoutAudit => "No recent audit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_paths_share_the_leading_and_trailing_steps() {
        let with_audit = WizardPath::WithAudit.steps();
        let without_audit = WizardPath::WithoutAudit.steps();

        assert_eq!(with_audit.len(), 7);
        assert_eq!(without_audit.len(), 8);
        assert_eq!(with_audit[..4], without_audit[..4]);
        assert_eq!(with_audit.first(), Some(&WizardStep::CompanyBasics));
        assert_eq!(with_audit.last(), Some(&WizardStep::Consents));
        assert_eq!(without_audit.last(), Some(&WizardStep::Consents));
    }

    #[test]
    fn evidence_steps_belong_to_exactly_one_path() {
        assert!(WizardPath::WithAudit
            .steps()
            .contains(&WizardStep::AuditReport));
        assert!(!WizardPath::WithAudit
            .steps()
            .contains(&WizardStep::UtilityBills));
        assert!(!WizardPath::WithAudit
            .steps()
            .contains(&WizardStep::SitePhotos));

        assert!(!WizardPath::WithoutAudit
            .steps()
            .contains(&WizardStep::AuditReport));
        assert!(WizardPath::WithoutAudit
            .steps()
            .contains(&WizardStep::UtilityBills));
        assert!(WizardPath::WithoutAudit
            .steps()
            .contains(&WizardStep::SitePhotos));
    }

    #[test]
    fn review_step_never_blocks() {
        let snapshot = OnboardingSnapshot::default();
        assert!(WizardStep::Review.missing_fields(&snapshot).is_empty());
    }

    #[test]
    fn company_basics_requires_identity_and_audit_answer() {
        let mut snapshot = OnboardingSnapshot::default();
        let missing = WizardStep::CompanyBasics.missing_fields(&snapshot);
        assert_eq!(
            missing,
            vec![
                "company.legal_name",
                "company.registration_number",
                "has_recent_audit"
            ]
        );

        snapshot.company.legal_name = "Beacon Solar GmbH".to_string();
        snapshot.company.registration_number = "HRB 12345".to_string();
        snapshot.has_recent_audit = Some(true);
        assert!(WizardStep::CompanyBasics.is_satisfied(&snapshot));
    }

    #[test]
    fn blank_service_regions_do_not_satisfy_the_profile_step() {
        let mut snapshot = OnboardingSnapshot::default();
        snapshot.partner_class = Some(super::super::domain::PartnerClass::Installer);
        snapshot.service_regions = vec!["   ".to_string()];
        assert_eq!(
            WizardStep::ServiceProfile.missing_fields(&snapshot),
            vec!["service_regions"]
        );
    }
}
