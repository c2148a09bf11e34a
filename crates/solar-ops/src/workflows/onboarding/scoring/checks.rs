use super::super::domain::OnboardingSnapshot;

/// Named completeness check contributing a fixed weight when satisfied.
///
/// Keeping the checks in one table makes the upper bound the sum of the
/// weights; a check can never be counted twice.
pub(crate) struct ScoreCheck {
    pub(crate) key: &'static str,
    pub(crate) weight: u8,
    pub(crate) satisfied: fn(&OnboardingSnapshot) -> bool,
}

pub(crate) const CHECKS: [ScoreCheck; 10] = [
    ScoreCheck {
        key: "company_identity",
        weight: 2,
        satisfied: company_identity,
    },
    ScoreCheck {
        key: "base_location",
        weight: 2,
        satisfied: base_location,
    },
    ScoreCheck {
        key: "partner_class",
        weight: 2,
        satisfied: partner_class,
    },
    ScoreCheck {
        key: "service_regions",
        weight: 2,
        satisfied: service_regions,
    },
    ScoreCheck {
        key: "team_size",
        weight: 2,
        satisfied: team_size,
    },
    ScoreCheck {
        key: "track_record",
        weight: 2,
        satisfied: track_record,
    },
    ScoreCheck {
        key: "certifications",
        weight: 2,
        satisfied: certifications,
    },
    ScoreCheck {
        key: "audit_evidence",
        weight: 2,
        satisfied: audit_evidence,
    },
    ScoreCheck {
        key: "site_portfolio",
        weight: 2,
        satisfied: site_portfolio,
    },
    ScoreCheck {
        key: "consents",
        weight: 2,
        satisfied: consents,
    },
];

pub(crate) fn max_score() -> u8 {
    CHECKS.iter().map(|check| check.weight).sum()
}

fn non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

fn company_identity(snapshot: &OnboardingSnapshot) -> bool {
    non_empty(&snapshot.company.legal_name) && non_empty(&snapshot.company.registration_number)
}

fn base_location(snapshot: &OnboardingSnapshot) -> bool {
    non_empty(&snapshot.base_location.city) && non_empty(&snapshot.base_location.country)
}

fn partner_class(snapshot: &OnboardingSnapshot) -> bool {
    snapshot.partner_class.is_some()
}

fn service_regions(snapshot: &OnboardingSnapshot) -> bool {
    snapshot
        .service_regions
        .iter()
        .any(|region| non_empty(region))
}

fn team_size(snapshot: &OnboardingSnapshot) -> bool {
    snapshot.team_size > 0
}

fn track_record(snapshot: &OnboardingSnapshot) -> bool {
    snapshot.completed_projects > 0
}

fn certifications(snapshot: &OnboardingSnapshot) -> bool {
    snapshot
        .certifications
        .iter()
        .any(|certification| non_empty(certification))
}

fn audit_evidence(snapshot: &OnboardingSnapshot) -> bool {
    !snapshot.audit_files.is_empty() || !snapshot.bill_files.is_empty()
}

fn site_portfolio(snapshot: &OnboardingSnapshot) -> bool {
    !snapshot.site_files.is_empty()
}

fn consents(snapshot: &OnboardingSnapshot) -> bool {
    snapshot.consents.all_given()
}
