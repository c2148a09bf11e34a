use super::common::*;
use crate::workflows::onboarding::blueprint::{WizardPath, WizardStep};
use crate::workflows::onboarding::instance::{AdvanceOutcome, OnboardingWizard};

#[test]
fn full_walk_on_the_audit_path_completes() {
    let snapshot = complete_snapshot();
    let mut wizard = OnboardingWizard::start();

    let mut advances = 0;
    loop {
        match wizard.next(&snapshot) {
            AdvanceOutcome::Advanced { .. } => advances += 1,
            AdvanceOutcome::Completed => break,
            AdvanceOutcome::Blocked { step, missing } => {
                panic!("walk blocked on {step:?}, missing {missing:?}")
            }
        }
    }

    assert_eq!(wizard.path(), WizardPath::WithAudit);
    assert_eq!(advances, wizard.step_count() - 1);
    assert!(wizard.is_complete());
}

#[test]
fn full_walk_without_audit_visits_both_evidence_steps() {
    let mut snapshot = complete_snapshot();
    snapshot.has_recent_audit = Some(false);
    snapshot.audit_files.clear();
    snapshot.bill_files = vec![upload("bill-june.pdf")];

    let mut wizard = OnboardingWizard::start();
    let mut visited = vec![wizard.current_step()];
    loop {
        match wizard.next(&snapshot) {
            AdvanceOutcome::Advanced { step } => visited.push(step),
            AdvanceOutcome::Completed => break,
            AdvanceOutcome::Blocked { step, missing } => {
                panic!("walk blocked on {step:?}, missing {missing:?}")
            }
        }
    }

    assert_eq!(wizard.path(), WizardPath::WithoutAudit);
    assert!(visited.contains(&WizardStep::UtilityBills));
    assert!(visited.contains(&WizardStep::SitePhotos));
    assert!(!visited.contains(&WizardStep::AuditReport));
}

#[test]
fn back_then_forward_returns_to_the_same_step_without_data_loss() {
    let snapshot = complete_snapshot();
    let mut wizard = OnboardingWizard::start();

    wizard.next(&snapshot);
    wizard.next(&snapshot);
    let here = wizard.current_step();
    let before = snapshot.clone();

    assert_eq!(wizard.previous(), Some(WizardStep::ContactDetails));
    assert_eq!(
        wizard.next(&snapshot),
        AdvanceOutcome::Advanced { step: here }
    );
    assert_eq!(snapshot, before);
}

#[test]
fn blocked_step_reports_missing_fields_and_stays_put() {
    let mut snapshot = complete_snapshot();
    snapshot.contact.email.clear();

    let mut wizard = OnboardingWizard::start();
    wizard.next(&snapshot);
    assert_eq!(wizard.current_step(), WizardStep::ContactDetails);

    match wizard.next(&snapshot) {
        AdvanceOutcome::Blocked { step, missing } => {
            assert_eq!(step, WizardStep::ContactDetails);
            assert_eq!(missing, vec!["contact.email"]);
        }
        other => panic!("expected blocked outcome, got {other:?}"),
    }
    assert_eq!(wizard.current_step(), WizardStep::ContactDetails);
}

#[test]
fn terminal_step_requires_every_consent_before_completing() {
    let mut snapshot = complete_snapshot();
    snapshot.consents.site_contact = false;

    let mut wizard = OnboardingWizard::start();
    loop {
        match wizard.next(&snapshot) {
            AdvanceOutcome::Advanced { .. } => continue,
            AdvanceOutcome::Blocked { step, missing } => {
                assert_eq!(step, WizardStep::Consents);
                assert_eq!(missing, vec!["consents.site_contact"]);
                break;
            }
            AdvanceOutcome::Completed => panic!("wizard completed without full consent"),
        }
    }
    assert!(!wizard.is_complete());
}

#[test]
fn flipping_the_audit_answer_clears_stale_uploads_and_restarts() {
    let mut snapshot = complete_snapshot();
    let mut wizard = OnboardingWizard::start();

    // Resolve the audit path and move a few steps in.
    wizard.next(&snapshot);
    wizard.next(&snapshot);
    wizard.next(&snapshot);
    assert_eq!(wizard.path(), WizardPath::WithAudit);
    assert!(!snapshot.audit_files.is_empty());

    wizard.apply_audit_answer(&mut snapshot, false);

    assert_eq!(wizard.path(), WizardPath::WithoutAudit);
    assert_eq!(wizard.current_step(), WizardStep::CompanyBasics);
    assert!(snapshot.audit_files.is_empty());
    assert_eq!(snapshot.has_recent_audit, Some(false));
}

#[test]
fn switching_back_to_the_audit_path_clears_bill_and_site_uploads() {
    let mut snapshot = complete_snapshot();
    snapshot.has_recent_audit = Some(false);
    snapshot.audit_files.clear();
    snapshot.bill_files = vec![upload("bill-june.pdf")];

    let mut wizard = OnboardingWizard::start();
    wizard.next(&snapshot);
    assert_eq!(wizard.path(), WizardPath::WithoutAudit);

    wizard.apply_audit_answer(&mut snapshot, true);

    assert_eq!(wizard.path(), WizardPath::WithAudit);
    assert!(snapshot.bill_files.is_empty());
    assert!(snapshot.site_files.is_empty());
}

#[test]
fn reasserting_the_same_answer_changes_nothing() {
    let mut snapshot = complete_snapshot();
    let mut wizard = OnboardingWizard::start();
    wizard.next(&snapshot);
    wizard.next(&snapshot);
    let index = wizard.step_index();
    let before = snapshot.clone();

    wizard.apply_audit_answer(&mut snapshot, true);

    assert_eq!(wizard.step_index(), index);
    assert_eq!(snapshot, before);
}

#[test]
fn progress_view_marks_current_and_satisfied_steps() {
    let snapshot = complete_snapshot();
    let mut wizard = OnboardingWizard::start();
    wizard.next(&snapshot);

    let progress = wizard.progress(&snapshot);
    assert_eq!(progress.len(), wizard.step_count());
    assert!(progress.iter().all(|entry| entry.satisfied));
    let current: Vec<_> = progress.iter().filter(|entry| entry.current).collect();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].step, WizardStep::ContactDetails);
}
