use serde::Serialize;

use super::blueprint::{WizardPath, WizardStep};
use super::domain::OnboardingSnapshot;

/// Outcome of a forward navigation attempt. A blocked step is a recoverable
/// validation result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Advanced { step: WizardStep },
    Blocked { step: WizardStep, missing: Vec<&'static str> },
    Completed,
}

/// Per-step line in a progress view.
#[derive(Debug, Clone, Serialize)]
pub struct StepProgressView {
    pub step: WizardStep,
    pub step_label: &'static str,
    pub satisfied: bool,
    pub current: bool,
}

/// Linear wizard over a resolved path.
///
/// The path defaults to the longer no-audit sequence until the partner
/// confirms the first step; leaving `CompanyBasics` resolves it from the
/// audit answer and it stays fixed unless `apply_audit_answer` is called.
#[derive(Debug, Clone)]
pub struct OnboardingWizard {
    path: WizardPath,
    index: usize,
    completed: bool,
}

impl OnboardingWizard {
    pub fn start() -> Self {
        Self {
            path: WizardPath::WithoutAudit,
            index: 0,
            completed: false,
        }
    }

    /// Wizard positioned at the first step with the path already resolved
    /// from the snapshot, for callers that only need the completion gate.
    pub fn for_snapshot(snapshot: &OnboardingSnapshot) -> Self {
        Self {
            path: WizardPath::for_audit_answer(snapshot.has_recent_audit.unwrap_or(false)),
            index: 0,
            completed: false,
        }
    }

    pub fn path(&self) -> WizardPath {
        self.path
    }

    pub fn current_step(&self) -> WizardStep {
        self.path.steps()[self.index]
    }

    pub fn step_index(&self) -> usize {
        self.index
    }

    pub fn step_count(&self) -> usize {
        self.path.steps().len()
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Advance past the current step when its requirements hold.
    ///
    /// On the terminal step a satisfied predicate completes the wizard
    /// instead of advancing. Leaving the first step resolves the path from
    /// the audit answer.
    pub fn next(&mut self, snapshot: &OnboardingSnapshot) -> AdvanceOutcome {
        if self.completed {
            return AdvanceOutcome::Completed;
        }

        let step = self.current_step();
        let missing = step.missing_fields(snapshot);
        if !missing.is_empty() {
            return AdvanceOutcome::Blocked { step, missing };
        }

        if step == WizardStep::CompanyBasics {
            if let Some(has_recent_audit) = snapshot.has_recent_audit {
                self.path = WizardPath::for_audit_answer(has_recent_audit);
            }
        }

        if self.index + 1 >= self.path.steps().len() {
            self.completed = true;
            return AdvanceOutcome::Completed;
        }

        self.index += 1;
        AdvanceOutcome::Advanced {
            step: self.current_step(),
        }
    }

    /// Step back one step unconditionally; a no-op on the first step.
    pub fn previous(&mut self) -> Option<WizardStep> {
        if self.index == 0 {
            return None;
        }
        self.completed = false;
        self.index -= 1;
        Some(self.current_step())
    }

    /// Record a changed audit answer after the path may already be resolved.
    ///
    /// Flipping the answer rebuilds the path, clears the uploads that only
    /// existed on the abandoned branch, and returns to the decision step so
    /// forward progress is re-confirmed. Re-asserting the same answer leaves
    /// everything untouched.
    pub fn apply_audit_answer(
        &mut self,
        snapshot: &mut OnboardingSnapshot,
        has_recent_audit: bool,
    ) {
        let previous = snapshot.has_recent_audit.replace(has_recent_audit);
        if previous == Some(has_recent_audit) {
            return;
        }

        let path = WizardPath::for_audit_answer(has_recent_audit);
        if previous.is_some() {
            match path {
                WizardPath::WithAudit => {
                    snapshot.bill_files.clear();
                    snapshot.site_files.clear();
                }
                WizardPath::WithoutAudit => {
                    snapshot.audit_files.clear();
                }
            }
        }

        self.path = path;
        self.index = 0;
        self.completed = false;
    }

    /// Requirements still outstanding across every step of the resolved path.
    pub fn outstanding(&self, snapshot: &OnboardingSnapshot) -> Vec<&'static str> {
        self.path
            .steps()
            .iter()
            .flat_map(|step| step.missing_fields(snapshot))
            .collect()
    }

    pub fn ready_to_submit(&self, snapshot: &OnboardingSnapshot) -> bool {
        self.outstanding(snapshot).is_empty()
    }

    pub fn progress(&self, snapshot: &OnboardingSnapshot) -> Vec<StepProgressView> {
        self.path
            .steps()
            .iter()
            .enumerate()
            .map(|(index, step)| StepProgressView {
                step: *step,
                step_label: step.label(),
                satisfied: step.is_satisfied(snapshot),
                current: !self.completed && index == self.index,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_is_a_no_op_on_the_first_step() {
        let mut wizard = OnboardingWizard::start();
        assert_eq!(wizard.previous(), None);
        assert_eq!(wizard.current_step(), WizardStep::CompanyBasics);
        assert_eq!(wizard.step_index(), 0);
    }

    #[test]
    fn next_is_refused_while_requirements_are_missing() {
        let mut wizard = OnboardingWizard::start();
        let snapshot = OnboardingSnapshot::default();

        match wizard.next(&snapshot) {
            AdvanceOutcome::Blocked { step, missing } => {
                assert_eq!(step, WizardStep::CompanyBasics);
                assert!(missing.contains(&"company.legal_name"));
            }
            other => panic!("expected blocked outcome, got {other:?}"),
        }
        assert_eq!(wizard.step_index(), 0);
    }

    #[test]
    fn leaving_the_first_step_resolves_the_path() {
        let mut wizard = OnboardingWizard::start();
        let mut snapshot = OnboardingSnapshot::default();
        snapshot.company.legal_name = "Beacon Solar GmbH".to_string();
        snapshot.company.registration_number = "HRB 12345".to_string();
        snapshot.has_recent_audit = Some(true);

        assert_eq!(
            wizard.next(&snapshot),
            AdvanceOutcome::Advanced {
                step: WizardStep::ContactDetails
            }
        );
        assert_eq!(wizard.path(), WizardPath::WithAudit);
        assert_eq!(wizard.step_count(), 7);
    }
}
