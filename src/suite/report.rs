use uuid::Uuid;

use super::cases::StoryCase;
use super::failure::CaseFailure;
use super::state::SuiteState;

#[derive(Debug)]
pub enum CaseOutcome {
    Passed,
    Failed(CaseFailure),
}

impl CaseOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, CaseOutcome::Passed)
    }

    pub fn failure(&self) -> Option<&CaseFailure> {
        match self {
            CaseOutcome::Passed => None,
            CaseOutcome::Failed(failure) => Some(failure),
        }
    }
}

impl From<Result<(), CaseFailure>> for CaseOutcome {
    fn from(result: Result<(), CaseFailure>) -> Self {
        match result {
            Ok(()) => CaseOutcome::Passed,
            Err(failure) => CaseOutcome::Failed(failure),
        }
    }
}

#[derive(Debug)]
pub struct CaseReport {
    pub case: StoryCase,
    pub outcome: CaseOutcome,
}

/// Outcome of every check of one run, in execution order.
#[derive(Debug)]
pub struct SuiteReport {
    pub run_id: Uuid,
    pub cases: Vec<CaseReport>,
    pub final_state: SuiteState,
}

impl SuiteReport {
    /// Report for a run that never got a token: every check fails with the
    /// authentication error.
    pub fn authentication_failed(run_id: Uuid, reason: &impl std::fmt::Display) -> Self {
        let cases = StoryCase::ALL
            .into_iter()
            .map(|case| CaseReport {
                case,
                outcome: CaseOutcome::Failed(CaseFailure::Authentication(reason.to_string())),
            })
            .collect();
        Self {
            run_id,
            cases,
            final_state: SuiteState::Unauthenticated,
        }
    }

    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|c| c.outcome.is_passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn outcome_of(&self, case: StoryCase) -> Option<&CaseOutcome> {
        self.cases
            .iter()
            .find(|report| report.case == case)
            .map(|report| &report.outcome)
    }
}
