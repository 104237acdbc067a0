//! Wizard controller: owns the draft, the step pointer and the
//! submission lifecycle.
//!
//! Transitions are strictly linear: `next` is gated by the current
//! step's validation, `previous` is unconditional, and changing the
//! player count regenerates the step list (clamping the pointer when
//! the list shrinks under it). Submission permits a single in-flight
//! request; while `Submitting` the trigger is a no-op.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::draft::RegistrationDraft;
use crate::error::SubmissionError;
use crate::field::{GuardianField, PlayerField};
use crate::steps::{generate_steps, StepDescriptor, StepKind};
use crate::submit::{SubmissionPayload, SubmissionReceipt};
use crate::validate::{player_error_key, validate_step, ValidationErrors};

/// Lifecycle of the final submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitPhase {
    Editing,
    Submitting,
    Succeeded(SubmissionReceipt),
    Failed(String),
}

pub struct WizardController {
    draft: RegistrationDraft,
    steps: Vec<StepDescriptor>,
    step_index: usize,
    errors: ValidationErrors,
    phase: SubmitPhase,
    today: NaiveDate,
}

impl WizardController {
    /// Start a fresh registration. `today` anchors the age rule.
    pub fn new(today: NaiveDate) -> Self {
        let draft = RegistrationDraft::new();
        let steps = generate_steps(draft.player_count());
        Self {
            draft,
            steps,
            step_index: 0,
            errors: ValidationErrors::new(),
            phase: SubmitPhase::Editing,
            today,
        }
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn steps(&self) -> &[StepDescriptor] {
        &self.steps
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn current_step(&self) -> &StepDescriptor {
        &self.steps[self.step_index]
    }

    pub fn current_kind(&self) -> StepKind {
        self.steps[self.step_index].kind
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    pub fn is_first_step(&self) -> bool {
        self.step_index == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.step_index + 1 == self.steps.len()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmitPhase::Submitting)
    }

    /// Apply a guardian edit; a stale error for that field is cleared as
    /// soon as the guardian starts correcting it.
    pub fn edit_guardian(&mut self, field: GuardianField, value: &str) {
        self.draft.set_guardian_field(field, value);
        self.errors.remove(field.key());
    }

    /// Apply a player edit (copy-forward included) and clear its error.
    pub fn edit_player(&mut self, index: usize, field: PlayerField, value: &str) {
        self.draft.set_player_field(index, field, value);
        self.errors.remove(&player_error_key(index, field));
    }

    /// Change the player count: reseeds/truncates the draft, regenerates
    /// the step list and clamps the step pointer into the new range.
    pub fn set_player_count(&mut self, requested: usize) {
        let applied = self.draft.set_player_count(requested);
        self.steps = generate_steps(applied);
        if self.step_index >= self.steps.len() {
            self.step_index = self.steps.len() - 1;
        }
        self.errors.remove("player_count");
        debug!(target: "registration", count = applied, steps = self.steps.len(), "player count changed");
    }

    /// Validate the current step and advance on success.
    ///
    /// Returns whether the step pointer moved (or was already at the
    /// end with a clean step).
    pub fn next(&mut self) -> bool {
        let errors = validate_step(&self.draft, self.current_kind(), self.today);
        if !errors.is_empty() {
            self.errors = errors;
            return false;
        }
        self.errors.clear();
        if self.step_index + 1 < self.steps.len() {
            self.step_index += 1;
        }
        true
    }

    /// Step back without validating; bounded at the first step.
    pub fn previous(&mut self) {
        self.step_index = self.step_index.saturating_sub(1);
    }

    /// Validate the final step and freeze the draft into a payload.
    ///
    /// Returns `None` when validation fails, when the wizard is not on
    /// the last step, or when a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<SubmissionPayload> {
        if !self.is_last_step() {
            return None;
        }
        if !matches!(self.phase, SubmitPhase::Editing | SubmitPhase::Failed(_)) {
            return None;
        }
        let errors = validate_step(&self.draft, self.current_kind(), self.today);
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }
        self.errors.clear();
        self.phase = SubmitPhase::Submitting;
        info!(target: "registration", players = self.draft.player_count(), "submitting registration");
        Some(SubmissionPayload::from_draft(&self.draft))
    }

    /// Record the settlement of the in-flight submission.
    pub fn finish_submit(&mut self, result: Result<SubmissionReceipt, SubmissionError>) {
        if !self.is_submitting() {
            return;
        }
        self.phase = match result {
            Ok(receipt) => {
                info!(target: "registration", id = %receipt.id, "registration accepted");
                SubmitPhase::Succeeded(receipt)
            }
            Err(err) => SubmitPhase::Failed(err.to_string()),
        };
    }

    /// Discard the draft and start over.
    pub fn reset(&mut self) {
        *self = Self::new(self.today);
    }
}
