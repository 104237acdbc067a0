//! Domain model for the Project Pro registration wizard.
//!
//! A guardian registers one or more academy players through a linear,
//! stepper-driven flow: account details, player count, then four form
//! sections per player. This crate owns the draft aggregate, the step
//! sequencing, field copy-forward between players, per-step validation
//! and the submission boundary. It is UI-agnostic; the terminal
//! front-end lives in the `enroll` crate.

pub mod catalog;
pub mod draft;
pub mod error;
pub mod field;
pub mod steps;
pub mod submit;
pub mod sync;
pub mod validate;
pub mod wizard;

pub use draft::{GuardianDraft, PlayerDraft, RegistrationDraft, MAX_PLAYERS, MIN_PLAYERS};
pub use error::SubmissionError;
pub use field::{GuardianField, PlayerField};
pub use steps::{generate_steps, resolve_step, PlayerSection, StepDescriptor, StepIcon, StepKind};
pub use submit::{GuardianEntry, SubmissionPayload, SubmissionReceipt, SubmissionSink};
pub use validate::{validate_step, ValidationErrors};
pub use wizard::{SubmitPhase, WizardController};
