use registration::{SubmissionPayload, SubmissionReceipt};
use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, PartialEq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Error(String),
    /// Validate the current step and advance (or submit from the last step).
    NextStep,
    /// Step back without validating.
    PrevStep,
    /// Hand a frozen draft to the submission sink.
    Submit(SubmissionPayload),
    SubmissionAccepted(SubmissionReceipt),
    SubmissionFailed(String),
    /// Discard everything and start a fresh registration.
    NewRegistration,
    Navigate(usize),
}
