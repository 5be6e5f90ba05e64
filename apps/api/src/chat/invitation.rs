//! Invitation step: pick recipients from the passed set, write one message,
//! send it to each of them independently.

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::chat::messages;
use crate::chat::scoring::CandidateScore;
use crate::chat::transcript::ChatTranscript;
use crate::collaborators::{Invitation, InvitationTransport};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvitationError {
    #[error("the invitation step is not open")]
    Closed,

    #[error("recipient index {index} is out of range for {len} passed candidates")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Which emails went out and which did not, in the order they were attempted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendReport {
    pub sent: Vec<String>,
    pub failed: Vec<String>,
}

impl SendReport {
    pub fn attempted(&self) -> usize {
        self.sent.len() + self.failed.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InvitationSession {
    passed: Vec<CandidateScore>,
    /// Indices into `passed`, in the order they were ticked.
    selected: Vec<usize>,
    draft: String,
    open: bool,
}

impl InvitationSession {
    /// Installs a fresh passed set from a cutoff round. Any earlier selection
    /// is dropped; the step opens only when someone passed.
    pub fn open(&mut self, passed: Vec<CandidateScore>) {
        self.open = !passed.is_empty();
        self.passed = passed;
        self.selected.clear();
    }

    pub fn is_visible(&self) -> bool {
        self.open && !self.passed.is_empty()
    }

    pub fn passed(&self) -> &[CandidateScore] {
        &self.passed
    }

    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Flips `index` in or out of the selection. Returns whether it is now selected.
    pub fn toggle_recipient(&mut self, index: usize) -> Result<bool, InvitationError> {
        if !self.is_visible() {
            return Err(InvitationError::Closed);
        }
        if index >= self.passed.len() {
            return Err(InvitationError::IndexOutOfRange {
                index,
                len: self.passed.len(),
            });
        }

        if let Some(pos) = self.selected.iter().position(|&i| i == index) {
            self.selected.remove(pos);
            Ok(false)
        } else {
            self.selected.push(index);
            Ok(true)
        }
    }

    /// Sends the current draft to every selected recipient, one at a time.
    ///
    /// Fails closed on an empty selection or a blank draft: a warning goes to
    /// the transcript and nothing is sent. Otherwise every recipient gets its own
    /// attempt, a failure never stops the rest, and the session is reset
    /// afterwards however many failed.
    pub async fn send(
        &mut self,
        transport: &dyn InvitationTransport,
        transcript: &mut ChatTranscript,
    ) -> SendReport {
        if self.selected.is_empty() {
            warn!("Invitation send rejected: no recipients selected");
            transcript.push_bot(messages::NO_RECIPIENTS);
            return SendReport::default();
        }
        if self.draft.trim().is_empty() {
            warn!("Invitation send rejected: empty message");
            transcript.push_bot(messages::EMPTY_DRAFT);
            return SendReport::default();
        }

        let mut report = SendReport::default();
        for &index in &self.selected {
            let candidate = &self.passed[index];
            let invitation = Invitation {
                to_name: candidate.name.clone(),
                to_email: candidate.email.clone(),
                message: self.draft.clone(),
            };
            match transport.deliver(&invitation).await {
                Ok(()) => report.sent.push(candidate.email.clone()),
                Err(e) => {
                    warn!(to = %candidate.email, error = %e, "Invitation delivery failed");
                    report.failed.push(candidate.email.clone());
                }
            }
        }

        if !report.sent.is_empty() {
            transcript.push_bot(messages::sent_to(&report.sent));
        }
        if !report.failed.is_empty() {
            transcript.push_bot(messages::failed_to(&report.failed));
        }
        info!(
            attempted = report.attempted(),
            sent = report.sent.len(),
            failed = report.failed.len(),
            "Invitation batch finished"
        );

        self.reset();
        report
    }

    /// Hides the step and forgets the selection and draft. The passed set stays
    /// until the next cutoff round replaces it.
    pub fn reset(&mut self) {
        self.open = false;
        self.selected.clear();
        self.draft.clear();
    }
}
