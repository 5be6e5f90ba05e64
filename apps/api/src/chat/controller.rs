//! Conversation controller — the workflow state machine.
//!
//! Flow: parse JD → "score" → cutoff → select recipients → send invitations.
//!
//! States are `Idle` and `AwaitingCutoff`. A successful "score" turn moves to
//! `AwaitingCutoff`; a numeric cutoff moves back to `Idle`; anything
//! non-numeric while awaiting a cutoff is a warning and a self-loop. Whether
//! the invitation step is shown is derived from `InvitationSession`, not a
//! third state.
//!
//! Every turn is handled with `&mut self`, so a session processes one action
//! at a time. The user's message is written before any collaborator call so
//! the transcript keeps input order even when the call fails.

use serde::Serialize;
use tracing::{info, warn};

use crate::chat::cutoff::{parse_cutoff, CutoffFilter};
use crate::chat::invitation::{InvitationSession, SendReport};
use crate::chat::messages;
use crate::chat::scoring::{CandidateScore, ScoringCoordinator};
use crate::chat::transcript::{ChatTranscript, Message};
use crate::chat::weights::WeightConfig;
use crate::collaborators::Collaborators;
use crate::errors::AppError;
use crate::models::candidate::ParsedResume;
use crate::models::job::ParsedJD;

const SCORE_KEYWORD: &str = "score";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    #[default]
    Idle,
    AwaitingCutoff,
}

/// Read-only view handed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub state: WorkflowState,
    pub transcript: Vec<Message>,
    pub weights: WeightConfig,
    pub job_description_parsed: bool,
    pub last_scores: Vec<CandidateScore>,
    pub show_invitation: bool,
    pub passed: Vec<CandidateScore>,
    pub selected: Vec<usize>,
    pub draft: String,
}

pub struct ConversationController {
    collaborators: Collaborators,
    candidates: Vec<ParsedResume>,
    parsed_jd: Option<ParsedJD>,
    weights: WeightConfig,
    state: WorkflowState,
    last_scores: Vec<CandidateScore>,
    invitation: InvitationSession,
    transcript: ChatTranscript,
}

impl ConversationController {
    pub fn new(collaborators: Collaborators, candidates: Vec<ParsedResume>) -> Self {
        Self {
            collaborators,
            candidates,
            parsed_jd: None,
            weights: WeightConfig::default(),
            state: WorkflowState::Idle,
            last_scores: Vec::new(),
            invitation: InvitationSession::default(),
            transcript: ChatTranscript::new(),
        }
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn transcript(&self) -> &ChatTranscript {
        &self.transcript
    }

    pub fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    pub fn last_scores(&self) -> &[CandidateScore] {
        &self.last_scores
    }

    pub fn invitation(&self) -> &InvitationSession {
        &self.invitation
    }

    pub fn show_invitation(&self) -> bool {
        self.invitation.is_visible()
    }

    /// Replaces the weights. Each must be within [0, 100]; the total is only
    /// enforced when scoring is requested.
    pub fn set_weights(&mut self, weights: WeightConfig) -> Result<(), AppError> {
        weights
            .check_ranges()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.weights = weights;
        Ok(())
    }

    /// Parses a job description and keeps the result for the next scoring round.
    /// A failed parse leaves the previous JD in place and writes nothing.
    pub async fn submit_job_description(&mut self, jd_text: &str) -> Result<(), AppError> {
        if jd_text.trim().is_empty() {
            return Err(AppError::Validation("jd_text cannot be empty".to_string()));
        }

        let parsed = self.collaborators.jd_parser.parse(jd_text).await?;
        info!("Job description parsed");
        self.parsed_jd = Some(parsed);
        self.transcript.push_bot(messages::JD_PARSED);
        Ok(())
    }

    /// Handles one user turn.
    pub async fn submit_input(&mut self, text: &str) -> Result<(), AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }
        self.transcript.push_user(text);

        if self.state == WorkflowState::AwaitingCutoff {
            self.handle_cutoff(text);
            return Ok(());
        }
        if text.to_lowercase().contains(SCORE_KEYWORD) {
            return self.handle_score_request().await;
        }
        self.handle_question(text).await
    }

    fn handle_cutoff(&mut self, text: &str) {
        let Some(cutoff) = parse_cutoff(text) else {
            warn!(input = text, "Rejected non-numeric cutoff");
            self.transcript.push_bot(messages::INVALID_CUTOFF);
            return;
        };

        CutoffFilter::run(
            &self.last_scores,
            cutoff,
            &mut self.invitation,
            &mut self.transcript,
        );
        self.state = WorkflowState::Idle;
    }

    async fn handle_score_request(&mut self) -> Result<(), AppError> {
        if let Err(e) = self.weights.validate() {
            warn!(error = %e, "Scoring rejected");
            self.transcript.push_bot(messages::WEIGHTS_MUST_SUM);
            return Ok(());
        }
        let Some(parsed_jd) = self.parsed_jd.as_ref() else {
            warn!("Scoring rejected: no job description parsed");
            self.transcript.push_bot(messages::JD_REQUIRED);
            return Ok(());
        };

        let scored = ScoringCoordinator::new(self.collaborators.scorer.as_ref())
            .score(
                &self.candidates,
                parsed_jd,
                &self.weights,
                &mut self.transcript,
            )
            .await?;

        self.last_scores = scored;
        self.state = WorkflowState::AwaitingCutoff;
        Ok(())
    }

    async fn handle_question(&mut self, question: &str) -> Result<(), AppError> {
        let Some(resume) = self.candidates.first() else {
            self.transcript.push_bot(messages::NO_RESUMES);
            return Ok(());
        };

        let answer = self.collaborators.qa.answer(question, resume).await?;
        self.transcript.push_bot(answer);
        Ok(())
    }

    pub fn toggle_recipient(&mut self, index: usize) -> Result<bool, AppError> {
        self.invitation
            .toggle_recipient(index)
            .map_err(|e| AppError::Validation(e.to_string()))
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.invitation.set_draft(draft);
    }

    pub async fn send_invitations(&mut self) -> SendReport {
        self.invitation
            .send(self.collaborators.transport.as_ref(), &mut self.transcript)
            .await
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let invitation = self.invitation();
        SessionSnapshot {
            state: self.state(),
            transcript: self.transcript().messages().to_vec(),
            weights: *self.weights(),
            job_description_parsed: self.parsed_jd.is_some(),
            last_scores: self.last_scores().to_vec(),
            show_invitation: self.show_invitation(),
            passed: invitation.passed().to_vec(),
            selected: invitation.selected().to_vec(),
            draft: invitation.draft().to_string(),
        }
    }
}
