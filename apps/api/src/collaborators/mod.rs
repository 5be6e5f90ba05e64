//! External collaborators the conversation talks to.
//!
//! Each concern is a trait so the controller can be driven by the HTTP
//! screening service, the local LLM/keyword pair, or in-memory fakes in tests.
//! `AppState` carries one `Collaborators` bundle built at startup from config.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::chat::weights::WeightConfig;
use crate::config::{CollaboratorMode, Config};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::candidate::ParsedResume;
use crate::models::job::ParsedJD;

pub mod backend;
pub mod emailjs;
pub mod keyword_scorer;
pub mod llm;

#[cfg(test)]
pub mod fakes;

#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{service} returned status {status}: {message}")]
    Status {
        service: &'static str,
        status: u16,
        message: String,
    },

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Scorer returned {actual} scores for {expected} candidates")]
    ScoreCountMismatch { expected: usize, actual: usize },

    #[error("{0}")]
    Other(String),
}

/// One invitation to one recipient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Invitation {
    pub to_name: String,
    pub to_email: String,
    pub message: String,
}

#[async_trait]
pub trait JdParser: Send + Sync {
    async fn parse(&self, jd_text: &str) -> Result<ParsedJD, CollaboratorError>;
}

/// Returns one score per candidate, in the order the candidates were given.
#[async_trait]
pub trait CandidateScorer: Send + Sync {
    async fn score(
        &self,
        candidates: &[ParsedResume],
        parsed_jd: &ParsedJD,
        weights: &WeightConfig,
    ) -> Result<Vec<f64>, CollaboratorError>;
}

#[async_trait]
pub trait ResumeQa: Send + Sync {
    async fn answer(
        &self,
        question: &str,
        resume: &ParsedResume,
    ) -> Result<String, CollaboratorError>;
}

/// Delivers a single invitation. Failures are opaque to the conversation.
#[async_trait]
pub trait InvitationTransport: Send + Sync {
    async fn deliver(&self, invitation: &Invitation) -> Result<(), CollaboratorError>;
}

/// Everything a conversation needs from the outside world.
#[derive(Clone)]
pub struct Collaborators {
    pub jd_parser: Arc<dyn JdParser>,
    pub scorer: Arc<dyn CandidateScorer>,
    pub qa: Arc<dyn ResumeQa>,
    pub transport: Arc<dyn InvitationTransport>,
}

impl Collaborators {
    /// Wires collaborators for the configured mode.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let transport = Arc::new(emailjs::EmailJsTransport::new(config.emailjs.clone())?);

        let collaborators = match &config.mode {
            CollaboratorMode::Backend { base_url } => {
                let backend = Arc::new(backend::HttpScreeningBackend::new(base_url.clone())?);
                Collaborators {
                    jd_parser: backend.clone(),
                    scorer: backend.clone(),
                    qa: backend,
                    transport,
                }
            }
            CollaboratorMode::Local { anthropic_api_key } => {
                let assistant = Arc::new(llm::LlmScreeningAssistant::new(LlmClient::new(
                    anthropic_api_key.clone(),
                )?));
                Collaborators {
                    jd_parser: assistant.clone(),
                    scorer: Arc::new(keyword_scorer::KeywordCandidateScorer),
                    qa: assistant,
                    transport,
                }
            }
        };

        Ok(collaborators)
    }
}
