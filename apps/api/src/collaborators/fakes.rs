//! In-memory collaborators for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::chat::weights::WeightConfig;
use crate::collaborators::{
    CandidateScorer, CollaboratorError, Collaborators, Invitation, InvitationTransport, JdParser,
    ResumeQa,
};
use crate::models::candidate::{ParsedResume, ResumeData};
use crate::models::job::ParsedJD;

pub fn resume(name: Option<&str>, email: Option<&str>) -> ParsedResume {
    ParsedResume {
        filename: None,
        parsed_data: Some(ResumeData {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
            ..Default::default()
        }),
    }
}

#[derive(Default)]
pub struct FakeJdParser {
    fail: bool,
}

impl FakeJdParser {
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl JdParser for FakeJdParser {
    async fn parse(&self, jd_text: &str) -> Result<ParsedJD, CollaboratorError> {
        if self.fail {
            return Err(CollaboratorError::Other("parser down".to_string()));
        }
        Ok(ParsedJD {
            title: Some(jd_text.lines().next().unwrap_or_default().to_string()),
            ..Default::default()
        })
    }
}

pub struct FakeScorer {
    scores: Option<Vec<f64>>,
    calls: AtomicUsize,
}

impl FakeScorer {
    pub fn returning(scores: Vec<f64>) -> Self {
        Self {
            scores: Some(scores),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            scores: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CandidateScorer for FakeScorer {
    async fn score(
        &self,
        _candidates: &[ParsedResume],
        _parsed_jd: &ParsedJD,
        _weights: &WeightConfig,
    ) -> Result<Vec<f64>, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.scores
            .clone()
            .ok_or_else(|| CollaboratorError::Other("scorer down".to_string()))
    }
}

/// Answers with the question and the resume name it was asked about.
pub struct EchoQa;

#[async_trait]
impl ResumeQa for EchoQa {
    async fn answer(
        &self,
        question: &str,
        resume: &ParsedResume,
    ) -> Result<String, CollaboratorError> {
        Ok(format!(
            "{} asked about {}",
            question,
            resume.name().unwrap_or("nobody")
        ))
    }
}

/// Records every delivery; fails for the listed emails.
#[derive(Default)]
pub struct FakeTransport {
    failing: Vec<String>,
    delivered: Mutex<Vec<Invitation>>,
}

impl FakeTransport {
    pub fn failing_for(emails: &[&str]) -> Self {
        Self {
            failing: emails.iter().map(|e| e.to_string()).collect(),
            delivered: Mutex::default(),
        }
    }

    /// Every attempted delivery, failed ones included.
    pub fn delivered(&self) -> Vec<Invitation> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl InvitationTransport for FakeTransport {
    async fn deliver(&self, invitation: &Invitation) -> Result<(), CollaboratorError> {
        self.delivered.lock().unwrap().push(invitation.clone());
        if self.failing.contains(&invitation.to_email) {
            return Err(CollaboratorError::Other("mailbox unavailable".to_string()));
        }
        Ok(())
    }
}

/// Handles onto the fakes behind a `Collaborators` bundle.
pub struct Fakes {
    pub scorer: Arc<FakeScorer>,
    pub transport: Arc<FakeTransport>,
}

pub fn collaborators(scorer: FakeScorer, transport: FakeTransport) -> (Collaborators, Fakes) {
    collaborators_with_parser(FakeJdParser::default(), scorer, transport)
}

pub fn collaborators_with_parser(
    parser: FakeJdParser,
    scorer: FakeScorer,
    transport: FakeTransport,
) -> (Collaborators, Fakes) {
    let scorer = Arc::new(scorer);
    let transport = Arc::new(transport);
    let bundle = Collaborators {
        jd_parser: Arc::new(parser),
        scorer: scorer.clone(),
        qa: Arc::new(EchoQa),
        transport: transport.clone(),
    };
    (bundle, Fakes { scorer, transport })
}
