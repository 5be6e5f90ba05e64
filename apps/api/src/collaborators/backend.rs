//! HTTP screening service: `/parse_jd`, `/score` and `/chat`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::chat::weights::WeightConfig;
use crate::collaborators::{CandidateScorer, CollaboratorError, JdParser, ResumeQa};
use crate::models::candidate::{ParsedResume, ResumeData};
use crate::models::job::ParsedJD;

const SERVICE: &str = "screening backend";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Serialize)]
struct ParseJdRequest<'a> {
    jd_text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ParseJdResponse {
    parsed_jd: ParsedJD,
}

#[derive(Debug, Serialize)]
struct ScoreRequest<'a> {
    candidates: &'a [ParsedResume],
    job_description: &'a ParsedJD,
    weights: &'a WeightConfig,
}

#[derive(Debug, Deserialize)]
struct ScoreResponse {
    #[serde(default)]
    scored_candidates: Vec<ScoredCandidate>,
}

#[derive(Debug, Deserialize)]
struct ScoredCandidate {
    score: f64,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    question: &'a str,
    resume: Option<&'a ResumeData>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    answer: String,
}

/// Client for the external screening service that also hosts the resume parser.
pub struct HttpScreeningBackend {
    client: Client,
    base_url: String,
}

impl HttpScreeningBackend {
    pub fn new(base_url: String) -> Result<Self, CollaboratorError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, base_url })
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, CollaboratorError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "Calling screening backend");

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CollaboratorError::Status {
                service: SERVICE,
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl JdParser for HttpScreeningBackend {
    async fn parse(&self, jd_text: &str) -> Result<ParsedJD, CollaboratorError> {
        let response: ParseJdResponse = self.post("/parse_jd", &ParseJdRequest { jd_text }).await?;
        Ok(response.parsed_jd)
    }
}

#[async_trait]
impl CandidateScorer for HttpScreeningBackend {
    async fn score(
        &self,
        candidates: &[ParsedResume],
        parsed_jd: &ParsedJD,
        weights: &WeightConfig,
    ) -> Result<Vec<f64>, CollaboratorError> {
        let request = ScoreRequest {
            candidates,
            job_description: parsed_jd,
            weights,
        };
        let response: ScoreResponse = self.post("/score", &request).await?;
        Ok(response
            .scored_candidates
            .into_iter()
            .map(|c| c.score)
            .collect())
    }
}

#[async_trait]
impl ResumeQa for HttpScreeningBackend {
    async fn answer(
        &self,
        question: &str,
        resume: &ParsedResume,
    ) -> Result<String, CollaboratorError> {
        let request = ChatRequest {
            question,
            resume: resume.parsed_data.as_ref(),
        };
        let response: ChatResponse = self.post("/chat", &request).await?;
        Ok(response.answer)
    }
}
