//! Claude-backed JD parsing and resume Q&A for the local collaborator mode.

use async_trait::async_trait;

use crate::collaborators::{CollaboratorError, JdParser, ResumeQa};
use crate::llm_client::prompts::{
    fill, JD_PARSE_PROMPT_TEMPLATE, JD_PARSE_SYSTEM, RESUME_QA_PROMPT_TEMPLATE, RESUME_QA_SYSTEM,
};
use crate::llm_client::LlmClient;
use crate::models::candidate::ParsedResume;
use crate::models::job::ParsedJD;

pub struct LlmScreeningAssistant {
    llm: LlmClient,
}

impl LlmScreeningAssistant {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

fn jd_prompt(jd_text: &str) -> String {
    fill(JD_PARSE_PROMPT_TEMPLATE, &[("jd_text", jd_text)])
}

fn qa_prompt(question: &str, resume: &ParsedResume) -> Result<String, CollaboratorError> {
    let resume_json = serde_json::to_string_pretty(&resume.parsed_data)
        .map_err(|e| CollaboratorError::Other(format!("Failed to encode resume: {e}")))?;
    Ok(fill(
        RESUME_QA_PROMPT_TEMPLATE,
        &[("resume", resume_json.as_str()), ("question", question)],
    ))
}

#[async_trait]
impl JdParser for LlmScreeningAssistant {
    async fn parse(&self, jd_text: &str) -> Result<ParsedJD, CollaboratorError> {
        Ok(self.llm.call_json(&jd_prompt(jd_text), JD_PARSE_SYSTEM).await?)
    }
}

#[async_trait]
impl ResumeQa for LlmScreeningAssistant {
    async fn answer(
        &self,
        question: &str,
        resume: &ParsedResume,
    ) -> Result<String, CollaboratorError> {
        let prompt = qa_prompt(question, resume)?;
        Ok(self.llm.call_text(&prompt, RESUME_QA_SYSTEM).await?)
    }
}
