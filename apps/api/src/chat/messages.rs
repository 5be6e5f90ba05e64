// Bot-facing wording for every conversation step.

pub const JD_PARSED: &str =
    "✅ Job Description parsed. You can now type ‘score’ to get candidate scores.";
pub const WEIGHTS_MUST_SUM: &str = "⚠️ Please ensure the weights sum to 100 before scoring.";
pub const JD_REQUIRED: &str = "⚠️ Please parse a job description before scoring.";
pub const CUTOFF_PROMPT: &str = "Please enter a cutoff score to filter candidates.";
pub const INVALID_CUTOFF: &str = "⚠️ Please enter a valid numeric cutoff.";
pub const SELECT_AND_WRITE: &str =
    "Please select whom you want to invite and type your message below.";
pub const NO_RECIPIENTS: &str = "⚠️ Please select at least one recipient.";
pub const EMPTY_DRAFT: &str = "⚠️ Please enter a message to send.";
pub const NO_RESUMES: &str = "⚠️ No parsed resumes are available to answer questions about.";

pub const PLACEHOLDER_EMAIL: &str = "no-email@example.com";

pub fn placeholder_name(index: usize) -> String {
    format!("Candidate {}", index + 1)
}

pub fn score_line(name: &str, score: f64) -> String {
    format!("{name}: {score}")
}

pub fn none_passed(cutoff: f64) -> String {
    format!("No candidate has a score ≥ {cutoff}.")
}

pub fn passed_line(name: &str, email: &str) -> String {
    format!("✓ Passed: {name} ({email})")
}

pub fn sent_to(emails: &[String]) -> String {
    format!("✅ Invitations sent to: {}", emails.join(", "))
}

pub fn failed_to(emails: &[String]) -> String {
    format!("❌ Failed to send to: {}", emails.join(", "))
}
