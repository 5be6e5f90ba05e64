// Prompt constants for the local collaborator mode.

/// System prompt for JD parsing — enforces JSON-only output.
pub const JD_PARSE_SYSTEM: &str = "You are an expert technical recruiter. \
    Parse a job description into structured screening criteria. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// JD parsing prompt template. Fill `{jd_text}` before sending.
pub const JD_PARSE_PROMPT_TEMPLATE: &str = r#"Parse the following job description into screening criteria.

Return a JSON object with this EXACT schema (no extra fields):
{
  "title": "Backend Engineer",
  "required_skills": ["Rust", "PostgreSQL"],
  "preferred_skills": ["Kubernetes"],
  "education": ["Computer Science"],
  "min_experience_years": 3,
  "certifications": ["AWS Solutions Architect"]
}

Rules:
- required_skills: skills the posting marks as required or must-have.
- preferred_skills: skills marked nice-to-have, preferred or a plus.
- education: degree subjects or levels, short phrases only.
- min_experience_years: a number, or null if the posting states none.
- certifications: named certifications only.

Job description:
{jd_text}"#;

/// System prompt for resume Q&A.
pub const RESUME_QA_SYSTEM: &str = "You are an assistant helping an HR user screen candidates. \
    Answer questions using only the resume provided. \
    If the resume does not contain the answer, say so plainly. \
    Keep answers short.";

/// Resume Q&A prompt template. Fill `{resume}` and `{question}` before sending.
pub const RESUME_QA_PROMPT_TEMPLATE: &str = r#"Resume (JSON):
{resume}

Question: {question}"#;

/// Substitutes `{key}` placeholders in a single pass over `template`.
/// Inserted values are never scanned again, so placeholder-looking text
/// inside a value stays literal. Unknown `{...}` text is left as is.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let matched = vars
            .iter()
            .find(|(key, _)| tail.strip_prefix(key).is_some_and(|after| after.starts_with('}')));
        match matched {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_leaves_placeholders_inside_values_alone() {
        let filled = fill(
            RESUME_QA_PROMPT_TEMPLATE,
            &[("resume", r#"{"name": "{question}"}"#), ("question", "Who is {resume}?")],
        );
        assert_eq!(
            filled,
            "Resume (JSON):\n{\"name\": \"{question}\"}\n\nQuestion: Who is {resume}?"
        );
    }

    #[test]
    fn test_fill_keeps_json_braces_in_template() {
        let filled = fill(JD_PARSE_PROMPT_TEMPLATE, &[("jd_text", "Rust engineer")]);
        assert!(filled.contains("\"title\": \"Backend Engineer\""));
        assert!(filled.ends_with("Job description:\nRust engineer"));
        assert!(!filled.contains("{jd_text}"));
    }
}
