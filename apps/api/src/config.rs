use anyhow::{bail, Context, Result};

const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Where JD parsing, scoring and resume Q&A are served from.
#[derive(Clone, PartialEq)]
pub enum CollaboratorMode {
    /// Remote screening service reached over HTTP.
    Backend { base_url: String },
    /// Claude for parsing and Q&A, in-process keyword scorer for scoring.
    Local { anthropic_api_key: String },
}

impl std::fmt::Debug for CollaboratorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollaboratorMode::Backend { base_url } => {
                f.debug_struct("Backend").field("base_url", base_url).finish()
            }
            CollaboratorMode::Local { .. } => f
                .debug_struct("Local")
                .field("anthropic_api_key", &"<redacted>")
                .finish(),
        }
    }
}

/// EmailJS credentials used to deliver invitations.
#[derive(Clone)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
}

impl std::fmt::Debug for EmailJsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailJsConfig")
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field("public_key", &"<redacted>")
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: CollaboratorMode,
    pub emailjs: EmailJsConfig,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        let mode = match lookup("SCREENER_MODE").as_deref().unwrap_or("backend") {
            "backend" => CollaboratorMode::Backend {
                base_url: lookup("SCREENING_BACKEND_URL")
                    .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
                    .trim_end_matches('/')
                    .to_string(),
            },
            "local" => CollaboratorMode::Local {
                anthropic_api_key: require("ANTHROPIC_API_KEY")?,
            },
            other => bail!("SCREENER_MODE must be 'backend' or 'local', got '{other}'"),
        };

        Ok(Config {
            mode,
            emailjs: EmailJsConfig {
                service_id: require("EMAILJS_SERVICE_ID")?,
                template_id: require("EMAILJS_TEMPLATE_ID")?,
                public_key: require("EMAILJS_PUBLIC_KEY")?,
                private_key: lookup("EMAILJS_PRIVATE_KEY").filter(|v| !v.trim().is_empty()),
            },
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
