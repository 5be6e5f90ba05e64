//! Invitation delivery through the EmailJS REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::collaborators::{CollaboratorError, Invitation, InvitationTransport};
use crate::config::EmailJsConfig;

const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a Invitation,
}

pub struct EmailJsTransport {
    client: Client,
    config: EmailJsConfig,
}

impl EmailJsTransport {
    pub fn new(config: EmailJsConfig) -> Result<Self, CollaboratorError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, config })
    }

    fn request<'a>(&'a self, invitation: &'a Invitation) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.private_key.as_deref(),
            template_params: invitation,
        }
    }
}

#[async_trait]
impl InvitationTransport for EmailJsTransport {
    async fn deliver(&self, invitation: &Invitation) -> Result<(), CollaboratorError> {
        debug!(to = %invitation.to_email, "Sending invitation via EmailJS");
        let response = self
            .client
            .post(EMAILJS_SEND_URL)
            .json(&self.request(invitation))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CollaboratorError::Status {
                service: "EmailJS",
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(private_key: Option<&str>) -> EmailJsConfig {
        EmailJsConfig {
            service_id: "service_hr".to_string(),
            template_id: "template_invite".to_string(),
            public_key: "pk_123".to_string(),
            private_key: private_key.map(str::to_string),
        }
    }

    fn invitation() -> Invitation {
        Invitation {
            to_name: "Ada Lovelace".to_string(),
            to_email: "ada@example.com".to_string(),
            message: "We'd like to invite you to interview.".to_string(),
        }
    }

    #[test]
    fn test_request_carries_template_params() {
        let transport = EmailJsTransport::new(config(None)).unwrap();
        let invitation = invitation();
        let json = serde_json::to_value(transport.request(&invitation)).unwrap();
        assert_eq!(json["service_id"], "service_hr");
        assert_eq!(json["template_id"], "template_invite");
        assert_eq!(json["user_id"], "pk_123");
        assert_eq!(json["template_params"]["to_name"], "Ada Lovelace");
        assert_eq!(json["template_params"]["to_email"], "ada@example.com");
        assert_eq!(
            json["template_params"]["message"],
            "We'd like to invite you to interview."
        );
        assert!(json.get("accessToken").is_none());
    }

    #[test]
    fn test_request_includes_access_token_when_configured() {
        let transport = EmailJsTransport::new(config(Some("priv_456"))).unwrap();
        let invitation = invitation();
        let json = serde_json::to_value(transport.request(&invitation)).unwrap();
        assert_eq!(json["accessToken"], "priv_456");
    }
}
