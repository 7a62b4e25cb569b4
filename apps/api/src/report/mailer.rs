//! Report sharing over an HTTP e-mail delivery API.
//!
//! The delivery provider is a Resend-style JSON endpoint: bearer-auth POST
//! with from/to/subject/html plus base64 attachments. Sharing is optional;
//! when the provider settings are absent the mailer is simply not built.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::Client;
use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::errors::AppError;

const ATTACHMENT_NAME: &str = "career-analysis.pdf";

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
    attachments: Vec<Attachment<'a>>,
}

#[derive(Debug, Serialize)]
struct Attachment<'a> {
    filename: &'a str,
    content: String,
}

/// Sends analysis reports by e-mail through the configured delivery API.
#[derive(Clone)]
pub struct Mailer {
    client: Client,
    api_url: String,
    api_key: String,
    from: String,
}

impl Mailer {
    /// Builds a mailer when all delivery settings are configured.
    pub fn from_config(config: &Config) -> Option<Mailer> {
        let (api_url, api_key, from) = match (
            &config.email_api_url,
            &config.email_api_key,
            &config.email_from,
        ) {
            (Some(url), Some(key), Some(from)) => (url.clone(), key.clone(), from.clone()),
            _ => return None,
        };

        Some(Mailer {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_url,
            api_key,
            from,
        })
    }

    /// Sends the report PDF to `recipient` with an HTML summary body.
    pub async fn send_report(
        &self,
        recipient: &str,
        subject: &str,
        html_body: &str,
        pdf_bytes: &[u8],
    ) -> Result<(), AppError> {
        let request = SendEmailRequest {
            from: &self.from,
            to: vec![recipient],
            subject,
            html: html_body,
            attachments: vec![Attachment {
                filename: ATTACHMENT_NAME,
                content: BASE64.encode(pdf_bytes),
            }],
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Email(format!("Delivery request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Email(format!(
                "Delivery API returned {status}: {body}"
            )));
        }

        info!("Report shared with {recipient}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            gemini_api_key: "key".into(),
            email_api_url: Some("https://api.example.com/emails".into()),
            email_api_key: Some("secret".into()),
            email_from: Some("PathLens <reports@example.com>".into()),
            port: 8080,
            rust_log: "info".into(),
        }
    }

    #[test]
    fn test_mailer_built_when_fully_configured() {
        assert!(Mailer::from_config(&base_config()).is_some());
    }

    #[test]
    fn test_mailer_absent_when_any_setting_missing() {
        let mut config = base_config();
        config.email_api_key = None;
        assert!(Mailer::from_config(&config).is_none());

        let mut config = base_config();
        config.email_from = None;
        assert!(Mailer::from_config(&config).is_none());
    }

    #[test]
    fn test_send_request_serializes_attachment_as_base64() {
        let request = SendEmailRequest {
            from: "a@example.com",
            to: vec!["b@example.com"],
            subject: "Your report",
            html: "<p>hi</p>",
            attachments: vec![Attachment {
                filename: ATTACHMENT_NAME,
                content: BASE64.encode(b"%PDF-fake"),
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["to"][0], "b@example.com");
        assert_eq!(json["attachments"][0]["filename"], "career-analysis.pdf");
        assert_eq!(
            json["attachments"][0]["content"],
            BASE64.encode(b"%PDF-fake")
        );
    }
}
