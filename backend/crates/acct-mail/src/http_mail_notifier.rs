use crate::{MailError, MailErrorResult, build_verification_message};

use acct_config::MailConfig;
use acct_core::{Notifier, Result as CoreErrorResult};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use reqwest::Client as ReqwestClient;
use serde::Serialize;

const API_KEY_HEADER: &str = "api-key";

#[derive(Debug, Serialize)]
struct Contact<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendRequest<'a> {
    sender: Contact<'a>,
    to: Vec<Contact<'a>>,
    subject: &'a str,
    text_content: &'a str,
}

/// Sends verification mail through a transactional-mail HTTP API
pub struct HttpMailNotifier {
    api_url: String,
    api_key: String,
    sender_email: String,
    sender_name: String,
    verify_base_url: String,
    client: ReqwestClient,
}

impl HttpMailNotifier {
    pub fn new(
        api_url: &str,
        api_key: &str,
        sender_email: &str,
        sender_name: &str,
        verify_base_url: &str,
        timeout: Duration,
    ) -> MailErrorResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
            sender_email: sender_email.to_string(),
            sender_name: sender_name.to_string(),
            verify_base_url: verify_base_url.to_string(),
            client,
        })
    }

    pub fn from_config(config: &MailConfig) -> MailErrorResult<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| MailError::config("mail.api_key is not set"))?;
        let sender_email = config
            .sender_email
            .as_deref()
            .ok_or_else(|| MailError::config("mail.sender_email is not set"))?;

        Self::new(
            &config.api_url,
            api_key,
            sender_email,
            &config.sender_name,
            &config.verify_base_url,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Post one verification mail; any non-2xx answer is an error
    pub async fn deliver(
        &self,
        recipient_email: &str,
        certification_code: &str,
        account_id: i64,
    ) -> MailErrorResult<()> {
        let message =
            build_verification_message(&self.verify_base_url, account_id, certification_code);

        let body = SendRequest {
            sender: Contact {
                email: &self.sender_email,
                name: Some(&self.sender_name),
            },
            to: vec![Contact {
                email: recipient_email,
                name: None,
            }],
            subject: &message.subject,
            text_content: &message.body,
        };

        let response = self
            .client
            .post(&self.api_url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        log::debug!("Verification mail accepted for account {}", account_id);
        Ok(())
    }
}

#[async_trait]
impl Notifier for HttpMailNotifier {
    async fn send(
        &self,
        recipient_email: &str,
        certification_code: &str,
        account_id: i64,
    ) -> CoreErrorResult<()> {
        Ok(self
            .deliver(recipient_email, certification_code, account_id)
            .await?)
    }
}
