use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::TwilioConfig;

/// Delivery receipt returned by the SMS provider.
#[derive(Debug, Clone, Deserialize)]
pub struct SentSms {
    pub sid: String,
    pub status: String,
}

#[async_trait]
pub trait SmsClient: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> anyhow::Result<SentSms>;
}

#[derive(Clone)]
pub struct TwilioSms {
    http: reqwest::Client,
    config: TwilioConfig,
}

impl TwilioSms {
    pub fn new(config: TwilioConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .context("build sms http client")?;
        Ok(Self { http, config })
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.config.api_base.trim_end_matches('/'),
            self.config.account_sid
        )
    }
}

#[async_trait]
impl SmsClient for TwilioSms {
    async fn send(&self, to: &str, body: &str) -> anyhow::Result<SentSms> {
        let form = [
            ("To", to),
            ("From", self.config.from_number.as_str()),
            ("Body", body),
        ];
        let resp = self
            .http
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&form)
            .send()
            .await
            .context("twilio send")?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            anyhow::bail!("twilio rejected message ({}): {}", status, text);
        }

        let sent = resp
            .json::<SentSms>()
            .await
            .context("decode twilio response")?;
        debug!(sid = %sent.sid, status = %sent.status, "sms accepted");
        Ok(sent)
    }
}

#[cfg(test)]
mod client_tests {
    use super::*;

    fn config(base: &str) -> TwilioConfig {
        TwilioConfig {
            account_sid: "AC123".into(),
            auth_token: "token".into(),
            from_number: "+15550000000".into(),
            api_base: base.into(),
        }
    }

    #[test]
    fn messages_url_includes_account() {
        let sms = TwilioSms::new(config("https://api.twilio.com")).unwrap();
        assert_eq!(
            sms.messages_url(),
            "https://api.twilio.com/2010-04-01/Accounts/AC123/Messages.json"
        );
    }

    #[test]
    fn messages_url_tolerates_trailing_slash() {
        let sms = TwilioSms::new(config("http://localhost:4010/")).unwrap();
        assert!(sms
            .messages_url()
            .starts_with("http://localhost:4010/2010-04-01/"));
    }

    #[test]
    fn sent_sms_decodes_provider_payload() {
        let raw = r#"{"sid":"SM1","status":"queued","to":"+250780000000"}"#;
        let sent: SentSms = serde_json::from_str(raw).unwrap();
        assert_eq!(sent.sid, "SM1");
        assert_eq!(sent.status, "queued");
    }
}
