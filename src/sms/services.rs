use anyhow::Context;
use tracing::{info, warn};

use super::client::SentSms;
use super::repo::{insert_sms_log, SmsKind};
use crate::state::AppState;

/// Sends one SMS and records it in the outbound log.
///
/// A send failure is returned as-is. A failed log write after a successful
/// send is only warned about.
pub async fn send_and_log(
    st: &AppState,
    to: &str,
    body: &str,
    kind: SmsKind,
) -> anyhow::Result<SentSms> {
    let sent = st
        .sms
        .send(to, body)
        .await
        .with_context(|| format!("send {} sms", kind.as_str()))?;
    info!(to, sid = %sent.sid, kind = kind.as_str(), "sms sent");

    if let Err(e) = insert_sms_log(&st.db, to, body, &sent.sid, &sent.status, kind).await {
        warn!(error = %e, sid = %sent.sid, "sms sent but not logged");
    }
    Ok(sent)
}

#[cfg(test)]
mod send_and_log_tests {
    use super::*;
    use crate::state::fake::FakeSms;
    use std::sync::Arc;

    #[tokio::test]
    async fn message_reaches_client_even_when_log_write_fails() {
        let sms = Arc::new(FakeSms::default());
        let st = AppState::fake_with_sms(sms.clone());

        let sent = send_and_log(&st, "+250780000001", "Logged: beans (1C)", SmsKind::Confirmation)
            .await
            .unwrap();

        assert_eq!(sent.sid, "SMfake1");
        let recorded = sms.sent.lock().unwrap();
        assert_eq!(
            *recorded,
            vec![("+250780000001".to_string(), "Logged: beans (1C)".to_string())]
        );
    }
}
