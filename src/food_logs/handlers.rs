use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Form, Router,
};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use super::repo::insert_food_log;
use super::repo_types::NewFoodLog;
use crate::{
    error::{bad_request, internal},
    nutrition::parser::{parse_food_log, ParsedFoodItem},
    patients::repo_types::Patient,
    sms::{repo::SmsKind, services::send_and_log},
    state::AppState,
};

const EMPTY_TWIML: &str = "<Response></Response>";

/// Provider webhook payload (form-encoded).
#[derive(Debug, Deserialize)]
pub struct InboundSms {
    #[serde(rename = "From")]
    pub from: Option<String>,
    #[serde(rename = "Body")]
    pub body: Option<String>,
}

pub fn webhook_routes() -> Router<AppState> {
    Router::new().route("/incoming-sms", post(incoming_sms))
}

pub(crate) fn confirmation_message(item: Option<&ParsedFoodItem>) -> String {
    match item {
        Some(item) => format!(
            "✅ {} ({}) logged. Thank you!",
            item.food_name.to_uppercase(),
            item.quantity_text
        ),
        None => "⚠️ Sorry, we couldn't understand your message. Try: BEANS 1C".to_string(),
    }
}

#[instrument(skip(state, payload))]
pub async fn incoming_sms(
    State(state): State<AppState>,
    Form(payload): Form<InboundSms>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let (Some(from), Some(body)) = (payload.from, payload.body) else {
        warn!("inbound sms missing From or Body");
        return Err(bad_request("Missing data from Twilio."));
    };
    if from.is_empty() || body.is_empty() {
        warn!("inbound sms with empty From or Body");
        return Err(bad_request("Missing data from Twilio."));
    }

    let parsed = parse_food_log(&body);

    let patient = Patient::find_by_phone(&state.db, &from)
        .await
        .map_err(internal)?;
    match &patient {
        Some(p) => info!(patient_id = %p.id, "food log linked to patient"),
        None => warn!(from = %from, "no matching patient for sender"),
    }

    let log = insert_food_log(
        &state.db,
        NewFoodLog {
            raw_body: &body,
            sender_phone: &from,
            linked_patient_id: patient.as_ref().map(|p| p.id),
            parsed_food: parsed.as_ref().map(|p| p.food_name.as_str()),
            quantity: parsed.as_ref().map(|p| p.quantity_text.as_str()),
        },
    )
    .await
    .map_err(internal)?;
    info!(log_id = %log.id, parsed = parsed.is_some(), "food log stored");

    let reply = confirmation_message(parsed.as_ref());
    if let Err(e) = send_and_log(&state, &from, &reply, SmsKind::Confirmation).await {
        warn!(error = %e, log_id = %log.id, "confirmation sms failed");
    }

    Ok(([(header::CONTENT_TYPE, "text/xml")], EMPTY_TWIML))
}

#[cfg(test)]
mod webhook_tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    #[test]
    fn confirms_parsed_item_with_original_quantity() {
        let item = parse_food_log("BEANS 1C").unwrap();
        assert_eq!(
            confirmation_message(Some(&item)),
            "✅ BEANS (1C) logged. Thank you!"
        );
    }

    #[test]
    fn unparsed_message_gets_usage_hint() {
        let msg = confirmation_message(None);
        assert!(msg.contains("couldn't understand"));
        assert!(msg.ends_with("Try: BEANS 1C"));
    }

    #[tokio::test]
    async fn missing_body_is_rejected_before_storage() {
        let app = crate::app::build_app(AppState::fake());
        let res = app
            .oneshot(
                Request::post("/api/v1/incoming-sms")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("From=%2B250780000000"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
