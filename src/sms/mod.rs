pub mod client;
mod handlers;
pub mod repo;
pub mod repo_types;
pub mod services;

pub use client::{SentSms, SmsClient, TwilioSms};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::sms_log_routes()
}
