use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use tracing::{debug, warn};

use super::claims::Claims;
use crate::config::JwtConfig;
use crate::state::AppState;

/// Authenticated health worker; holds the token subject.
#[derive(Debug)]
pub struct AuthWorker(pub String);

pub fn verify_token(cfg: &JwtConfig, token: &str) -> anyhow::Result<Claims> {
    let mut validation = Validation::default();
    validation.set_audience(std::slice::from_ref(&cfg.audience));
    validation.set_issuer(std::slice::from_ref(&cfg.issuer));
    let decoding = DecodingKey::from_secret(cfg.secret.as_bytes());
    let data = decode::<Claims>(token, &decoding, &validation)?;
    Ok(data.claims)
}

#[async_trait]
impl FromRequestParts<AppState> for AuthWorker {
    type Rejection = (StatusCode, String);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or((StatusCode::UNAUTHORIZED, "missing Authorization header".into()))?;

        // Expect "Bearer <token>"
        let token = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
            .ok_or((StatusCode::UNAUTHORIZED, "invalid auth scheme".into()))?;

        let claims = verify_token(&state.config.jwt, token).map_err(|e| {
            warn!(error = %e, "token verification failed");
            (StatusCode::UNAUTHORIZED, "invalid or expired token".into())
        })?;
        debug!(worker_id = %claims.sub, "health worker authenticated");

        Ok(AuthWorker(claims.sub))
    }
}
