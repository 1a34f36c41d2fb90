use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
    pub api_base: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub twilio: TwilioConfig,
    pub food_nutrition_path: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").context("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "nutritrack".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "nutritrack-hcw".into()),
        };
        // startup fails without SMS credentials
        let twilio = TwilioConfig {
            account_sid: std::env::var("TWILIO_ACCOUNT_SID").context("TWILIO_ACCOUNT_SID")?,
            auth_token: std::env::var("TWILIO_AUTH_TOKEN").context("TWILIO_AUTH_TOKEN")?,
            from_number: std::env::var("TWILIO_PHONE_NUMBER").context("TWILIO_PHONE_NUMBER")?,
            api_base: std::env::var("TWILIO_API_BASE")
                .unwrap_or_else(|_| "https://api.twilio.com".into()),
        };
        let food_nutrition_path = std::env::var("FOOD_NUTRITION_PATH")
            .unwrap_or_else(|_| "data/food_nutrition.json".into());
        Ok(Self {
            database_url,
            jwt,
            twilio,
            food_nutrition_path,
        })
    }
}
