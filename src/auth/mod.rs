//! Bearer-token verification for health-worker routes. Tokens are issued
//! by the external identity provider; this service only verifies them.

pub mod claims;
pub mod extractors;
