use std::time::{Duration, Instant};

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::credentials::ServiceAccount;

const FIRESTORE_SCOPE: &str = "https://www.googleapis.com/auth/datastore";
const ASSERTION_LIFETIME_SECS: i64 = 3600;
const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
/// Refresh this long before the access token actually expires.
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("token.invalid_private_key")]
    InvalidPrivateKey,
    #[error("token.signing_failed")]
    SigningFailed,
    #[error("token.exchange_failed")]
    ExchangeFailed,
    #[error("token.malformed_response")]
    MalformedResponse,
}

#[derive(Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

struct CachedToken {
    access_token: String,
    fetched_at: Instant,
    lifetime: Duration,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        self.fetched_at.elapsed() + REFRESH_MARGIN < self.lifetime
    }
}

/// Exchanges the service-account key for OAuth2 access tokens and caches
/// them until shortly before expiry.
pub struct TokenProvider {
    account: ServiceAccount,
    http: reqwest::Client,
    cache: RwLock<Option<CachedToken>>,
}

impl TokenProvider {
    pub fn new(account: ServiceAccount) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            account,
            http,
            cache: RwLock::new(None),
        }
    }

    /// Returns a valid access token, reusing the cached one when fresh.
    pub async fn access_token(&self) -> Result<String, TokenError> {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref()
                && cached.is_fresh()
            {
                return Ok(cached.access_token.clone());
            }
        }

        let response = self.exchange().await?;
        let access_token = response.access_token.clone();

        {
            let mut cache = self.cache.write().await;
            *cache = Some(CachedToken {
                access_token: response.access_token,
                fetched_at: Instant::now(),
                lifetime: Duration::from_secs(response.expires_in),
            });
        }

        Ok(access_token)
    }

    /// Builds the RS256-signed JWT assertion for the token exchange.
    fn signed_assertion(&self) -> Result<String, TokenError> {
        let key = EncodingKey::from_rsa_pem(self.account.private_key.as_bytes())
            .map_err(|_| TokenError::InvalidPrivateKey)?;

        let now = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &self.account.client_email,
            scope: FIRESTORE_SCOPE,
            aud: &self.account.token_uri,
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };

        encode(&Header::new(Algorithm::RS256), &claims, &key)
            .map_err(|_| TokenError::SigningFailed)
    }

    async fn exchange(&self) -> Result<TokenResponse, TokenError> {
        let assertion = self.signed_assertion()?;

        let response = self
            .http
            .post(&self.account.token_uri)
            .form(&[("grant_type", GRANT_TYPE), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|_| TokenError::ExchangeFailed)?;

        if !response.status().is_success() {
            tracing::warn!("Token exchange rejected: {}", response.status());
            return Err(TokenError::ExchangeFailed);
        }

        response
            .json()
            .await
            .map_err(|_| TokenError::MalformedResponse)
    }
}
