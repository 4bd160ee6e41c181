//! Synapse admin registration HTTP client.

use crate::error::SynapseError;
use crate::mac::register_mac;
use crate::types::*;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Registration endpoint, shared by the nonce fetch and the submit.
const REGISTER_PATH: &str = "/_synapse/admin/v1/register";

/// Client for the Synapse shared-secret registration API.
///
/// The shared secret is stored using `SecretString` to prevent
/// accidental exposure in logs or debug output. It is only ever used
/// as the MAC key and never transmitted.
#[derive(Clone)]
pub struct SynapseAdminClient {
    client: Client,
    base_url: String,
    secret: SecretString,
}

impl SynapseAdminClient {
    /// Create a new client for the homeserver at `base_url`.
    ///
    /// `timeout` bounds each of the two network calls; a timed-out
    /// call surfaces as `SynapseError::Transport`.
    pub fn new(
        base_url: impl Into<String>,
        secret: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SynapseError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            secret: SecretString::new(secret.into()),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, REGISTER_PATH)
    }

    /// Fetch a single-use registration nonce from the homeserver.
    #[instrument(skip(self))]
    pub async fn fetch_nonce(&self) -> Result<String, SynapseError> {
        let response = self.client.get(self.endpoint()).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(status = %status, "nonce fetch rejected");
            return Err(SynapseError::Protocol(body));
        }

        let nonce: NonceResponse = serde_json::from_str(&body)?;
        debug!("got registration nonce");
        Ok(nonce.nonce)
    }

    /// Submit a signed registration request.
    ///
    /// Returns the raw response body on 200; the caller decodes it.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn submit(&self, request: &RegisterRequest) -> Result<String, SynapseError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(status = %status, "registration rejected");
            return Err(SynapseError::Protocol(body));
        }

        Ok(body)
    }

    /// Register a user: fetch nonce, compute MAC, submit, decode.
    ///
    /// Strictly sequential; the first failing step aborts the run and
    /// no later step executes. There are no retries — nonces are
    /// single-use, so a retry must start over with a fresh call.
    #[instrument(skip(self, user), fields(username = %user.username, admin = user.admin))]
    pub async fn register(&self, user: &NewUser) -> Result<RegisterResponse, SynapseError> {
        let nonce = self.fetch_nonce().await?;

        let mac = register_mac(
            self.secret.expose_secret().as_bytes(),
            &nonce,
            &user.username,
            &user.password,
            user.admin,
        );

        let request = RegisterRequest {
            nonce,
            username: user.username.clone(),
            displayname: user.displayname.clone(),
            password: user.password.clone(),
            admin: user.admin,
            mac,
        };

        let body = self.submit(&request).await?;
        let decoded: RegisterResponse = serde_json::from_str(&body)?;
        debug!(user_id = %decoded.user_id, "registration succeeded");
        Ok(decoded)
    }
}
