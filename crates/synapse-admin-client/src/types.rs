//! Request and response types for the Synapse admin registration API.

use serde::{Deserialize, Serialize};

/// Body of `GET /_synapse/admin/v1/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct NonceResponse {
    pub nonce: String,
}

/// Body of `POST /_synapse/admin/v1/register`.
///
/// Field names match the server schema exactly. `mac` authenticates
/// `nonce`, `username`, `password` and the admin flag; `displayname`
/// is part of the payload but never part of the MAC input.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub nonce: String,
    pub username: String,
    pub displayname: String,
    pub password: String,
    pub admin: bool,
    pub mac: String,
}

/// Credentials returned on successful registration. Surfaced as-is,
/// never validated or mutated by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterResponse {
    pub access_token: String,
    pub user_id: String,
    pub home_server: String,
    pub device_id: String,
}

/// Account details for a single registration attempt.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub displayname: String,
    pub admin: bool,
}
