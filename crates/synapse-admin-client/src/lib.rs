//! Client for Synapse's shared-secret admin registration API.
//!
//! Registration is a two-phase exchange: fetch a single-use nonce,
//! then POST a request authenticated by an HMAC-SHA1 over the nonce
//! and credentials, keyed by the registration shared secret.

mod client;
mod error;
mod mac;
mod types;

pub use client::SynapseAdminClient;
pub use error::SynapseError;
pub use mac::register_mac;
pub use types::*;
