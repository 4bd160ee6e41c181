//! Registration MAC computation.
//!
//! Synapse authenticates shared-secret registrations with an HMAC-SHA1
//! over `nonce NUL username NUL password NUL adminLiteral`, keyed by
//! the registration shared secret. The admin literal is the ASCII text
//! `admin` or `notadmin` with no trailing separator, and the display
//! name is deliberately absent from the input.
//!
//! See: https://element-hq.github.io/synapse/latest/admin_api/register_api.html

use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Compute the lower-case hex MAC for a registration request.
///
/// Pure function of its arguments; identical inputs always produce an
/// identical digest.
pub fn register_mac(
    secret: &[u8],
    nonce: &str,
    username: &str,
    password: &str,
    admin: bool,
) -> String {
    let mut mac = HmacSha1::new_from_slice(secret).expect("HMAC accepts arbitrary key lengths");
    mac.update(nonce.as_bytes());
    mac.update(b"\x00");
    mac.update(username.as_bytes());
    mac.update(b"\x00");
    mac.update(password.as_bytes());
    mac.update(b"\x00");
    mac.update(if admin { b"admin".as_ref() } else { b"notadmin".as_ref() });
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference digests computed with an independent HMAC-SHA1
    // implementation over the exact byte sequences noted below.

    #[test]
    fn matches_reference_vector() {
        // key = "s3cr3t", input = "abc123\0alice\0hunter2\0notadmin"
        let mac = register_mac(b"s3cr3t", "abc123", "alice", "hunter2", false);
        assert_eq!(mac, "755ad5fb18e2a39a9c4aea0d25d3807583aeebc1");
    }

    #[test]
    fn admin_literal_changes_digest() {
        // key = "s3cr3t", input = "abc123\0alice\0hunter2\0admin"
        let mac = register_mac(b"s3cr3t", "abc123", "alice", "hunter2", true);
        assert_eq!(mac, "188ade862da1b6eac395c73ff24ab4bbb5823964");
        assert_ne!(
            mac,
            register_mac(b"s3cr3t", "abc123", "alice", "hunter2", false)
        );
    }

    #[test]
    fn deterministic() {
        let a = register_mac(b"k", "n1", "bob", "pw", false);
        let b = register_mac(b"k", "n1", "bob", "pw", false);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_secret_is_accepted() {
        // key = "", input = "n\0u\0p\0notadmin"
        let mac = register_mac(b"", "n", "u", "p", false);
        assert_eq!(mac, "291749f7a45c6280d6a33523593d2c0ba769e520");
    }

    #[test]
    fn output_is_lowercase_hex() {
        let mac = register_mac(b"k", "n1", "bob", "pw", false);
        assert_eq!(mac.len(), 40);
        assert!(mac.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
