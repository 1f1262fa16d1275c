//! Payment signature computation and verification.
//!
//! The gateway signs each successful checkout with
//! `HMAC-SHA256(key_secret, order_id + "|" + payment_id)`, hex-encoded.
//! Verification recomputes the signature and compares in constant time.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Computes the expected payment signature, hex-encoded (lowercase).
pub fn compute_signature(secret: &str, order_id: &str, payment_id: &str) -> String {
    let payload = format!("{}|{}", order_id, payment_id);
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Verifies a gateway-supplied signature against the expected value.
///
/// The comparison is exact (case-sensitive hex) and constant-time to
/// prevent timing attacks from leaking the expected signature.
pub fn verify_signature(secret: &str, order_id: &str, payment_id: &str, provided: &str) -> bool {
    let expected = compute_signature(secret, order_id, payment_id);
    constant_time_compare(expected.as_bytes(), provided.as_bytes())
}

/// Performs constant-time comparison of two byte slices.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
