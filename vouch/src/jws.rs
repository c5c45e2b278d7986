//! JSON Web Signature (JWS) verification
//!
//! The specifications for this standard can be found in [RFC7515][].
//!
//! [RFC7515]: https://tools.ietf.org/html/rfc7515
//!
//! A JWS signing input is the _encoded_ header segment, a `.`, and the
//! _encoded_ payload segment, exactly as they appear on the wire.

use std::error::Error as StdError;

use subtle::{Choice, ConstantTimeEq};

/// The separator between segments of a compact token
pub const SEPARATOR: u8 = b'.';

/// A JWS verifier
pub trait Verifier {
    /// The verifiable signature algorithms
    type Algorithm;

    /// The error returned on a failure to verify
    type Error: StdError + Send + Sync + 'static;

    /// Attempts to verify the signature over the encoded header and payload
    /// segments using the specified algorithm
    fn verify(
        &self,
        alg: Self::Algorithm,
        header: &str,
        payload: &str,
        signature: &[u8],
    ) -> Result<(), Self::Error>;
}

/// Compares two byte strings without revealing where they differ
///
/// Every byte position up to the length of the longer input is compared,
/// and the length comparison is folded into the same result. The running
/// time depends only on the lengths of the inputs.
///
/// ```
/// use vouch::jws::constant_time_eq;
///
/// assert!(constant_time_eq(b"signature", b"signature"));
/// assert!(!constant_time_eq(b"signature", b"signaturf"));
/// assert!(!constant_time_eq(b"signature", b"sig"));
/// ```
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    let len = a.len().max(b.len());
    let mut equal: Choice = a.len().ct_eq(&b.len());

    for i in 0..len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        equal &= x.ct_eq(&y);
    }

    equal.into()
}
