//! HMAC JSON Web Algorithm implementation

use std::fmt;

use crate::{error::VerificationError, jwa::Algorithm, jws};

/// HMAC secret, borrowed for the duration of a single verification
///
/// The secret is never copied, retained, or printed.
#[derive(Clone, Copy)]
#[must_use]
pub struct Hmac<'k> {
    secret: &'k [u8],
}

impl fmt::Debug for Hmac<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Hmac { secret }")
    }
}

impl<'k> Hmac<'k> {
    /// HMAC using the provided secret
    pub const fn new(secret: &'k [u8]) -> Self {
        Self { secret }
    }

    /// Computes `MAC(secret, header ‖ '.' ‖ payload)` over the encoded segments
    pub(crate) fn sign(self, alg: Algorithm, header: &str, payload: &str) -> ring::hmac::Tag {
        let key = ring::hmac::Key::new(alg.into_ring_algorithm(), self.secret);
        let mut ctx = ring::hmac::Context::with_key(&key);
        ctx.update(header.as_bytes());
        ctx.update(&[jws::SEPARATOR]);
        ctx.update(payload.as_bytes());
        ctx.sign()
    }

    /// Whether `signature` is the MAC of the encoded header and payload
    ///
    /// The comparison runs in constant time with respect to the contents
    /// of the signature.
    #[must_use]
    pub fn matches(self, alg: Algorithm, header: &str, payload: &str, signature: &[u8]) -> bool {
        let expected = self.sign(alg, header, payload);
        jws::constant_time_eq(expected.as_ref(), signature)
    }
}

impl jws::Verifier for Hmac<'_> {
    type Algorithm = Algorithm;
    type Error = VerificationError;

    fn verify(
        &self,
        alg: Self::Algorithm,
        header: &str,
        payload: &str,
        signature: &[u8],
    ) -> Result<(), Self::Error> {
        if self.matches(alg, header, payload, signature) {
            Ok(())
        } else {
            Err(VerificationError::SignatureInvalid)
        }
    }
}
