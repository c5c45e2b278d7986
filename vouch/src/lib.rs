//! This crate decodes and verifies compact, HMAC-signed JSON Web Tokens,
//! following the JavaScript/JSON Object Signing and Encryption (JOSE)
//! standards:
//!
//! * JSON Web Signature (JWS): [RFC7515][]
//! * JSON Web Algorithms (JWA): [RFC7518][]
//! * JSON Web Token (JWT): [RFC7519][]
//!
//! Only the `HS256`, `HS384`, and `HS512` algorithms are supported. The
//! algorithm is always chosen by the caller and must match the token
//! header exactly. Unsigned tokens are never accepted.
//!
//! [RFC7515]: https://tools.ietf.org/html/rfc7515
//! [RFC7518]: https://tools.ietf.org/html/rfc7518
//! [RFC7519]: https://tools.ietf.org/html/rfc7519
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! let token = concat!(
//!     "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.",
//!     "eyJuYW1lIjoidmFsdWUifQ.",
//!     "Jki8pvw6KGbxpMinufrgo6RDL1cu7AtNMJYVh6t-_cE"
//! );
//!
//! let verified = vouch::verify(token, "HS256", b"secret", HashMap::<&str, &str>::new())
//!     .expect("token was invalid");
//!
//! assert_eq!(verified.headers().typ(), Some("JWT"));
//! assert_eq!(verified.claims().claim("name").unwrap(), "value");
//!
//! let err = vouch::verify(token, "HS256", b"wrong-secret", HashMap::<&str, &str>::new())
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "signature mismatch");
//! ```
//!
//! For repeated verification under the same policy, build a
//! [`CoreValidator`][jwt::CoreValidator] once and reuse it.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_imports,
    unused_qualifications
)]
#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_must_use
)]

pub mod error;
pub mod jwa;
pub mod jws;
pub mod jwt;


#[doc(inline)]
pub use error::VerifyError;
#[doc(inline)]
pub use jwt::{Jwt, JwtRef, Token};

/// Decodes and verifies a compact token in one call
///
/// `algorithm` is compared verbatim against the `alg` header before the
/// signature is checked. Each `(name, value)` in `expected_claims` must
/// match the token's claim exactly. Only `jti` and `sub` are checked, and
/// other names are ignored.
///
/// # Errors
///
/// Returns a [`DecodeError`][error::DecodeError] if the token is
/// structurally invalid, otherwise a
/// [`VerificationError`][error::VerificationError] if it is rejected.
pub fn verify<'a, I, K, V>(
    token: &'a str,
    algorithm: &str,
    secret: &[u8],
    expected_claims: I,
) -> Result<Token<'a>, VerifyError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    jwt::CoreValidator::new(algorithm)
        .extend_required_claims(expected_claims)
        .verify(JwtRef::from_str(token), secret)
}
