//! Common errors
//!
//! Errors fall into two families. A [`DecodeError`] means the token is
//! structurally invalid and no cryptographic check could run. A
//! [`VerificationError`] means the token was well formed but was rejected
//! by the algorithm check, the signature check, or the expected claims.
//! [`VerifyError`] unifies both for callers of [`verify()`][crate::verify()].
//!
//! No error carries the secret, the computed signature, or a claim value.

#![allow(missing_copy_implementations)]

use std::fmt;

use thiserror::Error;
use vouch_base64::InvalidBase64Data;

/// One of the three segments of a compact token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// The first segment, carrying the header claims
    Header,
    /// The second segment, carrying the payload claims
    Payload,
    /// The third segment, carrying the raw signature
    Signature,
}

impl Segment {
    /// The lowercase name of the segment
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Payload => "payload",
            Self::Signature => "signature",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The token is structurally invalid
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The token did not split into header, payload, and signature
    #[error("token was expected to have 3 parts, but got {part_count}")]
    MalformedToken {
        /// The number of `.`-delimited parts found
        part_count: usize,
    },

    /// A segment is not valid unpadded base64url
    #[error("{segment} segment is not valid base64url")]
    InvalidEncoding {
        /// The offending segment
        segment: Segment,
        /// The underlying codec error
        #[source]
        source: InvalidBase64Data,
    },

    /// The header or payload is not a JSON object
    #[error("{segment} segment is not a JSON object: {message}")]
    InvalidJson {
        /// The offending segment
        segment: Segment,
        /// Category and position of the parse failure
        message: String,
    },

    /// A well-known claim is present but does not have the expected form
    #[error("claim '{claim}' has an invalid format")]
    InvalidClaimFormat {
        /// The name of the claim
        claim: &'static str,
    },
}

impl DecodeError {
    pub(crate) fn invalid_encoding(segment: Segment, source: InvalidBase64Data) -> Self {
        Self::InvalidEncoding { segment, source }
    }

    /// Builds a message from the error category and position only, as
    /// the `Display` of a `serde_json` error may quote input data.
    pub(crate) fn invalid_json(segment: Segment, err: &serde_json::Error) -> Self {
        let category = match err.classify() {
            serde_json::error::Category::Io => "i/o error",
            serde_json::error::Category::Syntax => "syntax error",
            serde_json::error::Category::Data => "expected an object",
            serde_json::error::Category::Eof => "unexpected end of input",
        };

        Self::InvalidJson {
            segment,
            message: format!("{} at line {} column {}", category, err.line(), err.column()),
        }
    }

    pub(crate) const fn invalid_claim_format(claim: &'static str) -> Self {
        Self::InvalidClaimFormat { claim }
    }

    /// The segment at fault, if the error is attributable to one
    #[must_use]
    pub fn segment(&self) -> Option<Segment> {
        match self {
            Self::InvalidEncoding { segment, .. } | Self::InvalidJson { segment, .. } => {
                Some(*segment)
            }
            Self::MalformedToken { .. } | Self::InvalidClaimFormat { .. } => None,
        }
    }
}

/// The token is well formed, but was rejected
#[derive(Debug, Error)]
pub enum VerificationError {
    /// The header declares a different algorithm than the one expected
    #[error("expected algorithm '{expected}', but token declares {}", DeclaredAlg(.actual))]
    AlgorithmMismatch {
        /// The algorithm the verifier enforces
        expected: String,
        /// The algorithm declared in the header, if any
        actual: Option<String>,
    },

    /// The expected algorithm is not a supported HMAC algorithm
    #[error("'{name}' does not match supported algorithms")]
    UnsupportedAlgorithm {
        /// The name of the algorithm
        name: String,
    },

    /// The signature did not match
    #[error("signature mismatch")]
    SignatureInvalid,

    /// An expected claim is missing or has a different value
    #[error("claim '{name}' does not match the required value")]
    InvalidClaim {
        /// The name of the claim
        name: &'static str,
    },
}

impl VerificationError {
    /// Whether the error is due to an algorithm mismatch
    #[must_use]
    pub fn is_algorithm_mismatch(&self) -> bool {
        matches!(self, Self::AlgorithmMismatch { .. })
    }

    /// Whether the error is due to a signature mismatch
    #[must_use]
    pub fn is_signature_invalid(&self) -> bool {
        matches!(self, Self::SignatureInvalid)
    }

    /// Whether the error is due to an expected claim
    #[must_use]
    pub fn is_invalid_claim(&self) -> bool {
        matches!(self, Self::InvalidClaim { .. })
    }
}

struct DeclaredAlg<'a>(&'a Option<String>);

impl fmt::Display for DeclaredAlg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(alg) => write!(f, "'{}'", alg),
            None => f.write_str("no algorithm"),
        }
    }
}

/// An error occurring while verifying a token
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The token is structurally invalid
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The token was rejected
    #[error(transparent)]
    Verification(#[from] VerificationError),
}

impl VerifyError {
    /// Whether the token was structurally invalid
    #[must_use]
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Whether the token was well formed but rejected
    #[must_use]
    pub fn is_verification_error(&self) -> bool {
        matches!(self, Self::Verification(_))
    }

    /// The decode error, if that is the cause
    #[must_use]
    pub fn as_decode_error(&self) -> Option<&DecodeError> {
        match self {
            Self::Decode(err) => Some(err),
            Self::Verification(_) => None,
        }
    }

    /// The verification error, if that is the cause
    #[must_use]
    pub fn as_verification_error(&self) -> Option<&VerificationError> {
        match self {
            Self::Verification(err) => Some(err),
            Self::Decode(_) => None,
        }
    }
}
