use std::fmt;

use super::{Claims, Decomposed, Headers, JwtRef, Token};
use crate::{
    error::{VerificationError, VerifyError},
    jwa::{Algorithm, Hmac},
    jws::Verifier,
};

/// A payload claim that can be required to hold an exact value
///
/// Each variant maps to its wire name and to the typed accessor on
/// [`Claims`] that supplies the value to compare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegisteredClaim {
    /// Token identifier (`jti`)
    JwtId,
    /// Subject (`sub`)
    Subject,
}

impl RegisteredClaim {
    /// Every enforceable claim
    pub const ALL: [RegisteredClaim; 2] = [Self::JwtId, Self::Subject];

    /// The wire name of the claim
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::JwtId => "jti",
            Self::Subject => "sub",
        }
    }

    /// Looks up the claim registered under `name`
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    fn value_in(self, claims: &Claims) -> Option<&str> {
        match self {
            Self::JwtId => claims.jti().map(|v| v.as_str()),
            Self::Subject => claims.sub().map(|v| v.as_str()),
        }
    }
}

impl fmt::Display for RegisteredClaim {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, PartialEq, Eq)]
struct RequiredClaim {
    claim: RegisteredClaim,
    value: String,
}

/// Verification policy for compact HMAC-signed tokens
///
/// The validator holds the algorithm to enforce and the claim values to
/// require. The secret is supplied separately to each call to
/// [`verify()`][Self::verify()] and is never retained.
///
/// Expiration and not-before claims are decoded but **not** enforced, and
/// there is no opt-in for unsigned (`none`) tokens. Applications needing
/// temporal checks should apply them to [`Claims::exp()`] and
/// [`Claims::nbf()`] after verification.
///
/// ```
/// use vouch::jwt::{CoreValidator, JwtRef};
///
/// let validator = CoreValidator::new("HS256").require_claim("sub", "1234567890");
///
/// let token = JwtRef::from_str(concat!(
///     "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.",
///     "eyJuYW1lIjoidmFsdWUifQ.",
///     "Jki8pvw6KGbxpMinufrgo6RDL1cu7AtNMJYVh6t-_cE",
/// ));
///
/// let err = validator.verify(token, b"secret").unwrap_err();
/// assert_eq!(err.to_string(), "claim 'sub' does not match the required value");
/// ```
#[derive(Clone, PartialEq, Eq)]
#[must_use]
pub struct CoreValidator {
    algorithm: String,
    required: Vec<RequiredClaim>,
}

impl fmt::Debug for CoreValidator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let claims: Vec<&'static str> = self.required.iter().map(|r| r.claim.name()).collect();
        f.debug_struct("CoreValidator")
            .field("algorithm", &self.algorithm)
            .field("required_claims", &claims)
            .finish()
    }
}

impl CoreValidator {
    /// A validator enforcing the given algorithm, e.g. `"HS256"`
    ///
    /// The name is compared verbatim against the token's `alg` header.
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            required: Vec::new(),
        }
    }

    /// The algorithm this validator enforces
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Requires that the claim `name` carries exactly `value`
    ///
    /// Names without a registered validator are ignored.
    pub fn require_claim(self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        let name = name.as_ref();
        let mut this = self;
        if let Some(claim) = RegisteredClaim::from_name(name) {
            this.required.push(RequiredClaim {
                claim,
                value: value.into(),
            });
        } else {
            tracing::trace!(claim = name, "no validator registered for claim, ignoring");
        }
        this
    }

    /// Requires each `(name, value)` pair, as by [`require_claim()`][Self::require_claim()]
    pub fn extend_required_claims<I, K, V>(self, claims: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        claims
            .into_iter()
            .fold(self, |this, (name, value)| {
                this.require_claim(name, value.as_ref())
            })
    }

    /// Decodes and verifies a token under this policy
    ///
    /// # Errors
    ///
    /// Returns the first failure: a decode error if the token is malformed,
    /// otherwise a verification error from the algorithm, signature, or
    /// claim checks, in that order.
    pub fn verify<'a>(&self, token: &'a JwtRef, secret: &[u8]) -> Result<Token<'a>, VerifyError> {
        let decomposed = token.decompose().map_err(|err| {
            tracing::debug!(error = %err, "token rejected: malformed");
            err
        })?;

        Ok(decomposed.verify(self, secret)?)
    }

    pub(crate) fn validate<'a>(
        &self,
        decomposed: Decomposed<'a>,
        secret: &[u8],
    ) -> Result<Token<'a>, VerificationError> {
        self.check_algorithm(&decomposed.headers)?;

        let alg: Algorithm = self.algorithm.parse()?;

        Hmac::new(secret).verify(
            alg,
            decomposed.segments.header,
            decomposed.segments.payload,
            decomposed.signature.as_slice(),
        )?;
        tracing::trace!(%alg, "signature verified");

        self.check_claims(&decomposed.claims)?;

        Ok(Token::from_parts(decomposed))
    }

    fn check_algorithm(&self, headers: &Headers) -> Result<(), VerificationError> {
        match headers.alg() {
            Some(actual) if actual == self.algorithm => {
                tracing::trace!(alg = actual, "algorithm matched");
                Ok(())
            }
            actual => Err(VerificationError::AlgorithmMismatch {
                expected: self.algorithm.clone(),
                actual: actual.map(str::to_owned),
            }),
        }
    }

    fn check_claims(&self, claims: &Claims) -> Result<(), VerificationError> {
        for required in &self.required {
            let claim = required.claim;
            if claim.value_in(claims) != Some(required.value.as_str()) {
                return Err(VerificationError::InvalidClaim { name: claim.name() });
            }
            tracing::trace!(%claim, "claim matched");
        }

        Ok(())
    }
}
