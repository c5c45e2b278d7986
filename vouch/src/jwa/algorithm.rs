use std::{convert::TryFrom, fmt, str::FromStr};

use crate::error::VerificationError;

/// An HMAC signing algorithm, named by its short form in the `alg` header
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum Algorithm {
    /// HMAC using SHA-256
    HS256,
    /// HMAC using SHA-384
    HS384,
    /// HMAC using SHA-512
    HS512,
}

impl Algorithm {
    /// The short form used in the `alg` header
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HS256 => "HS256",
            Self::HS384 => "HS384",
            Self::HS512 => "HS512",
        }
    }

    /// The size in bytes of a signature produced by this algorithm
    #[must_use]
    pub const fn signature_size(self) -> usize {
        match self {
            Self::HS256 => 256 / 8,
            Self::HS384 => 384 / 8,
            Self::HS512 => 512 / 8,
        }
    }

    pub(crate) fn into_ring_algorithm(self) -> ring::hmac::Algorithm {
        match self {
            Self::HS256 => ring::hmac::HMAC_SHA256,
            Self::HS384 => ring::hmac::HMAC_SHA384,
            Self::HS512 => ring::hmac::HMAC_SHA512,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&'_ str> for Algorithm {
    type Error = VerificationError;

    #[inline]
    fn try_from(value: &'_ str) -> Result<Self, Self::Error> {
        match value {
            "HS256" => Ok(Self::HS256),
            "HS384" => Ok(Self::HS384),
            "HS512" => Ok(Self::HS512),
            _ => Err(VerificationError::UnsupportedAlgorithm {
                name: value.to_owned(),
            }),
        }
    }
}

impl FromStr for Algorithm {
    type Err = VerificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
