use aliri_braid::braid;
use serde_json::{Map, Value};

use super::string_claim;
use crate::error::DecodeError;

/// The identifier of the key used to sign a token
#[braid(serde, ref_doc = "A borrowed reference to a [`KeyId`]")]
pub struct KeyId;

/// The decoded claims of a token header
///
/// **WARNING:** _Until the token has been verified, nothing here should be
/// trusted._ In particular, the `alg` header is only ever compared against
/// the algorithm the verifier expects, never used to choose one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Headers {
    alg: Option<String>,
    typ: Option<String>,
    cty: Option<String>,
    kid: Option<KeyId>,
    map: Map<String, Value>,
}

impl Headers {
    pub(crate) fn from_map(map: Map<String, Value>) -> Result<Self, DecodeError> {
        Ok(Self {
            alg: string_claim(&map, "alg")?.map(str::to_owned),
            typ: string_claim(&map, "typ")?.map(str::to_owned),
            cty: string_claim(&map, "cty")?.map(str::to_owned),
            kid: string_claim(&map, "kid")?.map(KeyId::from),
            map,
        })
    }

    /// Algorithm (`alg`), exactly as declared
    #[must_use]
    pub fn alg(&self) -> Option<&str> {
        self.alg.as_deref()
    }

    /// Media type of the token (`typ`)
    #[must_use]
    pub fn typ(&self) -> Option<&str> {
        self.typ.as_deref()
    }

    /// Content type of the payload (`cty`)
    #[must_use]
    pub fn cty(&self) -> Option<&str> {
        self.cty.as_deref()
    }

    /// Key ID (`kid`)
    #[must_use]
    pub fn kid(&self) -> Option<&KeyIdRef> {
        self.kid.as_deref()
    }

    /// Looks up any header claim by name
    #[must_use]
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.map.get(name)
    }

    /// All header claims, as decoded
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.map
    }
}
