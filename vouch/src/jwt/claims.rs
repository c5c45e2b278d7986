use std::time::{Duration, SystemTime};

use aliri_braid::braid;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::string_claim;
use crate::error::DecodeError;

/// An audience
#[braid(serde, ref_doc = "A borrowed reference to an [`Audience`]")]
pub struct Audience;

/// An issuer of tokens
#[braid(serde, ref_doc = "A borrowed reference to an [`Issuer`]")]
pub struct Issuer;

/// The subject of a token
#[braid(serde, ref_doc = "A borrowed reference to a [`Subject`]")]
pub struct Subject;

/// A unique identifier for a token
#[braid(serde, ref_doc = "A borrowed reference to a [`JwtId`]")]
pub struct JwtId;

/// Unix time
///
/// The number of seconds elapsed since 1970/01/01 at 00:00:00 UTC. Times
/// before the epoch are negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct UnixTime(pub i64);

impl UnixTime {
    /// The equivalent system time, if representable on this platform
    #[must_use]
    pub fn to_system_time(self) -> Option<SystemTime> {
        let offset = Duration::from_secs(self.0.unsigned_abs());
        if self.0 < 0 {
            SystemTime::UNIX_EPOCH.checked_sub(offset)
        } else {
            SystemTime::UNIX_EPOCH.checked_add(offset)
        }
    }
}

impl From<UnixTime> for i64 {
    #[inline]
    fn from(t: UnixTime) -> Self {
        t.0
    }
}

/// A set of zero or more [`Audience`]s
///
/// On the wire the `aud` claim is either a single string or an array of strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "OneOrMany<Audience>")]
#[repr(transparent)]
#[must_use]
pub struct Audiences(Vec<Audience>);

impl Audiences {
    /// An empty audience set
    #[inline]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Indicates whether the audience set is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of audiences in the set
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates through references to the audiences in the set
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &AudienceRef> {
        self.0.iter().map(AsRef::as_ref)
    }

    /// Whether the set contains the given audience
    #[must_use]
    pub fn contains(&self, aud: &AudienceRef) -> bool {
        self.iter().any(|a| a == aud)
    }
}

impl From<OneOrMany<Audience>> for Audiences {
    #[inline]
    fn from(vals: OneOrMany<Audience>) -> Self {
        match vals {
            OneOrMany::One(x) => Self(vec![x]),
            OneOrMany::Many(v) => Self(v),
        }
    }
}

/// A type representing one or more items, primarily for deserialization
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// A single item
    One(T),

    /// Zero or more items, serialized as an array
    Many(Vec<T>),
}

/// The decoded claims of a token payload
///
/// Registered claims are exposed through typed accessors. Every claim,
/// registered or not, remains available through [`claim()`][Self::claim()].
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Claims {
    iss: Option<Issuer>,
    sub: Option<Subject>,
    aud: Audiences,
    exp: Option<UnixTime>,
    nbf: Option<UnixTime>,
    iat: Option<UnixTime>,
    jti: Option<JwtId>,
    map: Map<String, Value>,
}

impl Claims {
    pub(crate) fn from_map(map: Map<String, Value>) -> Result<Self, DecodeError> {
        Ok(Self {
            iss: string_claim(&map, "iss")?.map(Issuer::from),
            sub: string_claim(&map, "sub")?.map(Subject::from),
            aud: audience_claim(&map)?,
            exp: time_claim(&map, "exp")?,
            nbf: time_claim(&map, "nbf")?,
            iat: time_claim(&map, "iat")?,
            jti: string_claim(&map, "jti")?.map(JwtId::from),
            map,
        })
    }

    /// Issuer (`iss`)
    #[must_use]
    pub fn iss(&self) -> Option<&IssuerRef> {
        self.iss.as_deref()
    }

    /// Subject (`sub`)
    #[must_use]
    pub fn sub(&self) -> Option<&SubjectRef> {
        self.sub.as_deref()
    }

    /// Audience (`aud`)
    pub fn aud(&self) -> &Audiences {
        &self.aud
    }

    /// Expiration time (`exp`)
    ///
    /// This value is decoded but never compared against the current time.
    #[must_use]
    pub fn exp(&self) -> Option<UnixTime> {
        self.exp
    }

    /// Not before (`nbf`)
    ///
    /// This value is decoded but never compared against the current time.
    #[must_use]
    pub fn nbf(&self) -> Option<UnixTime> {
        self.nbf
    }

    /// Issued at (`iat`)
    #[must_use]
    pub fn iat(&self) -> Option<UnixTime> {
        self.iat
    }

    /// Token identifier (`jti`)
    #[must_use]
    pub fn jti(&self) -> Option<&JwtIdRef> {
        self.jti.as_deref()
    }

    /// Looks up any claim by name
    #[must_use]
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.map.get(name)
    }

    /// All claims, as decoded
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.map
    }
}

fn audience_claim(map: &Map<String, Value>) -> Result<Audiences, DecodeError> {
    match map.get("aud") {
        None | Some(Value::Null) => Ok(Audiences::empty()),
        Some(value) => {
            Audiences::deserialize(value).map_err(|_| DecodeError::invalid_claim_format("aud"))
        }
    }
}

/// A present time claim must be a base-10 integer, either as a JSON number
/// or as a string of digits
fn time_claim(
    map: &Map<String, Value>,
    claim: &'static str,
) -> Result<Option<UnixTime>, DecodeError> {
    let secs = match map.get(claim) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.parse::<i64>().ok(),
        Some(_) => None,
    };

    secs.map(|secs| Some(UnixTime(secs)))
        .ok_or_else(|| DecodeError::invalid_claim_format(claim))
}
