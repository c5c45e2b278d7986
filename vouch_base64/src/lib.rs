//! URL-safe base64 buffers for compact token segments
//!
//! Every segment of a compact token is written in the URL-safe base64
//! alphabet without padding. [`Base64Url`] holds the _decoded_ bytes of such
//! a segment and only pays the cost of encoding when it is formatted.
//!
//! The underlying encoding/decoding mechanism is provided by the [`base64`][]
//! crate.
//!
//!   [`base64`]: https://docs.rs/base64
//!
//! Decoding is strict: padding characters, characters outside of the URL-safe
//! alphabet, and non-canonical trailing bits are all rejected.
//!
//! # Example
//!
//! ```
//! use vouch_base64::Base64Url;
//!
//! let data = Base64Url::from_encoded("eyJuYW1lIjoidmFsdWUifQ").unwrap();
//! assert_eq!(data.as_slice(), br#"{"name":"value"}"#);
//! assert_eq!(data.to_string(), "eyJuYW1lIjoidmFsdWUifQ");
//! assert_eq!(format!("{:?}", data), "`eyJuYW1lIjoidmFsdWUifQ`");
//! ```

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
    unused_must_use
)]
#![forbid(unsafe_code)]

use std::{error::Error, fmt};

use base64::engine::{general_purpose::URL_SAFE_NO_PAD, Engine};

/// An error while decoding a value which is not properly formatted
/// base64 data
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidBase64Data {
    source: base64::DecodeError,
}

impl From<base64::DecodeError> for InvalidBase64Data {
    fn from(err: base64::DecodeError) -> Self {
        Self { source: err }
    }
}

impl fmt::Display for InvalidBase64Data {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("invalid base64url data")
    }
}

impl Error for InvalidBase64Data {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Owned data to be encoded as URL-safe base64 (no padding)
///
/// Encoding alphabet: `A`–`Z`, `a`–`z`, `0`–`9`, `-`, `_`
///
/// Data is held in memory in its raw form. Implementations of [`From`]
/// assume that the value given is already raw.
#[derive(Clone, Default, Eq, PartialEq, Hash)]
#[repr(transparent)]
#[must_use]
pub struct Base64Url(Vec<u8>);

impl Base64Url {
    /// Creates a new buffer from raw bytes
    ///
    /// To decode a base64url-encoded value, use [`from_encoded()`][Self::from_encoded()].
    #[inline]
    pub fn from_raw<T: Into<Vec<u8>>>(raw: T) -> Self {
        Self(raw.into())
    }

    /// Decodes a base64url-encoded value into a new owned buffer
    ///
    /// An empty input decodes to an empty buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not canonical, unpadded, URL-safe base64.
    pub fn from_encoded<T: AsRef<[u8]>>(enc: T) -> Result<Self, InvalidBase64Data> {
        let data = URL_SAFE_NO_PAD.decode(enc)?;
        Ok(Self(data))
    }

    /// Provides access to the underlying bytes
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Unwraps the underlying buffer
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }

    /// The number of raw bytes held
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the buffer is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Calculates the length of the unpadded encoding for a buffer of size `len`
    #[inline]
    #[must_use]
    pub const fn calc_encoded_len(len: usize) -> usize {
        let d = len / 3 * 4;
        let m = len % 3;
        if m > 0 {
            d + m + 1
        } else {
            d
        }
    }

    /// The length of the unpadded encoding of this buffer
    #[inline]
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        Self::calc_encoded_len(self.0.len())
    }
}

impl From<Vec<u8>> for Base64Url {
    #[inline]
    fn from(buf: Vec<u8>) -> Self {
        Self(buf)
    }
}

impl From<&'_ [u8]> for Base64Url {
    #[inline]
    fn from(slice: &[u8]) -> Self {
        Self::from_raw(slice)
    }
}

impl From<Base64Url> for Vec<u8> {
    #[inline]
    fn from(val: Base64Url) -> Self {
        val.0
    }
}

impl AsRef<[u8]> for Base64Url {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Base64Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&URL_SAFE_NO_PAD.encode(&self.0))
    }
}

impl fmt::Debug for Base64Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "`{}`", URL_SAFE_NO_PAD.encode(&self.0))
    }
}
