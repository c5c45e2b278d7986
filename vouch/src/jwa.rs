//! JSON Web Algorithms (JWA) supported for verification
//!
//! The specifications for these algorithms can be found in [RFC7518][].
//! Only the HMAC family is supported.
//!
//! [RFC7518]: https://tools.ietf.org/html/rfc7518

pub mod hmac;

mod algorithm;

pub use algorithm::Algorithm;
#[doc(inline)]
pub use hmac::Hmac;
