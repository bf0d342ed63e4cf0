//! This crate verifies the RSA-SHA256 signature carried inside a scanned QR document payload.
//!
//! A payload is a JSON object holding a document id, a hash string, a base64
//! PKCS#1 v1.5 signature over that string, and the signer's base64 DER public
//! key. [`SignatureValidator`] checks the signature; [`scan`] wraps it in the
//! one-scan-at-a-time flow a camera host drives; [`issuer`] produces payloads.

mod error;
pub mod issuer;
mod key;
mod payload;
pub mod scan;
mod validator;
mod verdict;

pub use error::{IssueError, KeyDecodingError, PayloadError, ValidationError};
pub use key::{decode_public_key, encode_public_key};
pub use payload::{PayloadOptions, QrPayload, RequiredFields, DEFAULT_MAX_SCAN_BYTES};
pub use validator::SignatureValidator;
pub use verdict::{Verdict, Verification, ERROR_MESSAGE, INVALID_MESSAGE, VALID_MESSAGE};

#[cfg(test)]
mod tests;
