use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rsa::{
    pkcs1::DecodeRsaPublicKey,
    pkcs8::{DecodePublicKey, EncodePublicKey},
    RsaPublicKey,
};

use crate::{IssueError, KeyDecodingError};

/// Decodes base64 text, ignoring ASCII whitespace left behind by line-wrapped encoders.
pub(crate) fn decode_base64(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    if text.bytes().any(|b| b.is_ascii_whitespace()) {
        let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        BASE64.decode(compact)
    } else {
        BASE64.decode(text)
    }
}

pub(crate) fn encode_base64(bytes: impl AsRef<[u8]>) -> String {
    BASE64.encode(bytes)
}

/// Decodes a base64 DER RSA public key.
///
/// A `SubjectPublicKeyInfo` is tried first, then a bare PKCS#1 `RSAPublicKey`.
/// Moduli longer than 4096 bits are rejected as [`KeyDecodingError::Der`].
pub fn decode_public_key(encoded: &str) -> Result<RsaPublicKey, KeyDecodingError> {
    let der = decode_base64(encoded)?;
    match RsaPublicKey::from_public_key_der(&der) {
        Ok(key) => Ok(key),
        Err(spki_err) => RsaPublicKey::from_pkcs1_der(&der).map_err(|_| spki_err.into()),
    }
}

/// Encodes a public key as base64 `SubjectPublicKeyInfo` DER.
pub fn encode_public_key(key: &RsaPublicKey) -> Result<String, IssueError> {
    let der = key.to_public_key_der()?;
    Ok(encode_base64(der.as_bytes()))
}
