use thiserror::Error;

/// Errors raised while validating a [`crate::QrPayload`].
///
/// A signature that simply does not match is not an error; it is reported as
/// [`crate::Verification::Invalid`].
#[derive(Debug, Error)]
pub enum ValidationError {
    // Input Errors
    #[error("Dados do QR Code estão incompletos ou inválidos.")]
    MalformedPayload,

    // Decoding Errors
    #[error("Public key decoding failed")]
    KeyDecoding(#[from] KeyDecodingError),
    #[error("Signature decoding failed")]
    SignatureDecoding(#[source] base64::DecodeError),

    // External Library Errors
    #[error("RSA error")]
    Crypto(#[source] rsa::Error),
}

#[derive(Debug, Error)]
pub enum KeyDecodingError {
    #[error("Invalid base64")]
    Base64(#[from] base64::DecodeError),
    #[error("Not an RSA public key in SPKI or PKCS#1 DER form")]
    Der(#[from] rsa::pkcs8::spki::Error),
}

/// Errors raised by the strict schema step that turns scanned text into a payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("scanned text exceeds {limit} bytes")]
    Oversized { limit: usize },
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown field '{0}'")]
    UnknownField(String),
}

/// Errors raised while producing a signed payload.
#[derive(Debug, Error)]
pub enum IssueError {
    #[error("RSA error")]
    Rsa(#[from] rsa::Error),
    #[error("PKCS#8 error")]
    Pkcs8(#[from] rsa::pkcs8::Error),
    #[error("SPKI error")]
    Spki(#[from] rsa::pkcs8::spki::Error),
}
