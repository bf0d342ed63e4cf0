use rsa::Pkcs1v15Sign;
use sha2::{Digest, Sha256};

use crate::{
    key::{decode_base64, decode_public_key},
    QrPayload, ValidationError, Verdict, Verification,
};

/// A verifier for the RSA-SHA256 signature embedded in a [`QrPayload`].
///
/// The signed message is the payload's `hash` string itself. A valid signature
/// proves the signer vouched for that string, not that it matches any document.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureValidator;

impl SignatureValidator {
    /// Verifies the payload signature.
    ///
    /// # Returns
    ///
    /// [`Verification::Valid`] or [`Verification::Invalid`] when the inputs are
    /// well formed, or a [`ValidationError`] when a required field is missing or
    /// the key or signature cannot be decoded. Required fields are checked before
    /// any decoding happens.
    pub fn validate(payload: &QrPayload) -> Result<Verification, ValidationError> {
        let fields = payload.required()?;

        let public_key = decode_public_key(fields.public_key)?;
        let signature =
            decode_base64(fields.signature).map_err(ValidationError::SignatureDecoding)?;
        let digest = Sha256::digest(fields.hash.as_bytes());

        match public_key.verify(Pkcs1v15Sign::new::<Sha256>(), &digest, &signature) {
            Ok(()) => Ok(Verification::Valid),
            Err(rsa::Error::Verification) => Ok(Verification::Invalid),
            Err(err) => Err(ValidationError::Crypto(err)),
        }
    }

    /// Verifies the payload and collapses every error into [`Verdict::Error`].
    pub fn verdict(payload: &QrPayload) -> Verdict {
        match Self::validate(payload) {
            Ok(verification) => {
                tracing::debug!(id = payload.id.as_deref(), ?verification, "signature checked");
                verification.into()
            }
            Err(err) => {
                tracing::error!(error = ?err, "failed to validate QR code payload");
                Verdict::Error
            }
        }
    }
}
