use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{PayloadError, ValidationError};

/// The most bytes a single QR code can carry in byte mode (version 40-L).
///
/// JSON text always needs byte mode, so nothing longer can come off a real scan.
pub const DEFAULT_MAX_SCAN_BYTES: usize = 2953;

/// Options for the schema step applied to scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadOptions {
    /// Scanned text longer than this is rejected before parsing.
    pub max_scan_bytes: usize,
    /// Reject objects carrying fields outside the payload schema.
    pub reject_unknown_fields: bool,
}

impl Default for PayloadOptions {
    fn default() -> Self {
        Self { max_scan_bytes: DEFAULT_MAX_SCAN_BYTES, reject_unknown_fields: false }
    }
}

/// The JSON object carried by a document QR code.
///
/// Every field is optional at this layer so that a payload missing a required
/// field still parses; [`QrPayload::required`] enforces presence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The document hash string. This is the signed message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Base64 RSA signature over `hash`.
    #[serde(default, rename = "hashRsa", skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    /// Base64 DER encoding of the signer's RSA public key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base64_image: Option<String>,
}

/// Borrowed view of the four fields verification needs, all known to be non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredFields<'a> {
    pub id: &'a str,
    pub hash: &'a str,
    pub signature: &'a str,
    pub public_key: &'a str,
}

#[derive(Deserialize)]
struct WirePayload {
    #[serde(flatten)]
    payload: QrPayload,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl QrPayload {
    /// Parses scanned text into a payload.
    ///
    /// The text must be a JSON object whose known fields are strings or `null`.
    pub fn parse(raw: &str, opts: &PayloadOptions) -> Result<Self, PayloadError> {
        if raw.len() > opts.max_scan_bytes {
            return Err(PayloadError::Oversized { limit: opts.max_scan_bytes });
        }
        let wire: WirePayload = serde_json::from_str(raw)?;
        if opts.reject_unknown_fields {
            if let Some(name) = wire.extra.keys().next() {
                return Err(PayloadError::UnknownField(name.clone()));
            }
        }
        Ok(wire.payload)
    }

    /// Returns the fields needed for verification, or
    /// [`ValidationError::MalformedPayload`] if any is missing or empty.
    pub fn required(&self) -> Result<RequiredFields<'_>, ValidationError> {
        fn present(field: &Option<String>) -> Result<&str, ValidationError> {
            match field.as_deref() {
                Some(value) if !value.is_empty() => Ok(value),
                _ => Err(ValidationError::MalformedPayload),
            }
        }

        Ok(RequiredFields {
            id: present(&self.id)?,
            hash: present(&self.hash)?,
            signature: present(&self.signature)?,
            public_key: present(&self.public_key)?,
        })
    }

    pub fn to_json(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl FromStr for QrPayload {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &PayloadOptions::default())
    }
}
