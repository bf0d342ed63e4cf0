use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use qrdoc_verifier::{
    issuer::{issue, private_key_from_pem, DocumentInfo},
    QrPayload,
};

#[derive(Parser)]
#[command(name = "issue", about = "Sign a document hash and print the QR code payload as JSON.")]
pub struct IssueCmd {
    /// PKCS#8 PEM private key, as written by `qrdoc keygen`.
    #[arg(long)]
    key: PathBuf,

    #[arg(long)]
    id: String,

    /// The document hash string to sign.
    #[arg(long)]
    hash: String,

    #[arg(long)]
    document_name: Option<String>,

    #[arg(long)]
    image_uri: Option<String>,

    /// Pretty-print the JSON instead of emitting the compact form a QR encoder expects.
    #[arg(long)]
    pretty: bool,
}

impl IssueCmd {
    pub fn payload(&self) -> Result<QrPayload> {
        if self.id.is_empty() || self.hash.is_empty() {
            anyhow::bail!("--id and --hash must not be empty");
        }
        let pem = fs::read_to_string(&self.key)
            .with_context(|| format!("while reading {}", self.key.display()))?;
        let key = private_key_from_pem(&pem)
            .with_context(|| format!("{} is not a PKCS#8 PEM private key", self.key.display()))?;

        let document = DocumentInfo {
            id: self.id.clone(),
            hash: self.hash.clone(),
            document_name: self.document_name.clone(),
            image_uri: self.image_uri.clone(),
            base64_image: None,
        };
        Ok(issue(&key, document)?)
    }

    pub fn run(&self) -> Result<()> {
        let payload = self.payload()?;
        let json = if self.pretty {
            serde_json::to_string_pretty(&payload)?
        } else {
            payload.to_json()?
        };
        println!("{json}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use qrdoc_verifier::{
        issuer::{generate_key, private_key_to_pem},
        SignatureValidator, Verification,
    };

    use super::*;

    fn cmd(key: PathBuf, id: &str, hash: &str) -> IssueCmd {
        IssueCmd {
            key,
            id: id.into(),
            hash: hash.into(),
            document_name: Some("Certidão".into()),
            image_uri: None,
            pretty: false,
        }
    }

    #[test]
    fn issued_payload_verifies_after_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let key_path = dir.path().join("signer.pem");
        fs::write(&key_path, private_key_to_pem(&generate_key(1024).unwrap()).unwrap()).unwrap();

        let payload = cmd(key_path, "42", "DOC123").payload().unwrap();
        let scanned: QrPayload = payload.to_json().unwrap().parse().unwrap();

        assert_eq!(scanned.document_name.as_deref(), Some("Certidão"));
        assert_eq!(SignatureValidator::validate(&scanned).unwrap(), Verification::Valid);
    }

    #[test]
    fn rejects_non_pem_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let key_path = dir.path().join("signer.pem");
        fs::write(&key_path, "not a key").unwrap();

        let err = cmd(key_path, "42", "DOC123").payload().unwrap_err();
        assert!(format!("{err}").contains("is not a PKCS#8 PEM private key"));
    }

    #[test]
    fn rejects_empty_hash() {
        let err = cmd(PathBuf::from("unused.pem"), "42", "").payload().unwrap_err();
        assert!(format!("{err}").contains("must not be empty"));
    }
}
