use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use lazy_static::lazy_static;
use rsa::RsaPrivateKey;
use rstest::rstest;

use crate::{
    issuer::{generate_key, issue, DocumentInfo},
    QrPayload, SignatureValidator, ValidationError, Verdict, Verification,
};

lazy_static! {
    /// A small key shared by every test; generating one per test is slow in debug builds.
    pub(crate) static ref TEST_KEY: RsaPrivateKey = generate_key(1024).unwrap();
}

pub(crate) fn signed_payload(hash: &str) -> QrPayload {
    let document = DocumentInfo { id: "1".into(), hash: hash.into(), ..Default::default() };
    issue(&TEST_KEY, document).unwrap()
}

#[test]
fn test_signed_payload_is_valid() {
    let payload = signed_payload("DOC123");
    assert_eq!(SignatureValidator::validate(&payload).unwrap(), Verification::Valid);
    assert_eq!(SignatureValidator::verdict(&payload).message(), "Assinatura válida!");
}

#[test]
fn test_changed_hash_is_invalid() {
    let mut payload = signed_payload("DOC123");
    payload.hash = Some("DOC124".into());
    assert_eq!(SignatureValidator::validate(&payload).unwrap(), Verification::Invalid);
    assert_eq!(SignatureValidator::verdict(&payload).message(), "Assinatura inválida!");
}

#[test]
fn test_bit_flipped_signature_is_invalid() {
    let mut payload = signed_payload("DOC123");
    let mut signature = BASE64.decode(payload.signature.as_ref().unwrap()).unwrap();
    signature[10] ^= 0x01;
    payload.signature = Some(BASE64.encode(&signature));

    assert_eq!(SignatureValidator::validate(&payload).unwrap(), Verification::Invalid);
}

#[test]
fn test_truncated_signature_is_invalid() {
    let mut payload = signed_payload("DOC123");
    let signature = BASE64.decode(payload.signature.as_ref().unwrap()).unwrap();
    payload.signature = Some(BASE64.encode(&signature[..signature.len() - 1]));

    assert_eq!(SignatureValidator::validate(&payload).unwrap(), Verification::Invalid);
}

#[test]
fn test_signature_from_other_key_is_invalid() {
    let other = generate_key(1024).unwrap();
    let mut payload = signed_payload("DOC123");
    let foreign =
        issue(&other, DocumentInfo { id: "1".into(), hash: "DOC123".into(), ..Default::default() })
            .unwrap();
    payload.signature = foreign.signature;

    assert_eq!(SignatureValidator::validate(&payload).unwrap(), Verification::Invalid);
}

#[rstest]
#[case::id(|p: &mut QrPayload| p.id = None)]
#[case::hash(|p: &mut QrPayload| p.hash = None)]
#[case::signature(|p: &mut QrPayload| p.signature = None)]
#[case::public_key(|p: &mut QrPayload| p.public_key = None)]
#[case::empty_id(|p: &mut QrPayload| p.id = Some(String::new()))]
#[case::empty_hash(|p: &mut QrPayload| p.hash = Some(String::new()))]
#[case::empty_signature(|p: &mut QrPayload| p.signature = Some(String::new()))]
#[case::empty_public_key(|p: &mut QrPayload| p.public_key = Some(String::new()))]
fn test_missing_field_is_malformed(#[case] strip: fn(&mut QrPayload)) {
    let mut payload = signed_payload("DOC123");
    strip(&mut payload);

    let err = SignatureValidator::validate(&payload).unwrap_err();
    assert!(matches!(err, ValidationError::MalformedPayload));
    assert_eq!(SignatureValidator::verdict(&payload), Verdict::Error);
}

#[test]
fn test_presence_is_checked_before_decoding() {
    // An undecodable key would fail decoding; the missing id must win.
    let payload = QrPayload {
        id: None,
        hash: Some("DOC123".into()),
        signature: Some("%%%".into()),
        public_key: Some("%%%".into()),
        ..Default::default()
    };
    assert!(matches!(
        SignatureValidator::validate(&payload),
        Err(ValidationError::MalformedPayload)
    ));
}

#[test]
fn test_bad_public_key_base64_is_an_error_verdict() {
    let mut payload = signed_payload("DOC123");
    payload.public_key = Some("not base64!".into());

    assert!(matches!(
        SignatureValidator::validate(&payload),
        Err(ValidationError::KeyDecoding(_))
    ));
    assert_eq!(SignatureValidator::verdict(&payload).message(), "Erro ao validar QR Code.");
}

#[test]
fn test_bad_signature_base64_is_an_error_verdict() {
    let mut payload = signed_payload("DOC123");
    payload.signature = Some("***".into());

    assert!(matches!(
        SignatureValidator::validate(&payload),
        Err(ValidationError::SignatureDecoding(_))
    ));
    assert_eq!(SignatureValidator::verdict(&payload), Verdict::Error);
}

#[test]
fn test_validation_is_idempotent() {
    let valid = signed_payload("DOC123");
    let mut invalid = valid.clone();
    invalid.hash = Some("DOC124".into());

    for payload in [&valid, &invalid] {
        let first = SignatureValidator::validate(payload).unwrap();
        let second = SignatureValidator::validate(payload).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_end_to_end_from_scanned_text() {
    let key = generate_key(1024).unwrap();
    let digest = <sha2::Sha256 as sha2::Digest>::digest(b"DOC123");
    let signature = key.sign(rsa::Pkcs1v15Sign::new::<sha2::Sha256>(), &digest).unwrap();
    let public_key = crate::encode_public_key(&key.to_public_key()).unwrap();

    let raw = serde_json::json!({
        "id": "1",
        "hash": "DOC123",
        "hashRsa": BASE64.encode(&signature),
        "publicKey": public_key,
    })
    .to_string();
    let payload: QrPayload = raw.parse().unwrap();
    assert_eq!(SignatureValidator::verdict(&payload), Verdict::Valid);

    let tampered = raw.replace("DOC123", "DOC124");
    let payload: QrPayload = tampered.parse().unwrap();
    assert_eq!(SignatureValidator::verdict(&payload), Verdict::Invalid);
}
