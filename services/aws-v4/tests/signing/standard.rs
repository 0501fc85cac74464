use super::{iam_request, iam_signer, init_logger, IAM_SIGNATURE, IAM_TIMESTAMP, SECRET};
use anyhow::Result;
use pretty_assertions::assert_eq;
use signatory_aws_v4::{
    derive_signing_key, Config, CredentialScope, RequestSigner, SigningRequest,
    DEFAULT_ALGORITHM, DEFAULT_SECRET_PREFIX,
};
use signatory_core::hash::HashFamily;
use signatory_core::ErrorKind;

#[test]
fn test_iam_list_users() -> Result<()> {
    init_logger();

    let signer = iam_signer(DEFAULT_ALGORITHM);
    let req = iam_request();

    let creq = signer.canonical_request(&req)?;
    assert!(creq.ends_with("\nb6359072c78d70ebee1e81adcbab4f01bf2c23245fa365ef83fe8f1f955085e2"));
    assert_eq!(
        signer.string_to_sign(IAM_TIMESTAMP, &req)?,
        "AWS4-HMAC-SHA256\n\
         20110909T233600Z\n\
         20110909/us-east-1/iam/aws4_request\n\
         3511de7e95d28ecd39e9513b642aee07e54f4941150d8df8bf94b328ef7e55e2"
    );
    assert_eq!(
        signer.signing_key().to_hex(),
        "98f1d889fec4f4421adc522bab0ce1f82e6929c262ed15e5a94c90efd1e3b0e7"
    );
    assert_eq!(signer.signature(IAM_TIMESTAMP, &req)?, IAM_SIGNATURE);
    assert_eq!(
        signer.authorization(IAM_TIMESTAMP, &req)?,
        format!(
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20110909/us-east-1/iam/aws4_request, \
             SignedHeaders=content-type;host;x-amz-date, Signature={IAM_SIGNATURE}"
        )
    );
    Ok(())
}

/// `get-vanilla` from the aws sig v4 test suite.
#[test]
fn test_get_vanilla() -> Result<()> {
    init_logger();

    let signer = RequestSigner::new(Config {
        access_key_id: Some("AKIDEXAMPLE".to_string()),
        scope_date: Some("20150830".to_string()),
        region: Some("us-east-1".to_string()),
        service: Some("service".to_string()),
        secret_access_key: Some(SECRET.to_string()),
        ..Default::default()
    })?;
    let req = SigningRequest::new("GET", "/")
        .with_header("Host", "example.amazonaws.com")
        .with_header("X-Amz-Date", "20150830T123600Z");

    assert_eq!(
        signer.canonical_request(&req)?,
        "GET\n\
         /\n\
         \n\
         host:example.amazonaws.com\n\
         x-amz-date:20150830T123600Z\n\
         \n\
         host;x-amz-date\n\
         e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        signer.authorization("20150830T123600Z", &req)?,
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, \
         SignedHeaders=host;x-amz-date, \
         Signature=5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
    );
    Ok(())
}

#[test]
fn test_sha512_family() -> Result<()> {
    init_logger();

    let signer = iam_signer("AWS4-HMAC-SHA512");
    let req = iam_request();

    let signature = signer.signature(IAM_TIMESTAMP, &req)?;
    assert_eq!(signature.len(), 128);
    assert!(signature.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    assert_ne!(&signature[..64], IAM_SIGNATURE);

    let scope = CredentialScope::new("20110909", "us-east-1", "iam", "aws4_request")?;
    let key = derive_signing_key(HashFamily::Sha512, DEFAULT_SECRET_PREFIX, SECRET, &scope);
    assert_eq!(signer.signing_key(), key);

    assert!(signer
        .authorization(IAM_TIMESTAMP, &req)?
        .starts_with("AWS4-HMAC-SHA512 Credential="));
    Ok(())
}

#[test]
fn test_query_string_canonicalization() -> Result<()> {
    let signer = iam_signer(DEFAULT_ALGORITHM);

    let req = SigningRequest::new("GET", "http://foo.com/hello");
    let creq = signer.canonical_request(&req)?;
    assert_eq!(creq.lines().nth(2), Some(""));

    let req = SigningRequest::new("GET", "http://foo.com/hello?foo=bar&abc=123");
    let creq = signer.canonical_request(&req)?;
    assert_eq!(creq.lines().nth(1), Some("/hello"));
    assert_eq!(creq.lines().nth(2), Some("abc=123&foo=bar"));
    Ok(())
}

#[test]
fn test_encode_query_toggle() -> Result<()> {
    let config = Config {
        credential: Some(super::IAM_CREDENTIAL.to_string()),
        secret_access_key: Some(SECRET.to_string()),
        ..Default::default()
    };
    let req = SigningRequest::new("GET", "http://foo.com/?prefix=CI%2F&q=a+b");

    let plain = RequestSigner::new(config.clone())?;
    let encoded = RequestSigner::new(Config {
        encode_query: true,
        ..config
    })?;

    assert_eq!(
        plain.canonical_request(&req)?.lines().nth(2),
        Some("prefix=CI/&q=a b")
    );
    assert_eq!(
        encoded.canonical_request(&req)?.lines().nth(2),
        Some("prefix=CI%2F&q=a%20b")
    );
    assert_ne!(
        plain.signature(IAM_TIMESTAMP, &req)?,
        encoded.signature(IAM_TIMESTAMP, &req)?
    );
    Ok(())
}

#[test]
fn test_date_scope_mismatch() {
    let signer = iam_signer(DEFAULT_ALGORITHM);
    let req = iam_request();

    for result in [
        signer.signature("20130909T233600Z", &req),
        signer.authorization("20130909T233600Z", &req),
        signer.string_to_sign("20130909T233600Z", &req),
    ] {
        assert_eq!(result.unwrap_err().kind(), ErrorKind::DateScopeMismatch);
    }
}

#[test]
fn test_malformed_input() {
    let signer = iam_signer(DEFAULT_ALGORITHM);

    let req = SigningRequest::new("GET", "http://exa mple.com/");
    assert_eq!(
        signer.signature(IAM_TIMESTAMP, &req).unwrap_err().kind(),
        ErrorKind::RequestInvalid
    );
    assert_eq!(
        signer.canonical_request(&req).unwrap_err().kind(),
        ErrorKind::RequestInvalid
    );

    assert_eq!(
        signer
            .signature("2011-09-09T23:36:00Z", &iam_request())
            .unwrap_err()
            .kind(),
        ErrorKind::RequestInvalid
    );
}
