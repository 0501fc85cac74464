use std::sync::Arc;
use std::thread;

use super::{iam_request, iam_signer, IAM_CREDENTIAL, IAM_SIGNATURE, IAM_TIMESTAMP};
use anyhow::Result;
use pretty_assertions::assert_eq;
use signatory_aws_v4::{Config, RequestSigner, SigningRequest, DEFAULT_ALGORITHM};
use test_case::test_case;

#[test_case(DEFAULT_ALGORITHM; "sha256")]
#[test_case("AWS4-HMAC-SHA512"; "sha512")]
fn test_deterministic(algorithm: &str) -> Result<()> {
    let signer = iam_signer(algorithm);
    let req = iam_request();

    let first = signer.signature(IAM_TIMESTAMP, &req)?;
    for _ in 0..8 {
        assert_eq!(signer.signature(IAM_TIMESTAMP, &req)?, first);
    }
    Ok(())
}

#[test_case(DEFAULT_ALGORITHM; "sha256")]
#[test_case("AWS4-HMAC-SHA512"; "sha512")]
fn test_secret_and_derived_key_agree(algorithm: &str) -> Result<()> {
    let with_secret = iam_signer(algorithm);
    let derived = with_secret.signing_key().to_hex();

    let with_derived = RequestSigner::new(Config {
        credential: Some(IAM_CREDENTIAL.to_string()),
        derived_key: Some(derived),
        algorithm: algorithm.to_string(),
        ..Default::default()
    })?;

    let req = iam_request();
    assert_eq!(
        with_secret.signature(IAM_TIMESTAMP, &req)?,
        with_derived.signature(IAM_TIMESTAMP, &req)?
    );
    assert_eq!(
        with_secret.authorization(IAM_TIMESTAMP, &req)?,
        with_derived.authorization(IAM_TIMESTAMP, &req)?
    );
    Ok(())
}

#[test]
fn test_header_order_invariant() -> Result<()> {
    let signer = iam_signer(DEFAULT_ALGORITHM);

    let base = iam_request();
    let mut reversed = base.clone();
    reversed.headers.reverse();
    let mut rotated = base.clone();
    rotated.headers.rotate_left(1);

    for req in [&reversed, &rotated] {
        assert_eq!(signer.canonical_request(req)?, signer.canonical_request(&base)?);
        assert_eq!(signer.signed_headers(req), signer.signed_headers(&base));
        assert_eq!(signer.signature(IAM_TIMESTAMP, req)?, IAM_SIGNATURE);
    }
    Ok(())
}

#[test]
fn test_header_name_case_invariant() -> Result<()> {
    let signer = iam_signer(DEFAULT_ALGORITHM);

    let mut upper = iam_request();
    for (k, _) in upper.headers.iter_mut() {
        *k = k.to_uppercase();
    }
    let mut lower = iam_request();
    for (k, _) in lower.headers.iter_mut() {
        *k = k.to_lowercase();
    }

    assert_eq!(signer.signature(IAM_TIMESTAMP, &upper)?, IAM_SIGNATURE);
    assert_eq!(signer.signature(IAM_TIMESTAMP, &lower)?, IAM_SIGNATURE);
    Ok(())
}

#[test]
fn test_header_value_case_matters() -> Result<()> {
    let signer = iam_signer(DEFAULT_ALGORITHM);

    let mut req = iam_request();
    for (k, v) in req.headers.iter_mut() {
        if k == "Host" {
            *v = v.to_uppercase();
        }
    }
    assert_ne!(signer.signature(IAM_TIMESTAMP, &req)?, IAM_SIGNATURE);
    Ok(())
}

#[test]
fn test_method_case_invariant() -> Result<()> {
    let signer = iam_signer(DEFAULT_ALGORITHM);

    let mut req = iam_request();
    req.method = "post".to_string();
    assert!(signer.canonical_request(&req)?.starts_with("POST\n"));
    assert_eq!(signer.signature(IAM_TIMESTAMP, &req)?, IAM_SIGNATURE);
    Ok(())
}

#[test]
fn test_absent_and_empty_body_agree() -> Result<()> {
    let signer = iam_signer(DEFAULT_ALGORITHM);

    let absent = SigningRequest::new("GET", "http://iam.amazonaws.com/")
        .with_header("Host", "iam.amazonaws.com");
    let empty = absent.clone().with_body(Vec::new());

    assert_eq!(
        signer.canonical_request(&absent)?,
        signer.canonical_request(&empty)?
    );
    assert_eq!(
        signer.signature(IAM_TIMESTAMP, &absent)?,
        signer.signature(IAM_TIMESTAMP, &empty)?
    );
    Ok(())
}

#[test]
fn test_shared_across_threads() -> Result<()> {
    let signer = Arc::new(iam_signer(DEFAULT_ALGORITHM));

    let handles = (0..4)
        .map(|_| {
            let signer = signer.clone();
            thread::spawn(move || signer.signature(IAM_TIMESTAMP, &iam_request()))
        })
        .collect::<Vec<_>>();

    for handle in handles {
        let signature = handle.join().expect("thread must not panic")?;
        assert_eq!(signature, IAM_SIGNATURE);
    }
    Ok(())
}
