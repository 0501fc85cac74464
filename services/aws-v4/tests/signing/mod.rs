mod properties;
mod standard;

use signatory_aws_v4::{Config, RequestSigner, SigningRequest};

pub const SECRET: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";
pub const IAM_CREDENTIAL: &str = "AKIDEXAMPLE/20110909/us-east-1/iam/aws4_request";
pub const IAM_TIMESTAMP: &str = "20110909T233600Z";
pub const IAM_SIGNATURE: &str = "ced6826de92d2bdeed8f846f0bf508e8559e98e4b0199114b84c54174deb456c";

/// Initialize test logging.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Signer for the IAM ListUsers example with the given algorithm.
pub fn iam_signer(algorithm: &str) -> RequestSigner {
    RequestSigner::new(Config {
        credential: Some(IAM_CREDENTIAL.to_string()),
        secret_access_key: Some(SECRET.to_string()),
        algorithm: algorithm.to_string(),
        ..Default::default()
    })
    .expect("signer must be valid")
}

/// The IAM ListUsers request.
pub fn iam_request() -> SigningRequest {
    SigningRequest::new("POST", "http://iam.amazonaws.com/")
        .with_header("Host", "iam.amazonaws.com")
        .with_header("X-Amz-Date", IAM_TIMESTAMP)
        .with_header(
            "Content-Type",
            "application/x-www-form-urlencoded; charset=utf-8",
        )
        .with_body("Action=ListUsers&Version=2010-05-08")
}
