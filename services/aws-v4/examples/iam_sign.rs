use anyhow::Result;
use signatory_aws_v4::{Config, RequestSigner};
use signatory_core::time::{format_date, format_iso8601, now};
use signatory_core::OsEnv;

fn main() -> Result<()> {
    // Initialize logging for debugging
    env_logger::init();

    let signing_time = now();
    let date = format_date(signing_time);

    // Load access key and secret from env, falling back to demo values.
    let mut config = Config {
        scope_date: Some(date),
        service: Some("iam".to_string()),
        ..Default::default()
    }
    .from_env(&OsEnv);
    if config.access_key_id.is_none() || config.secret_access_key.is_none() {
        println!("No AWS credentials found, using demo credentials for example");
        config.access_key_id = Some("AKIDEXAMPLE".to_string());
        config.secret_access_key = Some("wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY".to_string());
        config.derived_key = None;
    }
    if config.region.is_none() {
        config.region = Some("us-east-1".to_string());
    }

    let signer = RequestSigner::new(config)?;

    let req = http::Request::post("https://iam.amazonaws.com/")
        .header("host", "iam.amazonaws.com")
        .header("x-amz-date", format_iso8601(signing_time))
        .header(
            "content-type",
            "application/x-www-form-urlencoded; charset=utf-8",
        )
        .body("Action=ListUsers&Version=2010-05-08")?;
    let (mut parts, body) = req.into_parts();

    signer.sign(&mut parts, body, signing_time)?;

    // Demo only, the request is not sent.
    println!("Credential: {}", signer.credential());
    println!(
        "Authorization header: {:?}",
        parts.headers.get("authorization")
    );
    Ok(())
}
