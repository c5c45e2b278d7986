use std::collections::HashMap;

use vouch::{error::VerificationError, jwt::CoreValidator, JwtRef};

const TOKEN: &str = concat!(
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.",
    "eyJuYW1lIjoidmFsdWUifQ.",
    "Jki8pvw6KGbxpMinufrgo6RDL1cu7AtNMJYVh6t-_cE"
);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let token = vouch::verify(TOKEN, "HS256", b"secret", HashMap::<&str, &str>::new())?;
    println!("verified {:?}", JwtRef::from_str(TOKEN));
    println!("  headers: {:?}", token.headers().as_map());
    println!("  claims:  {:?}", token.claims().as_map());

    match vouch::verify(TOKEN, "HS256", b"wrong-secret", HashMap::<&str, &str>::new()) {
        Err(err) => println!("wrong secret: {}", err),
        Ok(_) => color_eyre::eyre::bail!("token verified under the wrong secret"),
    }

    let validator = CoreValidator::new("HS256").require_claim("sub", "1234567890");
    match validator.verify(JwtRef::from_str(TOKEN), b"secret") {
        Err(err)
            if err
                .as_verification_error()
                .map_or(false, VerificationError::is_invalid_claim) =>
        {
            println!("expected subject: {}", err)
        }
        Err(err) => return Err(err.into()),
        Ok(_) => color_eyre::eyre::bail!("token verified without a subject"),
    }

    Ok(())
}
