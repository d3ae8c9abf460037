use std::io;

use msg91::{AuthKey, Mobile, Msg91Client, Msg91Error, VerifyOtp};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let auth_key = std::env::var("MSG91_AUTH_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MSG91_AUTH_KEY environment variable is required",
        )
    })?;
    let mobile = std::env::var("MSG91_MOBILE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MSG91_MOBILE environment variable is required",
        )
    })?;
    let otp = std::env::var("MSG91_OTP").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MSG91_OTP environment variable is required",
        )
    })?;

    let client = Msg91Client::new(AuthKey::new(auth_key)?)?;
    match client
        .otp()
        .verify(VerifyOtp::new(Mobile::new(mobile)?, otp))
        .await
    {
        Ok(response) => println!("verified: {:?}", response.as_value()),
        Err(Msg91Error::Validation { message, .. }) => println!("rejected: {message}"),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
