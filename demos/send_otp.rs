use std::io;

use msg91::{AuthKey, Mobile, Msg91Client, SendOtp};

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

    let client = Msg91Client::new(AuthKey::new(auth_key)?)?;
    let request = SendOtp {
        otp_length: Some(6),
        otp_expiry: Some(10),
        ..SendOtp::new(Mobile::new(mobile)?)
    };

    let response = client.otp().send(request).await?;
    println!("response: {:?}", response.as_value());

    Ok(())
}
