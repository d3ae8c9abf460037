use std::io;

use msg91::{AuthKey, CreateTemplate, Msg91Client};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let auth_key = std::env::var("MSG91_AUTH_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MSG91_AUTH_KEY environment variable is required",
        )
    })?;
    let sender = std::env::var("MSG91_SENDER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MSG91_SENDER environment variable is required",
        )
    })?;

    let client = Msg91Client::new(AuthKey::new(auth_key)?)?;
    let request = CreateTemplate::new("welcome", "Welcome aboard, ##name##!", sender);

    let response = client.template().create(request).await?;
    println!("response: {:?}", response.as_value());

    Ok(())
}
