use std::io;

use msg91::{AuthKey, CountryId, Mobile, Msg91Client, SendSms};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let auth_key = std::env::var("MSG91_AUTH_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MSG91_AUTH_KEY environment variable is required",
        )
    })?;
    let mobiles = std::env::var("MSG91_MOBILES").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MSG91_MOBILES environment variable is required (comma-separated, local or +CC)",
        )
    })?;
    let sender = std::env::var("MSG91_SENDER").unwrap_or_else(|_| "SMSIND".to_owned());
    let message = std::env::var("MSG91_MESSAGE")
        .unwrap_or_else(|_| "Hello from the msg91 demo.".to_owned());

    let mobiles = mobiles
        .split(',')
        .map(|raw| Mobile::parse(Some(CountryId::IN), raw))
        .collect::<Result<Vec<_>, _>>()?;

    let client = Msg91Client::new(AuthKey::new(auth_key)?)?;
    let mut request = SendSms::new(mobiles, message, sender)?;
    request.country = Some("91".to_owned());

    let response = client.sms().send(request).await?;
    println!("response: {:?}", response.as_value());

    Ok(())
}
