use std::io;

use msg91::{AuthKey, Mobile, Msg91Client, SendTemplateSms, TemplateId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let auth_key = std::env::var("MSG91_AUTH_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MSG91_AUTH_KEY environment variable is required",
        )
    })?;
    let template_id = std::env::var("MSG91_TEMPLATE_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MSG91_TEMPLATE_ID environment variable is required",
        )
    })?;
    let mobile = std::env::var("MSG91_MOBILE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MSG91_MOBILE environment variable is required",
        )
    })?;
    let name = std::env::var("MSG91_NAME").unwrap_or_else(|_| "there".to_owned());

    let client = Msg91Client::new(AuthKey::new(auth_key)?)?;
    let mut request = SendTemplateSms::single(TemplateId::new(template_id)?, Mobile::new(mobile)?);
    let mut variables = msg91::ExtraParams::new();
    variables.insert("name".to_owned(), name.into());
    request.variables = Some(variables);

    let response = client.sms().send_template(request).await?;
    println!("response: {:?}", response.as_value());

    Ok(())
}
