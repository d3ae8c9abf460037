//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    AddTemplateVersion, CreateTemplate, ExtraParams, GetTemplateVersions, ReportQuery,
    ResendOtp, SendOtp, SendSms, SendTemplateSms, VerifyOtp,
};
pub use response::Envelope;
pub use validation::ArgumentError;
pub use phonenumber::country::Id as CountryId;
pub use value::{AuthKey, Mobile, OtpLength, TemplateId};

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn auth_key_rejects_empty() {
        assert!(matches!(
            AuthKey::new("   "),
            Err(ArgumentError::Empty {
                field: AuthKey::FIELD
            })
        ));
    }

    #[test]
    fn send_sms_requires_recipients() {
        let err = SendSms::new(Vec::new(), "hi", "SENDER").unwrap_err();
        assert_eq!(
            err,
            ArgumentError::Empty {
                field: Mobile::FIELD
            }
        );
    }

    #[test]
    fn send_sms_defaults_to_transactional_route() {
        let mobile = Mobile::new("919999999999").unwrap();
        let request = SendSms::single(mobile, "hi", "SENDER");
        assert_eq!(request.route, "4");
        assert_eq!(request.mobiles().len(), 1);
        assert!(request.flash.is_none());
    }

    #[test]
    fn send_template_requires_recipients() {
        let template_id = TemplateId::new("tpl").unwrap();
        assert!(SendTemplateSms::new(template_id, Vec::new()).is_err());
    }

    #[test]
    fn resend_defaults_to_text() {
        let mobile = Mobile::new("919999999999").unwrap();
        assert_eq!(ResendOtp::new(mobile.clone()).retry_type, ResendOtp::TEXT);
        assert_eq!(
            ResendOtp::with_retry_type(mobile, ResendOtp::VOICE).retry_type,
            "voice"
        );
    }

    #[test]
    fn extra_params_accumulate() {
        let mobile = Mobile::new("919999999999").unwrap();
        let request = SendOtp::new(mobile)
            .with_extra("extra_param", "value")
            .with_extra("invisible", 1);
        assert_eq!(request.extra.get("extra_param"), Some(&json!("value")));
        assert_eq!(request.extra.get("invisible"), Some(&json!(1)));
    }

    #[test]
    fn create_template_defaults_to_normal_sms_type() {
        let request = CreateTemplate::new("Welcome", "Hi {{name}}", "SENDER");
        assert_eq!(request.sms_type, "NORMAL");
    }
}
