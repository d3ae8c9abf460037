use crate::domain::{ArgumentError, AuthKey, Mobile, OtpLength, ResendOtp, SendOtp, VerifyOtp};

use super::params::{apply_extra_query, push_query_non_empty, set_query};

pub const SEND_OTP_PATH: &str = "api/sendotp.php";
pub const VERIFY_OTP_PATH: &str = "api/verifyRequestOTP.php";
pub const RESEND_OTP_PATH: &str = "api/retryotp.php";

/// Fails when `otp_length` is outside `4..=9`.
pub fn encode_send_otp_query(
    auth: &AuthKey,
    request: &SendOtp,
) -> Result<Vec<(String, String)>, ArgumentError> {
    let otp_length = request.otp_length.map(OtpLength::new).transpose()?;

    let mut params = base_params(auth, &request.mobile);
    push_query_non_empty(&mut params, "message", request.message.as_deref());
    push_query_non_empty(&mut params, "sender", request.sender.as_deref());
    push_query_non_empty(&mut params, "otp", request.otp.as_deref());
    if let Some(expiry) = request.otp_expiry {
        set_query(&mut params, "otp_expiry", expiry.to_string());
    }
    if let Some(length) = otp_length {
        set_query(&mut params, OtpLength::FIELD, length.value().to_string());
    }
    apply_extra_query(&mut params, &request.extra);
    Ok(params)
}

pub fn encode_verify_otp_query(auth: &AuthKey, request: &VerifyOtp) -> Vec<(String, String)> {
    let mut params = base_params(auth, &request.mobile);
    set_query(&mut params, "otp", request.otp.as_str());
    apply_extra_query(&mut params, &request.extra);
    params
}

pub fn encode_resend_otp_query(auth: &AuthKey, request: &ResendOtp) -> Vec<(String, String)> {
    let mut params = base_params(auth, &request.mobile);
    set_query(&mut params, "retrytype", request.retry_type.as_str());
    apply_extra_query(&mut params, &request.extra);
    params
}

fn base_params(auth: &AuthKey, mobile: &Mobile) -> Vec<(String, String)> {
    vec![
        (AuthKey::FIELD.to_owned(), auth.expose().to_owned()),
        (Mobile::FIELD.to_owned(), mobile.as_str().to_owned()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> AuthKey {
        AuthKey::new("test_auth_key").unwrap()
    }

    fn mobile() -> Mobile {
        Mobile::new("919999999999").unwrap()
    }

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_owned(), value.to_owned())
    }

    #[test]
    fn send_otp_minimal_has_only_auth_and_mobile() {
        let params = encode_send_otp_query(&auth(), &SendOtp::new(mobile())).unwrap();
        assert_eq!(
            params,
            vec![
                pair("authkey", "test_auth_key"),
                pair("mobile", "919999999999")
            ]
        );
    }

    #[test]
    fn send_otp_with_all_options() {
        let request = SendOtp {
            message: Some("Your OTP is ##OTP##".to_owned()),
            sender: Some("MYAPP".to_owned()),
            otp: Some("1234".to_owned()),
            otp_expiry: Some(5),
            otp_length: Some(6),
            ..SendOtp::new(mobile())
        };
        let params = encode_send_otp_query(&auth(), &request).unwrap();
        assert_eq!(
            params,
            vec![
                pair("authkey", "test_auth_key"),
                pair("mobile", "919999999999"),
                pair("message", "Your OTP is ##OTP##"),
                pair("sender", "MYAPP"),
                pair("otp", "1234"),
                pair("otp_expiry", "5"),
                pair("otp_length", "6"),
            ]
        );
    }

    #[test]
    fn send_otp_rejects_length_out_of_range() {
        for length in [0, 3, 10] {
            let request = SendOtp {
                otp_length: Some(length),
                ..SendOtp::new(mobile())
            };
            let err = encode_send_otp_query(&auth(), &request).unwrap_err();
            assert_eq!(
                err,
                ArgumentError::OtpLengthOutOfRange {
                    min: 4,
                    max: 9,
                    actual: length
                }
            );
        }
    }

    #[test]
    fn send_otp_extra_params_override_and_append() {
        let request = SendOtp::new(mobile())
            .with_extra("extra_param", "value")
            .with_extra("mobile", "910000000000");
        let params = encode_send_otp_query(&auth(), &request).unwrap();
        assert_eq!(
            params,
            vec![
                pair("authkey", "test_auth_key"),
                pair("mobile", "910000000000"),
                pair("extra_param", "value"),
            ]
        );
    }

    #[test]
    fn verify_and_resend_carry_mandatory_fields() {
        let params = encode_verify_otp_query(&auth(), &VerifyOtp::new(mobile(), "1234"));
        assert!(params.contains(&pair("otp", "1234")));
        assert!(params.contains(&pair("authkey", "test_auth_key")));

        let params = encode_resend_otp_query(
            &auth(),
            &ResendOtp::with_retry_type(mobile(), ResendOtp::VOICE),
        );
        assert!(params.contains(&pair("retrytype", "voice")));
        assert!(params.contains(&pair("mobile", "919999999999")));
    }
}
