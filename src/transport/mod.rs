//! Transport layer: wire-format details (query/payload encoding, response classification).

mod classify;
mod otp;
mod params;
mod sms;
mod template;

pub use classify::{ApiFailure, FailureKind, classify_response};
pub use otp::{
    RESEND_OTP_PATH, SEND_OTP_PATH, VERIFY_OTP_PATH, encode_resend_otp_query,
    encode_send_otp_query, encode_verify_otp_query,
};
pub use sms::{
    ANALYTICS_PATH, FLOW_PATH, LOGS_PATH, SEND_SMS_PATH, encode_analytics_query,
    encode_logs_json, encode_send_sms_json, encode_send_template_json,
};
pub use template::{
    ADD_TEMPLATE_PATH, ADD_TEMPLATE_VERSION_PATH, GET_TEMPLATE_VERSIONS_PATH,
    encode_add_template_version_json, encode_create_template_json,
    encode_get_template_versions_json,
};
