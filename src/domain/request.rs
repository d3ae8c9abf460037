use serde_json::{Map, Value};

use crate::domain::validation::ArgumentError;
use crate::domain::value::{Mobile, TemplateId};

/// Additional parameters forwarded verbatim to MSG91.
///
/// They are applied after the typed fields of a request and win on a name clash, so new
/// provider parameters can be used before this crate models them.
pub type ExtraParams = Map<String, Value>;

/// Send a one-time password through the legacy `sendotp.php` endpoint.
#[derive(Debug, Clone)]
pub struct SendOtp {
    pub mobile: Mobile,
    /// Custom message; MSG91 substitutes `##OTP##`.
    pub message: Option<String>,
    pub sender: Option<String>,
    /// A caller-chosen OTP instead of a generated one.
    pub otp: Option<String>,
    /// Expiry in minutes.
    pub otp_expiry: Option<u32>,
    /// Checked against `4..=9` before anything is sent.
    pub otp_length: Option<u8>,
    pub extra: ExtraParams,
}

impl SendOtp {
    pub fn new(mobile: Mobile) -> Self {
        Self {
            mobile,
            message: None,
            sender: None,
            otp: None,
            otp_expiry: None,
            otp_length: None,
            extra: ExtraParams::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct VerifyOtp {
    pub mobile: Mobile,
    pub otp: String,
    pub extra: ExtraParams,
}

impl VerifyOtp {
    pub fn new(mobile: Mobile, otp: impl Into<String>) -> Self {
        Self {
            mobile,
            otp: otp.into(),
            extra: ExtraParams::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Ask MSG91 to deliver the pending OTP again.
///
/// `retry_type` is not checked locally; MSG91 rejects values it does not support.
#[derive(Debug, Clone)]
pub struct ResendOtp {
    pub mobile: Mobile,
    pub retry_type: String,
    pub extra: ExtraParams,
}

impl ResendOtp {
    pub const TEXT: &'static str = "text";
    pub const VOICE: &'static str = "voice";

    /// Resend as a text message.
    pub fn new(mobile: Mobile) -> Self {
        Self::with_retry_type(mobile, Self::TEXT)
    }

    pub fn with_retry_type(mobile: Mobile, retry_type: impl Into<String>) -> Self {
        Self {
            mobile,
            retry_type: retry_type.into(),
            extra: ExtraParams::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Send a plain SMS through the v2 `sendsms` endpoint.
#[derive(Debug, Clone)]
pub struct SendSms {
    mobiles: Vec<Mobile>,
    pub message: String,
    pub sender: String,
    /// `"1"` promotional, `"4"` transactional.
    pub route: String,
    /// `"0"` international, `"91"` India.
    pub country: Option<String>,
    pub flash: Option<bool>,
    pub unicode: Option<bool>,
    pub scheduled_datetime: Option<String>,
    pub campaign: Option<String>,
    pub extra: ExtraParams,
}

impl SendSms {
    pub const DEFAULT_ROUTE: &'static str = "4";

    /// Send the same message to every number in `mobiles`.
    pub fn new(
        mobiles: Vec<Mobile>,
        message: impl Into<String>,
        sender: impl Into<String>,
    ) -> Result<Self, ArgumentError> {
        if mobiles.is_empty() {
            return Err(ArgumentError::Empty {
                field: Mobile::FIELD,
            });
        }
        Ok(Self {
            mobiles,
            message: message.into(),
            sender: sender.into(),
            route: Self::DEFAULT_ROUTE.to_owned(),
            country: None,
            flash: None,
            unicode: None,
            scheduled_datetime: None,
            campaign: None,
            extra: ExtraParams::new(),
        })
    }

    pub fn single(mobile: Mobile, message: impl Into<String>, sender: impl Into<String>) -> Self {
        Self {
            mobiles: vec![mobile],
            message: message.into(),
            sender: sender.into(),
            route: Self::DEFAULT_ROUTE.to_owned(),
            country: None,
            flash: None,
            unicode: None,
            scheduled_datetime: None,
            campaign: None,
            extra: ExtraParams::new(),
        }
    }

    pub fn mobiles(&self) -> &[Mobile] {
        &self.mobiles
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Send an approved template to one or more recipients through the flow API.
///
/// `variables` is attached to every recipient unchanged.
#[derive(Debug, Clone)]
pub struct SendTemplateSms {
    pub template_id: TemplateId,
    mobiles: Vec<Mobile>,
    pub variables: Option<Map<String, Value>>,
    pub sender_id: Option<String>,
    pub short_url: Option<bool>,
    pub extra: ExtraParams,
}

impl SendTemplateSms {
    pub fn new(template_id: TemplateId, mobiles: Vec<Mobile>) -> Result<Self, ArgumentError> {
        if mobiles.is_empty() {
            return Err(ArgumentError::Empty {
                field: Mobile::FIELD,
            });
        }
        Ok(Self {
            template_id,
            mobiles,
            variables: None,
            sender_id: None,
            short_url: None,
            extra: ExtraParams::new(),
        })
    }

    pub fn single(template_id: TemplateId, mobile: Mobile) -> Self {
        Self {
            template_id,
            mobiles: vec![mobile],
            variables: None,
            sender_id: None,
            short_url: None,
            extra: ExtraParams::new(),
        }
    }

    pub fn mobiles(&self) -> &[Mobile] {
        &self.mobiles
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Date-filtered query against the SMS reporting endpoints.
///
/// Dates are passed through as formatted by the caller (MSG91 uses `YYYY-MM-DD`).
#[derive(Debug, Clone, Default)]
pub struct ReportQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub extra: ExtraParams,
}

impl ReportQuery {
    pub fn between(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: Some(start_date.into()),
            end_date: Some(end_date.into()),
            extra: ExtraParams::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct CreateTemplate {
    pub template_name: String,
    /// Template text; placeholders use `{{name}}` / `##name##` syntax.
    pub template_body: String,
    pub sender_id: String,
    pub sms_type: String,
    pub extra: ExtraParams,
}

impl CreateTemplate {
    pub const DEFAULT_SMS_TYPE: &'static str = "NORMAL";

    pub fn new(
        template_name: impl Into<String>,
        template_body: impl Into<String>,
        sender_id: impl Into<String>,
    ) -> Self {
        Self {
            template_name: template_name.into(),
            template_body: template_body.into(),
            sender_id: sender_id.into(),
            sms_type: Self::DEFAULT_SMS_TYPE.to_owned(),
            extra: ExtraParams::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct AddTemplateVersion {
    pub template_id: TemplateId,
    pub template_body: String,
    pub sender_id: String,
    pub extra: ExtraParams,
}

impl AddTemplateVersion {
    pub fn new(
        template_id: TemplateId,
        template_body: impl Into<String>,
        sender_id: impl Into<String>,
    ) -> Self {
        Self {
            template_id,
            template_body: template_body.into(),
            sender_id: sender_id.into(),
            extra: ExtraParams::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct GetTemplateVersions {
    pub template_id: TemplateId,
    pub extra: ExtraParams,
}

impl GetTemplateVersions {
    pub fn new(template_id: TemplateId) -> Self {
        Self {
            template_id,
            extra: ExtraParams::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
