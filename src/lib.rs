//! Typed Rust client for the MSG91 SMS, OTP and template HTTP APIs.
//!
//! The crate is split into a domain layer of strong types, a transport layer for wire-format
//! quirks (query/JSON encoding and response classification), and a small client layer that
//! issues the requests. Every operation returns the provider's JSON body as an [`Envelope`]
//! or exactly one [`Msg91Error`].
//!
//! ```rust,no_run
//! use msg91::{AuthKey, Mobile, Msg91Client, SendOtp, VerifyOtp};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), msg91::Msg91Error> {
//!     let client = Msg91Client::new(AuthKey::new("...")?)?;
//!     let mobile = Mobile::new("919999999999")?;
//!
//!     let sent = client.otp().send(SendOtp::new(mobile.clone())).await?;
//!     println!("{:?}", sent.get("message"));
//!
//!     client.otp().verify(VerifyOtp::new(mobile, "1234")).await?;
//!     Ok(())
//! }
//! ```
//!
//! With the default `tracing` feature every operation opens a span and the dispatch path
//! emits `debug`/`warn` events. The auth key is never recorded.
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_LEGACY_URL, DEFAULT_TIMEOUT, Msg91Client, Msg91ClientBuilder,
    Msg91Error, Otp, Sms, Template,
};
pub use domain::{
    AddTemplateVersion, ArgumentError, AuthKey, CountryId, CreateTemplate, Envelope,
    ExtraParams, GetTemplateVersions, Mobile, OtpLength, ReportQuery, ResendOtp, SendOtp,
    SendSms, SendTemplateSms, TemplateId, VerifyOtp,
};
