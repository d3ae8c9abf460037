use crate::domain::{Envelope, ResendOtp, SendOtp, VerifyOtp};
use crate::transport::{
    RESEND_OTP_PATH, SEND_OTP_PATH, VERIFY_OTP_PATH, encode_resend_otp_query,
    encode_send_otp_query, encode_verify_otp_query,
};

use super::http::HttpRequest;
use super::{Msg91Client, Msg91Error};

/// OTP operations on the legacy endpoints. The auth key travels as a query parameter.
#[derive(Debug, Clone, Copy)]
pub struct Otp<'a> {
    client: &'a Msg91Client,
}

impl<'a> Otp<'a> {
    pub(super) fn new(client: &'a Msg91Client) -> Self {
        Self { client }
    }

    /// Send an OTP to `request.mobile`.
    ///
    /// Errors:
    /// - [`Msg91Error::InvalidArgument`] when `otp_length` is outside `4..=9` (nothing is sent),
    /// - [`Msg91Error::Authentication`], [`Msg91Error::Validation`] or [`Msg91Error::Api`] for
    ///   unsuccessful responses,
    /// - [`Msg91Error::Transport`] when no response was received.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "Otp::send", skip_all))]
    pub async fn send(&self, request: SendOtp) -> Result<Envelope, Msg91Error> {
        let query = encode_send_otp_query(&self.client.auth, &request)?;
        let url = self.client.legacy_endpoint(SEND_OTP_PATH, &query)?;
        self.client
            .dispatch(HttpRequest::get(url), "OTP sending failed")
            .await
    }

    /// Check an OTP the user entered.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "Otp::verify", skip_all))]
    pub async fn verify(&self, request: VerifyOtp) -> Result<Envelope, Msg91Error> {
        let query = encode_verify_otp_query(&self.client.auth, &request);
        let url = self.client.legacy_endpoint(VERIFY_OTP_PATH, &query)?;
        self.client
            .dispatch(HttpRequest::get(url), "OTP verification failed")
            .await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "Otp::resend",
            skip_all,
            fields(retry_type = %request.retry_type)
        )
    )]
    pub async fn resend(&self, request: ResendOtp) -> Result<Envelope, Msg91Error> {
        let query = encode_resend_otp_query(&self.client.auth, &request);
        let url = self.client.legacy_endpoint(RESEND_OTP_PATH, &query)?;
        self.client
            .dispatch(HttpRequest::get(url), "OTP resend failed")
            .await
    }
}
