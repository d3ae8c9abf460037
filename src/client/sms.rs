use crate::domain::{Envelope, ReportQuery, SendSms, SendTemplateSms};
use crate::transport::{
    ANALYTICS_PATH, FLOW_PATH, LOGS_PATH, SEND_SMS_PATH, encode_analytics_query,
    encode_logs_json, encode_send_sms_json, encode_send_template_json,
};

use super::http::HttpRequest;
use super::{Msg91Client, Msg91Error};

/// SMS sending and reporting.
#[derive(Debug, Clone, Copy)]
pub struct Sms<'a> {
    client: &'a Msg91Client,
}

impl<'a> Sms<'a> {
    pub(super) fn new(client: &'a Msg91Client) -> Self {
        Self { client }
    }

    /// Send a plain SMS through the v2 `sendsms` endpoint.
    ///
    /// Multiple recipients are sent as one comma-separated `mobiles` value. The auth key is
    /// sent both as a header and in the body.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "Sms::send",
            skip_all,
            fields(recipients = request.mobiles().len() as u64, route = %request.route)
        )
    )]
    pub async fn send(&self, request: SendSms) -> Result<Envelope, Msg91Error> {
        let payload = encode_send_sms_json(&self.client.auth, &request);
        let url = self.client.legacy_endpoint(SEND_SMS_PATH, &[])?;
        let http_request = self
            .client
            .authorized(HttpRequest::post_json(url, payload));
        self.client
            .dispatch(http_request, "SMS sending failed")
            .await
    }

    /// Send an approved template through the flow API.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "Sms::send_template",
            skip_all,
            fields(template_id = %request.template_id.as_str(), recipients = request.mobiles().len() as u64)
        )
    )]
    pub async fn send_template(&self, request: SendTemplateSms) -> Result<Envelope, Msg91Error> {
        let payload = encode_send_template_json(&request);
        let url = self.client.api_endpoint(FLOW_PATH, &[])?;
        let http_request = self
            .client
            .authorized(HttpRequest::post_json(url, payload));
        self.client
            .dispatch(http_request, "Template SMS sending failed")
            .await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(name = "Sms::get_logs", skip_all))]
    pub async fn get_logs(&self, query: ReportQuery) -> Result<Envelope, Msg91Error> {
        let payload = encode_logs_json(&query);
        let url = self.client.api_endpoint(LOGS_PATH, &[])?;
        let http_request = self
            .client
            .authorized(HttpRequest::post_json(url, payload));
        self.client
            .dispatch(http_request, "Fetching SMS logs failed")
            .await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "Sms::get_analytics", skip_all)
    )]
    pub async fn get_analytics(&self, query: ReportQuery) -> Result<Envelope, Msg91Error> {
        let params = encode_analytics_query(&query);
        let url = self.client.api_endpoint(ANALYTICS_PATH, &params)?;
        let http_request = self.client.authorized(HttpRequest::get(url));
        self.client
            .dispatch(http_request, "Fetching SMS analytics failed")
            .await
    }
}
