use crate::domain::{AddTemplateVersion, CreateTemplate, Envelope, GetTemplateVersions};
use crate::transport::{
    ADD_TEMPLATE_PATH, ADD_TEMPLATE_VERSION_PATH, GET_TEMPLATE_VERSIONS_PATH,
    encode_add_template_version_json, encode_create_template_json,
    encode_get_template_versions_json,
};

use super::http::HttpRequest;
use super::{Msg91Client, Msg91Error};

/// SMS template management on the v5 API.
#[derive(Debug, Clone, Copy)]
pub struct Template<'a> {
    client: &'a Msg91Client,
}

impl<'a> Template<'a> {
    pub(super) fn new(client: &'a Msg91Client) -> Self {
        Self { client }
    }

    /// Submit a new template for approval.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "Template::create",
            skip_all,
            fields(template_name = %request.template_name)
        )
    )]
    pub async fn create(&self, request: CreateTemplate) -> Result<Envelope, Msg91Error> {
        let payload = encode_create_template_json(&request);
        self.post(ADD_TEMPLATE_PATH, payload, "Template creation failed")
            .await
    }

    /// Add a new body to an existing template.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "Template::add_version",
            skip_all,
            fields(template_id = %request.template_id.as_str())
        )
    )]
    pub async fn add_version(&self, request: AddTemplateVersion) -> Result<Envelope, Msg91Error> {
        let payload = encode_add_template_version_json(&request);
        self.post(
            ADD_TEMPLATE_VERSION_PATH,
            payload,
            "Adding template version failed",
        )
        .await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "Template::get_versions",
            skip_all,
            fields(template_id = %request.template_id.as_str())
        )
    )]
    pub async fn get_versions(
        &self,
        request: GetTemplateVersions,
    ) -> Result<Envelope, Msg91Error> {
        let payload = encode_get_template_versions_json(&request);
        self.post(
            GET_TEMPLATE_VERSIONS_PATH,
            payload,
            "Fetching template versions failed",
        )
        .await
    }

    async fn post(
        &self,
        path: &str,
        payload: serde_json::Value,
        default_message: &'static str,
    ) -> Result<Envelope, Msg91Error> {
        let url = self.client.api_endpoint(path, &[])?;
        let request = self
            .client
            .authorized(HttpRequest::post_json(url, payload));
        self.client.dispatch(request, default_message).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::http::HttpMethod;
    use super::super::http::fake::{FakeTransport, header, make_client};
    use super::*;
    use crate::domain::TemplateId;

    #[tokio::test]
    async fn create_posts_template_and_returns_body() {
        let body = r#"{"type":"success","message":"Template created","data":{"id":"template_id_123"}}"#;
        let transport = FakeTransport::respond(200, body);
        let client = make_client(transport.clone());

        let mut request = CreateTemplate::new(
            "Test Template",
            "This is a test template for {{name}}",
            "SENDER",
        );
        request.sms_type = "NORMAL".to_owned();
        let response = client.template().create(request).await.unwrap();

        assert_eq!(
            response.get("data"),
            Some(&json!({ "id": "template_id_123" }))
        );

        let sent = transport.last_request();
        assert_eq!(sent.method, HttpMethod::Post);
        assert!(sent.url.path().ends_with("sms/addTemplate"));
        assert_eq!(header(&sent, "authkey").as_deref(), Some("test_auth_key"));

        let payload = sent.json.unwrap();
        assert_eq!(payload["template_name"], json!("Test Template"));
        assert_eq!(
            payload["template"],
            json!("This is a test template for {{name}}")
        );
        assert_eq!(payload["sender_id"], json!("SENDER"));
        assert_eq!(payload["smsType"], json!("NORMAL"));
    }

    #[tokio::test]
    async fn add_version_and_get_versions_hit_their_endpoints() {
        let transport = FakeTransport::respond(200, r#"{"type":"success"}"#);
        let client = make_client(transport.clone());
        let template_id = TemplateId::new("tpl_9").unwrap();

        client
            .template()
            .add_version(AddTemplateVersion::new(
                template_id.clone(),
                "Hi {{name}}",
                "SENDER",
            ))
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().url.path(),
            "/api/v5/sms/addTemplateVersion"
        );

        client
            .template()
            .get_versions(GetTemplateVersions::new(template_id))
            .await
            .unwrap();
        let sent = transport.last_request();
        assert_eq!(sent.url.path(), "/api/v5/sms/getTemplateVersions");
        assert_eq!(sent.json.unwrap(), json!({ "template_id": "tpl_9" }));
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn create_classifies_validation_marker() {
        let client = make_client(FakeTransport::respond(
            422,
            r#"{"type":"Validation","message":"template_name is required"}"#,
        ));
        let err = client
            .template()
            .create(CreateTemplate::new("", "body", "SENDER"))
            .await
            .unwrap_err();
        assert!(matches!(err, Msg91Error::Validation { status: 422, .. }));
        assert_eq!(err.message(), Some("template_name is required"));
    }

    #[tokio::test]
    async fn create_maps_transport_failure() {
        let client = make_client(FakeTransport::failing("dns error"));
        let err = client
            .template()
            .create(CreateTemplate::new("Welcome", "Hi", "SENDER"))
            .await
            .unwrap_err();
        assert!(matches!(err, Msg91Error::Transport(_)));
    }
}
