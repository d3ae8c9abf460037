use serde_json::{Map, Value};

use crate::domain::{AddTemplateVersion, CreateTemplate, GetTemplateVersions, TemplateId};

use super::params::apply_extra_json;

pub const ADD_TEMPLATE_PATH: &str = "sms/addTemplate";
pub const ADD_TEMPLATE_VERSION_PATH: &str = "sms/addTemplateVersion";
pub const GET_TEMPLATE_VERSIONS_PATH: &str = "sms/getTemplateVersions";

pub fn encode_create_template_json(request: &CreateTemplate) -> Value {
    let mut payload = Map::new();
    payload.insert(
        "template_name".to_owned(),
        request.template_name.as_str().into(),
    );
    payload.insert("template".to_owned(), request.template_body.as_str().into());
    payload.insert("sender_id".to_owned(), request.sender_id.as_str().into());
    payload.insert("smsType".to_owned(), request.sms_type.as_str().into());
    apply_extra_json(&mut payload, &request.extra);
    Value::Object(payload)
}

pub fn encode_add_template_version_json(request: &AddTemplateVersion) -> Value {
    let mut payload = Map::new();
    payload.insert(
        TemplateId::FIELD.to_owned(),
        request.template_id.as_str().into(),
    );
    payload.insert("template".to_owned(), request.template_body.as_str().into());
    payload.insert("sender_id".to_owned(), request.sender_id.as_str().into());
    apply_extra_json(&mut payload, &request.extra);
    Value::Object(payload)
}

pub fn encode_get_template_versions_json(request: &GetTemplateVersions) -> Value {
    let mut payload = Map::new();
    payload.insert(
        TemplateId::FIELD.to_owned(),
        request.template_id.as_str().into(),
    );
    apply_extra_json(&mut payload, &request.extra);
    Value::Object(payload)
}
