use serde_json::{Map, Value};

use crate::domain::{AuthKey, Mobile, ReportQuery, SendSms, SendTemplateSms, TemplateId};

use super::params::{
    apply_extra_json, apply_extra_query, flag, insert_non_empty, push_query_non_empty,
};

pub const SEND_SMS_PATH: &str = "api/v2/sendsms";
pub const FLOW_PATH: &str = "flow";
pub const LOGS_PATH: &str = "report/logs/p/sms";
pub const ANALYTICS_PATH: &str = "report/analytics/p/sms";

/// Payload for the v2 `sendsms` endpoint. The key travels in the body as well as the header.
pub fn encode_send_sms_json(auth: &AuthKey, request: &SendSms) -> Value {
    let mobiles = request
        .mobiles()
        .iter()
        .map(Mobile::as_str)
        .collect::<Vec<_>>()
        .join(",");

    let mut payload = Map::new();
    payload.insert(AuthKey::FIELD.to_owned(), auth.expose().into());
    payload.insert("mobiles".to_owned(), mobiles.into());
    payload.insert("message".to_owned(), request.message.as_str().into());
    payload.insert("sender".to_owned(), request.sender.as_str().into());
    payload.insert("route".to_owned(), request.route.as_str().into());
    payload.insert("response".to_owned(), "json".into());

    if let Some(country) = request.country.as_deref() {
        payload.insert("country".to_owned(), country.into());
    }
    if let Some(flash) = request.flash {
        payload.insert("flash".to_owned(), flag(flash));
    }
    if let Some(unicode) = request.unicode {
        payload.insert("unicode".to_owned(), flag(unicode));
    }
    insert_non_empty(
        &mut payload,
        "scheduledatetime",
        request.scheduled_datetime.as_deref(),
    );
    insert_non_empty(&mut payload, "campaign", request.campaign.as_deref());
    apply_extra_json(&mut payload, &request.extra);

    Value::Object(payload)
}

pub fn encode_send_template_json(request: &SendTemplateSms) -> Value {
    let variables = request
        .variables
        .as_ref()
        .filter(|variables| !variables.is_empty());

    let recipients = request
        .mobiles()
        .iter()
        .map(|mobile| {
            let mut recipient = Map::new();
            recipient.insert(Mobile::FIELD.to_owned(), mobile.as_str().into());
            if let Some(variables) = variables {
                recipient.insert("variables".to_owned(), Value::Object(variables.clone()));
            }
            Value::Object(recipient)
        })
        .collect::<Vec<_>>();

    let mut payload = Map::new();
    payload.insert(
        TemplateId::FIELD.to_owned(),
        request.template_id.as_str().into(),
    );
    payload.insert("recipients".to_owned(), Value::Array(recipients));
    insert_non_empty(&mut payload, "sender", request.sender_id.as_deref());
    if let Some(short_url) = request.short_url {
        payload.insert("short_url".to_owned(), flag(short_url));
    }
    apply_extra_json(&mut payload, &request.extra);

    Value::Object(payload)
}

pub fn encode_logs_json(request: &ReportQuery) -> Value {
    let mut payload = Map::new();
    insert_non_empty(&mut payload, "start_date", request.start_date.as_deref());
    insert_non_empty(&mut payload, "end_date", request.end_date.as_deref());
    apply_extra_json(&mut payload, &request.extra);
    Value::Object(payload)
}

pub fn encode_analytics_query(request: &ReportQuery) -> Vec<(String, String)> {
    let mut params = Vec::new();
    push_query_non_empty(&mut params, "start_date", request.start_date.as_deref());
    push_query_non_empty(&mut params, "end_date", request.end_date.as_deref());
    apply_extra_query(&mut params, &request.extra);
    params
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn auth() -> AuthKey {
        AuthKey::new("test_auth_key").unwrap()
    }

    fn mobile(raw: &str) -> Mobile {
        Mobile::new(raw).unwrap()
    }

    #[test]
    fn send_sms_minimal_payload() {
        let request = SendSms::single(mobile("919XXXXXXXX"), "Test SMS message", "SENDER");
        assert_eq!(
            encode_send_sms_json(&auth(), &request),
            json!({
                "authkey": "test_auth_key",
                "mobiles": "919XXXXXXXX",
                "message": "Test SMS message",
                "sender": "SENDER",
                "route": "4",
                "response": "json",
            })
        );
    }

    #[test]
    fn send_sms_joins_mobiles_with_commas() {
        let request = SendSms::new(
            vec![mobile("919000000001"), mobile("919000000002")],
            "hi",
            "SENDER",
        )
        .unwrap();
        let payload = encode_send_sms_json(&auth(), &request);
        assert_eq!(payload["mobiles"], json!("919000000001,919000000002"));
    }

    #[test]
    fn send_sms_encodes_flags_as_strings_and_skips_unset() {
        let mut request =
            SendSms::single(mobile("919999999999"), "hi", "SENDER").with_extra("DLT_TE_ID", "1207");
        request.country = Some("91".to_owned());
        request.flash = Some(true);
        request.unicode = Some(false);
        request.scheduled_datetime = Some("2026-01-01 10:00:00".to_owned());
        request.campaign = Some(String::new());

        let payload = encode_send_sms_json(&auth(), &request);
        assert_eq!(payload["country"], json!("91"));
        assert_eq!(payload["flash"], json!("1"));
        assert_eq!(payload["unicode"], json!("0"));
        assert_eq!(payload["scheduledatetime"], json!("2026-01-01 10:00:00"));
        assert_eq!(payload["DLT_TE_ID"], json!("1207"));
        assert!(payload.get("campaign").is_none());
    }

    #[test]
    fn template_payload_attaches_variables_to_every_recipient() {
        let mut variables = Map::new();
        variables.insert("name".to_owned(), json!("Asha"));

        let mut request = SendTemplateSms::new(
            TemplateId::new("tpl_1").unwrap(),
            vec![mobile("919000000001"), mobile("919000000002")],
        )
        .unwrap();
        request.variables = Some(variables);
        request.sender_id = Some("SENDER".to_owned());
        request.short_url = Some(false);

        assert_eq!(
            encode_send_template_json(&request),
            json!({
                "template_id": "tpl_1",
                "recipients": [
                    { "mobile": "919000000001", "variables": { "name": "Asha" } },
                    { "mobile": "919000000002", "variables": { "name": "Asha" } },
                ],
                "sender": "SENDER",
                "short_url": "0",
            })
        );
    }

    #[test]
    fn template_payload_omits_empty_variables() {
        let mut request =
            SendTemplateSms::single(TemplateId::new("tpl_1").unwrap(), mobile("919000000001"));
        request.variables = Some(Map::new());
        assert_eq!(
            encode_send_template_json(&request)["recipients"],
            json!([{ "mobile": "919000000001" }])
        );
    }

    #[test]
    fn report_filters_pass_dates_through() {
        let query = ReportQuery::between("2026-01-01", "2026-01-31").with_extra("page", 2);
        assert_eq!(
            encode_logs_json(&query),
            json!({ "start_date": "2026-01-01", "end_date": "2026-01-31", "page": 2 })
        );
        assert_eq!(
            encode_analytics_query(&query),
            vec![
                ("start_date".to_owned(), "2026-01-01".to_owned()),
                ("end_date".to_owned(), "2026-01-31".to_owned()),
                ("page".to_owned(), "2".to_owned()),
            ]
        );
        assert!(encode_analytics_query(&ReportQuery::default()).is_empty());
    }
}
