use serde_json::{Map, Value};

use crate::domain::ExtraParams;

/// Set `key`, replacing an earlier value with the same name.
pub fn set_query(params: &mut Vec<(String, String)>, key: &str, value: impl Into<String>) {
    let value = value.into();
    match params.iter_mut().find(|(k, _)| k == key) {
        Some(existing) => existing.1 = value,
        None => params.push((key.to_owned(), value)),
    }
}

/// Skips `None` and empty strings.
pub fn push_query_non_empty(params: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|it| !it.is_empty()) {
        set_query(params, key, value);
    }
}

pub fn apply_extra_query(params: &mut Vec<(String, String)>, extra: &ExtraParams) {
    for (key, value) in extra {
        set_query(params, key, query_value(value));
    }
}

/// Skips `None` and empty strings.
pub fn insert_non_empty(payload: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|it| !it.is_empty()) {
        payload.insert(key.to_owned(), Value::String(value.to_owned()));
    }
}

pub fn apply_extra_json(payload: &mut Map<String, Value>, extra: &ExtraParams) {
    for (key, value) in extra {
        payload.insert(key.clone(), value.clone());
    }
}

/// MSG91 expects boolean switches as `"1"`/`"0"` strings.
pub fn flag(value: bool) -> Value {
    Value::String(if value { "1" } else { "0" }.to_owned())
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(value) => value.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
