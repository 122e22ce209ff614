//! Response normalisation.

use serde_json::Value;

/// Parsed response body. Bodies that are not JSON are kept as text.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    pub fn parse(raw: String) -> Self {
        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(raw),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(v) => Some(v),
            ResponseBody::Text(_) => None,
        }
    }
}

impl std::fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseBody::Json(v) => write!(f, "{v}"),
            ResponseBody::Text(s) => f.write_str(s),
        }
    }
}

/// One completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

const LIST_KEYS: [&str; 3] = ["data", "items", "results"];

/// Pull an action identifier out of a lookup response.
///
/// Tried in order: first element of a top-level array; first element of a
/// `data` / `items` / `results` array; `id` of a `data` object; top-level `id`.
/// An empty list means not found. Numeric ids are stringified.
pub fn extract_id(body: &Value) -> Option<String> {
    if let Value::Array(items) = body {
        return items.first().and_then(id_of);
    }
    for key in LIST_KEYS {
        match body.get(key) {
            Some(Value::Array(items)) => return items.first().and_then(id_of),
            Some(obj @ Value::Object(_)) => {
                if let Some(id) = id_of(obj) {
                    return Some(id);
                }
            }
            _ => {}
        }
    }
    id_of(body)
}

fn id_of(value: &Value) -> Option<String> {
    match value.get("id")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
