use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Every API-Football endpoint wraps its payload the same way. `errors` is
/// `[]` on success and an object keyed by error name otherwise.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiRsp<T> {
    #[serde(default)]
    pub errors: Value,
    #[serde(default = "Vec::new")]
    pub response: Vec<T>,
}

impl<T> ApiRsp<T> {
    pub fn has_errors(&self) -> bool {
        match &self.errors {
            Value::Null => false,
            Value::Array(a) => !a.is_empty(),
            Value::Object(o) => !o.is_empty(),
            Value::String(s) => !s.is_empty(),
            _ => true,
        }
    }
}
