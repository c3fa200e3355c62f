use serde::de::Unexpected;
use serde_json::Value;

pub fn to_unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Other("null"),
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Unexpected::Signed(i);
            }

            if let Some(u) = n.as_u64() {
                return Unexpected::Unsigned(u);
            }

            match n.as_f64() {
                Some(f) => Unexpected::Float(f),
                None => Unexpected::Other("number"),
            }
        }
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

/// Reads the integer `type` discriminator shared by components, interactions and responses.
pub fn read_type_tag(value: &Value, what: &str) -> Result<u64, Box<str>> {
    value
        .get("type")
        .and_then(Value::as_u64)
        .ok_or_else(|| format!("{} type was not an integer", what).into_boxed_str())
}
