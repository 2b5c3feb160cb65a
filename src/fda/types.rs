use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One device recall event as returned by the FDA search endpoint.
/// Every field is optional: the upstream schema omits fields freely, and
/// downstream aggregation simply skips records missing the field it needs.
/// Wrongly-typed values are treated the same as absent, so one odd record
/// never aborts the fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct RecallRecord {
    #[serde(default, deserialize_with = "string_or_none")]
    pub recall_number: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub event_date_initiated: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub product_code: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub root_cause_description: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub recalling_firm: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub recall_status: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub product_description: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_str().map(|s| s.to_string())))
}
