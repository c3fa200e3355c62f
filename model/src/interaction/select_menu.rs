use super::{ComponentType, PartialEmoji};
use crate::Snowflake;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Covers every select kind; only string selects carry `options`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SelectMenu {
    pub r#type: ComponentType,
    pub custom_id: Box<str>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    /// Channel types offered by a channel select.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channel_types: Vec<u8>,
    /// Preselected entries of the auto-populated selects.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_values: Vec<SelectDefaultValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<Box<str>>,
    /// 0-25
    #[serde(default = "one")]
    pub min_values: u8,
    /// 1-25
    #[serde(default = "one")]
    pub max_values: u8,
    #[serde(default = "Default::default")]
    pub disabled: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub label: Box<str>,
    pub value: Box<str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Box<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<PartialEmoji>,
    #[serde(default)]
    pub default: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SelectDefaultValue {
    pub id: Snowflake,
    pub r#type: SelectDefaultValueType,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SelectDefaultValueType {
    User,
    Role,
    Channel,
}

fn one() -> u8 {
    1
}
