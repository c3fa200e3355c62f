use super::{ActionRow, ComponentType};
use crate::util;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A top-level entry of a message's component list.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum LayoutComponent {
    ActionRow(ActionRow),
    /// A layout this model does not know. Kept verbatim so edits send it back unchanged.
    Unknown(Value),
}

impl LayoutComponent {
    pub fn as_action_row(&self) -> Option<&ActionRow> {
        match self {
            LayoutComponent::ActionRow(row) => Some(row),
            LayoutComponent::Unknown(_) => None,
        }
    }

    pub fn as_action_row_mut(&mut self) -> Option<&mut ActionRow> {
        match self {
            LayoutComponent::ActionRow(row) => Some(row),
            LayoutComponent::Unknown(_) => None,
        }
    }
}

impl From<ActionRow> for LayoutComponent {
    fn from(row: ActionRow) -> Self {
        LayoutComponent::ActionRow(row)
    }
}

impl<'de> Deserialize<'de> for LayoutComponent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let tag = util::read_type_tag(&value, "component").map_err(D::Error::custom)?;
        if tag != ComponentType::ActionRow as u64 {
            return Ok(LayoutComponent::Unknown(value));
        }

        serde_json::from_value(value)
            .map(LayoutComponent::ActionRow)
            .map_err(D::Error::custom)
    }
}
