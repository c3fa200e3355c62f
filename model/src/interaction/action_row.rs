use super::{Component, ComponentType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An ordered container of interactive components on a message. Rows never nest.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActionRow {
    pub r#type: ComponentType,
    pub components: Vec<Component>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ActionRow {
    pub fn new(components: Vec<Component>) -> ActionRow {
        ActionRow {
            r#type: ComponentType::ActionRow,
            components,
            extra: Map::new(),
        }
    }

    pub fn of<I: IntoIterator<Item = C>, C: Into<Component>>(components: I) -> ActionRow {
        ActionRow::new(components.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
