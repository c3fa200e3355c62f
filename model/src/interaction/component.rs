use super::{Button, SelectMenu, TextInput};
use crate::util;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;

/// An interactive element living inside an [`ActionRow`](super::ActionRow).
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Component {
    Button(Button),
    SelectMenu(SelectMenu),
    TextInput(TextInput),
    /// A component type this model does not know. Kept verbatim so edits send it back unchanged.
    Unknown(Value),
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum ComponentType {
    ActionRow = 1,
    Button = 2,
    StringSelect = 3,
    TextInput = 4,
    UserSelect = 5,
    RoleSelect = 6,
    MentionableSelect = 7,
    ChannelSelect = 8,
}

impl TryFrom<u64> for ComponentType {
    type Error = Box<str>;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::ActionRow,
            2 => Self::Button,
            3 => Self::StringSelect,
            4 => Self::TextInput,
            5 => Self::UserSelect,
            6 => Self::RoleSelect,
            7 => Self::MentionableSelect,
            8 => Self::ChannelSelect,
            _ => Err(format!("invalid component type \"{}\"", value).into_boxed_str())?,
        })
    }
}

impl Component {
    /// The custom id used to route interactions. Link and premium buttons have none.
    pub fn id(&self) -> Option<&str> {
        match self {
            Component::Button(button) => button.id(),
            Component::SelectMenu(menu) => Some(&menu.custom_id),
            Component::TextInput(input) => Some(&input.custom_id),
            Component::Unknown(value) => value.get("custom_id").and_then(Value::as_str),
        }
    }

    /// `None` for [`Component::Unknown`].
    pub fn kind(&self) -> Option<ComponentType> {
        match self {
            Component::Button(button) => Some(button.r#type),
            Component::SelectMenu(menu) => Some(menu.r#type),
            Component::TextInput(input) => Some(input.r#type),
            Component::Unknown(_) => None,
        }
    }

    pub fn as_button(&self) -> Option<&Button> {
        match self {
            Component::Button(button) => Some(button),
            _ => None,
        }
    }
}

impl From<Button> for Component {
    fn from(button: Button) -> Self {
        Component::Button(button)
    }
}

impl From<SelectMenu> for Component {
    fn from(menu: SelectMenu) -> Self {
        Component::SelectMenu(menu)
    }
}

impl From<TextInput> for Component {
    fn from(input: TextInput) -> Self {
        Component::TextInput(input)
    }
}

impl<'de> Deserialize<'de> for Component {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let tag = util::read_type_tag(&value, "component").map_err(D::Error::custom)?;
        let component_type = match ComponentType::try_from(tag) {
            Ok(component_type) => component_type,
            Err(_) => return Ok(Component::Unknown(value)),
        };

        let component = match component_type {
            ComponentType::ActionRow => {
                return Err(D::Error::custom("action rows cannot be nested"));
            }
            ComponentType::Button => serde_json::from_value(value).map(Component::Button),
            ComponentType::TextInput => serde_json::from_value(value).map(Component::TextInput),
            ComponentType::StringSelect
            | ComponentType::UserSelect
            | ComponentType::RoleSelect
            | ComponentType::MentionableSelect
            | ComponentType::ChannelSelect => {
                serde_json::from_value(value).map(Component::SelectMenu)
            }
        }
        .map_err(D::Error::custom)?;

        Ok(component)
    }
}
