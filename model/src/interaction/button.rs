use super::{ComponentType, PartialEmoji};
use crate::Snowflake;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub r#type: ComponentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Box<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<Box<str>>,
    pub style: ButtonStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<PartialEmoji>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Box<str>>,
    #[serde(default = "bool::default")]
    pub disabled: bool,
    /// Fields this model does not know about, sent back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum ButtonStyle {
    Primary = 1,
    Secondary = 2,
    Success = 3,
    Danger = 4,
    Link = 5,
    Premium = 6,
}

impl Button {
    /// Creates an interactive button. Link and premium buttons carry no custom id, use
    /// [`Button::link`] for the former.
    pub fn new(style: ButtonStyle, custom_id: impl Into<Box<str>>, label: impl Into<Box<str>>) -> Button {
        Button {
            r#type: ComponentType::Button,
            label: Some(label.into()),
            custom_id: Some(custom_id.into()),
            style,
            emoji: None,
            sku_id: None,
            url: None,
            disabled: false,
            extra: Map::new(),
        }
    }

    pub fn primary(custom_id: impl Into<Box<str>>, label: impl Into<Box<str>>) -> Button {
        Button::new(ButtonStyle::Primary, custom_id, label)
    }

    pub fn secondary(custom_id: impl Into<Box<str>>, label: impl Into<Box<str>>) -> Button {
        Button::new(ButtonStyle::Secondary, custom_id, label)
    }

    pub fn success(custom_id: impl Into<Box<str>>, label: impl Into<Box<str>>) -> Button {
        Button::new(ButtonStyle::Success, custom_id, label)
    }

    pub fn danger(custom_id: impl Into<Box<str>>, label: impl Into<Box<str>>) -> Button {
        Button::new(ButtonStyle::Danger, custom_id, label)
    }

    pub fn link(url: impl Into<Box<str>>, label: impl Into<Box<str>>) -> Button {
        Button {
            r#type: ComponentType::Button,
            label: Some(label.into()),
            custom_id: None,
            style: ButtonStyle::Link,
            emoji: None,
            sku_id: None,
            url: Some(url.into()),
            disabled: false,
            extra: Map::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<Box<str>>) -> Button {
        self.label = Some(label.into());
        self
    }

    pub fn with_emoji(mut self, emoji: PartialEmoji) -> Button {
        self.emoji = Some(emoji);
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Button {
        self.disabled = disabled;
        self
    }

    /// Custom id, if this is not a link or premium button.
    pub fn id(&self) -> Option<&str> {
        self.custom_id.as_deref()
    }
}
