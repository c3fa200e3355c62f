use crate::channel::message::MessageFlags;
use crate::interaction::LayoutComponent;
use serde::{Deserialize, Serialize};

/// Message body shared by interaction callbacks and webhook edits. Absent fields are left
/// untouched by the platform, so everything is optional.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MessageCallbackData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Box<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<LayoutComponent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<MessageFlags>,
}

impl MessageCallbackData {
    pub fn with_content(content: impl Into<Box<str>>) -> MessageCallbackData {
        MessageCallbackData {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn with_components(components: Vec<LayoutComponent>) -> MessageCallbackData {
        MessageCallbackData {
            components: Some(components),
            ..Default::default()
        }
    }
}
