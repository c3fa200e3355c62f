use crate::interaction::{LayoutComponent, MessageCallbackData};
use crate::util;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum InteractionResponse {
    PongResponse(SimpleInteractionResponse),
    ChannelMessageWithSource(MessageResponse),
    DeferredMessageUpdate(SimpleInteractionResponse),
    UpdateMessage(MessageResponse),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimpleInteractionResponse {
    r#type: InteractionResponseType,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageResponse {
    r#type: InteractionResponseType,
    data: MessageCallbackData,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
#[non_exhaustive]
pub enum InteractionResponseType {
    Pong = 1,
    ChannelMessageWithSource = 4,
    DeferredChannelMessageWithSource = 5,
    DeferredMessageUpdate = 6,
    UpdateMessage = 7,
    ApplicationCommandAutoCompleteResult = 8,
    Modal = 9,
}

impl TryFrom<u64> for InteractionResponseType {
    type Error = Box<str>;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::Pong,
            4 => Self::ChannelMessageWithSource,
            5 => Self::DeferredChannelMessageWithSource,
            6 => Self::DeferredMessageUpdate,
            7 => Self::UpdateMessage,
            8 => Self::ApplicationCommandAutoCompleteResult,
            9 => Self::Modal,
            _ => {
                return Err(
                    format!("invalid interaction response type \"{}\"", value).into_boxed_str()
                )
            }
        })
    }
}

impl InteractionResponse {
    pub fn new_pong() -> InteractionResponse {
        InteractionResponse::PongResponse(SimpleInteractionResponse {
            r#type: InteractionResponseType::Pong,
        })
    }

    pub fn new_channel_message_with_source(data: MessageCallbackData) -> InteractionResponse {
        InteractionResponse::ChannelMessageWithSource(MessageResponse {
            r#type: InteractionResponseType::ChannelMessageWithSource,
            data,
        })
    }

    pub fn new_deferred_message_update() -> InteractionResponse {
        InteractionResponse::DeferredMessageUpdate(SimpleInteractionResponse {
            r#type: InteractionResponseType::DeferredMessageUpdate,
        })
    }

    /// Edits the message the component is attached to as the initial response.
    pub fn new_update_message(data: MessageCallbackData) -> InteractionResponse {
        InteractionResponse::UpdateMessage(MessageResponse {
            r#type: InteractionResponseType::UpdateMessage,
            data,
        })
    }

    pub fn new_update_components(components: Vec<LayoutComponent>) -> InteractionResponse {
        InteractionResponse::new_update_message(MessageCallbackData::with_components(components))
    }

    pub fn kind(&self) -> InteractionResponseType {
        match self {
            InteractionResponse::PongResponse(res)
            | InteractionResponse::DeferredMessageUpdate(res) => res.r#type,
            InteractionResponse::ChannelMessageWithSource(res)
            | InteractionResponse::UpdateMessage(res) => res.r#type,
        }
    }

    pub fn data(&self) -> Option<&MessageCallbackData> {
        match self {
            InteractionResponse::ChannelMessageWithSource(res)
            | InteractionResponse::UpdateMessage(res) => Some(&res.data),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for InteractionResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let response_type = util::read_type_tag(&value, "interaction response")
            .and_then(InteractionResponseType::try_from)
            .map_err(D::Error::custom)?;

        let response = match response_type {
            InteractionResponseType::Pong => {
                serde_json::from_value(value).map(InteractionResponse::PongResponse)
            }
            InteractionResponseType::ChannelMessageWithSource => {
                serde_json::from_value(value).map(InteractionResponse::ChannelMessageWithSource)
            }
            InteractionResponseType::DeferredMessageUpdate => {
                serde_json::from_value(value).map(InteractionResponse::DeferredMessageUpdate)
            }
            InteractionResponseType::UpdateMessage => {
                serde_json::from_value(value).map(InteractionResponse::UpdateMessage)
            }
            other => {
                return Err(D::Error::custom(format!(
                    "interaction response type {:?} is not supported",
                    other
                )))
            }
        }
        .map_err(D::Error::custom)?;

        Ok(response)
    }
}
