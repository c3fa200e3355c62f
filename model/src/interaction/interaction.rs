use crate::channel::message::Message;
use crate::interaction::ComponentType;
use crate::util;
use crate::Snowflake;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Serialize, Debug, Clone)]
#[serde(untagged)]
#[non_exhaustive]
pub enum Interaction {
    Ping(Box<PingInteraction>),
    MessageComponent(Box<MessageComponentInteraction>),
    /// An interaction kind this crate does not model. Only the type is kept.
    Unsupported(InteractionType),
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InteractionType {
    Ping = 1,
    ApplicationCommand = 2,
    MessageComponent = 3,
    ApplicationCommandAutoComplete = 4,
    ModalSubmit = 5,
}

impl TryFrom<u64> for InteractionType {
    type Error = Box<str>;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::Ping,
            2 => Self::ApplicationCommand,
            3 => Self::MessageComponent,
            4 => Self::ApplicationCommandAutoComplete,
            5 => Self::ModalSubmit,
            _ => return Err(format!("invalid interaction type \"{}\"", value).into_boxed_str()),
        })
    }
}

impl Interaction {
    pub fn kind(&self) -> InteractionType {
        match self {
            Interaction::Ping(ping) => ping.r#type,
            Interaction::MessageComponent(data) => data.r#type,
            Interaction::Unsupported(kind) => *kind,
        }
    }
}

// ============================================================================
// Ping Interaction
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PingInteraction {
    pub id: Snowflake,
    pub application_id: Snowflake,
    pub r#type: InteractionType,
}

// ============================================================================
// Message Component Interaction
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageComponentInteraction {
    pub id: Snowflake,
    pub application_id: Snowflake,
    pub r#type: InteractionType,
    /// Missing for components on ephemeral messages.
    #[serde(default)]
    pub message: Option<Message>,
    pub data: MessageComponentInteractionData,
    pub guild_id: Option<Snowflake>,
    pub channel_id: Snowflake,
    pub token: Box<str>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageComponentInteractionData {
    pub custom_id: Box<str>,
    pub component_type: ComponentType,
    /// Selected values, only sent for select menus.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<Box<str>>,
}

impl MessageComponentInteraction {
    /// The originating message, or `None` when it is absent or ephemeral. Either way there is
    /// not enough information to edit it by id.
    pub fn available_message(&self) -> Option<&Message> {
        self.message.as_ref().filter(|message| !message.is_ephemeral())
    }
}

impl<'de> Deserialize<'de> for Interaction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let interaction_type = util::read_type_tag(&value, "interaction")
            .and_then(InteractionType::try_from)
            .map_err(D::Error::custom)?;

        let interaction = match interaction_type {
            InteractionType::Ping => serde_json::from_value(value).map(Interaction::Ping),
            InteractionType::MessageComponent => {
                serde_json::from_value(value).map(Interaction::MessageComponent)
            }
            other => Ok(Interaction::Unsupported(other)),
        }
        .map_err(D::Error::custom)?;

        Ok(interaction)
    }
}
