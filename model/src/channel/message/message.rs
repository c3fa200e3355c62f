use serde::{Deserialize, Serialize};

use super::{MessageFlag, MessageFlags};
use crate::interaction::LayoutComponent;
use crate::Snowflake;
use chrono::{DateTime, Utc};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Message {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Box<str>>,
    pub timestamp: Option<DateTime<Utc>>,
    pub edited_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Snowflake>,
    #[serde(default)]
    pub components: Vec<LayoutComponent>,
    #[serde(default)]
    pub flags: MessageFlags,
}

impl Message {
    /// Ephemeral messages are only visible to the invoking user and cannot be fetched or edited by id.
    pub fn is_ephemeral(&self) -> bool {
        self.flags.has_flag(MessageFlag::Ephemeral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::Component;

    #[test]
    fn test_deserialize_with_components() {
        let json = r#"{
            "id": "1000",
            "channel_id": "2000",
            "content": "pick one",
            "timestamp": "2021-05-28T18:00:00.000000+00:00",
            "edited_timestamp": null,
            "flags": 0,
            "components": [
                {"type": 1, "components": [
                    {"type": 2, "style": 1, "label": "Yes", "custom_id": "yes"},
                    {"type": 2, "style": 5, "label": "Docs", "url": "https://example.com"}
                ]}
            ]
        }"#;

        let message: Message = serde_json::from_str(json).unwrap();
        assert_eq!(message.id, Snowflake(1000));
        assert!(!message.is_ephemeral());
        assert_eq!(message.components.len(), 1);

        let row = message.components[0].as_action_row().unwrap();
        assert!(matches!(&row.components[0], Component::Button(b) if b.custom_id.as_deref() == Some("yes")));
        assert_eq!(row.components[1].id(), None);
    }

    #[test]
    fn test_missing_components_defaults_to_empty() {
        let json = r#"{"id":"1","channel_id":"2","timestamp":null,"edited_timestamp":null,"flags":64}"#;
        let message: Message = serde_json::from_str(json).unwrap();
        assert!(message.components.is_empty());
        assert!(message.is_ephemeral());
    }
}
