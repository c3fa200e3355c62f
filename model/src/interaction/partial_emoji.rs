use crate::Snowflake;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PartialEmoji {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Snowflake>,
    pub name: Option<Box<str>>,
    #[serde(default)]
    pub animated: bool,
}

impl PartialEmoji {
    pub fn unicode(name: impl Into<Box<str>>) -> PartialEmoji {
        PartialEmoji {
            id: None,
            name: Some(name.into()),
            animated: false,
        }
    }
}
