use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[repr(u64)]
pub enum MessageFlag {
    Crossposted = 1 << 0,
    IsCrosspost = 1 << 1,
    SuppressEmbeds = 1 << 2,
    SourceMessageDeleted = 1 << 3,
    Urgent = 1 << 4,
    HasThread = 1 << 5,
    Ephemeral = 1 << 6,
    Loading = 1 << 7,
    SuppressNotifications = 1 << 12,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, Eq, PartialEq)]
#[serde(transparent)]
pub struct MessageFlags(pub u64);

impl MessageFlags {
    pub fn has_flag(&self, flag: MessageFlag) -> bool {
        let bit = flag as u64;
        self.0 & bit == bit
    }

    pub fn with_flag(self, flag: MessageFlag) -> MessageFlags {
        MessageFlags(self.0 | flag as u64)
    }
}

impl From<MessageFlag> for MessageFlags {
    fn from(flag: MessageFlag) -> Self {
        MessageFlags(flag as u64)
    }
}

impl fmt::Display for MessageFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
