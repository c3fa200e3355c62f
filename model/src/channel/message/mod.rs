mod message;
pub use message::Message;

mod message_flags;
pub use message_flags::{MessageFlag, MessageFlags};
