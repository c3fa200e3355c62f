mod snowflake;
pub use snowflake::Snowflake;

pub mod channel;
pub mod interaction;

mod util;
