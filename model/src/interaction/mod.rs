mod interaction;
pub use interaction::{
    Interaction, InteractionType, MessageComponentInteraction, MessageComponentInteractionData,
    PingInteraction,
};

mod interaction_response;
pub use interaction_response::{InteractionResponse, InteractionResponseType};

mod message_callback_data;
pub use message_callback_data::MessageCallbackData;

mod component;
pub use component::{Component, ComponentType};

mod action_row;
pub use action_row::ActionRow;

mod layout_component;
pub use layout_component::LayoutComponent;

mod button;
pub use button::{Button, ButtonStyle};

mod partial_emoji;
pub use partial_emoji::PartialEmoji;

mod select_menu;
pub use select_menu::{SelectDefaultValue, SelectDefaultValueType, SelectMenu, SelectOption};

mod text_input;
pub use text_input::{TextInput, TextInputStyle};
