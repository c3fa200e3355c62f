mod config;
pub use config::Config;

mod error;
pub use error::{Error, Result};

pub mod components;

mod lifecycle;
pub use lifecycle::{Acknowledgement, AcknowledgementState};

mod route;
pub use route::Route;

mod requester;
pub use requester::{HttpRequester, Requester};

mod rest_action;
pub use rest_action::RestAction;

mod hook;
pub use hook::InteractionHook;

mod component_interaction;
pub use component_interaction::ComponentInteraction;

mod button_interaction;
pub use button_interaction::ButtonInteraction;

mod client;
pub use client::{InteractionClient, ReceivedInteraction};
