use model::interaction::{
    ComponentType, Interaction, InteractionType, MessageComponentInteraction, PingInteraction,
};
use std::sync::Arc;
use tracing::debug;

use crate::button_interaction::ButtonInteraction;
use crate::component_interaction::ComponentInteraction;
use crate::requester::{HttpRequester, Requester};
use crate::{Config, Result};

/// An incoming interaction, bound to the client's REST layer where it can be answered.
pub enum ReceivedInteraction {
    Ping(Box<PingInteraction>),
    Button(ButtonInteraction),
    Component(ComponentInteraction),
    Unsupported(InteractionType),
}

#[derive(Clone)]
pub struct InteractionClient {
    requester: Arc<dyn Requester>,
}

impl InteractionClient {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::with_requester(Arc::new(HttpRequester::new(config)?)))
    }

    pub fn from_env() -> Result<Self> {
        Self::new(Config::load()?)
    }

    pub fn with_requester(requester: Arc<dyn Requester>) -> Self {
        Self { requester }
    }

    /// Decodes a raw interaction payload as delivered by the gateway or the interactions endpoint.
    pub fn parse(&self, body: &[u8]) -> Result<ReceivedInteraction> {
        let interaction: Interaction = serde_json::from_slice(body)?;
        debug!(kind = ?interaction.kind(), "received interaction");

        Ok(match interaction {
            Interaction::Ping(ping) => ReceivedInteraction::Ping(ping),
            Interaction::MessageComponent(data) => {
                if data.data.component_type == ComponentType::Button {
                    ReceivedInteraction::Button(self.button_interaction(*data)?)
                } else {
                    ReceivedInteraction::Component(self.component_interaction(*data))
                }
            }
            other => ReceivedInteraction::Unsupported(other.kind()),
        })
    }

    pub fn component_interaction(&self, data: MessageComponentInteraction) -> ComponentInteraction {
        ComponentInteraction::new(data, Arc::clone(&self.requester))
    }

    pub fn button_interaction(&self, data: MessageComponentInteraction) -> Result<ButtonInteraction> {
        ButtonInteraction::try_from(self.component_interaction(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component_interaction::tests::interaction_json;
    use crate::requester::RecordingRequester;
    use serde_json::json;

    fn client() -> (InteractionClient, Arc<RecordingRequester>) {
        let requester = Arc::new(RecordingRequester::default());
        (InteractionClient::with_requester(requester.clone()), requester)
    }

    #[test]
    fn test_parse_ping() {
        let (client, _) = client();
        let body = br#"{"id": "1", "application_id": "2", "type": 1}"#;

        assert!(matches!(client.parse(body).unwrap(), ReceivedInteraction::Ping(_)));
    }

    #[test]
    fn test_parse_button() {
        let (client, _) = client();
        let body = serde_json::to_vec(&interaction_json(0)).unwrap();

        match client.parse(&body).unwrap() {
            ReceivedInteraction::Button(button) => assert_eq!(button.component_id(), "b"),
            _ => panic!("expected a button interaction"),
        }
    }

    #[test]
    fn test_parse_select() {
        let (client, _) = client();
        let mut value = interaction_json(0);
        value["data"] = json!({"custom_id": "menu", "component_type": 3, "values": ["x"]});
        let body = serde_json::to_vec(&value).unwrap();

        match client.parse(&body).unwrap() {
            ReceivedInteraction::Component(component) => {
                assert_eq!(component.component_type(), ComponentType::StringSelect);
                assert_eq!(component.values(), &[Box::<str>::from("x")]);
            }
            _ => panic!("expected a component interaction"),
        }
    }

    #[test]
    fn test_parse_unsupported_and_garbage() {
        let (client, _) = client();

        let body = br#"{"id": "1", "application_id": "2", "type": 5}"#;
        assert!(matches!(
            client.parse(body).unwrap(),
            ReceivedInteraction::Unsupported(InteractionType::ModalSubmit)
        ));

        assert!(client.parse(b"not json").is_err());
    }

    #[tokio::test]
    async fn test_shared_requester() {
        let (client, requester) = client();
        let body = serde_json::to_vec(&interaction_json(0)).unwrap();

        if let ReceivedInteraction::Button(button) = client.parse(&body).unwrap() {
            button.edit_button(None).unwrap().await.unwrap();
        }

        assert_eq!(requester.calls().len(), 1);
    }
}
