use model::interaction::{Button, Component, ComponentType};
use std::ops::Deref;
use tracing::debug;

use crate::component_interaction::ComponentInteraction;
use crate::components;
use crate::lifecycle::AcknowledgementState;
use crate::rest_action::RestAction;
use crate::{Error, Result};

/// A component interaction triggered by a button.
pub struct ButtonInteraction {
    inner: ComponentInteraction,
}

impl ButtonInteraction {
    /// The button that was clicked, looked up by custom id in the originating message.
    /// `None` for ephemeral messages.
    pub fn button(&self) -> Option<&Button> {
        self.component().and_then(Component::as_button)
    }

    pub fn component(&self) -> Option<&Component> {
        let message = self.inner.message()?;
        components::find_component(&message.components, self.inner.component_id())
    }

    /// Replaces the clicked button with `new_button`, or removes it entirely when `None`.
    ///
    /// A row left empty by the removal is dropped. If the interaction was already acknowledged
    /// the edit goes through the [hook](ComponentInteraction::hook), otherwise it is sent as the
    /// interaction's update response, which acknowledges it.
    ///
    /// Fails without touching the network with [`Error::EphemeralMessage`] when the originating
    /// message is not available.
    pub fn edit_button(&self, new_button: Option<Button>) -> Result<RestAction<()>> {
        let message = self.inner.message().ok_or(Error::EphemeralMessage)?;

        let mut rows = message.components.clone();
        let matched = components::edit_or_remove(
            &mut rows,
            self.inner.component_id(),
            new_button.map(Component::Button),
        );

        let state = self.inner.acknowledgement_state();
        debug!(
            message_id = %message.id,
            component_id = self.inner.component_id(),
            matched,
            ?state,
            "editing button"
        );

        match state {
            AcknowledgementState::Acknowledged => Ok(self
                .inner
                .hook()
                .edit_message_components_by_id(message.id, rows)?
                .discarding()),
            AcknowledgementState::Unacknowledged => self.inner.edit_components(rows),
        }
    }

    pub fn into_inner(self) -> ComponentInteraction {
        self.inner
    }
}

impl TryFrom<ComponentInteraction> for ButtonInteraction {
    type Error = Error;

    fn try_from(inner: ComponentInteraction) -> Result<Self> {
        match inner.component_type() {
            ComponentType::Button => Ok(ButtonInteraction { inner }),
            other => Error::NotAButton(other).into(),
        }
    }
}

impl Deref for ButtonInteraction {
    type Target = ComponentInteraction;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component_interaction::tests::{component_interaction, interaction_json};
    use crate::lifecycle::Acknowledgement;
    use crate::requester::RecordingRequester;
    use crate::route::Route;
    use model::interaction::{
        ButtonStyle, InteractionResponse, InteractionResponseType, LayoutComponent, MessageComponentInteraction,
    };
    use model::Snowflake;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn button_interaction(value: Value, requester: &Arc<RecordingRequester>) -> ButtonInteraction {
        ButtonInteraction::try_from(component_interaction(value, requester)).unwrap()
    }

    fn acknowledged(value: Value, requester: &Arc<RecordingRequester>) -> ButtonInteraction {
        let data: MessageComponentInteraction = serde_json::from_value(value).unwrap();
        let inner = ComponentInteraction::with_acknowledgement(
            data,
            requester.clone(),
            Acknowledgement::new(AcknowledgementState::Acknowledged),
        );
        ButtonInteraction::try_from(inner).unwrap()
    }

    fn webhook_route() -> Route {
        Route::EditWebhookMessage {
            application_id: Snowflake(200),
            token: Box::from("tok"),
            message_id: Snowflake(500),
        }
    }

    /// The components array as it went over the wire.
    fn sent_json(requester: &RecordingRequester) -> (Route, Value) {
        let (route, body) = requester.calls().remove(0);
        let body = body.unwrap();

        let components = match route {
            Route::CreateInteractionResponse { .. } => {
                let res: InteractionResponse = serde_json::from_value(body.clone()).unwrap();
                assert_eq!(res.kind(), InteractionResponseType::UpdateMessage);
                body["data"]["components"].clone()
            }
            _ => body["components"].clone(),
        };

        (route, components)
    }

    fn sent_rows(requester: &RecordingRequester) -> (Route, Vec<LayoutComponent>) {
        let (route, components) = sent_json(requester);
        (route, serde_json::from_value(components).unwrap())
    }

    fn original_rows() -> Vec<LayoutComponent> {
        let value = interaction_json(0);
        serde_json::from_value(value["message"]["components"].clone()).unwrap()
    }

    fn components(entry: &LayoutComponent) -> &[Component] {
        &entry.as_action_row().unwrap().components
    }

    #[test]
    fn test_button_lookup() {
        let requester = Arc::new(RecordingRequester::default());
        let interaction = button_interaction(interaction_json(0), &requester);

        let button = interaction.button().unwrap();
        assert_eq!(button.label.as_deref(), Some("B"));
        assert_eq!(interaction.component().and_then(Component::id), Some("b"));
    }

    #[test]
    fn test_button_missing_for_ephemeral() {
        let requester = Arc::new(RecordingRequester::default());
        let interaction = button_interaction(interaction_json(64), &requester);

        assert!(interaction.button().is_none());
        assert!(interaction.component().is_none());
    }

    #[test]
    fn test_rejects_non_button() {
        let requester = Arc::new(RecordingRequester::default());
        let mut value = interaction_json(0);
        value["data"]["component_type"] = json!(3);

        let res = ButtonInteraction::try_from(component_interaction(value, &requester));
        assert!(matches!(res, Err(Error::NotAButton(ComponentType::StringSelect))));
    }

    #[tokio::test]
    async fn test_replace_unacknowledged_uses_update_response() {
        let requester = Arc::new(RecordingRequester::default());
        let interaction = button_interaction(interaction_json(0), &requester);

        let new = Button::success("b", "Done").with_disabled(true);
        interaction.edit_button(Some(new.clone())).unwrap().await.unwrap();

        let (route, rows) = sent_rows(&requester);
        assert_eq!(
            route,
            Route::CreateInteractionResponse {
                interaction_id: Snowflake(100),
                token: Box::from("tok"),
            }
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(components(&rows[0])[0], components(&original_rows()[0])[0]);
        assert_eq!(components(&rows[0])[1], Component::Button(new));
        assert_eq!(rows[1], original_rows()[1]);
        assert!(interaction.is_acknowledged());
    }

    #[tokio::test]
    async fn test_replace_acknowledged_uses_hook() {
        let requester = Arc::new(RecordingRequester::default());
        requester.respond_with(Ok(Some(interaction_json(0)["message"].clone())));
        let interaction = acknowledged(interaction_json(0), &requester);

        interaction.edit_button(Some(Button::danger("b", "Stop"))).unwrap().await.unwrap();

        let (route, rows) = sent_rows(&requester);
        assert_eq!(route, webhook_route());
        assert_eq!(components(&rows[0])[1].as_button().map(|b| b.style), Some(ButtonStyle::Danger));
    }

    #[tokio::test]
    async fn test_acknowledged_edit_ignores_response_body() {
        let requester = Arc::new(RecordingRequester::default());
        requester.respond_with(Ok(Some(json!("not a message"))));
        let interaction = acknowledged(interaction_json(0), &requester);

        interaction.edit_button(None).unwrap().await.unwrap();
        assert_eq!(requester.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_drops_empty_row() {
        let requester = Arc::new(RecordingRequester::default());
        let mut value = interaction_json(0);
        value["data"]["custom_id"] = json!("c");
        let interaction = button_interaction(value, &requester);

        interaction.edit_button(None).unwrap().await.unwrap();

        let (_, rows) = sent_rows(&requester);
        assert_eq!(rows, vec![original_rows()[0].clone()]);
    }

    #[tokio::test]
    async fn test_remove_keeps_populated_row() {
        let requester = Arc::new(RecordingRequester::default());
        let interaction = button_interaction(interaction_json(0), &requester);

        interaction.edit_button(None).unwrap().await.unwrap();

        let (_, rows) = sent_rows(&requester);
        assert_eq!(rows.len(), 2);
        assert_eq!(components(&rows[0]).len(), 1);
        assert_eq!(components(&rows[0])[0].id(), Some("a"));
    }

    #[tokio::test]
    async fn test_no_match_sends_original_rows() {
        let requester = Arc::new(RecordingRequester::default());
        let mut value = interaction_json(0);
        value["data"]["custom_id"] = json!("gone");
        let interaction = button_interaction(value, &requester);

        interaction.edit_button(Some(Button::primary("x", "X"))).unwrap().await.unwrap();

        let (_, rows) = sent_rows(&requester);
        assert_eq!(rows, original_rows());
    }

    #[tokio::test]
    async fn test_no_match_acknowledged_sends_original_rows() {
        let requester = Arc::new(RecordingRequester::default());
        let mut value = interaction_json(0);
        value["data"]["custom_id"] = json!("gone");
        let interaction = acknowledged(value, &requester);

        interaction.edit_button(None).unwrap().await.unwrap();

        let (route, rows) = sent_rows(&requester);
        assert_eq!(route, webhook_route());
        assert_eq!(rows, original_rows());
    }

    #[tokio::test]
    async fn test_other_components_are_sent_back_intact() {
        let channel_select = json!({
            "type": 8,
            "custom_id": "ch",
            "channel_types": [0],
            "default_values": [{"id": "9", "type": "channel"}],
            "min_values": 1,
            "max_values": 1,
            "disabled": false
        });

        let requester = Arc::new(RecordingRequester::default());
        let mut value = interaction_json(0);
        value["message"]["components"][0] = json!({"type": 1, "components": [channel_select.clone()]});
        value["data"]["custom_id"] = json!("gone");
        let interaction = button_interaction(value, &requester);

        interaction.edit_button(None).unwrap().await.unwrap();

        let (_, sent) = sent_json(&requester);
        assert_eq!(sent[0]["components"][0], channel_select);
        assert_eq!(sent[0]["components"][0]["channel_types"], json!([0]));
        assert_eq!(sent[0]["components"][0]["default_values"][0]["type"], "channel");
    }

    #[tokio::test]
    async fn test_unknown_layout_survives_edit() {
        let container = json!({
            "type": 17,
            "accent_color": 703487,
            "components": [{"type": 10, "content": "hello"}]
        });

        let requester = Arc::new(RecordingRequester::default());
        let mut value = interaction_json(0);
        value["message"]["components"]
            .as_array_mut()
            .unwrap()
            .insert(1, container.clone());
        let interaction = button_interaction(value, &requester);

        interaction.edit_button(None).unwrap().await.unwrap();

        let (_, sent) = sent_json(&requester);
        assert_eq!(sent.as_array().map(Vec::len), Some(3));
        assert_eq!(sent[1], container);
        assert_eq!(sent[2]["components"][0]["custom_id"], "c");
    }

    #[test]
    fn test_ephemeral_fails_immediately() {
        let requester = Arc::new(RecordingRequester::default());
        let interaction = button_interaction(interaction_json(64), &requester);

        let err = interaction.edit_button(None).unwrap_err();
        assert!(matches!(err, Error::EphemeralMessage));
        assert!(err.is_state_error());
        assert!(requester.calls().is_empty());
        assert!(!interaction.is_acknowledged());
    }

    #[test]
    fn test_missing_message_fails_immediately() {
        let requester = Arc::new(RecordingRequester::default());
        let mut value = interaction_json(0);
        value.as_object_mut().unwrap().remove("message");
        let interaction = button_interaction(value, &requester);

        assert!(matches!(interaction.edit_button(None), Err(Error::EphemeralMessage)));
        assert!(requester.calls().is_empty());
    }
}
