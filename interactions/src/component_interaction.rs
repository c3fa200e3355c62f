use model::channel::message::Message;
use model::interaction::{
    ComponentType, InteractionResponse, LayoutComponent, MessageCallbackData,
    MessageComponentInteraction,
};
use model::Snowflake;
use std::sync::Arc;
use tracing::debug;

use crate::hook::InteractionHook;
use crate::lifecycle::{Acknowledgement, AcknowledgementState};
use crate::requester::Requester;
use crate::rest_action::{discard, RestAction};
use crate::route::Route;
use crate::Result;

/// A click or selection on a message component, bound to the REST layer used to answer it.
pub struct ComponentInteraction {
    data: MessageComponentInteraction,
    requester: Arc<dyn Requester>,
    acknowledgement: Acknowledgement,
}

impl ComponentInteraction {
    pub fn new(data: MessageComponentInteraction, requester: Arc<dyn Requester>) -> Self {
        Self::with_acknowledgement(data, requester, Acknowledgement::default())
    }

    pub fn with_acknowledgement(
        data: MessageComponentInteraction,
        requester: Arc<dyn Requester>,
        acknowledgement: Acknowledgement,
    ) -> Self {
        Self {
            data,
            requester,
            acknowledgement,
        }
    }

    pub fn id(&self) -> Snowflake {
        self.data.id
    }

    pub fn component_id(&self) -> &str {
        &self.data.data.custom_id
    }

    pub fn component_type(&self) -> ComponentType {
        self.data.data.component_type
    }

    /// Values picked in a select menu. Empty for buttons.
    pub fn values(&self) -> &[Box<str>] {
        &self.data.data.values
    }

    /// The message the component is attached to. `None` for ephemeral messages.
    pub fn message(&self) -> Option<&Message> {
        self.data.available_message()
    }

    pub fn data(&self) -> &MessageComponentInteraction {
        &self.data
    }

    pub fn acknowledgement_state(&self) -> AcknowledgementState {
        self.acknowledgement.state()
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledgement_state() == AcknowledgementState::Acknowledged
    }

    pub fn hook(&self) -> InteractionHook {
        InteractionHook::new(
            Arc::clone(&self.requester),
            self.data.application_id,
            self.data.token.clone(),
        )
    }

    /// Answers the interaction by editing the originating message in place.
    pub fn edit_message(&self, data: MessageCallbackData) -> Result<RestAction<()>> {
        self.respond(InteractionResponse::new_update_message(data))
    }

    /// Answers the interaction by replacing the originating message's action rows.
    pub fn edit_components(&self, components: Vec<LayoutComponent>) -> Result<RestAction<()>> {
        self.respond(InteractionResponse::new_update_components(components))
    }

    /// Acknowledges the interaction without changing the message yet. Follow up through
    /// [`ComponentInteraction::hook`].
    pub fn defer_edit(&self) -> Result<RestAction<()>> {
        self.respond(InteractionResponse::new_deferred_message_update())
    }

    fn respond(&self, response: InteractionResponse) -> Result<RestAction<()>> {
        let route = Route::CreateInteractionResponse {
            interaction_id: self.data.id,
            token: self.data.token.clone(),
        };

        debug!(interaction_id = %self.data.id, kind = ?response.kind(), "preparing interaction callback");

        let acknowledgement = self.acknowledgement.clone();
        let body = serde_json::to_value(response)?;

        Ok(
            RestAction::new(Arc::clone(&self.requester), route, Some(body), discard)
                .with_guard(move || acknowledgement.acknowledge()),
        )
    }
}
