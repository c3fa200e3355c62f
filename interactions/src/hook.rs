use model::channel::message::Message;
use model::interaction::{LayoutComponent, MessageCallbackData};
use model::Snowflake;
use std::fmt;
use std::sync::Arc;

use crate::requester::Requester;
use crate::rest_action::{decode_json, discard, RestAction};
use crate::route::Route;
use crate::Result;

/// Follow-up handle for an interaction, used once the initial response has been sent.
///
/// Edits go through the interaction webhook and are authorised by the interaction token.
#[derive(Clone)]
pub struct InteractionHook {
    requester: Arc<dyn Requester>,
    application_id: Snowflake,
    token: Box<str>,
}

impl InteractionHook {
    pub fn new(requester: Arc<dyn Requester>, application_id: Snowflake, token: Box<str>) -> Self {
        Self {
            requester,
            application_id,
            token,
        }
    }

    pub fn application_id(&self) -> Snowflake {
        self.application_id
    }

    pub fn edit_message_by_id(&self, message_id: Snowflake, data: MessageCallbackData) -> Result<RestAction<Message>> {
        let route = Route::EditWebhookMessage {
            application_id: self.application_id,
            token: self.token.clone(),
            message_id,
        };

        Ok(RestAction::new(
            Arc::clone(&self.requester),
            route,
            Some(serde_json::to_value(data)?),
            decode_json,
        ))
    }

    /// Replaces every action row on the message with `components`.
    pub fn edit_message_components_by_id(
        &self,
        message_id: Snowflake,
        components: Vec<LayoutComponent>,
    ) -> Result<RestAction<Message>> {
        self.edit_message_by_id(message_id, MessageCallbackData::with_components(components))
    }

    pub fn edit_original(&self, data: MessageCallbackData) -> Result<RestAction<Message>> {
        let route = Route::EditOriginalResponse {
            application_id: self.application_id,
            token: self.token.clone(),
        };

        Ok(RestAction::new(
            Arc::clone(&self.requester),
            route,
            Some(serde_json::to_value(data)?),
            decode_json,
        ))
    }

    pub fn edit_original_components(&self, components: Vec<LayoutComponent>) -> Result<RestAction<Message>> {
        self.edit_original(MessageCallbackData::with_components(components))
    }

    pub fn delete_original(&self) -> RestAction<()> {
        let route = Route::DeleteOriginalResponse {
            application_id: self.application_id,
            token: self.token.clone(),
        };

        RestAction::new(Arc::clone(&self.requester), route, None, discard)
    }
}

impl fmt::Debug for InteractionHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionHook")
            .field("application_id", &self.application_id)
            .finish_non_exhaustive()
    }
}
