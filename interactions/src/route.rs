use model::Snowflake;
use reqwest::Method;
use std::fmt;

/// REST endpoints used to answer and edit interactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    CreateInteractionResponse {
        interaction_id: Snowflake,
        token: Box<str>,
    },
    EditOriginalResponse {
        application_id: Snowflake,
        token: Box<str>,
    },
    DeleteOriginalResponse {
        application_id: Snowflake,
        token: Box<str>,
    },
    EditWebhookMessage {
        application_id: Snowflake,
        token: Box<str>,
        message_id: Snowflake,
    },
}

impl Route {
    pub fn method(&self) -> Method {
        match self {
            Route::CreateInteractionResponse { .. } => Method::POST,
            Route::EditOriginalResponse { .. } | Route::EditWebhookMessage { .. } => Method::PATCH,
            Route::DeleteOriginalResponse { .. } => Method::DELETE,
        }
    }

    /// Path relative to the API base, without a leading slash.
    pub fn path(&self) -> String {
        match self {
            Route::CreateInteractionResponse {
                interaction_id,
                token,
            } => format!("interactions/{}/{}/callback", interaction_id, token),
            Route::EditOriginalResponse {
                application_id,
                token,
            }
            | Route::DeleteOriginalResponse {
                application_id,
                token,
            } => format!("webhooks/{}/{}/messages/@original", application_id, token),
            Route::EditWebhookMessage {
                application_id,
                token,
                message_id,
            } => format!("webhooks/{}/{}/messages/{}", application_id, token, message_id),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Route::CreateInteractionResponse { .. } => "create_interaction_response",
            Route::EditOriginalResponse { .. } => "edit_original_response",
            Route::DeleteOriginalResponse { .. } => "delete_original_response",
            Route::EditWebhookMessage { .. } => "edit_webhook_message",
        }
    }
}

// Tokens are credentials, keep them out of logs.
impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.name())
    }
}
