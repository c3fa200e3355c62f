use model::interaction::ComponentType;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Cannot update button for ephemeral messages! Discord does not provide enough information to perform the update.")]
    EphemeralMessage,

    #[error("This interaction has already been acknowledged or replied to")]
    AlreadyAcknowledged,

    #[error("Interaction was triggered by a {0:?} component, not a button")]
    NotAButton(ComponentType),

    #[error("Error during HTTP request: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("Error while operating on JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Server returned {0}: {1}")]
    ResponseError(reqwest::StatusCode, String),

    #[error("Error loading config: {0}")]
    ConfigError(#[from] envy::Error),
}

impl Error {
    /// True for errors raised locally, before anything was sent.
    pub fn is_state_error(&self) -> bool {
        matches!(
            self,
            Error::EphemeralMessage | Error::AlreadyAcknowledged | Error::NotAButton(_)
        )
    }
}

impl<T> From<Error> for Result<T> {
    fn from(e: Error) -> Self {
        Err(e)
    }
}
