use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("authorization prompt dismissed by user")]
    UserCancelled,

    #[error("authorization prompt failed: {0}")]
    PromptFailed(String),

    #[error("scope {scope} was not granted")]
    ScopeNotGranted { scope: String },

    #[error("missing required configuration: {key}")]
    ConfigurationMissing { key: String },
}

pub type Result<T> = std::result::Result<T, AuthError>;
