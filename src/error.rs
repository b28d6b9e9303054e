use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("authorization client has not been initialized")]
    NotInitialized,

    #[error("sign-in callback failed: {0}")]
    Callback(String),

    #[error("OIDC client error: {0}")]
    Oidc(String),
}

pub type AuthResult<T> = Result<T, AuthError>;
